//! File and stdout output

use crate::error::CliError;
use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where the formatted transcript goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output, selected with `-`
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret a path argument, treating `-` as stdout
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path.to_path_buf())
        }
    }

    /// Human-readable destination name
    pub fn display_name(&self) -> String {
        match self {
            OutputTarget::Stdout => "<stdout>".to_string(),
            OutputTarget::File(path) => path.display().to_string(),
        }
    }
}

/// Write content to the target, creating parent directories as needed
pub fn write_output(target: &OutputTarget, content: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| {
                    CliError::OutputError(format!(
                        "cannot create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
            fs::write(path, content).map_err(|e| {
                CliError::OutputError(format!("cannot write {}: {e}", path.display()))
            })?;
            log::info!("Wrote {} bytes to {}", content.len(), path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dash_means_stdout() {
        assert_eq!(
            OutputTarget::from_path(Path::new("-")),
            OutputTarget::Stdout
        );
        assert_eq!(
            OutputTarget::from_path(Path::new("out.html")),
            OutputTarget::File(PathBuf::from("out.html"))
        );
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/out.html");

        write_output(&OutputTarget::File(path.clone()), "<p>x</p>\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>x</p>\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.html");
        fs::write(&path, "old content that is longer").unwrap();

        write_output(&OutputTarget::File(path.clone()), "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_into_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let target = OutputTarget::File(temp_dir.path().to_path_buf());

        let err = write_output(&target, "x").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::OutputError(_))
        ));
    }
}
