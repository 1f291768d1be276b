//! Rendering of segmented entries

pub mod html;

pub use html::{strip_blank_lines, HtmlRenderer};
