// PDF extraction module
pub mod lopdf_helper;
pub mod text;

pub use text::{extract_document, extract_text};
