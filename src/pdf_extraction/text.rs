// Raw text extraction, page by page
use lopdf::Document;

use super::lopdf_helper::with_pdf;
use crate::types::{Result, SourceDocument, TriageError};

/// Concatenates the text of every page in document order, with nothing
/// inserted between pages. A page that yields no text contributes "".
pub fn extract_text(content: &[u8]) -> lopdf::Result<String> {
    with_pdf(content, collect_pages)
}

/// Same as [`extract_text`], tagging failures with the document's filename.
pub fn extract_document(document: &SourceDocument) -> Result<String> {
    extract_text(&document.content).map_err(|e| TriageError::Extraction {
        filename: document.filename.clone(),
        message: e.to_string(),
    })
}

fn collect_pages(document: &Document) -> String {
    let pages = document.get_pages();
    let mut text = String::new();
    for &page_number in pages.keys() {
        match document.extract_text(&[page_number]) {
            // lopdf ends every text object with '\n'; pages join with nothing
            Ok(page_text) => text.push_str(page_text.strip_suffix('\n').unwrap_or(&page_text)),
            Err(e) => {
                tracing::debug!(page = page_number, error = %e, "page has no extractable text");
            }
        }
    }
    tracing::debug!(pages = pages.len(), chars = text.len(), "text extracted");
    text
}
