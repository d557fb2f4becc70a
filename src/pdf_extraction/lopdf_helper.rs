// lopdf helper - Pure Rust PDF operations over in-memory buffers
use lopdf::Document;

/// Parse a PDF held in memory
pub fn load_pdf(content: &[u8]) -> lopdf::Result<Document> {
    Document::load_mem(content)
}

/// Execute an operation with a parsed PDF document
pub fn with_pdf<F, R>(content: &[u8], f: F) -> lopdf::Result<R>
where
    F: FnOnce(&Document) -> R,
{
    let document = load_pdf(content)?;
    Ok(f(&document))
}
