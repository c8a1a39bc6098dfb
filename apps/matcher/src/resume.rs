//! Resume Parser — raw PDF bytes in, normalized text out.
//!
//! A corrupt or unreadable document is not a pipeline failure: it yields an
//! empty string here and surfaces downstream as a degraded profile.

use tracing::warn;

/// Extracts page text in document order, joined by single spaces.
///
/// All parser state lives inside the call; nothing is held across it.
pub fn parse_resume(document_bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(document_bytes) {
        Ok(text) => normalize_whitespace(&text),
        Err(e) => {
            warn!("Resume PDF unreadable, continuing with empty text: {e}");
            String::new()
        }
    }
}

/// Collapses all whitespace runs (including page breaks) to single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
