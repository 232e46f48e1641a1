//! Reads uploaded documents into plain UTF-8 text.

use lopdf::Document;

use crate::errors::{AppError, AppResult};

/// Extracts plain text from an uploaded `.txt` or `.pdf` file. The
/// extension match is case-insensitive; any other extension is a hard
/// error. A document whose extracted text trims to empty is rejected,
/// since there is nothing to build a quiz from.
pub fn read_document(file_name: &str, bytes: &[u8]) -> AppResult<String> {
    let lower = file_name.to_ascii_lowercase();

    let text = if lower.ends_with(".pdf") {
        read_pdf(bytes)?
    } else if lower.ends_with(".txt") {
        String::from_utf8(bytes.to_vec()).map_err(|err| {
            AppError::ExtractionFailure(format!("text file is not valid UTF-8: {}", err))
        })?
    } else {
        return Err(AppError::UnsupportedFormat(
            "only .pdf and .txt files are supported".to_string(),
        ));
    };

    if text.trim().is_empty() {
        return Err(AppError::ExtractionFailure(
            "document contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}

/// Best-effort page-by-page extraction: pages that fail are skipped and
/// the surviving page texts are concatenated with no separator. Only a
/// document that cannot be loaded at all is an error.
fn read_pdf(bytes: &[u8]) -> AppResult<String> {
    let document = Document::load_mem(bytes)
        .map_err(|err| AppError::ExtractionFailure(format!("error reading the PDF file: {}", err)))?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(err) => {
                log::debug!(
                    "skipping page {}: text extraction failed: {}",
                    page_number,
                    err
                );
            }
        }
    }

    Ok(text)
}
