//! Plain-text extraction for uploaded résumé files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("File is not valid UTF-8 text")]
    NotText,

    #[error("Unsupported file type: {0}")]
    Unsupported(String),
}

/// Word formats are accepted by the upload form's picker but carry no plain text.
const UNSUPPORTED_EXTENSIONS: [&str; 2] = [".doc", ".docx"];

/// Returns the text content of an uploaded file.
///
/// PDFs are detected by extension, content type or magic bytes; anything
/// else must decode as UTF-8.
pub fn extract_text(
    file_name: Option<&str>,
    content_type: Option<&str>,
    data: &[u8],
) -> Result<String, ExtractError> {
    let lower_name = file_name.map(str::to_ascii_lowercase).unwrap_or_default();

    if is_pdf(&lower_name, content_type, data) {
        return pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()));
    }

    if let Some(ext) = UNSUPPORTED_EXTENSIONS
        .iter()
        .find(|ext| lower_name.ends_with(*ext))
    {
        return Err(ExtractError::Unsupported(ext.to_string()));
    }

    String::from_utf8(data.to_vec()).map_err(|_| ExtractError::NotText)
}

fn is_pdf(lower_name: &str, content_type: Option<&str>, data: &[u8]) -> bool {
    lower_name.ends_with(".pdf")
        || content_type == Some("application/pdf")
        || data.starts_with(b"%PDF-")
}
