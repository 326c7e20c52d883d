//! Upload text extraction. PDFs go through `pdf-extract` on the blocking pool;
//! anything else must be UTF-8 text.

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("file is neither a PDF nor UTF-8 text")]
    NotText,
}

const PDF_MAGIC: &[u8] = b"%PDF-";

pub fn is_pdf(file_name: Option<&str>, content_type: Option<&str>, data: &[u8]) -> bool {
    content_type == Some("application/pdf")
        || file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        || data.starts_with(PDF_MAGIC)
}

pub async fn extract_text(
    file_name: Option<&str>,
    content_type: Option<&str>,
    data: Bytes,
) -> Result<String, ExtractError> {
    if is_pdf(file_name, content_type, &data) {
        // pdf-extract is CPU-bound and panics on some malformed files; the
        // blocking task contains both.
        return tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| ExtractError::Pdf(e.to_string()))
        })
        .await
        .map_err(|e| ExtractError::Pdf(format!("extraction aborted: {e}")))?;
    }

    String::from_utf8(data.to_vec()).map_err(|_| ExtractError::NotText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_detection() {
        assert!(is_pdf(None, Some("application/pdf"), b""));
        assert!(is_pdf(Some("CV.PDF"), None, b""));
        assert!(is_pdf(None, None, b"%PDF-1.7\n..."));
        assert!(!is_pdf(Some("cv.txt"), Some("text/plain"), b"Jane Doe"));
    }

    #[tokio::test]
    async fn test_plain_text_passes_through() {
        let text = extract_text(Some("cv.txt"), Some("text/plain"), Bytes::from("Jane Doe\nEngineer"))
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[tokio::test]
    async fn test_binary_non_pdf_rejected() {
        let err = extract_text(Some("cv.bin"), None, Bytes::from_static(&[0xff, 0xfe, 0x00]))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::NotText));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_an_error() {
        let result = extract_text(Some("cv.pdf"), None, Bytes::from_static(b"not really a pdf")).await;
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }
}
