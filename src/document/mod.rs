//! Uploaded-document handling: validation, content-type resolution, and
//! text extraction. A document that cannot be validated or read fails its
//! own analysis call, never the service.

use thiserror::Error;

use crate::models::FileInfo;

/// Maximum accepted upload size (10 MB).
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("No file content in upload")]
    Empty,

    #[error("File size too large. Maximum size is 10MB")]
    TooLarge(usize),

    #[error("Unsupported file type: {0}. Supported types: PDF, JPEG, PNG, TIFF, BMP, plain text")]
    UnsupportedType(String),

    #[error("No text could be extracted from the document")]
    NoText,

    #[error("Scanned images need an OCR collaborator, which is not configured")]
    OcrUnavailable,

    #[error("Failed to extract text: {0}")]
    Extraction(String),
}

/// Resolved document type. Everything else is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Jpeg,
    Png,
    Tiff,
    Bmp,
    PlainText,
}

impl DocumentKind {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Tiff => "image/tiff",
            Self::Bmp => "image/bmp",
            Self::PlainText => "text/plain",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Jpeg | Self::Png | Self::Tiff | Self::Bmp)
    }

    fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or("").trim();
        match essence {
            "application/pdf" => Some(Self::Pdf),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/tiff" => Some(Self::Tiff),
            "image/bmp" => Some(Self::Bmp),
            "text/plain" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Detect from magic bytes.
    fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"%PDF-") {
            Some(Self::Pdf)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(Self::Png)
        } else if bytes.starts_with(b"II*\x00") || bytes.starts_with(b"MM\x00*") {
            Some(Self::Tiff)
        } else if bytes.starts_with(b"BM") {
            Some(Self::Bmp)
        } else {
            None
        }
    }

    fn from_filename(filename: &str) -> Option<Self> {
        let mime = mime_guess::from_path(filename).first()?;
        Self::from_content_type(mime.essence_str())
    }
}

/// Resolve a document's kind: declared content type first, then magic
/// bytes, then the filename extension.
pub fn detect_kind(
    bytes: &[u8],
    content_type: Option<&str>,
    filename: &str,
) -> Option<DocumentKind> {
    content_type
        .and_then(DocumentKind::from_content_type)
        .or_else(|| DocumentKind::from_magic(bytes))
        .or_else(|| DocumentKind::from_filename(filename))
}

/// Validate an upload and resolve its metadata.
pub fn validate(
    bytes: &[u8],
    content_type: Option<&str>,
    filename: &str,
) -> Result<(DocumentKind, FileInfo), DocumentError> {
    if bytes.is_empty() {
        return Err(DocumentError::Empty);
    }
    if bytes.len() > MAX_DOCUMENT_BYTES {
        return Err(DocumentError::TooLarge(bytes.len()));
    }

    let kind = detect_kind(bytes, content_type, filename).ok_or_else(|| {
        DocumentError::UnsupportedType(content_type.unwrap_or("unknown").to_string())
    })?;

    let info = FileInfo {
        name: filename.to_string(),
        content_type: kind.content_type().to_string(),
        size_bytes: bytes.len(),
    };

    Ok((kind, info))
}

/// Extract analyzable text from a validated document.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, DocumentError> {
    let text = match kind {
        DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DocumentError::Extraction(e.to_string()))?,
        DocumentKind::Jpeg | DocumentKind::Png | DocumentKind::Tiff | DocumentKind::Bmp => {
            return Err(DocumentError::OcrUnavailable);
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(DocumentError::NoText);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_content_type_wins() {
        let kind = detect_kind(b"whatever", Some("application/pdf"), "note.txt");
        assert_eq!(kind, Some(DocumentKind::Pdf));
    }

    #[test]
    fn magic_bytes_detected_without_declared_type() {
        assert_eq!(detect_kind(b"%PDF-1.7 ...", None, "blob"), Some(DocumentKind::Pdf));
        assert_eq!(
            detect_kind(&[0xFF, 0xD8, 0xFF, 0xE0], None, "blob"),
            Some(DocumentKind::Jpeg),
        );
        assert_eq!(detect_kind(b"BM1234", None, "blob"), Some(DocumentKind::Bmp));
    }

    #[test]
    fn filename_extension_is_the_last_resort() {
        assert_eq!(
            detect_kind(b"take aspirin", None, "prescription.txt"),
            Some(DocumentKind::PlainText),
        );
        assert_eq!(detect_kind(b"take aspirin", None, "scan.tiff"), Some(DocumentKind::Tiff));
    }

    #[test]
    fn undetectable_type_is_none() {
        assert_eq!(detect_kind(&[0x00, 0x01], None, "mystery.bin"), None);
    }

    #[test]
    fn validate_rejects_empty_upload() {
        assert!(matches!(
            validate(b"", Some("text/plain"), "a.txt"),
            Err(DocumentError::Empty),
        ));
    }

    #[test]
    fn validate_rejects_oversize_upload() {
        let bytes = vec![b'a'; MAX_DOCUMENT_BYTES + 1];
        assert!(matches!(
            validate(&bytes, Some("text/plain"), "a.txt"),
            Err(DocumentError::TooLarge(_)),
        ));
    }

    #[test]
    fn validate_rejects_unsupported_type() {
        let err = validate(&[0x00, 0x01, 0x02], Some("application/zip"), "a.zip").unwrap_err();
        assert!(err.to_string().contains("application/zip"));
    }

    #[test]
    fn validate_resolves_file_info() {
        let (kind, info) = validate(b"take aspirin", None, "rx.txt").unwrap();
        assert_eq!(kind, DocumentKind::PlainText);
        assert_eq!(info.content_type, "text/plain");
        assert_eq!(info.size_bytes, 12);
        assert_eq!(info.name, "rx.txt");
    }

    #[test]
    fn plain_text_extraction_trims() {
        let text = extract_text(DocumentKind::PlainText, b"  aspirin 100mg \n").unwrap();
        assert_eq!(text, "aspirin 100mg");
    }

    #[test]
    fn blank_text_is_an_error() {
        assert!(matches!(
            extract_text(DocumentKind::PlainText, b"  \n \t"),
            Err(DocumentError::NoText),
        ));
    }

    #[test]
    fn image_extraction_reports_missing_ocr() {
        assert!(matches!(
            extract_text(DocumentKind::Jpeg, &[0xFF, 0xD8, 0xFF]),
            Err(DocumentError::OcrUnavailable),
        ));
    }

    #[test]
    fn garbage_pdf_reports_extraction_failure() {
        assert!(matches!(
            extract_text(DocumentKind::Pdf, b"%PDF-1.7 not really a pdf"),
            Err(DocumentError::Extraction(_)) | Err(DocumentError::NoText),
        ));
    }
}
