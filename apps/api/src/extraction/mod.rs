//! Text Extractor — turns an uploaded résumé or job description into plain text.
//!
//! Routing is by `DocumentKind`; each binary format lives in its own module.
//! Plain text bypasses parsing and is decoded as UTF-8.

mod docx;
mod pdf;

#[cfg(test)]
pub(crate) use pdf::build_pdf;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Hard parse failures. An empty-but-valid document is `Ok("")`, not an error.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("extraction aborted: {0}")]
    Aborted(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Picks a kind from the upload's declared MIME type, falling back to the
    /// file extension when the browser sent something generic.
    pub fn detect(
        content_type: Option<&str>,
        filename: Option<&str>,
    ) -> Result<Self, ExtractionError> {
        let mime = content_type
            .map(|c| c.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            "application/pdf" => return Ok(Self::Pdf),
            DOCX_MIME => return Ok(Self::Docx),
            "text/plain" | "text/markdown" => return Ok(Self::PlainText),
            _ => {}
        }

        let extension = filename
            .and_then(|f| f.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("docx") => Ok(Self::Docx),
            Some("txt") | Some("md") => Ok(Self::PlainText),
            _ => Err(ExtractionError::UnsupportedFormat(
                filename
                    .map(String::from)
                    .or_else(|| content_type.map(String::from))
                    .unwrap_or_else(|| "unknown".to_string()),
            )),
        }
    }
}

/// An uploaded payload plus its declared kind. Lives for one analysis only.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: DocumentKind,
    pub bytes: Bytes,
    pub filename: Option<String>,
}

impl Document {
    pub fn new(kind: DocumentKind, bytes: impl Into<Bytes>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn plain_text(text: impl Into<String>) -> Self {
        Self::new(DocumentKind::PlainText, text.into())
    }
}

/// Extracts the full text of `document`.
pub fn extract(document: &Document) -> Result<String, ExtractionError> {
    let bytes: &[u8] = &document.bytes;
    let text = match document.kind {
        DocumentKind::Pdf => guard_parser(|| pdf::extract_text(bytes))?,
        DocumentKind::Docx => guard_parser(|| docx::extract_text(bytes))?,
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec())?,
    };

    tracing::debug!(
        kind = ?document.kind,
        filename = document.filename.as_deref().unwrap_or(""),
        bytes = document.bytes.len(),
        chars = text.chars().count(),
        "extracted document text"
    );
    Ok(text)
}

/// Third-party parsers can panic on malformed input; report that as a failed
/// extraction instead of unwinding into the caller.
fn guard_parser<F>(parse: F) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError> + std::panic::UnwindSafe,
{
    std::panic::catch_unwind(parse).unwrap_or_else(|panic| {
        let reason = panic
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "parser panicked".to_string());
        Err(ExtractionError::Aborted(reason))
    })
}
