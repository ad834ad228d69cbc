//! Reading local documents and images for the editor.
//!
//! Files come from the command line or are dropped onto the window.
//! The kind is decided by magic bytes, never by extension.

use std::path::{Path, PathBuf};

use pdfhost_common::PdfHostError;
use pdfhost_webview::EditorMessage;

/// Maximum file size: 50 MB.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// How far into a file the `%PDF` header may appear.
const PDF_HEADER_WINDOW: usize = 1024;

const PDF_MAGIC: &[u8] = b"%PDF";
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const GIF_MAGIC: &[u8] = &[0x47, 0x49, 0x46];
const WEBP_MAGIC: &[u8] = b"RIFF";
const BMP_MAGIC: &[u8] = &[0x42, 0x4D];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image(&'static str),
}

/// Detect image MIME type from magic bytes.
fn detect_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.len() < 4 {
        return None;
    }
    if bytes.starts_with(PNG_MAGIC) {
        Some("image/png")
    } else if bytes.starts_with(JPEG_MAGIC) {
        Some("image/jpeg")
    } else if bytes.starts_with(GIF_MAGIC) {
        Some("image/gif")
    } else if bytes.len() >= 12 && bytes.starts_with(WEBP_MAGIC) && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(BMP_MAGIC) {
        Some("image/bmp")
    } else {
        None
    }
}

/// Image signatures sit at offset 0, so they win over a `%PDF` found
/// further into the header window.
pub fn detect_kind(bytes: &[u8]) -> Option<FileKind> {
    if let Some(mime) = detect_image_mime(bytes) {
        return Some(FileKind::Image(mime));
    }
    let head = &bytes[..bytes.len().min(PDF_HEADER_WINDOW)];
    head.windows(PDF_MAGIC.len())
        .any(|w| w == PDF_MAGIC)
        .then_some(FileKind::Pdf)
}

/// Read a regular file, refusing anything over [`MAX_FILE_SIZE`].
pub fn read_limited(path: &Path) -> Result<Vec<u8>, PdfHostError> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(PdfHostError::Other(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > MAX_FILE_SIZE {
        return Err(PdfHostError::Other(format!(
            "{} is too large ({} bytes, max 50MB)",
            path.display(),
            metadata.len()
        )));
    }
    Ok(std::fs::read(path)?)
}

/// Read a file and turn it into the message that delivers it.
pub fn load_file(path: &Path) -> Result<EditorMessage, PdfHostError> {
    let bytes = read_limited(path)?;
    match detect_kind(&bytes) {
        Some(FileKind::Pdf) => Ok(EditorMessage::LoadPdf(bytes)),
        Some(FileKind::Image(mime)) => {
            tracing::debug!(path = %path.display(), mime, "image file recognised");
            Ok(EditorMessage::AddImage(bytes))
        }
        None => Err(PdfHostError::Other(format!(
            "{} is neither a PDF nor a recognised image",
            path.display()
        ))),
    }
}

/// Messages for the files named on the command line.
///
/// Unreadable files and files of the wrong kind are logged and skipped.
pub fn startup_messages(open: Option<&Path>, images: &[PathBuf]) -> Vec<EditorMessage> {
    let mut messages = Vec::new();

    if let Some(path) = open {
        match load_file(path) {
            Ok(msg @ EditorMessage::LoadPdf(_)) => messages.push(msg),
            Ok(_) => tracing::warn!(path = %path.display(), "--open expects a PDF, skipping"),
            Err(e) => tracing::warn!(path = %path.display(), "Cannot open document: {e}"),
        }
    }

    for path in images {
        match load_file(path) {
            Ok(msg @ EditorMessage::AddImage(_)) => messages.push(msg),
            Ok(_) => tracing::warn!(path = %path.display(), "--image expects an image, skipping"),
            Err(e) => tracing::warn!(path = %path.display(), "Cannot read image: {e}"),
        }
    }

    messages
}

// =============================================================================
// TESTS
// =============================================================================
