//! Handing saved documents to the platform.
//!
//! The editor produces a finished PDF; the host passes it to a
//! `ShareTarget`. On desktop that means writing it into an output
//! directory and optionally opening it with the default viewer.

use std::path::PathBuf;

use pdfhost_common::BridgeError;
use tracing::{debug, info, warn};

/// A decoded document ready to leave the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedDocument {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
    /// File name stem without extension.
    pub stem: String,
}

impl SharedDocument {
    /// A PDF produced by the editor's save action.
    pub fn pdf(bytes: Vec<u8>, stem: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: "application/pdf",
            stem: stem.into(),
        }
    }

    fn extension(&self) -> &'static str {
        match self.mime {
            "application/pdf" => "pdf",
            "image/png" => "png",
            "image/jpeg" => "jpg",
            _ => "bin",
        }
    }
}

/// Platform facility that accepts finished documents.
pub trait ShareTarget {
    /// Hand `doc` off. Returns where it ended up.
    fn share(&self, doc: &SharedDocument) -> Result<PathBuf, BridgeError>;
}

/// Writes shared documents into a directory.
pub struct DirectoryShare {
    dir: PathBuf,
    reveal: bool,
}

impl DirectoryShare {
    pub fn new(dir: impl Into<PathBuf>, reveal: bool) -> Self {
        Self {
            dir: dir.into(),
            reveal,
        }
    }

    /// Pick a file name that does not clobber an earlier save.
    fn target_path(&self, doc: &SharedDocument) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let ext = doc.extension();
        let mut path = self.dir.join(format!("{}-{timestamp}.{ext}", doc.stem));
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("{}-{timestamp}-{n}.{ext}", doc.stem));
            n += 1;
        }
        path
    }
}

impl ShareTarget for DirectoryShare {
    fn share(&self, doc: &SharedDocument) -> Result<PathBuf, BridgeError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            BridgeError::ShareUnavailable(format!(
                "cannot create output directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.target_path(doc);
        std::fs::write(&path, &doc.bytes).map_err(|e| {
            BridgeError::ShareUnavailable(format!("cannot write {}: {e}", path.display()))
        })?;
        info!(path = %path.display(), bytes = doc.bytes.len(), "document shared");

        if self.reveal {
            // The file is already safe on disk; a missing viewer is not fatal.
            match open::that_detached(&path) {
                Ok(()) => debug!(path = %path.display(), "opened with default handler"),
                Err(e) => warn!(path = %path.display(), error = %e, "no default handler"),
            }
        }

        Ok(path)
    }
}
