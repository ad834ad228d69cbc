//! Saved-document sharing configuration types.

use serde::{Deserialize, Serialize};

/// Where documents saved by the editor are handed off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Output directory. Empty means the platform data dir (`<data_dir>/pdfhost/shared`).
    pub output_dir: String,
    /// File name stem; a timestamp and `.pdf` are appended.
    pub file_stem: String,
    /// Open the written file with the OS default handler.
    pub reveal: bool,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            output_dir: String::new(),
            file_stem: "edited".into(),
            reveal: true,
        }
    }
}
