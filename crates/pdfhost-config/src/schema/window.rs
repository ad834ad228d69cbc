//! Host window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window title and logical size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "PDF Editor".into(),
            width: 1200,
            height: 860,
        }
    }
}
