//! Configuration schema types for pdfhost.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod editor;
mod logging;
mod share;
mod webview;
mod window;

pub use editor::*;
pub use logging::*;
pub use share::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for pdfhost.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfHostConfig {
    pub editor: EditorConfig,
    pub webview: WebViewSection,
    pub window: WindowConfig,
    pub share: ShareConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
