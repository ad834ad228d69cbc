//! Embedded renderer configuration types.

use serde::{Deserialize, Serialize};

/// Renderer settings applied when the WebView is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSection {
    /// Enable dev tools. Always on in debug builds.
    pub devtools: bool,
    pub user_agent: String,
    pub clipboard: bool,
    pub autoplay: bool,
}

impl Default for WebViewSection {
    fn default() -> Self {
        Self {
            devtools: false,
            user_agent: "pdfhost/0.1".into(),
            clipboard: true,
            autoplay: false,
        }
    }
}
