//! PdfHostApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use pdfhost_config::schema::ShareConfig;
use pdfhost_config::PdfHostConfig;
use pdfhost_platform::{DirectoryShare, ShareTarget};
use pdfhost_webview::{EditorMessage, WebViewHandle, WebViewManager};

use super::session::EditorSession;

/// Top-level application state.
pub struct PdfHostApp {
    pub(super) config: PdfHostConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Editor WebView and its event sink
    pub(super) manager: WebViewManager,
    pub(super) session: Option<EditorSession<WebViewHandle>>,

    // Messages produced before the WebView exists
    pub(super) startup: Vec<EditorMessage>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl PdfHostApp {
    pub fn new(config: PdfHostConfig, startup: Vec<EditorMessage>) -> Self {
        Self {
            config,
            window: None,
            manager: WebViewManager::new(),
            session: None,
            startup,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// Build the share facility saved documents are handed to.
    pub(super) fn share_target(&self) -> Box<dyn ShareTarget> {
        let share = &self.config.share;
        Box::new(DirectoryShare::new(output_dir(share), share.reveal))
    }
}

/// Resolve the configured output directory.
///
/// Empty means the platform's shared-documents directory; `~/` expands
/// to the home directory.
pub(super) fn output_dir(share: &ShareConfig) -> PathBuf {
    let configured = share.output_dir.trim();
    if configured.is_empty() {
        return pdfhost_platform::shared_dir().unwrap_or_else(|e| {
            tracing::warn!("No platform data directory ({e}), saving to the working directory");
            PathBuf::from(".")
        });
    }

    if let Some(rest) = configured.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(configured)
}

// =============================================================================
// TESTS
// =============================================================================
