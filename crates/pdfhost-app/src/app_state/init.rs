//! Window creation and editor WebView setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use pdfhost_config::PdfHostConfig;
use pdfhost_webview::WebViewConfig;

use super::core::PdfHostApp;
use super::session::EditorSession;
use super::webview_bridge::window_bounds;

/// WebView settings derived from the loaded config.
pub(super) fn webview_config(config: &PdfHostConfig) -> WebViewConfig {
    let user_agent = config.webview.user_agent.trim();
    WebViewConfig {
        url: config.editor.launch_url(),
        bridge_name: config.editor.bridge_name.clone(),
        devtools: config.webview.devtools,
        user_agent: (!user_agent.is_empty()).then(|| user_agent.to_string()),
        clipboard: config.webview.clipboard,
        autoplay: config.webview.autoplay,
    }
}

impl PdfHostApp {
    /// Create the window and the editor WebView.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let config = webview_config(&self.config);
        let url = config.url.clone();
        let bounds = window_bounds(window.inner_size());

        let handle = match self.manager.create(window.as_ref(), bounds, config) {
            Ok(h) => h,
            Err(e) => {
                tracing::error!(url = %url, "Failed to create editor webview: {e}");
                return false;
            }
        };

        let mut session =
            EditorSession::new(handle, self.share_target(), self.config.share.file_stem.clone());
        for message in self.startup.drain(..) {
            session.submit(message);
        }

        self.session = Some(session);
        self.window = Some(window);
        tracing::info!(url = %url, "Window created and editor loading");
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================
