//! WebView lifecycle: drain and handle renderer events.

use pdfhost_webview::WebViewEvent;

use crate::app_state::core::PdfHostApp;

/// Window title showing the editor's document title, if any.
fn window_title(base: &str, document_title: &str) -> String {
    let document_title = document_title.trim();
    if document_title.is_empty() || document_title == base {
        base.to_string()
    } else {
        format!("{document_title} - {base}")
    }
}

impl PdfHostApp {
    /// Process pending webview events (IPC messages, page loads, etc.).
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events = self.manager.drain_events();

        for event in events {
            match event {
                WebViewEvent::IpcMessage { body } => {
                    if let Some(session) = &mut self.session {
                        session.handle_ipc_message(&body);
                    }
                }
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "WebView page load event");
                    if let Some(session) = &mut self.session {
                        session.on_page_load(state);
                    }
                }
                WebViewEvent::TitleChanged { title } => {
                    if let Some(window) = &self.window {
                        window.set_title(&window_title(&self.config.window.title, &title));
                    }
                }
                WebViewEvent::NavigationRequested { url } => {
                    tracing::debug!(url = %url, "WebView navigation");
                }
                // Logged where the navigation was refused.
                WebViewEvent::NavigationBlocked { .. } => {}
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
