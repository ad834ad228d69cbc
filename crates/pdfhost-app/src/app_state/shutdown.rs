//! Shutdown: release the editor WebView before the window.

use super::core::PdfHostApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl PdfHostApp {
    /// Tear down the editor, then the window.
    ///
    /// Messages still held for an editor that never became ready are
    /// discarded.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating shutdown");

        if let Some(session) = self.session.take() {
            if session.pending_len() > 0 {
                tracing::warn!(
                    count = session.pending_len(),
                    "Discarding messages the editor never received"
                );
            }
        }
        self.startup.clear();
        self.manager.drain_events();
        self.window = None;
        self.should_exit = true;

        tracing::info!("Shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::PdfHostApp;
    use pdfhost_config::PdfHostConfig;
    use pdfhost_webview::EditorMessage;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = PdfHostApp::new(
            PdfHostConfig::default(),
            vec![EditorMessage::LoadPdf(b"%PDF".to_vec())],
        );

        app.shutdown();

        assert!(app.session.is_none());
        assert!(app.window.is_none());
        assert!(app.startup.is_empty());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = PdfHostApp::new(PdfHostConfig::default(), Vec::new());
        app.shutdown();
        app.shutdown();
        assert!(app.should_exit);
    }
}
