//! IPC message dispatch: routes bridge calls from the editor to the shell
//! and the share facility.

use std::path::PathBuf;

use pdfhost_platform::SharedDocument;
use pdfhost_webview::{BridgeCall, BridgeOutcome, ScriptSink};

use crate::app_state::session::EditorSession;

// =============================================================================
// DISPATCH
// =============================================================================

impl<S: ScriptSink> EditorSession<S> {
    /// Handle a raw IPC body from the editor.
    ///
    /// Returns where the document went when this was a successful save.
    /// Every failure is logged and leaves the session usable.
    pub fn handle_ipc_message(&mut self, body: &str) -> Option<PathBuf> {
        let call = match BridgeCall::parse(body) {
            Ok(call) => call,
            Err(e) => {
                tracing::warn!(body_len = body.len(), "Rejected IPC message: {e}");
                return None;
            }
        };

        match self.shell.handle_call(call) {
            Ok(BridgeOutcome::Ready) => {
                self.flush_pending();
                None
            }
            Ok(BridgeOutcome::Saved(bytes)) => self.share_saved(bytes),
            Err(e) => {
                tracing::warn!("Bridge call failed: {e}");
                None
            }
        }
    }

    fn share_saved(&self, bytes: Vec<u8>) -> Option<PathBuf> {
        let doc = SharedDocument::pdf(bytes, self.file_stem.clone());
        match self.share.share(&doc) {
            Ok(path) => {
                tracing::info!(path = %path.display(), bytes = doc.bytes.len(), "Saved document shared");
                Some(path)
            }
            Err(e) => {
                tracing::warn!("Could not share saved document: {e}");
                None
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
