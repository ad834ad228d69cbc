//! Editor session: the shell plus everything waiting on it.
//!
//! Payloads can arrive before the editor has signalled readiness (files
//! on the command line, early drops). They are held here and delivered
//! in order on `onEditorReady`.

use pdfhost_platform::ShareTarget;
use pdfhost_webview::{EditorMessage, EditorShell, PageLoadState, ScriptSink};

pub struct EditorSession<S> {
    pub(super) shell: EditorShell<S>,
    pub(super) pending: Vec<EditorMessage>,
    pub(super) share: Box<dyn ShareTarget>,
    /// Stem for saved file names.
    pub(super) file_stem: String,
}

impl<S: ScriptSink> EditorSession<S> {
    pub fn new(sink: S, share: Box<dyn ShareTarget>, file_stem: impl Into<String>) -> Self {
        Self {
            shell: EditorShell::new(sink),
            pending: Vec::new(),
            share,
            file_stem: file_stem.into(),
        }
    }

    pub fn shell(&self) -> &EditorShell<S> {
        &self.shell
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Deliver a message now, or hold it until the editor is ready.
    pub fn submit(&mut self, message: EditorMessage) {
        if !self.shell.is_ready() {
            tracing::debug!(
                kind = %message.message_type(),
                queued = self.pending.len() + 1,
                "Editor not ready, holding message"
            );
            self.pending.push(message);
            return;
        }
        self.deliver(&message);
    }

    /// Ask the editor for the edited document. Ignored until ready.
    pub fn request_save(&mut self) -> bool {
        match self.shell.request_save() {
            Ok(()) => {
                tracing::info!("Save requested");
                true
            }
            Err(e) => {
                tracing::warn!("Save request dropped: {e}");
                false
            }
        }
    }

    /// A page load that starts means a fresh editor instance.
    pub fn on_page_load(&mut self, state: PageLoadState) {
        if state == PageLoadState::Started {
            self.shell.reset();
        }
    }

    pub(super) fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        tracing::info!(count = pending.len(), "Delivering held messages");
        for message in &pending {
            self.deliver(message);
        }
    }

    fn deliver(&mut self, message: &EditorMessage) {
        if let Err(e) = self.shell.send(message) {
            tracing::error!(kind = %message.message_type(), "Failed to deliver message: {e}");
        }
    }
}

// =============================================================================
// TEST FAKES
// =============================================================================

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use pdfhost_common::BridgeError;
    use pdfhost_platform::{ShareTarget, SharedDocument};
    use pdfhost_webview::ScriptSink;

    use super::EditorSession;

    #[derive(Default)]
    pub struct RecordingSink {
        pub scripts: RefCell<Vec<String>>,
    }

    impl ScriptSink for RecordingSink {
        fn evaluate_script(&self, js: &str) -> Result<(), BridgeError> {
            self.scripts.borrow_mut().push(js.to_string());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingShare {
        pub shared: Rc<RefCell<Vec<SharedDocument>>>,
        pub fail: bool,
    }

    impl ShareTarget for RecordingShare {
        fn share(&self, doc: &SharedDocument) -> Result<PathBuf, BridgeError> {
            if self.fail {
                return Err(BridgeError::ShareUnavailable("no share target".into()));
            }
            self.shared.borrow_mut().push(doc.clone());
            Ok(PathBuf::from(format!("/shared/{}.pdf", doc.stem)))
        }
    }

    pub fn session(share: RecordingShare) -> EditorSession<RecordingSink> {
        EditorSession::new(RecordingSink::default(), Box::new(share), "edited")
    }

    pub fn scripts(session: &EditorSession<RecordingSink>) -> Vec<String> {
        session.shell().sink().scripts.borrow().clone()
    }
}

// =============================================================================
// TESTS
// =============================================================================
