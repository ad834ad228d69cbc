//! Host-side operations on the embedded editor.
//!
//! `EditorShell` owns the handle it injects scripts through and tracks
//! the editor's ready signal. Injection is fire-and-forget: a successful
//! return means the script was handed to the renderer, not that the
//! editor acted on it.

use pdfhost_common::BridgeError;
use tracing::{debug, info};

use crate::codec;
use crate::envelope::{post_message_script, EditorMessage, MessageType};
use crate::ipc::BridgeCall;

/// Anything that can evaluate JavaScript inside the editor page.
pub trait ScriptSink {
    fn evaluate_script(&self, js: &str) -> Result<(), BridgeError>;
}

impl<S: ScriptSink + ?Sized> ScriptSink for &S {
    fn evaluate_script(&self, js: &str) -> Result<(), BridgeError> {
        (**self).evaluate_script(js)
    }
}

/// Result of handling a bridge call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeOutcome {
    /// The editor became ready.
    Ready,
    /// The editor saved; these are the decoded PDF bytes.
    Saved(Vec<u8>),
}

pub struct EditorShell<S> {
    sink: S,
    ready: bool,
    save_requested: bool,
}

impl<S: ScriptSink> EditorShell<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            ready: false,
            save_requested: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Forget the ready signal. Called when the page starts (re)loading.
    pub fn reset(&mut self) {
        if self.ready {
            debug!("editor page reloading, waiting for ready signal");
        }
        self.ready = false;
        self.save_requested = false;
    }

    /// Send a PDF to the editor (`LOAD_PDF`).
    pub fn load_document(&self, bytes: &[u8]) -> Result<(), BridgeError> {
        self.inject(MessageType::LoadPdf, Some(bytes), "load_document")
    }

    /// Send an image to the editor (`ADD_IMAGE`).
    pub fn add_image(&self, bytes: &[u8]) -> Result<(), BridgeError> {
        self.inject(MessageType::AddImage, Some(bytes), "add_image")
    }

    /// Ask the editor to save (`SAVE_PDF`). The result arrives later as `onPDFSaved`.
    pub fn request_save(&mut self) -> Result<(), BridgeError> {
        self.inject(MessageType::SavePdf, None, "request_save")?;
        self.save_requested = true;
        Ok(())
    }

    /// Send an already-built message.
    pub fn send(&mut self, message: &EditorMessage) -> Result<(), BridgeError> {
        match message {
            EditorMessage::LoadPdf(bytes) => self.load_document(bytes),
            EditorMessage::AddImage(bytes) => self.add_image(bytes),
            EditorMessage::SavePdf => self.request_save(),
        }
    }

    /// `onEditorReady()`.
    pub fn on_editor_ready(&mut self) {
        if self.ready {
            debug!("duplicate ready signal");
        } else {
            info!("editor ready");
        }
        self.ready = true;
    }

    /// `onPDFSaved(base64)`: decode the saved document.
    ///
    /// A save before the ready signal is a precondition violation and is
    /// refused rather than guessed at.
    pub fn on_pdf_saved(&mut self, base64: &str) -> Result<Vec<u8>, BridgeError> {
        if !self.ready {
            return Err(BridgeError::NotReady("onPDFSaved"));
        }
        if !self.save_requested {
            debug!("editor saved without a host request");
        }
        self.save_requested = false;

        let bytes = codec::decode(base64)?;
        info!(bytes = bytes.len(), "editor saved document");
        Ok(bytes)
    }

    /// Dispatch a validated bridge call.
    pub fn handle_call(&mut self, call: BridgeCall) -> Result<BridgeOutcome, BridgeError> {
        match call {
            BridgeCall::EditorReady => {
                self.on_editor_ready();
                Ok(BridgeOutcome::Ready)
            }
            BridgeCall::PdfSaved(b64) => self.on_pdf_saved(&b64).map(BridgeOutcome::Saved),
        }
    }

    fn inject(
        &self,
        kind: MessageType,
        payload: Option<&[u8]>,
        operation: &'static str,
    ) -> Result<(), BridgeError> {
        if !self.ready {
            return Err(BridgeError::NotReady(operation));
        }
        let script = post_message_script(kind, payload);
        self.sink.evaluate_script(&script)?;
        debug!(
            %kind,
            bytes = payload.map_or(0, <[u8]>::len),
            "message injected"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every script instead of running it.
    #[derive(Default)]
    struct RecordingSink {
        scripts: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ScriptSink for RecordingSink {
        fn evaluate_script(&self, js: &str) -> Result<(), BridgeError> {
            if self.fail {
                return Err(BridgeError::Injection("renderer gone".into()));
            }
            self.scripts.borrow_mut().push(js.to_string());
            Ok(())
        }
    }

    fn ready_shell() -> EditorShell<RecordingSink> {
        let mut shell = EditorShell::new(RecordingSink::default());
        shell.on_editor_ready();
        shell
    }

    /// Pull the base64 literal out of an injected script.
    fn injected_base64(script: &str) -> String {
        let start = script.find("atob(\"").unwrap() + "atob(\"".len();
        let end = script[start..].find('"').unwrap() + start;
        script[start..end].to_string()
    }

    #[test]
    fn starts_not_ready() {
        let shell = EditorShell::new(RecordingSink::default());
        assert!(!shell.is_ready());
    }

    #[test]
    fn injection_before_ready_is_refused() {
        let mut shell = EditorShell::new(RecordingSink::default());
        assert!(matches!(
            shell.load_document(b"%PDF"),
            Err(BridgeError::NotReady("load_document"))
        ));
        assert!(matches!(
            shell.add_image(b"\x89PNG"),
            Err(BridgeError::NotReady("add_image"))
        ));
        assert!(matches!(
            shell.request_save(),
            Err(BridgeError::NotReady("request_save"))
        ));
        assert!(shell.sink().scripts.borrow().is_empty());
    }

    #[test]
    fn load_document_injects_load_pdf() {
        let shell = ready_shell();
        shell.load_document(&[0x25, 0x50, 0x44, 0x46]).unwrap();

        let scripts = shell.sink().scripts.borrow();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].starts_with("window.postMessage({type: \"LOAD_PDF\""));
        assert_eq!(injected_base64(&scripts[0]), "JVBERg==");
    }

    #[test]
    fn add_image_injects_add_image() {
        let shell = ready_shell();
        shell.add_image(&[0xFF, 0xD8, 0xFF]).unwrap();
        let scripts = shell.sink().scripts.borrow();
        assert!(scripts[0].contains("type: \"ADD_IMAGE\""));
    }

    #[test]
    fn empty_document_is_accepted() {
        let shell = ready_shell();
        shell.load_document(&[]).unwrap();
        let scripts = shell.sink().scripts.borrow();
        assert_eq!(injected_base64(&scripts[0]), "");
    }

    #[test]
    fn payload_is_not_truncated() {
        let shell = ready_shell();
        let bytes: Vec<u8> = (0..100_000u32).map(|i| (i % 256) as u8).collect();
        let before = bytes.clone();

        shell.load_document(&bytes).unwrap();

        assert_eq!(bytes, before);
        let scripts = shell.sink().scripts.borrow();
        assert_eq!(codec::decode(&injected_base64(&scripts[0])).unwrap(), bytes);
    }

    #[test]
    fn request_save_injects_bare_save_pdf() {
        let mut shell = ready_shell();
        shell.request_save().unwrap();
        let scripts = shell.sink().scripts.borrow();
        assert_eq!(scripts[0], "window.postMessage({type: \"SAVE_PDF\"}, \"*\");");
    }

    #[test]
    fn save_round_trip_hands_back_exact_bytes() {
        let mut shell = ready_shell();
        let pdf = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n%%EOF\n".to_vec();

        shell.request_save().unwrap();
        let saved = shell.on_pdf_saved(&codec::encode(&pdf)).unwrap();
        assert_eq!(saved, pdf);
    }

    #[test]
    fn saved_before_ready_is_precondition_violation() {
        let mut shell = EditorShell::new(RecordingSink::default());
        let err = shell.on_pdf_saved("JVBERg==").unwrap_err();
        assert!(matches!(err, BridgeError::NotReady("onPDFSaved")));
    }

    #[test]
    fn malformed_save_is_decode_error() {
        let mut shell = ready_shell();
        let err = shell.on_pdf_saved("%%% not base64 %%%").unwrap_err();
        assert!(matches!(err, BridgeError::Decode(_)));
        // Still usable afterwards.
        assert_eq!(shell.on_pdf_saved("JVBERg==").unwrap(), b"%PDF");
    }

    #[test]
    fn sink_failure_propagates() {
        let mut shell = EditorShell::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        shell.on_editor_ready();
        let err = shell.load_document(b"%PDF").unwrap_err();
        assert!(matches!(err, BridgeError::Injection(_)));
    }

    #[test]
    fn reset_requires_a_new_ready_signal() {
        let mut shell = ready_shell();
        shell.reset();
        assert!(!shell.is_ready());
        assert!(shell.load_document(b"%PDF").is_err());

        shell.on_editor_ready();
        assert!(shell.load_document(b"%PDF").is_ok());
    }

    #[test]
    fn repeated_ready_is_harmless() {
        let mut shell = ready_shell();
        shell.on_editor_ready();
        assert!(shell.is_ready());
    }

    #[test]
    fn handle_call_dispatches() {
        let mut shell = EditorShell::new(RecordingSink::default());
        assert_eq!(
            shell.handle_call(BridgeCall::EditorReady).unwrap(),
            BridgeOutcome::Ready
        );
        assert_eq!(
            shell
                .handle_call(BridgeCall::PdfSaved("JVBERg==".into()))
                .unwrap(),
            BridgeOutcome::Saved(b"%PDF".to_vec())
        );
    }

    #[test]
    fn send_routes_each_message_type() {
        let mut shell = ready_shell();
        shell.send(&EditorMessage::LoadPdf(vec![1])).unwrap();
        shell.send(&EditorMessage::AddImage(vec![2])).unwrap();
        shell.send(&EditorMessage::SavePdf).unwrap();

        let scripts = shell.sink().scripts.borrow();
        assert!(scripts[0].contains("LOAD_PDF"));
        assert!(scripts[1].contains("ADD_IMAGE"));
        assert!(scripts[2].contains("SAVE_PDF"));
    }

    #[test]
    fn works_through_a_borrowed_sink() {
        let sink = RecordingSink::default();
        let mut shell = EditorShell::new(&sink);
        shell.on_editor_ready();
        shell.load_document(b"%PDF").unwrap();
        drop(shell);
        assert_eq!(sink.scripts.borrow().len(), 1);
    }
}
