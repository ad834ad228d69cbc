//! Bridge between the native host and the embedded PDF editor.
//!
//! Wraps the `wry` crate to provide:
//! - A single managed WebView hosting the editor
//! - Host -> editor messages (`LOAD_PDF`, `ADD_IMAGE`, `SAVE_PDF`) injected
//!   as `window.postMessage` scripts carrying base64 payloads
//! - Editor -> host callbacks (`onEditorReady`, `onPDFSaved`) delivered
//!   over IPC and parsed into typed calls
//! - A navigation allowlist pinned to the editor's origin

pub mod codec;
pub mod envelope;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod shell;

pub use envelope::{EditorMessage, Envelope, MessageType};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{BridgeCall, IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use shell::{BridgeOutcome, EditorShell, ScriptSink};
