//! IPC protocol between the editor page and the host.
//!
//! Messages flow in both directions:
//! - **Editor -> host**: the editor calls `window.<bridge>.onEditorReady()`
//!   or `window.<bridge>.onPDFSaved(b64)`. The initialization script turns
//!   each call into `window.ipc.postMessage(JSON.stringify({kind, payload}))`,
//!   which reaches the `ipc_handler` registered on the WebView.
//! - **Host -> editor**: see [`crate::envelope`]; the host evaluates a
//!   `window.postMessage` script.

use pdfhost_common::BridgeError;
use serde::{Deserialize, Serialize};

/// Callback names the editor may invoke. Anything else is rejected.
pub const ALLOWED_CALLS: &[&str] = &["onEditorReady", "onPDFSaved"];

/// A raw IPC message from JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The callback name.
    pub kind: String,
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a string argument or any other JSON value.
/// A missing payload reads as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
}

impl Default for IpcPayload {
    fn default() -> Self {
        Self::Json(serde_json::Value::Null)
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// A validated call from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    /// `onEditorReady()`: the editor can accept injected messages.
    EditorReady,
    /// `onPDFSaved(base64)`: the edited document, still encoded.
    PdfSaved(String),
}

/// Check whether a callback name is in the allowlist.
pub fn is_call_allowed(kind: &str) -> bool {
    ALLOWED_CALLS.contains(&kind)
}

impl BridgeCall {
    /// Validate an IPC message into a bridge call.
    pub fn from_ipc(msg: &IpcMessage) -> Result<Self, BridgeError> {
        match msg.kind.as_str() {
            "onEditorReady" => Ok(Self::EditorReady),
            "onPDFSaved" => match &msg.payload {
                IpcPayload::Text(b64) => Ok(Self::PdfSaved(b64.clone())),
                _ => Err(BridgeError::InvalidPayload(
                    "onPDFSaved expects a base64 string".into(),
                )),
            },
            other => Err(BridgeError::UnknownCall(other.to_string())),
        }
    }

    /// Parse and validate a raw IPC body.
    pub fn parse(body: &str) -> Result<Self, BridgeError> {
        let msg = IpcMessage::from_json(body)
            .ok_or_else(|| BridgeError::InvalidPayload("IPC body is not a bridge message".into()))?;
        Self::from_ipc(&msg)
    }
}

/// JavaScript that installs the bridge object under `bridge_name`.
///
/// Injected as an initialization script so it exists before any page
/// script runs, including after reloads.
pub fn bridge_init_script(bridge_name: &str) -> String {
    let name = serde_json::to_string(bridge_name).unwrap_or_else(|_| "\"Android\"".to_string());
    format!(
        r#"
(function() {{
    function send(kind, payload) {{
        window.ipc.postMessage(JSON.stringify({{
            kind: kind,
            payload: payload === undefined ? null : payload
        }}));
    }}
    window[{name}] = Object.freeze({{
        onEditorReady: function() {{
            send("onEditorReady", null);
        }},
        onPDFSaved: function(base64PDF) {{
            send("onPDFSaved", String(base64PDF));
        }}
    }});
}})();
"#
    )
}
