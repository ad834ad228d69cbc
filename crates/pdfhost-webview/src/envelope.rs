//! Host -> editor message envelope.
//!
//! Every message the host sends is a `{type, data?}` envelope delivered
//! through `window.postMessage`. `data` is the payload as base64 in the
//! JSON view, and a `Uint8Array` once the injected script has run.

use pdfhost_common::BridgeError;
use serde::{Deserialize, Serialize};

use crate::codec;

/// The closed set of envelope tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    LoadPdf,
    AddImage,
    SavePdf,
}

impl MessageType {
    pub const ALL: [MessageType; 3] = [Self::LoadPdf, Self::AddImage, Self::SavePdf];

    /// Wire tag as seen by the editor.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoadPdf => "LOAD_PDF",
            Self::AddImage => "ADD_IMAGE",
            Self::SavePdf => "SAVE_PDF",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message from the host to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMessage {
    /// Replace the open document.
    LoadPdf(Vec<u8>),
    /// Insert an image into the open document.
    AddImage(Vec<u8>),
    /// Ask the editor to produce the edited PDF via `onPDFSaved`.
    SavePdf,
}

/// JSON view of an `EditorMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl EditorMessage {
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::LoadPdf(_) => MessageType::LoadPdf,
            Self::AddImage(_) => MessageType::AddImage,
            Self::SavePdf => MessageType::SavePdf,
        }
    }

    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Self::LoadPdf(bytes) | Self::AddImage(bytes) => Some(bytes.as_slice()),
            Self::SavePdf => None,
        }
    }

    pub fn to_envelope(&self) -> Envelope {
        Envelope {
            kind: self.message_type(),
            data: self.payload().map(codec::encode),
        }
    }

    /// Rebuild a message from its JSON view, decoding the payload.
    pub fn from_envelope(envelope: &Envelope) -> Result<Self, BridgeError> {
        let bytes = || match &envelope.data {
            Some(data) => codec::decode(data),
            None => Err(BridgeError::InvalidPayload(format!(
                "{} envelope without data",
                envelope.kind
            ))),
        };
        match envelope.kind {
            MessageType::LoadPdf => Ok(Self::LoadPdf(bytes()?)),
            MessageType::AddImage => Ok(Self::AddImage(bytes()?)),
            MessageType::SavePdf => Ok(Self::SavePdf),
        }
    }

    /// The script that delivers this message inside the renderer.
    pub fn to_script(&self) -> String {
        post_message_script(self.message_type(), self.payload())
    }
}

/// Build the `window.postMessage` call for a message.
///
/// The payload travels as a base64 string literal and is turned back into
/// a `Uint8Array` in the page.
pub fn post_message_script(kind: MessageType, payload: Option<&[u8]>) -> String {
    let tag = js_string(kind.as_str());
    match payload {
        Some(bytes) => format!(
            "window.postMessage({{type: {tag}, data: Uint8Array.from(atob({}), c => c.charCodeAt(0))}}, \"*\");",
            js_string(&codec::encode(bytes)),
        ),
        None => format!("window.postMessage({{type: {tag}}}, \"*\");"),
    }
}

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_exactly_the_three_literals() {
        let tags: Vec<&str> = MessageType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, ["LOAD_PDF", "ADD_IMAGE", "SAVE_PDF"]);
    }

    #[test]
    fn serde_tags_match_as_str() {
        for kind in MessageType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let result: Result<Envelope, _> = serde_json::from_str(r#"{"type":"DELETE_PDF"}"#);
        assert!(result.is_err());
        let result: Result<Envelope, _> = serde_json::from_str(r#"{"type":"load_pdf"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn load_pdf_magic_bytes_envelope() {
        let msg = EditorMessage::LoadPdf(vec![0x25, 0x50, 0x44, 0x46]);
        let json = serde_json::to_string(&msg.to_envelope()).unwrap();
        assert_eq!(json, r#"{"type":"LOAD_PDF","data":"JVBERg=="}"#);
    }

    #[test]
    fn load_pdf_magic_bytes_script() {
        let msg = EditorMessage::LoadPdf(vec![0x25, 0x50, 0x44, 0x46]);
        assert_eq!(
            msg.to_script(),
            "window.postMessage({type: \"LOAD_PDF\", data: Uint8Array.from(atob(\"JVBERg==\"), c => c.charCodeAt(0))}, \"*\");"
        );
    }

    #[test]
    fn add_image_uses_its_own_tag() {
        let script = EditorMessage::AddImage(vec![0x89, 0x50, 0x4E, 0x47]).to_script();
        assert!(script.contains("type: \"ADD_IMAGE\""));
        assert!(script.contains("atob(\"iVBORw==\")"));
    }

    #[test]
    fn save_pdf_has_no_data() {
        let msg = EditorMessage::SavePdf;
        assert_eq!(msg.to_script(), "window.postMessage({type: \"SAVE_PDF\"}, \"*\");");
        let json = serde_json::to_string(&msg.to_envelope()).unwrap();
        assert_eq!(json, r#"{"type":"SAVE_PDF"}"#);
    }

    #[test]
    fn empty_payload_still_carries_data() {
        let msg = EditorMessage::LoadPdf(Vec::new());
        assert_eq!(msg.to_envelope().data.as_deref(), Some(""));
        assert!(msg.to_script().contains("atob(\"\")"));
    }

    #[test]
    fn envelope_decodes_back_to_message() {
        let original = EditorMessage::AddImage((0..=255u8).collect());
        let json = serde_json::to_string(&original.to_envelope()).unwrap();
        let envelope: Envelope = serde_json::from_str(&json).unwrap();
        assert_eq!(EditorMessage::from_envelope(&envelope).unwrap(), original);
    }

    #[test]
    fn payload_envelope_without_data_is_invalid() {
        let envelope: Envelope = serde_json::from_str(r#"{"type":"LOAD_PDF"}"#).unwrap();
        let err = EditorMessage::from_envelope(&envelope).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidPayload(_)));
    }

    #[test]
    fn script_is_a_single_statement() {
        let script = EditorMessage::LoadPdf(vec![0u8; 4096]).to_script();
        assert!(!script.contains('\n'));
        assert_eq!(script.matches(';').count(), 1);
        assert!(script.ends_with(");"));
    }
}
