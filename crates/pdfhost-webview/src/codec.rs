//! Base64 transport encoding for binary payloads.
//!
//! Encoding is canonical standard base64 with padding. Decoding accepts
//! the variations real encoders emit: line-wrapped output, missing
//! padding, and a `data:<mime>;base64,` prefix.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use pdfhost_common::BridgeError;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as standard padded base64.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text received from the editor.
pub fn decode(text: &str) -> Result<Vec<u8>, BridgeError> {
    let body = strip_data_url(text.trim());
    let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    LENIENT
        .decode(compact.as_bytes())
        .map_err(|e| BridgeError::Decode(e.to_string()))
}

fn strip_data_url(text: &str) -> &str {
    if !text.starts_with("data:") {
        return text;
    }
    match text.split_once(',') {
        Some((header, body)) if header.ends_with(";base64") => body,
        _ => text,
    }
}
