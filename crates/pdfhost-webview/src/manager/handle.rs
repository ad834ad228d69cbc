use pdfhost_common::BridgeError;
use wry::WebView;

use crate::shell::ScriptSink;

/// Owned handle to the editor WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}

impl ScriptSink for WebViewHandle {
    fn evaluate_script(&self, js: &str) -> Result<(), BridgeError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| BridgeError::Injection(e.to_string()))
    }
}
