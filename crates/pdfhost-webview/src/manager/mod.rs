//! WebView lifecycle management.
//!
//! `WebViewManager` builds the editor's `wry::WebView` and collects the
//! events its callbacks raise until the event loop drains them.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Owns the event sink shared with the renderer callbacks.
pub struct WebViewManager {
    /// Event sink. Callbacks push here; the main event loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events, in arrival order.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }

    pub(crate) fn push_event(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
        if let Ok(mut evts) = events.lock() {
            evts.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
