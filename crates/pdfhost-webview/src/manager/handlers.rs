use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use url::{Origin, Url};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::{is_call_allowed, IpcMessage};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Only the editor's own origin and `about:blank` may load.
///
/// Origins compare after URL normalisation, so an explicit default port
/// matches the bare host. Opaque origins (`file:`, `data:`,
/// `javascript:`) never match.
pub fn is_navigation_allowed(url: &str, editor_origin: &Origin) -> bool {
    if url == "about:blank" {
        return true;
    }
    if !editor_origin.is_tuple() {
        return false;
    }
    Url::parse(url).is_ok_and(|parsed| parsed.origin() == *editor_origin)
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Drop anything that is not a known bridge call before it
            // reaches the event loop.
            match IpcMessage::from_json(&body) {
                Some(msg) if is_call_allowed(&msg.kind) => {
                    debug!(kind = %msg.kind, body_len = body.len(), "IPC message from editor");
                    Self::push_event(&events, WebViewEvent::IpcMessage { body });
                }
                Some(msg) => {
                    warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
                }
                None => {
                    warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                }
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            Self::push_event(&events, WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            Self::push_event(&events, WebViewEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        editor_origin: Origin,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url, &editor_origin) {
                warn!(url = %url, "navigation blocked: outside editor origin");
                Self::push_event(&events, WebViewEvent::NavigationBlocked { url });
                return false;
            }

            debug!(url = %url, "navigation allowed");
            Self::push_event(&events, WebViewEvent::NavigationRequested { url });
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
