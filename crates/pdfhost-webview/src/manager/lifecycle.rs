use std::sync::Arc;

use tracing::{debug, warn};
use url::{Origin, Url};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::bridge_init_script;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the editor WebView as a child of the given window.
    ///
    /// The bridge object is installed as an initialization script, so it
    /// exists before the editor's own scripts run.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let init_script = bridge_init_script(&config.bridge_name);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools || cfg!(debug_assertions))
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_initialization_script(&init_script);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // Editor -> host
        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_title_handler(builder, Arc::clone(&events));

        // Navigation pinned to the editor origin
        let editor_origin = match Url::parse(&config.url) {
            Ok(url) if url.origin().is_tuple() => url.origin(),
            _ => {
                warn!(url = %config.url, "editor URL has no origin; only about:blank may load");
                Origin::new_opaque()
            }
        };
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), editor_origin);

        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(url = %config.url, bridge = %config.bridge_name, "editor WebView created");

        Ok(WebViewHandle { webview })
    }
}
