/// Configuration for building the editor WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Editor URL to load.
    pub url: String,
    /// Global JS name for the bridge object.
    pub bridge_name: String,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
}
