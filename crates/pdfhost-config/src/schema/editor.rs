//! Embedded editor configuration types.

use serde::{Deserialize, Serialize};
use url::Url;

/// Locales the hosted editor ships translations for.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "vi", "de", "fr", "fr-CA", "es", "pt"];

/// Which editor to load and how it reaches the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// URL of the hosted editor application.
    pub url: String,
    /// Global JS name the editor calls `onEditorReady`/`onPDFSaved` on.
    pub bridge_name: String,
    /// UI language requested from the editor.
    pub locale: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:5000".into(),
            bridge_name: "Android".into(),
            locale: "en".into(),
        }
    }
}

impl EditorConfig {
    /// The URL actually loaded: `url` with the locale as a `lang` query
    /// parameter, replacing any `lang` already present.
    ///
    /// An unparsable `url` is returned unchanged; validation rejects it.
    pub fn launch_url(&self) -> String {
        let Ok(mut url) = Url::parse(self.url.trim()) else {
            return self.url.clone();
        };
        if self.locale.is_empty() {
            return url.into();
        }

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "lang")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("lang", &self.locale);
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(url: &str, locale: &str) -> EditorConfig {
        EditorConfig {
            url: url.into(),
            locale: locale.into(),
            ..Default::default()
        }
    }

    #[test]
    fn launch_url_appends_lang() {
        assert_eq!(
            editor("https://pdf.example.com/", "de").launch_url(),
            "https://pdf.example.com/?lang=de"
        );
    }

    #[test]
    fn launch_url_extends_existing_query() {
        assert_eq!(
            editor("https://pdf.example.com/?embed=1", "fr-CA").launch_url(),
            "https://pdf.example.com/?embed=1&lang=fr-CA"
        );
    }

    #[test]
    fn launch_url_keeps_fragment_last() {
        assert_eq!(
            editor("https://pdf.example.com/app#tools", "vi").launch_url(),
            "https://pdf.example.com/app?lang=vi#tools"
        );
    }

    #[test]
    fn launch_url_without_locale_is_unchanged() {
        assert_eq!(
            editor("https://pdf.example.com/", "").launch_url(),
            "https://pdf.example.com/"
        );
    }

    #[test]
    fn launch_url_drops_default_port() {
        assert_eq!(
            editor("https://pdf.example.com:443/app", "en").launch_url(),
            "https://pdf.example.com/app?lang=en"
        );
    }

    #[test]
    fn launch_url_replaces_existing_lang() {
        assert_eq!(
            editor("https://pdf.example.com/?lang=en&embed=1", "pt").launch_url(),
            "https://pdf.example.com/?embed=1&lang=pt"
        );
    }

    #[test]
    fn unparsable_url_is_returned_as_is() {
        assert_eq!(editor("not a url", "de").launch_url(), "not a url");
    }
}
