//! Full configuration validation.
//!
//! Checks the editor URL scheme, the bridge identifier, the locale,
//! window dimensions and the log level.

use pdfhost_common::ConfigError;
use url::Url;

use crate::schema::{PdfHostConfig, SUPPORTED_LOCALES};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PdfHostConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Editor
    if let Err(reason) = check_editor_url(&config.editor.url) {
        errors.push(format!("editor.url = '{}' {reason}", config.editor.url));
    }
    if !is_js_identifier(&config.editor.bridge_name) {
        errors.push(format!(
            "editor.bridge_name = '{}' is not a valid JavaScript identifier",
            config.editor.bridge_name
        ));
    }
    if !SUPPORTED_LOCALES.contains(&config.editor.locale.as_str()) {
        errors.push(format!(
            "editor.locale = '{}' is not one of {}",
            config.editor.locale,
            SUPPORTED_LOCALES.join(", ")
        ));
    }

    // Window
    validate_range(&mut errors, "window.width", config.window.width, 320, 7680);
    validate_range(&mut errors, "window.height", config.window.height, 240, 4320);

    // Share
    let stem = &config.share.file_stem;
    if stem.is_empty()
        || !stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        errors.push(format!(
            "share.file_stem = '{stem}' may only contain letters, digits, '-' and '_'"
        ));
    }

    // Logging
    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = '{}' is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// The editor must be an `http(s)` URL with a host, so it has an origin
/// navigation can be pinned to.
fn check_editor_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw.trim()).map_err(|e| format!("is not a valid URL ({e})"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("must use http or https".into());
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err("has no host".into());
    }
    Ok(())
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&PdfHostConfig::default()).is_ok());
    }

    #[test]
    fn catches_non_http_editor_url() {
        let mut config = PdfHostConfig::default();
        config.editor.url = "file:///tmp/editor/index.html".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("editor.url"));
    }

    #[test]
    fn catches_javascript_editor_url() {
        let mut config = PdfHostConfig::default();
        config.editor.url = "javascript:alert(1)".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn catches_editor_url_without_host() {
        for url in ["http://", "https://", "http:///", "not a url", ""] {
            let mut config = PdfHostConfig::default();
            config.editor.url = url.into();
            let err = validate(&config).unwrap_err().to_string();
            assert!(err.contains("editor.url"), "{url:?} should be rejected");
        }
    }

    #[test]
    fn accepts_editor_url_with_explicit_port() {
        for url in [
            "https://pdf.example.com:443/",
            "http://127.0.0.1:5000/editor",
            "https://pdf.example.com/app?embed=1",
        ] {
            let mut config = PdfHostConfig::default();
            config.editor.url = url.into();
            assert!(validate(&config).is_ok(), "{url:?} should be accepted");
        }
    }

    #[test]
    fn catches_bad_bridge_name() {
        for name in ["", "1Android", "And roid", "window.Android", "a;b"] {
            let mut config = PdfHostConfig::default();
            config.editor.bridge_name = name.into();
            let err = validate(&config).unwrap_err().to_string();
            assert!(err.contains("editor.bridge_name"), "{name:?} should be rejected");
        }
    }

    #[test]
    fn accepts_identifier_bridge_names() {
        for name in ["Android", "pdfHost", "_bridge", "$host2"] {
            let mut config = PdfHostConfig::default();
            config.editor.bridge_name = name.into();
            assert!(validate(&config).is_ok(), "{name:?} should be accepted");
        }
    }

    #[test]
    fn every_supported_locale_validates() {
        for locale in SUPPORTED_LOCALES {
            let mut config = PdfHostConfig::default();
            config.editor.locale = (*locale).into();
            assert!(validate(&config).is_ok(), "{locale} should validate");
        }
    }

    #[test]
    fn catches_unsupported_locale() {
        let mut config = PdfHostConfig::default();
        config.editor.locale = "fr-ca".into(); // case-sensitive
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("editor.locale"));
    }

    #[test]
    fn catches_window_too_small() {
        let mut config = PdfHostConfig::default();
        config.window.width = 100;
        config.window.height = 10;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.width"));
        assert!(err.contains("window.height"));
    }

    #[test]
    fn catches_path_separators_in_file_stem() {
        let mut config = PdfHostConfig::default();
        config.share.file_stem = "../escape".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("share.file_stem"));
    }

    #[test]
    fn catches_unknown_log_level() {
        let mut config = PdfHostConfig::default();
        config.logging.level = "verbose".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("logging.level"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = PdfHostConfig::default();
        config.editor.url = "ftp://x".into();
        config.logging.level = "loud".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("editor.url"));
        assert!(err.contains("logging.level"));
        assert!(err.contains("; "));
    }
}
