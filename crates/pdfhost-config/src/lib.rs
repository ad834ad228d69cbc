//! pdfhost configuration system.
//!
//! TOML-based configuration for the editor host: which editor to load,
//! how the embedded renderer is set up, where saved documents go.
//! All sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pdfhost_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.editor.launch_url());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{PdfHostConfig, CONFIG_SCHEMA_VERSION, SUPPORTED_LOCALES};

use pdfhost_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Creates a commented default `config.toml` if none exists, then
/// validates the result.
pub fn load_config() -> Result<PdfHostConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit file (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<PdfHostConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
