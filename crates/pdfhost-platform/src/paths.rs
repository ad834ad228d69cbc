use std::fs;
use std::path::PathBuf;

use pdfhost_common::PlatformError;

const APP_NAME: &str = "pdfhost";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/pdfhost`
/// - Linux: `$XDG_CONFIG_HOME/pdfhost` (defaults to `~/.config/pdfhost`)
/// - Windows: `%APPDATA%\pdfhost`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/pdfhost`
/// - Linux: `$XDG_DATA_HOME/pdfhost` (defaults to `~/.local/share/pdfhost`)
/// - Windows: `%APPDATA%\pdfhost`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))
}

/// Default destination for documents saved by the editor: `data_dir()/shared`.
pub fn shared_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("shared"))
}

/// `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

/// Creates all pdfhost directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, shared_dir()?, log_dir()?, crash_report_dir()?] {
        fs::create_dir_all(&dir).map_err(|e| {
            PlatformError::Io(format!("failed to create {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}
