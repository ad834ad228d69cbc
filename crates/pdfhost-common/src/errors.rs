use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Failures on either side of the host <-> editor bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A payload received from the editor was not valid base64.
    #[error("malformed base64 payload: {0}")]
    Decode(String),

    /// An operation ran before the editor signalled `onEditorReady`.
    #[error("editor not ready: {0}")]
    NotReady(&'static str),

    /// The platform could not accept a shared document.
    #[error("share facility unavailable: {0}")]
    ShareUnavailable(String),

    /// Evaluating a script in the renderer failed.
    #[error("script injection failed: {0}")]
    Injection(String),

    #[error("unknown bridge call: {0}")]
    UnknownCall(String),

    #[error("invalid bridge payload: {0}")]
    InvalidPayload(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PdfHostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
