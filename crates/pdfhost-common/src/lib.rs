pub mod errors;

pub use errors::{BridgeError, ConfigError, PdfHostError, PlatformError};

pub type Result<T> = std::result::Result<T, PdfHostError>;
