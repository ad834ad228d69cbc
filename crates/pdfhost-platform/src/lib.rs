pub mod crash_report;
pub mod paths;
pub mod share;

pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir, shared_dir};
pub use share::{DirectoryShare, ShareTarget, SharedDocument};
