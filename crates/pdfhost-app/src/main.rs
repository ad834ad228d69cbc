mod app_state;
mod cli;
mod files;

use std::path::Path;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use pdfhost_common::ConfigError;
use pdfhost_config::PdfHostConfig;

const DEFAULT_LOG_DIRECTIVE: &str = "pdfhost=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = pdfhost_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- pdfhost crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-----------------------\n");

        default_hook(info);
    }));
}

/// Parse a filter directive, falling back to `info` for everything.
fn log_directive(raw: &str) -> Directive {
    raw.parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

fn load_config(args: &cli::Args) -> Result<PdfHostConfig, ConfigError> {
    match &args.config {
        Some(path) => pdfhost_config::load_config_from(Path::new(path)),
        None => pdfhost_config::load_config(),
    }
}

fn main() {
    // Install panic hook for crash reports
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Config comes first so its log level can seed the filter
    let loaded = load_config(&args);

    // Initialize logging
    let log_directive_str = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => format!("pdfhost={}", config.logging.level),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(log_directive(&log_directive_str)),
        )
        .init();

    tracing::info!("pdfhost v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let file_config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PdfHostConfig::default()
    });
    let mut config = file_config.clone();
    args.apply_overrides(&mut config);
    if let Err(e) = pdfhost_config::validation::validate(&config) {
        tracing::warn!("Command-line overrides rejected: {e}");
        config = file_config;
    }
    tracing::info!(
        url = %config.editor.url,
        locale = %config.editor.locale,
        "Config loaded"
    );

    // Ensure platform directories exist
    if let Err(e) = pdfhost_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    // Files named on the command line wait for the editor's ready signal
    let startup = files::startup_messages(args.open.as_deref(), &args.images);
    if !startup.is_empty() {
        tracing::info!(count = startup.len(), "Files queued for the editor");
    }

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::PdfHostApp::new(config, startup);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
