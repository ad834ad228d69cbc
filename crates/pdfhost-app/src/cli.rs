use std::path::PathBuf;

use clap::Parser;
use pdfhost_config::PdfHostConfig;

/// pdfhost: a desktop shell around a web-based PDF editor.
#[derive(Parser, Debug)]
#[command(name = "pdfhost", version, about)]
pub struct Args {
    /// Editor URL override.
    #[arg(long)]
    pub url: Option<String>,

    /// PDF to load once the editor is ready.
    #[arg(long, value_name = "FILE")]
    pub open: Option<PathBuf>,

    /// Image to add once the editor is ready. May be repeated.
    #[arg(long = "image", value_name = "FILE")]
    pub images: Vec<PathBuf>,

    /// Directory where saved PDFs are written.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. `pdfhost=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut PdfHostConfig) {
        if let Some(url) = &self.url {
            config.editor.url = url.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.share.output_dir = dir.clone();
        }
    }
}
