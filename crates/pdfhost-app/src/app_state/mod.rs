//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the editor WebView, and the session that
//! talks to it.

mod core;
mod event_handler;
mod init;
mod polling;
mod session;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::PdfHostApp;
