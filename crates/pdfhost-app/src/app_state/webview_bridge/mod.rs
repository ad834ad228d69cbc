//! Bridge between the window and the editor WebView.
//!
//! Handles bounds, IPC dispatch, dropped files, and draining
//! renderer events.

mod bounds;
mod file_handlers;
mod ipc_dispatch;
mod lifecycle;

pub(super) use bounds::window_bounds;
