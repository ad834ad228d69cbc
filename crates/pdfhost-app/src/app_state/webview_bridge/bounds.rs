//! The editor fills the whole window.

use winit::dpi::PhysicalSize;

use crate::app_state::core::PdfHostApp;

/// WebView bounds covering a window of the given inner size.
pub fn window_bounds(size: PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}

impl PdfHostApp {
    /// Resize the WebView to the window's current inner size.
    pub(in crate::app_state) fn sync_webview_bounds(&mut self) {
        let (Some(window), Some(session)) = (&self.window, &self.session) else {
            return;
        };
        let bounds = window_bounds(window.inner_size());
        if let Err(e) = session.shell().sink().set_bounds(bounds) {
            tracing::warn!(error = %e, "Failed to update webview bounds");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
