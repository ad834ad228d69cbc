//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, ModifiersState};
use winit::window::WindowId;

use super::core::PdfHostApp;

/// `Ctrl+S`, or `Cmd+S` on macOS.
fn is_save_shortcut(key: &Key, modifiers: ModifiersState) -> bool {
    let primary = if cfg!(target_os = "macos") {
        modifiers.super_key()
    } else {
        modifiers.control_key()
    };
    if !primary || modifiers.alt_key() {
        return false;
    }
    matches!(key, Key::Character(c) if c.eq_ignore_ascii_case("s"))
}

impl ApplicationHandler for PdfHostApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds();
                }
            }

            WindowEvent::DroppedFile(path) => {
                self.handle_dropped_file(&path);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl PdfHostApp {
    /// Keys reaching the host window. Only the save shortcut is ours.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if !is_save_shortcut(&event.logical_key, self.modifiers) {
            return;
        }
        match &mut self.session {
            Some(session) => {
                session.request_save();
            }
            None => tracing::warn!("Save shortcut before the editor exists"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
