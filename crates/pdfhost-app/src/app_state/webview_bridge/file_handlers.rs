//! Files dropped onto the window.

use std::path::Path;

use crate::app_state::core::PdfHostApp;
use crate::files;

impl PdfHostApp {
    /// Load a dropped file into the editor: PDFs replace the document,
    /// images are added to it.
    pub(in crate::app_state) fn handle_dropped_file(&mut self, path: &Path) {
        let message = match files::load_file(path) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring dropped file: {e}");
                return;
            }
        };

        tracing::info!(
            path = %path.display(),
            kind = %message.message_type(),
            "File dropped"
        );

        match &mut self.session {
            Some(session) => session.submit(message),
            None => self.startup.push(message),
        }
    }
}
