use std::sync::Mutex;

use crate::domain::BookingEditor;
use crate::errors::ServerError;

/// Shared server state: the single editor every request acts on.
pub struct App {
    editor: Mutex<BookingEditor>,
}

impl App {
    pub fn new(editor: BookingEditor) -> Self {
        Self {
            editor: Mutex::new(editor),
        }
    }

    /// Runs `f` with exclusive access to the editor, so events apply one at a time.
    pub fn with_editor<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut BookingEditor) -> Result<T, ServerError>,
    {
        let mut editor = self.editor.lock().map_err(|_| {
            tracing::error!("editor lock poisoned");
            ServerError::InternalError
        })?;
        f(&mut editor)
    }
}
