pub mod booking;
pub mod coerce;
pub mod editor;

pub use booking::{seed_entries, BookingEntry, DraftEntry, FieldName};
pub use editor::{BookingEditor, EditorState, FieldValue, FormSnapshot};
