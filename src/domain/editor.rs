// src/domain/editor.rs

use serde::Serialize;

use crate::domain::booking::{BookingEntry, BookingError, DraftEntry, FieldName};
use crate::domain::coerce::{js_boolean, js_number, parse_checkin};

/// Where the editor is in the edit-and-reconcile cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EditorState {
    /// Draft empty, no form shown.
    Idle,
    /// Draft populated from a row, form visible.
    Editing,
    /// A submission is being applied or discarded.
    Reconciling,
}

/// The named values a submitted edit form carried.
///
/// Repeated names resolve to the last value, like `Object.fromEntries`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    fields: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn number(&self, field: FieldName) -> f64 {
        // Number(undefined) is NaN, unlike Number("") which is 0.
        self.get(field.as_str()).map(js_number).unwrap_or(f64::NAN)
    }
}

/// A change coming from one input of the edit form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Checked(bool),
    Text(String),
}

/// Owns the bookings table and the draft currently open for editing.
#[derive(Debug, Clone)]
pub struct BookingEditor {
    entries: Vec<BookingEntry>,
    draft: DraftEntry,
    discard_pending: bool,
    state: EditorState,
}

impl BookingEditor {
    pub fn new(entries: Vec<BookingEntry>) -> Self {
        Self {
            entries,
            draft: DraftEntry::default(),
            discard_pending: false,
            state: EditorState::Idle,
        }
    }

    pub fn entries(&self) -> &[BookingEntry] {
        &self.entries
    }

    pub fn draft(&self) -> &DraftEntry {
        &self.draft
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditorState::Editing
    }

    /// Opens the row at `index` in the edit form, replacing any prior draft.
    pub fn select_entry_for_edit(&mut self, index: usize) -> Result<&DraftEntry, BookingError> {
        let entry = self
            .entries
            .get(index)
            .ok_or(BookingError::NoSuchEntry(index))?;

        self.draft = DraftEntry::from(entry);
        self.state = EditorState::Editing;
        Ok(&self.draft)
    }

    /// Applies one input change to the draft. Returns false when no form is
    /// open or the value does not fit the field.
    pub fn update_draft_field(&mut self, field: FieldName, value: FieldValue) -> bool {
        if self.state != EditorState::Editing {
            return false;
        }

        match value {
            FieldValue::Checked(checked) if field.is_checkbox() => self.draft.set_checked(checked),
            // Only the checkbox input produces a checked state.
            FieldValue::Checked(_) => return false,
            FieldValue::Text(raw) => self.draft.set_text(field, &raw),
        }
        true
    }

    /// Discards the pending edit through the same path as a submission.
    pub fn cancel_edit(&mut self) -> usize {
        self.discard_pending = true;
        self.submit_edit(&FormSnapshot::default())
    }

    /// Merges the submitted tax fields into every entry whose check-in
    /// matches the snapshot, unless a discard is pending, then resets the
    /// draft. Returns how many entries were changed.
    pub fn submit_edit(&mut self, snapshot: &FormSnapshot) -> usize {
        self.state = EditorState::Reconciling;

        let applied = if self.discard_pending {
            0
        } else {
            self.merge(snapshot)
        };

        self.discard_pending = false;
        self.draft = DraftEntry::default();
        self.state = EditorState::Idle;
        applied
    }

    fn merge(&mut self, snapshot: &FormSnapshot) -> usize {
        let Some(key) = snapshot
            .get(FieldName::CheckinDate.as_str())
            .and_then(parse_checkin)
            .map(|d| d.and_utc().timestamp_millis())
        else {
            return 0;
        };

        let five = snapshot.number(FieldName::FivePercentTaxAmount);
        let seven = snapshot.number(FieldName::SevenPercentTaxAmount);
        let base = snapshot.number(FieldName::BaseRate);
        let paid = js_boolean(snapshot.get(FieldName::SevenPercentAlreadyPaid.as_str()));

        let mut applied = 0;
        for entry in self
            .entries
            .iter_mut()
            .filter(|e| e.checkin_date.and_utc().timestamp_millis() == key)
        {
            entry.five_percent_tax_amount = Some(five);
            entry.seven_percent_tax_amount = Some(seven);
            entry.base_rate = Some(base);
            entry.seven_percent_already_paid = Some(paid);
            applied += 1;
        }

        if applied > 1 {
            tracing::warn!(applied, "check-in date shared by several bookings; all were updated");
        }
        applied
    }
}
