use crate::app::App;
use crate::domain::coerce::number_text;
use crate::domain::{
    seed_entries, BookingEditor, BookingEntry, DraftEntry, FieldName, FormSnapshot,
};
use astra::{Body, Response};
use chrono::{NaiveDate, NaiveDateTime};
use http::{Method, Request};
use std::io::Read;

/// Editor over the production seed data.
pub fn seeded_editor() -> BookingEditor {
    BookingEditor::new(seed_entries().expect("seed data is valid"))
}

/// Fresh app state, as `main` builds it.
pub fn init_test_app() -> App {
    App::new(seeded_editor())
}

pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn booking(guest: &str, checkin: NaiveDateTime, nights: i64) -> BookingEntry {
    let checkout = checkin + chrono::Duration::days(nights);
    BookingEntry::new(guest, nights, checkin, checkout, "Booked", 100.0).unwrap()
}

/// The values the rendered edit form would post for `draft`.
///
/// An unchecked checkbox posts nothing, as a browser would.
pub fn form_from_draft(draft: &DraftEntry) -> FormSnapshot {
    let mut fields = vec![(
        FieldName::CheckinDate.to_string(),
        draft.checkin_key().unwrap_or_default(),
    )];

    for (name, value) in [
        (FieldName::FivePercentTaxAmount, draft.five_percent_tax_amount),
        (FieldName::SevenPercentTaxAmount, draft.seven_percent_tax_amount),
        (FieldName::BaseRate, draft.base_rate),
    ] {
        fields.push((name.to_string(), value.map(number_text).unwrap_or_default()));
    }

    if draft.seven_percent_already_paid == Some(true) {
        fields.push((FieldName::SevenPercentAlreadyPaid.to_string(), "on".to_string()));
    }

    FormSnapshot::from_pairs(fields)
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
