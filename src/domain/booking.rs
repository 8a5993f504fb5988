// src/domain/booking.rs

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::domain::coerce::{js_boolean, js_number, parse_checkin};

/// Wire format of the hidden `checkinDate` form field.
pub const CHECKIN_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Error, PartialEq)]
pub enum BookingError {
    #[error("checkout {checkout} is not after checkin {checkin}")]
    InvalidStay {
        checkin: NaiveDateTime,
        checkout: NaiveDateTime,
    },
    #[error("invalid calendar date {0}-{1}-{2}")]
    InvalidDate(i32, u32, u32),
    #[error("no booking at row {0}")]
    NoSuchEntry(usize),
}

/// One row of the bookings table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEntry {
    pub guest_name: String,
    pub number_of_nights: i64,
    pub checkin_date: NaiveDateTime,
    pub checkout_date: NaiveDateTime,
    pub status: String,
    pub payout: f64,

    // Tax fields, editable through the form.
    pub base_rate: Option<f64>,
    pub five_percent_tax_amount: Option<f64>,
    pub seven_percent_tax_amount: Option<f64>,
    pub seven_percent_already_paid: Option<bool>,
}

impl BookingEntry {
    pub fn new(
        guest_name: impl Into<String>,
        number_of_nights: i64,
        checkin_date: NaiveDateTime,
        checkout_date: NaiveDateTime,
        status: impl Into<String>,
        payout: f64,
    ) -> Result<Self, BookingError> {
        if checkout_date <= checkin_date {
            return Err(BookingError::InvalidStay {
                checkin: checkin_date,
                checkout: checkout_date,
            });
        }

        Ok(Self {
            guest_name: guest_name.into(),
            number_of_nights,
            checkin_date,
            checkout_date,
            status: status.into(),
            payout,
            base_rate: None,
            five_percent_tax_amount: None,
            seven_percent_tax_amount: None,
            seven_percent_already_paid: None,
        })
    }

    pub fn is_seven_percent_paid(&self) -> bool {
        self.seven_percent_already_paid == Some(true)
    }
}

/// Partial copy of a `BookingEntry` while it is open in the edit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftEntry {
    pub guest_name: Option<String>,
    pub number_of_nights: Option<i64>,
    pub checkin_date: Option<NaiveDateTime>,
    pub checkout_date: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub payout: Option<f64>,
    pub base_rate: Option<f64>,
    pub five_percent_tax_amount: Option<f64>,
    pub seven_percent_tax_amount: Option<f64>,
    pub seven_percent_already_paid: Option<bool>,
}

impl DraftEntry {
    pub fn checkin_key(&self) -> Option<String> {
        self.checkin_date.map(|d| d.format(CHECKIN_FORMAT).to_string())
    }

    /// Sets a non-checkbox field from the raw text of its input.
    pub fn set_text(&mut self, field: FieldName, raw: &str) {
        match field {
            FieldName::GuestName => self.guest_name = Some(raw.to_string()),
            FieldName::Status => self.status = Some(raw.to_string()),
            FieldName::CheckinDate => self.checkin_date = parse_checkin(raw),
            FieldName::CheckoutDate => self.checkout_date = parse_checkin(raw),
            FieldName::NumberOfNights => {
                let n = js_number(raw);
                // Nights are whole; a fractional or NaN value leaves the field unset.
                self.number_of_nights = (n.is_finite() && n.fract() == 0.0).then_some(n as i64);
            }
            FieldName::Payout => self.payout = Some(js_number(raw)),
            FieldName::BaseRate => self.base_rate = Some(js_number(raw)),
            FieldName::FivePercentTaxAmount => self.five_percent_tax_amount = Some(js_number(raw)),
            FieldName::SevenPercentTaxAmount => {
                self.seven_percent_tax_amount = Some(js_number(raw))
            }
            FieldName::SevenPercentAlreadyPaid => {
                self.seven_percent_already_paid = Some(js_boolean(Some(raw)))
            }
        }
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.seven_percent_already_paid = Some(checked);
    }
}

impl From<&BookingEntry> for DraftEntry {
    fn from(entry: &BookingEntry) -> Self {
        Self {
            guest_name: Some(entry.guest_name.clone()),
            number_of_nights: Some(entry.number_of_nights),
            checkin_date: Some(entry.checkin_date),
            checkout_date: Some(entry.checkout_date),
            status: Some(entry.status.clone()),
            payout: Some(entry.payout),
            base_rate: entry.base_rate,
            five_percent_tax_amount: entry.five_percent_tax_amount,
            seven_percent_tax_amount: entry.seven_percent_tax_amount,
            seven_percent_already_paid: entry.seven_percent_already_paid,
        }
    }
}

/// Names of the inputs that can feed a draft, as they appear in form bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    GuestName,
    NumberOfNights,
    CheckinDate,
    CheckoutDate,
    Status,
    Payout,
    BaseRate,
    FivePercentTaxAmount,
    SevenPercentTaxAmount,
    SevenPercentAlreadyPaid,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::GuestName,
        FieldName::NumberOfNights,
        FieldName::CheckinDate,
        FieldName::CheckoutDate,
        FieldName::Status,
        FieldName::Payout,
        FieldName::BaseRate,
        FieldName::FivePercentTaxAmount,
        FieldName::SevenPercentTaxAmount,
        FieldName::SevenPercentAlreadyPaid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::GuestName => "guestName",
            FieldName::NumberOfNights => "numberOfNights",
            FieldName::CheckinDate => "checkinDate",
            FieldName::CheckoutDate => "checkoutDate",
            FieldName::Status => "status",
            FieldName::Payout => "payout",
            FieldName::BaseRate => "baseRate",
            FieldName::FivePercentTaxAmount => "fivePercentTaxAmount",
            FieldName::SevenPercentTaxAmount => "sevenPercentTaxAmount",
            FieldName::SevenPercentAlreadyPaid => "sevenPercentAlreadyPaid",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    pub fn is_checkbox(self) -> bool {
        self == FieldName::SevenPercentAlreadyPaid
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn local_midnight(year: i32, month: u32, day: u32) -> Result<NaiveDateTime, BookingError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(BookingError::InvalidDate(year, month, day))
}

/// The hard-coded table the editor starts with.
pub fn seed_entries() -> Result<Vec<BookingEntry>, BookingError> {
    Ok(vec![
        BookingEntry::new(
            "Bob Saget",
            10,
            local_midnight(2023, 4, 5)?,
            local_midnight(2023, 4, 15)?,
            "Booked",
            2321.42,
        )?,
        BookingEntry::new(
            "Tom Riddle",
            3,
            local_midnight(2023, 4, 15)?,
            local_midnight(2023, 4, 18)?,
            "Booked",
            532.22,
        )?,
        BookingEntry::new(
            "Collin F.",
            6,
            local_midnight(2023, 5, 5)?,
            local_midnight(2023, 5, 11)?,
            "Booked",
            1000.0,
        )?,
    ])
}
