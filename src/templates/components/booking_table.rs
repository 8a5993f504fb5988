use crate::domain::coerce::number_text;
use crate::domain::BookingEntry;
use chrono::NaiveDateTime;
use maud::{html, Markup};

/// Dates as a US browser locale shows them, e.g. 4/5/2023.
pub fn short_date(date: &NaiveDateTime) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `$amount`, or an empty cell when the amount was never set.
fn money(amount: Option<f64>) -> String {
    amount
        .map(|n| format!("${}", number_text(n)))
        .unwrap_or_default()
}

pub fn booking_table(entries: &[BookingEntry]) -> Markup {
    html! {
        table id="bookings" {
            thead {
                tr {
                    th { "Guest Name" }
                    th { "Checkin" }
                    th { "Checkout" }
                    th { "Status" }
                    th { "Payout" }
                    th { "5% Tax" }
                    th { "7% Tax" }
                    th { "Base Rate" }
                    th {}
                }
            }
            tbody {
                @for (index, entry) in entries.iter().enumerate() {
                    tr id=(format!("booking-{index}")) class=[entry.is_seven_percent_paid().then_some("paid")] {
                        td { (entry.guest_name) }
                        td { (short_date(&entry.checkin_date)) }
                        td { (short_date(&entry.checkout_date)) }
                        td { (entry.status) }
                        td { (money(Some(entry.payout))) }
                        td { (money(entry.five_percent_tax_amount)) }
                        td { (money(entry.seven_percent_tax_amount)) }
                        td { (money(entry.base_rate)) }
                        td {
                            form method="post" action=(format!("/bookings/{index}/edit")) style="margin: 0;" {
                                button type="submit" { "Edit" }
                            }
                        }
                    }
                }
            }
        }
    }
}
