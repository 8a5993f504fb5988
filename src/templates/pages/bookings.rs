// templates/pages/bookings.rs

use crate::domain::BookingEditor;
use crate::templates::{booking_table, desktop_layout, edit_form};
use maud::{html, Markup};

pub fn bookings_page(editor: &BookingEditor) -> Markup {
    desktop_layout(
        "Bookings",
        html! {
            main class="container" {
                @if editor.is_editing() {
                    (edit_form(editor.draft()))
                }
                h2 { "Customer Data" }
                (booking_table(editor.entries()))
            }
        },
    )
}
