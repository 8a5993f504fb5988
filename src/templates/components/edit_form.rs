use crate::domain::coerce::number_text;
use crate::domain::{DraftEntry, FieldName};
use maud::{html, Markup};

// Zero and NaN show as an empty input.
fn input_value(value: Option<f64>) -> String {
    match value {
        Some(n) if n != 0.0 && !n.is_nan() => number_text(n),
        _ => String::new(),
    }
}

fn number_input(label: &str, field: FieldName, value: Option<f64>) -> Markup {
    html! {
        div {
            label for=(field.as_str()) { (label) }
            input
                type="number"
                step="any"
                id=(field.as_str())
                name=(field.as_str())
                value=(input_value(value))
                hx-post=(format!("/draft/fields/{field}"))
                hx-trigger="change"
                hx-params=(field.as_str())
                hx-swap="none";
        }
    }
}

/// The form bound to the draft. Field changes are posted as they happen;
/// Submit and Cancel both post the whole form to one handler.
pub fn edit_form(draft: &DraftEntry) -> Markup {
    let paid = FieldName::SevenPercentAlreadyPaid;

    html! {
        form
            id="edit-form"
            method="post"
            action="/draft/submit"
            style="display: flex; flex-direction: column; gap: 1rem; margin: 1rem 0; align-items: start;"
        {
            @if let Some(guest) = &draft.guest_name {
                h3 { "Editing " (guest) }
            }
            div {
                input type="hidden" name=(FieldName::CheckinDate.as_str()) value=(draft.checkin_key().unwrap_or_default());
            }
            (number_input("5% Tax", FieldName::FivePercentTaxAmount, draft.five_percent_tax_amount))
            (number_input("7% Tax", FieldName::SevenPercentTaxAmount, draft.seven_percent_tax_amount))
            (number_input("Base Rate", FieldName::BaseRate, draft.base_rate))
            div {
                label for=(paid.as_str()) { "Seven % Paid?" }
                input
                    type="checkbox"
                    id=(paid.as_str())
                    name=(paid.as_str())
                    checked[draft.seven_percent_already_paid == Some(true)]
                    hx-post=(format!("/draft/fields/{paid}"))
                    hx-trigger="change"
                    hx-params=(paid.as_str())
                    hx-swap="none";
            }
            div style="display: flex; flex-direction: row; gap: 1rem;" {
                button type="submit" name="intent" value="submit" { "Submit" }
                button type="submit" name="intent" value="cancel" formnovalidate { "Cancel" }
            }
        }
    }
}
