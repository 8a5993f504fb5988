use crate::app::App;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app, post_form};

fn entries(app: &App) -> Vec<crate::domain::BookingEntry> {
    app.with_editor(|editor| Ok(editor.entries().to_vec())).unwrap()
}

fn open_row(app: &App, index: usize) {
    let resp = handle(post_form(&format!("/bookings/{index}/edit"), ""), app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );
}

#[test]
fn edit_shows_form_bound_to_the_row() {
    let app = init_test_app();
    open_row(&app, 0);

    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(body.contains(r#"id="edit-form""#));
    assert!(body.contains("Editing Bob Saget"));
    assert!(body.contains(r#"name="checkinDate" value="2023-04-05T00:00:00""#));
    assert!(body.contains(r#"hx-post="/draft/fields/baseRate""#));
}

#[test]
fn edit_of_missing_row_is_not_found() {
    let app = init_test_app();

    let result = handle(post_form("/bookings/7/edit", ""), &app);

    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn field_change_updates_draft_only() {
    let app = init_test_app();
    let before = entries(&app);
    open_row(&app, 0);

    let resp = handle(post_form("/draft/fields/baseRate", "baseRate=930"), &app).unwrap();
    assert_eq!(resp.status(), 204);

    let resp = handle(
        post_form("/draft/fields/sevenPercentAlreadyPaid", "sevenPercentAlreadyPaid=on"),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 204);

    assert_eq!(entries(&app), before);
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains(r#"value="930""#));
    assert!(body.contains("checked"));
}

#[test]
fn unchecking_the_box_posts_nothing_and_clears_it() {
    let app = init_test_app();
    open_row(&app, 0);
    handle(
        post_form("/draft/fields/sevenPercentAlreadyPaid", "sevenPercentAlreadyPaid=on"),
        &app,
    )
    .unwrap();

    handle(post_form("/draft/fields/sevenPercentAlreadyPaid", ""), &app).unwrap();

    let paid = app
        .with_editor(|editor| Ok(editor.draft().seven_percent_already_paid))
        .unwrap();
    assert_eq!(paid, Some(false));
}

#[test]
fn field_change_without_open_form_is_rejected() {
    let app = init_test_app();

    let result = handle(post_form("/draft/fields/baseRate", "baseRate=1"), &app);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_field_is_rejected() {
    let app = init_test_app();
    open_row(&app, 0);

    let result = handle(post_form("/draft/fields/nickname", "nickname=x"), &app);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn submit_merges_taxes_into_matching_booking() {
    let app = init_test_app();
    let before = entries(&app);
    open_row(&app, 0);

    let form = "checkinDate=2023-04-05T00%3A00%3A00\
                &fivePercentTaxAmount=50&sevenPercentTaxAmount=20&baseRate=930\
                &sevenPercentAlreadyPaid=on&intent=submit";
    let resp = handle(post_form("/draft/submit", form), &app).unwrap();
    assert_eq!(resp.status(), 303);

    let after = entries(&app);
    assert_eq!(after[0].five_percent_tax_amount, Some(50.0));
    assert_eq!(after[0].seven_percent_tax_amount, Some(20.0));
    assert_eq!(after[0].base_rate, Some(930.0));
    assert_eq!(after[0].seven_percent_already_paid, Some(true));
    assert_eq!(after[1], before[1]);
    assert_eq!(after[2], before[2]);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(!body.contains(r#"id="edit-form""#));
    assert!(body.contains(r#"id="booking-0" class="paid""#));
    assert!(body.contains("$930"));
}

#[test]
fn cancel_discards_the_edit() {
    let app = init_test_app();
    let before = entries(&app);
    open_row(&app, 1);
    handle(post_form("/draft/fields/baseRate", "baseRate=5"), &app).unwrap();

    let form = "checkinDate=2023-04-15T00%3A00%3A00&fivePercentTaxAmount=1\
                &sevenPercentTaxAmount=2&baseRate=5&intent=cancel";
    let resp = handle(post_form("/draft/submit", form), &app).unwrap();
    assert_eq!(resp.status(), 303);

    assert_eq!(entries(&app), before);
    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(!body.contains(r#"id="edit-form""#));
}

#[test]
fn invalid_number_is_shown_as_nan() {
    let app = init_test_app();
    open_row(&app, 2);

    let form = "checkinDate=2023-05-05T00%3A00%3A00&fivePercentTaxAmount=lots\
                &sevenPercentTaxAmount=7&baseRate=100";
    handle(post_form("/draft/submit", form), &app).unwrap();

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(body.contains("$NaN"));
    assert!(body.contains("$100"));
}
