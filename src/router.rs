use crate::app::App;
use crate::domain::coerce::js_boolean;
use crate::domain::{
    BookingEditor, BookingEntry, DraftEntry, EditorState, FieldName, FieldValue, FormSnapshot,
};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, no_content, see_other, ResultResp};
use crate::templates;
use astra::{Body, Request, ResponseBuilder};
use serde::Serialize;
use std::io::Read;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            app.with_editor(|editor| html_response(templates::pages::bookings_page(editor)))
        }
        ("GET", "/health") => health(),
        ("GET", "/bookings.json") => {
            app.with_editor(|editor| json_response(&EditorView::from(&*editor)))
        }
        ("POST", "/draft/submit") => submit_draft(req, app),
        ("POST", p) => {
            if let Some(index) = p
                .strip_prefix("/bookings/")
                .and_then(|rest| rest.strip_suffix("/edit"))
            {
                return select_for_edit(index, app);
            }
            if let Some(name) = p.strip_prefix("/draft/fields/") {
                return update_field(name, req, app);
            }
            Err(ServerError::NotFound)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Read-only view of the editor for `/bookings.json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditorView<'a> {
    state: EditorState,
    entries: &'a [BookingEntry],
    draft: Option<&'a DraftEntry>,
}

impl<'a> From<&'a BookingEditor> for EditorView<'a> {
    fn from(editor: &'a BookingEditor) -> Self {
        Self {
            state: editor.state(),
            entries: editor.entries(),
            draft: editor.is_editing().then(|| editor.draft()),
        }
    }
}

fn health() -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from("ok"))
        .map_err(|_| ServerError::InternalError)
}

fn select_for_edit(index: &str, app: &App) -> ResultResp {
    let index: usize = index.parse().map_err(|_| ServerError::NotFound)?;

    app.with_editor(|editor| {
        let draft = editor
            .select_entry_for_edit(index)
            .map_err(|_| ServerError::NotFound)?;
        tracing::info!(index, guest = ?draft.guest_name, "editing booking");
        Ok(())
    })?;

    see_other("/")
}

fn update_field(name: &str, req: Request, app: &App) -> ResultResp {
    let field = FieldName::parse(name)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown field {name}")))?;
    let form = FormSnapshot::from_pairs(parse_form(req)?);

    // An unchecked box posts nothing, so absence means false.
    let value = if field.is_checkbox() {
        FieldValue::Checked(js_boolean(form.get(field.as_str())))
    } else {
        FieldValue::Text(form.get(field.as_str()).unwrap_or_default().to_string())
    };

    app.with_editor(|editor| {
        if editor.update_draft_field(field, value) {
            Ok(())
        } else {
            Err(ServerError::BadRequest("no booking is open for editing".into()))
        }
    })?;

    tracing::debug!(%field, "draft field updated");
    no_content()
}

fn submit_draft(req: Request, app: &App) -> ResultResp {
    let snapshot = FormSnapshot::from_pairs(parse_form(req)?);
    let cancel = snapshot.get("intent") == Some("cancel");

    let applied = app.with_editor(|editor| {
        Ok(if cancel {
            editor.cancel_edit()
        } else {
            editor.submit_edit(&snapshot)
        })
    })?;

    if cancel {
        tracing::info!("edit discarded");
    } else {
        tracing::info!(applied, "edit submitted");
    }
    see_other("/")
}

fn parse_form(req: Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect())
}
