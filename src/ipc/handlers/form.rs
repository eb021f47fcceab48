use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::record::{self, DraftRecord, Field};
use serde_json::json;

fn handle_form_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "draft": state.draft }))
}

/// One keystroke's worth of edit: `{field, value}` goes through the
/// normalizer and replaces the held draft.
fn handle_form_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(field_name) = req.params.get("field").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.field", None);
    };
    let Some(field) = Field::parse(field_name) else {
        return err(
            &req.id,
            "bad_params",
            "field must be one of: id, firstName, lastName, grade1, grade2, grade3",
            Some(json!({ "field": field_name })),
        );
    };
    let Some(value) = req.params.get("value").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.value", None);
    };

    state.draft = record::normalize(&state.draft, field, value);
    ok(&req.id, json!({ "draft": state.draft }))
}

fn handle_form_reset(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.draft = DraftRecord::default();
    ok(&req.id, json!({ "draft": state.draft }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "form.get" => Some(handle_form_get(state, req)),
        "form.update" => Some(handle_form_update(state, req)),
        "form.reset" => Some(handle_form_reset(state, req)),
        _ => None,
    }
}
