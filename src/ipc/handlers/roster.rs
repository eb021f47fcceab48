use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::record::{self, DraftRecord};
use serde_json::json;

/// Validate the held draft and, on success, append it to the roster and clear
/// the form. A failed submit changes nothing: the draft stays as-is so the
/// user can correct it and resubmit.
fn handle_roster_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    match record::validate_and_derive(&state.draft) {
        Ok(rec) => {
            state.roster.push(rec.clone());
            state.draft = DraftRecord::default();
            ok(
                &req.id,
                json!({
                    "record": rec,
                    "position": state.roster.len() - 1
                }),
            )
        }
        Err(failure) => err(&req.id, failure.kind.code(), failure.message, None),
    }
}

fn handle_roster_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    // `rows` is the display projection for the table the form renders:
    // joined name and a fixed 2-decimal average.
    let rows: Vec<serde_json::Value> = state
        .roster
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "fullName": format!("{} {}", r.first_name, r.last_name),
                "average": format!("{:.2}", r.average),
                "classification": r.classification,
            })
        })
        .collect();

    ok(
        &req.id,
        json!({
            "records": state.roster,
            "rows": rows
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "roster.submit" => Some(handle_roster_submit(state, req)),
        "roster.list" => Some(handle_roster_list(state, req)),
        _ => None,
    }
}
