use serde::Deserialize;

use crate::record::{DraftRecord, FinalRecord};

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// The whole application state: one draft being edited and the append-only
/// roster of submitted records. Owned by the request loop, which handles one
/// request at a time to completion.
pub struct AppState {
    pub draft: DraftRecord,
    pub roster: Vec<FinalRecord>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            draft: DraftRecord::default(),
            roster: Vec::new(),
        }
    }
}
