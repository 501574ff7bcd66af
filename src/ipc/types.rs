use std::path::PathBuf;

use serde::Deserialize;

use crate::attendance::AttendanceStore;
use crate::insights::InsightsEngine;
use crate::session::SessionStore;
use crate::store::Store;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Everything a workspace owns once selected: the durable kv store plus the
/// in-memory stores constructed over it. Built once on `workspace.select`
/// and passed to handlers by reference; there is no ambient state.
pub struct Portal {
    pub store: Store,
    pub sessions: SessionStore,
    pub attendance: AttendanceStore,
    pub insights: InsightsEngine,
}

pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub portal: Option<Portal>,
}
