use crate::attendance::AttendanceStore;
use crate::insights::InsightsEngine;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Portal, Request};
use crate::seed;
use crate::session::SessionStore;
use crate::store::Store;
use serde_json::json;
use std::path::PathBuf;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "workspacePath": state.workspace.as_ref().map(|p| p.to_string_lossy().to_string())
        }),
    )
}

fn handle_workspace_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);
    let Some(path) = p else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };

    let store = match Store::open(&path) {
        Ok(store) => store,
        Err(e) => return err(&req.id, "store_open_failed", format!("{e:?}"), None),
    };

    let classes = seed::seed_classes();
    let students = seed::seed_students(&classes);
    let mut attendance = AttendanceStore::new(classes, students);
    let mut sessions = SessionStore::new(seed::seeded_users());

    // Restore whatever the previous run persisted. Neither is validated
    // beyond deserializing; a malformed snapshot reads as absent.
    if let Err(e) = attendance.restore(&store) {
        return err(&req.id, "store_read_failed", format!("{e:?}"), None);
    }
    let restored = match sessions.restore(&store) {
        Ok(user) => user,
        Err(e) => return err(&req.id, "store_read_failed", format!("{e:?}"), None),
    };

    state.workspace = Some(path.clone());
    state.portal = Some(Portal {
        store,
        sessions,
        attendance,
        // The shell wires a real advisory client when it has one; the
        // daemon itself starts unconfigured.
        insights: InsightsEngine::new(None),
    });

    ok(
        &req.id,
        json!({
            "workspacePath": path.to_string_lossy(),
            "restoredUser": restored,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "workspace.select" => Some(handle_workspace_select(state, req)),
        _ => None,
    }
}
