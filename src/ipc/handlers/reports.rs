use crate::export;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::json;
use std::path::PathBuf;

/// Serializes the entire ledger snapshot as CSV. When `out` is given the
/// text is also written there for the shell's download flow.
fn handle_export_csv(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let ledger = portal.attendance.ledger();
    let csv = export::ledger_csv(ledger);

    if let Some(out) = req.params.get("out").and_then(|v| v.as_str()) {
        let out_path = PathBuf::from(out);
        if let Err(e) = std::fs::write(&out_path, &csv) {
            return err(
                &req.id,
                "export_write_failed",
                format!("{e}"),
                Some(json!({ "path": out })),
            );
        }
    }

    ok(&req.id, json!({ "csv": csv, "rows": ledger.len() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "reports.exportCsv" => Some(handle_export_csv(state, req)),
        _ => None,
    }
}
