use crate::insights;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_generate(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_mut() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let prompt = insights::build_analysis_prompt(
        portal.attendance.ledger(),
        portal.attendance.roster(),
        portal.attendance.classes(),
    );
    let outcome = portal.insights.generate(&prompt);
    ok(
        &req.id,
        json!({
            "analysis": outcome.text,
            "pending": outcome.pending,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "insights.generate" => Some(handle_generate(state, req)),
        _ => None,
    }
}
