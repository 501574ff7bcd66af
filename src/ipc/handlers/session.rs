use crate::domain::Role;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_mut() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let Some(email) = req.params.get("email").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing email", None);
    };
    let Some(role) = req
        .params
        .get("role")
        .and_then(|v| v.as_str())
        .and_then(Role::parse)
    else {
        return err(
            &req.id,
            "bad_params",
            "role must be ADMIN, TEACHER or STUDENT",
            None,
        );
    };

    match portal.sessions.login(&portal.store, email, role) {
        Ok(user) => ok(&req.id, json!({ "user": user })),
        Err(e) => err(&req.id, "store_write_failed", format!("{e:?}"), None),
    }
}

fn handle_logout(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_mut() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    match portal.sessions.logout(&portal.store) {
        Ok(()) => ok(&req.id, json!({})),
        Err(e) => err(&req.id, "store_write_failed", format!("{e:?}"), None),
    }
}

fn handle_current(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    ok(&req.id, json!({ "user": portal.sessions.current() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "session.login" => Some(handle_login(state, req)),
        "session.logout" => Some(handle_logout(state, req)),
        "session.current" => Some(handle_current(state, req)),
        _ => None,
    }
}
