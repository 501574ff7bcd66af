use crate::domain::AttendanceRecord;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_mark(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_mut() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let Some(raw) = req.params.get("records") else {
        return err(&req.id, "bad_params", "missing records", None);
    };
    let records: Vec<AttendanceRecord> = match serde_json::from_value(raw.clone()) {
        Ok(v) => v,
        Err(e) => {
            return err(
                &req.id,
                "bad_params",
                format!("invalid records: {e}"),
                None,
            )
        }
    };
    let count = records.len();
    match portal.attendance.mark(&portal.store, records) {
        Ok(()) => ok(&req.id, json!({ "saved": count })),
        Err(e) => err(&req.id, "store_write_failed", format!("{e:?}"), None),
    }
}

fn handle_by_student(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let Some(student_id) = req.params.get("studentId").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing studentId", None);
    };
    let records = portal.attendance.by_student(student_id);
    ok(&req.id, json!({ "records": records }))
}

fn handle_by_class_and_date(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let Some(class_id) = req.params.get("classId").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing classId", None);
    };
    let Some(date) = req.params.get("date").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing date", None);
    };
    let records = portal.attendance.by_class_and_date(class_id, date);
    ok(&req.id, json!({ "records": records }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.mark" => Some(handle_mark(state, req)),
        "attendance.byStudent" => Some(handle_by_student(state, req)),
        "attendance.byClassAndDate" => Some(handle_by_class_and_date(state, req)),
        _ => None,
    }
}
