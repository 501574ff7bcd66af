use crate::domain::AttendanceRecord;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::stats;
use serde_json::json;

/// Population-wide dashboard numbers over the recent window.
fn handle_overview(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let ledger = portal.attendance.ledger();
    let window = stats::recent_window(ledger, stats::RECENT_WINDOW_LEN);
    let tally = stats::status_tally(&window);
    ok(
        &req.id,
        json!({
            "totalStudents": portal.attendance.roster().len(),
            "totalClasses": portal.attendance.classes().len(),
            "attendanceRate": stats::attendance_rate(&window),
            "recentRecords": window.len(),
            "tally": tally,
            "distribution": stats::distribution(&tally),
        }),
    )
}

fn handle_student(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let Some(student_id) = req.params.get("studentId").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing studentId", None);
    };
    let records = portal.attendance.by_student(student_id);
    let tally = stats::status_tally(&records);
    ok(
        &req.id,
        json!({
            "rate": stats::attendance_rate(&records),
            "present": tally.present,
            "absent": tally.absent,
            "total": tally.total(),
            "tally": tally,
            "distribution": stats::distribution(&tally),
        }),
    )
}

/// Status breakdown over the whole ledger, or over one student's records
/// when `studentId` is given. Feeds both charts.
fn handle_distribution(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let records: Vec<&AttendanceRecord> =
        match req.params.get("studentId").and_then(|v| v.as_str()) {
            Some(student_id) => portal.attendance.by_student(student_id),
            None => portal.attendance.ledger().iter().collect(),
        };
    let tally = stats::status_tally(&records);
    ok(
        &req.id,
        json!({
            "tally": tally,
            "distribution": stats::distribution(&tally),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "stats.overview" => Some(handle_overview(state, req)),
        "stats.student" => Some(handle_student(state, req)),
        "stats.distribution" => Some(handle_distribution(state, req)),
        _ => None,
    }
}
