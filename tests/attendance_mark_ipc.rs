use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_attendanced");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn attendanced");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn roster_records(student_ids: &[&str], date: &str, statuses: &[&str]) -> serde_json::Value {
    let records: Vec<serde_json::Value> = student_ids
        .iter()
        .zip(statuses)
        .map(|(sid, status)| {
            json!({
                "studentId": sid,
                "classId": "c1",
                "section": "A",
                "date": date,
                "status": status,
                "markedBy": "u2"
            })
        })
        .collect();
    json!({ "records": records })
}

#[test]
fn full_roster_resubmission_replaces_without_duplicating() {
    let workspace = temp_dir("attendanced-mark-resubmit");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    let listed = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "students.list",
        json!({ "classId": "c1", "section": "A" }),
    );
    let students = listed
        .get("students")
        .and_then(|v| v.as_array())
        .expect("students array");
    assert_eq!(students.len(), 5);
    let ids: Vec<&str> = students
        .iter()
        .map(|s| s.get("id").and_then(|v| v.as_str()).expect("id"))
        .collect();

    let all_present = vec!["PRESENT"; 5];
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "attendance.mark",
        roster_records(&ids, "2024-01-10", &all_present),
    );
    let on_date = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "attendance.byClassAndDate",
        json!({ "classId": "c1", "date": "2024-01-10" }),
    );
    let records = on_date
        .get("records")
        .and_then(|v| v.as_array())
        .expect("records");
    assert_eq!(records.len(), 5);
    assert!(records
        .iter()
        .all(|r| r.get("status").and_then(|v| v.as_str()) == Some("PRESENT")));

    // Same roster again with one student flipped to ABSENT.
    let mut statuses = all_present.clone();
    statuses[2] = "ABSENT";
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "attendance.mark",
        roster_records(&ids, "2024-01-10", &statuses),
    );
    let on_date = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "attendance.byClassAndDate",
        json!({ "classId": "c1", "date": "2024-01-10" }),
    );
    let records = on_date
        .get("records")
        .and_then(|v| v.as_array())
        .expect("records");
    assert_eq!(records.len(), 5, "resubmission must not duplicate");
    let absents = records
        .iter()
        .filter(|r| r.get("status").and_then(|v| v.as_str()) == Some("ABSENT"))
        .count();
    assert_eq!(absents, 1);

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn ledger_persists_across_process_restart() {
    let workspace = temp_dir("attendanced-mark-persist");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "attendance.mark",
        roster_records(&["s1", "s2"], "2024-02-01", &["LATE", "EXCUSED"]),
    );
    drop(stdin);
    let _ = child.wait();

    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let by_student = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "attendance.byStudent",
        json!({ "studentId": "s1" }),
    );
    let records = by_student
        .get("records")
        .and_then(|v| v.as_array())
        .expect("records");
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].get("status").and_then(|v| v.as_str()),
        Some("LATE")
    );
    assert_eq!(
        records[0].get("id").and_then(|v| v.as_str()),
        Some("s1-2024-02-01")
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn unknown_lookups_return_empty_collections_not_errors() {
    let workspace = temp_dir("attendanced-mark-misses");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    let listed = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "students.list",
        json!({ "classId": "no-such-class" }),
    );
    assert_eq!(
        listed.get("students").and_then(|v| v.as_array()).map(Vec::len),
        Some(0)
    );

    let by_student = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "attendance.byStudent",
        json!({ "studentId": "ghost" }),
    );
    assert_eq!(
        by_student
            .get("records")
            .and_then(|v| v.as_array())
            .map(Vec::len),
        Some(0)
    );

    drop(stdin);
    let _ = child.wait();
}
