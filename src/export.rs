use crate::domain::AttendanceRecord;

/// Serializes the entire ledger snapshot as CSV: a header row plus one row
/// per entry, columns Date, Student ID, Class, Section, Status. No
/// filtering or aggregation; the consumer handles the download side.
pub fn ledger_csv(records: &[AttendanceRecord]) -> String {
    let mut csv = String::from("Date,Student ID,Class,Section,Status\n");
    for r in records {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_quote(&r.date),
            csv_quote(&r.student_id),
            csv_quote(&r.class_id),
            csv_quote(&r.section),
            r.status.as_str(),
        ));
    }
    csv
}

fn csv_quote(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
