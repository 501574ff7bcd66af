use crate::domain::{AttendanceRecord, AttendanceStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// How many ledger entries the population-wide dashboard numbers look at.
pub const RECENT_WINDOW_LEN: usize = 100;

/// Rounded integer attendance rate for a record set: percent PRESENT,
/// 0 when the set is empty.
pub fn attendance_rate(records: &[&AttendanceRecord]) -> u32 {
    if records.is_empty() {
        return 0;
    }
    let present = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count();
    ((present as f64 / records.len() as f64) * 100.0).round() as u32
}

/// The most recent `n` entries, ordered chronologically by date.
/// Unparsable dates sort first; entries sharing a date keep their ledger
/// insertion order.
pub fn recent_window<'a>(records: &'a [AttendanceRecord], n: usize) -> Vec<&'a AttendanceRecord> {
    let mut ordered: Vec<&AttendanceRecord> = records.iter().collect();
    ordered.sort_by_key(|r| NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").ok());
    let start = ordered.len().saturating_sub(n);
    ordered.split_off(start)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub excused: usize,
}

impl StatusTally {
    pub fn total(&self) -> usize {
        self.present + self.absent + self.late + self.excused
    }
}

pub fn status_tally(records: &[&AttendanceRecord]) -> StatusTally {
    let mut tally = StatusTally::default();
    for r in records {
        match r.status {
            AttendanceStatus::Present => tally.present += 1,
            AttendanceStatus::Absent => tally.absent += 1,
            AttendanceStatus::Late => tally.late += 1,
            AttendanceStatus::Excused => tally.excused += 1,
        }
    }
    tally
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    pub name: &'static str,
    pub value: usize,
}

/// Chart-oriented breakdown: one entry per status that actually occurs, in
/// fixed Present/Absent/Late/Excused order. Zero-count statuses are
/// omitted here but still visible in the raw tally.
pub fn distribution(tally: &StatusTally) -> Vec<DistributionEntry> {
    [
        (AttendanceStatus::Present, tally.present),
        (AttendanceStatus::Absent, tally.absent),
        (AttendanceStatus::Late, tally.late),
        (AttendanceStatus::Excused, tally.excused),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0)
    .map(|(status, value)| DistributionEntry {
        name: status.label(),
        value,
    })
    .collect()
}
