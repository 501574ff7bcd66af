use crate::domain::{AttendanceRecord, ClassSection, Student};
use crate::store::{Store, LEDGER_KEY};

/// Owns the class list, the seeded roster, and the attendance ledger. All
/// other components go through these queries and `mark`; none holds a
/// private mutable copy.
///
/// Lookup misses are not errors: an unknown class, section, student, or
/// date simply yields an empty result set.
pub struct AttendanceStore {
    classes: Vec<ClassSection>,
    students: Vec<Student>,
    ledger: Vec<AttendanceRecord>,
}

impl AttendanceStore {
    pub fn new(classes: Vec<ClassSection>, students: Vec<Student>) -> AttendanceStore {
        AttendanceStore {
            classes,
            students,
            ledger: Vec::new(),
        }
    }

    /// Loads any persisted ledger snapshot at workspace open.
    pub fn restore(&mut self, store: &Store) -> anyhow::Result<()> {
        if let Some(records) = store.get_json::<Vec<AttendanceRecord>>(LEDGER_KEY)? {
            self.ledger = records;
        }
        Ok(())
    }

    pub fn classes(&self) -> &[ClassSection] {
        &self.classes
    }

    pub fn roster(&self) -> &[Student] {
        &self.students
    }

    pub fn students(&self, class_id: &str, section: Option<&str>) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.class_id == class_id)
            .filter(|s| section.map(|sec| s.section == sec).unwrap_or(true))
            .collect()
    }

    pub fn find_student(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == student_id)
    }

    pub fn ledger(&self) -> &[AttendanceRecord] {
        &self.ledger
    }

    pub fn by_student(&self, student_id: &str) -> Vec<&AttendanceRecord> {
        self.ledger
            .iter()
            .filter(|r| r.student_id == student_id)
            .collect()
    }

    /// All records for a class on one date, across sections. Callers narrow
    /// by section themselves when they need to.
    pub fn by_class_and_date(&self, class_id: &str, date: &str) -> Vec<&AttendanceRecord> {
        self.ledger
            .iter()
            .filter(|r| r.class_id == class_id && r.date == date)
            .collect()
    }

    /// Bulk upsert keyed by (student_id, date): every existing entry sharing
    /// a key with an incoming record is dropped, then all incoming records
    /// are appended. Submitting the same roster twice therefore leaves the
    /// ledger unchanged.
    ///
    /// The denormalized class/section on each record are recomputed from the
    /// referenced roster entry at write time; a caller-supplied value that
    /// disagrees is corrected and noted on stderr rather than trusted.
    /// Persists the full ledger snapshot after the mutation.
    pub fn mark(&mut self, store: &Store, records: Vec<AttendanceRecord>) -> anyhow::Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        let incoming: Vec<AttendanceRecord> =
            records.into_iter().map(|r| self.normalize(r)).collect();
        self.ledger
            .retain(|existing| !incoming.iter().any(|r| r.key() == existing.key()));
        self.ledger.extend(incoming);
        store.put_json(LEDGER_KEY, &self.ledger)
    }

    fn normalize(&self, mut record: AttendanceRecord) -> AttendanceRecord {
        if record.id.is_empty() {
            record.id = record.derived_id();
        }
        match self.find_student(&record.student_id) {
            Some(student) => {
                if record.class_id != student.class_id || record.section != student.section {
                    eprintln!(
                        "attendanced: record for {} carried {}/{} but roster says {}/{}",
                        record.student_id,
                        record.class_id,
                        record.section,
                        student.class_id,
                        student.section
                    );
                    record.class_id = student.class_id.clone();
                    record.section = student.section.clone();
                }
            }
            None => {
                eprintln!(
                    "attendanced: record for unknown student {} kept as submitted",
                    record.student_id
                );
            }
        }
        record
    }
}
