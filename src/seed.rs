use crate::domain::{ClassSection, Role, Student, StudentDetails, User};

/// The fixed class list. Reference data only; nothing mutates it after
/// workspace open.
pub fn seed_classes() -> Vec<ClassSection> {
    vec![
        ClassSection {
            id: "c1".to_string(),
            name: "BS Commerce 1st Sem".to_string(),
            sections: vec!["A".to_string(), "B".to_string()],
        },
        ClassSection {
            id: "c2".to_string(),
            name: "BS Commerce 3rd Sem".to_string(),
            sections: vec!["A".to_string()],
        },
        ClassSection {
            id: "c3".to_string(),
            name: "Intermediate Part 1".to_string(),
            sections: vec!["Green".to_string(), "Blue".to_string()],
        },
    ]
}

const ROSTER_NAMES: [&str; 8] = [
    "Ali Khan",
    "Fatima Bibi",
    "Usman Zafar",
    "Ayesha Gul",
    "Hamza Tariq",
    "Sana Mir",
    "Bilal Ahmed",
    "Zainab Noor",
];

const STUDENTS_PER_SECTION: usize = 5;

/// Deterministic roster: 5 students per class/section, ids s1.., names
/// cycled from a fixed list. A pure function of the class list, so the same
/// input always reproduces the same roster.
pub fn seed_students(classes: &[ClassSection]) -> Vec<Student> {
    let mut out = Vec::new();
    let mut id_counter: usize = 1;
    for cls in classes {
        for sec in &cls.sections {
            for _ in 0..STUDENTS_PER_SECTION {
                out.push(Student {
                    id: format!("s{}", id_counter),
                    user_id: format!("u_s{}", id_counter),
                    name: format!(
                        "{} ({})",
                        ROSTER_NAMES[id_counter % ROSTER_NAMES.len()],
                        sec
                    ),
                    roll_no: format!("ROLL-{}-{}-{}", cls.id, sec, id_counter),
                    class_id: cls.id.clone(),
                    section: sec.clone(),
                });
                id_counter += 1;
            }
        }
    }
    out
}

/// The demo identities known to `session.login`. This is not a credential
/// table; login falls back to synthesizing an identity when no entry
/// matches (see `SessionStore::login`).
pub fn seeded_users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Dr. Admin".to_string(),
            email: "admin@gcc.edu".to_string(),
            role: Role::Admin,
            student_details: None,
        },
        User {
            id: "u2".to_string(),
            name: "Prof. Junaid".to_string(),
            email: "teacher@gcc.edu".to_string(),
            role: Role::Teacher,
            student_details: None,
        },
        User {
            id: "u3".to_string(),
            name: "Bilal Khan".to_string(),
            email: "student@gcc.edu".to_string(),
            role: Role::Student,
            student_details: Some(StudentDetails {
                roll_no: "BS-2023-045".to_string(),
                class_id: "c1".to_string(),
                section: "A".to_string(),
            }),
        },
    ]
}
