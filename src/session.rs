use crate::domain::{Role, StudentDetails, User};
use crate::store::{Store, SESSION_KEY};
use uuid::Uuid;

/// Holds at most one authenticated identity, mirrored to the store under
/// `session-identity` on every login/logout so the in-memory and persisted
/// forms never diverge.
///
/// Login is find-or-synthesize over the seeded demo identities. It is not
/// authentication: there is no credential check and no failure path.
/// Integrators replacing this for production must substitute real
/// verification here.
pub struct SessionStore {
    seeded: Vec<User>,
    current: Option<User>,
}

impl SessionStore {
    pub fn new(seeded: Vec<User>) -> SessionStore {
        SessionStore {
            seeded,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Looks up a seeded identity by (email, role); when none matches,
    /// synthesizes one with a fresh id and a role-appropriate placeholder
    /// name. Always succeeds.
    pub fn login(&mut self, store: &Store, email: &str, role: Role) -> anyhow::Result<User> {
        let user = match self
            .seeded
            .iter()
            .find(|u| u.email == email && u.role == role)
        {
            Some(found) => found.clone(),
            None => synthesize_user(email, role),
        };
        store.put_json(SESSION_KEY, &user)?;
        self.current = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self, store: &Store) -> anyhow::Result<()> {
        store.delete(SESSION_KEY)?;
        self.current = None;
        Ok(())
    }

    /// Reads any persisted identity at workspace open and adopts it as
    /// current without re-validation.
    pub fn restore(&mut self, store: &Store) -> anyhow::Result<Option<User>> {
        let user: Option<User> = store.get_json(SESSION_KEY)?;
        self.current = user.clone();
        Ok(user)
    }
}

fn synthesize_user(email: &str, role: Role) -> User {
    let name = match role {
        Role::Admin => "Administrator",
        Role::Teacher => "Demo Teacher",
        Role::Student => "Demo Student",
    };
    let student_details = match role {
        Role::Student => Some(StudentDetails {
            roll_no: "DEMO-123".to_string(),
            class_id: "c1".to_string(),
            section: "A".to_string(),
        }),
        _ => None,
    };
    User {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        student_details,
    }
}
