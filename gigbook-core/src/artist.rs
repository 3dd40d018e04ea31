//! Roster member records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A performer on the agency's roster.
///
/// Artists are created, edited and removed by admin actions. The optional
/// password is the artist's login credential, compared in plaintext (see the
/// crate docs for the trust model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Discipline, e.g. "Singer", "Acrobat", "DJ".
    pub discipline: String,
    pub phone: Option<String>,
    /// Ensemble or company the artist performs with, if any.
    pub group: Option<String>,
    pub password: Option<String>,
}

impl Artist {
    pub fn new(name: &str, email: &str, discipline: &str) -> Self {
        Artist {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            discipline: discipline.to_string(),
            phone: None,
            group: None,
            password: None,
        }
    }

    /// Plaintext credential check: case-insensitive email, exact password.
    /// Artists without a stored password can never log in.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
            && self.password.as_deref().is_some_and(|p| p == password)
    }
}
