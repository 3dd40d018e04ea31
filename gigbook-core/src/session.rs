//! Roles, the agency profile, and session resolution.
//!
//! The resolver maps a (requested role, credential) pair to an authenticated
//! identity and re-derives that identity from the persisted session pointer
//! on startup. Credentials are compared in plaintext against locally stored
//! values; there is no hashing, token expiry or rate limiting. That is an
//! accepted limitation of this single-user, local-only tool, not an oversight
//! to paper over.

use serde::{Deserialize, Serialize};

use crate::error::{GigbookError, GigbookResult};
use crate::store::AgencyStore;

/// Fixed identity for admin sessions; artists use their roster id.
pub const ADMIN_USER_ID: &str = "admin";

/// The closed set of authenticated identities.
///
/// Role checks go through the capability predicates below rather than ad-hoc
/// comparisons, so a new capability has exactly one place to live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Artist(String),
}

impl Role {
    /// Roster and event management: create/edit/delete artists and events,
    /// record payments.
    pub fn can_manage_roster(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }

    /// Only the invited artist may answer their own invitation.
    pub fn can_respond_to_invitation(&self, artist_id: &str) -> bool {
        matches!(self, Role::Artist(id) if id == artist_id)
    }

    pub fn user_id(&self) -> &str {
        match self {
            Role::SuperAdmin | Role::Admin => ADMIN_USER_ID,
            Role::Artist(id) => id,
        }
    }

    /// The view a freshly restored session lands on.
    pub fn default_view(&self) -> DefaultView {
        match self {
            Role::SuperAdmin | Role::Admin => DefaultView::Dashboard,
            Role::Artist(_) => DefaultView::MyCalendar,
        }
    }
}

/// Landing view after login or rehydration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultView {
    Dashboard,
    MyCalendar,
}

/// Which role a login attempt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRole {
    Admin,
    Artist,
}

/// A stored email/password pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    /// Case-insensitive email, case-sensitive password.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email.eq_ignore_ascii_case(email) && self.password == password
    }
}

/// The one agency record: display name plus the admin credential, and
/// optionally a distinguished super-admin credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyProfile {
    pub name: String,
    pub email: String,
    pub password: String,
    pub super_admin: Option<Credential>,
}

impl AgencyProfile {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        AgencyProfile {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            super_admin: None,
        }
    }

    fn matches_admin(&self, email: &str, password: &str) -> bool {
        self.email.eq_ignore_ascii_case(email) && self.password == password
    }
}

/// The active session, persisted as a pointer so a restart can restore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
}

// =============================================================================
// Session resolution
// =============================================================================

impl AgencyStore {
    /// One-time bootstrap: create the agency profile. Refused once a profile
    /// exists; only an explicit reset re-opens registration.
    pub fn register_agency(&mut self, name: &str, email: &str, password: &str) -> GigbookResult<()> {
        if self.profile.is_some() {
            return Err(GigbookError::AlreadyRegistered);
        }
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(GigbookError::Validation(
                "agency name, email and password are all required".to_string(),
            ));
        }

        log::info!("registering agency profile '{}'", name);
        self.profile = Some(AgencyProfile::new(name, email, password));
        self.persist()
    }

    /// Authenticate against locally stored credentials.
    ///
    /// Admin logins match the agency's super-admin credential (when one is
    /// configured) before the regular admin credential. Artist logins match
    /// roster records. A failed attempt leaves the session untouched.
    pub fn login(&mut self, email: &str, password: &str, requested: LoginRole) -> GigbookResult<Role> {
        if email.is_empty() || password.is_empty() {
            return Err(GigbookError::Validation(
                "email and password are required".to_string(),
            ));
        }

        let role = match requested {
            LoginRole::Admin => {
                let profile = self.profile.as_ref().ok_or(GigbookError::NotRegistered)?;
                if profile
                    .super_admin
                    .as_ref()
                    .is_some_and(|c| c.matches(email, password))
                {
                    Role::SuperAdmin
                } else if profile.matches_admin(email, password) {
                    Role::Admin
                } else {
                    return Err(GigbookError::Auth(
                        "invalid administrator credentials".to_string(),
                    ));
                }
            }
            LoginRole::Artist => {
                let artist = self
                    .artists
                    .iter()
                    .find(|a| a.matches_credentials(email, password))
                    .ok_or_else(|| {
                        GigbookError::Auth("wrong artist email or password".to_string())
                    })?;
                Role::Artist(artist.id.clone())
            }
        };

        log::info!("authenticated as {:?}", role);
        self.session = Some(Session { role: role.clone() });
        self.persist()?;
        Ok(role)
    }

    /// Clear the session pointer. Other collections are untouched.
    pub fn logout(&mut self) -> GigbookResult<()> {
        self.session = None;
        self.persist()
    }

    pub fn active_role(&self) -> Option<&Role> {
        self.session.as_ref().map(|s| &s.role)
    }

    /// Re-validate a restored session pointer against current data. An artist
    /// may have been removed since the last run, and the profile may have
    /// been reset; either way the stale session is discarded.
    ///
    /// Returns true if a stale session was cleared.
    pub(crate) fn revalidate_session(&mut self) -> bool {
        let valid = match self.session.as_ref().map(|s| &s.role) {
            Some(Role::Artist(id)) => self.artists.iter().any(|a| &a.id == id),
            Some(Role::Admin | Role::SuperAdmin) => self.profile.is_some(),
            None => return false,
        };

        if !valid {
            log::info!("discarding stale session pointer");
            self.session = None;
        }
        !valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::Artist;

    fn make_registered_store() -> AgencyStore {
        let mut store = AgencyStore::new();
        store
            .register_agency("Nexuop", "agency@example.com", "s3cret")
            .unwrap();
        store
    }

    fn add_elena(store: &mut AgencyStore) -> String {
        let mut elena = Artist::new("Elena Rossi", "elena@x.it", "Singer");
        elena.password = Some("AB12CD".to_string());
        let id = elena.id.clone();
        store.add_artist(elena).unwrap();
        id
    }

    #[test]
    fn test_register_is_one_time() {
        let mut store = make_registered_store();
        let err = store
            .register_agency("Other", "other@example.com", "pw")
            .unwrap_err();
        assert!(matches!(err, GigbookError::AlreadyRegistered));
    }

    #[test]
    fn test_admin_login_email_case_insensitive_password_exact() {
        let mut store = make_registered_store();

        let role = store
            .login("AGENCY@example.com", "s3cret", LoginRole::Admin)
            .unwrap();
        assert_eq!(role, Role::Admin);

        store.logout().unwrap();
        assert!(store
            .login("agency@example.com", "S3CRET", LoginRole::Admin)
            .is_err());
        assert!(store.active_role().is_none(), "failed login must not create a session");
    }

    #[test]
    fn test_super_admin_credential_wins_when_configured() {
        let mut store = make_registered_store();
        store.profile.as_mut().unwrap().super_admin = Some(Credential {
            email: "root@example.com".to_string(),
            password: "master".to_string(),
        });

        let role = store
            .login("root@example.com", "master", LoginRole::Admin)
            .unwrap();
        assert_eq!(role, Role::SuperAdmin);
        assert!(role.can_manage_roster());
    }

    #[test]
    fn test_artist_login_resolves_to_roster_identity() {
        let mut store = make_registered_store();
        let elena_id = add_elena(&mut store);

        let role = store
            .login("elena@x.it", "AB12CD", LoginRole::Artist)
            .unwrap();
        assert_eq!(role, Role::Artist(elena_id.clone()));
        assert!(role.can_respond_to_invitation(&elena_id));
        assert!(!role.can_manage_roster());
    }

    #[test]
    fn test_empty_credentials_are_a_validation_error() {
        let mut store = make_registered_store();
        let err = store.login("", "", LoginRole::Admin).unwrap_err();
        assert!(matches!(err, GigbookError::Validation(_)));
    }

    #[test]
    fn test_revalidate_discards_session_of_deleted_artist() {
        let mut store = make_registered_store();
        let elena_id = add_elena(&mut store);
        store
            .login("elena@x.it", "AB12CD", LoginRole::Artist)
            .unwrap();

        store.artists.retain(|a| a.id != elena_id);
        assert!(store.revalidate_session());
        assert!(store.active_role().is_none());
    }

    #[test]
    fn test_revalidate_keeps_valid_session() {
        let mut store = make_registered_store();
        store
            .login("agency@example.com", "s3cret", LoginRole::Admin)
            .unwrap();
        assert!(!store.revalidate_session());
        assert_eq!(store.active_role(), Some(&Role::Admin));
    }

    #[test]
    fn test_default_views_per_role() {
        assert_eq!(Role::Admin.default_view(), DefaultView::Dashboard);
        assert_eq!(
            Role::Artist("a1".to_string()).default_view(),
            DefaultView::MyCalendar
        );
    }
}
