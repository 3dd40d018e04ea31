//! Snapshot persistence for the agency's collections.
//!
//! One JSON file per logical collection, written in full on every mutation.
//! Writes go to a temp file first and are renamed into place, so an
//! interrupted write leaves the previous snapshot intact. There is no
//! incremental persistence and no cross-file transaction; the store applies
//! a mutation fully in memory before asking for a save.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::artist::Artist;
use crate::error::GigbookResult;
use crate::event::Event;
use crate::notification::Notification;
use crate::session::{AgencyProfile, Session};

const ARTISTS_FILE: &str = "artists.json";
const EVENTS_FILE: &str = "events.json";
const NOTIFICATIONS_FILE: &str = "notifications.json";
const PROFILE_FILE: &str = "profile.json";
const SESSION_FILE: &str = "session.json";

/// Everything a snapshot directory holds.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub artists: Vec<Artist>,
    pub events: Vec<Event>,
    pub notifications: Vec<Notification>,
    pub profile: Option<AgencyProfile>,
    pub session: Option<Session>,
}

/// A snapshot directory on disk.
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open (creating if needed) a snapshot directory.
    pub fn open(dir: impl Into<PathBuf>) -> GigbookResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(SnapshotStore { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Load all collections. Missing files read as empty collections, so a
    /// fresh directory loads as a blank agency.
    pub fn load(&self) -> GigbookResult<Snapshot> {
        Ok(Snapshot {
            artists: self.read_json(ARTISTS_FILE)?.unwrap_or_default(),
            events: self.read_json(EVENTS_FILE)?.unwrap_or_default(),
            notifications: self.read_json(NOTIFICATIONS_FILE)?.unwrap_or_default(),
            profile: self.read_json(PROFILE_FILE)?,
            session: self.read_json(SESSION_FILE)?,
        })
    }

    /// Write the full snapshot. Absent profile/session remove their files,
    /// matching "logout clears the pointer".
    pub fn save(
        &self,
        artists: &[Artist],
        events: &[Event],
        notifications: &[Notification],
        profile: Option<&AgencyProfile>,
        session: Option<&Session>,
    ) -> GigbookResult<()> {
        self.write_json(ARTISTS_FILE, &artists)?;
        self.write_json(EVENTS_FILE, &events)?;
        self.write_json(NOTIFICATIONS_FILE, &notifications)?;
        self.write_or_remove(PROFILE_FILE, profile)?;
        self.write_or_remove(SESSION_FILE, session)?;
        log::debug!("snapshot written to {}", self.dir.display());
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> GigbookResult<Option<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> GigbookResult<()> {
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!("{name}.tmp"));
        fs::write(&tmp, serde_json::to_string_pretty(value)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn write_or_remove<T: Serialize>(&self, name: &str, value: Option<&T>) -> GigbookResult<()> {
        match value {
            Some(value) => self.write_json(name, value),
            None => {
                let path = self.dir.join(name);
                if path.exists() {
                    fs::remove_file(&path)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Invitation;
    use crate::session::Role;
    use chrono::{NaiveDate, NaiveTime};

    fn make_snapshot() -> (Vec<Artist>, Vec<Event>, Vec<Notification>) {
        let mut elena = Artist::new("Elena Rossi", "elena@x.it", "Singer");
        elena.password = Some("AB12CD".to_string());
        elena.phone = Some("+39 333 1234567".to_string());

        let mut event = Event::new(
            "Gala di Primavera",
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );
        event.client = Some("Teatro dell'Opera".to_string());
        event.duration = "3h".to_string();
        event.revenue = Some(2000.0);
        event.invitations = vec![Invitation::new(&elena.id, 400.0)];

        let notification = Notification::for_event(
            crate::notification::NotificationTarget::Artist(elena.id.clone()),
            "New booking invitation",
            "You have been invited to 'Gala di Primavera'",
            &event.id,
        );

        (vec![elena], vec![event], vec![notification])
    }

    #[test]
    fn test_round_trip_reproduces_identical_collections() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open(dir.path()).unwrap();

        let (artists, events, notifications) = make_snapshot();
        let profile = AgencyProfile::new("Nexuop", "agency@example.com", "s3cret");
        let session = Session {
            role: Role::Artist(artists[0].id.clone()),
        };

        store
            .save(&artists, &events, &notifications, Some(&profile), Some(&session))
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.artists, artists);
        assert_eq!(loaded.events, events);
        assert_eq!(loaded.notifications, notifications);
        assert_eq!(loaded.profile, Some(profile));
        assert_eq!(loaded.session, Some(session));
    }

    #[test]
    fn test_fresh_directory_loads_as_blank_agency() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open(dir.path().join("data")).unwrap();

        let snapshot = store.load().unwrap();
        assert!(snapshot.artists.is_empty());
        assert!(snapshot.events.is_empty());
        assert!(snapshot.profile.is_none());
        assert!(snapshot.session.is_none());
    }

    #[test]
    fn test_absent_session_removes_the_pointer_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open(dir.path()).unwrap();

        let (artists, events, notifications) = make_snapshot();
        let profile = AgencyProfile::new("Nexuop", "agency@example.com", "s3cret");
        let session = Session { role: Role::Admin };

        store
            .save(&artists, &events, &notifications, Some(&profile), Some(&session))
            .unwrap();
        assert!(dir.path().join("session.json").exists());

        store
            .save(&artists, &events, &notifications, Some(&profile), None)
            .unwrap();
        assert!(!dir.path().join("session.json").exists());
        assert!(store.load().unwrap().session.is_none());
    }

    #[test]
    fn test_save_replaces_rather_than_appends() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open(dir.path()).unwrap();

        let (artists, events, notifications) = make_snapshot();
        store
            .save(&artists, &events, &notifications, None, None)
            .unwrap();
        store.save(&artists, &[], &notifications, None, None).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.events.is_empty());
        assert_eq!(loaded.artists.len(), 1);
    }
}
