//! The entity store: canonical collections plus CRUD-with-cascade operations.
//!
//! `AgencyStore` is the single source of truth. Every view is derived from it
//! on demand (see `views`), and every successful mutation is followed by a
//! full snapshot write. Mutations apply completely in memory, cascades
//! included, before anything is persisted, so a failed write leaves the
//! previous on-disk snapshot intact rather than a half-applied one.
//!
//! Targeted updates against missing or ineligible records (an invitation that
//! is no longer pending, an unknown event id) are deliberate no-ops returning
//! `Ok(false)`: the calling surface never offers those actions, and a hostile
//! or stale call must neither crash nor corrupt state.

use uuid::Uuid;

use crate::artist::Artist;
use crate::error::{GigbookError, GigbookResult};
use crate::event::{Event, InvitationStatus, PaymentStatus};
use crate::notification::{Notification, NotificationTarget};
use crate::session::{AgencyProfile, Role, Session};
use crate::snapshot::SnapshotStore;

pub struct AgencyStore {
    pub(crate) artists: Vec<Artist>,
    pub(crate) events: Vec<Event>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) profile: Option<AgencyProfile>,
    pub(crate) session: Option<Session>,
    storage: Option<SnapshotStore>,
    rehydration: Rehydration,
}

/// Outcome of re-validating the persisted session pointer at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rehydration {
    /// True when a stale pointer was discarded because the identity it named
    /// no longer exists (the "your profile was removed" case).
    pub forced_logout: bool,
}

/// What `remove_artist` did, so callers can surface the forced logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtistRemoval {
    pub removed: bool,
    pub invitations_removed: usize,
    /// True when the removed artist was the active session identity.
    pub signed_out: bool,
}

impl AgencyStore {
    /// An empty in-memory store with no persistence attached.
    pub fn new() -> Self {
        AgencyStore {
            artists: Vec::new(),
            events: Vec::new(),
            notifications: Vec::new(),
            profile: None,
            session: None,
            storage: None,
            rehydration: Rehydration::default(),
        }
    }

    /// Load the store from a snapshot directory and re-validate the restored
    /// session pointer (the artist it names may have been removed since the
    /// last run).
    pub fn open(storage: SnapshotStore) -> GigbookResult<Self> {
        let snapshot = storage.load()?;

        let mut store = AgencyStore {
            artists: snapshot.artists,
            events: snapshot.events,
            notifications: snapshot.notifications,
            profile: snapshot.profile,
            session: snapshot.session,
            storage: Some(storage),
            rehydration: Rehydration::default(),
        };

        if store.revalidate_session() {
            store.rehydration.forced_logout = true;
            store.persist()?;
        }
        Ok(store)
    }

    /// What happened to the persisted session pointer when this store was
    /// opened. Callers surface the forced-logout notice from here.
    pub fn rehydration(&self) -> &Rehydration {
        &self.rehydration
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn profile(&self) -> Option<&AgencyProfile> {
        self.profile.as_ref()
    }

    pub fn artist(&self, artist_id: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == artist_id)
    }

    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    // =========================================================================
    // Roster operations
    // =========================================================================

    /// Append an artist, generating an id when none is set.
    pub fn add_artist(&mut self, mut artist: Artist) -> GigbookResult<()> {
        if artist.id.is_empty() {
            artist.id = Uuid::new_v4().to_string();
        }
        if self.artists.iter().any(|a| a.id == artist.id) {
            return Err(GigbookError::DuplicateArtist(artist.id));
        }

        log::debug!("adding artist '{}' ({})", artist.name, artist.id);
        self.artists.push(artist);
        self.persist()
    }

    /// Remove an artist and cascade: every invitation referencing the artist,
    /// across every event, goes with them in the same operation. If the
    /// removed artist is the active session identity, the session is cleared
    /// so no valid session can reference a nonexistent artist.
    pub fn remove_artist(&mut self, artist_id: &str) -> GigbookResult<ArtistRemoval> {
        let before = self.artists.len();
        self.artists.retain(|a| a.id != artist_id);
        if self.artists.len() == before {
            return Ok(ArtistRemoval {
                removed: false,
                invitations_removed: 0,
                signed_out: false,
            });
        }

        let mut invitations_removed = 0;
        for event in &mut self.events {
            let had = event.invitations.len();
            event.invitations.retain(|i| i.artist_id != artist_id);
            invitations_removed += had - event.invitations.len();
        }

        let signed_out = self
            .session
            .as_ref()
            .is_some_and(|s| s.role == Role::Artist(artist_id.to_string()));
        if signed_out {
            log::info!("removed artist {} was logged in; forcing logout", artist_id);
            self.session = None;
        }

        log::debug!(
            "removed artist {} and {} invitation(s)",
            artist_id,
            invitations_removed
        );
        self.persist()?;
        Ok(ArtistRemoval {
            removed: true,
            invitations_removed,
            signed_out,
        })
    }

    /// Wholesale replacement of the matching record; callers supply the full
    /// updated entity, there is no partial-field merge. Unknown id: no-op.
    pub fn update_artist(&mut self, artist: Artist) -> GigbookResult<bool> {
        match self.artists.iter_mut().find(|a| a.id == artist.id) {
            Some(slot) => {
                *slot = artist;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    /// Append an event and synthesize one notification per invited artist.
    ///
    /// Rejects an event carrying two invitations for the same artist (the
    /// at-most-one-per-pair invariant) or an invitation for an artist not on
    /// the roster.
    pub fn add_event(&mut self, mut event: Event) -> GigbookResult<()> {
        if event.id.is_empty() {
            event.id = Uuid::new_v4().to_string();
        }
        if self.events.iter().any(|e| e.id == event.id) {
            return Err(GigbookError::Validation(format!(
                "an event with id '{}' already exists",
                event.id
            )));
        }
        for (idx, invitation) in event.invitations.iter().enumerate() {
            if event.invitations[..idx]
                .iter()
                .any(|other| other.artist_id == invitation.artist_id)
            {
                return Err(GigbookError::DuplicateInvitation(
                    event.id.clone(),
                    invitation.artist_id.clone(),
                ));
            }
            if self.artist(&invitation.artist_id).is_none() {
                return Err(GigbookError::UnknownArtist(invitation.artist_id.clone()));
            }
        }

        for invitation in &event.invitations {
            self.notifications.push(Notification::for_event(
                NotificationTarget::Artist(invitation.artist_id.clone()),
                "New booking invitation",
                &format!("You have been invited to '{}' on {}", event.title, event.date),
                &event.id,
            ));
        }

        log::debug!(
            "adding event '{}' with {} invitation(s)",
            event.title,
            event.invitations.len()
        );
        self.events.push(event);
        self.persist()
    }

    /// Remove an event together with its embedded invitations, notifying the
    /// artists that were on the lineup. Unknown id: no-op.
    pub fn remove_event(&mut self, event_id: &str) -> GigbookResult<bool> {
        let Some(pos) = self.events.iter().position(|e| e.id == event_id) else {
            return Ok(false);
        };
        let event = self.events.remove(pos);

        for invitation in &event.invitations {
            self.notifications.push(Notification::for_event(
                NotificationTarget::Artist(invitation.artist_id.clone()),
                "Booking cancelled",
                &format!("'{}' has been removed from the calendar", event.title),
                &event.id,
            ));
        }

        log::debug!("removed event '{}' ({})", event.title, event.id);
        self.persist()?;
        Ok(true)
    }

    // =========================================================================
    // Invitation state machine
    // =========================================================================

    /// An artist answers their invitation.
    ///
    /// The transition happens only when the active session is the invited
    /// artist, the invitation is still pending, and the answer is Confirmed
    /// or Rejected. Every other combination declines to mutate and returns
    /// `Ok(false)`.
    pub fn update_invitation_status(
        &mut self,
        event_id: &str,
        artist_id: &str,
        status: InvitationStatus,
    ) -> GigbookResult<bool> {
        let allowed = self
            .session
            .as_ref()
            .is_some_and(|s| s.role.can_respond_to_invitation(artist_id));
        if !allowed {
            return Ok(false);
        }
        if !matches!(status, InvitationStatus::Confirmed | InvitationStatus::Rejected) {
            return Ok(false);
        }

        let Some(invitation) = self
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .and_then(|e| e.invitations.iter_mut().find(|i| i.artist_id == artist_id))
        else {
            return Ok(false);
        };
        if invitation.status != InvitationStatus::Pending {
            return Ok(false);
        }

        log::debug!(
            "invitation ({}, {}) -> {:?}",
            event_id,
            artist_id,
            status
        );
        invitation.status = status;
        self.persist()?;
        Ok(true)
    }

    /// Record a payment transition for an invitation: Pending -> Paid when the
    /// fee is paid out, Paid -> Confirmed when receipt is acknowledged.
    ///
    /// Admin-only, but deliberately not gated on the invitation's status
    /// field: a fee can be paid while the invitation is formally still
    /// pending. Illegal transitions and unknown targets return `Ok(false)`.
    pub fn set_payment_status(
        &mut self,
        event_id: &str,
        artist_id: &str,
        status: PaymentStatus,
    ) -> GigbookResult<bool> {
        let allowed = self
            .session
            .as_ref()
            .is_some_and(|s| s.role.can_manage_roster());
        if !allowed {
            return Ok(false);
        }

        let Some(invitation) = self
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .and_then(|e| e.invitations.iter_mut().find(|i| i.artist_id == artist_id))
        else {
            return Ok(false);
        };

        let legal = matches!(
            (invitation.payment_status, status),
            (PaymentStatus::Pending, PaymentStatus::Paid)
                | (PaymentStatus::Paid, PaymentStatus::Confirmed)
        );
        if !legal {
            return Ok(false);
        }

        invitation.payment_status = status;
        self.persist()?;
        Ok(true)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Mark a notification read. Idempotent: re-reading an already-read
    /// notification (or an unknown id) changes nothing.
    pub fn mark_notification_read(&mut self, notification_id: &str) -> GigbookResult<bool> {
        let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id && !n.read)
        else {
            return Ok(false);
        };

        notification.read = true;
        self.persist()?;
        Ok(true)
    }

    /// Notifications visible to a role: admins see everything, artists see
    /// what is addressed to them or to everybody.
    pub fn notifications_for(&self, role: &Role) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| match role {
                Role::SuperAdmin | Role::Admin => true,
                Role::Artist(id) => n.target.includes(id),
            })
            .collect()
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Wipe every collection, the profile and the session. The only path that
    /// re-opens agency registration.
    pub fn reset(&mut self) -> GigbookResult<()> {
        log::info!("resetting all agency data");
        self.artists.clear();
        self.events.clear();
        self.notifications.clear();
        self.profile = None;
        self.session = None;
        self.persist()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the full snapshot. In-memory state is already final by the time
    /// this runs; an error here leaves the previous on-disk snapshot intact.
    pub(crate) fn persist(&self) -> GigbookResult<()> {
        if let Some(storage) = &self.storage {
            storage.save(
                &self.artists,
                &self.events,
                &self.notifications,
                self.profile.as_ref(),
                self.session.as_ref(),
            )?;
        }
        Ok(())
    }
}

impl Default for AgencyStore {
    fn default() -> Self {
        Self::new()
    }
}
