//! Booking event types.
//!
//! An `Event` is a booked show together with its invited lineup. Each invited
//! artist holds one `Invitation` carrying the agreed fee, the artist's
//! response and the payment state. Invitations are embedded in their event
//! and never shared between events.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booked show with its invited lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// The client who booked the show, if known.
    pub client: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// Free-form duration such as "3h" or "45m". Parsed best-effort when a
    /// concrete end time is needed (calendar export); kept verbatim otherwise.
    pub duration: String,
    pub location: String,
    pub venue_name: String,
    pub description: String,
    pub equipment: String,
    pub costumes: String,
    pub rehearsal_time: Option<NaiveTime>,
    pub logistics: TravelLogistics,
    /// Gross booking fee charged to the client. Net profit is always derived
    /// from this and the invitation fees, never stored.
    pub revenue: Option<f64>,
    pub invitations: Vec<Invitation>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(title: &str, date: NaiveDate, start_time: NaiveTime) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            client: None,
            date,
            start_time,
            duration: String::new(),
            location: String::new(),
            venue_name: String::new(),
            description: String::new(),
            equipment: String::new(),
            costumes: String::new(),
            rehearsal_time: None,
            logistics: TravelLogistics::default(),
            revenue: None,
            invitations: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// End time computed from the free-form duration. Falls back to the start
    /// time when the duration does not parse (e.g. empty or "TBD").
    pub fn ends_at(&self) -> NaiveDateTime {
        let start = self.starts_at();
        match humantime::parse_duration(&self.duration) {
            Ok(d) => match chrono::Duration::from_std(d) {
                Ok(d) => start + d,
                Err(_) => start,
            },
            Err(_) => start,
        }
    }

    pub fn invitation_for(&self, artist_id: &str) -> Option<&Invitation> {
        self.invitations.iter().find(|i| i.artist_id == artist_id)
    }

    /// An event counts as fully confirmed only when it has at least one
    /// invitation and every invitation is confirmed. An event nobody was
    /// invited to is not confirmed by vacuous truth.
    pub fn is_fully_confirmed(&self) -> bool {
        !self.invitations.is_empty()
            && self
                .invitations
                .iter()
                .all(|i| i.status == InvitationStatus::Confirmed)
    }
}

/// Travel arrangements for the lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelLogistics {
    pub departure_time: Option<NaiveTime>,
    pub transport_type: TransportType,
    pub hotel: Option<String>,
}

impl Default for TravelLogistics {
    fn default() -> Self {
        TravelLogistics {
            departure_time: None,
            transport_type: TransportType::Van,
            hotel: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportType {
    Van,
    Car,
    Train,
    Plane,
    Bus,
}

/// A single artist's slot on an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub artist_id: String,
    /// The artist's cachet for this event.
    pub fee: f64,
    pub status: InvitationStatus,
    pub payment_status: PaymentStatus,
}

impl Invitation {
    pub fn new(artist_id: &str, fee: f64) -> Self {
        Invitation {
            artist_id: artist_id.to_string(),
            fee,
            status: InvitationStatus::Pending,
            payment_status: PaymentStatus::Pending,
        }
    }
}

/// Lifecycle of an invitation, as seen by the invited artist.
///
/// Pending is the initial state. The owning artist resolves it to Confirmed
/// or Rejected exactly once; Cancelled is reserved for administrative paths
/// and is never set by the artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvitationStatus {
    Pending,
    Confirmed,
    Rejected,
    Cancelled,
}

/// Payment state of an invitation, tracked independently of the artist's
/// response. A fee can be paid out while the invitation is formally still
/// pending; the two fields are deliberately orthogonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Confirmed,
}
