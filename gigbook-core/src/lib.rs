//! Core library for gigbook, a single-tenant booking and roster manager for
//! a talent agency.
//!
//! This crate holds everything except presentation:
//! - entity records and collections ([`store::AgencyStore`])
//! - session resolution and role capabilities ([`session`])
//! - the invitation lifecycle and its cascades (`store`)
//! - pure derived views ([`views`])
//! - JSON snapshot persistence ([`snapshot`])
//! - export and link builders ([`ics`], [`report`], [`links`], [`compose`])
//!
//! # Trust model
//!
//! Credentials (the agency admin's and each artist's) are stored and compared
//! in plaintext on the local machine. gigbook is a single-user tool with no
//! server and no remote persistence; treat its data directory like any other
//! private local file. Do not reuse passwords here, and do not lift this
//! resolver into anything networked without replacing it with salted-hash
//! comparison.

pub mod artist;
pub mod compose;
pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod links;
pub mod notification;
pub mod report;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod views;

pub use artist::Artist;
pub use error::{GigbookError, GigbookResult};
pub use event::{Event, Invitation, InvitationStatus, PaymentStatus, TransportType, TravelLogistics};
pub use notification::{Notification, NotificationTarget};
pub use session::{AgencyProfile, DefaultView, LoginRole, Role, Session};
pub use store::{AgencyStore, ArtistRemoval, Rehydration};
