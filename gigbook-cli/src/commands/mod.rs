pub mod agenda;
pub mod dashboard;
pub mod demo;
pub mod events;
pub mod export;
pub mod notifications;
pub mod pay;
pub mod payments;
pub mod reset;
pub mod respond;
pub mod roster;
pub mod session;
pub mod share;

use anyhow::{bail, Result};
use gigbook_core::{AgencyStore, Artist, Event, Role};

/// The current session must be able to manage the roster.
pub fn require_admin(store: &AgencyStore) -> Result<Role> {
    match store.active_role() {
        Some(role) if role.can_manage_roster() => Ok(role.clone()),
        Some(_) => bail!("This command needs an admin session. Log in with:\n  gigbook login <email>"),
        None => bail!("Not logged in. Log in with:\n  gigbook login <email>"),
    }
}

/// The current session must be an artist; returns the artist id.
pub fn require_artist(store: &AgencyStore) -> Result<String> {
    match store.active_role() {
        Some(Role::Artist(id)) => Ok(id.clone()),
        Some(_) => bail!("This command needs an artist session. Log in with:\n  gigbook login <email> --artist"),
        None => bail!("Not logged in. Log in with:\n  gigbook login <email> --artist"),
    }
}

/// Any authenticated session.
pub fn require_session(store: &AgencyStore) -> Result<Role> {
    match store.active_role() {
        Some(role) => Ok(role.clone()),
        None => bail!("Not logged in. Log in with:\n  gigbook login <email>"),
    }
}

/// Resolve an artist by id, email, or case-insensitive name.
pub fn find_artist<'a>(store: &'a AgencyStore, needle: &str) -> Result<&'a Artist> {
    let artists = store.artists();

    if let Some(artist) = artists.iter().find(|a| a.id == needle) {
        return Ok(artist);
    }
    if let Some(artist) = artists.iter().find(|a| a.email.eq_ignore_ascii_case(needle)) {
        return Ok(artist);
    }

    let by_name: Vec<&Artist> = artists
        .iter()
        .filter(|a| a.name.eq_ignore_ascii_case(needle))
        .collect();
    match by_name.as_slice() {
        [artist] => Ok(*artist),
        [] => bail!("No artist matching '{}' on the roster", needle),
        _ => bail!("Several artists are named '{}'; use the id instead", needle),
    }
}

/// Resolve an event by id or case-insensitive title.
pub fn find_event<'a>(store: &'a AgencyStore, needle: &str) -> Result<&'a Event> {
    let events = store.events();

    if let Some(event) = events.iter().find(|e| e.id == needle) {
        return Ok(event);
    }

    let by_title: Vec<&Event> = events
        .iter()
        .filter(|e| e.title.eq_ignore_ascii_case(needle))
        .collect();
    match by_title.as_slice() {
        [event] => Ok(*event),
        [] => bail!("No event matching '{}'", needle),
        _ => bail!("Several events are titled '{}'; use the id instead", needle),
    }
}
