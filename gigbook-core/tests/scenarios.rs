//! End-to-end flows over a disk-backed store, reloaded between steps the way
//! separate CLI invocations would reload it.

use chrono::{NaiveDate, NaiveTime};
use gigbook_core::snapshot::SnapshotStore;
use gigbook_core::views;
use gigbook_core::{
    AgencyProfile, AgencyStore, Artist, Event, GigbookError, Invitation, InvitationStatus,
    LoginRole, Role, Session,
};

fn open_store(dir: &std::path::Path) -> AgencyStore {
    AgencyStore::open(SnapshotStore::open(dir).unwrap()).unwrap()
}

fn add_elena(store: &mut AgencyStore) -> String {
    let mut elena = Artist::new("Elena", "elena@x.it", "Singer");
    elena.password = Some("AB12CD".to_string());
    let id = elena.id.clone();
    store.add_artist(elena).unwrap();
    id
}

fn make_event(title: &str, invitations: Vec<Invitation>) -> Event {
    let mut event = Event::new(
        title,
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
        NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
    );
    event.invitations = invitations;
    event
}

#[test]
fn scenario_confirming_an_invitation_moves_the_event_into_the_artist_view() {
    let dir = tempfile::tempdir().unwrap();

    // Admin sets up the agency, the roster and a booking.
    let elena_id = {
        let mut store = open_store(dir.path());
        store
            .register_agency("Nexuop", "agency@example.com", "s3cret")
            .unwrap();
        let elena_id = add_elena(&mut store);
        store
            .add_event(make_event("Gala", vec![Invitation::new(&elena_id, 400.0)]))
            .unwrap();
        elena_id
    };

    // Elena logs in from a fresh process and answers.
    {
        let mut store = open_store(dir.path());
        assert!(
            views::events_for_artist(store.events(), &elena_id, true).is_empty(),
            "nothing is confirmed before the artist answers"
        );

        let role = store.login("elena@x.it", "AB12CD", LoginRole::Artist).unwrap();
        assert_eq!(role, Role::Artist(elena_id.clone()));

        let event_id = store.events()[0].id.clone();
        assert!(store
            .update_invitation_status(&event_id, &elena_id, InvitationStatus::Confirmed)
            .unwrap());
    }

    // The confirmation survives the reload and shows up in the derived view.
    let store = open_store(dir.path());
    let confirmed = views::events_for_artist(store.events(), &elena_id, true);
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].title, "Gala");
    assert!(store.events()[0].is_fully_confirmed());
}

#[test]
fn scenario_deleting_a_logged_in_artist_cascades_and_signs_them_out() {
    let dir = tempfile::tempdir().unwrap();

    let elena_id = {
        let mut store = open_store(dir.path());
        store
            .register_agency("Nexuop", "agency@example.com", "s3cret")
            .unwrap();
        let elena_id = add_elena(&mut store);
        store
            .add_event(make_event("Gala", vec![Invitation::new(&elena_id, 400.0)]))
            .unwrap();
        store.login("elena@x.it", "AB12CD", LoginRole::Artist).unwrap();
        elena_id
    };

    // Admin removes Elena while her session pointer is still persisted.
    {
        let mut store = open_store(dir.path());
        let removal = store.remove_artist(&elena_id).unwrap();
        assert!(removal.removed);
        assert_eq!(removal.invitations_removed, 1);
        assert!(removal.signed_out, "the active identity was removed");
    }

    let store = open_store(dir.path());
    assert!(store.active_role().is_none());
    assert!(store.events()[0].invitations.is_empty(), "no dangling invitations");
}

#[test]
fn scenario_event_financials_are_always_recomputed() {
    let mut store = AgencyStore::new();
    store
        .register_agency("Nexuop", "agency@example.com", "s3cret")
        .unwrap();
    let a1 = add_elena(&mut store);
    let mut marco = Artist::new("Marco", "marco@x.it", "Magician");
    marco.password = Some("pw".to_string());
    let a2 = marco.id.clone();
    store.add_artist(marco).unwrap();

    let mut event = make_event(
        "Gala",
        vec![Invitation::new(&a1, 300.0), Invitation::new(&a2, 200.0)],
    );
    event.revenue = Some(1000.0);
    store.add_event(event).unwrap();

    let financials = views::event_financials(&store.events()[0]);
    assert_eq!(financials.total_artist_fees, 500.0);
    assert_eq!(financials.net_profit, 500.0);
}

#[test]
fn scenario_a_second_invitation_for_the_same_artist_is_rejected() {
    let mut store = AgencyStore::new();
    store
        .register_agency("Nexuop", "agency@example.com", "s3cret")
        .unwrap();
    let elena_id = add_elena(&mut store);

    let result = store.add_event(make_event(
        "Gala",
        vec![
            Invitation::new(&elena_id, 400.0),
            Invitation::new(&elena_id, 250.0),
        ],
    ));
    assert!(matches!(result, Err(GigbookError::DuplicateInvitation(_, _))));

    // Uniqueness holds: the rejected event was not inserted at all.
    assert!(store.events().is_empty());
}

#[test]
fn scenario_stale_session_pointer_forces_logout_on_startup() {
    let dir = tempfile::tempdir().unwrap();

    // A snapshot whose session points at an artist that no longer exists,
    // as left behind by a roster edit from another run.
    let storage = SnapshotStore::open(dir.path()).unwrap();
    let profile = AgencyProfile::new("Nexuop", "agency@example.com", "s3cret");
    let stale = Session {
        role: Role::Artist("ghost".to_string()),
    };
    storage
        .save(&[], &[], &[], Some(&profile), Some(&stale))
        .unwrap();

    let store = open_store(dir.path());
    assert!(store.rehydration().forced_logout);
    assert!(store.active_role().is_none());

    // The discard is persisted: the next startup is a clean anonymous one.
    let store = open_store(dir.path());
    assert!(!store.rehydration().forced_logout);
}

#[test]
fn full_state_survives_a_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();

    let (artists, events, notifications) = {
        let mut store = open_store(dir.path());
        store
            .register_agency("Nexuop", "agency@example.com", "s3cret")
            .unwrap();
        let elena_id = add_elena(&mut store);
        let mut event = make_event("Gala", vec![Invitation::new(&elena_id, 400.0)]);
        event.revenue = Some(1200.0);
        event.duration = "3h".to_string();
        store.add_event(event).unwrap();

        (
            store.artists().to_vec(),
            store.events().to_vec(),
            store.notifications().to_vec(),
        )
    };

    let reloaded = open_store(dir.path());
    assert_eq!(reloaded.artists(), &artists[..]);
    assert_eq!(reloaded.events(), &events[..]);
    assert_eq!(reloaded.notifications(), &notifications[..]);
}
