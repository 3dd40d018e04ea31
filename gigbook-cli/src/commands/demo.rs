use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use gigbook_core::{
    AgencyStore, Artist, Event, Invitation, InvitationStatus, PaymentStatus, TransportType,
};
use owo_colors::OwoColorize;

use super::require_admin;

/// Seed the sample roster and bookings so a fresh agency has something to
/// look at. Refuses to touch a non-empty one.
pub fn run(store: &mut AgencyStore) -> Result<()> {
    require_admin(store)?;

    if !store.artists().is_empty() || !store.events().is_empty() {
        anyhow::bail!("The agency already has data; demo seeding only runs on an empty one");
    }

    let roster = [
        ("Marco Valerio", "marco@example.com", "Magician"),
        ("Elena Rossi", "elena@example.com", "Singer"),
        ("Luca Bianchi", "luca@example.com", "Acrobat"),
        ("Sofia Verdi", "sofia@example.com", "Dancer"),
        ("Giorgio Neri", "giorgio@example.com", "DJ"),
    ];

    let mut ids = Vec::new();
    for (name, email, discipline) in roster {
        let mut artist = Artist::new(name, email, discipline);
        artist.password = Some("demo".to_string());
        ids.push(artist.id.clone());
        store.add_artist(artist)?;
    }

    let mut gala = Event::new(
        "Gala di Primavera",
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
        NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
    );
    gala.client = Some("Teatro dell'Opera".to_string());
    gala.duration = "3h".to_string();
    gala.location = "Piazza della Scala, Milano".to_string();
    gala.venue_name = "Teatro alla Scala".to_string();
    gala.description = "Charity evening with acrobatics and live music.".to_string();
    gala.equipment = "LED light rig, 12ch audio mixer".to_string();
    gala.costumes = "Black evening dress with gold details".to_string();
    gala.rehearsal_time = NaiveTime::from_hms_opt(15, 0, 0);
    gala.logistics.departure_time = NaiveTime::from_hms_opt(12, 0, 0);
    gala.logistics.transport_type = TransportType::Van;
    gala.logistics.hotel = Some("Hotel Splendido".to_string());
    gala.revenue = Some(2000.0);
    let mut marco_slot = Invitation::new(&ids[0], 500.0);
    marco_slot.status = InvitationStatus::Confirmed;
    marco_slot.payment_status = PaymentStatus::Paid;
    gala.invitations = vec![marco_slot, Invitation::new(&ids[1], 400.0)];
    store.add_event(gala)?;

    let mut festival = Event::new(
        "Festival del Fuoco",
        NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
        NaiveTime::from_hms_opt(21, 30, 0).unwrap(),
    );
    festival.client = Some("Comune di Firenze".to_string());
    festival.duration = "1h".to_string();
    festival.location = "Piazzale Michelangelo, Firenze".to_string();
    festival.venue_name = "Belvedere".to_string();
    festival.description = "Dance theatre performance with pyrotechnics.".to_string();
    festival.equipment = "Fireproof props, Bose PA".to_string();
    festival.costumes = "Red and silver stretch suit".to_string();
    festival.rehearsal_time = NaiveTime::from_hms_opt(18, 0, 0);
    festival.logistics.departure_time = NaiveTime::from_hms_opt(14, 0, 0);
    festival.logistics.transport_type = TransportType::Car;
    festival.revenue = Some(3000.0);
    let mut luca_slot = Invitation::new(&ids[2], 800.0);
    luca_slot.status = InvitationStatus::Confirmed;
    let mut sofia_slot = Invitation::new(&ids[3], 600.0);
    sofia_slot.status = InvitationStatus::Confirmed;
    festival.invitations = vec![luca_slot, sofia_slot];
    store.add_event(festival)?;

    println!(
        "{} Seeded 5 artists and 2 bookings (artist password: 'demo')",
        "✓".green()
    );
    Ok(())
}
