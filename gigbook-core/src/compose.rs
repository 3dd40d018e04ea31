//! Message copy for artist outreach.
//!
//! Plain-text producers for the share integrations (WhatsApp, email). These
//! stand in for an external copywriting service: opaque text from entity
//! data, with no effect on entity state.

use crate::artist::Artist;
use crate::event::{Event, Invitation};

/// Invitation text for one artist's slot on an event.
pub fn invitation_message(artist: &Artist, event: &Event, invitation: &Invitation) -> String {
    let mut message = format!(
        "Hi {}, you are invited to perform at '{}' on {} at {}.",
        artist.name,
        event.title,
        event.date.format("%d/%m/%Y"),
        event.start_time.format("%H:%M"),
    );

    if !event.venue_name.is_empty() {
        message.push_str(&format!(" Venue: {}.", event.venue_name));
    }
    message.push_str(&format!(" Proposed fee: {} EUR.", invitation.fee));
    message.push_str(" Please confirm or decline from your gigbook calendar.");

    message
}

/// Welcome text for a newly added roster member.
pub fn welcome_message(artist: &Artist, agency_name: &str) -> String {
    format!(
        "Welcome to {}, {}! Your profile is live on our roster as {}. \
         You will receive a notification here whenever a new booking comes in.",
        agency_name, artist.name, artist.discipline,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_invitation_message_mentions_the_essentials() {
        let artist = Artist::new("Elena Rossi", "elena@x.it", "Singer");
        let mut event = Event::new(
            "Gala di Primavera",
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );
        event.venue_name = "Teatro alla Scala".to_string();
        let invitation = Invitation::new(&artist.id, 400.0);

        let message = invitation_message(&artist, &event, &invitation);
        assert!(message.contains("Elena Rossi"));
        assert!(message.contains("Gala di Primavera"));
        assert!(message.contains("15/05/2024"));
        assert!(message.contains("400"));
        assert!(message.contains("Teatro alla Scala"));
    }
}
