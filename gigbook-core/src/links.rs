//! Outbound link builders.
//!
//! Pure string construction for the hand-off integrations: directions,
//! WhatsApp, email and Google Calendar. Nothing here touches entity state.

use url::form_urlencoded;

use crate::event::Event;

/// Directions to a venue address.
pub fn maps_url(address: &str) -> String {
    let query = encode_query(&[("api", "1"), ("query", address)]);
    format!("https://www.google.com/maps/search/?{query}")
}

/// A wa.me link with a prefilled message. Everything but digits is stripped
/// from the phone number (wa.me wants bare international digits).
pub fn whatsapp_url(phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let query = encode_query(&[("text", text)]);
    format!("https://wa.me/{digits}?{query}")
}

/// A mailto link with prefilled subject and body.
pub fn mail_url(email: &str, subject: &str, body: &str) -> String {
    let query = encode_query(&[("subject", subject), ("body", body)]);
    format!("mailto:{email}?{query}")
}

/// A Google Calendar "add event" template link.
pub fn google_calendar_url(event: &Event) -> String {
    let start = event.starts_at().format("%Y%m%dT%H%M%S").to_string();
    let end = event.ends_at().format("%Y%m%dT%H%M%S").to_string();
    let details = format!(
        "{}\n\nVenue: {}\nLocation: {}",
        event.description, event.venue_name, event.location
    );

    let query = encode_query(&[
        ("action", "TEMPLATE"),
        ("text", &event.title),
        ("dates", &format!("{start}/{end}")),
        ("details", &details),
        ("location", &event.location),
        ("sf", "true"),
        ("output", "xml"),
    ]);
    format!("https://www.google.com/calendar/render?{query}")
}

/// Percent-encode query pairs. form_urlencoded writes spaces as '+', which
/// mailto (RFC 6068) does not allow; literal '+' is already %2B by then, so
/// rewriting '+' to %20 yields plain percent encoding for every scheme.
fn encode_query(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish().replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_maps_url_encodes_the_address() {
        let url = maps_url("Piazza della Scala, Milano");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=Piazza%20della%20Scala%2C%20Milano"
        );
    }

    #[test]
    fn test_whatsapp_url_strips_phone_formatting() {
        let url = whatsapp_url("+39 333 123-4567", "See you at the gala");
        assert!(url.starts_with("https://wa.me/393331234567?text="));
        assert!(url.contains("See%20you%20at%20the%20gala"));
    }

    #[test]
    fn test_mail_url_uses_percent_encoding_not_plus() {
        let url = mail_url("elena@x.it", "New booking", "Fee: 400 + travel");
        assert!(url.starts_with("mailto:elena@x.it?subject=New%20booking&body="));
        assert!(!url.contains('+'), "mailto queries must not use '+': {url}");
        assert!(url.contains("400%20%2B%20travel"));
    }

    #[test]
    fn test_google_calendar_url_spans_the_duration() {
        let mut event = Event::new(
            "Gala di Primavera",
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );
        event.duration = "3h".to_string();
        event.location = "Milano".to_string();

        let url = google_calendar_url(&event);
        assert!(url.contains("dates=20240515T200000%2F20240515T230000"));
        assert!(url.contains("text=Gala%20di%20Primavera"));
    }
}
