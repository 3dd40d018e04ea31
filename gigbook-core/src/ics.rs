//! Calendar file generation.
//!
//! Produces .ics content for one or many events so the lineup can pull the
//! season into a phone calendar. Export only; gigbook never ingests ICS.

use icalendar::{Calendar, Component, EventLike};

use crate::event::Event;

/// Generate .ics content covering the given events, one VEVENT each.
pub fn events_to_ics(events: &[Event]) -> String {
    let mut cal = Calendar::new();
    for event in events {
        cal.push(event_to_vevent(event));
    }
    let cal = cal.done();

    brand_ics(&cal.to_string())
}

fn event_to_vevent(event: &Event) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@gigbook", event.id));
    ics_event.summary(&event.title);

    // DTSTAMP - required by RFC 5545. The creation timestamp keeps repeated
    // exports byte-identical, unlike "now".
    let dtstamp = event.created_at.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", dtstamp.as_str());

    // Floating local datetimes: show times are venue-local.
    let start = event.starts_at().format("%Y%m%dT%H%M%S").to_string();
    let end = event.ends_at().format("%Y%m%dT%H%M%S").to_string();
    ics_event.add_property("DTSTART", start.as_str());
    ics_event.add_property("DTEND", end.as_str());

    if !event.description.is_empty() || !event.venue_name.is_empty() {
        let description = format!("{} - Venue: {}", event.description, event.venue_name);
        ics_event.description(&description);
    }
    if !event.location.is_empty() {
        ics_event.location(&event.location);
    }

    ics_event.done()
}

/// Clean up ICS output from the icalendar crate:
/// - Replace PRODID with ours
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn brand_ics(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:-//gigbook//Agency Roster//EN\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_test_event() -> Event {
        let mut event = Event::new(
            "Gala di Primavera",
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );
        event.duration = "3h".to_string();
        event.venue_name = "Teatro alla Scala".to_string();
        event.location = "Piazza della Scala, Milano".to_string();
        event.description = "Serata di beneficenza".to_string();
        event
    }

    #[test]
    fn test_dtend_is_computed_from_duration() {
        let ics = events_to_ics(&[make_test_event()]);

        assert!(
            ics.contains("DTSTART:20240515T200000"),
            "missing venue-local DTSTART. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTEND:20240515T230000"),
            "DTEND should be start + 3h. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_dtend_falls_back_to_start_for_unparseable_duration() {
        let mut event = make_test_event();
        event.duration = "open end".to_string();
        let ics = events_to_ics(&[event]);

        assert!(ics.contains("DTEND:20240515T200000"));
    }

    #[test]
    fn test_one_vevent_per_event_with_branded_prodid() {
        let ics = events_to_ics(&[make_test_event(), make_test_event()]);

        let vevents = ics.matches("BEGIN:VEVENT").count();
        assert_eq!(vevents, 2, "expected 2 VEVENTs. ICS:\n{}", ics);
        assert!(ics.contains("PRODID:-//gigbook//Agency Roster//EN"));
        assert!(!ics.contains("CALSCALE:GREGORIAN"));
    }

    #[test]
    fn test_description_carries_the_venue() {
        let ics = events_to_ics(&[make_test_event()]);
        assert!(ics.contains("Venue: Teatro alla Scala"), "ICS:\n{}", ics);
    }
}
