//! Delimited report generation.

use crate::event::Event;

/// Build a CSV report, one row per event: title, date, venue, client, total
/// artist fee, and an aggregate status label ("Confirmed" only when the full
/// lineup confirmed).
pub fn events_csv(events: &[Event]) -> String {
    let mut lines = Vec::with_capacity(events.len() + 1);
    lines.push("Title,Date,Venue,Client,Total Fee,Status".to_string());

    for event in events {
        let total_fee: f64 = event.invitations.iter().map(|i| i.fee).sum();
        let status = if event.is_fully_confirmed() {
            "Confirmed"
        } else {
            "Pending"
        };

        let row = [
            csv_field(&event.title),
            event.date.to_string(),
            csv_field(&event.venue_name),
            csv_field(event.client.as_deref().unwrap_or("")),
            total_fee.to_string(),
            status.to_string(),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Quote a field when it contains a separator, a quote or a newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
