use anyhow::Result;
use gigbook_core::{AgencyStore, PaymentStatus};
use owo_colors::OwoColorize;

use super::{find_artist, find_event, require_admin};
use crate::render::Render;

pub fn run(
    store: &mut AgencyStore,
    event_ref: &str,
    artist_ref: &str,
    confirm_receipt: bool,
) -> Result<()> {
    require_admin(store)?;

    let event = find_event(store, event_ref)?;
    let event_id = event.id.clone();
    let title = event.title.clone();
    let artist = find_artist(store, artist_ref)?;
    let (artist_id, artist_name) = (artist.id.clone(), artist.name.clone());

    if store
        .event(&event_id)
        .and_then(|e| e.invitation_for(&artist_id))
        .is_none()
    {
        anyhow::bail!("{artist_name} is not on the lineup of '{title}'");
    }

    let status = if confirm_receipt {
        PaymentStatus::Confirmed
    } else {
        PaymentStatus::Paid
    };

    let changed = store.set_payment_status(&event_id, &artist_id, status)?;
    if !changed {
        // The store declined: the only transitions are Pending -> Paid and
        // Paid -> Confirmed.
        let current = store
            .event(&event_id)
            .and_then(|e| e.invitation_for(&artist_id))
            .map(|i| i.payment_status.render())
            .unwrap_or_default();
        anyhow::bail!("No payment transition applied; the slot is currently '{current}'");
    }

    println!(
        "{} {}'s fee for '{}' is now {}",
        "✓".green(),
        artist_name,
        title,
        status.render()
    );
    Ok(())
}
