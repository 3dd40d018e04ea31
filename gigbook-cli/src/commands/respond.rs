use anyhow::Result;
use gigbook_core::{AgencyStore, InvitationStatus};
use owo_colors::OwoColorize;

use super::{find_event, require_artist};

pub fn run(store: &mut AgencyStore, event_ref: &str, accept: bool, decline: bool) -> Result<()> {
    let artist_id = require_artist(store)?;

    if accept == decline {
        anyhow::bail!("Pass exactly one of --accept or --decline");
    }
    let status = if accept {
        InvitationStatus::Confirmed
    } else {
        InvitationStatus::Rejected
    };

    // Check the preconditions up front so a refusal gets a real explanation;
    // the store itself declines silently.
    let event = find_event(store, event_ref)?;
    let event_id = event.id.clone();
    let title = event.title.clone();
    let Some(invitation) = event.invitation_for(&artist_id) else {
        anyhow::bail!("You are not invited to '{title}'");
    };
    if invitation.status != InvitationStatus::Pending {
        anyhow::bail!(
            "Your invitation to '{title}' is already settled; nothing to answer"
        );
    }

    let changed = store.update_invitation_status(&event_id, &artist_id, status)?;
    if changed {
        let verb = if accept { "accepted" } else { "declined" };
        println!("{} Invitation to '{}' {}", "✓".green(), title, verb);
    } else {
        println!("{}", "Nothing changed".dimmed());
    }
    Ok(())
}
