use anyhow::Result;
use clap::Subcommand;
use gigbook_core::{compose, links, AgencyStore};
use owo_colors::OwoColorize;

use super::{find_artist, find_event, require_admin, require_session};

#[derive(Subcommand)]
pub enum ShareCommand {
    /// Directions to an event's venue
    Maps {
        /// Event id or title
        event: String,

        /// Open the link in the browser
        #[arg(long)]
        open: bool,
    },
    /// Google Calendar "add event" link
    Calendar {
        /// Event id or title
        event: String,

        #[arg(long)]
        open: bool,
    },
    /// WhatsApp invitation for one artist's slot (admin)
    Whatsapp {
        /// Event id or title
        event: String,
        /// Artist id, email or name
        artist: String,

        #[arg(long)]
        open: bool,
    },
    /// Email invitation for one artist's slot (admin)
    Email {
        /// Event id or title
        event: String,
        /// Artist id, email or name
        artist: String,

        #[arg(long)]
        open: bool,
    },
    /// Welcome email for a newly added artist (admin)
    Welcome {
        /// Artist id, email or name
        artist: String,

        #[arg(long)]
        open: bool,
    },
}

pub fn run(store: &AgencyStore, command: ShareCommand) -> Result<()> {
    match command {
        ShareCommand::Maps { event, open } => {
            require_session(store)?;
            let event = find_event(store, &event)?;
            if event.location.is_empty() {
                anyhow::bail!("'{}' has no location to navigate to", event.title);
            }
            emit(&links::maps_url(&event.location), open)
        }
        ShareCommand::Calendar { event, open } => {
            require_session(store)?;
            let event = find_event(store, &event)?;
            emit(&links::google_calendar_url(event), open)
        }
        ShareCommand::Whatsapp { event, artist, open } => {
            require_admin(store)?;
            let event = find_event(store, &event)?;
            let artist = find_artist(store, &artist)?;
            let Some(phone) = &artist.phone else {
                anyhow::bail!("{} has no phone number on file", artist.name);
            };
            let Some(invitation) = event.invitation_for(&artist.id) else {
                anyhow::bail!("{} is not on the lineup of '{}'", artist.name, event.title);
            };
            let message = compose::invitation_message(artist, event, invitation);
            emit(&links::whatsapp_url(phone, &message), open)
        }
        ShareCommand::Email { event, artist, open } => {
            require_admin(store)?;
            let event = find_event(store, &event)?;
            let artist = find_artist(store, &artist)?;
            let Some(invitation) = event.invitation_for(&artist.id) else {
                anyhow::bail!("{} is not on the lineup of '{}'", artist.name, event.title);
            };
            let subject = format!("Invitation: {}", event.title);
            let body = compose::invitation_message(artist, event, invitation);
            emit(&links::mail_url(&artist.email, &subject, &body), open)
        }
        ShareCommand::Welcome { artist, open } => {
            require_admin(store)?;
            let artist = find_artist(store, &artist)?;
            let agency = store
                .profile()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "our agency".to_string());
            let subject = format!("Welcome to {agency}");
            let body = compose::welcome_message(artist, &agency);
            emit(&links::mail_url(&artist.email, &subject, &body), open)
        }
    }
}

fn emit(url: &str, open_in_browser: bool) -> Result<()> {
    println!("{url}");
    if open_in_browser {
        if let Err(err) = open::that(url) {
            println!("{}", format!("Could not open the browser: {err}").dimmed());
        }
    }
    Ok(())
}
