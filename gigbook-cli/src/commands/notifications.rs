use anyhow::Result;
use clap::Subcommand;
use gigbook_core::AgencyStore;
use owo_colors::OwoColorize;

use super::require_session;

#[derive(Subcommand)]
pub enum NotificationsCommand {
    /// List your notifications
    List {
        /// Include notifications you already read
        #[arg(long)]
        all: bool,
    },
    /// Mark a notification as read
    Read { id: String },
}

pub fn run(store: &mut AgencyStore, command: NotificationsCommand) -> Result<()> {
    match command {
        NotificationsCommand::List { all } => list(store, all),
        NotificationsCommand::Read { id } => read(store, &id),
    }
}

fn list(store: &AgencyStore, all: bool) -> Result<()> {
    let role = require_session(store)?;

    let notifications: Vec<_> = store
        .notifications_for(&role)
        .into_iter()
        .filter(|n| all || !n.read)
        .collect();

    if notifications.is_empty() {
        println!("{}", "No notifications".dimmed());
        return Ok(());
    }

    for notification in notifications {
        let when = notification.timestamp.format("%Y-%m-%d %H:%M");
        let title = if notification.read {
            notification.title.dimmed().to_string()
        } else {
            notification.title.bold().to_string()
        };
        println!("  {} {} {}", when, title, notification.id.dimmed());
        println!("      {}", notification.message);
    }
    Ok(())
}

fn read(store: &mut AgencyStore, id: &str) -> Result<()> {
    require_session(store)?;

    if store.mark_notification_read(id)? {
        println!("{} Marked as read", "✓".green());
    } else {
        println!("{}", "Nothing to do (unknown id, or already read)".dimmed());
    }
    Ok(())
}
