use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use gigbook_core::views;
use gigbook_core::{ics, report, AgencyStore, Event};
use owo_colors::OwoColorize;

use super::require_admin;

#[derive(Subcommand)]
pub enum ExportCommand {
    /// Write a CSV report, one row per event
    Csv {
        /// Output file
        #[arg(long, default_value = "gigbook_report.csv")]
        out: PathBuf,

        /// Only fully confirmed events
        #[arg(long)]
        confirmed: bool,
    },
    /// Write an .ics calendar file, one entry per event
    Ics {
        /// Output file
        #[arg(long, default_value = "gigbook_events.ics")]
        out: PathBuf,

        /// Only fully confirmed events
        #[arg(long)]
        confirmed: bool,
    },
}

pub fn run(store: &AgencyStore, command: ExportCommand) -> Result<()> {
    require_admin(store)?;

    let (out, confirmed, content_for) = match command {
        ExportCommand::Csv { out, confirmed } => (
            out,
            confirmed,
            report::events_csv as fn(&[Event]) -> String,
        ),
        ExportCommand::Ics { out, confirmed } => (
            out,
            confirmed,
            ics::events_to_ics as fn(&[Event]) -> String,
        ),
    };

    let events: Vec<Event> = if confirmed {
        views::confirmed_events(store.events())
            .into_iter()
            .cloned()
            .collect()
    } else {
        store.events().to_vec()
    };

    let content = content_for(&events);
    std::fs::write(&out, content)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "{} Wrote {} event(s) to {}",
        "✓".green(),
        events.len(),
        out.display()
    );
    Ok(())
}
