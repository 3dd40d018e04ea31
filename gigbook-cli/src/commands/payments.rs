use anyhow::Result;
use chrono::{Datelike, Local};
use gigbook_core::views;
use gigbook_core::AgencyStore;
use owo_colors::OwoColorize;

use super::require_artist;
use crate::render::{euro, Render};

pub fn run(store: &AgencyStore) -> Result<()> {
    let artist_id = require_artist(store)?;
    let year = Local::now().year();

    let ledger = views::artist_ledger_current_year(store.events(), &artist_id);

    println!("{}", format!("Your earnings, {year}").bold());
    println!("  confirmed shows:  {}", ledger.shows_this_year);
    println!("  earned this year: {}", euro(ledger.total_earned_this_year));
    println!("  to be paid:       {}", euro(ledger.total_pending));
    println!("  paid out:         {} (all time)", euro(ledger.total_paid));

    if ledger.entries.is_empty() {
        println!();
        println!("{}", "No payments recorded yet".dimmed());
        return Ok(());
    }

    println!();
    println!("{}", "History".bold());
    for entry in &ledger.entries {
        println!(
            "  {} {} · {} · {} · {}",
            entry.event.date,
            entry.event.title.bold(),
            euro(entry.invitation.fee),
            entry.invitation.status.render(),
            entry.invitation.payment_status.render()
        );
    }
    Ok(())
}
