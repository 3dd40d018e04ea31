use anyhow::Result;
use chrono::{Datelike, Local};
use gigbook_core::views;
use gigbook_core::AgencyStore;
use owo_colors::OwoColorize;

use super::require_admin;
use crate::render::euro;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn run(store: &AgencyStore) -> Result<()> {
    require_admin(store)?;

    let events = store.events();
    let year = Local::now().year();

    let agency = store
        .profile()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "gigbook".to_string());
    println!("{}", format!("{agency} overview").bold());

    let total_expenses: f64 = events
        .iter()
        .map(|e| views::event_financials(e).total_artist_fees)
        .sum();
    let total_net: f64 = events
        .iter()
        .map(|e| views::event_financials(e).net_profit)
        .sum();
    let confirmed = views::confirmed_events(events).len();

    println!("  events:        {} ({} fully confirmed)", events.len(), confirmed);
    println!("  roster:        {} artist(s)", store.artists().len());
    println!("  artist fees:   {}", euro(total_expenses));
    println!("  net result:    {}", euro(total_net));

    // Monthly revenue/expenses, current year.
    let months = views::monthly_aggregate(events, year);
    if months.iter().any(|m| m.revenue != 0.0 || m.expenses != 0.0) {
        println!();
        println!("{}", format!("By month, {year}").bold());
        for (label, totals) in MONTH_LABELS.iter().zip(months.iter()) {
            if totals.revenue == 0.0 && totals.expenses == 0.0 {
                continue;
            }
            println!(
                "  {}  revenue {:>12}  expenses {:>12}",
                label,
                euro(totals.revenue),
                euro(totals.expenses)
            );
        }
    }

    // Who earns what.
    let distribution = views::fee_distribution(events, store.artists());
    if !distribution.is_empty() {
        println!();
        println!("{}", "Fee distribution".bold());
        for (artist, total) in distribution {
            println!("  {:<24} {}", artist.name, euro(total));
        }
    }

    Ok(())
}
