use anyhow::Result;
use chrono::Local;
use gigbook_core::views;
use gigbook_core::{AgencyStore, Event, Role};
use owo_colors::OwoColorize;

use super::require_session;
use crate::render::event_line;

pub fn run(store: &AgencyStore, days: i64) -> Result<()> {
    let role = require_session(store)?;
    let today = Local::now().date_naive();

    // Artists look at their own calendar; admins at the whole book.
    let own: Vec<Event>;
    let pool: &[Event] = match &role {
        Role::Artist(id) => {
            own = views::events_for_artist(store.events(), id, false)
                .into_iter()
                .cloned()
                .collect();
            &own
        }
        _ => store.events(),
    };

    let imminent = views::imminent_events(pool, today, days);
    if imminent.is_empty() {
        println!("{}", format!("Nothing in the next {days} day(s)").dimmed());
        return Ok(());
    }

    println!("{}", format!("Coming up in the next {days} day(s)").bold());
    for event in imminent {
        println!("  {}", event_line(event));
    }
    Ok(())
}
