use anyhow::Result;
use dialoguer::Confirm;
use gigbook_core::AgencyStore;
use owo_colors::OwoColorize;

pub fn run(store: &mut AgencyStore, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete ALL agency data (roster, events, notifications, profile)?")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    store.reset()?;
    println!("{} All data deleted. Start again with:", "✓".green());
    println!("  gigbook register");
    Ok(())
}
