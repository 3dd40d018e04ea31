use anyhow::Result;
use dialoguer::Input;
use gigbook_core::{AgencyStore, DefaultView, LoginRole};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn register(store: &mut AgencyStore) -> Result<()> {
    if store.profile().is_some() {
        anyhow::bail!(
            "An agency profile already exists.\n\n\
            Start over (deleting ALL data) with:\n  \
            gigbook reset"
        );
    }

    let name: String = Input::new().with_prompt("Agency name").interact_text()?;
    let email: String = Input::new().with_prompt("Admin email").interact_text()?;
    let password = rpassword::prompt_password("Admin password: ")?;

    store.register_agency(&name, &email, &password)?;
    println!("{} Agency '{}' is ready. Log in with:", "✓".green(), name);
    println!("  gigbook login {email}");
    Ok(())
}

pub fn login(store: &mut AgencyStore, email: &str, artist: bool) -> Result<()> {
    let requested = if artist {
        LoginRole::Artist
    } else {
        LoginRole::Admin
    };
    let password = rpassword::prompt_password("Password: ")?;

    let role = store.login(email, &password, requested)?;

    let agency = store
        .profile()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "gigbook".to_string());
    println!("{} Welcome to {}, logged in as {}", "✓".green(), agency, role.render());

    match role.default_view() {
        DefaultView::Dashboard => println!("Start with: gigbook dashboard"),
        DefaultView::MyCalendar => println!("Start with: gigbook events list"),
    }
    Ok(())
}

pub fn logout(store: &mut AgencyStore) -> Result<()> {
    store.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(store: &AgencyStore) -> Result<()> {
    match store.active_role() {
        Some(role) => {
            let mut line = role.render();
            if let gigbook_core::Role::Artist(id) = role {
                if let Some(artist) = store.artist(id) {
                    line = format!("{} ({})", artist.name, role.render());
                }
            }
            println!("{line}");
        }
        None => println!("{}", "Not logged in".dimmed()),
    }
    Ok(())
}
