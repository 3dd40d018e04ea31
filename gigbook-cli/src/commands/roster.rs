use anyhow::Result;
use clap::Subcommand;
use dialoguer::Confirm;
use gigbook_core::{AgencyStore, Artist};
use owo_colors::OwoColorize;

use super::{find_artist, require_admin};

#[derive(Subcommand)]
pub enum RosterCommand {
    /// Add an artist to the roster
    Add {
        name: String,

        #[arg(long)]
        email: String,

        /// Discipline, e.g. "Singer", "Acrobat", "DJ"
        #[arg(long)]
        discipline: String,

        #[arg(long)]
        phone: Option<String>,

        /// Ensemble or company the artist performs with
        #[arg(long)]
        group: Option<String>,

        /// Set a login password so the artist can use gigbook themselves
        #[arg(long)]
        with_login: bool,
    },
    /// List the roster
    List,
    /// Show one artist in full
    Show {
        /// Artist id, email or name
        artist: String,
    },
    /// Edit an artist (only the given fields change)
    Edit {
        /// Artist id, email or name
        artist: String,

        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        discipline: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        group: Option<String>,
        /// Prompt for a new login password
        #[arg(long)]
        reset_password: bool,
    },
    /// Remove an artist permanently (cascades to their invitations)
    Rm {
        /// Artist id, email or name
        artist: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(store: &mut AgencyStore, command: RosterCommand) -> Result<()> {
    require_admin(store)?;

    match command {
        RosterCommand::Add {
            name,
            email,
            discipline,
            phone,
            group,
            with_login,
        } => add(store, &name, &email, &discipline, phone, group, with_login),
        RosterCommand::List => list(store),
        RosterCommand::Show { artist } => show(store, &artist),
        RosterCommand::Edit {
            artist,
            name,
            email,
            discipline,
            phone,
            group,
            reset_password,
        } => edit(store, &artist, name, email, discipline, phone, group, reset_password),
        RosterCommand::Rm { artist, yes } => remove(store, &artist, yes),
    }
}

fn add(
    store: &mut AgencyStore,
    name: &str,
    email: &str,
    discipline: &str,
    phone: Option<String>,
    group: Option<String>,
    with_login: bool,
) -> Result<()> {
    let mut artist = Artist::new(name, email, discipline);
    artist.phone = phone;
    artist.group = group;
    if with_login {
        artist.password = Some(rpassword::prompt_password("Artist password: ")?);
    }

    let id = artist.id.clone();
    store.add_artist(artist)?;
    println!("{} {} is on the roster ({})", "✓".green(), name, id.dimmed());
    Ok(())
}

fn list(store: &AgencyStore) -> Result<()> {
    if store.artists().is_empty() {
        println!("{}", "The roster is empty".dimmed());
        return Ok(());
    }

    for artist in store.artists() {
        let group = artist
            .group
            .as_deref()
            .map(|g| format!(" [{g}]"))
            .unwrap_or_default();
        println!(
            "  {} {}{} {}",
            artist.name.bold(),
            artist.discipline,
            group,
            artist.id.dimmed()
        );
    }
    Ok(())
}

fn show(store: &AgencyStore, needle: &str) -> Result<()> {
    let artist = find_artist(store, needle)?;

    println!("{}", artist.name.bold());
    println!("  id:         {}", artist.id);
    println!("  email:      {}", artist.email);
    println!("  discipline: {}", artist.discipline);
    if let Some(phone) = &artist.phone {
        println!("  phone:      {phone}");
    }
    if let Some(group) = &artist.group {
        println!("  group:      {group}");
    }
    println!(
        "  login:      {}",
        if artist.password.is_some() { "enabled" } else { "not set" }
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn edit(
    store: &mut AgencyStore,
    needle: &str,
    name: Option<String>,
    email: Option<String>,
    discipline: Option<String>,
    phone: Option<String>,
    group: Option<String>,
    reset_password: bool,
) -> Result<()> {
    // The store replaces records wholesale, so build the full updated entity
    // from the current one plus whatever flags were given.
    let mut updated = find_artist(store, needle)?.clone();
    if let Some(name) = name {
        updated.name = name;
    }
    if let Some(email) = email {
        updated.email = email;
    }
    if let Some(discipline) = discipline {
        updated.discipline = discipline;
    }
    if let Some(phone) = phone {
        updated.phone = Some(phone);
    }
    if let Some(group) = group {
        updated.group = Some(group);
    }
    if reset_password {
        updated.password = Some(rpassword::prompt_password("New artist password: ")?);
    }

    let name = updated.name.clone();
    store.update_artist(updated)?;
    println!("{} {}'s profile updated", "✓".green(), name);
    Ok(())
}

fn remove(store: &mut AgencyStore, needle: &str, yes: bool) -> Result<()> {
    let artist = find_artist(store, needle)?;
    let (id, name) = (artist.id.clone(), artist.name.clone());

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove {name} permanently? Their invitations on every event go too."
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    let removal = store.remove_artist(&id)?;
    println!(
        "{} {} removed along with {} invitation(s)",
        "✓".green(),
        name,
        removal.invitations_removed
    );
    if removal.signed_out {
        println!("{}", "Their active session was signed out.".yellow());
    }
    Ok(())
}
