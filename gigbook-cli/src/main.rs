mod commands;
mod notify;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gigbook_core::config::GigbookConfig;
use gigbook_core::snapshot::SnapshotStore;
use gigbook_core::store::AgencyStore;

#[derive(Parser)]
#[command(name = "gigbook")]
#[command(about = "Manage your agency roster, event bookings, invitations and payments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the agency profile (first run only)
    Register,
    /// Log in as admin, or as an artist with --artist
    Login {
        email: String,

        /// Log in as a roster artist instead of the agency admin
        #[arg(long)]
        artist: bool,
    },
    /// Clear the active session
    Logout,
    /// Show the active session
    Whoami,
    /// Manage the artist roster (admin)
    #[command(subcommand)]
    Roster(commands::roster::RosterCommand),
    /// Manage event bookings (admin)
    #[command(subcommand)]
    Events(commands::events::EventsCommand),
    /// Answer one of your invitations (artist)
    Respond {
        /// Event id or title
        event: String,

        /// Accept the invitation
        #[arg(long, conflicts_with = "decline")]
        accept: bool,

        /// Decline the invitation
        #[arg(long)]
        decline: bool,
    },
    /// Record a payment for an artist's slot on an event (admin)
    Pay {
        /// Event id or title
        event: String,
        /// Artist id, email or name
        artist: String,

        /// Acknowledge receipt of an already-paid fee
        #[arg(long)]
        confirm_receipt: bool,
    },
    /// Agency overview: totals, monthly aggregates, fee distribution (admin)
    Dashboard,
    /// Your payment history and earnings (artist)
    Payments,
    /// Events coming up in the next days
    Agenda {
        /// How many days ahead to look
        #[arg(long, default_value_t = gigbook_core::views::DEFAULT_IMMINENT_WINDOW_DAYS)]
        days: i64,
    },
    /// List or read notifications
    #[command(subcommand)]
    Notifications(commands::notifications::NotificationsCommand),
    /// Export events to a file (admin)
    #[command(subcommand)]
    Export(commands::export::ExportCommand),
    /// Build share links: directions, calendar, WhatsApp, email
    #[command(subcommand)]
    Share(commands::share::ShareCommand),
    /// Seed a small demo roster and two bookings into an empty agency
    Demo,
    /// Delete ALL agency data and start over
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GigbookConfig::load()?;
    log::debug!("using data dir {}", config.data_path().display());
    let storage = SnapshotStore::open(config.data_path())?;
    let mut store = AgencyStore::open(storage)?;

    if store.rehydration().forced_logout {
        use owo_colors::OwoColorize;
        println!(
            "{}",
            "Your profile was removed from the agency; you have been signed out.".yellow()
        );
    }

    match cli.command {
        Commands::Register => commands::session::register(&mut store),
        Commands::Login { email, artist } => commands::session::login(&mut store, &email, artist),
        Commands::Logout => commands::session::logout(&mut store),
        Commands::Whoami => commands::session::whoami(&store),
        Commands::Roster(command) => commands::roster::run(&mut store, command),
        Commands::Events(command) => commands::events::run(&mut store, command),
        Commands::Respond {
            event,
            accept,
            decline,
        } => commands::respond::run(&mut store, &event, accept, decline),
        Commands::Pay {
            event,
            artist,
            confirm_receipt,
        } => commands::pay::run(&mut store, &event, &artist, confirm_receipt),
        Commands::Dashboard => commands::dashboard::run(&store),
        Commands::Payments => commands::payments::run(&store),
        Commands::Agenda { days } => commands::agenda::run(&store, days),
        Commands::Notifications(command) => commands::notifications::run(&mut store, command),
        Commands::Export(command) => commands::export::run(&store, command),
        Commands::Share(command) => commands::share::run(&store, command),
        Commands::Demo => commands::demo::run(&mut store),
        Commands::Reset { yes } => commands::reset::run(&mut store, yes),
    }
}
