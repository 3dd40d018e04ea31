use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;
use dialoguer::Confirm;
use gigbook_core::views;
use gigbook_core::{AgencyStore, Event, Invitation, Role, TransportType};
use owo_colors::OwoColorize;

use super::{find_artist, find_event, require_admin, require_session};
use crate::notify;
use crate::render::{event_line, financials_line, Render};

#[derive(Subcommand)]
pub enum EventsCommand {
    /// Book a new event and invite the lineup
    New {
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(long)]
        time: String,

        /// Free-form duration, e.g. "3h"
        #[arg(long)]
        duration: Option<String>,

        #[arg(long)]
        client: Option<String>,

        /// Street address (used for directions links)
        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Equipment notes
        #[arg(long)]
        equipment: Option<String>,

        /// Costume notes
        #[arg(long)]
        costumes: Option<String>,

        /// Rehearsal time (HH:MM)
        #[arg(long)]
        rehearsal: Option<String>,

        /// Departure time for the lineup (HH:MM)
        #[arg(long)]
        departure: Option<String>,

        /// van | car | train | plane | bus
        #[arg(long)]
        transport: Option<String>,

        #[arg(long)]
        hotel: Option<String>,

        /// Gross booking fee charged to the client, in EUR
        #[arg(long)]
        revenue: Option<f64>,

        /// Invite an artist at a fee: "<artist>:<fee>". Repeatable.
        #[arg(long = "invite", value_name = "ARTIST:FEE")]
        invites: Vec<String>,
    },
    /// List events
    List {
        /// Only fully confirmed events
        #[arg(long)]
        confirmed: bool,
    },
    /// Show one event in full
    Show {
        /// Event id or title
        event: String,
    },
    /// Delete an event and its invitations
    Rm {
        /// Event id or title
        event: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(store: &mut AgencyStore, command: EventsCommand) -> Result<()> {
    match command {
        EventsCommand::New {
            title,
            date,
            time,
            duration,
            client,
            location,
            venue,
            description,
            equipment,
            costumes,
            rehearsal,
            departure,
            transport,
            hotel,
            revenue,
            invites,
        } => {
            require_admin(store)?;
            new(
                store, &title, &date, &time, duration, client, location, venue, description,
                equipment, costumes, rehearsal, departure, transport, hotel, revenue, &invites,
            )
        }
        EventsCommand::List { confirmed } => list(store, confirmed),
        EventsCommand::Show { event } => show(store, &event),
        EventsCommand::Rm { event, yes } => {
            require_admin(store)?;
            remove(store, &event, yes)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn new(
    store: &mut AgencyStore,
    title: &str,
    date: &str,
    time: &str,
    duration: Option<String>,
    client: Option<String>,
    location: Option<String>,
    venue: Option<String>,
    description: Option<String>,
    equipment: Option<String>,
    costumes: Option<String>,
    rehearsal: Option<String>,
    departure: Option<String>,
    transport: Option<String>,
    hotel: Option<String>,
    revenue: Option<f64>,
    invites: &[String],
) -> Result<()> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;

    let mut event = Event::new(title, date, time);
    event.duration = duration.unwrap_or_default();
    event.client = client;
    event.location = location.unwrap_or_default();
    event.venue_name = venue.unwrap_or_default();
    event.description = description.unwrap_or_default();
    event.equipment = equipment.unwrap_or_default();
    event.costumes = costumes.unwrap_or_default();
    event.rehearsal_time = rehearsal.as_deref().map(parse_time).transpose()?;
    event.logistics.departure_time = departure.as_deref().map(parse_time).transpose()?;
    if let Some(transport) = transport {
        event.logistics.transport_type = parse_transport(&transport)?;
    }
    event.logistics.hotel = hotel;
    event.revenue = revenue;

    for invite in invites {
        let (artist_ref, fee) = invite
            .rsplit_once(':')
            .with_context(|| format!("Invalid --invite '{invite}', expected <artist>:<fee>"))?;
        let fee: f64 = fee
            .parse()
            .with_context(|| format!("Invalid fee in --invite '{invite}'"))?;
        let artist = find_artist(store, artist_ref)?;
        event.invitations.push(Invitation::new(&artist.id, fee));
    }

    let invited = event.invitations.len();
    let event_id = event.id.clone();
    store.add_event(event)?;

    println!(
        "{} '{}' booked with {} invitation(s) ({})",
        "✓".green(),
        title,
        invited,
        event_id.dimmed()
    );
    if invited > 0 {
        notify::show(
            "gigbook: new booking",
            &format!("{invited} invitation(s) sent for '{title}'"),
        );
    }
    Ok(())
}

fn list(store: &AgencyStore, confirmed: bool) -> Result<()> {
    let role = require_session(store)?;

    // Artists see their own calendar; admins see the whole book.
    let mut events: Vec<&Event> = match &role {
        Role::Artist(id) => views::events_for_artist(store.events(), id, confirmed),
        _ if confirmed => views::confirmed_events(store.events()),
        _ => store.events().iter().collect(),
    };
    events.sort_by_key(|e| (e.date, e.start_time));

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}", event_line(event));
        match &role {
            Role::Artist(id) => {
                if let Some(invitation) = event.invitation_for(id) {
                    println!(
                        "      {} at {} · {}",
                        invitation.status.render(),
                        crate::render::euro(invitation.fee),
                        invitation.payment_status.render()
                    );
                }
            }
            _ => {
                let confirmed_count = event
                    .invitations
                    .iter()
                    .filter(|i| i.status == gigbook_core::InvitationStatus::Confirmed)
                    .count();
                println!(
                    "      {}/{} confirmed, {} {}",
                    confirmed_count,
                    event.invitations.len(),
                    financials_line(&views::event_financials(event), event.revenue),
                    event.id.dimmed()
                );
            }
        }
    }
    Ok(())
}

fn show(store: &AgencyStore, needle: &str) -> Result<()> {
    let role = require_session(store)?;
    let event = find_event(store, needle)?;

    println!("{}", event.title.bold());
    println!("  id:        {}", event.id);
    if let Some(client) = &event.client {
        println!("  client:    {client}");
    }
    println!(
        "  when:      {} {} ({})",
        event.date,
        event.start_time.format("%H:%M"),
        if event.duration.is_empty() { "?" } else { event.duration.as_str() }
    );
    if !event.venue_name.is_empty() {
        println!("  venue:     {}", event.venue_name);
    }
    if !event.location.is_empty() {
        println!("  location:  {}", event.location);
    }
    if !event.description.is_empty() {
        println!("  details:   {}", event.description);
    }
    if !event.equipment.is_empty() {
        println!("  equipment: {}", event.equipment);
    }
    if !event.costumes.is_empty() {
        println!("  costumes:  {}", event.costumes);
    }
    if let Some(rehearsal) = event.rehearsal_time {
        println!("  rehearsal: {}", rehearsal.format("%H:%M"));
    }

    let logistics = &event.logistics;
    let mut travel = format!("by {}", logistics.transport_type.render());
    if let Some(departure) = logistics.departure_time {
        travel = format!("{} at {}", travel, departure.format("%H:%M"));
    }
    if let Some(hotel) = &logistics.hotel {
        travel = format!("{travel}, staying at {hotel}");
    }
    println!("  travel:    {travel}");

    match &role {
        Role::Artist(id) => {
            if let Some(invitation) = event.invitation_for(id) {
                println!(
                    "  your slot: {} at {} · {}",
                    invitation.status.render(),
                    crate::render::euro(invitation.fee),
                    invitation.payment_status.render()
                );
            }
        }
        _ => {
            println!("  lineup:");
            for invitation in &event.invitations {
                let name = store
                    .artist(&invitation.artist_id)
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| invitation.artist_id.clone());
                println!(
                    "    {} · {} · {} · {}",
                    name.bold(),
                    crate::render::euro(invitation.fee),
                    invitation.status.render(),
                    invitation.payment_status.render()
                );
            }
            println!(
                "  money:     {}",
                financials_line(&views::event_financials(event), event.revenue)
            );
        }
    }
    Ok(())
}

fn remove(store: &mut AgencyStore, needle: &str, yes: bool) -> Result<()> {
    let event = find_event(store, needle)?;
    let (id, title) = (event.id.clone(), event.title.clone());

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{title}' and all its invitations?"))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    store.remove_event(&id)?;
    println!("{} '{}' deleted", "✓".green(), title);
    notify::show(
        "gigbook: booking cancelled",
        &format!("'{title}' has been removed from the calendar"),
    );
    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{s}'. Expected YYYY-MM-DD"))
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("Invalid time '{s}'. Expected HH:MM"))
}

fn parse_transport(s: &str) -> Result<TransportType> {
    match s.to_lowercase().as_str() {
        "van" => Ok(TransportType::Van),
        "car" => Ok(TransportType::Car),
        "train" => Ok(TransportType::Train),
        "plane" => Ok(TransportType::Plane),
        "bus" => Ok(TransportType::Bus),
        _ => anyhow::bail!("Unknown transport '{s}'. Use van, car, train, plane or bus"),
    }
}
