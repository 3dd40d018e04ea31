//! TUI rendering for gigbook types.
//!
//! Extension trait adding colored terminal rendering to core types using
//! owo_colors.

use gigbook_core::views::EventFinancials;
use gigbook_core::{Event, InvitationStatus, PaymentStatus, Role, TransportType};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for InvitationStatus {
    fn render(&self) -> String {
        match self {
            InvitationStatus::Confirmed => "confirmed".green().to_string(),
            InvitationStatus::Pending => "pending".yellow().to_string(),
            InvitationStatus::Rejected => "rejected".red().to_string(),
            InvitationStatus::Cancelled => "cancelled".dimmed().to_string(),
        }
    }
}

impl Render for PaymentStatus {
    fn render(&self) -> String {
        match self {
            PaymentStatus::Paid => "paid".green().to_string(),
            PaymentStatus::Confirmed => "receipt confirmed".green().to_string(),
            PaymentStatus::Pending => "awaiting payment".yellow().to_string(),
        }
    }
}

impl Render for TransportType {
    fn render(&self) -> String {
        let label = match self {
            TransportType::Van => "van",
            TransportType::Car => "car",
            TransportType::Train => "train",
            TransportType::Plane => "plane",
            TransportType::Bus => "bus",
        };
        label.to_string()
    }
}

impl Render for Role {
    fn render(&self) -> String {
        match self {
            Role::SuperAdmin => "super-admin".magenta().to_string(),
            Role::Admin => "admin".magenta().to_string(),
            Role::Artist(id) => format!("artist {}", id.dimmed()),
        }
    }
}

/// One-line event summary: date, time, title, venue.
pub fn event_line(event: &Event) -> String {
    let when = format!(
        "{} {}",
        event.date.format("%Y-%m-%d"),
        event.start_time.format("%H:%M")
    );
    let venue = if event.venue_name.is_empty() {
        String::new()
    } else {
        format!("@ {}", event.venue_name)
    };
    format!("{} {} {}", when.bold(), event.title, venue.dimmed())
}

/// Event money summary for admin listings.
pub fn financials_line(financials: &EventFinancials, revenue: Option<f64>) -> String {
    let revenue_label = match revenue {
        Some(r) => format!("revenue {} EUR", r),
        None => "no revenue set".to_string(),
    };
    format!(
        "{}, fees {} EUR, net {} EUR",
        revenue_label, financials.total_artist_fees, financials.net_profit
    )
}

/// Euro amount without decimals when whole.
pub fn euro(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{} EUR", amount as i64)
    } else {
        format!("{:.2} EUR", amount)
    }
}
