//! Derived views over the entity store.
//!
//! Pure, recomputed-on-read functions: none mutate state, none cache. Every
//! call walks the full collections, which is fine at single-agency scale.
//! Date-dependent views take the reference date or year explicitly so they
//! stay deterministic under test; the `*_today` wrappers supply the clock.

use chrono::{Datelike, Local, NaiveDate};

use crate::artist::Artist;
use crate::event::{Event, Invitation, InvitationStatus, PaymentStatus};

/// How close an event has to be to count as imminent, in days.
pub const DEFAULT_IMMINENT_WINDOW_DAYS: i64 = 2;

/// Events where at least one artist was invited and everyone confirmed.
pub fn confirmed_events(events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|e| e.is_fully_confirmed()).collect()
}

/// Events the artist is invited to, optionally restricted to the ones they
/// have confirmed.
pub fn events_for_artist<'a>(
    events: &'a [Event],
    artist_id: &str,
    only_confirmed: bool,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| {
            e.invitation_for(artist_id).is_some_and(|i| {
                !only_confirmed || i.status == InvitationStatus::Confirmed
            })
        })
        .collect()
}

/// Events whose date falls within [today, today + window_days] inclusive,
/// ascending by date.
pub fn imminent_events<'a>(
    events: &'a [Event],
    today: NaiveDate,
    window_days: i64,
) -> Vec<&'a Event> {
    let horizon = today + chrono::Duration::days(window_days);
    let mut imminent: Vec<&Event> = events
        .iter()
        .filter(|e| e.date >= today && e.date <= horizon)
        .collect();
    imminent.sort_by_key(|e| e.date);
    imminent
}

/// [`imminent_events`] against the local clock and the default window.
pub fn imminent_events_today(events: &[Event]) -> Vec<&Event> {
    imminent_events(events, Local::now().date_naive(), DEFAULT_IMMINENT_WINDOW_DAYS)
}

/// One row of an artist's payment history.
#[derive(Debug, Clone)]
pub struct LedgerEntry<'a> {
    pub event: &'a Event,
    pub invitation: &'a Invitation,
}

/// An artist's full payment history with its headline totals.
#[derive(Debug, Clone)]
pub struct ArtistLedger<'a> {
    /// Every (event, invitation) pair for the artist, newest event first.
    pub entries: Vec<LedgerEntry<'a>>,
    /// Fees already paid out, all-time.
    pub total_paid: f64,
    /// Confirmed but not yet paid fees.
    pub total_pending: f64,
    /// Gross fees for confirmed shows dated in the given year.
    pub total_earned_this_year: f64,
    /// Confirmed shows dated in the given year.
    pub shows_this_year: usize,
}

pub fn artist_ledger<'a>(events: &'a [Event], artist_id: &str, year: i32) -> ArtistLedger<'a> {
    let mut entries: Vec<LedgerEntry> = events
        .iter()
        .filter_map(|event| {
            event
                .invitation_for(artist_id)
                .map(|invitation| LedgerEntry { event, invitation })
        })
        .collect();
    entries.sort_by(|a, b| b.event.date.cmp(&a.event.date));

    let total_paid = entries
        .iter()
        .filter(|e| e.invitation.payment_status == PaymentStatus::Paid)
        .map(|e| e.invitation.fee)
        .sum();

    let total_pending = entries
        .iter()
        .filter(|e| e.invitation.status == InvitationStatus::Confirmed)
        .filter(|e| e.invitation.payment_status == PaymentStatus::Pending)
        .map(|e| e.invitation.fee)
        .sum();

    let this_year: Vec<&LedgerEntry> = entries
        .iter()
        .filter(|e| e.invitation.status == InvitationStatus::Confirmed)
        .filter(|e| e.event.date.year() == year)
        .collect();
    let total_earned_this_year = this_year.iter().map(|e| e.invitation.fee).sum();
    let shows_this_year = this_year.len();

    ArtistLedger {
        entries,
        total_paid,
        total_pending,
        total_earned_this_year,
        shows_this_year,
    }
}

/// [`artist_ledger`] for the current calendar year.
pub fn artist_ledger_current_year<'a>(events: &'a [Event], artist_id: &str) -> ArtistLedger<'a> {
    artist_ledger(events, artist_id, Local::now().year())
}

/// Money in and money out for one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventFinancials {
    pub total_artist_fees: f64,
    /// revenue - fees; revenue counts as 0 when unset. Always derived.
    pub net_profit: f64,
}

pub fn event_financials(event: &Event) -> EventFinancials {
    let total_artist_fees: f64 = event.invitations.iter().map(|i| i.fee).sum();
    EventFinancials {
        total_artist_fees,
        net_profit: event.revenue.unwrap_or(0.0) - total_artist_fees,
    }
}

/// Revenue and expenses for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyTotals {
    pub revenue: f64,
    pub expenses: f64,
}

/// Twelve buckets (January first) of revenue and artist-fee expenses for the
/// given year, as plotted by the dashboard and payment charts.
pub fn monthly_aggregate(events: &[Event], year: i32) -> [MonthlyTotals; 12] {
    let mut months = [MonthlyTotals::default(); 12];
    for event in events.iter().filter(|e| e.date.year() == year) {
        let bucket = &mut months[event.date.month0() as usize];
        bucket.revenue += event.revenue.unwrap_or(0.0);
        bucket.expenses += event.invitations.iter().map(|i| i.fee).sum::<f64>();
    }
    months
}

/// Total booked fees per artist, artists without any fee omitted. Feeds the
/// cachet-distribution chart.
pub fn fee_distribution<'a>(events: &[Event], artists: &'a [Artist]) -> Vec<(&'a Artist, f64)> {
    artists
        .iter()
        .map(|artist| {
            let total: f64 = events
                .iter()
                .filter_map(|e| e.invitation_for(&artist.id))
                .map(|i| i.fee)
                .sum();
            (artist, total)
        })
        .filter(|(_, total)| *total > 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_event(title: &str, date: (i32, u32, u32), invitations: Vec<Invitation>) -> Event {
        let mut event = Event::new(
            title,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        );
        event.invitations = invitations;
        event
    }

    fn confirmed(artist_id: &str, fee: f64) -> Invitation {
        let mut invitation = Invitation::new(artist_id, fee);
        invitation.status = InvitationStatus::Confirmed;
        invitation
    }

    #[test]
    fn test_confirmed_events_excludes_empty_and_partial() {
        let events = vec![
            make_event("Empty", (2024, 5, 1), vec![]),
            make_event(
                "Partial",
                (2024, 5, 2),
                vec![confirmed("a1", 100.0), Invitation::new("a2", 100.0)],
            ),
            make_event("Full", (2024, 5, 3), vec![confirmed("a1", 100.0)]),
        ];

        let result = confirmed_events(&events);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Full");
    }

    #[test]
    fn test_events_for_artist_confirmed_filter() {
        let events = vec![
            make_event("Pending gig", (2024, 5, 1), vec![Invitation::new("a1", 100.0)]),
            make_event("Confirmed gig", (2024, 5, 2), vec![confirmed("a1", 100.0)]),
            make_event("Other artist", (2024, 5, 3), vec![confirmed("a2", 100.0)]),
        ];

        assert_eq!(events_for_artist(&events, "a1", false).len(), 2);
        let only = events_for_artist(&events, "a1", true);
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].title, "Confirmed gig");
    }

    #[test]
    fn test_imminent_window_is_inclusive_and_sorted() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let events = vec![
            make_event("In two days", (2024, 5, 12), vec![]),
            make_event("Today", (2024, 5, 10), vec![]),
            make_event("Yesterday", (2024, 5, 9), vec![]),
            make_event("Too far", (2024, 5, 13), vec![]),
        ];

        let imminent = imminent_events(&events, today, 2);
        let titles: Vec<_> = imminent.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Today", "In two days"]);
    }

    #[test]
    fn test_artist_ledger_totals() {
        let mut paid = confirmed("a1", 500.0);
        paid.payment_status = PaymentStatus::Paid;

        let events = vec![
            make_event("Old gig", (2023, 11, 20), vec![paid]),
            make_event("This year", (2024, 6, 21), vec![confirmed("a1", 800.0)]),
            make_event("Pending answer", (2024, 7, 1), vec![Invitation::new("a1", 300.0)]),
        ];

        let ledger = artist_ledger(&events, "a1", 2024);
        assert_eq!(ledger.entries.len(), 3);
        // Newest event first.
        assert_eq!(ledger.entries[0].event.title, "Pending answer");
        assert_eq!(ledger.total_paid, 500.0);
        assert_eq!(ledger.total_pending, 800.0);
        assert_eq!(ledger.total_earned_this_year, 800.0);
        assert_eq!(ledger.shows_this_year, 1);
    }

    #[test]
    fn test_event_financials_derivation() {
        let mut event = make_event(
            "Gala",
            (2024, 5, 15),
            vec![Invitation::new("a1", 300.0), Invitation::new("a2", 200.0)],
        );
        event.revenue = Some(1000.0);

        let financials = event_financials(&event);
        assert_eq!(financials.total_artist_fees, 500.0);
        assert_eq!(financials.net_profit, 500.0);
    }

    #[test]
    fn test_event_financials_defaults_missing_revenue_to_zero() {
        let event = make_event("Gala", (2024, 5, 15), vec![Invitation::new("a1", 300.0)]);
        assert_eq!(event_financials(&event).net_profit, -300.0);
    }

    #[test]
    fn test_monthly_aggregate_buckets_by_month() {
        let mut may = make_event("May gala", (2024, 5, 15), vec![Invitation::new("a1", 400.0)]);
        may.revenue = Some(1000.0);
        let mut june = make_event("June fest", (2024, 6, 21), vec![Invitation::new("a1", 800.0)]);
        june.revenue = Some(1500.0);
        let other_year = make_event("Old", (2023, 5, 1), vec![Invitation::new("a1", 999.0)]);

        let months = monthly_aggregate(&[may, june, other_year], 2024);
        assert_eq!(months[4].revenue, 1000.0);
        assert_eq!(months[4].expenses, 400.0);
        assert_eq!(months[5].revenue, 1500.0);
        assert_eq!(months[5].expenses, 800.0);
        assert_eq!(months[0], MonthlyTotals::default());
    }

    #[test]
    fn test_fee_distribution_omits_zero_fee_artists() {
        let artists = vec![
            Artist::new("Elena", "elena@x.it", "Singer"),
            Artist::new("Marco", "marco@x.it", "Magician"),
        ];
        let events = vec![make_event(
            "Gala",
            (2024, 5, 15),
            vec![Invitation::new(&artists[0].id, 400.0)],
        )];

        let distribution = fee_distribution(&events, &artists);
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution[0].0.name, "Elena");
        assert_eq!(distribution[0].1, 400.0);
    }
}
