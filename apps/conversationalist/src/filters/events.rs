//! Event Filter Engine.
//!
//! Keeps events of the selected type whose text fields contain the query,
//! then orders them by date. The sort is stable, so events sharing a date
//! keep their catalog order.

use super::{Choice, TextQuery};
use crate::types::{Event, EventType};

/// Filters `events` by type and free-text query, ordered by ascending date.
///
/// The query is matched case-insensitively against the title, description,
/// the venue's city, state and area, and every tag. An empty query matches
/// everything.
#[must_use]
pub fn filter_events<'a>(
    events: &'a [Event],
    type_filter: &Choice<EventType>,
    query: &str,
) -> Vec<&'a Event> {
    let query = TextQuery::new(query);

    let mut matches: Vec<&Event> = events
        .iter()
        .filter(|event| type_filter.admits(&event.kind))
        .filter(|event| query.is_empty() || matches_text(event, &query))
        .collect();

    matches.sort_by_key(|event| event.date);

    tracing::debug!(
        total = events.len(),
        matched = matches.len(),
        type_filter = %type_filter,
        "Filtered events"
    );
    matches
}

fn matches_text(event: &Event, query: &TextQuery) -> bool {
    let place = &event.venue.location;
    query.matches(&event.title)
        || query.matches(&event.description)
        || query.matches(&place.city)
        || query.matches(&place.state)
        || query.matches(&place.area)
        || query.matches_any(&event.tags)
}

/// Selector state of the events screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQuery {
    /// Selected event type
    pub kind: Choice<EventType>,
    /// Search box contents
    pub text: String,
}

impl EventQuery {
    /// Creates a query from a type choice and search text
    #[must_use]
    pub fn new(kind: Choice<EventType>, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Runs the query
    #[must_use]
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        filter_events(events, &self.kind, &self.text)
    }
}

/// Result of listing events, keeping "nothing loaded" apart from "nothing matched"
#[derive(Clone, Debug, PartialEq)]
pub enum EventListing<'a> {
    /// The catalog holds no events at all
    NotLoaded,
    /// Events exist but none passes the filters
    NoMatches,
    /// Matching events in display order
    Matches(Vec<&'a Event>),
}

/// Runs `query` over `events` and classifies the outcome for display.
#[must_use]
pub fn list_events<'a>(events: &'a [Event], query: &EventQuery) -> EventListing<'a> {
    if events.is_empty() {
        return EventListing::NotLoaded;
    }
    let matches = query.apply(events);
    if matches.is_empty() {
        EventListing::NoMatches
    } else {
        EventListing::Matches(matches)
    }
}
