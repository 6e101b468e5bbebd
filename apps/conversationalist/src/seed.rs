//! Embedded sample data the catalog starts from.
//!
//! Event dates are stored as day offsets and anchored to "now" at load time,
//! so the sample events are always upcoming.

use crate::error::{EntityKind, SeedError};
use crate::state::CatalogState;
use crate::types::{City, Event, EventId, EventType, Location, UserId, UserProfile, Venue};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::collections::HashSet;

/// Sample data shipped with the binary
const SEED_JSON: &str = include_str!("../data/seed.json");

/// Everything the application loads at startup
#[derive(Clone, Debug, PartialEq)]
pub struct SeedData {
    /// Interests offered by the people screen and the profile form
    pub interests: Vec<String>,
    /// Known Philadelphia neighborhoods
    pub areas: Vec<Location>,
    /// Sample events
    pub events: Vec<Event>,
    /// Sample member profiles
    pub users: Vec<UserProfile>,
    /// City index for map search and profile coordinates
    pub cities: Vec<City>,
}

#[derive(Deserialize)]
struct SeedDocument {
    interests: Vec<String>,
    areas: Vec<Location>,
    events: Vec<SeedEvent>,
    users: Vec<UserProfile>,
    cities: Vec<City>,
}

/// An event as written in the seed document
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedEvent {
    id: EventId,
    title: String,
    #[serde(rename = "type")]
    kind: EventType,
    description: String,
    starts_in_days: i64,
    time: String,
    location: Venue,
    capacity: u32,
    registered_users: Vec<UserId>,
    facilitator: String,
    tags: Vec<String>,
    learning_objectives: Vec<String>,
}

impl SeedEvent {
    fn into_event(self, now: DateTime<Utc>) -> Event {
        Event {
            id: self.id,
            title: self.title,
            kind: self.kind,
            description: self.description,
            date: now + Duration::days(self.starts_in_days),
            time: self.time,
            venue: self.location,
            capacity: self.capacity,
            registered_users: self.registered_users,
            facilitator: self.facilitator,
            tags: self.tags,
            learning_objectives: self.learning_objectives,
        }
    }
}

impl SeedData {
    /// Loads the embedded sample data, dating events relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the embedded document is malformed or
    /// repeats an id.
    pub fn load(now: DateTime<Utc>) -> Result<Self, SeedError> {
        Self::from_json(SEED_JSON, now)
    }

    /// Parses a seed document, dating events relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Malformed`] if `json` does not have the seed
    /// shape, and [`SeedError::DuplicateId`] if two events or two users
    /// share an id.
    pub fn from_json(json: &str, now: DateTime<Utc>) -> Result<Self, SeedError> {
        let document: SeedDocument = serde_json::from_str(json)?;

        let events: Vec<Event> = document
            .events
            .into_iter()
            .map(|e| e.into_event(now))
            .collect();

        check_unique(EntityKind::Event, events.iter().map(|e| e.id.as_str()))?;
        check_unique(EntityKind::User, document.users.iter().map(|u| u.id.as_str()))?;

        tracing::debug!(
            events = events.len(),
            users = document.users.len(),
            cities = document.cities.len(),
            "Seed data loaded"
        );

        Ok(Self {
            interests: document.interests,
            areas: document.areas,
            events,
            users: document.users,
            cities: document.cities,
        })
    }

    /// Initial catalog state: all events and users, nobody signed in
    #[must_use]
    pub fn initial_state(&self) -> CatalogState {
        CatalogState::new(self.events.clone(), self.users.clone())
    }
}

fn check_unique<'a>(
    kind: EntityKind,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
