//! Domain types for The Conversationalist.
//!
//! Value objects (locations, coordinates), the two entities (user profiles
//! and events) and the map/city types consumed by the map widget. Field
//! names serialize in camelCase so the seed data keeps the shape the
//! presentation layer expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a user profile
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a `UserId` from any string-like value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Unique identifier for an event
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates an `EventId` from any string-like value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ============================================================================
// Value Objects
// ============================================================================

/// Geographic position, serialized as a `[lat, lng]` pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    /// Creates coordinates from latitude and longitude
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// Where a person lives or an event takes place
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// City name
    pub city: String,
    /// State code (e.g. "PA")
    pub state: String,
    /// Neighborhood or district within the city
    pub area: String,
    /// Map position
    pub coordinates: Coordinates,
}

impl Location {
    /// Creates a location
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        area: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            area: area.into(),
            coordinates,
        }
    }
}

// ============================================================================
// User Profiles
// ============================================================================

/// Communication traits a member chooses to describe themselves with
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traits {
    /// e.g. "direct", "collaborative"
    pub communication_style: String,
    /// e.g. "introverted", "extroverted"
    pub personality_type: String,
}

/// When a member is generally available
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Available on weekdays
    pub weekdays: bool,
    /// Available on weekends
    pub weekends: bool,
    /// Preferred times of day ("morning", "evening", ...)
    pub times: Vec<String>,
}

/// Which profile sections other members may see
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Privacy {
    /// Location is visible
    pub show_location: bool,
    /// Interests are visible
    pub show_interests: bool,
    /// Traits are visible
    pub show_traits: bool,
}

impl Privacy {
    /// Everything visible
    pub const ALL_VISIBLE: Self = Self {
        show_location: true,
        show_interests: true,
        show_traits: true,
    };

    /// Whether the member may appear in people listings at all
    #[must_use]
    pub const fn allows_listing(&self) -> bool {
        self.show_interests || self.show_location
    }
}

impl Default for Privacy {
    fn default() -> Self {
        Self::ALL_VISIBLE
    }
}

/// A community member's profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique identifier
    pub id: UserId,
    /// Contact email
    pub email: String,
    /// Name shown to other members
    pub display_name: String,
    /// Home location
    pub location: Location,
    /// Interest tags (set-like, order kept for display)
    pub interests: Vec<String>,
    /// Communication traits
    pub traits: Traits,
    /// Skills the member offers
    pub skills: Vec<String>,
    /// General availability
    pub availability: Availability,
    /// Visibility settings
    pub privacy: Privacy,
}

impl UserProfile {
    /// Whether any of the member's interests is in `interests`
    #[must_use]
    pub fn shares_any_interest(&self, interests: &[String]) -> bool {
        interests.iter().any(|i| self.interests.contains(i))
    }
}

// ============================================================================
// Events
// ============================================================================

/// Error returned when an event type string is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown event type: {0:?}")]
pub struct ParseEventTypeError(pub String);

/// Kind of community event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    /// Hands-on skill workshop
    Workshop,
    /// Multi-session convention
    Convention,
    /// Guided group practice
    GroupSession,
    /// Informal meetup
    Meetup,
}

impl EventType {
    /// Every event type, in selector order
    pub const ALL: [Self; 4] = [
        Self::Workshop,
        Self::Convention,
        Self::GroupSession,
        Self::Meetup,
    ];

    /// Wire/selector form ("group-session")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workshop => "workshop",
            Self::Convention => "convention",
            Self::GroupSession => "group-session",
            Self::Meetup => "meetup",
        }
    }

    /// Human-readable form ("group session")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Workshop => "workshop",
            Self::Convention => "convention",
            Self::GroupSession => "group session",
            Self::Meetup => "meetup",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEventTypeError(s.to_string()))
    }
}

/// Named place where an event is held
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue name ("Community Center, Fishtown")
    pub name: String,
    /// Address fields
    #[serde(flatten)]
    pub location: Location,
}

/// A scheduled community event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier
    pub id: EventId,
    /// Title
    pub title: String,
    /// Kind of event
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Long description
    pub description: String,
    /// Start date
    pub date: DateTime<Utc>,
    /// Display time range ("10:00 AM - 12:00 PM")
    pub time: String,
    /// Where it happens
    #[serde(rename = "location")]
    pub venue: Venue,
    /// Maximum number of registrations
    pub capacity: u32,
    /// Registered member ids (weak references, may dangle)
    pub registered_users: Vec<UserId>,
    /// Who runs the event
    pub facilitator: String,
    /// Search tags
    pub tags: Vec<String>,
    /// What attendees will learn
    pub learning_objectives: Vec<String>,
}

impl Event {
    /// Number of registrations
    #[must_use]
    pub fn registered_count(&self) -> usize {
        self.registered_users.len()
    }

    /// Whether the event has no free spots left
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.registered_count() >= self.capacity as usize
    }

    /// Whether `user_id` is registered
    #[must_use]
    pub fn is_registered(&self, user_id: &UserId) -> bool {
        self.registered_users.contains(user_id)
    }

    /// Free spots left, zero when full or over capacity
    #[must_use]
    pub fn spots_remaining(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.registered_count())
    }
}

// ============================================================================
// Map
// ============================================================================

/// An entry of the city index used for map search and profile locations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// City name
    pub city: String,
    /// State code
    pub state: String,
    /// Map center for the city
    pub center: Coordinates,
}

impl City {
    /// `"city, state"` label shown in suggestions
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Center and zoom level handed to the map widget
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Map center
    pub center: Coordinates,
    /// Zoom level
    pub zoom: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_round_trips_through_strings() {
        for kind in EventType::ALL {
            assert_eq!(kind.as_str().parse::<EventType>(), Ok(kind));
        }
        assert_eq!(
            "party".parse::<EventType>(),
            Err(ParseEventTypeError("party".to_string()))
        );
    }

    #[test]
    fn event_type_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&EventType::GroupSession).unwrap();
        assert_eq!(json, "\"group-session\"");
        assert_eq!(EventType::GroupSession.label(), "group session");
    }

    #[test]
    fn coordinates_serialize_as_pairs() {
        let json = serde_json::to_string(&Coordinates::new(39.9526, -75.1652)).unwrap();
        assert_eq!(json, "[39.9526,-75.1652]");

        let parsed: Coordinates = serde_json::from_str("[40.7128,-74.006]").unwrap();
        assert_eq!(parsed, Coordinates::new(40.7128, -74.006));
    }

    #[test]
    fn listing_requires_location_or_interests() {
        let mut privacy = Privacy::ALL_VISIBLE;
        assert!(privacy.allows_listing());

        privacy.show_location = false;
        assert!(privacy.allows_listing());

        privacy.show_interests = false;
        assert!(!privacy.allows_listing());

        privacy.show_location = true;
        assert!(privacy.allows_listing());
    }
}
