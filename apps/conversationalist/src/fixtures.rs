//! Record builders shared by unit tests.

use crate::types::{
    Availability, Coordinates, Event, EventId, EventType, Location, Privacy, Traits, UserId,
    UserProfile, Venue,
};
use chrono::{DateTime, Duration, Utc};
use conversationalist_core::environment::Clock;

pub fn base_time() -> DateTime<Utc> {
    conversationalist_testing::test_clock().now()
}

pub fn philly(area: &str) -> Location {
    Location::new(
        "Philadelphia",
        "PA",
        area,
        Coordinates::new(39.9526, -75.1652),
    )
}

/// Event `id` of `kind`, `days` after the test clock, capacity 10.
pub fn event(id: &str, kind: EventType, days: i64) -> Event {
    Event {
        id: EventId::new(id),
        title: format!("Event {id}"),
        kind,
        description: "Details to follow.".to_string(),
        date: base_time() + Duration::days(days),
        time: "6:00 PM - 8:00 PM".to_string(),
        venue: Venue {
            name: "Center City Meeting Room".to_string(),
            location: philly("Center City"),
        },
        capacity: 10,
        registered_users: Vec::new(),
        facilitator: "Community Organized".to_string(),
        tags: Vec::new(),
        learning_objectives: Vec::new(),
    }
}

pub fn user(id: &str, name: &str, area: &str, personality: &str) -> UserProfile {
    UserProfile {
        id: UserId::new(id),
        email: format!("{}@example.com", name.to_lowercase()),
        display_name: name.to_string(),
        location: philly(area),
        interests: Vec::new(),
        traits: Traits {
            communication_style: "direct".to_string(),
            personality_type: personality.to_string(),
        },
        skills: Vec::new(),
        availability: Availability::default(),
        privacy: Privacy::ALL_VISIBLE,
    }
}
