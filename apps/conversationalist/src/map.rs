//! Overlays the map widget draws on top of its tiles.

use crate::types::{Coordinates, Event, EventId, UserProfile};
use chrono::{DateTime, Utc};

/// Pixels of circle radius per member in an area
const RADIUS_PER_MEMBER: u32 = 8;

/// Largest density circle, in pixels
const MAX_RADIUS: u32 = 50;

/// Pin for one event
#[derive(Clone, Debug, PartialEq)]
pub struct EventMarker {
    /// Event the pin links to
    pub event_id: EventId,
    /// Popup title
    pub title: String,
    /// Venue name
    pub venue: String,
    /// Pin position
    pub position: Coordinates,
    /// Event date
    pub date: DateTime<Utc>,
    /// Display time range
    pub time: String,
    /// Human-readable type ("group session")
    pub kind: &'static str,
}

/// One marker per event, in catalog order.
#[must_use]
pub fn event_markers(events: &[Event]) -> Vec<EventMarker> {
    events
        .iter()
        .map(|event| EventMarker {
            event_id: event.id.clone(),
            title: event.title.clone(),
            venue: event.venue.name.clone(),
            position: event.venue.location.coordinates,
            date: event.date,
            time: event.time.clone(),
            kind: event.kind.label(),
        })
        .collect()
}

/// Circle showing how many members live in one area of a city
#[derive(Clone, Debug, PartialEq)]
pub struct DensityCircle {
    /// City name
    pub city: String,
    /// State code
    pub state: String,
    /// Area name
    pub area: String,
    /// Circle center (the first member's coordinates)
    pub center: Coordinates,
    /// Members in this area
    pub members: u32,
    /// Circle radius in pixels
    pub radius: u32,
}

impl DensityCircle {
    /// "1 member" / "3 members"
    #[must_use]
    pub fn caption(&self) -> String {
        if self.members == 1 {
            "1 member".to_string()
        } else {
            format!("{} members", self.members)
        }
    }
}

/// Groups members by city and area, in first-seen order.
#[must_use]
pub fn member_density(users: &[UserProfile]) -> Vec<DensityCircle> {
    let mut circles: Vec<DensityCircle> = Vec::new();

    for user in users {
        let place = &user.location;
        if let Some(circle) = circles
            .iter_mut()
            .find(|c| c.city == place.city && c.area == place.area)
        {
            circle.members += 1;
        } else {
            circles.push(DensityCircle {
                city: place.city.clone(),
                state: place.state.clone(),
                area: place.area.clone(),
                center: place.coordinates,
                members: 1,
                radius: 0,
            });
        }
    }

    for circle in &mut circles {
        circle.radius = (circle.members * RADIUS_PER_MEMBER).min(MAX_RADIUS);
    }
    circles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{event, user};
    use crate::types::EventType;

    #[test]
    fn markers_carry_popup_details() {
        let events = vec![event("3", EventType::GroupSession, 14)];
        let markers = event_markers(&events);

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].event_id, EventId::new("3"));
        assert_eq!(markers[0].kind, "group session");
        assert_eq!(markers[0].venue, "Center City Meeting Room");
    }

    #[test]
    fn density_groups_by_area() {
        let mut users: Vec<UserProfile> = (0..8)
            .map(|i| user(&format!("f{i}"), "Fan", "Fishtown", "introverted"))
            .collect();
        users.insert(1, user("c1", "Cee", "Center City", "introverted"));

        let circles = member_density(&users);

        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].area, "Fishtown");
        assert_eq!(circles[0].members, 8);
        assert_eq!(circles[0].radius, 50);
        assert_eq!(circles[0].caption(), "8 members");
        assert_eq!(circles[1].area, "Center City");
        assert_eq!(circles[1].radius, 8);
        assert_eq!(circles[1].caption(), "1 member");
    }
}
