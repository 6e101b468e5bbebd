//! Profile editing and the privacy-filtered public view.

use crate::cities::find_city;
use crate::registration::default_location;
use crate::types::{Availability, City, Coordinates, Location, Privacy, Traits, UserId, UserProfile};

/// Editable fields of the profile form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Name shown to other members
    pub display_name: String,
    /// City
    pub city: String,
    /// State code
    pub state: String,
    /// Neighborhood
    pub area: String,
    /// Selected interests
    pub interests: Vec<String>,
    /// Communication style
    pub communication_style: String,
    /// Personality type
    pub personality_type: String,
    /// Comma-separated skills as typed
    pub skills: String,
    /// Available on weekdays
    pub weekdays: bool,
    /// Available on weekends
    pub weekends: bool,
    /// Location visible to others
    pub show_location: bool,
    /// Interests visible to others
    pub show_interests: bool,
    /// Traits visible to others
    pub show_traits: bool,
}

impl ProfileForm {
    /// Pre-fills the form from an existing profile.
    #[must_use]
    pub fn from_profile(user: &UserProfile) -> Self {
        Self {
            display_name: user.display_name.clone(),
            city: user.location.city.clone(),
            state: user.location.state.clone(),
            area: user.location.area.clone(),
            interests: user.interests.clone(),
            communication_style: user.traits.communication_style.clone(),
            personality_type: user.traits.personality_type.clone(),
            skills: user.skills.join(", "),
            weekdays: user.availability.weekdays,
            weekends: user.availability.weekends,
            show_location: user.privacy.show_location,
            show_interests: user.privacy.show_interests,
            show_traits: user.privacy.show_traits,
        }
    }

    /// Builds the updated profile from `base` and the form contents.
    ///
    /// Id and email come from `base`. Preferred times are cleared because the
    /// form has no field for them.
    #[must_use]
    pub fn apply(&self, base: &UserProfile, cities: &[City], areas: &[Location]) -> UserProfile {
        UserProfile {
            id: base.id.clone(),
            email: base.email.clone(),
            display_name: self.display_name.clone(),
            location: Location {
                city: self.city.clone(),
                state: self.state.clone(),
                area: self.area.clone(),
                coordinates: resolve_coordinates(&self.city, &self.state, &self.area, cities, areas),
            },
            interests: self.interests.clone(),
            traits: Traits {
                communication_style: self.communication_style.clone(),
                personality_type: self.personality_type.clone(),
            },
            skills: parse_skills(&self.skills),
            availability: Availability {
                weekdays: self.weekdays,
                weekends: self.weekends,
                times: Vec::new(),
            },
            privacy: Privacy {
                show_location: self.show_location,
                show_interests: self.show_interests,
                show_traits: self.show_traits,
            },
        }
    }
}

/// Picks map coordinates for a profile location.
///
/// Lookup order: the city index on exact city and state, then the
/// Philadelphia neighborhood list by area, then the Philadelphia default.
#[must_use]
pub fn resolve_coordinates(
    city: &str,
    state: &str,
    area: &str,
    cities: &[City],
    areas: &[Location],
) -> Coordinates {
    if let Some(entry) = find_city(cities, city, state) {
        return entry.center;
    }

    let fallback = default_location();
    if city == fallback.city && state == fallback.state {
        if let Some(place) = areas.iter().find(|l| l.area == area) {
            return place.coordinates;
        }
    }
    fallback.coordinates
}

/// Splits comma-separated skills, trimming and dropping empty entries.
#[must_use]
pub fn parse_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// What other members see on a profile page
#[derive(Clone, Debug, PartialEq)]
pub struct PublicProfile {
    /// Profile id
    pub id: UserId,
    /// Display name, always shown
    pub display_name: String,
    /// Location, if shared
    pub location: Option<Location>,
    /// Interests, if shared
    pub interests: Option<Vec<String>>,
    /// Traits, if shared
    pub traits: Option<Traits>,
    /// Skills, always shown
    pub skills: Vec<String>,
    /// Availability, always shown
    pub availability: Availability,
}

impl From<&UserProfile> for PublicProfile {
    fn from(user: &UserProfile) -> Self {
        let privacy = user.privacy;
        Self {
            id: user.id.clone(),
            display_name: user.display_name.clone(),
            location: privacy.show_location.then(|| user.location.clone()),
            interests: privacy.show_interests.then(|| user.interests.clone()),
            traits: privacy.show_traits.then(|| user.traits.clone()),
            skills: user.skills.clone(),
            availability: user.availability.clone(),
        }
    }
}
