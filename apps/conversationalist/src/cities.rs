//! City Lookup for re-centering the map.

use crate::types::{City, Coordinates, MapView};

/// Maximum number of suggestions returned by [`lookup_city`]
pub const MAX_SUGGESTIONS: usize = 10;

/// Zoom level after picking a city
pub const CITY_ZOOM: u8 = 12;

/// Zoom level of the country-wide view
pub const COUNTRY_ZOOM: u8 = 5;

/// Geographic center of the contiguous United States (Kansas)
pub const US_CENTER: Coordinates = Coordinates::new(37.8283, -97.5795);

/// Suggests cities whose name, state or `"city, state"` label contains
/// `query`, case-insensitively, in index order, at most [`MAX_SUGGESTIONS`].
///
/// A blank query suggests nothing.
#[must_use]
pub fn lookup_city<'a>(query: &str, index: &'a [City]) -> Vec<&'a City> {
    lookup_city_with_limit(query, index, MAX_SUGGESTIONS)
}

/// [`lookup_city`] with a caller-chosen suggestion limit.
#[must_use]
pub fn lookup_city_with_limit<'a>(query: &str, index: &'a [City], limit: usize) -> Vec<&'a City> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    index
        .iter()
        .filter(|city| {
            city.city.to_lowercase().contains(&needle)
                || city.state.to_lowercase().contains(&needle)
                || city.label().to_lowercase().contains(&needle)
        })
        .take(limit)
        .collect()
}

/// Map view centered on a selected city.
#[must_use]
pub const fn resolve_city(selection: &City) -> MapView {
    MapView {
        center: selection.center,
        zoom: CITY_ZOOM,
    }
}

/// Country-wide map view.
#[must_use]
pub const fn reset_view() -> MapView {
    MapView {
        center: US_CENTER,
        zoom: COUNTRY_ZOOM,
    }
}

/// Finds the index entry for an exact city and state.
#[must_use]
pub fn find_city<'a>(index: &'a [City], city: &str, state: &str) -> Option<&'a City> {
    index.iter().find(|c| c.city == city && c.state == state)
}
