//! Event and community discovery core for The Conversationalist.
//!
//! The application keeps one in-memory catalog (current user, events,
//! member profiles) seeded from embedded sample data. Everything a screen
//! shows is derived from it by pure functions:
//!
//! - [`filters`]: event and people filter engines
//! - [`registration`]: the one registration workflow
//! - [`cities`]: city lookup for the map search box
//! - [`map`]: event pins and member-density circles
//! - [`profile`]: profile editing and the privacy-filtered public view
//!
//! Mutations go through the [`CatalogReducer`] run by a runtime `Store`,
//! wrapped by the [`Catalog`] service.
//!
//! # Quick Start
//!
//! ```no_run
//! use conversationalist::{Catalog, Config, EventId, SeedData};
//! use conversationalist_core::environment::{Clock, SystemClock};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let clock = Arc::new(SystemClock);
//! let seed = SeedData::load(clock.now())?;
//! let mut catalog = Catalog::new(seed, clock, &Config::from_env());
//!
//! let event = catalog.register_for_event(&EventId::new("1"))?;
//! println!("{} now has {} registrations", event.title, event.registered_count());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cities;
pub mod config;
pub mod error;
pub mod filters;
pub mod map;
pub mod profile;
pub mod reducer;
pub mod registration;
pub mod seed;
pub mod state;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use catalog::{Catalog, CatalogStore};
pub use config::Config;
pub use error::{CatalogError, EntityKind, RegistrationError, SeedError};
pub use filters::{Choice, EventListing, EventQuery, PeopleQuery};
pub use reducer::{CatalogEnvironment, CatalogReducer};
pub use seed::SeedData;
pub use state::{CatalogAction, CatalogState};
pub use types::{
    Availability, City, Coordinates, Event, EventId, EventType, Location, MapView, Privacy,
    Traits, UserId, UserProfile, Venue,
};
