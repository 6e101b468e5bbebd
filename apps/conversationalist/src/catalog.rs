//! The catalog application service.
//!
//! [`Catalog`] owns the store running the [`CatalogReducer`] together with
//! the read-only lists loaded at startup (interests, neighborhoods, city
//! index). Mutations dispatch exactly one command; queries borrow state and
//! hand it to the pure engines in `filters`, `cities`, `map` and `profile`.

use crate::cities::{self, lookup_city_with_limit};
use crate::config::Config;
use crate::error::CatalogError;
use crate::filters::{area_options, list_events, AreaOption, EventListing, EventQuery, PeopleQuery};
use crate::map::{event_markers, member_density, DensityCircle, EventMarker};
use crate::profile::{ProfileForm, PublicProfile};
use crate::reducer::{CatalogEnvironment, CatalogReducer};
use crate::registration::{seats, Seats};
use crate::seed::SeedData;
use crate::state::{CatalogAction, CatalogState};
use crate::types::{City, Event, EventId, Location, MapView, UserId, UserProfile};
use conversationalist_core::environment::Clock;
use conversationalist_runtime::Store;
use std::sync::Arc;

/// Store type running the catalog reducer
pub type CatalogStore = Store<CatalogState, CatalogAction, CatalogEnvironment, CatalogReducer>;

/// Application service over the catalog store
pub struct Catalog {
    store: CatalogStore,
    interests: Vec<String>,
    areas: Vec<Location>,
    cities: Vec<City>,
    city_suggestions: usize,
}

impl Catalog {
    /// Builds a catalog from seed data
    #[must_use]
    pub fn new(seed: SeedData, clock: Arc<dyn Clock>, config: &Config) -> Self {
        let store = Store::with_config(
            seed.initial_state(),
            CatalogReducer::new(),
            CatalogEnvironment::new(clock),
            config.store_config(),
        );

        Self {
            store,
            interests: seed.interests,
            areas: seed.areas,
            cities: seed.cities,
            city_suggestions: config.suggestion_limit(),
        }
    }

    // ========== Mutations ==========

    /// Sends one command through the store
    ///
    /// # Errors
    ///
    /// Returns the rejection recorded by the reducer, or
    /// [`CatalogError::Store`] if the store gave up on the feedback loop.
    pub fn dispatch(&mut self, action: CatalogAction) -> Result<(), CatalogError> {
        self.store.send(action)?;
        match &self.store.state_ref().last_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Registers the current user for an event, creating a demo identity
    /// first if nobody is signed in. Returns the updated event.
    ///
    /// The demo identity stays signed in even when registration is refused.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] for an unknown event, or
    /// [`CatalogError::Registration`] when the event is full or the user is
    /// already registered.
    pub fn register_for_event(&mut self, event_id: &EventId) -> Result<Event, CatalogError> {
        self.dispatch(CatalogAction::RegisterForEvent {
            event_id: event_id.clone(),
        })?;
        self.event(event_id).cloned()
    }

    /// Signs a member in, or out with `None`
    ///
    /// # Errors
    ///
    /// Only [`CatalogError::Store`].
    pub fn set_current_user(&mut self, user: Option<UserProfile>) -> Result<(), CatalogError> {
        self.dispatch(CatalogAction::SetCurrentUser { user })
    }

    /// Adds an event
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateEvent`] if the id is taken,
    /// [`CatalogError::InvalidEvent`] for a zero capacity.
    pub fn add_event(&mut self, event: Event) -> Result<(), CatalogError> {
        self.dispatch(CatalogAction::AddEvent { event })
    }

    /// Saves a member profile, adding it if the id is new
    ///
    /// # Errors
    ///
    /// Only [`CatalogError::Store`].
    pub fn update_user(&mut self, user: UserProfile) -> Result<(), CatalogError> {
        self.dispatch(CatalogAction::UpdateUser { user })
    }

    /// Makes sure somebody is signed in and returns the current user
    ///
    /// # Errors
    ///
    /// [`CatalogError::Store`] if the dispatch was cut off (state is then
    /// unchanged), or [`CatalogError::NoCurrentUser`] if the identity step
    /// left nobody signed in.
    pub fn ensure_current_user(&mut self) -> Result<UserProfile, CatalogError> {
        self.dispatch(CatalogAction::EnsureCurrentUser)?;
        self.current_user().cloned().ok_or(CatalogError::NoCurrentUser)
    }

    /// Applies the profile form to the current user (synthesizing one if
    /// needed) and saves the result. Returns the saved profile.
    ///
    /// # Errors
    ///
    /// Only [`CatalogError::Store`].
    pub fn save_profile(&mut self, form: &ProfileForm) -> Result<UserProfile, CatalogError> {
        let base = self.ensure_current_user()?;
        let updated = form.apply(&base, &self.cities, &self.areas);
        self.update_user(updated.clone())?;
        Ok(updated)
    }

    // ========== Queries ==========

    /// Current catalog state
    #[must_use]
    pub const fn state(&self) -> &CatalogState {
        self.store.state_ref()
    }

    /// Signed-in member, if any
    #[must_use]
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.state().current_user.as_ref()
    }

    /// Looks up an event
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] for an unknown id.
    pub fn event(&self, id: &EventId) -> Result<&Event, CatalogError> {
        self.state().event(id)
    }

    /// Looks up a member profile
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] for an unknown id.
    pub fn user(&self, id: &UserId) -> Result<&UserProfile, CatalogError> {
        self.state().user(id)
    }

    /// Events screen listing
    #[must_use]
    pub fn events(&self, query: &EventQuery) -> EventListing<'_> {
        list_events(&self.state().events, query)
    }

    /// People screen listing
    #[must_use]
    pub fn people(&self, query: &PeopleQuery) -> Vec<&UserProfile> {
        query.apply(&self.state().users)
    }

    /// What other members see of a profile
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] for an unknown id.
    pub fn public_profile(&self, id: &UserId) -> Result<PublicProfile, CatalogError> {
        self.user(id).map(PublicProfile::from)
    }

    /// Seat summary of an event as seen by the current user
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] for an unknown id.
    pub fn event_seats(&self, id: &EventId) -> Result<Seats, CatalogError> {
        let event = self.event(id)?;
        Ok(seats(event, self.state().current_user_id()))
    }

    /// Interests offered by the selectors
    #[must_use]
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Area selector entries
    #[must_use]
    pub fn area_options(&self) -> Vec<AreaOption> {
        area_options(&self.state().users)
    }

    /// City suggestions for the map search box
    #[must_use]
    pub fn search_city(&self, query: &str) -> Vec<&City> {
        lookup_city_with_limit(query, &self.cities, self.city_suggestions)
    }

    /// Map view for a picked suggestion
    #[must_use]
    pub const fn resolve_city(&self, city: &City) -> MapView {
        cities::resolve_city(city)
    }

    /// Country-wide map view
    #[must_use]
    pub const fn reset_view(&self) -> MapView {
        cities::reset_view()
    }

    /// Event pins
    #[must_use]
    pub fn markers(&self) -> Vec<EventMarker> {
        event_markers(&self.state().events)
    }

    /// Member density circles
    #[must_use]
    pub fn density(&self) -> Vec<DensityCircle> {
        member_density(&self.state().users)
    }
}
