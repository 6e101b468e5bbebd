//! Reducer logic for the catalog.
//!
//! Commands are validated against the current state and answered with
//! events (fed back through `Effect::Send`). Only events touch the
//! collections, so a rejected command leaves them exactly as they were.

use crate::error::CatalogError;
use crate::registration::{ensure_current_user, register, Identity};
use crate::state::{CatalogAction, CatalogState};
use crate::types::{Event, EventId};
use conversationalist_core::{
    effect::Effect, environment::Clock, reducer::Reducer, smallvec, SmallVec,
};
use std::sync::Arc;

/// Environment dependencies for the catalog reducer
#[derive(Clone)]
pub struct CatalogEnvironment {
    /// Clock used to stamp demo identities
    pub clock: Arc<dyn Clock>,
}

impl CatalogEnvironment {
    /// Creates a new `CatalogEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the catalog
#[derive(Clone, Debug, Default)]
pub struct CatalogReducer;

impl CatalogReducer {
    /// Creates a new `CatalogReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates an `AddEvent` command
    fn validate_add_event(state: &CatalogState, event: &Event) -> Result<(), CatalogError> {
        if state.has_event(&event.id) {
            return Err(CatalogError::DuplicateEvent(event.id.clone()));
        }

        if event.capacity == 0 {
            return Err(CatalogError::InvalidEvent {
                event_id: event.id.clone(),
                reason: "capacity must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// Runs the registration workflow for the current (or a new demo) user
    fn register_current_user(
        state: &CatalogState,
        event_id: &EventId,
        clock: &dyn Clock,
    ) -> Vec<Effect<CatalogAction>> {
        let identity = ensure_current_user(state.current_user.as_ref(), clock);
        let user_id = identity.user_id().clone();

        let mut events = Vec::with_capacity(2);
        if let Identity::Synthesized(user) = identity {
            events.push(Effect::Send(CatalogAction::CurrentUserSynthesized { user }));
        }

        let outcome = state
            .event(event_id)
            .and_then(|event| register(&user_id, event).map_err(CatalogError::from));

        events.push(Effect::Send(match outcome {
            Ok(event) => CatalogAction::RegisteredForEvent { event, user_id },
            Err(error) => CatalogAction::ActionRejected { error },
        }));
        events
    }

    /// Applies an event to state
    fn apply_event(state: &mut CatalogState, action: &CatalogAction) {
        match action {
            CatalogAction::CurrentUserChanged { user } => {
                tracing::info!(user_id = ?user.as_ref().map(|u| &u.id), "Current user changed");
                state.current_user.clone_from(user);
            },
            CatalogAction::CurrentUserSynthesized { user } => {
                state.current_user = Some(user.clone());
            },
            CatalogAction::EventAdded { event } => {
                if event.registered_count() > event.capacity as usize {
                    tracing::warn!(
                        event_id = %event.id,
                        registered = event.registered_count(),
                        capacity = event.capacity,
                        "Event added with more registrations than capacity"
                    );
                }
                tracing::info!(event_id = %event.id, "Event added");
                state.events.push(event.clone());
            },
            CatalogAction::UserUpdated { user } => {
                match state.users.iter_mut().find(|u| u.id == user.id) {
                    Some(existing) => *existing = user.clone(),
                    None => state.users.push(user.clone()),
                }
                if state.current_user_id() == Some(&user.id) {
                    state.current_user = Some(user.clone());
                }
                tracing::info!(user_id = %user.id, "Profile saved");
            },
            CatalogAction::RegisteredForEvent { event, user_id } => {
                if let Some(existing) = state.events.iter_mut().find(|e| e.id == event.id) {
                    *existing = event.clone();
                    tracing::info!(event_id = %event.id, %user_id, "Registered for event");
                } else {
                    tracing::warn!(event_id = %event.id, "Registration for an event no longer in the catalog");
                }
            },
            CatalogAction::ActionRejected { error } => {
                tracing::warn!(%error, "Action rejected");
                state.last_error = Some(error.clone());
            },
            // Commands are not applied to state
            CatalogAction::SetCurrentUser { .. }
            | CatalogAction::AddEvent { .. }
            | CatalogAction::UpdateUser { .. }
            | CatalogAction::EnsureCurrentUser
            | CatalogAction::RegisterForEvent { .. } => {},
        }
    }
}

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Action = CatalogAction;
    type Environment = CatalogEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if action.is_command() {
            state.last_error = None;
        }

        match action {
            // ========== Commands ==========
            CatalogAction::SetCurrentUser { user } => {
                smallvec![Effect::Send(CatalogAction::CurrentUserChanged { user })]
            },

            CatalogAction::AddEvent { event } => {
                let event = match Self::validate_add_event(state, &event) {
                    Ok(()) => CatalogAction::EventAdded { event },
                    Err(error) => CatalogAction::ActionRejected { error },
                };
                smallvec![Effect::Send(event)]
            },

            CatalogAction::UpdateUser { user } => {
                smallvec![Effect::Send(CatalogAction::UserUpdated { user })]
            },

            CatalogAction::EnsureCurrentUser => {
                match ensure_current_user(state.current_user.as_ref(), env.clock.as_ref()) {
                    Identity::Existing(_) => SmallVec::new(),
                    Identity::Synthesized(user) => {
                        smallvec![Effect::Send(CatalogAction::CurrentUserSynthesized { user })]
                    },
                }
            },

            CatalogAction::RegisterForEvent { event_id } => {
                let events = Self::register_current_user(state, &event_id, env.clock.as_ref());
                smallvec![Effect::chain(events)]
            },

            // ========== Events ==========
            CatalogAction::CurrentUserChanged { .. }
            | CatalogAction::CurrentUserSynthesized { .. }
            | CatalogAction::EventAdded { .. }
            | CatalogAction::UserUpdated { .. }
            | CatalogAction::RegisteredForEvent { .. }
            | CatalogAction::ActionRejected { .. } => {
                Self::apply_event(state, &action);
                SmallVec::new()
            },
        }
    }
}
