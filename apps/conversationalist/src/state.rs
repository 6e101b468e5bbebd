//! Catalog state and the actions that change it.
//!
//! The catalog is the single state container of the application: who is
//! using it, the events and the member profiles. It is owned by a runtime
//! `Store` and only the `CatalogReducer` mutates it.

use crate::error::CatalogError;
use crate::types::{Event, EventId, UserId, UserProfile};

/// State of the catalog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    /// Member using the app, if any
    pub current_user: Option<UserProfile>,
    /// All events, in catalog order
    pub events: Vec<Event>,
    /// All member profiles, in catalog order
    pub users: Vec<UserProfile>,
    /// Why the last command was rejected (cleared by every new command)
    pub last_error: Option<CatalogError>,
}

impl CatalogState {
    /// Creates a catalog from loaded records, with nobody signed in
    #[must_use]
    pub const fn new(events: Vec<Event>, users: Vec<UserProfile>) -> Self {
        Self {
            current_user: None,
            events,
            users,
            last_error: None,
        }
    }

    /// Looks up an event
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id.
    pub fn event(&self, id: &EventId) -> Result<&Event, CatalogError> {
        self.events
            .iter()
            .find(|e| &e.id == id)
            .ok_or_else(|| CatalogError::event_not_found(id))
    }

    /// Looks up a member profile
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id.
    pub fn user(&self, id: &UserId) -> Result<&UserProfile, CatalogError> {
        self.users
            .iter()
            .find(|u| &u.id == id)
            .ok_or_else(|| CatalogError::user_not_found(id))
    }

    /// Id of the current user, if any
    #[must_use]
    pub fn current_user_id(&self) -> Option<&UserId> {
        self.current_user.as_ref().map(|u| &u.id)
    }

    /// Whether an event with `id` exists
    #[must_use]
    pub fn has_event(&self, id: &EventId) -> bool {
        self.events.iter().any(|e| &e.id == id)
    }
}

/// Actions representing commands and events for the catalog
///
/// Commands express intent and are validated by the reducer; they never
/// change collections themselves. Each accepted command produces events,
/// which the store feeds back and the reducer applies.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogAction {
    // ========== Commands ==========
    /// Command: Sign a member in, or sign out with `None`
    SetCurrentUser {
        /// New current user
        user: Option<UserProfile>,
    },

    /// Command: Add an event to the catalog
    AddEvent {
        /// Event to add
        event: Event,
    },

    /// Command: Save a member profile (replaces by id, or adds)
    UpdateUser {
        /// Updated profile
        user: UserProfile,
    },

    /// Command: Make sure somebody is signed in, synthesizing a demo identity
    EnsureCurrentUser,

    /// Command: Register the current user for an event
    RegisterForEvent {
        /// Event to join
        event_id: EventId,
    },

    // ========== Events ==========
    /// Event: The current user changed
    CurrentUserChanged {
        /// New current user
        user: Option<UserProfile>,
    },

    /// Event: A demo identity was created and signed in
    CurrentUserSynthesized {
        /// The demo profile
        user: UserProfile,
    },

    /// Event: An event was added
    EventAdded {
        /// The added event
        event: Event,
    },

    /// Event: A member profile was saved
    UserUpdated {
        /// The saved profile
        user: UserProfile,
    },

    /// Event: A member registered for an event
    RegisteredForEvent {
        /// Event value with the member appended
        event: Event,
        /// Who registered
        user_id: UserId,
    },

    /// Event: A command was refused
    ActionRejected {
        /// Why
        error: CatalogError,
    },
}

impl CatalogAction {
    /// Returns true if this action is a command
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(
            self,
            Self::SetCurrentUser { .. }
                | Self::AddEvent { .. }
                | Self::UpdateUser { .. }
                | Self::EnsureCurrentUser
                | Self::RegisterForEvent { .. }
        )
    }

    /// Returns true if this action is an event
    #[must_use]
    pub const fn is_event(&self) -> bool {
        !self.is_command()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{event, user};
    use crate::types::EventType;

    #[test]
    fn lookups_report_not_found() {
        let state = CatalogState::new(
            vec![event("1", EventType::Workshop, 7)],
            vec![user("user1", "Alex", "Fishtown", "extroverted")],
        );

        assert!(state.event(&EventId::new("1")).is_ok());
        assert!(state.user(&UserId::new("user1")).is_ok());
        assert_eq!(
            state.event(&EventId::new("404")),
            Err(CatalogError::event_not_found(&EventId::new("404")))
        );
        assert!(matches!(
            state.user(&UserId::new("nobody")),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn commands_and_events_are_told_apart() {
        assert!(CatalogAction::EnsureCurrentUser.is_command());
        assert!(CatalogAction::RegisterForEvent {
            event_id: EventId::new("1")
        }
        .is_command());
        assert!(CatalogAction::CurrentUserChanged { user: None }.is_event());
    }
}
