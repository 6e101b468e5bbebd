//! Error types for the catalog and its workflows.

use crate::types::{EventId, UserId};
use conversationalist_runtime::StoreError;
use std::fmt;
use thiserror::Error;

/// Why a registration was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The event has as many registrations as it has capacity
    #[error("event {event_id} is at full capacity ({capacity})")]
    EventFull {
        /// Event that is full
        event_id: EventId,
        /// Its capacity
        capacity: u32,
    },

    /// The user is already on the registration list
    #[error("user {user_id} is already registered for event {event_id}")]
    AlreadyRegistered {
        /// Event the user tried to join
        event_id: EventId,
        /// User already registered
        user_id: UserId,
    },
}

/// What kind of record a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// An event
    Event,
    /// A user profile
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event => f.write_str("event"),
            Self::User => f.write_str("user"),
        }
    }
}

/// Errors reported by catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No record with the requested id
    #[error("{kind} {id} not found")]
    NotFound {
        /// Kind of record
        kind: EntityKind,
        /// Requested id
        id: String,
    },

    /// An event with the same id is already in the catalog
    #[error("event {0} already exists")]
    DuplicateEvent(EventId),

    /// The event failed basic validation
    #[error("invalid event {event_id}: {reason}")]
    InvalidEvent {
        /// Offending event
        event_id: EventId,
        /// What is wrong with it
        reason: String,
    },

    /// Registration was refused
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// An operation needed a signed-in member and there was none
    #[error("nobody is signed in")]
    NoCurrentUser,

    /// The store runtime failed to process the action
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Shorthand for an unknown event id
    #[must_use]
    pub fn event_not_found(id: &EventId) -> Self {
        Self::NotFound {
            kind: EntityKind::Event,
            id: id.to_string(),
        }
    }

    /// Shorthand for an unknown user id
    #[must_use]
    pub fn user_not_found(id: &UserId) -> Self {
        Self::NotFound {
            kind: EntityKind::User,
            id: id.to_string(),
        }
    }
}

/// Errors raised while loading seed data
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed document is not valid JSON for the expected shape
    #[error("malformed seed data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two seed records share an id
    #[error("duplicate {kind} id in seed data: {id}")]
    DuplicateId {
        /// Kind of record
        kind: EntityKind,
        /// Repeated id
        id: String,
    },
}
