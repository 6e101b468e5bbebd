//! Registration Workflow.
//!
//! The one place that decides whether a member may join an event. Every
//! caller (event list, event detail, the catalog reducer) goes through
//! [`register`].
//!
//! There is no authentication. When an identity is needed and nobody is
//! signed in, [`ensure_current_user`] synthesizes a throwaway demo profile.
//! That step is explicit and reports whether it created anything.

use crate::error::RegistrationError;
use crate::types::{Availability, Coordinates, Event, Location, Privacy, Traits, UserId, UserProfile};
use chrono::{DateTime, Utc};
use conversationalist_core::environment::Clock;

/// Prefix of synthesized demo identities
pub const DEMO_USER_PREFIX: &str = "demo-user-";

/// Default home location of a demo identity
#[must_use]
pub fn default_location() -> Location {
    Location::new(
        "Philadelphia",
        "PA",
        "Center City",
        Coordinates::new(39.9526, -75.1652),
    )
}

/// Placeholder profile for a visitor who has not set one up.
///
/// The id is `demo-user-<unix millis>` taken from `now`.
#[must_use]
pub fn demo_profile(now: DateTime<Utc>) -> UserProfile {
    UserProfile {
        id: UserId::new(format!("{DEMO_USER_PREFIX}{}", now.timestamp_millis())),
        email: "demo@example.com".to_string(),
        display_name: "Demo User".to_string(),
        location: default_location(),
        interests: Vec::new(),
        traits: Traits::default(),
        skills: Vec::new(),
        availability: Availability::default(),
        privacy: Privacy::ALL_VISIBLE,
    }
}

/// Outcome of [`ensure_current_user`]
#[derive(Clone, Debug, PartialEq)]
pub enum Identity {
    /// A current user already existed
    Existing(UserId),
    /// No current user existed; this demo profile was created
    Synthesized(UserProfile),
}

impl Identity {
    /// Id of the identity, existing or new
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::Existing(id) => id,
            Self::Synthesized(profile) => &profile.id,
        }
    }

    /// Whether a new demo profile was created
    #[must_use]
    pub const fn was_synthesized(&self) -> bool {
        matches!(self, Self::Synthesized(_))
    }
}

/// Resolves who is acting, synthesizing a demo profile if nobody is.
///
/// Does not modify anything: the caller decides where a synthesized profile
/// is stored.
#[must_use]
pub fn ensure_current_user(current: Option<&UserProfile>, clock: &dyn Clock) -> Identity {
    match current {
        Some(user) => Identity::Existing(user.id.clone()),
        None => {
            let profile = demo_profile(clock.now());
            tracing::info!(user_id = %profile.id, "Synthesized demo identity");
            Identity::Synthesized(profile)
        },
    }
}

/// Registers `user_id` for `event`, returning the updated event.
///
/// Checks run in order and the first failure wins:
/// 1. the event is full (`registered >= capacity`)
/// 2. the user is already registered
///
/// `event` itself is never modified.
///
/// # Errors
///
/// - [`RegistrationError::EventFull`] if no spot is left
/// - [`RegistrationError::AlreadyRegistered`] if `user_id` is on the list
pub fn register(user_id: &UserId, event: &Event) -> Result<Event, RegistrationError> {
    if event.is_full() {
        return Err(RegistrationError::EventFull {
            event_id: event.id.clone(),
            capacity: event.capacity,
        });
    }

    if event.is_registered(user_id) {
        return Err(RegistrationError::AlreadyRegistered {
            event_id: event.id.clone(),
            user_id: user_id.clone(),
        });
    }

    let mut updated = event.clone();
    updated.registered_users.push(user_id.clone());
    Ok(updated)
}

/// Registration status of an event as seen by one (optional) member
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seats {
    /// Registrations so far
    pub registered: usize,
    /// Capacity of the event
    pub capacity: u32,
    /// Free spots
    pub remaining: usize,
    /// No free spots
    pub is_full: bool,
    /// The member is on the list
    pub is_registered: bool,
}

/// Summarizes `event` for the detail view of `viewer`.
#[must_use]
pub fn seats(event: &Event, viewer: Option<&UserId>) -> Seats {
    Seats {
        registered: event.registered_count(),
        capacity: event.capacity,
        remaining: event.spots_remaining(),
        is_full: event.is_full(),
        is_registered: viewer.is_some_and(|id| event.is_registered(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{event, user};
    use crate::types::EventType;
    use conversationalist_testing::test_clock;

    fn event_with(capacity: u32, registered: &[&str]) -> Event {
        let mut e = event("1", EventType::Workshop, 7);
        e.capacity = capacity;
        e.registered_users = registered.iter().copied().map(UserId::from).collect();
        e
    }

    #[test]
    fn fills_up_then_refuses() {
        let e = event_with(2, &["u1"]);

        let e = register(&UserId::new("u2"), &e).unwrap();
        assert_eq!(e.registered_users, vec![UserId::new("u1"), UserId::new("u2")]);

        let err = register(&UserId::new("u3"), &e).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::EventFull {
                event_id: e.id.clone(),
                capacity: 2
            }
        );
    }

    #[test]
    fn second_registration_is_refused() {
        let e = event_with(5, &[]);
        let user_id = UserId::new("u1");

        let once = register(&user_id, &e).unwrap();
        assert_eq!(once.registered_count(), 1);

        let err = register(&user_id, &once).unwrap_err();
        assert!(matches!(err, RegistrationError::AlreadyRegistered { .. }));
        assert_eq!(once.registered_count(), 1);
    }

    #[test]
    fn full_wins_over_already_registered() {
        let e = event_with(1, &["u1"]);
        let err = register(&UserId::new("u1"), &e).unwrap_err();
        assert!(matches!(err, RegistrationError::EventFull { .. }));
    }

    #[test]
    fn over_capacity_event_is_full() {
        let e = event_with(1, &["u1", "u2"]);
        assert!(register(&UserId::new("u3"), &e).is_err());
        assert_eq!(seats(&e, None).remaining, 0);
    }

    #[test]
    fn original_event_is_untouched() {
        let e = event_with(3, &["u1"]);
        let _ = register(&UserId::new("u2"), &e).unwrap();
        assert_eq!(e.registered_users, vec![UserId::new("u1")]);
    }

    #[test]
    fn synthesizes_demo_identity_only_when_missing() {
        let clock = test_clock();

        let identity = ensure_current_user(None, &clock);
        assert!(identity.was_synthesized());
        assert_eq!(identity.user_id().as_str(), "demo-user-1735689600000");
        let Identity::Synthesized(profile) = identity else {
            unreachable!()
        };
        assert_eq!(profile.location.area, "Center City");
        assert_eq!(profile.privacy, Privacy::ALL_VISIBLE);
        assert!(profile.interests.is_empty());

        let existing = user("user1", "Alex", "Fishtown", "extroverted");
        let identity = ensure_current_user(Some(&existing), &clock);
        assert_eq!(identity, Identity::Existing(UserId::new("user1")));
    }

    #[test]
    fn seats_reflect_viewer() {
        let e = event_with(3, &["u1"]);
        let viewer = UserId::new("u1");
        let summary = seats(&e, Some(&viewer));
        assert_eq!(summary.remaining, 2);
        assert!(summary.is_registered);
        assert!(!summary.is_full);
        assert!(!seats(&e, None).is_registered);
    }
}
