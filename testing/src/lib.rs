//! # Conversationalist Testing
//!
//! Testing utilities and helpers for The Conversationalist.
//!
//! This crate provides:
//! - Deterministic Environment implementations (`FixedClock`)
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use conversationalist_testing::{assertions, test_clock, ReducerTest};
//!
//! ReducerTest::new(CatalogReducer::new())
//!     .with_env(CatalogEnvironment::new(Arc::new(test_clock())))
//!     .given_state(CatalogState::default())
//!     .when_action(CatalogAction::EnsureCurrentUser)
//!     .then_state(|state| assert!(state.current_user.is_none()))
//!     .then_effects(|effects| assertions::assert_effects_count(effects, 1))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use conversationalist_core::environment::Clock;

pub mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use conversationalist_testing::mocks::FixedClock;
    /// use conversationalist_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a `tracing` subscriber that writes through the test harness.
    ///
    /// Safe to call from every test; only the first call installs anything.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities
///
/// Domain-agnostic proptest strategies used by the filter property tests.
pub mod properties {
    use proptest::prelude::*;

    /// Re-cases every character of `text` independently.
    ///
    /// Useful for checking that a matcher is case-insensitive.
    pub fn case_variants(text: &str) -> impl Strategy<Value = String> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        proptest::collection::vec(any::<bool>(), len).prop_map(move |flags| {
            chars
                .iter()
                .zip(flags)
                .map(|(c, upper)| {
                    if upper {
                        c.to_uppercase().collect::<String>()
                    } else {
                        c.to_lowercase().collect::<String>()
                    }
                })
                .collect()
        })
    }

    /// Picks an order-preserving subset of `items`.
    pub fn subset_of<T>(items: Vec<T>) -> impl Strategy<Value = Vec<T>>
    where
        T: Clone + std::fmt::Debug,
    {
        let len = items.len();
        proptest::collection::vec(any::<bool>(), len).prop_map(move |keep| {
            items
                .iter()
                .zip(keep)
                .filter_map(|(item, keep)| keep.then(|| item.clone()))
                .collect()
        })
    }
}

// Re-export commonly used items
pub use mocks::{test_clock, FixedClock};
