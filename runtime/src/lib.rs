//! # Conversationalist Runtime
//!
//! The Store runtime that owns application state, runs the reducer and feeds
//! actions produced by effects back into it.
//!
//! The application has exactly one logical actor, so the store is
//! synchronous: [`Store::send`] takes `&mut self`, and every action (plus the
//! feedback actions it triggers) is fully applied before `send` returns, or
//! not applied at all.
//!
//! ## Example
//!
//! ```ignore
//! use conversationalist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use conversationalist_core::{effect::Effect, reducer::Reducer};
use std::collections::VecDeque;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Effects kept producing actions past the configured limit
        ///
        /// Usually a reducer that answers an action with itself. The state
        /// is rolled back to what it was before the `send`.
        #[error("Effect feedback exceeded {limit} actions in a single send")]
        FeedbackLimitExceeded {
            /// Configured maximum number of feedback actions
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store behavior
///
/// # Example
///
/// ```
/// use conversationalist_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of actions effects may feed back during one `send`
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the feedback action limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 32,
        }
    }
}

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{Effect, Reducer, StoreConfig, StoreError, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned directly, there is a single writer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Calls reducer with (state, action, environment)
        /// 2. Flattens the returned effects into feedback actions
        /// 3. Reduces feedback actions in FIFO order until none remain
        ///
        /// Either the action and all of its feedback are applied, or none of
        /// them is. Returns the total number of actions reduced, the initial
        /// one included.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if effects feed back
        /// more than `max_feedback_actions` actions. The remaining queue is
        /// dropped and the state restored to its value before the call.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<usize, StoreError>
        where
            S: Clone,
        {
            let limit = self.config.max_feedback_actions;
            let snapshot = self.state.clone();
            let mut queue = VecDeque::from([action]);
            let mut processed = 0usize;

            while let Some(next) = queue.pop_front() {
                if processed > limit {
                    tracing::warn!(limit, dropped = queue.len() + 1, "Effect feedback limit exceeded, state rolled back");
                    metrics::counter!("store.feedback.limit_exceeded").increment(1);
                    self.state = snapshot;
                    return Err(StoreError::FeedbackLimitExceeded { limit });
                }

                let effects = self.reducer.reduce(&mut self.state, next, &self.environment);
                processed += 1;
                metrics::counter!("store.actions.processed").increment(1);

                for effect in effects {
                    let actions = Effect::into_actions(effect);
                    metrics::counter!("store.effects.feedback").increment(actions.len() as u64);
                    queue.extend(actions);
                }
            }

            tracing::trace!(processed, "Action processed");
            Ok(processed)
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let event_count = store.state(|s| s.events.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Borrow the current state
        ///
        /// With a single writer there is no lock to release, so callers may
        /// hold the borrow until their next `send`.
        #[must_use]
        pub const fn state_ref(&self) -> &S {
            &self.state
        }

        /// Borrow the environment the reducer runs with
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// Consume the store and return its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }
    }
}

pub use store::Store;
