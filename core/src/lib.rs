//! # Conversationalist Core
//!
//! Core traits and types for The Conversationalist.
//!
//! Application state is changed only through a reducer:
//! `(State, Action, Environment) → (State, Effects)`. Reducers validate an
//! action, update state in place and describe any follow-up work as
//! [`effect::Effect`] values. The runtime crate owns the state and executes
//! those descriptions.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (owned, `Clone`-able data)
//! - **Action**: All inputs to a reducer (commands and the events they produce)
//! - **Reducer**: Business logic, deterministic and testable
//! - **Effect**: Description of follow-up work, never executed by the reducer
//! - **Environment**: Injected dependencies such as the [`environment::Clock`]
//!
//! ## Example
//!
//! ```
//! use conversationalist_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         SmallVec::new()
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! assert!(effects.is_empty());
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

pub mod effect;
pub mod environment;
pub mod reducer;
