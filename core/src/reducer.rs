//! The core trait for business logic.

use crate::effect::Effect;
use smallvec::SmallVec;

/// The Reducer trait - core abstraction for business logic
///
/// # Type Parameters
///
/// - `State`: The domain state this reducer operates on
/// - `Action`: The action type this reducer processes
/// - `Environment`: The injected dependencies this reducer needs
///
/// # Example
///
/// ```ignore
/// impl Reducer for CatalogReducer {
///     type State = CatalogState;
///     type Action = CatalogAction;
///     type Environment = CatalogEnvironment;
///
///     fn reduce(
///         &self,
///         state: &mut CatalogState,
///         action: CatalogAction,
///         env: &CatalogEnvironment,
///     ) -> SmallVec<[Effect<CatalogAction>; 4]> {
///         match action {
///             CatalogAction::AddEvent { event } => {
///                 state.events.push(event);
///                 SmallVec::new()
///             }
///             _ => SmallVec::new(),
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into state changes and effects
    ///
    /// Implementations must:
    /// 1. Validate the action
    /// 2. Update state in place
    /// 3. Return effect descriptions for the runtime
    ///
    /// Most actions produce no effects, so the return type keeps up to four
    /// effects inline.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
