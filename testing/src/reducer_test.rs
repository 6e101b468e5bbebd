//! Given/when/then harness for a single reducer step.
//!
//! A step is one call to `reduce`: the state it leaves behind and the effects
//! it returns. For command/event reducers that means a command test sees
//! the events it emits (as `Effect::Send`) while state is still untouched,
//! and an event test sees the state change with no effects.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use conversationalist_core::{effect::Effect, reducer::Reducer};

type StateCheck<S> = Box<dyn FnOnce(&S)>;

type EffectCheck<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Builder for a reducer step test
///
/// # Example
///
/// ```ignore
/// use conversationalist_testing::{assertions, test_clock, ReducerTest};
///
/// ReducerTest::new(CatalogReducer::new())
///     .with_env(CatalogEnvironment::new(Arc::new(test_clock())))
///     .given_state(CatalogState::new(events, users))
///     .when_action(CatalogAction::RegisterForEvent { event_id })
///     .then_state(|state| assert!(state.last_error.is_none()))
///     .then_effects(|effects| {
///         assertions::assert_sends(effects, |a| {
///             matches!(a, CatalogAction::RegisteredForEvent { .. })
///         });
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    given: Option<S>,
    when: Option<A>,
    state_checks: Vec<StateCheck<S>>,
    effect_checks: Vec<EffectCheck<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Starts a test for `reducer`
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            given: None,
            when: None,
            state_checks: Vec::new(),
            effect_checks: Vec::new(),
        }
    }

    /// Environment the step runs with (clock, ...)
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// State before the step
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.given = Some(state);
        self
    }

    /// Command or event to reduce
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.when = Some(action);
        self
    }

    /// Check on the state after the step; checks run in the order added
    #[must_use]
    pub fn then_state<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_checks.push(Box::new(check));
        self
    }

    /// Check on the returned effects; checks run in the order added
    #[must_use]
    pub fn then_effects<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_checks.push(Box::new(check));
        self
    }

    /// Reduces the action once and runs every check
    ///
    /// Fed-back actions are not reduced; use
    /// [`assertions::sent_actions`] to inspect them.
    ///
    /// # Panics
    ///
    /// Panics if the state, action or environment was never given, or if a
    /// check fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self.given.expect("call given_state() first");
        let action = self.when.expect("call when_action() first");
        let env = self.environment.expect("call with_env() first");

        let effects = self.reducer.reduce(&mut state, action, &env);

        self.state_checks.into_iter().for_each(|check| check(&state));
        self.effect_checks.into_iter().for_each(|check| check(&effects));
    }
}

/// Assertions over the effects of one reducer step
pub mod assertions {
    use conversationalist_core::effect::Effect;

    /// Every effect is a no-op (event steps, idempotent commands)
    ///
    /// # Panics
    ///
    /// Panics if any effect would feed an action back.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(Effect::is_none),
            "expected only no-op effects, got {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Exactly `expected` top-level effects were returned
    ///
    /// # Panics
    ///
    /// Panics on a different count.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "expected {} effects, got {}",
            expected,
            effects.len()
        );
    }

    /// Collect the actions the effects would feed back, in execution order
    #[must_use]
    pub fn sent_actions<A: Clone>(effects: &[Effect<A>]) -> Vec<A> {
        effects
            .iter()
            .cloned()
            .flat_map(Effect::into_actions)
            .collect()
    }

    /// Assert that at least one fed-back action matches `predicate`
    ///
    /// # Panics
    ///
    /// Panics if no sent action matches.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_sends<A, F>(effects: &[Effect<A>], predicate: F)
    where
        A: Clone + std::fmt::Debug,
        F: Fn(&A) -> bool,
    {
        let actions = sent_actions(effects);
        assert!(
            actions.iter().any(predicate),
            "no sent action matched, sent: {actions:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conversationalist_core::{smallvec, SmallVec};

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Increment,
        Decrement,
        Changed(i32),
    }

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    smallvec![Effect::Send(TestAction::Changed(state.count))]
                },
                TestAction::Decrement => {
                    state.count -= 1;
                    smallvec![Effect::None]
                },
                TestAction::Changed(_) => SmallVec::new(),
            }
        }
    }

    #[test]
    fn step_exposes_state_and_sent_action() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_sends(effects, |a| *a == TestAction::Changed(1));
            })
            .run();
    }

    #[test]
    fn noop_effects_count_as_no_effects() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn sent_actions_flattens_chains() {
        let effects = [
            Effect::chain(vec![Effect::Send(TestAction::Increment), Effect::None]),
            Effect::Send(TestAction::Decrement),
        ];

        assert_eq!(
            assertions::sent_actions(&effects),
            vec![TestAction::Increment, TestAction::Decrement]
        );
    }

    #[test]
    fn effects_count_counts_top_level_effects() {
        assertions::assert_effects_count(&[Effect::<TestAction>::None], 1);
        assertions::assert_effects_count::<TestAction>(&[], 0);
    }
}
