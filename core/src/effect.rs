//! Side effect descriptions.
//!
//! Effects are values returned by reducers. The runtime interprets them after
//! the reducer returns; a reducer never performs them itself. The only kind
//! of follow-up work in this system is feeding another action back into the
//! reducer (announcing what happened), so the variants are deliberately few.

/// Effect type - describes work to be done after a reducer returns
///
/// # Type Parameters
///
/// - `Action`: The action type that effects can produce (feedback loop)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Dispatch an action back into the reducer
    Send(Action),

    /// Run effects one after another, in order
    Sequential(Vec<Effect<Action>>),
}

impl<Action> Effect<Action> {
    /// Chain effects to run sequentially
    #[must_use]
    pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Sequential(effects)
    }

    /// Returns true if this effect does nothing when executed
    #[must_use]
    pub fn is_none(&self) -> bool {
        match self {
            Effect::None => true,
            Effect::Send(_) => false,
            Effect::Sequential(effects) => effects.iter().all(Effect::is_none),
        }
    }

    /// Flattens the effect into the actions it dispatches, in execution order
    #[must_use]
    pub fn into_actions(self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.collect_into(&mut actions);
        actions
    }

    fn collect_into(self, out: &mut Vec<Action>) {
        match self {
            Effect::None => {},
            Effect::Send(action) => out.push(action),
            Effect::Sequential(effects) => {
                for effect in effects {
                    effect.collect_into(out);
                }
            },
        }
    }
}
