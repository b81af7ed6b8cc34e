//! Results of `start` and `update`.

/// Outcome of a successful [`Program::start`](super::Program::start).
#[derive(Debug, Clone, PartialEq)]
pub struct Start<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Start<S, E> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = E>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Whether an update produced a new state.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<S> {
    /// The state did not change; no view recompute is needed.
    Unchanged,
    /// Replace the current state with this one.
    Changed(S),
}

impl<S> Transition<S> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// The new state, or `current` if nothing changed.
    pub fn resolve(self, current: S) -> S {
        match self {
            Self::Unchanged => current,
            Self::Changed(next) => next,
        }
    }
}

/// Outcome of a successful [`Program::update`](super::Program::update).
#[derive(Debug, Clone, PartialEq)]
pub struct Update<S, E> {
    pub transition: Transition<S>,
    pub effects: Vec<E>,
}

impl<S, E> Update<S, E> {
    pub fn unchanged() -> Self {
        Self {
            transition: Transition::Unchanged,
            effects: Vec::new(),
        }
    }

    pub fn changed(state: S) -> Self {
        Self {
            transition: Transition::Changed(state),
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = E>) -> Self {
        self.effects.extend(effects);
        self
    }
}
