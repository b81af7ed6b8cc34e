//! Base trait for programs.

use std::fmt::Debug;

use super::transition::{Start, Update};

/// A state machine described by three pure functions.
///
/// Implementations must not perform side effects. Anything that should
/// happen outside the program (logging, network calls, navigation) is
/// returned as an `Effect` and handed to the delegate by the runtime.
///
/// All associated types are `Debug` so that any of them can appear in a
/// fatal diagnostic report or in a harness assertion message.
///
/// A program that cannot fail uses [`std::convert::Infallible`] as its
/// `Failure`.
pub trait Program {
    /// Input consumed once by [`start`](Self::start).
    type Seed: Debug;

    /// A request to transition the state.
    type Event: Debug;

    /// The single source of truth owned by the runtime.
    type State: Debug;

    /// Fire-and-forget request to the surrounding system.
    type Effect: Debug + 'static;

    /// Display-ready projection of the state.
    type View: Debug + 'static;

    /// Why a function could not produce a result.
    type Failure: Debug;

    /// Build the initial state and any effects to emit on startup.
    fn start(&self, seed: Self::Seed) -> Result<Start<Self::State, Self::Effect>, Self::Failure>;

    /// Apply one event to the current state.
    ///
    /// Return [`Update::unchanged`] when the state does not need to change;
    /// the runtime then skips recomputing the view for this event but still
    /// forwards the effects.
    ///
    /// The event is borrowed so the caller still holds it if the update
    /// fails.
    fn update(
        &self,
        event: &Self::Event,
        state: &Self::State,
    ) -> Result<Update<Self::State, Self::Effect>, Self::Failure>;

    /// Project the state into a view.
    ///
    /// Must be deterministic: rendering the same state twice yields equal
    /// views.
    fn render(&self, state: &Self::State) -> Result<Self::View, Self::Failure>;
}
