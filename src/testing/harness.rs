use std::fmt::Debug;
use std::panic::Location;

use super::reporter::{FailureReporter, PanicReporter};
use crate::program::{Program, Start, Update};

/// Runs a program's pure functions against literal inputs.
///
/// Unlike the store, a `Failure` here is data: `expect_*` methods report an
/// unexpected failure through the reporter and return `None`, while
/// `expect_*_failure` methods hand the failure back for further assertions.
///
/// Every method is `#[track_caller]`, so reports point at the test line.
pub struct Harness<P, R = PanicReporter> {
    program: P,
    reporter: R,
}

impl<P: Program> Harness<P> {
    pub fn new(program: P) -> Self {
        Self::with_reporter(program, PanicReporter)
    }
}

impl<P: Program, R: FailureReporter> Harness<P, R> {
    pub fn with_reporter(program: P, reporter: R) -> Self {
        Self { program, reporter }
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    #[track_caller]
    pub fn expect_start(&self, seed: P::Seed) -> Option<Start<P::State, P::Effect>> {
        let seed_dump = format!("{:?}", seed);
        match self.program.start(seed) {
            Ok(start) => Some(start),
            Err(failure) => {
                self.fail(format!(
                    "unexpected failure in start: {:?} (seed: {})",
                    failure, seed_dump
                ));
                None
            }
        }
    }

    #[track_caller]
    pub fn expect_start_state(&self, seed: P::Seed) -> Option<P::State> {
        self.expect_start(seed).map(|start| start.state)
    }

    #[track_caller]
    pub fn expect_start_effects(&self, seed: P::Seed) -> Option<Vec<P::Effect>> {
        self.expect_start(seed).map(|start| start.effects)
    }

    #[track_caller]
    pub fn expect_start_failure(&self, seed: P::Seed) -> Option<P::Failure> {
        match self.program.start(seed) {
            Ok(start) => {
                self.fail(format!(
                    "expected start to fail, but it succeeded with {:?}",
                    start
                ));
                None
            }
            Err(failure) => Some(failure),
        }
    }

    #[track_caller]
    pub fn expect_update(
        &self,
        event: &P::Event,
        state: &P::State,
    ) -> Option<Update<P::State, P::Effect>> {
        match self.program.update(event, state) {
            Ok(update) => Some(update),
            Err(failure) => {
                self.fail(format!(
                    "unexpected failure in update: {:?} (event: {:?}, state: {:?})",
                    failure, event, state
                ));
                None
            }
        }
    }

    /// The state after `event`; an unchanged transition yields `state`.
    #[track_caller]
    pub fn expect_update_state(&self, event: &P::Event, state: &P::State) -> Option<P::State>
    where
        P::State: Clone,
    {
        self.expect_update(event, state)
            .map(|update| update.transition.resolve(state.clone()))
    }

    #[track_caller]
    pub fn expect_update_effects(
        &self,
        event: &P::Event,
        state: &P::State,
    ) -> Option<Vec<P::Effect>> {
        self.expect_update(event, state).map(|update| update.effects)
    }

    #[track_caller]
    pub fn expect_update_failure(&self, event: &P::Event, state: &P::State) -> Option<P::Failure> {
        match self.program.update(event, state) {
            Ok(update) => {
                self.fail(format!(
                    "expected update to fail for event {:?}, but it succeeded with {:?}",
                    event, update
                ));
                None
            }
            Err(failure) => Some(failure),
        }
    }

    #[track_caller]
    pub fn expect_view(&self, state: &P::State) -> Option<P::View> {
        match self.program.render(state) {
            Ok(view) => Some(view),
            Err(failure) => {
                self.fail(format!(
                    "unexpected failure in render: {:?} (state: {:?})",
                    failure, state
                ));
                None
            }
        }
    }

    #[track_caller]
    pub fn expect_view_failure(&self, state: &P::State) -> Option<P::Failure> {
        match self.program.render(state) {
            Ok(view) => {
                self.fail(format!(
                    "expected render to fail, but it succeeded with {:?}",
                    view
                ));
                None
            }
            Err(failure) => Some(failure),
        }
    }

    /// Compare by `Debug` rendering, so domain types need no `PartialEq`.
    ///
    /// Returns whether the values matched.
    #[track_caller]
    pub fn expect<T: Debug>(&self, value: T, expected: T) -> bool {
        let actual = format!("{:?}", value);
        let wanted = format!("{:?}", expected);
        if actual == wanted {
            return true;
        }
        self.fail(format!("expected {}, got {}", wanted, actual));
        false
    }

    #[track_caller]
    fn fail(&self, message: String) {
        self.reporter.report_failure(&message, Location::caller());
    }
}
