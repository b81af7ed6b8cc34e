//! Counter program used across the integration tests.

use elmer::{Program, Start, Update};

#[derive(Debug, Clone, PartialEq)]
pub enum CounterEvent {
    Increment,
    Decrement,
    /// Emits an effect without touching the count.
    Ping,
    /// Always fails.
    Explode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CounterEffect {
    Log(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CounterFailure {
    NegativeSeed(i64),
    Exploded,
    /// `render` refuses this count.
    Unrenderable(i64),
}

pub const UNRENDERABLE: i64 = 13;

pub struct Counter;

impl Program for Counter {
    type Seed = i64;
    type Event = CounterEvent;
    type State = i64;
    type Effect = CounterEffect;
    type View = String;
    type Failure = CounterFailure;

    fn start(&self, seed: i64) -> Result<Start<i64, CounterEffect>, CounterFailure> {
        if seed < 0 {
            return Err(CounterFailure::NegativeSeed(seed));
        }
        Ok(Start::new(seed).with_effect(CounterEffect::Log("Did start".to_string())))
    }

    fn update(
        &self,
        event: &CounterEvent,
        state: &i64,
    ) -> Result<Update<i64, CounterEffect>, CounterFailure> {
        match event {
            CounterEvent::Increment => Ok(Update::changed(state + 1)
                .with_effect(CounterEffect::Log("Did increment".to_string()))),
            CounterEvent::Decrement => Ok(Update::changed(state - 1)
                .with_effect(CounterEffect::Log("Did decrement".to_string()))),
            CounterEvent::Ping => {
                Ok(Update::unchanged().with_effect(CounterEffect::Log("Did ping".to_string())))
            }
            CounterEvent::Explode => Err(CounterFailure::Exploded),
        }
    }

    fn render(&self, state: &i64) -> Result<String, CounterFailure> {
        if *state == UNRENDERABLE {
            return Err(CounterFailure::Unrenderable(*state));
        }
        Ok(state.to_string())
    }
}
