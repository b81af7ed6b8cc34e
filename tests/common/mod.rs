//! Shared test fixtures: a counter program and a recording delegate.

#![allow(dead_code, unused_imports)]

pub mod counter;

use elmer::config::StoreConfig;
use elmer::diagnostics::CaptureSink;
use elmer::{Delegate, Store};
use parking_lot::Mutex;
use std::sync::Arc;

pub use counter::{Counter, CounterEffect, CounterEvent, CounterFailure};

/// One callback observed by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    View(String),
    Effect(CounterEffect),
}

/// Delegate that records every callback in arrival order.
#[derive(Debug, Default)]
pub struct Recorder {
    log: Mutex<Vec<Notification>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.log.lock())
    }

    pub fn views(&self) -> Vec<String> {
        self.log
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::View(view) => Some(view.clone()),
                Notification::Effect(_) => None,
            })
            .collect()
    }
}

impl Delegate for Recorder {
    type View = String;
    type Effect = CounterEffect;

    fn did_update(&self, view: &String) {
        self.log.lock().push(Notification::View(view.clone()));
    }

    fn did_emit(&self, effect: &CounterEffect) {
        self.log.lock().push(Notification::Effect(effect.clone()));
    }
}

/// Install the tracing subscriber once per test binary.
pub fn init() {
    elmer::logging::init_tracing();
}

pub fn log(message: &str) -> CounterEffect {
    CounterEffect::Log(message.to_string())
}

/// Store whose fatal path panics into a capture sink instead of aborting.
pub fn panicking_store(seed: i64, recorder: &Arc<Recorder>) -> (Store<Counter>, Arc<CaptureSink>) {
    let sink = Arc::new(CaptureSink::new());
    let store = Store::with_config(
        Counter,
        seed,
        recorder,
        StoreConfig::panicking(),
        sink.clone(),
    );
    (store, sink)
}
