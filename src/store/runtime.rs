use std::fmt::Debug;
use std::panic::Location;
use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::Mutex;

use crate::config::StoreConfig;
use crate::delegate::{self, Delegate, DelegateRef};
use crate::diagnostics::{self, DiagnosticSink, FatalReport, Stage, StderrSink};
use crate::program::{Program, Transition};

struct Inner<S, V> {
    state: S,
    view: Arc<V>,
}

/// Owns one program instance and its state.
///
/// `dispatch` is confined to the thread that constructed the store. Calling
/// it from any other thread is a usage error and takes the fatal path, as
/// does any `Failure` returned by the program.
pub struct Store<P: Program> {
    program: P,
    inner: Mutex<Inner<P::State, P::View>>,
    delegate: Mutex<DelegateRef<P::View, P::Effect>>,
    owner: ThreadId,
    config: StoreConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl<P: Program> Store<P> {
    /// Start `program` with `seed` and deliver the initial view and effects
    /// to `delegate`.
    ///
    /// Aborts the process if `start` or the first `render` fails.
    #[track_caller]
    pub fn new<D>(program: P, seed: P::Seed, delegate: &Arc<D>) -> Self
    where
        D: Delegate<View = P::View, Effect = P::Effect> + 'static,
    {
        let config = StoreConfig::default();
        let sink = Arc::new(StderrSink::new(config.diagnostic_format));
        Self::with_config(program, seed, delegate, config, sink)
    }

    /// Like [`Store::new`], with an explicit config and diagnostic sink.
    #[track_caller]
    pub fn with_config<D>(
        program: P,
        seed: P::Seed,
        delegate: &Arc<D>,
        config: StoreConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self
    where
        D: Delegate<View = P::View, Effect = P::Effect> + 'static,
    {
        let site = Location::caller();
        let seed_dump = format!("{:?}", seed);

        let start = match program.start(seed) {
            Ok(start) => start,
            Err(failure) => diagnostics::terminate(
                sink.as_ref(),
                config.fatal_action,
                FatalReport::new(site, Stage::Start, format!("{:?}", failure), "seed", seed_dump, None),
            ),
        };

        let view = match program.render(&start.state) {
            Ok(view) => Arc::new(view),
            Err(failure) => diagnostics::terminate(
                sink.as_ref(),
                config.fatal_action,
                FatalReport::new(
                    site,
                    Stage::Render,
                    format!("{:?}", failure),
                    "seed",
                    seed_dump,
                    Some(format!("{:?}", start.state)),
                ),
            ),
        };

        tracing::debug!(effects = start.effects.len(), "store started");

        let store = Self {
            program,
            inner: Mutex::new(Inner {
                state: start.state,
                view: Arc::clone(&view),
            }),
            delegate: Mutex::new(delegate::downgrade(delegate)),
            owner: thread::current().id(),
            config,
            sink,
        };

        store.notify(Some(view.as_ref()), &start.effects);
        store
    }

    /// Apply a single event.
    #[track_caller]
    pub fn dispatch(&self, event: P::Event) {
        self.dispatch_all([event]);
    }

    /// Apply a batch of events in order.
    ///
    /// The view is rendered at most once, after the last event, and only if
    /// some event changed the state. Effects from the whole batch follow
    /// the view.
    #[track_caller]
    pub fn dispatch_all<I>(&self, events: I)
    where
        I: IntoIterator<Item = P::Event>,
    {
        let site = Location::caller();
        let events: Vec<P::Event> = events.into_iter().collect();

        self.assert_owner_thread(site, "dispatch", "events", || format!("{:?}", events));
        if events.is_empty() {
            return;
        }

        let (view, effects) = {
            let mut inner = self.inner.lock();
            let mut effects = Vec::new();
            // Nothing is committed to `inner` until the whole batch renders.
            let mut working: Option<P::State> = None;

            for event in &events {
                tracing::trace!(?event, "applying event");
                let current = working.as_ref().unwrap_or(&inner.state);
                match self.program.update(event, current) {
                    Ok(update) => {
                        if let Transition::Changed(next) = update.transition {
                            working = Some(next);
                        }
                        effects.extend(update.effects);
                    }
                    Err(failure) => self.fatal(
                        site,
                        Stage::Update,
                        &failure,
                        "event",
                        format!("{:?}", event),
                        Some(format!("{:?}", current)),
                    ),
                }
            }

            let view = match working {
                Some(next) => match self.program.render(&next) {
                    Ok(view) => {
                        let view = Arc::new(view);
                        inner.state = next;
                        inner.view = Arc::clone(&view);
                        Some(view)
                    }
                    Err(failure) => self.fatal(
                        site,
                        Stage::Render,
                        &failure,
                        "events",
                        format!("{:?}", events),
                        Some(format!("{:?}", next)),
                    ),
                },
                None => None,
            };

            (view, effects)
        };

        tracing::debug!(
            events = events.len(),
            changed = view.is_some(),
            effects = effects.len(),
            "dispatch complete"
        );

        self.notify(view.as_deref(), &effects);
    }

    /// The view rendered from the current state.
    pub fn current_view(&self) -> Arc<P::View> {
        Arc::clone(&self.inner.lock().view)
    }

    /// Replace the delegate and send it the current view.
    ///
    /// Confined to the owner thread, like `dispatch`.
    #[track_caller]
    pub fn set_delegate<D>(&self, delegate: &Arc<D>)
    where
        D: Delegate<View = P::View, Effect = P::Effect> + 'static,
    {
        self.assert_owner_thread(Location::caller(), "set_delegate", "operation", || {
            "set_delegate".to_string()
        });
        *self.delegate.lock() = delegate::downgrade(delegate);
        let view = self.current_view();
        delegate.did_update(&view);
    }

    /// Stop notifying the current delegate.
    #[track_caller]
    pub fn clear_delegate(&self) {
        self.assert_owner_thread(Location::caller(), "clear_delegate", "operation", || {
            "clear_delegate".to_string()
        });
        *self.delegate.lock() = delegate::detached();
    }

    /// The settings this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn notify(&self, view: Option<&P::View>, effects: &[P::Effect]) {
        let Some(delegate) = self.delegate.lock().upgrade() else {
            tracing::trace!(effects = effects.len(), "delegate gone, notification dropped");
            return;
        };

        if let Some(view) = view {
            delegate.did_update(view);
        }
        for effect in effects {
            delegate.did_emit(effect);
        }
    }

    fn assert_owner_thread(
        &self,
        site: &'static Location<'static>,
        operation: &'static str,
        input_label: &'static str,
        input: impl FnOnce() -> String,
    ) {
        let current = thread::current().id();
        if current == self.owner {
            return;
        }

        // The owner may be mid-dispatch; don't block on it.
        let state = match self.inner.try_lock() {
            Some(inner) => format!("{:?}", inner.state),
            None => "<locked by owner thread>".to_string(),
        };
        self.fatal(
            site,
            Stage::WrongThread,
            &format_args!(
                "{} called on {:?}, store is owned by {:?}",
                operation, current, self.owner
            ),
            input_label,
            input(),
            Some(state),
        )
    }

    fn fatal(
        &self,
        site: &'static Location<'static>,
        stage: Stage,
        failure: &dyn Debug,
        input_label: &'static str,
        input: String,
        state: Option<String>,
    ) -> ! {
        diagnostics::terminate(
            self.sink.as_ref(),
            self.config.fatal_action,
            FatalReport::new(site, stage, format!("{:?}", failure), input_label, input, state),
        )
    }
}
