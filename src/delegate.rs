//! Observer side of the store.
//!
//! The store holds its delegate through a [`Weak`] reference, so it never
//! extends the delegate's lifetime. Once the last [`Arc`] is dropped
//! elsewhere, notifications are silently skipped.

use std::sync::{Arc, Weak};

/// Receives view updates and emitted effects from a store.
///
/// Both callbacks default to no-ops.
pub trait Delegate: Send + Sync {
    type View;
    type Effect;

    /// Called with the freshly rendered view.
    fn did_update(&self, view: &Self::View) {
        let _ = view;
    }

    /// Called once per emitted effect, in emission order.
    fn did_emit(&self, effect: &Self::Effect) {
        let _ = effect;
    }
}

/// Type-erased weak handle to a delegate.
pub(crate) type DelegateRef<V, E> = Weak<dyn Delegate<View = V, Effect = E>>;

pub(crate) fn downgrade<D>(delegate: &Arc<D>) -> DelegateRef<D::View, D::Effect>
where
    D: Delegate + 'static,
{
    let delegate: Arc<dyn Delegate<View = D::View, Effect = D::Effect>> = delegate.clone();
    Arc::downgrade(&delegate)
}

/// A weak handle that never upgrades.
pub(crate) fn detached<V: 'static, E: 'static>() -> DelegateRef<V, E> {
    Weak::<Detached<V, E>>::new()
}

struct Detached<V, E>(std::marker::PhantomData<fn() -> (V, E)>);

impl<V, E> Delegate for Detached<V, E> {
    type View = V;
    type Effect = E;
}
