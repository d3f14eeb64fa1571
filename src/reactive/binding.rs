//! One-way bindings from sources to a recompute closure.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use super::observable::{Observable, Source, Subscription};
use super::readonly::ReadOnly;

/// One-way, continuous synchronization from a set of sources.
///
/// The recompute closure runs once when the binding is created and again
/// every time any source changes. It is expected to write its result into
/// a downstream observable; it must never write back into its sources.
///
/// Dropping the binding (or calling [`Binding::release`]) detaches every
/// upstream subscription at once. Whatever the closure last wrote stays in
/// place.
#[must_use = "dropping a Binding releases it immediately"]
pub struct Binding {
    subscriptions: SmallVec<[Subscription; 4]>,
}

impl Binding {
    pub fn new(sources: &[&dyn Source], recompute: impl Fn() + Send + Sync + 'static) -> Self {
        let recompute: Arc<dyn Fn() + Send + Sync> = Arc::new(recompute);
        recompute();
        let subscriptions = sources
            .iter()
            .map(|source| source.on_change(Arc::clone(&recompute)))
            .collect();
        Self { subscriptions }
    }

    /// Number of upstream sources this binding listens to.
    pub fn source_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Detach from every source now. Consuming `self` drops the
    /// subscriptions, which is all releasing takes.
    pub fn release(self) {
        drop(self);
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("sources", &self.subscriptions.len())
            .finish()
    }
}

/// Observable whose value is an expression over other sources.
///
/// Reads are always consistent with the sources: the value is recomputed
/// eagerly on every upstream change, never cached across one.
pub struct Derived<T> {
    value: Observable<T>,
    _binding: Binding,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Derived<T> {
    /// Combine any number of sources through `compute`.
    pub fn combine(sources: &[&dyn Source], compute: impl Fn() -> T + Send + Sync + 'static) -> Self {
        let value = Observable::new(compute());
        let sink = value.clone();
        let binding = Binding::new(sources, move || sink.set(compute()));
        Self {
            value,
            _binding: binding,
        }
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Read-only view for downstream subscribers or further bindings.
    pub fn observable(&self) -> ReadOnly<T> {
        self.value.read_only()
    }

    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        self.value.subscribe(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived").field("value", &self.value).finish()
    }
}

impl<T: Clone + PartialEq + Send + 'static> Observable<T> {
    /// Derive a new observable by applying `f` to this one.
    pub fn map<U>(&self, f: impl Fn(&T) -> U + Send + Sync + 'static) -> Derived<U>
    where
        U: Clone + PartialEq + Send + Sync + 'static,
    {
        let src = self.clone();
        Derived::combine(&[self as &dyn Source], move || src.with(&f))
    }
}
