//! Read-only view over an observable.

use std::fmt;
use std::sync::Arc;

use super::binding::Derived;
use super::observable::{Observable, Source, Subscription};

/// Handle that can read and subscribe to an [`Observable`] but never
/// write it.
///
/// Owners hand these out when a value is driven internally (for example
/// by a binding) and outside writes would break that.
pub struct ReadOnly<T> {
    inner: Observable<T>,
}

impl<T> Clone for ReadOnly<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadOnly").field(&self.inner).finish()
    }
}

impl<T: Clone + PartialEq + Send + 'static> Observable<T> {
    /// View of this observable without write access.
    pub fn read_only(&self) -> ReadOnly<T> {
        ReadOnly {
            inner: self.clone(),
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> ReadOnly<T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// See [`Observable::with`].
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        self.inner.subscribe(f)
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U + Send + Sync + 'static) -> Derived<U>
    where
        U: Clone + PartialEq + Send + Sync + 'static,
    {
        self.inner.map(f)
    }
}

impl<T: Clone + PartialEq + Send + 'static> Source for ReadOnly<T> {
    fn on_change(&self, f: Arc<dyn Fn() + Send + Sync>) -> Subscription {
        self.inner.on_change(f)
    }
}
