//! Observable value and subscription guard.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use smallvec::SmallVec;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    /// Kept in registration order; notification follows it.
    subscribers: SmallVec<[(u64, Callback<T>); 4]>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking subscriber never runs under the lock, so a poisoned
    // mutex still holds a consistent value.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared handle to a value that notifies subscribers when it changes.
///
/// Cloning the handle is cheap and every clone observes the same value.
///
/// # Invariants
///
/// - Setting a value equal to the current one is a no-op: no version bump
///   and no notification.
/// - The version increments exactly once per effective change.
/// - Subscribers are notified in registration order, after the new value
///   is visible through [`Observable::get`].
///
/// # Example
///
/// ```
/// use aberredcamera::reactive::Observable;
///
/// let x = Observable::new(1.0_f32);
/// let seen = Observable::new(0.0_f32);
/// let sink = seen.clone();
/// let _sub = x.subscribe(move |v| sink.set(*v * 2.0));
/// x.set(4.0);
/// assert_eq!(seen.get(), 8.0);
/// ```
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + Send + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                version: 0,
                next_id: 0,
                subscribers: SmallVec::new(),
            })),
        }
    }

    /// Current value (a clone, never a stale snapshot).
    pub fn get(&self) -> T {
        lock(&self.inner).value.clone()
    }

    /// Borrow the current value for the duration of `f`.
    ///
    /// `f` runs under the internal lock; it must not touch this observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&lock(&self.inner).value)
    }

    /// Number of effective changes since construction.
    pub fn version(&self) -> u64 {
        lock(&self.inner).version
    }

    /// Replace the value and notify subscribers if it changed.
    pub fn set(&self, value: T) {
        let (value, callbacks) = {
            let mut inner = lock(&self.inner);
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
            let callbacks: SmallVec<[Callback<T>; 4]> = inner
                .subscribers
                .iter()
                .map(|(_, cb)| Arc::clone(cb))
                .collect();
            (inner.value.clone(), callbacks)
        };
        for cb in callbacks {
            cb(&value);
        }
    }

    /// Modify the value in place, then notify as [`Observable::set`] does.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }

    /// Register a change callback. The callback is not invoked for the
    /// current value, only for later changes.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Arc::new(f)));
            id
        };
        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).subscribers.retain(|(sid, _)| *sid != id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).subscribers.len()
    }
}

/// Guard returned by [`Observable::subscribe`].
///
/// Dropping it removes the callback before the next notification cycle.
/// A notification already in flight still reaches the callback.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Explicitly unsubscribe. The cancel hook runs in `Drop`.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Anything a [`Binding`](super::Binding) can listen to.
///
/// The callback carries no value, so sources of different types can drive
/// the same recompute closure.
pub trait Source: Send + Sync {
    fn on_change(&self, f: Arc<dyn Fn() + Send + Sync>) -> Subscription;
}

impl<T: Clone + PartialEq + Send + 'static> Source for Observable<T> {
    fn on_change(&self, f: Arc<dyn Fn() + Send + Sync>) -> Subscription {
        self.subscribe(move |_| f())
    }
}
