//! Thread-safe memoization.

use std::marker::PhantomData;

use parking_lot::Mutex;
use serde::Serialize;

use super::key::{CacheMap, cache_key};

/// A thread-safe memoizing wrapper around a function.
///
/// Same contract as [`Memoized`](super::Memoized) — one private,
/// monotonically growing cache per wrapper, keyed by canonical argument
/// serialization — but the cache sits behind a mutex scoped to this single
/// wrapper instance, so the wrapper can be shared between threads.
///
/// The lock is held across the wrapped function's execution on a miss.
/// This guarantees the invocation happens at most once per distinct key
/// even under contention: concurrent callers with the same arguments
/// serialize, and the laggards are served from the cache.
///
/// # Re-entry Warning
///
/// Calling the same wrapper recursively from inside the wrapped function
/// deadlocks; the mutex is not reentrant.
///
/// # Examples
///
/// ```rust
/// use fnkit::cache::SyncMemoized;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
///
/// let invocations = Arc::new(AtomicUsize::new(0));
/// let counted = Arc::clone(&invocations);
/// let wrapped = Arc::new(SyncMemoized::new(move |n: &u64| {
///     counted.fetch_add(1, Ordering::SeqCst);
///     n * 3
/// }));
///
/// let handles: Vec<_> = (0..8)
///     .map(|_| {
///         let wrapped = Arc::clone(&wrapped);
///         thread::spawn(move || wrapped.call(&14))
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 42);
/// }
/// assert_eq!(invocations.load(Ordering::SeqCst), 1);
/// ```
pub struct SyncMemoized<Args, Output, F> {
    function: F,
    cache: Mutex<CacheMap<Output>>,
    _arguments: PhantomData<fn(&Args)>,
}

impl<Args, Output, F> SyncMemoized<Args, Output, F>
where
    Args: Serialize,
    Output: Clone,
    F: Fn(&Args) -> Output,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: Mutex::new(CacheMap::default()),
            _arguments: PhantomData,
        }
    }

    /// Invokes the wrapped function, or returns the cached result for
    /// structurally equal arguments seen before.
    ///
    /// # Panics
    ///
    /// Panics if the arguments cannot be serialized; see
    /// [`cache_key`](super::cache_key).
    pub fn call(&self, arguments: &Args) -> Output {
        let key = cache_key(arguments);

        let mut cache = self.cache.lock();
        if let Some(cached) = cache.get(&key) {
            return cached.clone();
        }

        let result = (self.function)(arguments);
        cache.insert(key, result.clone());
        result
    }

    /// The number of distinct argument keys cached so far.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

// A wrapper over a shareable function must itself be shareable.
static_assertions::assert_impl_all!(
    SyncMemoized<(i32, i32), i32, fn(&(i32, i32)) -> i32>: Send, Sync
);
