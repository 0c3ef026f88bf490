//! Single-threaded memoization wrappers.

use std::cell::RefCell;
use std::marker::PhantomData;

use serde::Serialize;

use super::key::{CacheMap, cache_key};

/// A memoizing wrapper around a function.
///
/// Each wrapper owns its own cache; wrapping the same function twice
/// produces two independently-stateful wrappers. The cache maps the
/// canonical serialization of the argument value to the computed result
/// and never shrinks.
///
/// For a fixed wrapper, calling with structurally equal arguments always
/// returns the originally cached result — even if the wrapped function is
/// non-deterministic, its side effects occur at most once per distinct
/// key.
///
/// This type is NOT thread-safe; see [`SyncMemoized`](super::SyncMemoized)
/// for the thread-safe counterpart.
///
/// # Panics
///
/// [`call`](Self::call) panics if the arguments cannot be serialized; see
/// [`cache_key`].
///
/// # Examples
///
/// ```rust
/// use fnkit::cache::Memoized;
/// use std::cell::Cell;
///
/// let invocations = Cell::new(0);
/// let wrapped = Memoized::new(|n: &u32| {
///     invocations.set(invocations.get() + 1);
///     n * n
/// });
///
/// assert_eq!(wrapped.call(&12), 144);
/// assert_eq!(wrapped.call(&12), 144);
/// assert_eq!(wrapped.call(&13), 169);
/// assert_eq!(invocations.get(), 2); // one per distinct key
/// ```
pub struct Memoized<Args, Output, F> {
    function: F,
    cache: RefCell<CacheMap<Output>>,
    _arguments: PhantomData<fn(&Args)>,
}

impl<Args, Output, F> Memoized<Args, Output, F>
where
    Args: Serialize,
    Output: Clone,
    F: Fn(&Args) -> Output,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(CacheMap::default()),
            _arguments: PhantomData,
        }
    }

    /// Invokes the wrapped function, or returns the cached result for
    /// structurally equal arguments seen before.
    ///
    /// # Panics
    ///
    /// Panics if the arguments cannot be serialized; see [`cache_key`].
    pub fn call(&self, arguments: &Args) -> Output {
        let key = cache_key(arguments);

        if let Some(cached) = self.cache.borrow().get(&key) {
            return cached.clone();
        }

        let result = (self.function)(arguments);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }

    /// The number of distinct argument keys cached so far.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

/// A memoizing wrapper around a fallible function.
///
/// Only successful results are cached: a call that fails leaves the cache
/// untouched and propagates the error, so a later call with the same
/// arguments invokes the function again.
///
/// # Examples
///
/// ```rust
/// use fnkit::cache::TryMemoized;
/// use std::cell::Cell;
///
/// let attempts = Cell::new(0);
/// let parse = TryMemoized::new(|text: &String| {
///     attempts.set(attempts.get() + 1);
///     text.parse::<i32>().map_err(|_| "not a number")
/// });
///
/// assert_eq!(parse.call(&"7".to_string()), Ok(7));
/// assert_eq!(parse.call(&"7".to_string()), Ok(7));
/// assert_eq!(attempts.get(), 1);
///
/// // Failures are not cached: each call retries
/// assert!(parse.call(&"oops".to_string()).is_err());
/// assert!(parse.call(&"oops".to_string()).is_err());
/// assert_eq!(attempts.get(), 3);
/// ```
pub struct TryMemoized<Args, Output, Error, F> {
    function: F,
    cache: RefCell<CacheMap<Output>>,
    _arguments: PhantomData<fn(&Args) -> Error>,
}

impl<Args, Output, Error, F> TryMemoized<Args, Output, Error, F>
where
    Args: Serialize,
    Output: Clone,
    F: Fn(&Args) -> Result<Output, Error>,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(CacheMap::default()),
            _arguments: PhantomData,
        }
    }

    /// Invokes the wrapped function unless a cached success exists.
    ///
    /// # Errors
    ///
    /// Propagates the wrapped function's error; the failed result is not
    /// stored.
    ///
    /// # Panics
    ///
    /// Panics if the arguments cannot be serialized; see [`cache_key`].
    pub fn call(&self, arguments: &Args) -> Result<Output, Error> {
        let key = cache_key(arguments);

        if let Some(cached) = self.cache.borrow().get(&key) {
            return Ok(cached.clone());
        }

        let result = (self.function)(arguments)?;
        self.cache.borrow_mut().insert(key, result.clone());
        Ok(result)
    }

    /// The number of distinct argument keys cached so far.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

/// Wraps `function` in a [`Memoized`] cache.
///
/// Convenience for [`Memoized::new`].
///
/// # Examples
///
/// ```rust
/// use fnkit::cache::memoize;
///
/// let add = memoize(|(a, b): &(i32, i32)| a + b);
/// assert_eq!(add.call(&(1, 2)), 3);
/// ```
pub fn memoize<Args, Output, F>(function: F) -> Memoized<Args, Output, F>
where
    Args: Serialize,
    Output: Clone,
    F: Fn(&Args) -> Output,
{
    Memoized::new(function)
}

/// Wraps a fallible `function` in a [`TryMemoized`] cache.
///
/// Convenience for [`TryMemoized::new`].
pub fn memoize_result<Args, Output, Error, F>(function: F) -> TryMemoized<Args, Output, Error, F>
where
    Args: Serialize,
    Output: Clone,
    F: Fn(&Args) -> Result<Output, Error>,
{
    TryMemoized::new(function)
}
