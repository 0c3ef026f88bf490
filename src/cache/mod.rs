//! Memoization wrappers keyed by structural argument serialization.
//!
//! A memoized wrapper owns a private cache mapping serialized argument
//! lists to previously computed results. On each call it serializes the
//! full ordered argument list to a canonical key; a hit returns the cached
//! result without invoking the wrapped function, a miss invokes it and
//! stores the result. Side effects of the wrapped function therefore occur
//! at most once per distinct key.
//!
//! The cache grows monotonically: no eviction, no TTL, no size bound.
//! Callers needing bounded memory must wrap the wrapper externally.
//!
//! # Key model
//!
//! Keys are produced by serializing the argument value with `serde_json`:
//! a canonical text over the tagged union {null, boolean, number, text,
//! sequence, mapping}. Two argument lists receive the same key if and only
//! if they are structurally equal element-wise, regardless of how they
//! were constructed.
//!
//! # Choosing a wrapper
//!
//! - [`Memoized`]: single-threaded, interior mutability via `RefCell`.
//! - [`TryMemoized`]: like `Memoized` for fallible functions; only `Ok`
//!   results are cached, failures propagate uncached.
//! - [`SyncMemoized`]: thread-safe, the same contract behind a
//!   wrapper-scoped mutex.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::cache::Memoized;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let slow_add = Memoized::new(|(a, b): &(i32, i32)| {
//!     calls.set(calls.get() + 1);
//!     a + b
//! });
//!
//! assert_eq!(slow_add.call(&(1, 2)), 3);
//! assert_eq!(slow_add.call(&(1, 2)), 3);
//! assert_eq!(calls.get(), 1); // computed once, served from cache after
//! ```

mod key;
mod memoize;
mod sync_memoize;

pub use key::cache_key;
pub use memoize::{Memoized, TryMemoized, memoize, memoize_result};
pub use sync_memoize::SyncMemoized;
