//! Rate-limiting function wrappers: throttle and debounce.
//!
//! Both wrappers gate how often a wrapped function runs, but from opposite
//! ends of a burst:
//!
//! - [`Throttled`] is **leading-edge**: the first call in a burst fires
//!   immediately and synchronously; calls within the following window are
//!   dropped (not queued, not retried); the next call at or past the
//!   window boundary fires and restarts the window.
//! - [`Debounced`] is **trailing-edge**: every call cancels the previously
//!   scheduled invocation and schedules a new one; the function fires once
//!   per quiescence period, exactly one delay after the last call of a
//!   burst, with that last call's arguments.
//!
//! Timing comes from the tokio clock: throttling compares
//! `tokio::time::Instant`s, debouncing sleeps on the tokio timer inside a
//! spawned task. Tests can drive both with a paused runtime and
//! `tokio::time::advance`.
//!
//! Each wrapper owns its own state (a timestamp, a pending task handle);
//! wrapping the same function twice produces independent gates.

mod debounce;
mod throttle;

pub use debounce::{Debounced, debounce};
pub use throttle::{Throttled, throttle};
