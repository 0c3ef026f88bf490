//! Leading-edge throttling.

use std::cell::Cell;
use std::time::Duration;

use tokio::time::Instant;

/// A leading-edge throttle gate around a function.
///
/// State: the timestamp of the last invocation that passed the gate,
/// initially unset. A call passes when there is no such timestamp yet, or
/// when at least the configured delay has elapsed since it; passing calls
/// invoke the function synchronously, return `Some(output)`, and restart
/// the window. All other calls are dropped: the function is not invoked,
/// nothing is queued, and `None` is returned.
///
/// Errors are the wrapped function's own business: a panic in a passing
/// call propagates to that caller, and the timestamp still records the
/// attempt's window.
///
/// Timestamps come from [`tokio::time::Instant`], so a paused test runtime
/// observes virtual time. Outside a runtime the clock falls back to the
/// system's monotonic clock.
///
/// This type is NOT thread-safe: it is a per-task gate, like a cell in a
/// single-threaded event loop.
///
/// # Examples
///
/// ```rust
/// use fnkit::rate::Throttled;
/// use std::time::Duration;
///
/// let gate = Throttled::new(|n: i32| n * 2, Duration::from_secs(60));
///
/// assert_eq!(gate.call(1), Some(2)); // leading edge: fires immediately
/// assert_eq!(gate.call(2), None); // inside the window: dropped
/// assert_eq!(gate.call(3), None);
/// ```
pub struct Throttled<F> {
    function: F,
    delay: Duration,
    last_fired: Cell<Option<Instant>>,
}

impl<F> Throttled<F> {
    /// Wraps `function` with a minimum inter-call interval of `delay`.
    pub fn new(function: F, delay: Duration) -> Self {
        Self {
            function,
            delay,
            last_fired: Cell::new(None),
        }
    }

    /// The configured minimum interval between invocations.
    #[inline]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Calls through the gate.
    ///
    /// Returns `Some(output)` if the gate was open and the function ran,
    /// `None` if the call fell inside the window and was dropped.
    pub fn call<Args, Output>(&self, arguments: Args) -> Option<Output>
    where
        F: Fn(Args) -> Output,
    {
        let now = Instant::now();
        let open = self
            .last_fired
            .get()
            .is_none_or(|last| now.duration_since(last) >= self.delay);

        if open {
            self.last_fired.set(Some(now));
            Some((self.function)(arguments))
        } else {
            None
        }
    }
}

/// Wraps `function` in a [`Throttled`] gate.
///
/// Convenience for [`Throttled::new`].
///
/// # Examples
///
/// ```rust
/// use fnkit::rate::throttle;
/// use std::time::Duration;
///
/// let log_burst = throttle(|message: &str| message.len(), Duration::from_secs(1));
/// assert_eq!(log_burst.call("first"), Some(5));
/// assert_eq!(log_burst.call("second"), None);
/// ```
pub fn throttle<F>(function: F, delay: Duration) -> Throttled<F> {
    Throttled::new(function, delay)
}
