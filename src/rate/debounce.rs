//! Trailing-edge debouncing.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// A trailing-edge debounce wrapper around a function.
///
/// State: the handle of the pending scheduled invocation, initially none.
/// Every call aborts the pending invocation (if any) and schedules a
/// replacement that waits out the delay and then runs the function with
/// **this latest call's arguments**. Both steps happen under the wrapper's
/// lock, so a superseded invocation can never fire after its replacement
/// was scheduled.
///
/// Net effect: the function fires at most once per quiescence period,
/// exactly one delay after the last call of a burst. A wrapper that is
/// never called again fires its pending invocation exactly once; dropping
/// the wrapper does not cancel it.
///
/// The function runs detached inside a spawned task, with no caller to
/// propagate failures to; a panic there is captured by the task's
/// [`JoinHandle`] and dies with it.
///
/// # Panics
///
/// [`call`](Self::call) panics if invoked outside a tokio runtime, since
/// it spawns the delayed task on the current runtime.
///
/// # Examples
///
/// ```rust
/// use fnkit::rate::Debounced;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let seen = Arc::new(AtomicUsize::new(0));
/// let sink = Arc::clone(&seen);
/// let save = Debounced::new(
///     move |revision: usize| sink.store(revision, Ordering::SeqCst),
///     Duration::from_millis(10),
/// );
///
/// save.call(1);
/// save.call(2);
/// save.call(3);
///
/// tokio::time::sleep(Duration::from_millis(100)).await;
/// assert_eq!(seen.load(Ordering::SeqCst), 3); // only the last call fired
/// # }
/// ```
pub struct Debounced<Args, F> {
    function: Arc<F>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    _arguments: PhantomData<fn(Args)>,
}

impl<Args, F> Debounced<Args, F>
where
    Args: Send + 'static,
    F: Fn(Args) + Send + Sync + 'static,
{
    /// Wraps `function` with a quiescence period of `delay`.
    pub fn new(function: F, delay: Duration) -> Self {
        Self {
            function: Arc::new(function),
            delay,
            pending: Mutex::new(None),
            _arguments: PhantomData,
        }
    }

    /// The configured quiescence period.
    #[inline]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules the function to run with `arguments` after the delay,
    /// cancelling any invocation scheduled by an earlier call.
    pub fn call(&self, arguments: Args) {
        let mut pending = self.pending.lock();

        if let Some(superseded) = pending.take() {
            superseded.abort();
        }

        let function = Arc::clone(&self.function);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            function(arguments);
        }));
    }

    /// Returns `true` while an invocation is scheduled but has not fired.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

/// Wraps `function` in a [`Debounced`] wrapper.
///
/// Convenience for [`Debounced::new`].
pub fn debounce<Args, F>(function: F, delay: Duration) -> Debounced<Args, F>
where
    Args: Send + 'static,
    F: Fn(Args) + Send + Sync + 'static,
{
    Debounced::new(function, delay)
}

// The wrapper crosses task and thread boundaries with its function.
static_assertions::assert_impl_all!(Debounced<usize, fn(usize)>: Send, Sync);
