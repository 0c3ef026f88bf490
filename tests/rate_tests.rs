//! Unit tests for the throttle and debounce wrappers.
//!
//! These tests run on a paused tokio runtime and drive the clock with
//! `tokio::time::advance`, so timing assertions are exact:
//! - throttle: leading-edge gating with a 1000ms window
//! - debounce: one invocation per quiescence period, latest arguments win

#![cfg(feature = "rate")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fnkit::rate::{Debounced, Throttled, debounce, throttle};

const DELAY: Duration = Duration::from_millis(1000);

// =============================================================================
// Throttle: leading edge
// =============================================================================

mod throttle_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_three_immediate_calls_invoke_once() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&invocations);
        let gate = Throttled::new(
            move |()| {
                counted.fetch_add(1, Ordering::SeqCst);
            },
            DELAY,
        );

        assert!(gate.call(()).is_some());
        assert!(gate.call(()).is_none());
        assert!(gate.call(()).is_none());

        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_after_full_window_invokes_again() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&invocations);
        let gate = Throttled::new(
            move |()| {
                counted.fetch_add(1, Ordering::SeqCst);
            },
            DELAY,
        );

        let _ = gate.call(());
        let _ = gate.call(());
        let _ = gate.call(());
        assert_eq!(invocations.load(Ordering::SeqCst), 1);

        tokio::time::advance(DELAY).await;

        let _ = gate.call(());
        let _ = gate.call(());
        assert_eq!(invocations.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gated_call_returns_no_result() {
        let gate = Throttled::new(|n: i32| n + 1, DELAY);

        assert_eq!(gate.call(1), Some(2));

        // Dropped, not queued: the result is simply absent
        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(gate.call(2), None);

        // The drop did not restart the window, which still ends 1000ms
        // after the first call
        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(gate.call(3), Some(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_factory() {
        let gate = throttle(|s: &str| s.to_uppercase(), DELAY);
        assert_eq!(gate.call("hi"), Some("HI".to_string()));
        assert_eq!(gate.call("again"), None);
    }
}

// =============================================================================
// Debounce: trailing edge, latest arguments
// =============================================================================

mod debounce_tests {
    use super::*;

    /// A recorder the debounced function writes into: invocation count and
    /// the argument of the latest firing.
    fn recorder() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (
            Arc::new(AtomicUsize::new(0)),
            Arc::new(AtomicUsize::new(0)),
        )
    }

    fn recording(
        count: &Arc<AtomicUsize>,
        seen: &Arc<AtomicUsize>,
    ) -> impl Fn(usize) + Send + Sync + 'static {
        let count = Arc::clone(count);
        let seen = Arc::clone(seen);
        move |value| {
            count.fetch_add(1, Ordering::SeqCst);
            seen.store(value, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_fires_before_quiescence() {
        let (count, seen) = recorder();
        let debounced = Debounced::new(recording(&count, &seen), DELAY);

        debounced.call(1);
        debounced.call(2);
        debounced.call(3);

        // Let the surviving task register its timer before moving the clock
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(900)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_with_latest_arguments() {
        let (count, seen) = recorder();
        let debounced = Debounced::new(recording(&count, &seen), DELAY);

        debounced.call(1);
        debounced.call(2);
        debounced.call(3);

        tokio::task::yield_now().await;
        tokio::time::advance(DELAY).await;
        tokio::task::yield_now().await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_call_restarts_the_clock() {
        let (count, seen) = recorder();
        let debounced = Debounced::new(recording(&count, &seen), DELAY);

        debounced.call(1);
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(900)).await;

        // 900ms in: a new call supersedes the pending one
        debounced.call(2);
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(900)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_untouched_wrapper_fires_exactly_once() {
        let (count, seen) = recorder();
        let debounced = Debounced::new(recording(&count, &seen), DELAY);

        debounced.call(7);
        assert!(debounced.is_pending());

        // Far beyond the delay: still exactly one firing
        tokio::task::yield_now().await;
        tokio::time::advance(DELAY * 10).await;
        tokio::task::yield_now().await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_each_fire() {
        let (count, seen) = recorder();
        let debounced = debounce(recording(&count, &seen), DELAY);

        debounced.call(1);
        tokio::task::yield_now().await;
        tokio::time::advance(DELAY).await;
        tokio::task::yield_now().await;

        debounced.call(2);
        tokio::task::yield_now().await;
        tokio::time::advance(DELAY).await;
        tokio::task::yield_now().await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrappers_gate_independently() {
        let (first_count, first_seen) = recorder();
        let (second_count, second_seen) = recorder();

        let first = Debounced::new(recording(&first_count, &first_seen), DELAY);
        let second = Debounced::new(recording(&second_count, &second_seen), DELAY);

        first.call(1);
        second.call(2);

        tokio::task::yield_now().await;
        tokio::time::advance(DELAY).await;
        tokio::task::yield_now().await;

        assert_eq!(first_count.load(Ordering::SeqCst), 1);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
        assert_eq!(first_seen.load(Ordering::SeqCst), 1);
        assert_eq!(second_seen.load(Ordering::SeqCst), 2);
    }
}
