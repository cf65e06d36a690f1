//! Tests for the leading-edge throttle.

use std::cell::Cell;
use std::time::Duration;

use lightslider::Throttle;

const COOLDOWN: Duration = Duration::from_millis(100);

#[tokio::test(start_paused = true)]
async fn test_burst_within_cooldown_fires_once() {
    let fired = Cell::new(0);
    let mut throttled = Throttle::new(COOLDOWN).wrap(|()| fired.set(fired.get() + 1));

    for _ in 0..10 {
        throttled.call(());
        tokio::time::advance(Duration::from_millis(5)).await;
    }

    assert_eq!(fired.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_call_after_cooldown_fires_again() {
    let mut throttled = Throttle::new(COOLDOWN).wrap(|n: u32| n * 2);

    assert_eq!(throttled.call(1), Some(2));
    assert_eq!(throttled.call(2), None);

    tokio::time::advance(COOLDOWN).await;
    assert_eq!(throttled.call(3), Some(6));
    assert_eq!(throttled.call(4), None);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_calls_are_not_replayed() {
    let seen = Cell::new(Vec::new());
    let mut throttled = Throttle::new(COOLDOWN).wrap(|n: u32| {
        let mut v = seen.take();
        v.push(n);
        seen.set(v);
    });

    throttled.call(1);
    throttled.call(2);
    throttled.call(3);
    tokio::time::advance(COOLDOWN * 5).await;

    // Nothing arrives once the cooldown is over
    assert_eq!(seen.take(), vec![1]);
    seen.set(vec![1]);

    throttled.call(4);
    assert_eq!(seen.take(), vec![1, 4]);
}

#[tokio::test(start_paused = true)]
async fn test_cooldown_runs_from_the_call_that_passed() {
    let mut throttle = Throttle::new(COOLDOWN);

    assert!(throttle.ready());
    tokio::time::advance(Duration::from_millis(60)).await;
    // Dropped calls do not extend the cooldown
    assert!(!throttle.ready());
    tokio::time::advance(Duration::from_millis(40)).await;
    assert!(throttle.ready());
}

#[tokio::test(start_paused = true)]
async fn test_is_blocked_and_reset() {
    let mut throttle = Throttle::new(COOLDOWN);
    assert!(!throttle.is_blocked());

    assert!(throttle.ready());
    assert!(throttle.is_blocked());

    throttle.reset();
    assert!(!throttle.is_blocked());
    assert!(throttle.ready());
}

#[test]
fn test_multiple_arguments_as_tuple() {
    let mut throttled = Throttle::new(Duration::from_secs(60)).wrap(|(a, b): (i32, i32)| a + b);
    assert_eq!(throttled.call((2, 3)), Some(5));
    assert_eq!(throttled.call((4, 5)), None);
    assert!(throttled.is_blocked());
}
