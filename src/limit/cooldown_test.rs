// ABOUTME: Tests for the per-user cooldown tracker.
// ABOUTME: Covers stamping, spam resistance, and per-user independence.

use std::time::{Duration, Instant};

use super::cooldown::{CooldownStatus, CooldownTracker};

#[test]
fn first_attempt_is_ready() {
    tokio_test::block_on(async {
        let tracker = CooldownTracker::new(Duration::from_secs(2));
        let status = tracker.check_and_stamp("viewer", Instant::now()).await;
        assert_eq!(status, CooldownStatus::Ready);
    });
}

#[test]
fn second_attempt_within_cooldown_is_too_soon() {
    tokio_test::block_on(async {
        let tracker = CooldownTracker::new(Duration::from_secs(2));
        let t0 = Instant::now();

        assert_eq!(
            tracker.check_and_stamp("viewer", t0).await,
            CooldownStatus::Ready
        );

        let t1 = t0 + Duration::from_secs(1);
        assert_eq!(
            tracker.check_and_stamp("viewer", t1).await,
            CooldownStatus::TooSoon {
                remaining: Duration::from_secs(1)
            }
        );
    });
}

#[test]
fn denied_attempt_does_not_reset_the_clock() {
    tokio_test::block_on(async {
        let tracker = CooldownTracker::new(Duration::from_secs(2));
        let t0 = Instant::now();

        assert_eq!(
            tracker.check_and_stamp("viewer", t0).await,
            CooldownStatus::Ready
        );

        // Spam attempt at t0+1s is denied and must not restamp.
        assert!(matches!(
            tracker
                .check_and_stamp("viewer", t0 + Duration::from_secs(1))
                .await,
            CooldownStatus::TooSoon { .. }
        ));

        // Two seconds after the *original* stamp the user is clear again.
        assert_eq!(
            tracker
                .check_and_stamp("viewer", t0 + Duration::from_secs(2))
                .await,
            CooldownStatus::Ready
        );
    });
}

#[test]
fn users_are_tracked_independently() {
    tokio_test::block_on(async {
        let tracker = CooldownTracker::new(Duration::from_secs(2));
        let t0 = Instant::now();

        assert_eq!(
            tracker.check_and_stamp("alice", t0).await,
            CooldownStatus::Ready
        );
        assert_eq!(
            tracker.check_and_stamp("bob", t0).await,
            CooldownStatus::Ready
        );
        assert!(matches!(
            tracker
                .check_and_stamp("alice", t0 + Duration::from_secs(1))
                .await,
            CooldownStatus::TooSoon { .. }
        ));
    });
}

#[test]
fn zero_cooldown_always_ready() {
    tokio_test::block_on(async {
        let tracker = CooldownTracker::new(Duration::ZERO);
        let t0 = Instant::now();

        assert_eq!(
            tracker.check_and_stamp("viewer", t0).await,
            CooldownStatus::Ready
        );
        assert_eq!(
            tracker.check_and_stamp("viewer", t0).await,
            CooldownStatus::Ready
        );
    });
}
