// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

/// Screen captures feeding the magnifier and the edge snapper run at most once per
/// this interval.
pub const CAPTURE_INTERVAL: Duration = Duration::from_millis(50);

/// Status of a [`CaptureThrottle`] at a given instant:
/// - [`ThrottleStatus::NotStarted`]: Nothing has been captured yet.
/// - [`ThrottleStatus::Expired`]: The last capture is older than the interval, so a new
///   one may run.
/// - [`ThrottleStatus::Active`]: The last capture is within the interval. Reuse its
///   result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleStatus {
    NotStarted,
    Expired,
    Active,
}

impl ThrottleStatus {
    #[must_use]
    pub fn may_run(self) -> bool { !matches!(self, ThrottleStatus::Active) }
}

/// Tracks when an expensive operation (a screen grab) last ran so callers can skip it
/// while the previous result is still fresh. Time is always passed in, which keeps the
/// throttle deterministic under test.
///
/// 1. Call [`Self::check_and_mark`] before capturing.
/// 2. If it returns [`ThrottleStatus::NotStarted`] or [`ThrottleStatus::Expired`] the
///    run time is recorded and the caller should capture.
/// 3. Otherwise it is [`ThrottleStatus::Active`] and the caller reuses what it has.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureThrottle {
    pub last_run: Option<Instant>,
    pub interval: Duration,
}

impl Default for CaptureThrottle {
    fn default() -> Self { Self::new(CAPTURE_INTERVAL) }
}

impl CaptureThrottle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            last_run: None,
            interval,
        }
    }

    /// Returns the status at `now`, recording `now` as the last run when the caller is
    /// allowed to proceed.
    pub fn check_and_mark(&mut self, now: Instant) -> ThrottleStatus {
        let status = self.status(now);
        if status.may_run() {
            self.last_run.replace(now);
        }
        status
    }

    #[must_use]
    pub fn status(&self, now: Instant) -> ThrottleStatus {
        match self.last_run {
            None => ThrottleStatus::NotStarted,
            Some(last_run) => {
                if now.saturating_duration_since(last_run) >= self.interval {
                    ThrottleStatus::Expired
                } else {
                    ThrottleStatus::Active
                }
            }
        }
    }

    /// Forget the last run, so the next check always proceeds. Used when the thing
    /// being captured changes (eg: the magnifier is toggled back on).
    pub fn reset(&mut self) { self.last_run = None; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_not_started() {
        let throttle = CaptureThrottle::default();
        assert_eq2!(throttle.status(Instant::now()), ThrottleStatus::NotStarted);
    }

    #[test]
    fn test_active_within_interval() {
        let mut throttle = CaptureThrottle::default();
        let now = Instant::now();
        assert_eq2!(throttle.check_and_mark(now), ThrottleStatus::NotStarted);
        assert_eq2!(
            throttle.check_and_mark(now + Duration::from_millis(49)),
            ThrottleStatus::Active
        );
        // An active check does not move the last run forward.
        assert_eq2!(throttle.last_run, Some(now));
    }

    #[test]
    fn test_expired_after_interval() {
        let mut throttle = CaptureThrottle::default();
        let now = Instant::now();
        throttle.check_and_mark(now);
        let later = now + CAPTURE_INTERVAL;
        assert_eq2!(throttle.check_and_mark(later), ThrottleStatus::Expired);
        assert_eq2!(throttle.last_run, Some(later));
    }

    #[test]
    fn test_clock_going_backwards_is_active() {
        let mut throttle = CaptureThrottle::default();
        let now = Instant::now() + Duration::from_secs(1);
        throttle.check_and_mark(now);
        let earlier = now - Duration::from_millis(500);
        assert_eq2!(throttle.status(earlier), ThrottleStatus::Active);
    }

    #[test]
    fn test_reset() {
        let mut throttle = CaptureThrottle::default();
        let now = Instant::now();
        throttle.check_and_mark(now);
        throttle.reset();
        assert_eq2!(throttle.check_and_mark(now), ThrottleStatus::NotStarted);
    }
}
