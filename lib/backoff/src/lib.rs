//! `tokio-retry` crate
//! MIT License
//! Copyright (c) 2017 Sam Rijs
//!

use std::time::Duration;

/// Exponential back-off with a ceiling.
///
/// The first delay is `initial`, each following delay is the previous one
/// times `multiplier`, never exceeding `max_delay` when set.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    current: Duration,
    initial: Duration,
    multiplier: u32,
    max_delay: Option<Duration>,
}

impl ExponentialBackoff {
    pub const fn new(initial: Duration) -> ExponentialBackoff {
        ExponentialBackoff {
            current: initial,
            initial,
            multiplier: 2,
            max_delay: None,
        }
    }

    pub const fn from_millis(initial: u64) -> ExponentialBackoff {
        Self::new(Duration::from_millis(initial))
    }

    /// Growth factor applied after every attempt, `2` unless changed.
    ///
    /// A multiplier of `1` (or `0`) gives a constant delay.
    pub const fn multiplier(mut self, multiplier: u32) -> ExponentialBackoff {
        self.multiplier = multiplier;
        self
    }

    /// Apply a maximum delay. No retry delay will be longer than this `Duration`.
    pub const fn max_delay(mut self, duration: Duration) -> ExponentialBackoff {
        self.max_delay = Some(duration);
        self
    }

    /// The next `Duration` to wait for.
    pub fn next_delay(&mut self) -> Duration {
        let delay = match self.max_delay {
            Some(max) if self.current > max => max,
            _ => self.current,
        };

        if self.multiplier > 1 {
            self.current = self
                .current
                .checked_mul(self.multiplier)
                .unwrap_or(Duration::MAX);
        }

        delay
    }

    pub async fn wait(&mut self) {
        let duration = self.next_delay();
        tokio::time::sleep(duration).await
    }

    pub fn reset(&mut self) {
        self.current = self.initial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_by_default() {
        let mut s = ExponentialBackoff::from_millis(200);

        assert_eq!(s.next_delay(), Duration::from_millis(200));
        assert_eq!(s.next_delay(), Duration::from_millis(400));
        assert_eq!(s.next_delay(), Duration::from_millis(800));
    }

    #[test]
    fn custom_multiplier() {
        let mut s = ExponentialBackoff::from_millis(10).multiplier(10);

        assert_eq!(s.next_delay(), Duration::from_millis(10));
        assert_eq!(s.next_delay(), Duration::from_millis(100));
        assert_eq!(s.next_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn constant_when_multiplier_is_one() {
        let mut s = ExponentialBackoff::from_millis(50).multiplier(1);

        assert_eq!(s.next_delay(), Duration::from_millis(50));
        assert_eq!(s.next_delay(), Duration::from_millis(50));
    }

    #[test]
    fn saturates_at_maximum_value() {
        let mut s = ExponentialBackoff::new(Duration::MAX / 2 + Duration::from_secs(1));

        s.next_delay();
        assert_eq!(s.next_delay(), Duration::MAX);
        assert_eq!(s.next_delay(), Duration::MAX);
    }

    #[test]
    fn stops_increasing_at_max_delay() {
        let mut s = ExponentialBackoff::from_millis(200).max_delay(Duration::from_secs(5));

        let delays = (0..8).map(|_| s.next_delay().as_millis()).collect::<Vec<_>>();
        assert_eq!(delays, [200, 400, 800, 1600, 3200, 5000, 5000, 5000]);
    }

    #[test]
    fn reset() {
        let mut backoff = ExponentialBackoff::from_millis(2);
        assert_eq!(backoff.next_delay(), Duration::from_millis(2));
        assert_eq!(backoff.next_delay(), Duration::from_millis(4));
        backoff.reset();
        assert_eq!(backoff.next_delay(), Duration::from_millis(2));
    }

    #[test]
    fn returns_max_when_max_less_than_initial() {
        let mut s = ExponentialBackoff::from_millis(20).max_delay(Duration::from_millis(10));

        assert_eq!(s.next_delay(), Duration::from_millis(10));
        assert_eq!(s.next_delay(), Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_sleeps_for_delay() {
        let mut s = ExponentialBackoff::from_millis(100);
        let start = tokio::time::Instant::now();

        s.wait().await;
        s.wait().await;

        assert_eq!(start.elapsed(), Duration::from_millis(300));
    }
}
