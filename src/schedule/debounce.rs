//! Trailing-edge debounce timer.

use std::time::{Duration, Instant};

/// A job waiting for its quiet period to elapse.
#[derive(Debug, Clone)]
struct PendingJob<T> {
    value: T,
    deadline: Instant,
}

/// Cancel-and-reschedule timer holding at most one pending job.
///
/// Each [`schedule`](Self::schedule) call replaces the pending value and
/// restarts the quiet period from `now`. The job fires once, with the latest
/// value, the first time [`poll`](Self::poll) is called at or after the
/// deadline. Jobs are superseded, never queued.
///
/// # Example
///
/// ```rust
/// use countrypicker::schedule::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut debouncer = Debouncer::new(Duration::from_millis(100));
///
/// debouncer.schedule("f", start);
/// debouncer.schedule("fr", start + Duration::from_millis(50));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(120)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(150)), Some("fr"));
/// assert_eq!(debouncer.poll(start + Duration::from_millis(500)), None);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<PendingJob<T>>,
}

impl<T> Debouncer<T> {
    /// Creates an idle debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the configured quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value`, superseding any pending job.
    ///
    /// Returns the duration after which the caller should poll.
    pub fn schedule(&mut self, value: T, now: Instant) -> Duration {
        if self.is_pending() {
            tracing::trace!("superseding pending debounced job");
        }
        self.pending = Some(PendingJob {
            value,
            deadline: now + self.delay,
        });
        self.delay
    }

    /// Returns `true` while a job is waiting to fire.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending job is due, `None` when idle.
    ///
    /// Returns [`Duration::ZERO`] once the deadline has passed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|job| job.deadline.saturating_duration_since(now))
    }

    /// Fires the pending job if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(job) if now >= job.deadline => self.pending.take().map(|job| job.value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        assert_eq!(debouncer.schedule(1, t0), DELAY);
        assert_eq!(debouncer.poll(t0 + ms(99)), None);
        assert_eq!(debouncer.poll(t0 + ms(100)), Some(1));
        assert_eq!(debouncer.poll(t0 + ms(200)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn each_schedule_restarts_the_timer() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule("a", t0);
        debouncer.schedule("ab", t0 + ms(90));
        debouncer.schedule("abc", t0 + ms(180));

        assert_eq!(debouncer.poll(t0 + ms(200)), None);
        assert_eq!(debouncer.remaining(t0 + ms(200)), Some(ms(80)));
        assert_eq!(debouncer.poll(t0 + ms(280)), Some("abc"));
    }

    #[test]
    fn idle_debouncer_has_nothing_remaining() {
        let t0 = Instant::now();
        let mut debouncer: Debouncer<u8> = Debouncer::new(DELAY);

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.remaining(t0), None);
        assert_eq!(debouncer.poll(t0 + ms(500)), None);
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule((), t0);
        assert_eq!(debouncer.remaining(t0 + ms(250)), Some(Duration::ZERO));
    }
}
