//! Coalescing queue for idle-period work.

/// Low-priority job queue drained once the current render pass is done.
///
/// Scheduling a job that is already queued is a no-op, so any burst of
/// requests within one idle window yields a single run of each job.
/// [`schedule`](IdleQueue::schedule) reports when the queue goes from empty
/// to non-empty, which is the only time the caller needs to request an idle
/// wakeup from the runtime.
///
/// # Example
///
/// ```rust
/// use countrypicker::schedule::IdleQueue;
///
/// let mut queue = IdleQueue::default();
/// assert!(queue.schedule("flush"));
/// assert!(!queue.schedule("flush"));
/// assert_eq!(queue.drain(), vec!["flush"]);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct IdleQueue<K> {
    jobs: Vec<K>,
}

impl<K> Default for IdleQueue<K> {
    fn default() -> Self {
        Self { jobs: Vec::new() }
    }
}

impl<K: PartialEq> IdleQueue<K> {
    /// Queues `job` unless it is already queued.
    ///
    /// Returns `true` if the queue was empty, i.e. an idle wakeup must be
    /// requested.
    pub fn schedule(&mut self, job: K) -> bool {
        let was_empty = self.jobs.is_empty();
        if !self.jobs.contains(&job) {
            self.jobs.push(job);
        }
        was_empty
    }

    /// Returns `true` if no job is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Takes every queued job in scheduling order.
    pub fn drain(&mut self) -> Vec<K> {
        std::mem::take(&mut self.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Job {
        A,
        B,
    }

    #[test]
    fn coalesces_duplicate_jobs() {
        let mut queue = IdleQueue::default();

        assert!(queue.schedule(Job::A));
        assert!(!queue.schedule(Job::B));
        assert!(!queue.schedule(Job::A));

        assert_eq!(queue.drain(), vec![Job::A, Job::B]);
    }

    #[test]
    fn wakeup_requested_again_after_drain() {
        let mut queue = IdleQueue::default();

        assert!(queue.schedule(Job::A));
        queue.drain();
        assert!(queue.schedule(Job::A));
    }

    #[test]
    fn drain_on_empty_queue_is_empty() {
        let mut queue: IdleQueue<Job> = IdleQueue::default();
        assert!(queue.drain().is_empty());
    }
}
