//! Deduplicating flag preload queue.
//!
//! The flag cache collects [`FlagDiscovered`] signals and hands them out in
//! batches. It never performs the preload itself; the application turns each
//! flushed batch into a worker message. When to flush is decided by the
//! caller's idle queue: [`FlagCache::request_cache`] only reports whether a
//! flush is needed.

use crate::domain::FlagDiscovered;
use std::collections::HashSet;

/// Pending preload requests and the codes already preloaded.
///
/// A code is enqueued at most once: requests for a code that is cached or
/// already pending are ignored. [`flush`](Self::flush) drains the whole
/// pending batch at once, in enqueue order.
#[derive(Debug, Clone, Default)]
pub struct FlagCache {
    pending: Vec<FlagDiscovered>,
    cached: HashSet<String>,
}

impl FlagCache {
    /// Enqueues a flag for preloading.
    ///
    /// Returns `true` if the request was enqueued, meaning a flush must be
    /// scheduled; `false` if the code is cached or already pending.
    ///
    /// # Example
    ///
    /// ```rust
    /// use countrypicker::app::FlagCache;
    /// use countrypicker::domain::FlagDiscovered;
    ///
    /// let fr = FlagDiscovered { img_src: "/flags/fr.svg".into(), code: "fr".into() };
    /// let mut cache = FlagCache::default();
    ///
    /// assert!(cache.request_cache(fr.clone()));
    /// assert!(!cache.request_cache(fr));
    /// assert_eq!(cache.flush().len(), 1);
    /// ```
    pub fn request_cache(&mut self, signal: FlagDiscovered) -> bool {
        if self.is_cached(&signal.code) || self.pending.iter().any(|p| p.code == signal.code) {
            tracing::trace!(code = %signal.code, "flag already cached or pending");
            return false;
        }

        tracing::trace!(code = %signal.code, "flag enqueued for preload");
        self.pending.push(signal);
        true
    }

    /// Drains the pending batch, marking every code as cached.
    pub fn flush(&mut self) -> Vec<FlagDiscovered> {
        let batch = std::mem::take(&mut self.pending);
        self.cached.extend(batch.iter().map(|flag| flag.code.clone()));

        tracing::debug!(
            batch_size = batch.len(),
            cached_total = self.cached.len(),
            "flag cache flushed"
        );
        batch
    }

    /// Returns `true` if `code` has been flushed.
    #[must_use]
    pub fn is_cached(&self, code: &str) -> bool {
        self.cached.contains(code)
    }

    /// Number of requests waiting for the next flush.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
