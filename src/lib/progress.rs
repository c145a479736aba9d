//! Progress logging for streaming inputs.
//!
//! A [`ProgressTracker`] counts items as they are read and logs each time the count crosses
//! a multiple of its interval.

use log::info;

use crate::logging::format_count;

/// Logs progress at regular intervals while a stream is consumed.
///
/// # Example
/// ```
/// use umiqc_lib::progress::ProgressTracker;
///
/// let mut tracker = ProgressTracker::new("Read").with_interval(100);
/// for _ in 0..250 {
///     tracker.record(1); // logs at 100 and 200
/// }
/// tracker.log_final(); // logs "Read 250 records (complete)"
/// assert_eq!(tracker.count(), 250);
/// ```
#[derive(Debug)]
pub struct ProgressTracker {
    interval: u64,
    message: String,
    count: u64,
}

impl ProgressTracker {
    /// Create a tracker with the given message prefix and a default interval of 1,000,000.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { interval: 1_000_000, message: message.into(), count: 0 }
    }

    /// Set the logging interval. Zero is treated as one.
    #[must_use]
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// Add to the count, logging once for every interval boundary crossed.
    ///
    /// Returns `true` if the new count lies exactly on a boundary.
    pub fn record(&mut self, additional: u64) -> bool {
        let prev = self.count;
        self.count = prev.saturating_add(additional);

        for milestone in (prev / self.interval + 1)..=(self.count / self.interval) {
            info!("{} {} records", self.message, format_count(milestone * self.interval));
        }

        self.on_boundary()
    }

    /// Log the final count unless the last [`record`](Self::record) already did.
    pub fn log_final(&self) {
        if self.count > 0 && !self.on_boundary() {
            info!("{} {} records (complete)", self.message, format_count(self.count));
        }
    }

    /// Number of items recorded so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    fn on_boundary(&self) -> bool {
        self.count > 0 && self.count.is_multiple_of(self.interval)
    }
}
