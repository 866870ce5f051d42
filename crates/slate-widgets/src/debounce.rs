//! Debounce helpers for rate-limiting input handlers
//!
//! iced has no timers inside widgets, so debouncing is split in two:
//!
//! - `Debouncer` keeps the latest pending value and hands out tickets
//! - `debounce_task` sleeps for the quiet period and reports the ticket back
//!
//! Every new value invalidates older tickets, so only the timer armed by the
//! last keystroke delivers a value.
//!
//! ```ignore
//! let ticket = state.debouncer.schedule(query);
//! debounce_task(ticket, Duration::from_millis(300), Message::SearchSettled)
//! ```

use std::time::Duration;

use iced::Task;

/// Latest-value debouncer
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    /// Ticket of the most recent schedule/cancel
    latest: u64,
    /// Value waiting for its timer
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debouncer<T> {
    /// Create an idle debouncer
    pub fn new() -> Self {
        Self {
            latest: 0,
            pending: None,
        }
    }

    /// Store a value and return the ticket its timer must present
    pub fn schedule(&mut self, value: T) -> u64 {
        self.latest += 1;
        self.pending = Some(value);
        self.latest
    }

    /// Take the pending value if `ticket` is still the latest one
    pub fn settle(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.latest {
            self.pending.take()
        } else {
            log::trace!("Debouncer::settle: stale ticket {} (latest {})", ticket, self.latest);
            None
        }
    }

    /// Drop the pending value and invalidate all armed timers
    pub fn cancel(&mut self) {
        self.latest += 1;
        self.pending = None;
    }

    /// Check if a value is waiting for its timer
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Arm a debounce timer
///
/// Resolves to `on_settled(ticket)` after `delay`.
pub fn debounce_task<M>(
    ticket: u64,
    delay: Duration,
    on_settled: impl FnOnce(u64) -> M + Send + 'static,
) -> Task<M>
where
    M: Send + 'static,
{
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            ticket
        },
        on_settled,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_settles() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule("re");
        let second = debouncer.schedule("rev");

        assert_eq!(debouncer.settle(first), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.settle(second), Some("rev"));
        assert!(!debouncer.is_pending());

        // A ticket settles at most once
        assert_eq!(debouncer.settle(second), None);
    }

    #[test]
    fn test_cancel_invalidates_armed_timers() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule(String::from("revenue"));
        debouncer.cancel();

        assert_eq!(debouncer.settle(ticket), None);
        assert!(!debouncer.is_pending());
    }
}
