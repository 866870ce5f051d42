//! Fetched slice store
//!
//! `SliceEntities` owns the slice collection the picker reads from together
//! with the number of fetches in flight, the last fetch error and a
//! last-updated marker.
//! The picker compares markers to decide when to re-derive its list, so the
//! marker only ever moves forward.

use std::sync::Arc;

use crate::slice::{Slice, SliceCollection};

/// Prefix for fetch failures shown to the user
pub const FETCH_ERROR_PREFIX: &str = "Could not fetch all saved charts";

/// Slice entity store
#[derive(Debug, Clone, Default)]
pub struct SliceEntities {
    /// All slices fetched so far (shared with widget props)
    pub slices: Arc<SliceCollection>,
    /// Fetches started but not yet finished
    in_flight: usize,
    /// Last fetch error (empty = none)
    pub error_message: String,
    /// Marker bumped on every successful fetch (0 = never fetched)
    pub last_updated: u64,
}

impl SliceEntities {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started
    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
    }

    /// Check if any fetch is still running
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Merge a successful fetch result
    ///
    /// `now_ms` becomes the new marker unless it would not advance it, in
    /// which case the marker is bumped by one.
    pub fn fetch_succeeded(&mut self, slices: Vec<Slice>, now_ms: u64) {
        let count = slices.len();
        Arc::make_mut(&mut self.slices).merge(slices);

        self.last_updated = now_ms.max(self.last_updated + 1);
        self.finish_fetch();
        self.error_message.clear();

        log::debug!(
            "fetch_succeeded: merged {} slices ({} total), marker {}",
            count,
            self.slices.len(),
            self.last_updated
        );
    }

    /// Record a failed fetch
    pub fn fetch_failed(&mut self, error: &str) {
        log::warn!("fetch_failed: {}", error);
        self.finish_fetch();
        self.error_message = format!("{}: {}", FETCH_ERROR_PREFIX, error);
    }

    /// Check if any fetch has completed
    pub fn has_fetched(&self) -> bool {
        self.last_updated > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_lifecycle() {
        let mut entities = SliceEntities::new();
        assert!(!entities.has_fetched());

        entities.begin_fetch();
        assert!(entities.is_loading());

        entities.fetch_succeeded(vec![Slice::new(1, "Revenue", "line", 0)], 1_000);
        assert!(!entities.is_loading());
        assert_eq!(entities.last_updated, 1_000);
        assert_eq!(entities.slices.len(), 1);
        assert!(entities.has_fetched());
    }

    #[test]
    fn test_marker_always_advances() {
        let mut entities = SliceEntities::new();
        entities.fetch_succeeded(Vec::new(), 5_000);
        entities.fetch_succeeded(Vec::new(), 5_000);
        assert_eq!(entities.last_updated, 5_001);
        entities.fetch_succeeded(Vec::new(), 10);
        assert_eq!(entities.last_updated, 5_002);
    }

    #[test]
    fn test_failure_sets_message_and_success_clears_it() {
        let mut entities = SliceEntities::new();
        entities.begin_fetch();
        entities.fetch_failed("catalog missing");

        assert!(!entities.is_loading());
        assert_eq!(
            entities.error_message,
            "Could not fetch all saved charts: catalog missing"
        );

        entities.fetch_succeeded(Vec::new(), 1);
        assert!(entities.error_message.is_empty());
    }

    #[test]
    fn test_overlapping_fetches_stay_loading_until_all_finish() {
        let mut entities = SliceEntities::new();
        entities.begin_fetch();
        entities.begin_fetch();

        entities.fetch_succeeded(vec![Slice::new(1, "Revenue", "line", 0)], 1);
        assert!(entities.is_loading());

        entities.fetch_failed("timeout");
        assert!(!entities.is_loading());

        // Stray completions never underflow
        entities.fetch_succeeded(Vec::new(), 2);
        assert!(!entities.is_loading());
        entities.begin_fetch();
        assert!(entities.is_loading());
    }

    #[test]
    fn test_merge_does_not_touch_shared_snapshots() {
        let mut entities = SliceEntities::new();
        entities.fetch_succeeded(vec![Slice::new(1, "Revenue", "line", 0)], 1);
        let snapshot = Arc::clone(&entities.slices);

        entities.fetch_succeeded(vec![Slice::new(2, "Churn", "line", 0)], 2);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(entities.slices.len(), 2);
    }
}
