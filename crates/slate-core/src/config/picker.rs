//! Chart picker settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::source::DEFAULT_PAGE_SIZE;
use crate::sort::SortKey;

/// Settings for the chart picker panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Quiet period after the last keystroke before a search is sent
    pub search_debounce_ms: u64,
    /// Maximum slices returned per fetch
    pub page_size: usize,
    /// Ordering used when the picker opens
    pub default_sort: SortKey,
    /// Only list charts the current user owns or created
    pub show_only_my_charts: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortKey::ChangedOn,
            show_only_my_charts: false,
        }
    }
}

impl PickerConfig {
    /// Debounce delay as a `Duration`
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
