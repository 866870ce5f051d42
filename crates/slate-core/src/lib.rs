//! Slate Core - Shared chart catalog library for slate dashboards
//!
//! Holds everything the chart picker needs that is not UI:
//!
//! - **Model**: `Slice` (a saved chart) and `SliceCollection`
//! - **Ordering**: `SortKey` and `sort_by_comparator`
//! - **Filtering**: search-term and owner filters
//! - **Entities**: `SliceEntities`, the fetched-slices store with loading/error state
//! - **Sources**: the `SliceSource` seam and the file-backed `CatalogSource`
//! - **Config**: generic YAML config loading/saving and picker settings

pub mod config;
pub mod entities;
pub mod filter;
pub mod slice;
pub mod sort;
pub mod source;

pub use entities::SliceEntities;
pub use filter::{filter_sorted_slices, is_owned_by, matches_search};
pub use slice::{DashboardId, Slice, SliceCollection, SliceId, UserId};
pub use sort::{compare_slices_by_key, sort_by_comparator, sort_slices, ParseSortKeyError, SortKey, DEFAULT_SORT_KEY};
pub use source::{CatalogSource, FetchRequest, SliceCatalog, SliceSource, SourceError};
