//! Slice sources
//!
//! A `SliceSource` executes the picker's fetch requests. Sources apply the
//! same search filter and ordering as the picker so the first page they
//! return is already the page the user asked for.

mod catalog;
mod error;

pub use catalog::{CatalogSource, SliceCatalog, DEFAULT_PAGE_SIZE};
pub use error::SourceError;

use crate::slice::{Slice, UserId};
use crate::sort::SortKey;

/// Parameters of a slice fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// User the fetch is made for
    pub user_id: UserId,
    /// Search term (empty = no filter)
    pub search_term: String,
    /// Requested ordering
    pub sort_key: SortKey,
}

impl FetchRequest {
    /// Create a fetch request
    pub fn new(user_id: UserId, search_term: impl Into<String>, sort_key: SortKey) -> Self {
        Self {
            user_id,
            search_term: search_term.into(),
            sort_key,
        }
    }
}

/// Something slices can be fetched from
pub trait SliceSource: Send + Sync {
    /// Fetch the slices matching a request, already ordered
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<Slice>, SourceError>;
}
