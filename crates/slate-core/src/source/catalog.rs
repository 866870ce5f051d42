//! File-backed chart catalog
//!
//! The catalog is a YAML or JSON document listing saved charts:
//!
//! ```yaml
//! slices:
//!   - id: 127
//!     slice_name: Region Filter
//!     changed_on: 1529459560000
//!     viz_type: filter_box
//!     datasource_name: unicode_test
//!     owners: [1]
//! ```
//!
//! The file is re-read on every fetch so edits show up on the next search.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{FetchRequest, SliceSource, SourceError};
use crate::filter::filter_sorted_slices;
use crate::slice::Slice;

/// Maximum number of slices returned per fetch
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// Catalog serialization, chosen by file extension
#[derive(Debug, Clone, Copy)]
enum CatalogFormat {
    Yaml,
    Json,
}

/// On-disk catalog document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceCatalog {
    #[serde(default)]
    pub slices: Vec<Slice>,
}

impl SliceCatalog {
    /// Load a catalog, choosing the parser by file extension
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let format = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => CatalogFormat::Yaml,
            Some("json") => CatalogFormat::Json,
            _ => {
                return Err(SourceError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match format {
            CatalogFormat::Yaml => serde_yaml::from_str(&contents).map_err(|source| SourceError::Yaml {
                path: path.to_path_buf(),
                source,
            }),
            CatalogFormat::Json => serde_json::from_str(&contents).map_err(|source| SourceError::Json {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Slice source reading a catalog file
#[derive(Debug, Clone)]
pub struct CatalogSource {
    path: PathBuf,
    page_size: usize,
}

impl CatalogSource {
    /// Create a source for a catalog file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the maximum number of slices per fetch (at least 1)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Catalog file location
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SliceSource for CatalogSource {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<Slice>, SourceError> {
        log::debug!(
            "CatalogSource::fetch: user={} term={:?} sort={}",
            request.user_id,
            request.search_term,
            request.sort_key
        );

        let catalog = SliceCatalog::load(&self.path)?;
        let mut slices =
            filter_sorted_slices(&catalog.slices, &request.search_term, request.sort_key, None);
        slices.truncate(self.page_size);

        log::info!(
            "CatalogSource::fetch: {} of {} slices from {:?}",
            slices.len(),
            catalog.slices.len(),
            self.path
        );
        Ok(slices)
    }
}
