//! Saved chart ("slice") model
//!
//! A `Slice` is a saved visualization definition. The picker never mutates
//! slices; they are owned by whatever source fetched them and replaced
//! wholesale when a newer fetch arrives.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{BTreeMap, Values};
use std::fmt;

/// User identifier (owner / creator of charts)
pub type UserId = u64;

/// Dashboard identifier
pub type DashboardId = u64;

/// Unique identifier for a saved chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliceId(pub u64);

impl fmt::Display for SliceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SliceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A saved chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Unique identifier
    #[serde(alias = "slice_id")]
    pub id: SliceId,
    /// Display title
    pub slice_name: String,
    /// Last modification time (milliseconds since the Unix epoch)
    pub changed_on: i64,
    /// Visualization kind (e.g. "table", "line", "big_number")
    pub viz_type: String,
    /// Dataset the chart queries, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource_name: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Users allowed to edit the chart
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<UserId>,
    /// User who created the chart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
}

impl Slice {
    /// Create a new slice with the required fields
    pub fn new(
        id: u64,
        slice_name: impl Into<String>,
        viz_type: impl Into<String>,
        changed_on: i64,
    ) -> Self {
        Self {
            id: SliceId(id),
            slice_name: slice_name.into(),
            changed_on,
            viz_type: viz_type.into(),
            datasource_name: None,
            description: None,
            owners: Vec::new(),
            created_by: None,
        }
    }

    /// Set the dataset name
    pub fn with_datasource(mut self, name: impl Into<String>) -> Self {
        self.datasource_name = Some(name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the owners
    pub fn with_owners(mut self, owners: impl IntoIterator<Item = UserId>) -> Self {
        self.owners = owners.into_iter().collect();
        self
    }

    /// Set the creator
    pub fn with_created_by(mut self, user_id: UserId) -> Self {
        self.created_by = Some(user_id);
        self
    }

    /// Dataset name or "-" when unknown
    pub fn datasource_label(&self) -> &str {
        self.datasource_name.as_deref().unwrap_or("-")
    }

    /// Description to show under the chart, if it has a non-blank one
    pub fn summary(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Human readable age, e.g. "Modified 3 days ago"
    pub fn modified_label(&self, now_ms: i64) -> String {
        format!("Modified {}", humanize_age(now_ms.saturating_sub(self.changed_on)))
    }
}

/// Format an age in milliseconds as "<n> <unit>s ago"
fn humanize_age(age_ms: i64) -> String {
    let age = chrono::Duration::milliseconds(age_ms.max(0));

    let (amount, unit) = if age.num_seconds() < 45 {
        return "a few seconds ago".to_string();
    } else if age.num_minutes() < 60 {
        (age.num_minutes().max(1), "minute")
    } else if age.num_hours() < 24 {
        (age.num_hours(), "hour")
    } else if age.num_days() < 30 {
        (age.num_days(), "day")
    } else if age.num_days() < 365 {
        (age.num_days() / 30, "month")
    } else {
        (age.num_days() / 365, "year")
    };

    if amount == 1 {
        let article = if unit == "hour" { "an" } else { "a" };
        format!("{} {} ago", article, unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}

/// Mapping from slice id to slice
///
/// Keys are unique. Iteration is in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceCollection {
    slices: BTreeMap<SliceId, Slice>,
}

impl SliceCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a slice, replacing any previous slice with the same id
    pub fn insert(&mut self, slice: Slice) -> Option<Slice> {
        self.slices.insert(slice.id, slice)
    }

    /// Merge fetched slices into the collection
    ///
    /// New ids are added and existing ids are replaced; nothing is removed.
    pub fn merge(&mut self, slices: impl IntoIterator<Item = Slice>) {
        for slice in slices {
            self.insert(slice);
        }
    }

    /// Look up a slice by id
    pub fn get(&self, id: SliceId) -> Option<&Slice> {
        self.slices.get(&id)
    }

    /// Check if a slice id is present
    pub fn contains(&self, id: SliceId) -> bool {
        self.slices.contains_key(&id)
    }

    /// Number of slices
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Iterate over slices in id order
    pub fn values(&self) -> Values<'_, SliceId, Slice> {
        self.slices.values()
    }
}

impl FromIterator<Slice> for SliceCollection {
    fn from_iter<I: IntoIterator<Item = Slice>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.merge(iter);
        collection
    }
}

impl<'a> IntoIterator for &'a SliceCollection {
    type Item = &'a Slice;
    type IntoIter = Values<'a, SliceId, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
