//! Slice ordering
//!
//! The modification timestamp sorts newest first; every other key sorts
//! ascending by plain value comparison (no case folding).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::slice::Slice;

/// Sort key used when the user has not picked one
pub const DEFAULT_SORT_KEY: SortKey = SortKey::ChangedOn;

/// Attribute a slice list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Chart title
    SliceName,
    /// Visualization kind
    VizType,
    /// Dataset name
    DatasourceName,
    /// Last modification time (newest first)
    #[default]
    ChangedOn,
}

impl SortKey {
    /// All sort keys in menu order
    pub const ALL: [SortKey; 4] = [
        SortKey::SliceName,
        SortKey::VizType,
        SortKey::DatasourceName,
        SortKey::ChangedOn,
    ];

    /// Attribute name as used in fetch requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SliceName => "slice_name",
            Self::VizType => "viz_type",
            Self::DatasourceName => "datasource_name",
            Self::ChangedOn => "changed_on",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::SliceName => "Name",
            Self::VizType => "Visualization type",
            Self::DatasourceName => "Dataset",
            Self::ChangedOn => "Recently modified",
        }
    }

    /// Timestamp-like keys order descending
    pub fn is_descending(&self) -> bool {
        matches!(self, Self::ChangedOn)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised sort attribute name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort key '{0}'")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

/// Compare two slices by a key, ascending
///
/// Missing dataset names compare as empty strings.
pub fn compare_slices_by_key(a: &Slice, b: &Slice, key: SortKey) -> Ordering {
    match key {
        SortKey::SliceName => a.slice_name.cmp(&b.slice_name),
        SortKey::VizType => a.viz_type.cmp(&b.viz_type),
        SortKey::DatasourceName => {
            let a_name = a.datasource_name.as_deref().unwrap_or("");
            let b_name = b.datasource_name.as_deref().unwrap_or("");
            a_name.cmp(b_name)
        }
        SortKey::ChangedOn => a.changed_on.cmp(&b.changed_on),
    }
}

/// Build a sort predicate for a key
///
/// The returned closure is pure and can be handed straight to `sort_by`.
pub fn sort_by_comparator(key: SortKey) -> impl Fn(&Slice, &Slice) -> Ordering + Copy {
    move |a, b| {
        let cmp = compare_slices_by_key(a, b, key);
        if key.is_descending() {
            cmp.reverse()
        } else {
            cmp
        }
    }
}

/// Sort slices in place by a key (stable)
pub fn sort_slices(slices: &mut [Slice], key: SortKey) {
    slices.sort_by(sort_by_comparator(key));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Slice> {
        vec![
            Slice::new(127, "Region Filter", "filter_box", 1_529_459_560_000)
                .with_datasource("unicode_test"),
            Slice::new(128, "Energy Sankey", "sankey", 1_529_459_580_000)
                .with_datasource("energy_usage"),
            Slice::new(129, "birth names", "table", 1_529_459_500_000),
            Slice::new(130, "Avg Daily Births", "big_number", 1_529_459_600_000)
                .with_datasource("birth_names"),
        ]
    }

    #[test]
    fn test_sort_by_timestamp_descending() {
        let mut slices = fixture();
        slices.sort_by(sort_by_comparator(SortKey::ChangedOn));

        let timestamps: Vec<i64> = slices.iter().map(|s| s.changed_on).collect();
        assert!(timestamps.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_sort_by_slice_name_matches_plain_sort() {
        let mut slices = fixture();
        slices.sort_by(sort_by_comparator(SortKey::SliceName));
        let sorted_names: Vec<&str> = slices.iter().map(|s| s.slice_name.as_str()).collect();

        let mut expected: Vec<String> = fixture().into_iter().map(|s| s.slice_name).collect();
        expected.sort();

        assert_eq!(sorted_names, expected);
        // Plain comparison: uppercase sorts before lowercase
        assert_eq!(sorted_names.last(), Some(&"birth names"));
    }

    #[test]
    fn test_missing_datasource_sorts_first() {
        let mut slices = fixture();
        sort_slices(&mut slices, SortKey::DatasourceName);
        assert_eq!(slices[0].id.0, 129);
        assert_eq!(slices[1].datasource_name.as_deref(), Some("birth_names"));
    }

    #[test]
    fn test_sort_key_parse_and_display() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
            assert_eq!(key.to_string(), key.as_str());
        }
        assert_eq!(
            "owner".parse::<SortKey>(),
            Err(ParseSortKeyError("owner".to_string()))
        );
        assert_eq!(SortKey::default(), DEFAULT_SORT_KEY);
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<&str> = SortKey::ALL.iter().map(SortKey::label).collect();
        assert_eq!(
            labels,
            vec!["Name", "Visualization type", "Dataset", "Recently modified"]
        );
    }

    #[test]
    fn test_sort_key_serde_uses_attribute_names() {
        let yaml = serde_yaml::to_string(&SortKey::VizType).unwrap();
        assert_eq!(yaml.trim(), "viz_type");
        let key: SortKey = serde_yaml::from_str("changed_on").unwrap();
        assert_eq!(key, SortKey::ChangedOn);
    }
}
