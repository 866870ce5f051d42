//! Search and ownership filters for slice lists

use crate::slice::{Slice, UserId};
use crate::sort::{sort_by_comparator, SortKey};

/// Check if a slice matches a search term
///
/// The term is split on whitespace and every token must appear
/// (case-insensitively) in the name, viz type or dataset name.
/// An empty term matches everything.
pub fn matches_search(slice: &Slice, search_term: &str) -> bool {
    let haystacks = [
        slice.slice_name.to_lowercase(),
        slice.viz_type.to_lowercase(),
        slice
            .datasource_name
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default(),
    ];

    search_term
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|token| haystacks.iter().any(|h| h.contains(&token)))
}

/// Check if a user owns or created a slice
pub fn is_owned_by(slice: &Slice, user_id: UserId) -> bool {
    slice.owners.contains(&user_id) || slice.created_by == Some(user_id)
}

/// Filter slices by search term (and optionally owner), then sort by key
///
/// Returns owned copies so the result can live in widget state independently
/// of the collection it was projected from.
pub fn filter_sorted_slices<'a>(
    slices: impl IntoIterator<Item = &'a Slice>,
    search_term: &str,
    sort_key: SortKey,
    owner: Option<UserId>,
) -> Vec<Slice> {
    let mut filtered: Vec<Slice> = slices
        .into_iter()
        .filter(|slice| owner.is_none_or(|user_id| is_owned_by(slice, user_id)))
        .filter(|slice| matches_search(slice, search_term))
        .cloned()
        .collect();

    filtered.sort_by(sort_by_comparator(sort_key));
    filtered
}
