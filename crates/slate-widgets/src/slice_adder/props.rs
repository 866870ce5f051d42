//! Inputs supplied to the slice adder by its host

use std::sync::Arc;

use slate_core::{DashboardId, SliceCollection, SliceEntities, SliceId, UserId};

/// Host-supplied inputs
///
/// Cheap to clone: the collection is shared.
#[derive(Debug, Clone, Default)]
pub struct SliceAdderProps {
    /// Every slice fetched so far
    pub slices: Arc<SliceCollection>,
    /// Charts currently on the dashboard, in layout order
    pub selected_slice_ids: Vec<SliceId>,
    /// Current user
    pub user_id: UserId,
    /// Dashboard being edited
    pub dashboard_id: DashboardId,
    /// Charts can only be added/removed in edit mode
    pub edit_mode: bool,
    /// Fetch error to display (empty = none)
    pub error_message: String,
    /// A fetch is in flight
    pub is_loading: bool,
    /// Marker that changes whenever `slices` was refreshed
    pub last_updated: u64,
}

impl SliceAdderProps {
    /// Build props from the slice store plus dashboard context
    pub fn from_entities(
        entities: &SliceEntities,
        selected_slice_ids: Vec<SliceId>,
        user_id: UserId,
        dashboard_id: DashboardId,
        edit_mode: bool,
    ) -> Self {
        Self {
            slices: Arc::clone(&entities.slices),
            selected_slice_ids,
            user_id,
            dashboard_id,
            edit_mode,
            error_message: entities.error_message.clone(),
            is_loading: entities.is_loading(),
            last_updated: entities.last_updated,
        }
    }
}
