//! Messages and host actions for the slice adder widget

use std::time::Duration;

use slate_core::{FetchRequest, SliceId, SortKey};

/// Messages emitted by the slice adder view
#[derive(Debug, Clone)]
pub enum SliceAdderMessage {
    /// Search box contents changed (debounced before fetching)
    SearchInput(String),
    /// Debounce timer fired for a ticket
    SearchSettled(u64),
    /// Sort menu selection
    SortSelected(SortKey),
    /// Add or remove a chart from the dashboard
    ToggleSlice(SliceId),
    /// "Show only my charts" toggled
    ShowOnlyMyCharts(bool),
    /// "Create new chart" pressed
    CreateChart,
}

/// Side effects the host performs on behalf of the widget
#[derive(Debug, Clone, PartialEq)]
pub enum SliceAdderAction {
    /// Fetch slices from the source
    Fetch(FetchRequest),
    /// Replace the dashboard's chart selection
    UpdateSelection(Vec<SliceId>),
    /// Arm the search debounce timer; deliver `SearchSettled(ticket)` after `delay`
    ScheduleSearch { ticket: u64, delay: Duration },
    /// Persist the owner filter preference
    ShowOnlyMyChartsChanged(bool),
    /// Open the chart builder
    CreateChart { url: String },
}
