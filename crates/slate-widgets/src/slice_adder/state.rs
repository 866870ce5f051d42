//! State and message handling for the slice adder widget

use std::cmp::Ordering;
use std::collections::HashSet;
use std::time::Duration;

use slate_core::config::PickerConfig;
use slate_core::{filter_sorted_slices, sort_by_comparator, FetchRequest, Slice, SliceId, SortKey};

use super::create_chart_url;
use super::message::{SliceAdderAction, SliceAdderMessage};
use super::props::SliceAdderProps;
use crate::debounce::Debouncer;

/// One batch of derived-state changes
///
/// A field is `Some` only when that piece of state was recomputed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    pub filtered_slices: Option<Vec<Slice>>,
    pub selected_slice_ids_set: Option<HashSet<SliceId>>,
}

impl StateUpdate {
    /// Names of the fields this batch touches
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.filtered_slices.is_some() {
            keys.push("filtered_slices");
        }
        if self.selected_slice_ids_set.is_some() {
            keys.push("selected_slice_ids_set");
        }
        keys
    }

    /// Check if the batch changes nothing
    pub fn is_empty(&self) -> bool {
        self.filtered_slices.is_none() && self.selected_slice_ids_set.is_none()
    }
}

/// What the panel body shows below the controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliceAdderBody<'a> {
    /// First fetch still running
    Loading,
    /// Fetch error, shown verbatim
    Error(&'a str),
    /// Nothing matches (`searching` = a search term is active)
    Empty { searching: bool },
    /// Charts to list
    ChartList(&'a [Slice]),
}

impl<'a> SliceAdderBody<'a> {
    /// Text shown in place of the list, if any
    pub fn placeholder_text(&self) -> Option<&'a str> {
        match self {
            Self::Loading => Some("Loading charts..."),
            Self::Error(message) => Some(message),
            Self::Empty { searching: true } => Some("No charts match your search"),
            Self::Empty { searching: false } => Some("No charts available"),
            Self::ChartList(_) => None,
        }
    }
}

/// State for the slice adder widget
#[derive(Debug, Clone)]
pub struct SliceAdderState {
    /// Sorted/filtered projection of the latest collection
    pub filtered_slices: Vec<Slice>,
    /// Mirror of `props.selected_slice_ids`
    pub selected_slice_ids_set: HashSet<SliceId>,
    /// Search term the list is filtered by (last settled search)
    pub search_term: String,
    /// Search box contents (may be ahead of `search_term` while debouncing)
    pub search_input: String,
    /// Current sort key
    pub sort_by: SortKey,
    /// Only list charts the user owns or created
    pub show_only_my_charts: bool,
    /// Latest props seen
    props: SliceAdderProps,
    search_debounce: Debouncer<String>,
    debounce_delay: Duration,
    mounted: bool,
}

impl SliceAdderState {
    /// Create state with default picker settings
    pub fn new(props: SliceAdderProps) -> Self {
        Self::with_config(props, &PickerConfig::default())
    }

    /// Create state with explicit picker settings
    pub fn with_config(props: SliceAdderProps, config: &PickerConfig) -> Self {
        let mut state = Self {
            filtered_slices: Vec::new(),
            selected_slice_ids_set: props.selected_slice_ids.iter().copied().collect(),
            search_term: String::new(),
            search_input: String::new(),
            sort_by: config.default_sort,
            show_only_my_charts: config.show_only_my_charts,
            props,
            search_debounce: Debouncer::new(),
            debounce_delay: config.search_debounce(),
            mounted: false,
        };
        state.filtered_slices = state.filter_sorted(&state.props);
        state
    }

    /// Sort predicate for a key (newest first for `changed_on`, ascending otherwise)
    pub fn sort_by_comparator(key: SortKey) -> impl Fn(&Slice, &Slice) -> Ordering + Copy {
        sort_by_comparator(key)
    }

    /// Latest props
    pub fn props(&self) -> &SliceAdderProps {
        &self.props
    }

    /// First-display hook: request the slice list once
    ///
    /// Returns `None` on every call after the first.
    pub fn mount(&mut self) -> Option<SliceAdderAction> {
        if self.mounted {
            return None;
        }
        self.mounted = true;

        log::debug!(
            "SliceAdder::mount: fetching slices for user {}",
            self.props.user_id
        );
        Some(SliceAdderAction::Fetch(self.fetch_request()))
    }

    /// Props-change hook
    ///
    /// Recomputes `filtered_slices` when the last-updated marker moved and
    /// `selected_slice_ids_set` when the selection changed, applying both in
    /// a single batch. Returns the applied batch, or `None` if neither input
    /// changed.
    pub fn receive_props(&mut self, next: SliceAdderProps) -> Option<StateUpdate> {
        let mut update = StateUpdate::default();

        if next.last_updated != self.props.last_updated {
            update.filtered_slices = Some(self.filter_sorted(&next));
        }
        if next.selected_slice_ids != self.props.selected_slice_ids {
            update.selected_slice_ids_set = Some(next.selected_slice_ids.iter().copied().collect());
        }
        self.props = next;

        if update.is_empty() {
            return None;
        }

        log::debug!("SliceAdder::receive_props: updating {:?}", update.keys());
        self.set_state(update.clone());
        Some(update)
    }

    /// Handle a message from the view
    pub fn handle_message(&mut self, message: SliceAdderMessage) -> Option<SliceAdderAction> {
        match message {
            SliceAdderMessage::SearchInput(query) => {
                self.search_input = query.clone();
                let ticket = self.search_debounce.schedule(query);
                Some(SliceAdderAction::ScheduleSearch {
                    ticket,
                    delay: self.debounce_delay,
                })
            }
            SliceAdderMessage::SearchSettled(ticket) => self
                .search_debounce
                .settle(ticket)
                .map(|term| self.handle_change(term)),
            SliceAdderMessage::SortSelected(key) => Some(self.handle_select(key)),
            SliceAdderMessage::ToggleSlice(id) => self.toggle_slice(id),
            SliceAdderMessage::ShowOnlyMyCharts(enabled) => self.set_show_only_my_charts(enabled),
            SliceAdderMessage::CreateChart => Some(SliceAdderAction::CreateChart {
                url: create_chart_url(self.props.dashboard_id),
            }),
        }
    }

    /// Apply a settled search term and request matching slices
    pub fn handle_change(&mut self, search_term: String) -> SliceAdderAction {
        self.search_input = search_term.clone();
        self.search_term = search_term;
        self.filtered_slices = self.filter_sorted(&self.props);

        SliceAdderAction::Fetch(self.fetch_request())
    }

    /// Switch the sort key, clearing the search, and request slices
    pub fn handle_select(&mut self, sort_key: SortKey) -> SliceAdderAction {
        self.search_debounce.cancel();
        self.search_term.clear();
        self.search_input.clear();
        self.sort_by = sort_key;
        self.filtered_slices = self.filter_sorted(&self.props);

        SliceAdderAction::Fetch(self.fetch_request())
    }

    /// Add a chart to the dashboard, or remove it if already added
    ///
    /// Only allowed in edit mode. Added charts go to the end of the layout.
    pub fn toggle_slice(&mut self, id: SliceId) -> Option<SliceAdderAction> {
        if !self.props.edit_mode {
            log::debug!("SliceAdder::toggle_slice: ignoring {} outside edit mode", id);
            return None;
        }

        let mut selection = self.props.selected_slice_ids.clone();
        if self.is_selected(id) {
            selection.retain(|selected| *selected != id);
        } else {
            selection.push(id);
        }
        Some(SliceAdderAction::UpdateSelection(selection))
    }

    /// Toggle the owner filter
    pub fn set_show_only_my_charts(&mut self, enabled: bool) -> Option<SliceAdderAction> {
        if self.show_only_my_charts == enabled {
            return None;
        }
        self.show_only_my_charts = enabled;
        self.filtered_slices = self.filter_sorted(&self.props);
        Some(SliceAdderAction::ShowOnlyMyChartsChanged(enabled))
    }

    /// Check if a chart is already on the dashboard
    pub fn is_selected(&self, id: SliceId) -> bool {
        self.selected_slice_ids_set.contains(&id)
    }

    /// What to show below the controls
    pub fn body(&self) -> SliceAdderBody<'_> {
        if !self.props.error_message.is_empty() {
            SliceAdderBody::Error(&self.props.error_message)
        } else if !self.filtered_slices.is_empty() {
            SliceAdderBody::ChartList(&self.filtered_slices)
        } else if self.props.is_loading {
            SliceAdderBody::Loading
        } else {
            SliceAdderBody::Empty {
                searching: !self.search_term.is_empty(),
            }
        }
    }

    fn fetch_request(&self) -> FetchRequest {
        FetchRequest::new(self.props.user_id, self.search_term.clone(), self.sort_by)
    }

    fn filter_sorted(&self, props: &SliceAdderProps) -> Vec<Slice> {
        let owner = self.show_only_my_charts.then_some(props.user_id);
        filter_sorted_slices(props.slices.values(), &self.search_term, self.sort_by, owner)
    }

    fn set_state(&mut self, update: StateUpdate) {
        if let Some(filtered) = update.filtered_slices {
            self.filtered_slices = filtered;
        }
        if let Some(selected) = update.selected_slice_ids_set {
            self.selected_slice_ids_set = selected;
        }
    }
}
