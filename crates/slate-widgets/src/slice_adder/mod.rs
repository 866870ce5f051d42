//! Slice Adder Widget
//!
//! Side panel of a dashboard in edit mode listing saved charts ("slices")
//! that can be added to the dashboard. Provides:
//! - Debounced search box (each settled search is also sent to the slice source)
//! - Sort menu (name, viz type, dataset, most recent)
//! - "Show only my charts" filter
//! - Chart list with "Added" badges for charts already on the dashboard
//! - Error / loading / empty placeholders
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  [+ Create new chart]                         │
//! │  [Filter your charts        ] [Sort by ▾]     │
//! │  [x] Show only my charts                      │
//! ├───────────────────────────────────────────────┤
//! │  Chart name                        [Added]    │
//! │  viz type · dataset · Modified 2 days ago     │
//! │  ...                                          │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The host owns the slice collection. It builds `SliceAdderProps` from its
//! store, calls `mount` once, feeds every new props value to
//! `receive_props`, and executes the `SliceAdderAction`s returned by the
//! state's handlers.

mod message;
mod props;
mod state;
mod view;

pub use message::{SliceAdderAction, SliceAdderMessage};
pub use props::SliceAdderProps;
pub use state::{SliceAdderBody, SliceAdderState, StateUpdate};
pub use view::slice_adder_view;

pub use slate_core::DEFAULT_SORT_KEY;

/// Route of the chart builder, pre-bound to a dashboard
pub fn create_chart_url(dashboard_id: slate_core::DashboardId) -> String {
    format!("/chart/add?dashboard_id={}", dashboard_id)
}
