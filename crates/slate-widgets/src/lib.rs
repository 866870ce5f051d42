//! Shared UI widgets for slate dashboard applications
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: Pure data plus message handling (`SliceAdderState`)
//! - **View functions**: Take state, return `Element<Message>`
//! - **Actions**: Side effects a widget asks its host to perform
//!   (fetches, selection updates, timers) are returned from `handle_message`
//!   instead of being run inside the widget
//!
//! ## Widgets
//!
//! - `slice_adder`: Searchable, sortable chart picker for dashboards

pub mod debounce;
pub mod slice_adder;
pub mod theme;

pub use debounce::{debounce_task, Debouncer};
pub use slice_adder::{
    slice_adder_view, SliceAdderAction, SliceAdderBody, SliceAdderMessage, SliceAdderProps,
    SliceAdderState, StateUpdate, DEFAULT_SORT_KEY,
};
