//! Application messages for slate-board

use slate_core::Slice;
use slate_widgets::SliceAdderMessage;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Chart picker message
    SliceAdder(SliceAdderMessage),
    /// Background slice fetch completed
    SlicesFetched(Result<Vec<Slice>, String>),
    /// Enter/leave edit mode
    ToggleEditMode,
    /// Background config save completed
    ConfigSaved(Result<(), String>),
}
