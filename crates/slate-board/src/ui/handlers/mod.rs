//! Message handlers for BoardApp
//!
//! Handlers receive `&mut BoardApp` and return `Task<Message>`.

pub mod fetch;
pub mod settings;
pub mod slice_adder;
