//! iced user interface for slate-board

pub mod app;
pub mod handlers;
pub mod message;
mod dashboard_view;

pub use app::BoardApp;
pub use message::Message;
