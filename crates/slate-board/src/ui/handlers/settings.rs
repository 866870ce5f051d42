//! Config persistence handler

use iced::Task;

use crate::config::{self, BoardConfig};
use crate::ui::app::BoardApp;
use crate::ui::message::Message;

/// Apply a setting change to the running app and to the saved config,
/// then save
///
/// Command line overrides live only in `app.config`, so they are never
/// written back.
pub fn persist(app: &mut BoardApp, change: impl Fn(&mut BoardConfig)) -> Task<Message> {
    change(&mut app.config);
    change(&mut app.saved_config);
    save(app)
}

/// Save the on-disk config in the background
pub fn save(app: &BoardApp) -> Task<Message> {
    let config = app.saved_config.clone();
    let config_path = app.config_path.clone();
    Task::perform(
        async move { config::save_config(&config, &config_path).map_err(|e| format!("{:#}", e)) },
        Message::ConfigSaved,
    )
}

/// Handle save completion
pub fn saved(app: &mut BoardApp, result: Result<(), String>) -> Task<Message> {
    if let Err(e) = result {
        log::warn!("settings: config save failed: {}", e);
        app.status = format!("Settings save failed: {}", e);
    }
    Task::none()
}
