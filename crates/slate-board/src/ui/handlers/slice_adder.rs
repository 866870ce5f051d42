//! Chart picker handler
//!
//! Executes the actions the picker asks for: fetches, dashboard selection
//! changes, debounce timers and preference saves.

use iced::Task;
use slate_widgets::{debounce_task, SliceAdderAction, SliceAdderMessage};

use super::{fetch, settings};
use crate::ui::app::BoardApp;
use crate::ui::message::Message;

/// Handle a picker message
pub fn handle(app: &mut BoardApp, msg: SliceAdderMessage) -> Task<Message> {
    let action = app.slice_adder.handle_message(msg);
    run_action(app, action)
}

/// Show the picker; the first call triggers the initial fetch
pub fn mount(app: &mut BoardApp) -> Task<Message> {
    let action = app.slice_adder.mount();
    run_action(app, action)
}

/// Execute a picker action
pub fn run_action(app: &mut BoardApp, action: Option<SliceAdderAction>) -> Task<Message> {
    let Some(action) = action else {
        return Task::none();
    };

    match action {
        SliceAdderAction::Fetch(request) => fetch::start(app, request),
        SliceAdderAction::ScheduleSearch { ticket, delay } => debounce_task(ticket, delay, |ticket| {
            Message::SliceAdder(SliceAdderMessage::SearchSettled(ticket))
        }),
        SliceAdderAction::UpdateSelection(charts) => {
            log::info!("slice_adder: dashboard now has {} charts", charts.len());
            let task = settings::persist(app, |config| config.dashboard.charts = charts.clone());
            app.sync_slice_adder();
            task
        }
        SliceAdderAction::ShowOnlyMyChartsChanged(enabled) => {
            settings::persist(app, |config| config.picker.show_only_my_charts = enabled)
        }
        SliceAdderAction::CreateChart { url } => {
            log::info!("slice_adder: chart builder requested at {}", url);
            app.status = format!("Build a new chart at {}", url);
            Task::none()
        }
    }
}
