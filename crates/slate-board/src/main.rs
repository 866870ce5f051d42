//! Slate Board - dashboard editor with a searchable chart picker
//!
//! Entry point for the GUI application. It:
//! 1. Loads the board config (~/.config/slate-board/config.yaml)
//! 2. Applies command line overrides
//! 3. Launches the iced application on the chart catalog
//!
//! ## Command line flags
//!
//! - `--catalog <path>`: chart catalog file (YAML or JSON)
//! - `--user <id>`: user the picker fetches charts for
//! - `--dashboard <id>`: dashboard identifier
//! - `--view`: open read-only

mod cli;
mod config;
mod ui;

use std::cell::RefCell;

use iced::{Size, Task};

use cli::CliArgs;
use ui::{BoardApp, Message};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("slate-board: {:#}", e);
            eprintln!("usage: slate-board [--catalog <path>] [--user <id>] [--dashboard <id>] [--view]");
            std::process::exit(2);
        }
    };

    log::info!("slate-board starting up");

    let config_path = config::default_config_path();
    let saved_config: config::BoardConfig = config::load_config(&config_path);

    let effective = cli.applied_to(&saved_config);
    log::info!(
        "Dashboard {} for user {} ({} charts)",
        effective.dashboard.id,
        effective.user_id,
        effective.dashboard.charts.len()
    );

    // iced requires a Fn boot closure; the config is only taken once
    let boot_state = RefCell::new(Some((saved_config, cli, config_path)));

    iced::application(
        move || match boot_state.borrow_mut().take() {
            Some((saved, overrides, path)) => BoardApp::boot(saved, overrides, path),
            None => BoardApp::boot(
                config::BoardConfig::default(),
                CliArgs::default(),
                config::default_config_path(),
            ),
        },
        update,
        view,
    )
    .title(title)
    .theme(theme)
    .window_size(Size::new(1200.0, 800.0))
    .run()
}

/// Update function for iced
fn update(app: &mut BoardApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &BoardApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Title function for iced
fn title(app: &BoardApp) -> String {
    app.title()
}

/// Theme function for iced
fn theme(app: &BoardApp) -> iced::Theme {
    app.theme()
}
