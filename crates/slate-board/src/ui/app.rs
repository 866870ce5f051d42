//! Main iced application for slate-board
//!
//! Owns the slice entity store and the dashboard layout, and hosts the chart
//! picker panel while the dashboard is in edit mode:
//!
//! ```text
//! ┌────────────────────────────────┬──────────────────┐
//! │ Dashboard title   [Edit/Done]  │  Chart picker    │
//! │ ┌────────┐ ┌────────┐          │  (edit mode)     │
//! │ │ chart  │ │ chart  │ ...      │                  │
//! │ └────────┘ └────────┘          │                  │
//! ├────────────────────────────────┴──────────────────┤
//! │ status                                            │
//! └───────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{column, container, row, text};
use iced::{Element, Fill, Length, Task, Theme};

use slate_core::{CatalogSource, SliceEntities, SliceSource};
use slate_widgets::{slice_adder_view, SliceAdderProps, SliceAdderState};

use super::dashboard_view::dashboard_view;
use super::handlers;
use super::message::Message;
use crate::cli::CliArgs;
use crate::config::BoardConfig;

/// Application state
pub struct BoardApp {
    /// Effective configuration: the saved config plus command line overrides
    /// (dashboard layout lives in `config.dashboard.charts`)
    pub config: BoardConfig,
    /// Configuration as stored on disk, without command line overrides
    pub saved_config: BoardConfig,
    /// Where `saved_config` is written
    pub config_path: PathBuf,
    /// Where slices are fetched from
    pub source: Arc<dyn SliceSource>,
    /// Fetched slices with loading/error state
    pub entities: SliceEntities,
    /// Dashboard is being edited (picker visible)
    pub edit_mode: bool,
    /// Chart picker state
    pub slice_adder: SliceAdderState,
    /// Status bar text
    pub status: String,
}

impl BoardApp {
    /// Create an application instance
    pub fn new(
        saved_config: BoardConfig,
        overrides: &CliArgs,
        config_path: PathBuf,
        source: Arc<dyn SliceSource>,
    ) -> Self {
        let config = overrides.applied_to(&saved_config);
        let entities = SliceEntities::new();
        let edit_mode = config.dashboard.start_in_edit_mode;
        let props = SliceAdderProps::from_entities(
            &entities,
            config.dashboard.charts.clone(),
            config.user_id,
            config.dashboard.id,
            edit_mode,
        );
        let slice_adder = SliceAdderState::with_config(props, &config.picker);

        Self {
            config,
            saved_config,
            config_path,
            source,
            entities,
            edit_mode,
            slice_adder,
            status: String::new(),
        }
    }

    /// Boot function: build the app on a catalog source and mount the picker
    /// if the dashboard opens in edit mode
    pub fn boot(
        saved_config: BoardConfig,
        overrides: CliArgs,
        config_path: PathBuf,
    ) -> (Self, Task<Message>) {
        let effective = overrides.applied_to(&saved_config);
        let source = CatalogSource::new(effective.catalog_path)
            .with_page_size(effective.picker.page_size);
        log::info!("Using chart catalog {:?}", source.path());

        let mut app = Self::new(saved_config, &overrides, config_path, Arc::new(source));
        let task = if app.edit_mode {
            handlers::slice_adder::mount(&mut app)
        } else {
            Task::none()
        };
        (app, task)
    }

    /// Props for the picker from the current store and layout
    pub fn slice_adder_props(&self) -> SliceAdderProps {
        SliceAdderProps::from_entities(
            &self.entities,
            self.config.dashboard.charts.clone(),
            self.config.user_id,
            self.config.dashboard.id,
            self.edit_mode,
        )
    }

    /// Push fresh props into the picker
    pub fn sync_slice_adder(&mut self) {
        let props = self.slice_adder_props();
        if let Some(update) = self.slice_adder.receive_props(props) {
            log::debug!("sync_slice_adder: picker updated {:?}", update.keys());
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SliceAdder(msg) => handlers::slice_adder::handle(self, msg),
            Message::SlicesFetched(result) => handlers::fetch::complete(self, result),
            Message::ToggleEditMode => {
                self.edit_mode = !self.edit_mode;
                self.sync_slice_adder();
                if self.edit_mode {
                    handlers::slice_adder::mount(self)
                } else {
                    Task::none()
                }
            }
            Message::ConfigSaved(result) => handlers::settings::saved(self, result),
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let dashboard = container(dashboard_view(self))
            .width(Length::FillPortion(3))
            .height(Fill);

        let main_content: Element<'_, Message> = if self.edit_mode {
            let picker = container(slice_adder_view(&self.slice_adder).map(Message::SliceAdder))
                .width(Length::FillPortion(1))
                .height(Fill);
            row![dashboard, picker].spacing(10).height(Fill).into()
        } else {
            dashboard.into()
        };

        let status_bar = container(text(&self.status).size(12)).padding(5);

        container(column![main_content, status_bar].spacing(10).padding(10))
            .width(Fill)
            .height(Fill)
            .into()
    }

    /// Window title
    pub fn title(&self) -> String {
        format!("{} - Slate", self.config.dashboard.title)
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::{FetchRequest, Slice, SliceId, SortKey, SourceError};
    use slate_widgets::{SliceAdderBody, SliceAdderMessage};

    /// Source with no charts (fetch tasks are never run in these tests)
    struct EmptySource;

    impl SliceSource for EmptySource {
        fn fetch(&self, _request: &FetchRequest) -> Result<Vec<Slice>, SourceError> {
            Ok(Vec::new())
        }
    }

    fn slices() -> Vec<Slice> {
        vec![
            Slice::new(127, "Region Filter", "filter_box", 300),
            Slice::new(128, "Energy Sankey", "sankey", 200),
            Slice::new(129, "Births", "table", 100),
        ]
    }

    fn app() -> BoardApp {
        let mut config = BoardConfig::default();
        config.dashboard.charts = vec![SliceId(127)];
        BoardApp::new(
            config,
            &CliArgs::default(),
            PathBuf::from("/nonexistent/slate-board/config.yaml"),
            Arc::new(EmptySource),
        )
    }

    #[test]
    fn test_mount_marks_loading() {
        let mut app = app();
        let _ = handlers::slice_adder::mount(&mut app);

        assert!(app.entities.is_loading());
        assert!(app.slice_adder.props().is_loading);
        assert_eq!(app.slice_adder.body(), SliceAdderBody::Loading);
    }

    #[test]
    fn test_fetch_result_reaches_picker() {
        let mut app = app();
        let _ = app.update(Message::SlicesFetched(Ok(slices())));

        assert_eq!(app.entities.slices.len(), 3);
        let ids: Vec<u64> = app.slice_adder.filtered_slices.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![127, 128, 129]);
        assert_eq!(app.status, "Loaded 3 charts");
    }

    #[test]
    fn test_fetch_error_is_displayed() {
        let mut app = app();
        let _ = app.update(Message::SlicesFetched(Err("catalog missing".to_string())));

        match app.slice_adder.body() {
            SliceAdderBody::Error(message) => assert!(message.contains("catalog missing")),
            other => panic!("expected error body, got {:?}", other),
        }
    }

    #[test]
    fn test_adding_chart_updates_layout_and_picker() {
        let mut app = app();
        let _ = app.update(Message::SlicesFetched(Ok(slices())));
        let _ = app.update(Message::SliceAdder(SliceAdderMessage::ToggleSlice(SliceId(129))));

        assert_eq!(app.config.dashboard.charts, vec![SliceId(127), SliceId(129)]);
        assert!(app.slice_adder.is_selected(SliceId(129)));
    }

    #[test]
    fn test_view_only_mode_blocks_changes() {
        let mut app = app();
        let _ = app.update(Message::ToggleEditMode);
        assert!(!app.edit_mode);

        let _ = app.update(Message::SliceAdder(SliceAdderMessage::ToggleSlice(SliceId(128))));
        assert_eq!(app.config.dashboard.charts, vec![SliceId(127)]);
    }

    #[test]
    fn test_sort_select_resets_search() {
        let mut app = app();
        let _ = app.update(Message::SliceAdder(SliceAdderMessage::SortSelected(SortKey::SliceName)));

        assert_eq!(app.slice_adder.sort_by, SortKey::SliceName);
        assert!(app.entities.is_loading());
    }

    #[test]
    fn test_command_line_overrides_are_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");

        let mut saved = BoardConfig::default();
        saved.catalog_path = dir.path().join("catalog.yaml");
        saved.user_id = 1;
        saved.dashboard.charts = vec![SliceId(127)];
        crate::config::save_config(&saved, &config_path).unwrap();

        let overrides = CliArgs::parse(
            ["--catalog", "demos/catalog.yaml", "--user", "7", "--view"]
                .iter()
                .map(|s| s.to_string()),
        )
        .unwrap();
        let mut app = BoardApp::new(
            saved.clone(),
            &overrides,
            config_path.clone(),
            Arc::new(EmptySource),
        );

        assert_eq!(app.config.catalog_path, PathBuf::from("demos/catalog.yaml"));
        assert_eq!(app.config.user_id, 7);
        assert!(!app.edit_mode);

        // Layout and picker preference changes still reach the saved config
        let _ = app.update(Message::ToggleEditMode);
        let _ = app.update(Message::SliceAdder(SliceAdderMessage::ToggleSlice(SliceId(5))));
        let _ = app.update(Message::SliceAdder(SliceAdderMessage::ShowOnlyMyCharts(true)));
        assert_eq!(app.config.dashboard.charts, vec![SliceId(127), SliceId(5)]);

        // Write what the background save task writes
        crate::config::save_config(&app.saved_config, &config_path).unwrap();
        let reloaded: BoardConfig = crate::config::load_config(&config_path);

        assert_eq!(reloaded.catalog_path, saved.catalog_path);
        assert_eq!(reloaded.user_id, 1);
        assert!(reloaded.dashboard.start_in_edit_mode);
        assert_eq!(reloaded.dashboard.charts, vec![SliceId(127), SliceId(5)]);
        assert!(reloaded.picker.show_only_my_charts);
    }
}
