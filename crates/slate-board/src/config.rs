//! Board configuration for slate-board
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/slate-board/config.yaml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use slate_core::config::{default_catalog_path, PickerConfig};
use slate_core::{DashboardId, SliceId, UserId};

pub use slate_core::config::{load_config, save_config};

/// Name used for the config directory
pub const APP_NAME: &str = "slate-board";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Chart catalog file (YAML or JSON)
    pub catalog_path: PathBuf,
    /// User the picker fetches charts for
    pub user_id: UserId,
    /// Dashboard being edited
    pub dashboard: DashboardConfig,
    /// Chart picker settings
    pub picker: PickerConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            user_id: 1,
            dashboard: DashboardConfig::default(),
            picker: PickerConfig::default(),
        }
    }
}

/// Dashboard section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dashboard identifier
    pub id: DashboardId,
    /// Dashboard title
    pub title: String,
    /// Charts on the dashboard, in layout order
    pub charts: Vec<SliceId>,
    /// Open the dashboard in edit mode
    pub start_in_edit_mode: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            id: 1,
            title: "Untitled dashboard".to_string(),
            charts: Vec::new(),
            start_in_edit_mode: true,
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/slate-board/config.yaml
pub fn default_config_path() -> PathBuf {
    slate_core::config::default_config_path(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let yaml = "user_id: 9\ndashboard:\n  charts: [127, 128]\npicker:\n  show_only_my_charts: true\n";
        let config: BoardConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.user_id, 9);
        assert_eq!(config.dashboard.charts, vec![SliceId(127), SliceId(128)]);
        assert_eq!(config.dashboard.title, "Untitled dashboard");
        assert!(config.dashboard.start_in_edit_mode);
        assert!(config.picker.show_only_my_charts);
        assert_eq!(config.picker.search_debounce_ms, 300);
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(APP_NAME).join("config.yaml");

        let mut config = BoardConfig::default();
        config.catalog_path = dir.path().join("catalog.json");
        config.dashboard.charts = vec![SliceId(3), SliceId(1)];

        save_config(&config, &path).unwrap();
        let loaded: BoardConfig = load_config(&path);
        assert_eq!(loaded, config);
    }
}
