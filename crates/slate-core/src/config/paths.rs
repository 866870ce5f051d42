//! Standard locations for slate configuration files

use std::path::PathBuf;

fn config_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
}

/// Get the default config file path for an app
///
/// Returns: `~/.config/{app_name}/config.yaml`
pub fn default_config_path(app_name: &str) -> PathBuf {
    config_root().join(app_name).join("config.yaml")
}

/// Get the default chart catalog path
///
/// Returns: `~/.config/slate/catalog.yaml` (shared between slate apps)
pub fn default_catalog_path() -> PathBuf {
    config_root().join("slate").join("catalog.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_includes_app_name() {
        let path = default_config_path("slate-board");
        assert!(path.ends_with("slate-board/config.yaml"));
    }

    #[test]
    fn test_catalog_path_is_shared() {
        assert!(default_catalog_path().ends_with("slate/catalog.yaml"));
    }
}
