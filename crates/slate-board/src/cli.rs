//! Command line flags
//!
//! - `--catalog <path>`: chart catalog file (overrides config)
//! - `--user <id>`: user the picker fetches charts for
//! - `--dashboard <id>`: dashboard identifier
//! - `--view`: open the dashboard read-only (no chart picker)

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::config::BoardConfig;

/// Parsed command line overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub catalog: Option<PathBuf>,
    pub user_id: Option<u64>,
    pub dashboard_id: Option<u64>,
    pub view_only: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name)
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = args.next().context("--catalog requires a path")?;
                    parsed.catalog = Some(PathBuf::from(value));
                }
                "--user" => parsed.user_id = Some(parse_id(&arg, args.next())?),
                "--dashboard" => parsed.dashboard_id = Some(parse_id(&arg, args.next())?),
                "--view" => parsed.view_only = true,
                other => bail!("Unknown argument '{}'", other),
            }
        }
        Ok(parsed)
    }

    /// Effective config for this run: `saved` with the overrides on top
    ///
    /// `saved` is left untouched so overrides never reach the config file.
    pub fn applied_to(&self, saved: &BoardConfig) -> BoardConfig {
        let mut config = saved.clone();
        self.apply(&mut config);
        config
    }

    /// Apply overrides on top of the loaded config
    pub fn apply(&self, config: &mut BoardConfig) {
        if let Some(ref catalog) = self.catalog {
            config.catalog_path = catalog.clone();
        }
        if let Some(user_id) = self.user_id {
            config.user_id = user_id;
        }
        if let Some(dashboard_id) = self.dashboard_id {
            config.dashboard.id = dashboard_id;
        }
        if self.view_only {
            config.dashboard.start_in_edit_mode = false;
        }
    }
}

fn parse_id(flag: &str, value: Option<String>) -> Result<u64> {
    let value = value.with_context(|| format!("{} requires a numeric id", flag))?;
    value
        .parse()
        .with_context(|| format!("{} expects a numeric id, got '{}'", flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let parsed = CliArgs::parse(args(&[
            "--catalog", "/tmp/charts.yaml", "--user", "7", "--dashboard", "3", "--view",
        ]))
        .unwrap();

        assert_eq!(parsed.catalog, Some(PathBuf::from("/tmp/charts.yaml")));
        assert_eq!(parsed.user_id, Some(7));
        assert_eq!(parsed.dashboard_id, Some(3));
        assert!(parsed.view_only);

        let mut config = BoardConfig::default();
        parsed.apply(&mut config);
        assert_eq!(config.user_id, 7);
        assert_eq!(config.dashboard.id, 3);
        assert!(!config.dashboard.start_in_edit_mode);
    }

    #[test]
    fn test_applied_to_leaves_saved_config_alone() {
        let saved = BoardConfig::default();
        let overrides = CliArgs::parse(args(&["--user", "7", "--view"])).unwrap();

        let effective = overrides.applied_to(&saved);
        assert_eq!(effective.user_id, 7);
        assert!(!effective.dashboard.start_in_edit_mode);
        assert_eq!(saved, BoardConfig::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!(CliArgs::parse(args(&["--user"])).is_err());
        assert!(CliArgs::parse(args(&["--user", "me"])).is_err());
        assert!(CliArgs::parse(args(&["--verbose"])).is_err());
        assert_eq!(CliArgs::parse(Vec::new()).unwrap(), CliArgs::default());
    }
}
