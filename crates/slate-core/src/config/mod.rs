//! Shared configuration utilities for slate applications
//!
//! - Generic YAML config loading/saving
//! - Standard config and catalog paths
//! - Chart picker settings
//!
//! # Usage
//!
//! ```ignore
//! use slate_core::config::{load_config, save_config, default_config_path};
//!
//! let config: MyAppConfig = load_config(&default_config_path("slate-board"));
//! save_config(&config, &path)?;
//! ```

mod io;
mod paths;
mod picker;

pub use io::{load_config, save_config};
pub use paths::{default_catalog_path, default_config_path};
pub use picker::PickerConfig;
