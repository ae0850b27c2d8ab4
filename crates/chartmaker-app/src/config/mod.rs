//! Configuration file parsing for Chart Maker
//!
//! Supports:
//! - `.chartmaker/config.toml` - Annotator and chart settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, save_settings};
pub use types::*;
