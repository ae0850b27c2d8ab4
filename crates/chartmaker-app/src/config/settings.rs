//! Settings parser for .chartmaker/config.toml

use super::types::Settings;
use chartmaker_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const CHARTMAKER_DIR: &str = ".chartmaker";

/// Load settings from `.chartmaker/config.toml`
///
/// A missing or unreadable file yields defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(CHARTMAKER_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.chartmaker/` with a commented default config file
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let chartmaker_dir = project_path.join(CHARTMAKER_DIR);

    if !chartmaker_dir.exists() {
        std::fs::create_dir_all(&chartmaker_dir).context("Failed to create .chartmaker dir")?;
    }

    let config_path = chartmaker_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Chart Maker Configuration

[annotator]
enabled = true          # Append fruit emojis to row titles while typing
# extra_fruits = [{ name = "fig", emoji = "🟣" }]

[chart]
default_type = "bar"    # bar, line or pie
"#;
        std::fs::write(&config_path, default_content)
            .with_context(|| format!("Failed to write {:?}", config_path))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

/// Save settings to `.chartmaker/config.toml`
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<()> {
    let chartmaker_dir = project_path.join(CHARTMAKER_DIR);

    if !chartmaker_dir.exists() {
        std::fs::create_dir_all(&chartmaker_dir).context("Failed to create .chartmaker dir")?;
    }

    let config_path = chartmaker_dir.join(CONFIG_FILENAME);
    let temp_path = chartmaker_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    let full_content = format!("# Chart Maker Configuration\n\n{}", content);

    // Atomic write: write to temp, then rename
    std::fs::write(&temp_path, &full_content).context("Failed to write temp file")?;

    std::fs::rename(&temp_path, &config_path).context("Failed to rename temp file")?;

    debug!("Saved settings to {:?}", config_path);
    Ok(())
}
