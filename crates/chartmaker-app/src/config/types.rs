//! Configuration types for Chart Maker
//!
//! Defines:
//! - `Settings` - Application settings (.chartmaker/config.toml)
//! - `AnnotatorSettings` - Fruit emoji table extensions
//! - `ChartSettings` - Chart presentation defaults

use chartmaker_core::prelude::*;
use chartmaker_core::{default_entries, ChartType, FruitAnnotator, FruitEntry};
use serde::{Deserialize, Serialize};

/// Application settings (.chartmaker/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub annotator: AnnotatorSettings,

    #[serde(default)]
    pub chart: ChartSettings,
}

/// Fruit emoji annotation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnnotatorSettings {
    /// Annotate row titles as they are edited
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Entries added to the built-in table; a name already in the table
    /// replaces that entry's emoji instead
    #[serde(default)]
    pub extra_fruits: Vec<FruitEntry>,
}

impl Default for AnnotatorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            extra_fruits: Vec::new(),
        }
    }
}

/// Chart presentation settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ChartSettings {
    /// Chart type selected on startup
    #[serde(default)]
    pub default_type: ChartType,
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Built-in table merged with `annotator.extra_fruits`, in application order
    pub fn fruit_table(&self) -> Vec<FruitEntry> {
        let mut table = default_entries();

        for extra in &self.annotator.extra_fruits {
            let extra = FruitEntry::new(extra.name.as_str(), extra.emoji.as_str());
            match table.iter_mut().find(|e| e.name == extra.name) {
                Some(existing) => {
                    debug!(
                        "Overriding emoji for '{}': {} -> {}",
                        existing.name, existing.emoji, extra.emoji
                    );
                    existing.emoji = extra.emoji;
                }
                None => table.push(extra),
            }
        }

        table
    }

    /// Compile the merged table, failing on the first bad entry
    pub fn build_annotator(&self) -> Result<FruitAnnotator> {
        FruitAnnotator::try_new(self.fruit_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartmaker_core::DEFAULT_FRUITS;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert!(settings.annotator.enabled);
        assert!(settings.annotator.extra_fruits.is_empty());
        assert_eq!(settings.chart.default_type, ChartType::Bar);
    }

    #[test]
    fn test_fruit_table_without_extras_matches_defaults() {
        let table = Settings::default().fruit_table();
        assert_eq!(table.len(), DEFAULT_FRUITS.len());
        assert_eq!(table[0], FruitEntry::new("apple", "🍎"));
    }

    #[test]
    fn test_fruit_table_appends_and_overrides() {
        let mut settings = Settings::default();
        settings.annotator.extra_fruits = vec![
            FruitEntry::new("fig", "🟣"),
            FruitEntry {
                name: "Plum".to_string(),
                emoji: "🟣".to_string(),
            },
        ];

        let table = settings.fruit_table();
        assert_eq!(table.len(), DEFAULT_FRUITS.len() + 1);
        assert_eq!(table.last(), Some(&FruitEntry::new("fig", "🟣")));

        let plum = table.iter().find(|e| e.name == "plum").unwrap();
        assert_eq!(plum.emoji, "🟣");
    }

    #[test]
    fn test_build_annotator_uses_merged_table() {
        let mut settings = Settings::default();
        settings.annotator.extra_fruits = vec![FruitEntry::new("fig", "🟣")];

        let annotator = settings.build_annotator().unwrap();
        assert_eq!(annotator.annotate("fig and apple"), "fig 🟣 and apple 🍎");
    }

    #[test]
    fn test_build_annotator_rejects_bad_extra() {
        let mut settings = Settings::default();
        settings.annotator.extra_fruits = vec![FruitEntry::new("", "🟣")];

        assert!(matches!(
            settings.build_annotator(),
            Err(Error::InvalidFruitEntry { .. })
        ));
    }
}
