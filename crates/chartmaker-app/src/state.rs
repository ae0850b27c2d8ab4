//! Application state (Model in TEA pattern)

use std::sync::Arc;

use chartmaker_core::prelude::*;
use chartmaker_core::{ChartDataPoint, ChartType, FocusableField, FruitAnnotator, RowId};

use crate::config::Settings;

/// Marker for the full-screen chart being presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullScreenPresentation;

/// Complete chart-maker state
///
/// Mutated only through [`crate::handler::update`].
#[derive(Debug, Clone)]
pub struct ChartMakerState {
    /// Rows in display order
    pub data_points: Vec<ChartDataPoint>,

    /// Whether the chart section is visible
    pub show_chart: bool,

    pub focused_field: Option<FocusableField>,

    pub current_chart_type: ChartType,

    pub is_chart_minimized: bool,

    pub full_screen_chart: Option<FullScreenPresentation>,

    pub show_clear_all_confirmation: bool,

    /// Applied to titles on edit; `None` disables annotation
    annotator: Option<Arc<FruitAnnotator>>,

    next_row_id: u64,
}

impl ChartMakerState {
    /// State seeded with three sample rows
    pub fn new() -> Self {
        let mut state = Self::empty();
        for (title, value) in [("Apples 🍎", "50"), ("Bananas 🍌", "80"), ("Cherries 🍒", "30")] {
            let id = state.allocate_row_id();
            state
                .data_points
                .push(ChartDataPoint::with_values(id, title, value));
        }
        state.show_chart = state.should_show_chart_section();
        state
    }

    /// State with no rows and the default annotator
    pub fn empty() -> Self {
        Self {
            data_points: Vec::new(),
            show_chart: false,
            focused_field: None,
            current_chart_type: ChartType::default(),
            is_chart_minimized: false,
            full_screen_chart: None,
            show_clear_all_confirmation: false,
            annotator: Some(chartmaker_core::shared_default_annotator()),
            next_row_id: 1,
        }
    }

    /// Empty state configured from settings
    ///
    /// Fails if the configured fruit table is invalid.
    pub fn with_settings(settings: &Settings) -> Result<Self> {
        let mut state = Self::empty();
        state.current_chart_type = settings.chart.default_type;
        state.annotator = if !settings.annotator.enabled {
            None
        } else if settings.annotator.extra_fruits.is_empty() {
            Some(chartmaker_core::shared_default_annotator())
        } else {
            Some(Arc::new(settings.build_annotator()?))
        };
        Ok(state)
    }

    /// True if at least one row has a title and a numeric value
    pub fn should_show_chart_section(&self) -> bool {
        self.data_points.iter().any(ChartDataPoint::is_complete)
    }

    pub fn can_clear_all(&self) -> bool {
        !self.data_points.is_empty()
    }

    /// `(title, value)` of every row drawable in a chart, in row order
    pub fn chartable_points(&self) -> Vec<(&str, f64)> {
        self.data_points
            .iter()
            .filter(|p| p.is_chartable())
            .filter_map(|p| p.value().map(|v| (p.title.as_str(), v)))
            .collect()
    }

    pub fn row(&self, id: RowId) -> Option<&ChartDataPoint> {
        self.data_points.iter().find(|p| p.id == id)
    }

    pub fn row_mut(&mut self, id: RowId) -> Option<&mut ChartDataPoint> {
        self.data_points.iter_mut().find(|p| p.id == id)
    }

    pub fn auto_annotate(&self) -> bool {
        self.annotator.is_some()
    }

    pub fn annotator(&self) -> Option<&FruitAnnotator> {
        self.annotator.as_deref()
    }

    pub fn set_annotator(&mut self, annotator: Option<Arc<FruitAnnotator>>) {
        self.annotator = annotator;
    }

    /// Recompute chart visibility from the rows
    pub(crate) fn refresh_show_chart(&mut self) {
        self.show_chart = self.should_show_chart_section();
    }

    pub(crate) fn allocate_row_id(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        id
    }
}

impl Default for ChartMakerState {
    fn default() -> Self {
        Self::new()
    }
}
