//! Headless mode - JSON event output
//!
//! Emits the result of driving the chart-maker state as NDJSON
//! (newline-delimited JSON), one event per line. Each event has an "event"
//! field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"row_added","row_id":1,"title":"Apples 🍎","value":50.0,"timestamp":1704700001000}
//! {"event":"chart_ready","chart_type":"bar","points":[{"title":"Apples 🍎","value":50.0}],"timestamp":1704700001001}
//! ```

use chartmaker_app::ChartMakerState;
use chartmaker_core::{ChartDataPoint, ChartType};
use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// A chartable `(title, value)` pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub title: String,
    pub value: f64,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A row was added and filled in
    RowAdded {
        row_id: u64,
        title: String,
        value: Option<f64>,
        timestamp: i64,
    },

    /// Final chart contents
    ChartReady {
        chart_type: ChartType,
        minimized: bool,
        points: Vec<ChartPoint>,
        timestamp: i64,
    },

    /// No row is complete, so there is nothing to chart
    ChartHidden { row_count: usize, timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn row_added(point: &ChartDataPoint) -> Self {
        Self::RowAdded {
            row_id: point.id.0,
            title: point.title.clone(),
            value: point.value(),
            timestamp: Self::now(),
        }
    }

    /// `ChartReady` when the chart section is visible, `ChartHidden` otherwise
    pub fn chart_summary(state: &ChartMakerState) -> Self {
        if !state.show_chart {
            return Self::ChartHidden {
                row_count: state.data_points.len(),
                timestamp: Self::now(),
            };
        }

        Self::ChartReady {
            chart_type: state.current_chart_type,
            minimized: state.is_chart_minimized,
            points: state
                .chartable_points()
                .into_iter()
                .map(|(title, value)| ChartPoint {
                    title: title.to_string(),
                    value,
                })
                .collect(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}
