//! Chart domain types shared by the app crate and the binary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identity of a data row, allocated monotonically by the state container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// A labeled value as typed by the user
///
/// The value is kept as the raw input string; [`value`](Self::value) parses it
/// on demand so a half-typed number never loses keystrokes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub id: RowId,
    pub title: String,
    pub value_string: String,
}

impl ChartDataPoint {
    /// An empty row
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            title: String::new(),
            value_string: String::new(),
        }
    }

    pub fn with_values(id: RowId, title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            value_string: value.into(),
        }
    }

    /// Parsed value, `None` when empty or not a number
    pub fn value(&self) -> Option<f64> {
        self.value_string.parse().ok()
    }

    /// Has a non-blank title and a numeric value
    pub fn is_complete(&self) -> bool {
        self.value().is_some() && !self.title.trim().is_empty()
    }

    /// Complete and strictly positive, i.e. drawable in every chart type
    pub fn is_chartable(&self) -> bool {
        self.is_complete() && self.value().is_some_and(|v| v > 0.0)
    }
}

/// How the rows are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartType::Bar => write!(f, "Bar"),
            ChartType::Line => write!(f, "Line"),
            ChartType::Pie => write!(f, "Pie"),
        }
    }
}

impl FromStr for ChartType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            _ => Err(Error::InvalidChartType(s.to_string())),
        }
    }
}

/// Text field that currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusableField {
    Title(RowId),
    Value(RowId),
}

impl FocusableField {
    pub fn row_id(&self) -> RowId {
        match self {
            FocusableField::Title(id) | FocusableField::Value(id) => *id,
        }
    }
}
