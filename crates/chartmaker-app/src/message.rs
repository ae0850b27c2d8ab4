//! Message types for the application (TEA pattern)

use std::collections::BTreeSet;

use chartmaker_core::{ChartType, FocusableField, RowId};

/// Edits to a single data row
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    /// Title text field changed
    SetTitle(String),
    /// Value text field changed
    SetValue(String),
}

/// All possible messages/intents in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Screen became visible; recompute chart visibility
    OnAppear,

    // ─────────────────────────────────────────────────────────
    // Row Messages
    // ─────────────────────────────────────────────────────────
    /// Append an empty row
    AddDataPointButtonTapped,
    /// Edit a row by id
    DataPoint { id: RowId, action: RowAction },
    /// Remove rows at the given offsets
    DeleteDataPoints(BTreeSet<usize>),
    /// Remove every row
    ClearAllDataPoints,

    // ─────────────────────────────────────────────────────────
    // Clear-All Confirmation
    // ─────────────────────────────────────────────────────────
    /// Ask before clearing (no-op when there is nothing to clear)
    RequestClearAll,
    /// Show or hide the confirmation dialog
    ShowClearAllConfirmation(bool),
    /// User confirmed; clears all rows
    ConfirmClearAll,
    /// User dismissed the dialog
    CancelClearAll,

    // ─────────────────────────────────────────────────────────
    // Chart Messages
    // ─────────────────────────────────────────────────────────
    SetShowChart(bool),
    ChartTypeSelected(ChartType),
    ChartMinimizeButtonTapped,
    SetFullScreenChart(bool),

    /// Keyboard focus moved (None = keyboard dismissed)
    FocusFieldChanged(Option<FocusableField>),
}
