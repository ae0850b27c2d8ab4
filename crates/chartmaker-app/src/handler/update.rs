//! Main update function - handles state transitions (TEA pattern)

use std::collections::BTreeSet;

use crate::message::Message;
use crate::state::{ChartMakerState, FullScreenPresentation};
use chartmaker_core::ChartDataPoint;
use tracing::debug;

use super::{rows, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut ChartMakerState, message: Message) -> UpdateResult {
    match message {
        Message::OnAppear => {
            state.refresh_show_chart();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Row Messages
        // ─────────────────────────────────────────────────────────
        Message::AddDataPointButtonTapped => {
            let id = state.allocate_row_id();
            state.data_points.push(ChartDataPoint::new(id));
            debug!("Added row {}", id);
            UpdateResult::none()
        }

        Message::DataPoint { id, action } => rows::handle_row_action(state, id, action),

        Message::DeleteDataPoints(offsets) => {
            handle_delete(state, &offsets);
            UpdateResult::none()
        }

        Message::ClearAllDataPoints => {
            state.data_points.clear();
            state.show_chart = false;
            state.focused_field = None;
            debug!("Cleared all rows");
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Clear-All Confirmation
        // ─────────────────────────────────────────────────────────
        Message::RequestClearAll => {
            if state.can_clear_all() {
                state.show_clear_all_confirmation = true;
            }
            UpdateResult::none()
        }

        Message::ShowClearAllConfirmation(show) => {
            state.show_clear_all_confirmation = show;
            UpdateResult::none()
        }

        Message::ConfirmClearAll => {
            state.show_clear_all_confirmation = false;
            UpdateResult::message(Message::ClearAllDataPoints)
        }

        Message::CancelClearAll => {
            state.show_clear_all_confirmation = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Chart Messages
        // ─────────────────────────────────────────────────────────
        Message::SetShowChart(show) => {
            state.show_chart = show;
            UpdateResult::none()
        }

        Message::ChartTypeSelected(chart_type) => {
            state.current_chart_type = chart_type;
            UpdateResult::none()
        }

        Message::ChartMinimizeButtonTapped => {
            state.is_chart_minimized = !state.is_chart_minimized;
            UpdateResult::none()
        }

        Message::SetFullScreenChart(presented) => {
            state.full_screen_chart = presented.then_some(FullScreenPresentation);
            UpdateResult::none()
        }

        Message::FocusFieldChanged(field) => {
            state.focused_field = field;
            UpdateResult::none()
        }
    }
}

/// Remove rows by offset, ignoring offsets past the end
fn handle_delete(state: &mut ChartMakerState, offsets: &BTreeSet<usize>) {
    let mut index = 0;
    state.data_points.retain(|_| {
        let keep = !offsets.contains(&index);
        index += 1;
        keep
    });

    // Drop focus if its row is gone
    if let Some(field) = state.focused_field {
        if state.row(field.row_id()).is_none() {
            state.focused_field = None;
        }
    }

    state.refresh_show_chart();
    debug!("Deleted rows at {:?}", offsets);
}
