//! Per-row edits
//!
//! Title edits run through the fruit annotator, so typing "apple" leaves
//! "apple 🍎" in the field.

use crate::message::RowAction;
use crate::state::ChartMakerState;
use chartmaker_core::RowId;
use tracing::{trace, warn};

use super::UpdateResult;

/// Apply a field edit, annotate the title, then recompute chart visibility
pub fn handle_row_action(
    state: &mut ChartMakerState,
    id: RowId,
    action: RowAction,
) -> UpdateResult {
    let title = {
        let Some(row) = state.row_mut(id) else {
            warn!("Edit for unknown row {}", id);
            return UpdateResult::none();
        };

        match action {
            RowAction::SetTitle(title) => row.title = title,
            RowAction::SetValue(value) => row.value_string = value,
        }

        row.title.clone()
    };

    let enhanced = state
        .annotator()
        .map(|annotator| annotator.annotate(&title))
        .filter(|enhanced| *enhanced != title);

    if let Some(enhanced) = enhanced {
        trace!("Annotated title of {}: {:?}", id, enhanced);
        if let Some(row) = state.row_mut(id) {
            row.title = enhanced;
        }
    }

    state.refresh_show_chart();
    UpdateResult::none()
}
