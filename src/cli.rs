//! Command implementations behind the `chartmaker` binary

use chartmaker_app::config::Settings;
use chartmaker_app::{process_message, ChartMakerState, Message, RowAction};
use chartmaker_core::prelude::*;
use chartmaker_core::{ChartType, FruitAnnotator};

use crate::headless::HeadlessEvent;

/// Split a `TITLE=VALUE` argument at the last `=`
///
/// The value is trimmed; the title is kept as typed so annotation sees it
/// exactly like a text field would.
pub fn parse_row(arg: &str) -> Result<(String, String)> {
    let (title, value) = arg
        .rsplit_once('=')
        .ok_or_else(|| Error::InvalidRow(arg.to_string()))?;
    Ok((title.to_string(), value.trim().to_string()))
}

/// Annotate each input independently
pub fn annotate_lines<'a>(
    annotator: &FruitAnnotator,
    inputs: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    inputs
        .into_iter()
        .map(|input| annotator.annotate(input))
        .collect()
}

/// `name<TAB>emoji` for every table entry
pub fn fruit_lines(annotator: &FruitAnnotator) -> Vec<String> {
    annotator
        .entries()
        .map(|entry| format!("{}\t{}", entry.name, entry.emoji))
        .collect()
}

/// Drive a fresh state through the same intents a user would send, and
/// describe the outcome as headless events
pub fn build_chart(
    settings: &Settings,
    rows: &[(String, String)],
    chart_type: Option<ChartType>,
) -> Result<(ChartMakerState, Vec<HeadlessEvent>)> {
    let mut state = ChartMakerState::with_settings(settings)?;
    let mut events = Vec::with_capacity(rows.len() + 1);

    if let Some(chart_type) = chart_type {
        process_message(&mut state, Message::ChartTypeSelected(chart_type));
    }

    for (title, value) in rows {
        process_message(&mut state, Message::AddDataPointButtonTapped);
        let Some(id) = state.data_points.last().map(|p| p.id) else {
            continue;
        };

        process_message(
            &mut state,
            Message::DataPoint {
                id,
                action: RowAction::SetTitle(title.clone()),
            },
        );
        process_message(
            &mut state,
            Message::DataPoint {
                id,
                action: RowAction::SetValue(value.clone()),
            },
        );

        if let Some(row) = state.row(id) {
            events.push(HeadlessEvent::row_added(row));
        }
    }

    process_message(&mut state, Message::OnAppear);
    debug!(
        "Built chart with {} rows ({} chartable)",
        state.data_points.len(),
        state.chartable_points().len()
    );
    events.push(HeadlessEvent::chart_summary(&state));

    Ok((state, events))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row() {
        assert_eq!(
            parse_row("Apples=50").unwrap(),
            ("Apples".to_string(), "50".to_string())
        );
        assert_eq!(
            parse_row("a=b = 3 ").unwrap(),
            ("a=b ".to_string(), "3".to_string())
        );
        assert!(matches!(parse_row("Apples"), Err(Error::InvalidRow(_))));
    }

    #[test]
    fn test_annotate_lines() {
        let annotator = FruitAnnotator::with_defaults();
        let out = annotate_lines(&annotator, ["apple", "  nothing  ", "kiwis"]);
        assert_eq!(out, vec!["apple 🍎", "  nothing  ", "kiwis 🥝"]);
    }

    #[test]
    fn test_fruit_lines_follow_table_order() {
        let lines = fruit_lines(&FruitAnnotator::with_defaults());
        assert_eq!(lines[0], "apple\t🍎");
        assert_eq!(lines.last().map(String::as_str), Some("blueberries\t🫐"));
    }

    #[test]
    fn test_build_chart_annotates_titles() {
        let rows = vec![
            ("apples".to_string(), "5".to_string()),
            ("Total".to_string(), "9".to_string()),
        ];

        let (state, events) =
            build_chart(&Settings::default(), &rows, Some(ChartType::Pie)).unwrap();

        assert_eq!(state.current_chart_type, ChartType::Pie);
        assert_eq!(
            state.chartable_points(),
            vec![("apples 🍎", 5.0), ("Total", 9.0)]
        );
        assert_eq!(events.len(), 3);
        assert!(matches!(events[2], HeadlessEvent::ChartReady { .. }));
    }

    #[test]
    fn test_build_chart_without_complete_rows_is_hidden() {
        let rows = vec![("pears".to_string(), "many".to_string())];

        let (state, events) = build_chart(&Settings::default(), &rows, None).unwrap();

        assert!(!state.show_chart);
        assert!(matches!(
            events.last(),
            Some(HeadlessEvent::ChartHidden { row_count: 1, .. })
        ));
    }

    #[test]
    fn test_build_chart_respects_disabled_annotation() {
        let mut settings = Settings::default();
        settings.annotator.enabled = false;
        let rows = vec![("apples".to_string(), "5".to_string())];

        let (state, _) = build_chart(&settings, &rows, None).unwrap();

        assert_eq!(state.data_points[0].title, "apples");
    }
}
