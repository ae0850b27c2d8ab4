//! Drives the chart-maker state the way the binary does

use chartmaker::cli::{build_chart, parse_row};
use chartmaker::headless::HeadlessEvent;
use chartmaker_app::config::{load_settings, save_settings, Settings};
use chartmaker_app::{process_message, ChartMakerState, Message, RowAction};
use chartmaker_core::{ChartType, FruitEntry};
use tempfile::tempdir;

#[test]
fn test_typing_a_row_annotates_and_shows_chart() {
    let mut state = ChartMakerState::empty();
    process_message(&mut state, Message::AddDataPointButtonTapped);
    let id = state.data_points[0].id;

    for typed in ["p", "pe", "pea", "pear", "pears"] {
        process_message(
            &mut state,
            Message::DataPoint {
                id,
                action: RowAction::SetTitle(typed.to_string()),
            },
        );
    }
    assert_eq!(state.row(id).unwrap().title, "pears 🍐");
    assert!(!state.show_chart);

    process_message(
        &mut state,
        Message::DataPoint {
            id,
            action: RowAction::SetValue("4".to_string()),
        },
    );
    assert!(state.show_chart);
    assert_eq!(state.chartable_points(), vec![("pears 🍐", 4.0)]);
}

#[test]
fn test_build_chart_from_cli_rows() {
    let rows: Vec<_> = ["lemons=3", "limes=2", "Coconut = 7"]
        .iter()
        .map(|r| parse_row(r).unwrap())
        .collect();

    let (state, events) =
        build_chart(&Settings::default(), &rows, Some(ChartType::Line)).unwrap();

    let titles: Vec<_> = state.data_points.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["lemons 🍋", "limes", "Coconut 🥥"]);
    assert_eq!(events.len(), 4);

    match &events[3] {
        HeadlessEvent::ChartReady {
            chart_type, points, ..
        } => {
            assert_eq!(*chart_type, ChartType::Line);
            assert_eq!(points.len(), 3);
        }
        other => panic!("expected ChartReady, got {other:?}"),
    }
}

#[test]
fn test_configured_table_flows_into_chart() {
    let temp = tempdir().unwrap();
    let mut settings = Settings::default();
    settings.chart.default_type = ChartType::Pie;
    settings.annotator.extra_fruits = vec![FruitEntry::new("fig", "🟣")];
    save_settings(temp.path(), &settings).unwrap();

    let loaded = load_settings(temp.path());
    let rows = vec![("figs and fig".to_string(), "1".to_string())];
    let (state, _) = build_chart(&loaded, &rows, None).unwrap();

    assert_eq!(state.current_chart_type, ChartType::Pie);
    assert_eq!(state.data_points[0].title, "figs and fig 🟣");
}

#[test]
fn test_clear_all_confirmation_flow() {
    let mut state = ChartMakerState::new();

    process_message(&mut state, Message::RequestClearAll);
    assert!(state.show_clear_all_confirmation);

    process_message(&mut state, Message::CancelClearAll);
    assert_eq!(state.data_points.len(), 3);

    process_message(&mut state, Message::RequestClearAll);
    process_message(&mut state, Message::ConfirmClearAll);
    assert!(state.data_points.is_empty());
    assert!(!state.show_chart);
}
