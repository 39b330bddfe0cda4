//! Integration test: parse a query-result fixture, run the full pipeline,
//! and verify series grouping, the display window, and the serialized
//! configuration shape end to end.

use gantt_viz_core::options::GanttOptions;
use gantt_viz_core::parsers::{parse_query_result, parse_rows};
use gantt_viz_core::views::bounds::BOUNDS_PAD_MS;
use gantt_viz_core::{ColorSource, build_chart};

const FIXTURE: &[u8] = include_bytes!("fixtures/project-phases.json");

// Fixture anchors, epoch milliseconds.
const JAN_01: i64 = 1_704_067_200_000; // 2024-01-01
const FEB_20: i64 = 1_708_387_200_000; // 2024-02-20
const NOV_01: i64 = 1_698_796_800_000; // 2023-11-01
const JUN_30: i64 = 1_719_705_600_000; // 2024-06-30

#[test]
fn fixture_to_chart_config() {
    let result = parse_query_result(FIXTURE).expect("fixture should parse");
    assert_eq!(result.column_names().len(), 7);

    let options = GanttOptions::default();
    let records = parse_rows(&result, &options).expect("rows should map");
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].project_id, "101");

    let config = build_chart(&records, &options).expect("pipeline should succeed");

    // One series per distinct project, in first-seen order.
    let names: Vec<&str> = config.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Coastal Link", "Inland Rail", "Harbour Works"]);
    assert_eq!(
        config.y_axis.categories,
        vec![
            "Coastal Link".to_string(),
            "Inland Rail".to_string(),
            "Harbour Works".to_string(),
        ]
    );

    // Interleaved input rows land on their owning series, in input order.
    assert_eq!(config.series[0].data.len(), 2);
    assert_eq!(config.series[0].data[0].id, "1001");
    assert_eq!(config.series[0].data[1].id, "1002");
    for (index, series) in config.series.iter().enumerate() {
        for segment in &series.data {
            assert_eq!(segment.y, index, "segment in {:?}", series.name);
        }
    }

    // The window comes from the first series' first segment and the last
    // series' last segment. The middle series holds the true extremes and
    // must not widen it.
    let middle = &config.series[1].data[0];
    assert_eq!((middle.start, middle.end), (NOV_01, JUN_30));
    let months = &config.x_axis[0];
    assert_eq!(months.min, Some(JAN_01 - BOUNDS_PAD_MS));
    assert_eq!(months.max, Some(FEB_20 + BOUNDS_PAD_MS));
    assert!(middle.start < JAN_01 - BOUNDS_PAD_MS);
    assert!(middle.end > FEB_20 + BOUNDS_PAD_MS);

    // Year axis mirrors the month axis instead of carrying its own window.
    assert_eq!(config.x_axis[1].linked_to, Some(0));
    assert_eq!(config.x_axis[1].min, None);

    // Table profile: palette colors, explicit color column ignored, misses
    // left uncolored.
    assert_eq!(
        config.series[0].data[0].color.as_deref(),
        Some("#e1ebf3") // Early Engagement
    );
    let decommissioning = &config.series[2].data[1];
    assert_eq!(decommissioning.name, "Decommissioning");
    assert_eq!(decommissioning.color, None);

    // Wire shape expected by the external renderer.
    let json = serde_json::to_value(&config).expect("config should serialize");
    assert!(json.get("xAxis").is_some());
    assert_eq!(json["xAxis"][0]["currentDateIndicator"], false);
    assert_eq!(json["xAxis"][1]["linkedTo"], 0);
    assert_eq!(json["series"][0]["data"][0]["start"], JAN_01);
    assert!(json["series"][2]["data"][1].get("color").is_none());
}

#[test]
fn field_profile_uses_the_color_column() {
    let result = parse_query_result(FIXTURE).expect("fixture should parse");
    let options = GanttOptions {
        color_source: ColorSource::Field,
        ..GanttOptions::default()
    };
    let records = parse_rows(&result, &options).expect("rows should map");
    let config = build_chart(&records, &options).expect("pipeline should succeed");

    // Explicit color wins; rows without one fall back to the palette.
    let decommissioning = &config.series[2].data[1];
    assert_eq!(decommissioning.color.as_deref(), Some("#333333"));
    let recommendation = &config.series[2].data[0];
    assert_eq!(recommendation.color.as_deref(), Some("#f2c096"));
}
