use shelf_charts::config::ChartConfig;
use shelf_charts::core::{DataPoint, DataSeries, Viewport, generate_colors};
use shelf_charts::layout::layout_bar_chart;
use shelf_charts::render::{DrawPlan, FixedMetricsMeasurer};

fn sample_plan() -> DrawPlan {
    let series = DataSeries::new(
        "pages per day",
        vec![
            DataPoint::new(0.0, 42.0).with_label("Mon").with_value_text("42"),
            DataPoint::new(1.0, 58.0).with_label("Tue").with_value_text("58"),
        ],
        generate_colors(1)[0],
    );
    layout_bar_chart(
        &series,
        &ChartConfig::default(),
        Viewport::new(400, 244),
        &FixedMetricsMeasurer::default(),
    )
    .expect("layout")
}

#[test]
fn contract_round_trips_the_plan() {
    let plan = sample_plan();
    let json = plan.to_json_contract_v1_pretty().expect("serialize");
    let parsed = DrawPlan::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, plan);
}

#[test]
fn bare_plan_json_still_parses() {
    let plan = sample_plan();
    let json = serde_json::to_string(&plan).expect("serialize bare");
    let parsed = DrawPlan::from_json_compat_str(&json).expect("parse bare");
    assert_eq!(parsed, plan);
}

#[test]
fn unknown_schema_versions_are_rejected() {
    let plan = sample_plan();
    let bare = serde_json::to_string(&plan).expect("serialize bare");
    let envelope = format!(r#"{{"schema_version":99,"plan":{bare}}}"#);
    assert!(DrawPlan::from_json_compat_str(&envelope).is_err());
}

#[test]
fn garbage_input_is_an_error_not_a_panic() {
    assert!(DrawPlan::from_json_compat_str("not json at all").is_err());
}
