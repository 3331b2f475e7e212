use approx::assert_relative_eq;
use shelf_charts::config::ChartConfig;
use shelf_charts::core::{PieSegment, Viewport, generate_colors};
use shelf_charts::layout::{PIE_START_ANGLE_DEGREES, layout_pie_chart, segment_angles};
use shelf_charts::render::{LineCap, PathCommand, PathStyle};

fn segments(values: &[f64]) -> Vec<PieSegment> {
    let colors = generate_colors(values.len());
    values
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(index, (value, color))| PieSegment::new(*value, format!("genre {index}"), color))
        .collect()
}

fn measurer() -> shelf_charts::render::FixedMetricsMeasurer {
    shelf_charts::render::FixedMetricsMeasurer::default()
}

#[test]
fn two_equal_segments_split_the_circle() {
    let angles = segment_angles(&segments(&[50.0, 50.0]), 0.0);

    assert_eq!(angles.len(), 2);
    assert_relative_eq!(angles[0].start_degrees, PIE_START_ANGLE_DEGREES);
    assert_relative_eq!(angles[0].sweep_degrees, 180.0);
    assert_relative_eq!(angles[1].start_degrees, 90.0);
    assert_relative_eq!(angles[1].sweep_degrees, 180.0);
}

#[test]
fn sweeps_and_spacing_conserve_the_full_circle() {
    let spacing = 2.0;
    let angles = segment_angles(&segments(&[12.0, 44.0, 7.0, 91.0]), spacing);

    let swept: f64 = angles.iter().map(|a| a.sweep_degrees).sum();
    assert_relative_eq!(swept + spacing * 4.0, 360.0, epsilon = 1e-6);
}

#[test]
fn zero_total_renders_nothing() {
    assert!(segment_angles(&segments(&[0.0, 0.0]), 2.0).is_empty());

    let plan = layout_pie_chart(
        &segments(&[0.0, 0.0]),
        &ChartConfig::default(),
        Viewport::new(400, 400),
        &measurer(),
    )
    .expect("layout");
    assert!(plan.is_empty());

    let empty = layout_pie_chart(
        &[],
        &ChartConfig::default(),
        Viewport::new(400, 400),
        &measurer(),
    )
    .expect("layout");
    assert!(empty.is_empty());
}

#[test]
fn negative_segment_values_are_rejected() {
    let mut bad = segments(&[10.0]);
    bad[0].value = -1.0;
    let result = layout_pie_chart(
        &bad,
        &ChartConfig::default(),
        Viewport::new(400, 400),
        &measurer(),
    );
    assert!(result.is_err());
}

#[test]
fn donut_arcs_stroke_half_the_radius_at_ratio_half() {
    // Viewport 400x400 leaves a pie radius of 200 - 48 = 152.
    let config = ChartConfig::default()
        .with_donut(true, 0.5)
        .with_segment_spacing_degrees(0.0);
    let plan = layout_pie_chart(
        &segments(&[50.0, 50.0]),
        &config,
        Viewport::new(400, 400),
        &measurer(),
    )
    .expect("layout");

    assert_eq!(plan.paths.len(), 2);
    for path in &plan.paths {
        let PathStyle::Stroke { width_px, cap, .. } = path.style else {
            panic!("donut segments must be stroked arcs");
        };
        assert_relative_eq!(width_px, 152.0 * 0.5);
        assert_eq!(cap, LineCap::Butt);
        assert!(!path.commands.iter().any(|c| matches!(c, PathCommand::Close)));
    }
    plan.validate().expect("valid plan");
}

#[test]
fn pie_wedges_start_at_the_center_and_close() {
    let config = ChartConfig::default().with_donut(false, 0.0);
    let plan = layout_pie_chart(
        &segments(&[30.0, 70.0]),
        &config,
        Viewport::new(400, 400),
        &measurer(),
    )
    .expect("layout");

    for path in &plan.paths {
        assert!(matches!(path.style, PathStyle::Fill { .. }));
        assert_eq!(path.commands[0], PathCommand::MoveTo { x: 200.0, y: 200.0 });
        assert_eq!(path.commands.last(), Some(&PathCommand::Close));
    }
}

#[test]
fn slivers_are_left_unlabeled() {
    // 1 of 200 at 0 spacing sweeps 1.8 degrees, below the 5 degree floor.
    let config = ChartConfig::default().with_segment_spacing_degrees(0.0);
    let plan = layout_pie_chart(
        &segments(&[1.0, 199.0]),
        &config,
        Viewport::new(400, 400),
        &measurer(),
    )
    .expect("layout");

    assert_eq!(plan.labels.len(), 1);
    assert_eq!(plan.gridlines.len(), 1);
    assert!(plan.labels[0].text.contains("99.5%"));
}

#[test]
fn labels_anchor_beyond_the_leader_line() {
    let plan = layout_pie_chart(
        &segments(&[50.0, 50.0]),
        &ChartConfig::default().with_segment_spacing_degrees(0.0),
        Viewport::new(400, 400),
        &measurer(),
    )
    .expect("layout");

    assert_eq!(plan.labels.len(), 2);
    assert_eq!(plan.gridlines.len(), 2);

    // First segment's mid-angle points right (0 degrees): the leader line
    // runs outward and the label center sits further out still.
    let leader = plan.gridlines[0];
    assert!(leader.x2 > leader.x1);
    assert!(leader.x1 > 200.0 + 152.0 - 1e-9);
    let label = &plan.labels[0];
    let label_center_x = label.x + label.width * 0.5;
    assert!(label_center_x > leader.x2);
    assert!(plan.labels[0].text.contains("50.0%"));
}

#[test]
fn segment_colors_flow_into_the_plan() {
    let segs = segments(&[25.0, 75.0]);
    let plan = layout_pie_chart(
        &segs,
        &ChartConfig::default(),
        Viewport::new(400, 400),
        &measurer(),
    )
    .expect("layout");

    let PathStyle::Fill { color } = plan.paths[0].style else {
        panic!("default config fills pie wedges");
    };
    assert_eq!(color, segs[0].color);
}
