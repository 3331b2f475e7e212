use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::ChartConfig;
use crate::core::{PieSegment, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    DrawPlan, LineCap, LineSpec, PathCommand, PathSpec, PathStyle, PositionedText, TextMeasurer,
    TextStyle,
};

/// Segments start at 12 o'clock and advance clockwise.
pub const PIE_START_ANGLE_DEGREES: f64 = -90.0;

/// Ring kept free around the pie body for leader lines and labels.
const RADIAL_LABEL_MARGIN_PX: f64 = 48.0;
const LEADER_START_OFFSET_PX: f64 = 4.0;
const LEADER_END_OFFSET_PX: f64 = 16.0;
const LABEL_OFFSET_PX: f64 = 28.0;
const LEADER_STROKE_WIDTH_PX: f64 = 1.0;

/// Sweep below which a segment gets no external label. The tighter bound
/// applies when inter-segment spacing already separates the slices.
const MIN_LABELED_SWEEP_SPACED_DEGREES: f64 = 3.0;
const MIN_LABELED_SWEEP_DEGREES: f64 = 5.0;

/// Start angle and angular extent of one laid-out segment, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentAngle {
    pub start_degrees: f64,
    pub sweep_degrees: f64,
}

/// Distributes `360 - spacing * n` degrees across segments by value share.
///
/// Returns an empty list when the value total is not positive; zero-value
/// segments keep a zero sweep so indices stay aligned with the input. The
/// running start angle is the only state and lives entirely in this fold.
#[must_use]
pub fn segment_angles(segments: &[PieSegment], spacing_degrees: f64) -> Vec<SegmentAngle> {
    let total: f64 = segments.iter().map(|segment| segment.value).sum();
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    let available = 360.0 - spacing_degrees * segments.len() as f64;
    let mut start = PIE_START_ANGLE_DEGREES;
    segments
        .iter()
        .map(|segment| {
            let sweep = segment.value / total * available;
            let angle = SegmentAngle {
                start_degrees: start,
                sweep_degrees: sweep,
            };
            start += sweep + spacing_degrees;
            angle
        })
        .collect()
}

/// Lays out a pie or donut chart with external leader-line labels.
///
/// A non-positive value total produces an empty plan. Donut mode draws each
/// segment as a stroked arc of width `radius - inner_radius` centered
/// between the two radii; pie mode fills the wedge. Labels are suppressed
/// for slivers below the minimum sweep so dense charts stay readable.
pub fn layout_pie_chart(
    segments: &[PieSegment],
    config: &ChartConfig,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> ChartResult<DrawPlan> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    config.validate()?;
    for segment in segments {
        segment.validate()?;
    }

    let mut plan = DrawPlan::new(viewport);
    let angles = segment_angles(segments, config.segment_spacing_degrees);
    if angles.is_empty() {
        debug!(segments = segments.len(), "pie layout skipped: total <= 0");
        return Ok(plan);
    }

    let center_x = f64::from(viewport.width) * 0.5;
    let center_y = f64::from(viewport.height) * 0.5;
    let radius =
        f64::from(viewport.width.min(viewport.height)) * 0.5 - RADIAL_LABEL_MARGIN_PX;
    if radius <= 0.0 {
        debug!("pie layout skipped: viewport too small for pie body");
        return Ok(plan);
    }

    let total: f64 = segments.iter().map(|segment| segment.value).sum();
    let inner_radius = radius * config.donut_hole_ratio;
    let ring_width = radius - inner_radius;
    let label_threshold = if config.segment_spacing_degrees > 0.0 {
        MIN_LABELED_SWEEP_SPACED_DEGREES
    } else {
        MIN_LABELED_SWEEP_DEGREES
    };
    let label_style = TextStyle::new(config.font_size_px, config.text_color);

    for (segment, angle) in segments.iter().zip(&angles) {
        if angle.sweep_degrees <= 0.0 {
            continue;
        }
        trace!(
            label = %segment.label,
            start = angle.start_degrees,
            sweep = angle.sweep_degrees,
            "placing segment"
        );

        if config.is_donut {
            if ring_width > 0.0 {
                let arc_radius = inner_radius + ring_width * 0.5;
                let commands = arc_commands(
                    center_x,
                    center_y,
                    arc_radius,
                    angle.start_degrees,
                    angle.sweep_degrees,
                    false,
                );
                plan.paths.push(PathSpec::new(
                    commands,
                    PathStyle::Stroke {
                        color: segment.color,
                        width_px: ring_width,
                        cap: LineCap::Butt,
                    },
                ));
            }
        } else {
            let commands = arc_commands(
                center_x,
                center_y,
                radius,
                angle.start_degrees,
                angle.sweep_degrees,
                true,
            );
            plan.paths.push(PathSpec::new(
                commands,
                PathStyle::Fill {
                    color: segment.color,
                },
            ));
        }

        if angle.sweep_degrees > label_threshold {
            let mid = (angle.start_degrees + angle.sweep_degrees * 0.5).to_radians();
            let (dir_x, dir_y) = (mid.cos(), mid.sin());

            plan.gridlines.push(LineSpec::new(
                center_x + (radius + LEADER_START_OFFSET_PX) * dir_x,
                center_y + (radius + LEADER_START_OFFSET_PX) * dir_y,
                center_x + (radius + LEADER_END_OFFSET_PX) * dir_x,
                center_y + (radius + LEADER_END_OFFSET_PX) * dir_y,
                LEADER_STROKE_WIDTH_PX,
                segment.color,
            ));

            let percent = segment.value / total * 100.0;
            let text = if segment.label.is_empty() {
                format!("{percent:.1}%")
            } else {
                format!("{} {percent:.1}%", segment.label)
            };
            let extent = measurer.measure(&text, label_style);
            let anchor_x = center_x + (radius + LABEL_OFFSET_PX) * dir_x;
            let anchor_y = center_y + (radius + LABEL_OFFSET_PX) * dir_y;
            plan.labels.push(PositionedText::new(
                text,
                anchor_x - extent.width * 0.5,
                anchor_y - extent.height * 0.5,
                extent.width,
                extent.height,
                label_style,
            ));
        }
    }

    trace!(
        segments = segments.len(),
        paths = plan.paths.len(),
        labels = plan.labels.len(),
        "pie layout done"
    );
    Ok(plan)
}

/// Approximates one circular arc with cubic segments of at most 90 degrees.
///
/// `wedge` pins the path to the center first and closes it, producing a
/// fillable pie slice; otherwise the open arc is returned for stroking.
fn arc_commands(
    cx: f64,
    cy: f64,
    radius: f64,
    start_degrees: f64,
    sweep_degrees: f64,
    wedge: bool,
) -> Vec<PathCommand> {
    let steps = (sweep_degrees / 90.0).ceil().max(1.0) as usize;
    let delta = (sweep_degrees / steps as f64).to_radians();
    let kappa = 4.0 / 3.0 * (delta / 4.0).tan();

    // A full circle needs at most four sub-arcs, so boundaries fit inline.
    let mut boundaries: SmallVec<[f64; 5]> = SmallVec::new();
    let start = start_degrees.to_radians();
    for step in 0..=steps {
        boundaries.push(start + delta * step as f64);
    }

    let point_at = |angle: f64| (cx + radius * angle.cos(), cy + radius * angle.sin());

    let mut commands = Vec::with_capacity(steps + 3);
    let (start_x, start_y) = point_at(boundaries[0]);
    if wedge {
        commands.push(PathCommand::MoveTo { x: cx, y: cy });
        commands.push(PathCommand::LineTo {
            x: start_x,
            y: start_y,
        });
    } else {
        commands.push(PathCommand::MoveTo {
            x: start_x,
            y: start_y,
        });
    }

    for pair in boundaries.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let (x0, y0) = point_at(from);
        let (x3, y3) = point_at(to);
        commands.push(PathCommand::CubicTo {
            x1: x0 - kappa * radius * from.sin(),
            y1: y0 + kappa * radius * from.cos(),
            x2: x3 + kappa * radius * to.sin(),
            y2: y3 - kappa * radius * to.cos(),
            x: x3,
            y: y3,
        });
    }

    if wedge {
        commands.push(PathCommand::Close);
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::arc_commands;
    use crate::render::PathCommand;

    #[test]
    fn quarter_arc_lands_on_exact_endpoint() {
        let commands = arc_commands(0.0, 0.0, 100.0, -90.0, 90.0, false);
        let Some(PathCommand::CubicTo { x, y, .. }) = commands.last().copied() else {
            panic!("expected trailing cubic");
        };
        assert!((x - 100.0).abs() <= 1e-9);
        assert!(y.abs() <= 1e-9);
    }

    #[test]
    fn wide_sweeps_split_into_sub_arcs() {
        let commands = arc_commands(0.0, 0.0, 50.0, 0.0, 270.0, false);
        let cubics = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
            .count();
        assert_eq!(cubics, 3);
    }
}
