use serde::{Deserialize, Serialize};

use crate::render::PathCommand;

/// Circle-to-Bezier control distance for a 90-degree corner arc.
const CORNER_KAPPA: f64 = 0.552_284_749_831;

/// Vertex in pixel coordinates consumed by the path builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Builds the outline for a line or area series.
///
/// Straight mode emits one `LineTo` per consecutive pair. Smooth mode emits
/// one cubic per pair with both control points on the horizontal midpoint
/// (`c1 = (mid_x, prev.y)`, `c2 = (mid_x, curr.y)`), which keeps the curve
/// through every data point with a horizontal tangency bias and never
/// overshoots. This is intentionally not a spline fit; the control-point
/// rule is a visual contract.
///
/// `close_to_baseline` appends the two baseline legs and a `Close` so the
/// same outline doubles as an area fill. Fewer than two points produce an
/// empty command list.
#[must_use]
pub fn build_path(
    points: &[PixelPoint],
    smooth: bool,
    close_to_baseline: Option<f64>,
) -> Vec<PathCommand> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(points.len() + 3);
    commands.push(PathCommand::MoveTo {
        x: points[0].x,
        y: points[0].y,
    });

    for pair in points.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if smooth {
            let mid_x = (prev.x + curr.x) * 0.5;
            commands.push(PathCommand::CubicTo {
                x1: mid_x,
                y1: prev.y,
                x2: mid_x,
                y2: curr.y,
                x: curr.x,
                y: curr.y,
            });
        } else {
            commands.push(PathCommand::LineTo {
                x: curr.x,
                y: curr.y,
            });
        }
    }

    if let Some(baseline_y) = close_to_baseline {
        let first = points[0];
        let last = points[points.len() - 1];
        commands.push(PathCommand::LineTo {
            x: last.x,
            y: baseline_y,
        });
        commands.push(PathCommand::LineTo {
            x: first.x,
            y: baseline_y,
        });
        commands.push(PathCommand::Close);
    }

    commands
}

/// Axis-aligned rectangle outline.
#[must_use]
pub fn rect_commands(left: f64, top: f64, width: f64, height: f64) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo { x: left, y: top },
        PathCommand::LineTo {
            x: left + width,
            y: top,
        },
        PathCommand::LineTo {
            x: left + width,
            y: top + height,
        },
        PathCommand::LineTo {
            x: left,
            y: top + height,
        },
        PathCommand::Close,
    ]
}

/// Rectangle outline with all four corners rounded by `radius`.
///
/// The caller clamps `radius` to half the shorter side; a zero radius falls
/// back to the plain rectangle.
#[must_use]
pub fn rounded_rect_commands(
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    radius: f64,
) -> Vec<PathCommand> {
    if radius <= 0.0 {
        return rect_commands(left, top, width, height);
    }

    let right = left + width;
    let bottom = top + height;
    let k = CORNER_KAPPA * radius;

    vec![
        PathCommand::MoveTo {
            x: left + radius,
            y: top,
        },
        PathCommand::LineTo {
            x: right - radius,
            y: top,
        },
        PathCommand::CubicTo {
            x1: right - radius + k,
            y1: top,
            x2: right,
            y2: top + radius - k,
            x: right,
            y: top + radius,
        },
        PathCommand::LineTo {
            x: right,
            y: bottom - radius,
        },
        PathCommand::CubicTo {
            x1: right,
            y1: bottom - radius + k,
            x2: right - radius + k,
            y2: bottom,
            x: right - radius,
            y: bottom,
        },
        PathCommand::LineTo {
            x: left + radius,
            y: bottom,
        },
        PathCommand::CubicTo {
            x1: left + radius - k,
            y1: bottom,
            x2: left,
            y2: bottom - radius + k,
            x: left,
            y: bottom - radius,
        },
        PathCommand::LineTo {
            x: left,
            y: top + radius,
        },
        PathCommand::CubicTo {
            x1: left,
            y1: top + radius - k,
            x2: left + radius - k,
            y2: top,
            x: left + radius,
            y: top,
        },
        PathCommand::Close,
    ]
}
