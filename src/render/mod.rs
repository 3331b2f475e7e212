mod measure;
mod plan;
mod primitives;

pub use measure::{FixedMetricsMeasurer, TextExtent, TextMeasurer};
pub use plan::{DRAW_PLAN_JSON_SCHEMA_V1, DrawPlan};
pub use primitives::{
    CircleSpec, Color, DashPattern, LineCap, LineSpec, PathCommand, PathSpec, PathStyle,
    PositionedText, TextStyle,
};
