pub mod cartesian;
pub mod radial;

pub use cartesian::{
    BAR_WIDTH_FRACTION, GRID_BAND_COUNT, layout_bar_chart, layout_line_chart, value_domain,
};
pub use radial::{PIE_START_ANGLE_DEGREES, SegmentAngle, layout_pie_chart, segment_angles};
