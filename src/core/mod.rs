pub mod curve;
pub mod decimation;
pub mod format;
pub mod palette;
pub mod scale;
pub mod types;

pub use curve::{PixelPoint, build_path, rect_commands, rounded_rect_commands};
pub use decimation::{ESTIMATED_LABEL_WIDTH_PX, annotation_step, select_visible_indices};
pub use format::{format_duration, format_value};
pub use palette::{BASE_PALETTE, generate_colors};
pub use scale::{LinearScale, PlotInsets, PlotRect};
pub use types::{DataPoint, DataSeries, PieSegment, Viewport};
