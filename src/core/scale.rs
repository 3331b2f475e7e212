use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Fixed space reserved next to the value axis before `label_spacing` is added.
pub const AXIS_BASE_SPACE_PX: f64 = 40.0;
/// Base padding on the side opposite the value axis.
pub const EDGE_PADDING_PX: f64 = 16.0;
/// Fixed padding above the plot area.
pub const TOP_PADDING_PX: f64 = 16.0;
/// Band under the plot area reserved for category labels.
pub const CATEGORY_BAND_PX: f64 = 28.0;

/// Linear domain-to-range mapper.
///
/// Ranges may be inverted (`range_start > range_end`) to express the usual
/// y-axis pixel flip. Degenerate domains are rejected at construction so the
/// mapping never divides by zero; layout entry points check for zero value
/// ranges before building a scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value into `[range_start, range_end]`.
    pub fn map(self, value: f64, range_start: f64, range_end: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData("range must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(range_start + normalized * (range_end - range_start))
    }

    /// Maps a range position back into the domain.
    pub fn invert(self, position: f64, range_start: f64, range_end: f64) -> ChartResult<f64> {
        if !position.is_finite() {
            return Err(ChartError::InvalidData(
                "position must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "range must be finite and non-zero".to_owned(),
            ));
        }

        let normalized = (position - range_start) / (range_end - range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

/// Resolved padding around the plot area.
///
/// The value-axis side reserves `AXIS_BASE_SPACE_PX + label_spacing`; the
/// opposite side keeps the fixed edge padding. Left and right swap when the
/// axis sits on the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotInsets {
    #[must_use]
    pub fn resolve(config: &ChartConfig) -> Self {
        let axis_space = AXIS_BASE_SPACE_PX + config.label_spacing;
        let (left, right) = if config.axis_on_right {
            (EDGE_PADDING_PX, axis_space)
        } else {
            (axis_space, EDGE_PADDING_PX)
        };

        Self {
            left,
            right,
            top: TOP_PADDING_PX,
            bottom: CATEGORY_BAND_PX,
        }
    }
}

/// Plot area in pixel space after insets are subtracted from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    /// Returns `None` when the viewport is too small to hold a plot area.
    #[must_use]
    pub fn from_insets(viewport: Viewport, insets: PlotInsets) -> Option<Self> {
        let width = f64::from(viewport.width) - insets.left - insets.right;
        let height = f64::from(viewport.height) - insets.top - insets.bottom;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            left: insets.left,
            top: insets.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.left + self.width * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.top + self.height * 0.5
    }
}
