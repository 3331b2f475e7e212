use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Chart layout options resolved by the caller before invoking the engine.
///
/// The engine has zero theme awareness: every color it emits comes from this
/// config or from the series/segment data. The struct is a pure value object;
/// construct it once per draw call and never mutate it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub show_points: bool,
    pub show_grid: bool,
    pub show_area: bool,
    pub smooth_curve: bool,
    pub axis_on_right: bool,
    pub label_spacing: f64,
    pub is_donut: bool,
    pub donut_hole_ratio: f64,
    pub segment_spacing_degrees: f64,
    pub rounded_bars: bool,
    pub corner_radius: f64,
    pub font_size_px: f64,
    pub text_color: Color,
    pub grid_color: Color,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            show_points: true,
            show_grid: true,
            show_area: false,
            smooth_curve: true,
            axis_on_right: false,
            label_spacing: 8.0,
            is_donut: false,
            donut_hole_ratio: 0.6,
            segment_spacing_degrees: 2.0,
            rounded_bars: true,
            corner_radius: 8.0,
            font_size_px: 12.0,
            text_color: Color::rgb(0.20, 0.20, 0.24),
            grid_color: Color::rgba(0.50, 0.50, 0.55, 0.35),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_show_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    #[must_use]
    pub fn with_show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_show_area(mut self, show_area: bool) -> Self {
        self.show_area = show_area;
        self
    }

    #[must_use]
    pub fn with_smooth_curve(mut self, smooth_curve: bool) -> Self {
        self.smooth_curve = smooth_curve;
        self
    }

    #[must_use]
    pub fn with_axis_on_right(mut self, axis_on_right: bool) -> Self {
        self.axis_on_right = axis_on_right;
        self
    }

    #[must_use]
    pub fn with_label_spacing(mut self, label_spacing: f64) -> Self {
        self.label_spacing = label_spacing;
        self
    }

    #[must_use]
    pub fn with_donut(mut self, is_donut: bool, donut_hole_ratio: f64) -> Self {
        self.is_donut = is_donut;
        self.donut_hole_ratio = donut_hole_ratio;
        self
    }

    #[must_use]
    pub fn with_segment_spacing_degrees(mut self, segment_spacing_degrees: f64) -> Self {
        self.segment_spacing_degrees = segment_spacing_degrees;
        self
    }

    #[must_use]
    pub fn with_rounded_bars(mut self, rounded_bars: bool, corner_radius: f64) -> Self {
        self.rounded_bars = rounded_bars;
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, text_color: Color) -> Self {
        self.text_color = text_color;
        self
    }

    #[must_use]
    pub fn with_grid_color(mut self, grid_color: Color) -> Self {
        self.grid_color = grid_color;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (value, name) in [
            (self.label_spacing, "label_spacing"),
            (self.segment_spacing_degrees, "segment_spacing_degrees"),
            (self.corner_radius, "corner_radius"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        if !self.donut_hole_ratio.is_finite() || !(0.0..=1.0).contains(&self.donut_hole_ratio) {
            return Err(ChartError::InvalidConfig(
                "`donut_hole_ratio` must be finite and in [0, 1]".to_owned(),
            ));
        }

        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "`font_size_px` must be finite and > 0".to_owned(),
            ));
        }

        self.text_color.validate()?;
        self.grid_color.validate()
    }
}
