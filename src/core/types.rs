use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One sample of an aggregated statistics series.
///
/// `x` is an ordinal or numeric position, `y` the plotted value. `label` is
/// the category shown on the x axis and `value_text` the pre-formatted
/// annotation above the point; both may be empty, which suppresses the
/// corresponding label output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value_text: String,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            label: String::new(),
            value_text: String::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_value_text(mut self, value_text: impl Into<String>) -> Self {
        self.value_text = value_text.into();
        self
    }
}

/// Ordered point collection plotted as one line, area or bar group.
///
/// Ordering is significant and defines x-axis order. A series with fewer
/// than two points is valid but produces no stroke path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub name: String,
    pub points: Vec<DataPoint>,
    pub color: Color,
}

impl DataSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>, color: Color) -> Self {
        Self {
            name: name.into(),
            points,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for point in &self.points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` contains a non-finite point",
                    self.name
                )));
            }
        }
        self.color.validate()
    }
}

/// One slice of a pie or donut chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSegment {
    pub value: f64,
    pub label: String,
    pub color: Color,
}

impl PieSegment {
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>, color: Color) -> Self {
        Self {
            value,
            label: label.into(),
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "segment `{}` value must be finite and >= 0",
                self.label
            )));
        }
        self.color.validate()
    }
}
