use crate::render::TextStyle;

/// Measured bounding box for one label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero extent used when a host measurement fails.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Host-supplied text measurement contract.
///
/// Implementations must be synchronous and pure for the same input; the
/// engine calls this mid-layout to center labels on their bounding box.
/// Returning `TextExtent::zero()` is the sanctioned failure mode and yields
/// a positioned label with zero extent instead of aborting the layout.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> TextExtent;
}

/// Character-count heuristic measurer for tests and headless hosts.
///
/// Width is `chars * font_size * char_width_ratio`, height is
/// `font_size * line_height_ratio`. Good enough for layout math where no
/// font shaping backend exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetricsMeasurer {
    pub char_width_ratio: f64,
    pub line_height_ratio: f64,
}

impl Default for FixedMetricsMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for FixedMetricsMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> TextExtent {
        if text.is_empty() {
            return TextExtent::zero();
        }
        TextExtent::new(
            text.chars().count() as f64 * style.font_size_px * self.char_width_ratio,
            style.font_size_px * self.line_height_ratio,
        )
    }
}
