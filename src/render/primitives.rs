use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Returns a copy with the alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke end-cap shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// On/off dash lengths for dashed strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on_px: f64,
    pub off_px: f64,
}

impl DashPattern {
    pub fn validate(self) -> ChartResult<()> {
        if !self.on_px.is_finite()
            || !self.off_px.is_finite()
            || self.on_px <= 0.0
            || self.off_px < 0.0
        {
            return Err(ChartError::InvalidData(
                "dash pattern lengths must be finite, on > 0 and off >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One step of a path outline in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    fn coordinates(self) -> [f64; 6] {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => [x, y, x, y, x, y],
            Self::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => [x1, y1, x2, y2, x, y],
            Self::Close => [0.0; 6],
        }
    }
}

/// Rasterization style for one path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathStyle {
    Fill {
        color: Color,
    },
    Stroke {
        color: Color,
        width_px: f64,
        cap: LineCap,
    },
}

impl PathStyle {
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Fill { color } => color.validate(),
            Self::Stroke {
                color, width_px, ..
            } => {
                if !width_px.is_finite() || width_px <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "path stroke width must be finite and > 0".to_owned(),
                    ));
                }
                color.validate()
            }
        }
    }
}

/// Draw command for one filled or stroked path in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSpec {
    pub commands: Vec<PathCommand>,
    pub style: PathStyle,
}

impl PathSpec {
    #[must_use]
    pub fn new(commands: Vec<PathCommand>, style: PathStyle) -> Self {
        Self { commands, style }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.commands.is_empty() {
            return Err(ChartError::InvalidData(
                "path must contain at least one command".to_owned(),
            ));
        }
        if !matches!(self.commands[0], PathCommand::MoveTo { .. }) {
            return Err(ChartError::InvalidData(
                "path must start with MoveTo".to_owned(),
            ));
        }
        for command in &self.commands {
            if command.coordinates().iter().any(|v| !v.is_finite()) {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        self.style.validate()
    }
}

/// Draw command for one filled or outlined circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: Color,
    pub fill: bool,
}

impl CircleSpec {
    #[must_use]
    pub const fn filled(cx: f64, cy: f64, radius: f64, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            color,
            fill: true,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    #[serde(default)]
    pub dash: Option<DashPattern>,
}

impl LineSpec {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: None,
        }
    }

    #[must_use]
    pub const fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = self.dash {
            dash.validate()?;
        }
        self.color.validate()
    }
}

/// Font parameters the host needs to rasterize a label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub color: Color,
}

impl TextStyle {
    #[must_use]
    pub const fn new(font_size_px: f64, color: Color) -> Self {
        Self {
            font_size_px,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Pre-measured label placed by its top-left corner.
///
/// The engine resolves alignment against the measured extent before emitting,
/// so hosts draw the text block as-is. A zero extent marks a failed
/// measurement; the label is still positioned at its anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub style: TextStyle,
}

impl PositionedText {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: TextStyle,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            style,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "text extent must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}
