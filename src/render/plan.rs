use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CircleSpec, LineSpec, PathSpec, PositionedText};

pub const DRAW_PLAN_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DrawPlanJsonContractV1 {
    schema_version: u32,
    plan: DrawPlan,
}

/// Backend-agnostic scene for one chart layout pass.
///
/// The engine hands the plan to the caller and retains no reference.
/// `gridlines` holds every plain line segment, including pie leader lines;
/// drawing paths first, then markers, lines and labels gives the expected
/// z-order, but the plan itself is unordered data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPlan {
    pub viewport: Viewport,
    pub paths: Vec<PathSpec>,
    pub markers: Vec<CircleSpec>,
    pub labels: Vec<PositionedText>,
    pub gridlines: Vec<LineSpec>,
}

impl DrawPlan {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paths: Vec::new(),
            markers: Vec::new(),
            labels: Vec::new(),
            gridlines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathSpec) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: CircleSpec) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: PositionedText) -> Self {
        self.labels.push(label);
        self
    }

    #[must_use]
    pub fn with_gridline(mut self, gridline: LineSpec) -> Self {
        self.gridlines.push(gridline);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        for gridline in &self.gridlines {
            gridline.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.markers.is_empty()
            && self.labels.is_empty()
            && self.gridlines.is_empty()
    }

    /// Serializes the plan wrapped in the v1 JSON contract envelope.
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DrawPlanJsonContractV1 {
            schema_version: DRAW_PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize draw plan contract v1: {e}"))
        })
    }

    /// Parses either a bare plan or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(plan) = serde_json::from_str::<Self>(input) {
            return Ok(plan);
        }
        let payload: DrawPlanJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse draw plan json payload: {e}"))
        })?;
        if payload.schema_version != DRAW_PLAN_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported draw plan schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plan)
    }
}
