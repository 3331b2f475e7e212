//! shelf-charts: chart geometry and layout engine.
//!
//! This crate turns aggregated reading-statistics series into concrete pixel
//! geometry — axis scaling, smoothed paths, label decimation, radial segment
//! sweeps — and hands the result back as a plain-data [`render::DrawPlan`].
//! It never draws: the host UI supplies text measurement and rasterizes the
//! plan with whatever toolkit it runs on.

pub mod config;
pub mod core;
pub mod error;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use config::ChartConfig;
pub use error::{ChartError, ChartResult};
pub use layout::{layout_bar_chart, layout_line_chart, layout_pie_chart};
pub use render::DrawPlan;
