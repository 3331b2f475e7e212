use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::config::ChartConfig;
use crate::core::{
    DataSeries, ESTIMATED_LABEL_WIDTH_PX, LinearScale, PixelPoint, PlotInsets, PlotRect, Viewport,
    annotation_step, build_path, format_value, rect_commands, rounded_rect_commands,
    select_visible_indices,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CircleSpec, Color, DashPattern, DrawPlan, LineCap, LineSpec, PathSpec, PathStyle,
    PositionedText, TextMeasurer, TextStyle,
};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Number of value bands between gridlines; lines sit at `0..=GRID_BAND_COUNT`.
pub const GRID_BAND_COUNT: usize = 5;
/// Bar width as a fraction of one category slot; the rest is spacing.
pub const BAR_WIDTH_FRACTION: f64 = 0.7;

const GRID_STROKE_WIDTH_PX: f64 = 1.0;
const GRID_DASH: DashPattern = DashPattern {
    on_px: 4.0,
    off_px: 4.0,
};
const SERIES_STROKE_WIDTH_PX: f64 = 2.5;
const MARKER_OUTER_RADIUS_PX: f64 = 4.0;
const MARKER_INNER_RADIUS_PX: f64 = 2.0;
const AREA_FILL_ALPHA: f64 = 0.25;
const AXIS_TICK_GAP_PX: f64 = 6.0;
const VALUE_LABEL_GAP_PX: f64 = 6.0;
const CATEGORY_LABEL_GAP_PX: f64 = 6.0;

/// Min/max of the plotted values across every series point.
#[must_use]
pub fn value_domain(series_list: &[DataSeries]) -> Option<(f64, f64)> {
    let min = series_list
        .iter()
        .flat_map(|series| &series.points)
        .map(|point| OrderedFloat(point.y))
        .min()?;
    let max = series_list
        .iter()
        .flat_map(|series| &series.points)
        .map(|point| OrderedFloat(point.y))
        .max()?;
    Some((min.into_inner(), max.into_inner()))
}

fn x_domain(series_list: &[DataSeries]) -> Option<(f64, f64)> {
    let min = series_list
        .iter()
        .flat_map(|series| &series.points)
        .map(|point| OrderedFloat(point.x))
        .min()?;
    let max = series_list
        .iter()
        .flat_map(|series| &series.points)
        .map(|point| OrderedFloat(point.x))
        .max()?;
    Some((min.into_inner(), max.into_inner()))
}

/// Lays out a single-series bar chart.
///
/// Bars grow from the zero baseline (the domain is extended to include zero),
/// occupy `BAR_WIDTH_FRACTION` of their category slot and get rounded
/// corners clamped to half the bar extent when `rounded_bars` is set.
/// Empty input and zero value range yield an empty plan rather than an
/// error.
pub fn layout_bar_chart(
    series: &DataSeries,
    config: &ChartConfig,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> ChartResult<DrawPlan> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    config.validate()?;
    series.validate()?;

    let mut plan = DrawPlan::new(viewport);
    let count = series.points.len();
    if count == 0 {
        debug!(series = %series.name, "bar layout skipped: no points");
        return Ok(plan);
    }

    let Some((data_min, data_max)) = value_domain(std::slice::from_ref(series)) else {
        return Ok(plan);
    };
    // Bars grow from zero, so the domain always spans the baseline.
    let min_value = data_min.min(0.0);
    let max_value = data_max.max(0.0);
    if min_value == max_value {
        debug!(series = %series.name, "bar layout skipped: zero value range");
        return Ok(plan);
    }
    let Some(plot) = PlotRect::from_insets(viewport, PlotInsets::resolve(config)) else {
        debug!("bar layout skipped: viewport smaller than insets");
        return Ok(plan);
    };

    let scale = LinearScale::new(min_value, max_value)?;
    append_grid_and_axis(&mut plan, config, plot, scale, measurer)?;

    let value_style = TextStyle::new(config.font_size_px, config.text_color);
    let slot = plot.width / count as f64;
    let bar_width = slot * BAR_WIDTH_FRACTION;
    let spacing = slot * (1.0 - BAR_WIDTH_FRACTION);
    let zero_y = scale.map(0.0, plot.bottom(), plot.top)?;

    for (index, point) in series.points.iter().enumerate() {
        let x_left = plot.left + index as f64 * slot + spacing * 0.5;
        let value_y = scale.map(point.y, plot.bottom(), plot.top)?;
        let top = value_y.min(zero_y);
        let bar_height = (zero_y - value_y).abs();

        if bar_height > 0.0 {
            let radius = if config.rounded_bars {
                config
                    .corner_radius
                    .min(bar_width * 0.5)
                    .min(bar_height * 0.5)
            } else {
                0.0
            };
            let commands = if radius > 0.0 {
                rounded_rect_commands(x_left, top, bar_width, bar_height, radius)
            } else {
                rect_commands(x_left, top, bar_width, bar_height)
            };
            plan.paths.push(PathSpec::new(
                commands,
                PathStyle::Fill {
                    color: series.color,
                },
            ));
        }

        if !point.value_text.is_empty() {
            let extent = measurer.measure(&point.value_text, value_style);
            plan.labels.push(PositionedText::new(
                point.value_text.clone(),
                x_left + bar_width * 0.5 - extent.width * 0.5,
                top - VALUE_LABEL_GAP_PX - extent.height,
                extent.width,
                extent.height,
                value_style,
            ));
        }
    }

    append_category_labels(&mut plan, series, config, plot, measurer, |index| {
        plot.left + index as f64 * slot + slot * 0.5
    });

    trace!(
        bars = count,
        paths = plan.paths.len(),
        labels = plan.labels.len(),
        "bar layout done"
    );
    Ok(plan)
}

/// Lays out one or more line/area series over a shared value domain.
///
/// Each series contributes a stroke path (straight or midpoint-smoothed),
/// an optional area fill closed against the plot bottom, halo point
/// markers and stride-decimated value annotations. Series with fewer than
/// two points keep their markers and annotations but emit no path.
pub fn layout_line_chart(
    series_list: &[DataSeries],
    config: &ChartConfig,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> ChartResult<DrawPlan> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    config.validate()?;
    for series in series_list {
        series.validate()?;
    }

    let mut plan = DrawPlan::new(viewport);
    let Some((min_value, max_value)) = value_domain(series_list) else {
        debug!("line layout skipped: no points in any series");
        return Ok(plan);
    };
    if min_value == max_value {
        debug!(min_value, "line layout skipped: zero value range");
        return Ok(plan);
    }
    let Some(plot) = PlotRect::from_insets(viewport, PlotInsets::resolve(config)) else {
        debug!("line layout skipped: viewport smaller than insets");
        return Ok(plan);
    };

    let y_scale = LinearScale::new(min_value, max_value)?;
    let x_span = x_domain(series_list)
        .filter(|(x_min, x_max)| x_min != x_max)
        .map(|(x_min, x_max)| LinearScale::new(x_min, x_max))
        .transpose()?;

    append_grid_and_axis(&mut plan, config, plot, y_scale, measurer)?;

    #[cfg(feature = "parallel-projection")]
    let projected = series_list
        .par_iter()
        .map(|series| project_series_points(series, y_scale, x_span, plot))
        .collect::<ChartResult<Vec<_>>>()?;
    #[cfg(not(feature = "parallel-projection"))]
    let projected = series_list
        .iter()
        .map(|series| project_series_points(series, y_scale, x_span, plot))
        .collect::<ChartResult<Vec<_>>>()?;

    let value_style = TextStyle::new(config.font_size_px, config.text_color);
    for (series, points) in series_list.iter().zip(&projected) {
        trace!(series = %series.name, points = points.len(), "projecting series");

        if config.show_area && points.len() >= 2 {
            let commands = build_path(points, config.smooth_curve, Some(plot.bottom()));
            plan.paths.push(PathSpec::new(
                commands,
                PathStyle::Fill {
                    color: series.color.with_alpha(AREA_FILL_ALPHA),
                },
            ));
        }

        if points.len() >= 2 {
            let commands = build_path(points, config.smooth_curve, None);
            plan.paths.push(PathSpec::new(
                commands,
                PathStyle::Stroke {
                    color: series.color,
                    width_px: SERIES_STROKE_WIDTH_PX,
                    cap: LineCap::Round,
                },
            ));
        }

        if config.show_points {
            for point in points {
                plan.markers.push(CircleSpec::filled(
                    point.x,
                    point.y,
                    MARKER_OUTER_RADIUS_PX,
                    series.color,
                ));
                plan.markers.push(CircleSpec::filled(
                    point.x,
                    point.y,
                    MARKER_INNER_RADIUS_PX,
                    Color::WHITE,
                ));
            }
        }

        let step = annotation_step(series.points.len());
        for (index, (point, pixel)) in series.points.iter().zip(points).enumerate() {
            if point.value_text.is_empty() || index % step != 0 {
                continue;
            }
            let extent = measurer.measure(&point.value_text, value_style);
            plan.labels.push(PositionedText::new(
                point.value_text.clone(),
                pixel.x - extent.width * 0.5,
                pixel.y - MARKER_OUTER_RADIUS_PX - VALUE_LABEL_GAP_PX - extent.height,
                extent.width,
                extent.height,
                value_style,
            ));
        }
    }

    // Category labels come from the densest series so sparse overlays do not
    // starve the axis.
    if let Some((source_index, source)) = series_list
        .iter()
        .enumerate()
        .max_by_key(|(_, series)| series.points.len())
    {
        let positions = &projected[source_index];
        append_category_labels(&mut plan, source, config, plot, measurer, |index| {
            positions[index].x
        });
    }

    trace!(
        series = series_list.len(),
        paths = plan.paths.len(),
        markers = plan.markers.len(),
        "line layout done"
    );
    Ok(plan)
}

fn project_series_points(
    series: &DataSeries,
    y_scale: LinearScale,
    x_span: Option<LinearScale>,
    plot: PlotRect,
) -> ChartResult<Vec<PixelPoint>> {
    let mut points = Vec::with_capacity(series.points.len());
    for point in &series.points {
        let x = match x_span {
            Some(scale) => scale.map(point.x, plot.left, plot.right())?,
            // Degenerate x span: stack everything on the plot center.
            None => plot.center_x(),
        };
        let y = y_scale.map(point.y, plot.bottom(), plot.top)?;
        points.push(PixelPoint::new(x, y));
    }
    Ok(points)
}

fn append_grid_and_axis(
    plan: &mut DrawPlan,
    config: &ChartConfig,
    plot: PlotRect,
    scale: LinearScale,
    measurer: &dyn TextMeasurer,
) -> ChartResult<()> {
    let axis_style = TextStyle::new(config.font_size_px, config.text_color);
    let (min_value, max_value) = scale.domain();
    let band = (max_value - min_value) / GRID_BAND_COUNT as f64;

    for index in 0..=GRID_BAND_COUNT {
        let value = min_value + band * index as f64;
        let y = scale.map(value, plot.bottom(), plot.top)?;

        if config.show_grid {
            plan.gridlines.push(
                LineSpec::new(
                    plot.left,
                    y,
                    plot.right(),
                    y,
                    GRID_STROKE_WIDTH_PX,
                    config.grid_color,
                )
                .with_dash(GRID_DASH),
            );
        }

        let text = format_value(value);
        let extent = measurer.measure(&text, axis_style);
        let x = if config.axis_on_right {
            plot.right() + AXIS_TICK_GAP_PX
        } else {
            plot.left - AXIS_TICK_GAP_PX - extent.width
        };
        plan.labels.push(PositionedText::new(
            text,
            x,
            y - extent.height * 0.5,
            extent.width,
            extent.height,
            axis_style,
        ));
    }

    Ok(())
}

fn append_category_labels(
    plan: &mut DrawPlan,
    series: &DataSeries,
    config: &ChartConfig,
    plot: PlotRect,
    measurer: &dyn TextMeasurer,
    center_x_of: impl Fn(usize) -> f64,
) {
    let style = TextStyle::new(config.font_size_px, config.text_color);
    let visible = select_visible_indices(series.points.len(), plot.width, ESTIMATED_LABEL_WIDTH_PX);

    for index in visible {
        let point = &series.points[index];
        if point.label.is_empty() {
            continue;
        }
        let extent = measurer.measure(&point.label, style);
        plan.labels.push(PositionedText::new(
            point.label.clone(),
            center_x_of(index) - extent.width * 0.5,
            plot.bottom() + CATEGORY_LABEL_GAP_PX,
            extent.width,
            extent.height,
            style,
        ));
    }
}
