/// Assumed label footprint when the caller has no measured width.
pub const ESTIMATED_LABEL_WIDTH_PX: f64 = 60.0;

/// Selects the category-label indices that fit `available_width`.
///
/// The branching reproduces the shipped axis policy verbatim; the 20/30
/// count thresholds and the 3rd/5th strides are behavioral contracts, not
/// tunables:
///
/// 1. everything fits -> show all indices;
/// 2. more than 20 labels -> always pin both boundary indices, plus every
///    5th index above 30 labels or every 3rd index at 21..=30;
/// 3. otherwise stride by `total_count / max_fit` and pin the last index.
///
/// Returned indices are ascending and unique.
#[must_use]
pub fn select_visible_indices(
    total_count: usize,
    available_width: f64,
    estimated_label_width: f64,
) -> Vec<usize> {
    if total_count == 0 {
        return Vec::new();
    }

    let max_fit = if available_width.is_finite()
        && estimated_label_width.is_finite()
        && estimated_label_width > 0.0
        && available_width > 0.0
    {
        (available_width / estimated_label_width).floor() as usize
    } else {
        0
    };

    if total_count <= max_fit {
        return (0..total_count).collect();
    }

    let last = total_count - 1;
    let mut visible = Vec::new();

    if total_count > 20 {
        let step = if total_count > 30 { 5 } else { 3 };
        for index in 0..total_count {
            if index == 0 || index == last || index % step == 0 {
                visible.push(index);
            }
        }
    } else {
        let step = (total_count / max_fit.max(1)).max(1);
        for index in 0..total_count {
            if index % step == 0 || index == last {
                visible.push(index);
            }
        }
    }

    visible
}

/// Stride for point-value annotations on line and area charts.
///
/// Independent from the category-label policy above: small series annotate
/// every point, larger series every `max_points / 5`th point.
#[must_use]
pub fn annotation_step(max_points: usize) -> usize {
    (max_points / 5).max(1)
}
