use crate::render::Color;

/// Alpha removed per full reuse pass over the base palette.
pub const PALETTE_ALPHA_STEP: f64 = 0.1;
/// Lowest alpha the stepping may reach.
pub const PALETTE_ALPHA_FLOOR: f64 = 0.3;

/// Fixed series palette; callers index it directly or via `generate_colors`.
pub const BASE_PALETTE: [Color; 12] = [
    Color::rgb(0.26, 0.45, 0.91),
    Color::rgb(0.91, 0.45, 0.32),
    Color::rgb(0.18, 0.69, 0.54),
    Color::rgb(0.85, 0.29, 0.47),
    Color::rgb(0.55, 0.36, 0.82),
    Color::rgb(0.95, 0.73, 0.26),
    Color::rgb(0.23, 0.68, 0.82),
    Color::rgb(0.62, 0.72, 0.29),
    Color::rgb(0.82, 0.40, 0.74),
    Color::rgb(0.47, 0.56, 0.62),
    Color::rgb(0.74, 0.48, 0.34),
    Color::rgb(0.35, 0.42, 0.78),
];

/// Returns `n` deterministic segment colors.
///
/// The first twelve are the base palette verbatim. Beyond that the palette
/// cycles, dropping `PALETTE_ALPHA_STEP` of alpha on each reuse pass until
/// the `PALETTE_ALPHA_FLOOR` is reached, so arbitrarily long segment lists
/// stay distinguishable without ever repeating an exact color early.
#[must_use]
pub fn generate_colors(n: usize) -> Vec<Color> {
    (0..n)
        .map(|index| {
            let base = BASE_PALETTE[index % BASE_PALETTE.len()];
            let reuse_pass = (index / BASE_PALETTE.len()) as f64;
            let alpha = (1.0 - PALETTE_ALPHA_STEP * reuse_pass).max(PALETTE_ALPHA_FLOOR);
            base.with_alpha(alpha)
        })
        .collect()
}
