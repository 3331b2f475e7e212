use shelf_charts::core::palette::{PALETTE_ALPHA_FLOOR, PALETTE_ALPHA_STEP};
use shelf_charts::core::{BASE_PALETTE, format_duration, format_value, generate_colors};

#[test]
fn small_requests_return_the_base_palette_prefix() {
    let colors = generate_colors(5);
    assert_eq!(colors, BASE_PALETTE[..5].to_vec());
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(generate_colors(31), generate_colors(31));
}

#[test]
fn reuse_passes_step_down_alpha() {
    let colors = generate_colors(30);

    assert_eq!(colors[12].alpha, 1.0 - PALETTE_ALPHA_STEP);
    assert_eq!(colors[12].red, BASE_PALETTE[0].red);
    assert_eq!(colors[25].alpha, 1.0 - 2.0 * PALETTE_ALPHA_STEP);
}

#[test]
fn alpha_never_drops_below_the_floor() {
    let colors = generate_colors(200);
    for color in colors {
        assert!(color.alpha >= PALETTE_ALPHA_FLOOR);
    }
}

#[test]
fn value_formatting_boundaries_hold() {
    assert_eq!(format_value(999.0), "999");
    assert_eq!(format_value(1_000.0), "1.0K");
    assert_eq!(format_value(999_999.0), "1000.0K");
    assert_eq!(format_value(1_000_000.0), "1.0M");
    assert_eq!(format_value(2_500_000.0), "2.5M");
}

#[test]
fn plain_values_keep_at_most_one_decimal() {
    assert_eq!(format_value(12.0), "12");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(7.25), "7.2");
    assert_eq!(format_value(-3.0), "-3");
}

#[test]
fn durations_print_two_most_significant_units() {
    assert_eq!(format_duration((3 * 3600 + 12 * 60) * 1000), "3 hours 12 minutes");
    assert_eq!(format_duration(90_061_000), "1 day 1 hour");
    assert_eq!(format_duration((86_400 + 300) * 1000), "1 day 5 minutes");
    assert_eq!(format_duration(61_000), "1 minute 1 second");
    assert_eq!(format_duration(45_000), "45 seconds");
}

#[test]
fn degenerate_durations_read_zero_minutes() {
    assert_eq!(format_duration(0), "0 minutes");
    assert_eq!(format_duration(-5_000), "0 minutes");
    assert_eq!(format_duration(500), "0 minutes");
}
