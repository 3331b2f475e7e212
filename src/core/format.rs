use chrono::Duration;

/// Formats an axis or annotation value with K/M suffix thresholds.
///
/// `>= 1_000_000` becomes `{v/1e6:.1}M`, `>= 1_000` becomes `{v/1e3:.1}K`,
/// integral values print without a fraction, everything else keeps one
/// decimal. The thresholds are inclusive so `999_999` still reads
/// `"1000.0K"`, matching the labels users already see.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Formats a millisecond duration as its two most significant non-zero units.
///
/// Non-positive input reads `"0 minutes"`, as does a sub-second positive
/// duration. Unit names pluralize on any value other than one.
#[must_use]
pub fn format_duration(millis: i64) -> String {
    if millis <= 0 {
        return "0 minutes".to_owned();
    }

    let duration = Duration::milliseconds(millis);
    let days = duration.num_days();
    let hours = duration.num_hours() - days * 24;
    let minutes = duration.num_minutes() - duration.num_hours() * 60;
    let seconds = duration.num_seconds() - duration.num_minutes() * 60;

    let mut parts = Vec::with_capacity(2);
    for (value, unit) in [
        (days, "day"),
        (hours, "hour"),
        (minutes, "minute"),
        (seconds, "second"),
    ] {
        if value > 0 {
            parts.push(format_unit(value, unit));
            if parts.len() == 2 {
                break;
            }
        }
    }

    if parts.is_empty() {
        return "0 minutes".to_owned();
    }
    parts.join(" ")
}

fn format_unit(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("1 {unit}")
    } else {
        format!("{value} {unit}s")
    }
}
