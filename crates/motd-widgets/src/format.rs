//! Shared formatting helpers for widget output.
//!
//! All functions are pure and easy to test in isolation.

const GIB: u64 = 1024 * 1024 * 1024;

/// Format an uptime in seconds as `"3d 4h 7m"`.
///
/// Zero days and zero hours are omitted; minutes are always shown.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let mins = (secs % 3600) / 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    parts.push(format!("{mins}m"));
    parts.join(" ")
}

/// Byte count as fractional gibibytes.
pub fn gib(bytes: u64) -> f64 {
    bytes as f64 / GIB as f64
}

/// `"used/total GiB (pct%)"` usage summary.
pub fn format_usage(used: u64, total: u64) -> String {
    let percent = if total > 0 {
        used as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!("{:.1}/{:.1} GiB ({:.0}%)", gib(used), gib(total), percent)
}

/// Celsius reading in the configured unit, `"f"` or anything else for `"c"`.
pub fn format_temp(celsius: f32, unit: &str) -> String {
    if unit == "f" {
        format!("{:.1}°F", celsius * 9.0 / 5.0 + 32.0)
    } else {
        format!("{celsius:.1}°C")
    }
}

/// `"s"` when the count calls for a plural.
pub fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_minutes_only() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(45 * 60), "45m");
    }

    #[test]
    fn uptime_hours_and_minutes() {
        assert_eq!(format_uptime(2 * 3600 + 15 * 60), "2h 15m");
    }

    #[test]
    fn uptime_days_hours_minutes() {
        assert_eq!(format_uptime(3 * 86400 + 3600 + 45 * 60), "3d 1h 45m");
    }

    #[test]
    fn uptime_days_without_hours() {
        assert_eq!(format_uptime(2 * 86400 + 30 * 60), "2d 30m");
    }

    #[test]
    fn gib_converts_bytes() {
        assert_eq!(gib(GIB), 1.0);
        assert_eq!(gib(0), 0.0);
    }

    #[test]
    fn usage_summary_includes_percent() {
        assert_eq!(format_usage(GIB, 4 * GIB), "1.0/4.0 GiB (25%)");
    }

    #[test]
    fn usage_with_zero_total_avoids_division() {
        assert_eq!(format_usage(0, 0), "0.0/0.0 GiB (0%)");
    }

    #[test]
    fn temp_fahrenheit() {
        assert_eq!(format_temp(100.0, "f"), "212.0°F");
    }

    #[test]
    fn temp_celsius() {
        assert_eq!(format_temp(45.5, "c"), "45.5°C");
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(0), "s");
        assert_eq!(plural(2), "s");
    }
}
