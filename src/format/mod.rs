//! Human-readable formatting for durations, distances and difficulty tiers.

use crate::models::Difficulty;

/// Style tag for tiers that are unknown or missing.
pub const NEUTRAL_COLOR: &str = "text-gray-600 bg-gray-100";

/// Formats minutes as `"Xh Ym"`, dropping a zero component.
///
/// ```
/// use trip_cost::format::format_duration;
///
/// assert_eq!(format_duration(125), "2h 5m");
/// assert_eq!(format_duration(120), "2h");
/// assert_eq!(format_duration(45), "45m");
/// assert_eq!(format_duration(0), "0m");
/// ```
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        return format!("{mins}m");
    }
    if mins == 0 {
        return format!("{hours}h");
    }
    format!("{hours}h {mins}m")
}

/// Formats kilometers, switching to thousands with one decimal at 1000 km.
///
/// Halfway cases round up (`1250` gives `"1.3k km"`).
///
/// ```
/// use trip_cost::format::format_distance;
///
/// assert_eq!(format_distance(1500.0), "1.5k km");
/// assert_eq!(format_distance(999.0), "999 km");
/// ```
pub fn format_distance(km: f64) -> String {
    if km >= 1000.0 {
        return format!("{}k km", to_fixed_1(km / 1000.0));
    }
    format!("{km} km")
}

/// Display style tag for a difficulty tier.
pub fn difficulty_color(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "text-green-600 bg-green-100",
        Difficulty::Moderate => "text-yellow-600 bg-yellow-100",
        Difficulty::Challenging => "text-red-600 bg-red-100",
    }
}

/// Style tag for a tier label; unrecognized labels get [`NEUTRAL_COLOR`].
pub fn difficulty_color_for_label(label: &str) -> &'static str {
    label
        .parse::<Difficulty>()
        .map(difficulty_color)
        .unwrap_or(NEUTRAL_COLOR)
}

/// One decimal place, exact binary ties rounding toward the larger value.
fn to_fixed_1(value: f64) -> String {
    let scaled = value * 10.0;
    // mul_add recovers the rounding error of `value * 10.0`; zero means the
    // product is exact and a .5 fraction is a true tie.
    let exact = value.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.fract() == 0.5 {
        let tenths = scaled.ceil();
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(59), "59m");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(61), "1h 1m");
        assert_eq!(format_duration(125), "2h 5m");
        assert_eq!(format_duration(1440), "24h");
    }

    #[test]
    fn test_format_distance_small() {
        assert_eq!(format_distance(0.0), "0 km");
        assert_eq!(format_distance(999.0), "999 km");
        assert_eq!(format_distance(330.0), "330 km");
        assert_eq!(format_distance(12.5), "12.5 km");
    }

    #[test]
    fn test_format_distance_thousands() {
        assert_eq!(format_distance(1000.0), "1.0k km");
        assert_eq!(format_distance(1500.0), "1.5k km");
        assert_eq!(format_distance(2349.0), "2.3k km");
        assert_eq!(format_distance(12000.0), "12.0k km");
    }

    #[test]
    fn test_format_distance_ties() {
        // 1.25 is exact in binary: a true tie, rounds up.
        assert_eq!(format_distance(1250.0), "1.3k km");
        assert_eq!(format_distance(1750.0), "1.8k km");
        // 1.15 is stored slightly below 1.15: not a tie.
        assert_eq!(format_distance(1150.0), "1.1k km");
    }

    #[test]
    fn test_difficulty_color() {
        assert_eq!(difficulty_color(Difficulty::Easy), "text-green-600 bg-green-100");
        assert_eq!(
            difficulty_color(Difficulty::Moderate),
            "text-yellow-600 bg-yellow-100"
        );
        assert_eq!(difficulty_color(Difficulty::Challenging), "text-red-600 bg-red-100");
    }

    #[test]
    fn test_difficulty_color_for_label() {
        assert_eq!(difficulty_color_for_label("Easy"), "text-green-600 bg-green-100");
        assert_eq!(difficulty_color_for_label("easy"), NEUTRAL_COLOR);
        assert_eq!(difficulty_color_for_label(""), NEUTRAL_COLOR);
    }
}
