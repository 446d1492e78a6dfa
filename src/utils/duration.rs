/// Formats a second count as e.g. "2m 5s".
///
/// Seconds are only shown when there is no hour component, so 3661 renders
/// as "1h 1m". Absent, zero and negative values render as "0s".
pub fn format_duration(seconds: Option<i64>) -> String {
    let seconds = match seconds {
        Some(s) if s > 0 => s,
        _ => return "0s".to_string(),
    };

    let (minutes, seconds) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    let mut parts: Vec<String> = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 && hours == 0 {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reparse(rendered: &str) -> i64 {
        rendered
            .split(' ')
            .map(|part| {
                let (value, unit) = part.split_at(part.len() - 1);
                let value: i64 = value.parse().unwrap();
                match unit {
                    "h" => value * 3600,
                    "m" => value * 60,
                    "s" => value,
                    other => panic!("unexpected unit {other}"),
                }
            })
            .sum()
    }

    #[test]
    fn known_renderings() {
        assert_eq!(format_duration(None), "0s");
        assert_eq!(format_duration(Some(0)), "0s");
        assert_eq!(format_duration(Some(45)), "45s");
        assert_eq!(format_duration(Some(60)), "1m");
        assert_eq!(format_duration(Some(125)), "2m 5s");
        assert_eq!(format_duration(Some(3600)), "1h");
        assert_eq!(format_duration(Some(3601)), "1h");
        assert_eq!(format_duration(Some(3661)), "1h 1m");
        assert_eq!(format_duration(Some(90_000)), "25h");
    }

    #[test]
    fn negative_is_clamped() {
        assert_eq!(format_duration(Some(-5)), "0s");
    }

    #[test]
    fn rendering_never_overshoots_and_loses_under_an_hour() {
        for s in (1..20_000).chain([86_399, 86_400, 1_000_000]) {
            let back = reparse(&format_duration(Some(s)));
            assert!(back <= s, "{s} rendered back as {back}");
            assert!(back > s - 3600, "{s} rendered back as {back}");
            if s < 3600 {
                assert_eq!(back, s);
            }
        }
    }
}
