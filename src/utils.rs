/// Utility helpers for VigiView

/// Split a comma-separated tags string into individual labels.
/// Whitespace around a label is trimmed and empty segments are dropped;
/// order and duplicates are preserved.
pub fn split_tags<S: AsRef<str>>(tags: S) -> Vec<String> {
    tags.as_ref()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render a recording time path segment (`HH-MM-SS`) as a clock time.
/// Segments that don't look like a clock time pass through unchanged.
pub fn pretty_time(time: &str) -> String {
    let parts: Vec<&str> = time.split('-').collect();
    if parts.len() == 3
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit()))
    {
        return parts.join(":");
    }
    time.to_string()
}

/// Format a duration in seconds as `M:SS` or `H:MM:SS`.
pub fn format_duration(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Human-readable byte size with a single decimal above bytes.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_tags_in_order() {
        assert_eq!(split_tags("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn trims_and_drops_empty_tags() {
        assert_eq!(split_tags(" person , , car,"), vec!["person", "car"]);
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ,").is_empty());
    }

    #[test]
    fn keeps_duplicate_tags() {
        assert_eq!(split_tags("cat,cat"), vec!["cat", "cat"]);
    }

    #[test]
    fn pretty_time_formats_path_segments() {
        assert_eq!(pretty_time("14-03-22"), "14:03:22");
        assert_eq!(pretty_time("garbage"), "garbage");
        assert_eq!(pretty_time("1-2-3"), "1-2-3");
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(7), "0:07");
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(3661), "1:01:01");
    }

    #[test]
    fn formats_byte_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }
}
