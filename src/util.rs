use std::time::Duration;

/// `MM:SS`, or `H:MM:SS` once an hour has passed.
pub fn format_clock(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    match hours {
        0 => format!("{:02}:{:02}", minutes, seconds),
        h => format!("{}:{:02}:{:02}", h, minutes, seconds),
    }
}

/// Always `H:MM:SS`, for totals that routinely run past an hour.
pub fn format_total(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!(
        "{}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}

/// Joins `(key, description)` pairs the way terminal help bars do: `s start • q quit`
pub fn short_help_line(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(key, desc)| format!("{} {}", key, desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
