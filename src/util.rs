/// Formats a runtime in minutes as "2h 22m".
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Formats a vote average to one decimal place.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Extracts the year from a "YYYY-MM-DD" release date. An empty or malformed
/// date yields the text up to the first dash, which may be empty.
pub fn release_year(release_date: &str) -> &str {
    release_date.split('-').next().unwrap_or_default()
}
