/// Keywords that disqualify a movie based on its overview text.
const ADULT_CONTENT_KEYWORDS: &[&str] = &[
    "explicit", "nude", "nudity", "sex", "erotic", "mature", "rated r",
    "violence", "gore", "bloody", "seduce", "disturbing", "graphic",
];

/// Case-insensitive substring match of the overview against the keyword list.
/// An empty overview passes.
pub fn contains_adult_content(overview: &str) -> bool {
    if overview.is_empty() {
        return false;
    }
    let lowered = overview.to_lowercase();
    ADULT_CONTENT_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
