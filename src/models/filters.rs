use serde::{Deserialize, Serialize};

/// TMDB genre id for animation, used by the format filter.
pub const ANIMATION_GENRE_ID: u32 = 16;

/// Format preference for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Animation,
    LiveAction,
    #[default]
    Any,
}

impl Format {
    /// Parses the form value. Anything other than the two known formats
    /// passes all candidates.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("animation") => Format::Animation,
            Some("live-action") => Format::LiveAction,
            _ => Format::Any,
        }
    }

    /// Whether a candidate with the given genre set survives this format.
    pub fn accepts(&self, genre_ids: &[u32]) -> bool {
        match self {
            Format::Animation => genre_ids.contains(&ANIMATION_GENRE_ID),
            Format::LiveAction => !genre_ids.contains(&ANIMATION_GENRE_ID),
            Format::Any => true,
        }
    }
}

/// Mood-derived filter criteria for one recommendation request.
/// Built per interaction, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub genre_ids: Vec<u32>,
    pub format: Format,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
}

impl FilterCriteria {
    pub fn new(genre_ids: Vec<u32>, format: Format) -> Self {
        Self {
            genre_ids,
            format,
            year_start: None,
            year_end: None,
        }
    }

    /// Sets the start year; an end year earlier than it is pulled up to match.
    pub fn set_year_start(&mut self, year: i32) {
        self.year_start = Some(year);
        if matches!(self.year_end, Some(end) if end < year) {
            self.year_end = Some(year);
        }
    }

    /// Sets the end year; a start year later than it is pulled down to match.
    pub fn set_year_end(&mut self, year: i32) {
        self.year_end = Some(year);
        if matches!(self.year_start, Some(start) if start > year) {
            self.year_start = Some(year);
        }
    }

    /// Genre ids sorted and deduplicated. Normalization exists purely for
    /// discovery-query stability; it does not change result semantics.
    pub fn normalized_genres(&self) -> Vec<u32> {
        let mut ids = self.genre_ids.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_param() {
        assert_eq!(Format::from_param(Some("animation")), Format::Animation);
        assert_eq!(Format::from_param(Some("live-action")), Format::LiveAction);
        assert_eq!(Format::from_param(Some("anything")), Format::Any);
        assert_eq!(Format::from_param(None), Format::Any);
    }

    #[test]
    fn test_format_accepts() {
        assert!(Format::Animation.accepts(&[16, 35]));
        assert!(!Format::Animation.accepts(&[35]));
        assert!(Format::LiveAction.accepts(&[35]));
        assert!(!Format::LiveAction.accepts(&[16, 35]));
        assert!(Format::Any.accepts(&[16]));
        assert!(Format::Any.accepts(&[]));
    }

    #[test]
    fn test_year_start_pulls_end_up() {
        let mut criteria = FilterCriteria::new(vec![18], Format::Any);
        criteria.set_year_end(2010);
        criteria.set_year_start(2020);
        assert_eq!(criteria.year_start, Some(2020));
        assert_eq!(criteria.year_end, Some(2020));
    }

    #[test]
    fn test_year_end_pulls_start_down() {
        let mut criteria = FilterCriteria::new(vec![18], Format::Any);
        criteria.set_year_start(2015);
        criteria.set_year_end(2005);
        assert_eq!(criteria.year_start, Some(2005));
        assert_eq!(criteria.year_end, Some(2005));
    }

    #[test]
    fn test_valid_year_range_is_untouched() {
        let mut criteria = FilterCriteria::new(vec![18], Format::Any);
        criteria.set_year_start(2000);
        criteria.set_year_end(2010);
        assert_eq!(criteria.year_start, Some(2000));
        assert_eq!(criteria.year_end, Some(2010));
    }

    #[test]
    fn test_normalized_genres_sorted_and_deduplicated() {
        let criteria = FilterCriteria::new(vec![878, 35, 878, 12], Format::Any);
        assert_eq!(criteria.normalized_genres(), vec![12, 35, 878]);
    }
}
