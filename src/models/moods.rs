use serde::Serialize;

/// A specific mood within a primary category, mapped to catalog genre ids.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubMood {
    pub key: &'static str,
    pub label: &'static str,
    pub genres: &'static [u32],
}

/// A primary mood category with its display label (emoji included) and
/// sub-moods.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoodCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub sub_moods: &'static [SubMood],
}

/// The mood taxonomy. Static and immutable; loaded once at startup by virtue
/// of being compiled in.
pub const MOOD_CATEGORIES: &[MoodCategory] = &[
    MoodCategory {
        key: "positive",
        label: "💫 Positive/Upbeat",
        sub_moods: &[
            SubMood { key: "happy", label: "😊 Happy (Feel-good comedies)", genres: &[35, 10751] },
            SubMood { key: "excited", label: "🤩 Excited (Action-packed thrillers)", genres: &[28, 12] },
            SubMood { key: "optimistic", label: "⭐ Optimistic (Motivational dramas)", genres: &[18, 10751] },
            SubMood { key: "grateful", label: "🥰 Grateful (Family & relationships)", genres: &[10749, 18] },
            SubMood { key: "relaxed", label: "😌 Relaxed (Slice-of-life films)", genres: &[35, 18] },
            SubMood { key: "cheerful", label: "😄 Cheerful (Colorful animations)", genres: &[16, 35] },
            SubMood { key: "playful", label: "🤪 Playful (Fantasy comedies)", genres: &[14, 35] },
        ],
    },
    MoodCategory {
        key: "reflective",
        label: "🤔 Reflective",
        sub_moods: &[
            SubMood { key: "nostalgic", label: "🌅 Nostalgic (Childhood classics)", genres: &[10751, 18] },
            SubMood { key: "thoughtful", label: "💭 Thoughtful (Philosophical dramas)", genres: &[18, 99] },
            SubMood { key: "contemplative", label: "🧠 Contemplative (Art house films)", genres: &[18, 878] },
            SubMood { key: "spiritual", label: "✨ Spiritual (Faith & belief)", genres: &[99, 18] },
        ],
    },
    MoodCategory {
        key: "intense",
        label: "🔥 Intense/Exciting",
        sub_moods: &[
            SubMood { key: "adventurous", label: "🚀 Adventurous (Epic journeys)", genres: &[12, 878] },
            SubMood { key: "romantic", label: "❤️ Romantic (Love stories)", genres: &[10749, 35] },
            SubMood { key: "mysterious", label: "🔍 Mysterious (Noir thrillers)", genres: &[9648, 53] },
            SubMood { key: "inspired", label: "✨ Inspired (Success stories)", genres: &[18, 36] },
            SubMood { key: "empowered", label: "💪 Empowered (Underdog triumphs)", genres: &[18, 28] },
            SubMood { key: "brave", label: "🦁 Brave (Survival stories)", genres: &[28, 12] },
        ],
    },
    MoodCategory {
        key: "calm",
        label: "😌 Calm/Soothing",
        sub_moods: &[
            SubMood { key: "relaxing", label: "🌿 Relaxing (Meditative films)", genres: &[99, 18] },
            SubMood { key: "dreamy", label: "🌙 Dreamy (Magical realism)", genres: &[14, 10751] },
            SubMood { key: "peaceful", label: "🌊 Peaceful (Nature documentaries)", genres: &[99, 10751] },
            SubMood { key: "meditative", label: "🧘 Meditative (Slow cinema)", genres: &[18, 99] },
        ],
    },
    MoodCategory {
        key: "melancholic",
        label: "💜 Melancholic/Emotional",
        sub_moods: &[
            SubMood { key: "sad", label: "😢 Sad (Emotional dramas)", genres: &[18, 10749] },
            SubMood { key: "lonely", label: "🌧️ Lonely (Self-discovery)", genres: &[18, 10751] },
            SubMood { key: "heartbroken", label: "💔 Heartbroken (Loss & grief)", genres: &[18, 10749] },
            SubMood { key: "yearning", label: "🌠 Yearning (Bittersweet stories)", genres: &[18, 10749] },
        ],
    },
    MoodCategory {
        key: "dark",
        label: "🖤 Dark/Edgy",
        sub_moods: &[
            SubMood { key: "angry", label: "😤 Angry (Revenge thrillers)", genres: &[53, 28] },
            SubMood { key: "rebellious", label: "😈 Rebellious (Anti-hero stories)", genres: &[28, 80] },
            SubMood { key: "fearless", label: "👻 Fearless (Horror thrillers)", genres: &[27, 53] },
            SubMood { key: "eerie", label: "🌘 Eerie (Paranormal tales)", genres: &[27, 14] },
            SubMood { key: "dark", label: "🦇 Dark (Psychological thrillers)", genres: &[53, 9648] },
        ],
    },
    MoodCategory {
        key: "explorative",
        label: "👩‍🚀 Explorative",
        sub_moods: &[
            SubMood { key: "neutral", label: "😐 Neutral (Balanced dramas)", genres: &[18, 35] },
            SubMood { key: "curious", label: "🔬 Curious (Science & discovery)", genres: &[99, 878] },
            SubMood { key: "analytical", label: "🧐 Analytical (Investigation)", genres: &[9648, 99] },
            SubMood { key: "educational", label: "📚 Educational (Historical)", genres: &[36, 99] },
            SubMood { key: "observant", label: "👀 Observant (Character studies)", genres: &[18, 36] },
        ],
    },
    MoodCategory {
        key: "social",
        label: "👥 Social",
        sub_moods: &[
            SubMood { key: "sociable", label: "🎉 Sociable (Party movies)", genres: &[35, 10751] },
            SubMood { key: "teamSpirit", label: "🤝 Team Spirit (Sports & heists)", genres: &[28, 12] },
            SubMood { key: "celebratory", label: "🎊 Celebratory (Festival films)", genres: &[35, 10402] },
            SubMood { key: "cultural", label: "🌍 Cultural (International films)", genres: &[18, 99] },
        ],
    },
    MoodCategory {
        key: "seasonal",
        label: "🌺 Seasonal",
        sub_moods: &[
            SubMood { key: "festive", label: "🎄 Festive (Holiday classics)", genres: &[10751, 35] },
            SubMood { key: "autumnal", label: "🍁 Autumnal (Cozy dramas)", genres: &[18, 10751] },
            SubMood { key: "wintery", label: "❄️ Wintery (Snow adventures)", genres: &[12, 10751] },
            SubMood { key: "summery", label: "☀️ Summery (Beach & road trips)", genres: &[35, 12] },
        ],
    },
    MoodCategory {
        key: "unique",
        label: "🎲 Unique",
        sub_moods: &[
            SubMood { key: "quirky", label: "🎪 Quirky (Indie comedies)", genres: &[35, 18] },
            SubMood { key: "whimsical", label: "🦄 Whimsical (Fairy tales)", genres: &[14, 10751] },
            SubMood { key: "epic", label: "⚔️ Epic (Historical sagas)", genres: &[28, 36] },
            SubMood { key: "cult", label: "🌟 Cult (Fan favorites)", genres: &[878, 35] },
            SubMood { key: "mindBlown", label: "🤯 Mind-Blown (Plot twisters)", genres: &[9648, 878] },
            SubMood { key: "weird", label: "🎨 Weird (Experimental)", genres: &[18, 14] },
        ],
    },
];

/// Looks up a sub-mood by category and sub-mood key.
pub fn find_sub_mood(category: &str, sub_mood: &str) -> Option<&'static SubMood> {
    MOOD_CATEGORIES
        .iter()
        .find(|c| c.key == category)?
        .sub_moods
        .iter()
        .find(|s| s.key == sub_mood)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sub_mood_known() {
        let sub = find_sub_mood("positive", "happy").unwrap();
        assert_eq!(sub.genres, &[35, 10751]);
        assert_eq!(sub.label, "😊 Happy (Feel-good comedies)");
    }

    #[test]
    fn test_find_sub_mood_unknown_category() {
        assert!(find_sub_mood("bored", "happy").is_none());
    }

    #[test]
    fn test_find_sub_mood_wrong_category() {
        // Sub-mood keys only resolve within their own category
        assert!(find_sub_mood("reflective", "happy").is_none());
    }

    #[test]
    fn test_taxonomy_shape() {
        assert_eq!(MOOD_CATEGORIES.len(), 10);
        for category in MOOD_CATEGORIES {
            assert!(!category.sub_moods.is_empty());
            for sub in category.sub_moods {
                assert!(!sub.genres.is_empty(), "{} has no genres", sub.key);
            }
        }
    }

    #[test]
    fn test_category_keys_are_unique() {
        let mut keys: Vec<_> = MOOD_CATEGORIES.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MOOD_CATEGORIES.len());
    }
}
