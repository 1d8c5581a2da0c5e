//! Floor-count extraction.
//!
//! Strategies in order: numeric ("12 story", "3 floors", hyphen-tolerant),
//! English number words one..ten on the same patterns, then qualitative
//! fallbacks ("multi-story" → 2; "high-rise"/"tower" → 10 in office
//! context, else 5). Candidates outside (0, 200) are spurious, typically
//! a year, and are skipped.

use regex::Regex;

const MAX_FLOORS: u32 = 200;

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

#[derive(Debug, Clone)]
pub struct FloorPatterns {
    numeric: Regex,
    number_word: Regex,
    multi_story: Regex,
    high_rise: Regex,
    office_context: Regex,
}

impl FloorPatterns {
    pub fn new() -> Self {
        Self {
            numeric: Regex::new(r"(?i)\b(\d{1,3})[\s-]*(?:stor(?:y|ies|ey|eys)|floors?|levels?)\b")
                .unwrap(),
            number_word: Regex::new(
                r"(?i)\b(one|two|three|four|five|six|seven|eight|nine|ten)[\s-]*(?:stor(?:y|ies|ey|eys)|floors?|levels?)\b",
            )
            .unwrap(),
            multi_story: Regex::new(r"(?i)\bmulti[\s-]?stor(?:y|ey|ies)\b").unwrap(),
            high_rise: Regex::new(r"(?i)\b(?:high[\s-]?rise|tower)\b").unwrap(),
            office_context: Regex::new(r"(?i)\boffice\b").unwrap(),
        }
    }
}

impl Default for FloorPatterns {
    fn default() -> Self {
        Self::new()
    }
}

fn in_range(n: u32) -> bool {
    n > 0 && n < MAX_FLOORS
}

/// Extract a floor count, or `None` when nothing plausible is stated.
pub fn extract_floors(text: &str, patterns: &FloorPatterns) -> Option<u32> {
    for caps in patterns.numeric.captures_iter(text) {
        if let Ok(n) = caps[1].parse::<u32>() {
            if in_range(n) {
                return Some(n);
            }
            tracing::debug!(candidate = n, "rejecting out-of-range floor count");
        }
    }

    if let Some(caps) = patterns.number_word.captures(text) {
        let word = caps[1].to_lowercase();
        if let Some((_, n)) = NUMBER_WORDS.iter().find(|(w, _)| *w == word) {
            return Some(*n);
        }
    }

    if patterns.multi_story.is_match(text) {
        return Some(2);
    }
    if patterns.high_rise.is_match(text) {
        let floors = if patterns.office_context.is_match(text) {
            10
        } else {
            5
        };
        return Some(floors);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<u32> {
        extract_floors(text, &FloorPatterns::new())
    }

    #[test]
    fn numeric_forms() {
        assert_eq!(extract("12 story downtown hotel"), Some(12));
        assert_eq!(extract("3-story walkup"), Some(3));
        assert_eq!(extract("building with 4 floors"), Some(4));
        assert_eq!(extract("2 levels of retail"), Some(2));
    }

    #[test]
    fn number_words() {
        assert_eq!(extract("two-story clinic"), Some(2));
        assert_eq!(extract("a ten story office"), Some(10));
    }

    #[test]
    fn qualitative_fallbacks() {
        assert_eq!(extract("multi-story parking structure"), Some(2));
        assert_eq!(extract("high-rise office building"), Some(10));
        assert_eq!(extract("residential tower"), Some(5));
    }

    #[test]
    fn out_of_range_candidates_are_skipped() {
        // The spurious 999 is rejected, nothing else matches.
        assert_eq!(extract("999 story building"), None);
        // A rejected numeric still falls through to later strategies.
        assert_eq!(extract("500 story high-rise office"), Some(10));
    }

    #[test]
    fn no_match() {
        assert_eq!(extract("single wide retail pad"), None);
        assert_eq!(extract(""), None);
    }
}
