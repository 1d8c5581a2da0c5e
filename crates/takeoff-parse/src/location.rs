//! Location resolution.
//!
//! Ordered fallback chain, first success wins:
//! 1. known-city dictionary hit ("Nashville" → "Nashville, TN")
//! 2. spelled-out state name, with best-effort recovery of a preceding
//!    city ("in Manchester, New Hampshire" → "Manchester, NH")
//! 3. "City, XX" with a validated two-letter code
//! 4. "City XX" without the comma
//! 5. bare "in XX" state-code fallback
//!
//! Every resolved candidate passes a sanity check before being surfaced:
//! a location that duplicates the whole description, or that is long and
//! full of building vocabulary, is discarded instead of propagated
//! downstream.

use std::collections::{HashMap, HashSet};

use regex::Regex;

const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

const KNOWN_CITIES: &[(&str, &str)] = &[
    ("New York", "NY"),
    ("Los Angeles", "CA"),
    ("Chicago", "IL"),
    ("Houston", "TX"),
    ("Phoenix", "AZ"),
    ("Philadelphia", "PA"),
    ("San Antonio", "TX"),
    ("San Diego", "CA"),
    ("Dallas", "TX"),
    ("San Jose", "CA"),
    ("Austin", "TX"),
    ("Jacksonville", "FL"),
    ("Fort Worth", "TX"),
    ("Columbus", "OH"),
    ("Charlotte", "NC"),
    ("San Francisco", "CA"),
    ("Indianapolis", "IN"),
    ("Seattle", "WA"),
    ("Denver", "CO"),
    ("Boston", "MA"),
    ("Nashville", "TN"),
    ("Memphis", "TN"),
    ("Portland", "OR"),
    ("Oklahoma City", "OK"),
    ("Las Vegas", "NV"),
    ("Louisville", "KY"),
    ("Baltimore", "MD"),
    ("Milwaukee", "WI"),
    ("Albuquerque", "NM"),
    ("Tucson", "AZ"),
    ("Fresno", "CA"),
    ("Sacramento", "CA"),
    ("Kansas City", "MO"),
    ("Atlanta", "GA"),
    ("Miami", "FL"),
    ("Omaha", "NE"),
    ("Raleigh", "NC"),
    ("Minneapolis", "MN"),
    ("Tampa", "FL"),
    ("New Orleans", "LA"),
    ("Cleveland", "OH"),
    ("Pittsburgh", "PA"),
    ("St. Louis", "MO"),
    ("Cincinnati", "OH"),
    ("Orlando", "FL"),
    ("Salt Lake City", "UT"),
    ("Richmond", "VA"),
    ("Birmingham", "AL"),
    ("Boise", "ID"),
    ("Anchorage", "AK"),
];

/// Words that never belong in a resolved city name: building-type nouns,
/// unit words, and filler that regularly precedes a state mention.
const STOPLIST: &[&str] = &[
    "building", "center", "complex", "facility", "warehouse", "office", "restaurant", "hotel",
    "school", "hospital", "clinic", "store", "retail", "kitchen", "dining", "room", "rooms", "bar",
    "bathroom", "bathrooms", "sf", "sq", "ft", "feet", "foot", "square", "story", "stories",
    "floor", "floors", "level", "levels", "new", "existing", "downtown", "suburban", "project",
    "site", "area", "space", "located", "the", "a", "an", "with", "and", "in", "at", "near", "on",
    "of", "for", "to", "by",
];

/// When a candidate is longer than this and still contains stoplisted
/// vocabulary, it is a garbled capture, not a place name.
const MAX_PLAUSIBLE_LEN: usize = 40;

#[derive(Debug, Clone)]
struct StateEntry {
    name: &'static str,
    code: &'static str,
    name_re: Regex,
    /// "in <city>[,] <State>" city-recovery pattern for this state.
    preceding_city_re: Regex,
}

#[derive(Debug, Clone)]
pub struct LocationDictionary {
    cities: Vec<(&'static str, &'static str, Regex)>,
    /// Longest names first, so "West Virginia" is not shadowed by
    /// "Virginia".
    states: Vec<StateEntry>,
    code_to_name: HashMap<&'static str, &'static str>,
    stoplist: HashSet<&'static str>,
    city_comma_code: Regex,
    city_code: Regex,
    in_code: Regex,
}

impl LocationDictionary {
    pub fn builtin() -> Self {
        let cities = KNOWN_CITIES
            .iter()
            .map(|(name, code)| {
                let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name))).unwrap();
                (*name, *code, re)
            })
            .collect();

        let mut states: Vec<StateEntry> = STATES
            .iter()
            .map(|&(name, code)| {
                let escaped = regex::escape(name);
                StateEntry {
                    name,
                    code,
                    name_re: Regex::new(&format!(r"(?i)\b{escaped}\b")).unwrap(),
                    preceding_city_re: Regex::new(&format!(
                        r"(?i)\bin\s+([a-z][a-z .'-]*?)\s*,?\s+{escaped}\b"
                    ))
                    .unwrap(),
                }
            })
            .collect();
        states.sort_by_key(|s| std::cmp::Reverse(s.name.len()));

        Self {
            cities,
            states,
            code_to_name: STATES.iter().map(|(name, code)| (*code, *name)).collect(),
            stoplist: STOPLIST.iter().copied().collect(),
            // The code must be uppercase in the original text; lowercase
            // two-letter words ("or", "in") are ordinary English.
            city_comma_code: Regex::new(r"([A-Za-z][A-Za-z .'-]*?)\s*,\s*([A-Z]{2})\b").unwrap(),
            city_code: Regex::new(r"\b([A-Z][a-z.'-]+(?:\s+[A-Z][a-z.'-]+){0,2})\s+([A-Z]{2})\b")
                .unwrap(),
            in_code: Regex::new(r"\bin\s+([A-Z]{2})\b").unwrap(),
        }
    }

    fn is_valid_code(&self, code: &str) -> bool {
        self.code_to_name.contains_key(code)
    }
}

/// Resolve a location from a description, or `None`.
pub fn resolve(text: &str, dict: &LocationDictionary) -> Option<String> {
    let candidate = known_city(text, dict)
        .or_else(|| state_name(text, dict))
        .or_else(|| city_comma_code(text, dict))
        .or_else(|| city_code(text, dict))
        .or_else(|| bare_state_code(text, dict))?;

    if !passes_sanity(&candidate, text, dict) {
        tracing::warn!(candidate = %candidate, "discarding implausible location");
        return None;
    }
    Some(candidate)
}

// ── Chain steps ──

fn known_city(text: &str, dict: &LocationDictionary) -> Option<String> {
    let mut best: Option<(usize, &str, &str)> = None;
    for (name, code, re) in &dict.cities {
        if let Some(m) = re.find(text) {
            if best.map_or(true, |(pos, _, _)| m.start() < pos) {
                best = Some((m.start(), *name, *code));
            }
        }
    }
    best.map(|(_, name, code)| format!("{name}, {code}"))
}

fn state_name(text: &str, dict: &LocationDictionary) -> Option<String> {
    let state = dict.states.iter().find(|s| s.name_re.is_match(text))?;

    if let Some(caps) = state.preceding_city_re.captures(text) {
        if let Some(city) = plausible_city(&caps[1], dict) {
            return Some(format!("{city}, {}", state.code));
        }
    }
    Some(format!("{}, {}", state.name, state.code))
}

fn city_comma_code(text: &str, dict: &LocationDictionary) -> Option<String> {
    for caps in dict.city_comma_code.captures_iter(text) {
        let code = &caps[2];
        if !dict.is_valid_code(code) {
            continue;
        }
        if let Some(city) = plausible_city(&caps[1], dict) {
            return Some(format!("{city}, {code}"));
        }
    }
    None
}

fn city_code(text: &str, dict: &LocationDictionary) -> Option<String> {
    for caps in dict.city_code.captures_iter(text) {
        let code = &caps[2];
        if !dict.is_valid_code(code) {
            continue;
        }
        if let Some(city) = plausible_city(&caps[1], dict) {
            return Some(format!("{city}, {code}"));
        }
    }
    None
}

fn bare_state_code(text: &str, dict: &LocationDictionary) -> Option<String> {
    for caps in dict.in_code.captures_iter(text) {
        if let Some(name) = dict.code_to_name.get(&caps[1]) {
            return Some(format!("{name}, {}", &caps[1]));
        }
    }
    None
}

// ── Helpers ──

/// Strip stoplisted tokens from a captured span; what survives must look
/// like a place name.
fn plausible_city(span: &str, dict: &LocationDictionary) -> Option<String> {
    let kept: Vec<&str> = span
        .split_whitespace()
        .filter(|token| {
            let bare = token.trim_matches(|c: char| !c.is_alphanumeric());
            !bare.is_empty() && !dict.stoplist.contains(bare.to_lowercase().as_str())
        })
        .collect();

    if kept.is_empty() || kept.len() > 4 {
        return None;
    }
    if kept.iter().any(|t| t.chars().any(|c| c.is_ascii_digit())) {
        return None;
    }
    Some(title_case(&kept.join(" ")))
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn passes_sanity(candidate: &str, raw: &str, dict: &LocationDictionary) -> bool {
    let raw = raw.trim();
    let lower = candidate.to_lowercase();

    // Echoing the entire description back as a "location" is garbage.
    if candidate.eq_ignore_ascii_case(raw) || lower.contains(&raw.to_lowercase()) {
        return false;
    }
    if candidate.len() > MAX_PLAUSIBLE_LEN
        && lower.split_whitespace().any(|w| {
            dict.stoplist
                .contains(w.trim_matches(|c: char| !c.is_alphanumeric()))
        })
    {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_builtin(text: &str) -> Option<String> {
        resolve(text, &LocationDictionary::builtin())
    }

    #[test]
    fn known_city_wins_first() {
        assert_eq!(
            resolve_builtin("new restaurant in Nashville near the stadium"),
            Some("Nashville, TN".to_string())
        );
        assert_eq!(
            resolve_builtin("warehouse in Denver"),
            Some("Denver, CO".to_string())
        );
    }

    #[test]
    fn state_name_recovers_preceding_city() {
        assert_eq!(
            resolve_builtin("4000 sf restaurant in Manchester, New Hampshire"),
            Some("Manchester, NH".to_string())
        );
        assert_eq!(
            resolve_builtin("built in concord new hampshire"),
            Some("Concord, NH".to_string())
        );
    }

    #[test]
    fn state_name_alone_when_no_city_survives() {
        assert_eq!(
            resolve_builtin("warehouse with HVAC and bathrooms in California"),
            Some("California, CA".to_string())
        );
    }

    #[test]
    fn city_comma_code_with_valid_code() {
        assert_eq!(
            resolve_builtin("12 story hotel in Sandy Springs, GA"),
            Some("Sandy Springs, GA".to_string())
        );
    }

    #[test]
    fn invalid_state_codes_never_resolve() {
        assert_eq!(resolve_builtin("office park in Springfield, ZZ"), None);
    }

    #[test]
    fn city_code_without_comma() {
        assert_eq!(
            resolve_builtin("new clinic in Chattanooga TN"),
            Some("Chattanooga, TN".to_string())
        );
    }

    #[test]
    fn bare_in_code_fallback() {
        assert_eq!(
            resolve_builtin("strip mall renovation in GA"),
            Some("Georgia, GA".to_string())
        );
    }

    #[test]
    fn stoplisted_words_are_not_cities() {
        // "downtown" precedes the state; it must not be taken as the city.
        assert_eq!(
            resolve_builtin("hotel in downtown Georgia"),
            Some("Georgia, GA".to_string())
        );
    }

    #[test]
    fn location_never_echoes_whole_input() {
        // The resolved location would contain the entire description.
        assert_eq!(resolve_builtin("Los Angeles"), None);
    }

    #[test]
    fn empty_and_unmatched_input() {
        assert_eq!(resolve_builtin(""), None);
        assert_eq!(resolve_builtin("a 4000 sf office fit-out"), None);
    }
}
