//! Two-tier building taxonomy: category → subtypes, with match keywords.
//!
//! The taxonomy is a static reference table, built once at startup and
//! injected into the parser (never an ambient global), so tests can
//! substitute alternate taxonomies. Keywords are compiled to word-boundary
//! regexes at construction time; nothing is compiled per parse call.

use regex::Regex;

/// A keyword phrase compiled for case-insensitive word-boundary search.
#[derive(Debug, Clone)]
pub struct Keyword {
    pub phrase: String,
    regex: Regex,
}

impl Keyword {
    pub fn new(phrase: &str) -> Self {
        let regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).unwrap();
        Self {
            phrase: phrase.to_string(),
            regex,
        }
    }

    /// Byte offset of the earliest occurrence in `text`, if any.
    pub fn find(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|m| m.start())
    }

    /// Multi-word phrases score higher than single words (see
    /// [`crate::classify`]).
    pub fn is_phrase(&self) -> bool {
        self.phrase.contains(' ')
    }
}

/// A specific variant within a category, e.g. `hospital` within
/// `healthcare`. `unit_cost` is the reference $/sf carried for the
/// downstream cost service; the engine itself never computes cost.
#[derive(Debug, Clone)]
pub struct Subtype {
    pub id: String,
    pub keywords: Vec<Keyword>,
    pub unit_cost: u32,
}

/// A top-level use classification with its generic keywords and subtypes.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub keywords: Vec<Keyword>,
    pub subtypes: Vec<Subtype>,
}

#[derive(Debug, Clone)]
pub struct BuildingTaxonomy {
    pub categories: Vec<Category>,
}

impl BuildingTaxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Reference unit cost for a subtype, if the taxonomy knows it.
    pub fn unit_cost(&self, category: &str, subtype: &str) -> Option<u32> {
        self.categories
            .iter()
            .find(|c| c.id == category)?
            .subtypes
            .iter()
            .find(|s| s.id == subtype)
            .map(|s| s.unit_cost)
    }
}

fn subtype(id: &str, keywords: &[&str], unit_cost: u32) -> Subtype {
    Subtype {
        id: id.to_string(),
        keywords: keywords.iter().map(|k| Keyword::new(k)).collect(),
        unit_cost,
    }
}

fn category(id: &str, keywords: &[&str], subtypes: Vec<Subtype>) -> Category {
    Category {
        id: id.to_string(),
        keywords: keywords.iter().map(|k| Keyword::new(k)).collect(),
        subtypes,
    }
}

/// The shipped taxonomy. Unit costs are national-average references only.
pub fn builtin_taxonomy() -> BuildingTaxonomy {
    BuildingTaxonomy::new(vec![
        category(
            "healthcare",
            &["healthcare", "medical", "clinic"],
            vec![
                subtype("hospital", &["hospital", "medical center", "acute care"], 650),
                subtype(
                    "medical_office",
                    &["medical office", "outpatient clinic", "doctor's office"],
                    425,
                ),
                subtype(
                    "surgery_center",
                    &["surgery center", "surgical center", "ambulatory surgery"],
                    550,
                ),
                subtype("urgent_care", &["urgent care", "walk-in clinic"], 450),
                subtype("dental_office", &["dental office", "dental clinic", "dentist"], 400),
            ],
        ),
        category(
            "restaurant",
            &["restaurant", "dining", "eatery", "food service"],
            vec![
                subtype(
                    "full_service",
                    &[
                        "full-service restaurant",
                        "full service restaurant",
                        "fine dining",
                        "sit-down restaurant",
                    ],
                    425,
                ),
                subtype(
                    "fast_food",
                    &["fast food", "quick service", "qsr", "drive-thru restaurant"],
                    300,
                ),
                subtype("cafe", &["cafe", "coffee shop", "bistro"], 325),
                subtype("bar_tavern", &["bar", "tavern", "pub", "brewery"], 350),
            ],
        ),
        category(
            "residential",
            &["residential", "housing"],
            vec![
                subtype(
                    "apartment",
                    &["apartment", "apartment complex", "multifamily", "multi-family"],
                    225,
                ),
                subtype("single_family", &["single family", "single-family", "house"], 185),
                subtype("condominium", &["condo", "condominium"], 250),
                subtype(
                    "senior_living",
                    &["senior living", "assisted living", "retirement community"],
                    275,
                ),
            ],
        ),
        category(
            "commercial",
            &["commercial", "business"],
            vec![
                subtype(
                    "office",
                    &["office", "office building", "corporate headquarters"],
                    250,
                ),
                subtype("retail", &["retail", "store", "shopping center", "storefront"], 225),
                subtype("hotel", &["hotel", "motel", "resort", "hospitality"], 350),
                subtype("bank", &["bank branch", "credit union"], 375),
            ],
        ),
        category(
            "industrial",
            &["industrial", "plant"],
            vec![
                subtype(
                    "warehouse",
                    &["warehouse", "distribution center", "storage facility", "fulfillment center"],
                    125,
                ),
                subtype(
                    "manufacturing",
                    &["manufacturing", "factory", "production facility", "assembly plant"],
                    175,
                ),
                subtype("flex_space", &["flex space", "light industrial"], 150),
                subtype("cold_storage", &["cold storage", "refrigerated warehouse"], 200),
            ],
        ),
        category(
            "educational",
            &["educational", "school", "academic"],
            vec![
                subtype(
                    "elementary_school",
                    &["elementary school", "primary school", "grade school"],
                    275,
                ),
                subtype(
                    "secondary_school",
                    &["high school", "middle school", "secondary school"],
                    300,
                ),
                subtype("university", &["university", "college", "campus"], 350),
                subtype("daycare", &["daycare", "day care", "childcare", "preschool"], 250),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_matches_on_word_boundaries_only() {
        let kw = Keyword::new("bar");
        assert_eq!(kw.find("dining room, bar, and bathrooms"), Some(13));
        assert!(kw.find("barbershop next door").is_none());
    }

    #[test]
    fn keyword_phrase_detection() {
        assert!(Keyword::new("full-service restaurant").is_phrase());
        assert!(!Keyword::new("drive-thru").is_phrase());
        assert!(!Keyword::new("hotel").is_phrase());
    }

    #[test]
    fn unit_cost_lookup() {
        let tax = builtin_taxonomy();
        assert_eq!(tax.unit_cost("healthcare", "hospital"), Some(650));
        assert_eq!(tax.unit_cost("industrial", "warehouse"), Some(125));
        assert_eq!(tax.unit_cost("healthcare", "warehouse"), None);
        assert_eq!(tax.unit_cost("nope", "hospital"), None);
    }

    #[test]
    fn escaped_phrases_compile() {
        // Phrases with regex metacharacters must not panic at build time.
        let kw = Keyword::new("doctor's office");
        assert!(kw.find("new doctor's office in town").is_some());
    }
}
