//! Context-gated feature extraction.
//!
//! Catalog entries carry the building category they are valid for, or
//! `general` for ungated amenities. A keyword match is only emitted when
//! its group is `general` or equals the already-resolved building type,
//! so "operating room" inside a restaurant description never produces a
//! healthcare tag. A second pass parses "with/including/has <list>"
//! clauses and unions any additional gated matches; the output is a set,
//! so the pass is idempotent.

use std::collections::BTreeSet;

use regex::Regex;

use crate::taxonomy::Keyword;

pub const GENERAL_GROUP: &str = "general";

#[derive(Debug, Clone)]
pub struct FeatureEntry {
    /// Emitted tag. General-group tags are human-readable ("HVAC system");
    /// category tags are snake_case ("commercial_kitchen").
    pub tag: String,
    /// Building category this entry is valid for, or `general`.
    pub group: String,
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    pub entries: Vec<FeatureEntry>,
    amenity_clause: Regex,
}

impl FeatureCatalog {
    pub fn new(entries: Vec<FeatureEntry>) -> Self {
        Self {
            entries,
            amenity_clause: Regex::new(
                r"(?i)\b(?:with|including|has|features|featuring)\s+([^.;:]+)",
            )
            .unwrap(),
        }
    }
}

fn entry(tag: &str, group: &str, keywords: &[&str]) -> FeatureEntry {
    FeatureEntry {
        tag: tag.to_string(),
        group: group.to_string(),
        keywords: keywords.iter().map(|k| Keyword::new(k)).collect(),
    }
}

/// The shipped feature catalog.
pub fn builtin_feature_catalog() -> FeatureCatalog {
    FeatureCatalog::new(vec![
        // Ungated amenities.
        entry(
            "HVAC system",
            GENERAL_GROUP,
            &["hvac", "air conditioning", "climate control"],
        ),
        entry(
            "Bathrooms",
            GENERAL_GROUP,
            &["bathroom", "bathrooms", "restroom", "restrooms"],
        ),
        entry("Elevator", GENERAL_GROUP, &["elevator", "elevators"]),
        entry("Parking", GENERAL_GROUP, &["parking", "parking garage"]),
        entry(
            "Fire suppression",
            GENERAL_GROUP,
            &["sprinkler", "sprinklers", "fire suppression"],
        ),
        entry("Backup generator", GENERAL_GROUP, &["generator", "backup power"]),
        entry(
            "Security system",
            GENERAL_GROUP,
            &["security system", "cctv", "access control"],
        ),
        entry("Solar panels", GENERAL_GROUP, &["solar", "photovoltaic"]),
        // Restaurant.
        entry(
            "commercial_kitchen",
            "restaurant",
            &["commercial kitchen", "chef's kitchen", "prep kitchen"],
        ),
        entry(
            "full_bar",
            "restaurant",
            &["bar", "full bar", "wine bar", "cocktail bar"],
        ),
        entry("dining_room", "restaurant", &["dining room", "dining area"]),
        entry(
            "outdoor_seating",
            "restaurant",
            &["patio", "outdoor seating", "rooftop seating"],
        ),
        entry("drive_thru", "restaurant", &["drive-thru", "drive thru", "drive-through"]),
        entry("walk_in_cooler", "restaurant", &["walk-in cooler", "walk-in freezer"]),
        // Healthcare.
        entry(
            "operating_room",
            "healthcare",
            &["operating room", "operating rooms", "surgical suite"],
        ),
        entry(
            "exam_rooms",
            "healthcare",
            &["exam room", "exam rooms", "examination room"],
        ),
        entry("imaging_suite", "healthcare", &["mri", "x-ray", "radiology"]),
        entry("laboratory", "healthcare", &["laboratory", "lab space"]),
        entry("pharmacy", "healthcare", &["pharmacy"]),
        // Industrial.
        entry(
            "loading_dock",
            "industrial",
            &["loading dock", "loading docks", "dock doors"],
        ),
        entry("overhead_crane", "industrial", &["overhead crane", "bridge crane"]),
        entry("clean_room", "industrial", &["clean room", "cleanroom"]),
        entry("high_bay", "industrial", &["high bay", "clear height"]),
        entry("cold_storage", "industrial", &["cold storage", "freezer space"]),
        // Commercial.
        entry(
            "conference_rooms",
            "commercial",
            &["conference room", "conference rooms", "meeting rooms"],
        ),
        entry("fitness_center", "commercial", &["fitness center", "workout room"]),
        entry("lobby", "commercial", &["lobby", "atrium"]),
        entry("server_room", "commercial", &["server room", "data center"]),
        // Residential.
        entry("pool", "residential", &["pool", "swimming pool"]),
        entry("clubhouse", "residential", &["clubhouse", "community room"]),
        entry("balconies", "residential", &["balcony", "balconies"]),
        entry(
            "in_unit_laundry",
            "residential",
            &["in-unit laundry", "washer and dryer"],
        ),
        // Educational.
        entry("gymnasium", "educational", &["gymnasium", "gym"]),
        entry("cafeteria", "educational", &["cafeteria", "lunchroom"]),
        entry("library", "educational", &["library", "media center"]),
        entry("auditorium", "educational", &["auditorium"]),
        entry("playground", "educational", &["playground"]),
    ])
}

/// Extract gated feature tags for a description.
pub fn extract(
    text: &str,
    building_type: Option<&str>,
    catalog: &FeatureCatalog,
) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    let gated = |entry: &FeatureEntry| {
        entry.group == GENERAL_GROUP || Some(entry.group.as_str()) == building_type
    };

    for entry in catalog.entries.iter().filter(|e| gated(e)) {
        if entry.keywords.iter().any(|kw| kw.find(text).is_some()) {
            tags.insert(entry.tag.clone());
        }
    }

    // Second pass over amenity-list clauses: "with X, Y, and Z".
    for caps in catalog.amenity_clause.captures_iter(text) {
        for item in caps[1].split([',', '/']).flat_map(|part| part.split(" and ")) {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            for entry in catalog.entries.iter().filter(|e| gated(e)) {
                if entry.keywords.iter().any(|kw| kw.find(item).is_some()) {
                    tags.insert(entry.tag.clone());
                }
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_builtin(text: &str, building_type: Option<&str>) -> BTreeSet<String> {
        extract(text, building_type, &builtin_feature_catalog())
    }

    #[test]
    fn general_features_apply_to_any_type() {
        let tags = extract_builtin("warehouse with HVAC and bathrooms", Some("mixed_use"));
        assert!(tags.contains("HVAC system"));
        assert!(tags.contains("Bathrooms"));
    }

    #[test]
    fn category_features_require_matching_type() {
        let text = "restaurant with an operating room theme";
        let tags = extract_builtin(text, Some("restaurant"));
        assert!(!tags.contains("operating_room"));

        let tags = extract_builtin("hospital with operating room", Some("healthcare"));
        assert!(tags.contains("operating_room"));
    }

    #[test]
    fn restaurant_amenity_list() {
        let text = "with commercial kitchen, dining room, bar, and bathrooms";
        let tags = extract_builtin(text, Some("restaurant"));
        assert!(tags.contains("commercial_kitchen"));
        assert!(tags.contains("dining_room"));
        assert!(tags.contains("full_bar"));
        assert!(tags.contains("Bathrooms"));
    }

    #[test]
    fn unresolved_building_type_gets_general_only() {
        let tags = extract_builtin("loading dock with hvac", None);
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["HVAC system"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "restaurant with bar and bar and bar";
        let tags = extract_builtin(text, Some("restaurant"));
        assert_eq!(tags.iter().filter(|t| *t == "full_bar").count(), 1);
    }
}
