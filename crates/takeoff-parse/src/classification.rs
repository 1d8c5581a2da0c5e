//! Project classification: renovation vs. addition vs. ground-up.
//!
//! Keyword sets are checked in priority order (renovation outranks
//! addition outranks ground-up), then two weaker hints are tried. A fully
//! ambiguous description yields `None`; the ground-up default lives in the
//! aggregator so it is applied in exactly one place.

use crate::types::ProjectClassification;

const RENOVATION: &[&str] = &[
    "renovate",
    "renovation",
    "remodel",
    "remodeling",
    "tenant improvement",
    "retrofit",
    "refurbish",
    "modernization",
    "gut rehab",
];

const ADDITION: &[&str] = &[
    "addition",
    "expansion",
    "expand",
    "add to existing",
    "add-on",
    "extension",
    "annex",
];

const GROUND_UP: &[&str] = &[
    "new construction",
    "ground up",
    "ground-up",
    "greenfield",
    "new build",
    "build new",
    "from scratch",
];

pub fn detect(text: &str) -> Option<ProjectClassification> {
    let lower = text.to_lowercase();

    for (keywords, classification) in [
        (RENOVATION, ProjectClassification::Renovation),
        (ADDITION, ProjectClassification::Addition),
        (GROUND_UP, ProjectClassification::GroundUp),
    ] {
        if keywords.iter().any(|k| lower.contains(k)) {
            return Some(classification);
        }
    }

    // Weaker hints: work on an existing building reads as renovation
    // unless something is being added; "new" alone reads as ground-up.
    if lower.contains("existing") && !lower.contains("add") && !lower.contains("expand") {
        return Some(ProjectClassification::Renovation);
    }
    if lower.contains("new") && !lower.contains("existing") {
        return Some(ProjectClassification::GroundUp);
    }
    None
}
