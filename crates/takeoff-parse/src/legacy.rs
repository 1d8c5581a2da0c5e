//! Remnant of the original simplified description parser.
//!
//! The old parser and the context-aware detectors used to evolve
//! independently and drift apart; everything it did is now covered by the
//! main pipeline except two things kept here on purpose:
//! - a crude work-type scan the aggregator consults only when
//!   [`crate::classification::detect`] finds nothing, and
//! - the display-name mapping used as the project-name prefix.

use crate::types::ProjectClassification;

/// Crude substring scan, order matters: renovation > addition > new.
pub fn classify_work_type(text: &str) -> Option<ProjectClassification> {
    let lower = text.to_lowercase();
    if lower.contains("renovation") || lower.contains("remodel") {
        Some(ProjectClassification::Renovation)
    } else if lower.contains("addition") || lower.contains("expansion") {
        Some(ProjectClassification::Addition)
    } else if lower.contains("new") {
        Some(ProjectClassification::GroundUp)
    } else {
        None
    }
}

/// Human-facing classification names, as the original parser spelled them.
pub fn display_label(classification: ProjectClassification) -> &'static str {
    match classification {
        ProjectClassification::GroundUp => "New Construction",
        ProjectClassification::Addition => "Addition",
        ProjectClassification::Renovation => "Renovation",
    }
}
