//! Merge layer: combines all extractor outputs into one record.
//!
//! Conflict policy: the context-aware detectors win; the legacy work-type
//! scan is consulted only when they found nothing. Defaults fill whatever
//! is still empty; the caller already handled the empty-input
//! short-circuit, so by the time this runs there is real text behind the
//! record.

use crate::classify::Classification;
use crate::legacy;
use crate::mix::MixAllocation;
use crate::types::{FinishLevel, ParsedProjectDescription, ProjectClassification, ServiceLevel};

/// Fill-in values for fields the description never stated. Injectable so
/// deployments can pick their own home market.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub location: String,
    pub square_footage: u32,
    pub floors: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            location: "Nashville, TN".to_string(),
            square_footage: 10_000,
            floors: 1,
        }
    }
}

/// Per-field extractor outputs, produced by [`crate::ProjectParser::parse`].
#[derive(Debug, Clone, Default)]
pub struct FieldExtractions {
    pub classification: Option<Classification>,
    pub mix: Option<MixAllocation>,
    pub square_footage: Option<u32>,
    pub location: Option<String>,
    pub floors: Option<u32>,
    pub project_classification: Option<ProjectClassification>,
    pub legacy_classification: Option<ProjectClassification>,
    pub finish_level: Option<FinishLevel>,
    pub service_level: Option<ServiceLevel>,
    pub features: std::collections::BTreeSet<String>,
}

/// Merge extractions into the final record, applying defaults and
/// synthesizing the project name.
pub fn merge(extractions: FieldExtractions, defaults: &Defaults) -> ParsedProjectDescription {
    let FieldExtractions {
        classification,
        mix,
        square_footage,
        location,
        floors,
        project_classification,
        legacy_classification,
        finish_level,
        service_level,
        features,
    } = extractions;

    let (building_type, building_subtype, confidence) = match classification {
        Some(c) => (Some(c.category), c.subtype, c.confidence),
        None => (None, None, 0),
    };

    let project_classification = project_classification
        .or(legacy_classification)
        .unwrap_or(ProjectClassification::GroundUp);

    // Restaurant-only field; a stray "fast food" in an office description
    // must not leak through.
    let service_level = if building_type.as_deref() == Some("restaurant") {
        service_level
    } else {
        None
    };

    let square_footage = square_footage.unwrap_or(defaults.square_footage);
    let location = location.unwrap_or_else(|| defaults.location.clone());
    let floors = floors.unwrap_or(defaults.floors);

    let project_name = Some(synthesize_name(
        project_classification,
        square_footage,
        building_type.as_deref(),
        building_subtype.as_deref(),
        &location,
    ));

    ParsedProjectDescription {
        building_type,
        building_subtype,
        square_footage: Some(square_footage),
        location: Some(location),
        floors: Some(floors),
        project_classification: Some(project_classification),
        finish_level: Some(finish_level.unwrap_or(FinishLevel::Standard)),
        service_level,
        building_mix: mix.as_ref().map(MixAllocation::fractions),
        mix_summary: mix.as_ref().map(MixAllocation::summary),
        features,
        confidence,
        project_name,
    }
}

/// "Renovation 45,000 sf Mixed Use - Atlanta, GA", built from whatever
/// fields resolved; used when the user supplied no explicit name.
fn synthesize_name(
    classification: ProjectClassification,
    square_footage: u32,
    building_type: Option<&str>,
    building_subtype: Option<&str>,
    location: &str,
) -> String {
    let type_label = match (building_type, building_subtype) {
        (Some("mixed_use"), _) => display_label("mixed_use"),
        (_, Some(subtype)) => display_label(subtype),
        (Some(category), None) => display_label(category),
        (None, _) => "Project".to_string(),
    };

    format!(
        "{} {} sf {} - {}",
        legacy::display_label(classification),
        format_thousands(square_footage),
        type_label,
        location
    )
}

fn display_label(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
