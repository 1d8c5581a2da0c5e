//! Free-text project description parsing for construction estimating.
//!
//! Turns descriptions like
//! `"4000 sf full-service restaurant with commercial kitchen in Nashville, TN"`
//! into a normalized [`ParsedProjectDescription`] ready for a downstream
//! cost service:
//! - square footage (dimensions or stated area)
//! - building category + subtype with a confidence score
//! - mixed-use occupancy shares ("warehouse (70%) + office (30%)")
//! - location ("City, ST" / "State, ST")
//! - work type (ground-up / addition / renovation), floors, finish level,
//!   restaurant service level, gated feature tags
//!
//! The engine is a pure function over immutable reference tables: no I/O,
//! no network, no cost math, no shared mutable state. It never fails;
//! partial input is the normal case while a user is typing, so every
//! extractor degrades to "no match" and the aggregator fills defaults.

pub mod aggregate;
pub mod area;
pub mod classification;
pub mod classify;
pub mod features;
pub mod finish;
pub mod floors;
pub mod legacy;
pub mod location;
pub mod mix;
pub mod taxonomy;
pub mod types;

pub use aggregate::Defaults;
pub use classify::Classification;
pub use features::{builtin_feature_catalog, FeatureCatalog};
pub use location::LocationDictionary;
pub use mix::{builtin_mix_vocabulary, MixAllocation, MixVocabulary};
pub use taxonomy::{builtin_taxonomy, BuildingTaxonomy};
pub use types::{
    FinishLevel, ParsedProjectDescription, ProjectClassification, ServiceLevel,
};

use aggregate::FieldExtractions;
use area::AreaPatterns;
use floors::FloorPatterns;

/// The static reference tables the extractors read. Built once at startup
/// and injected (never ambient globals) so tests can substitute
/// alternate taxonomies.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub taxonomy: BuildingTaxonomy,
    pub locations: LocationDictionary,
    pub mix: MixVocabulary,
    pub features: FeatureCatalog,
}

impl ReferenceTables {
    pub fn builtin() -> Self {
        Self {
            taxonomy: builtin_taxonomy(),
            locations: LocationDictionary::builtin(),
            mix: builtin_mix_vocabulary(),
            features: builtin_feature_catalog(),
        }
    }
}

/// The parsing engine. Holds only immutable tables and precompiled
/// patterns, so it is `Send + Sync` and safe to share across callers;
/// every [`parse`](Self::parse) call allocates a fresh record.
#[derive(Debug, Clone)]
pub struct ProjectParser {
    tables: ReferenceTables,
    defaults: Defaults,
    area: AreaPatterns,
    floors: FloorPatterns,
}

impl ProjectParser {
    pub fn new(tables: ReferenceTables) -> Self {
        Self::with_defaults(tables, Defaults::default())
    }

    pub fn with_defaults(tables: ReferenceTables, defaults: Defaults) -> Self {
        Self {
            tables,
            defaults,
            area: AreaPatterns::new(),
            floors: FloorPatterns::new(),
        }
    }

    /// Parser over the shipped reference tables.
    pub fn builtin() -> Self {
        Self::new(ReferenceTables::builtin())
    }

    /// Parse one description. Infallible: empty or unrecognizable input
    /// yields an all-null, zero-confidence record, never an error.
    pub fn parse(&self, text: &str) -> ParsedProjectDescription {
        if text.trim().is_empty() {
            return ParsedProjectDescription::empty();
        }

        let mix = mix::allocate(text, &self.tables.mix);
        let building = classify::classify(text, &self.tables.taxonomy, mix.as_ref());
        let building_type = building.as_ref().map(|c| c.category.as_str());

        let features = features::extract(text, building_type, &self.tables.features);

        tracing::debug!(
            category = building.as_ref().map(|c| c.category.as_str()),
            mixed = mix.is_some(),
            feature_count = features.len(),
            "parsed description"
        );

        let extractions = FieldExtractions {
            square_footage: area::extract_square_footage(text, &self.area),
            location: location::resolve(text, &self.tables.locations),
            floors: floors::extract_floors(text, &self.floors),
            project_classification: classification::detect(text),
            legacy_classification: legacy::classify_work_type(text),
            finish_level: finish::detect_finish(text),
            service_level: finish::detect_service(text),
            features,
            classification: building,
            mix,
        };

        aggregate::merge(extractions, &self.defaults)
    }
}

impl Default for ProjectParser {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_short_circuits() {
        let parser = ProjectParser::builtin();
        assert_eq!(parser.parse(""), ParsedProjectDescription::empty());
        assert_eq!(parser.parse("   \n\t"), ParsedProjectDescription::empty());
    }

    #[test]
    fn parse_is_deterministic() {
        let parser = ProjectParser::builtin();
        let text = "new 4000 sf full-service restaurant in Nashville, TN";
        assert_eq!(parser.parse(text), parser.parse(text));
    }

    #[test]
    fn alternate_taxonomies_can_be_injected() {
        use taxonomy::{BuildingTaxonomy, Category, Keyword, Subtype};

        let taxonomy = BuildingTaxonomy::new(vec![Category {
            id: "aerospace".to_string(),
            keywords: vec![Keyword::new("aerospace")],
            subtypes: vec![Subtype {
                id: "hangar".to_string(),
                keywords: vec![Keyword::new("hangar")],
                unit_cost: 90,
            }],
        }]);
        let tables = ReferenceTables {
            taxonomy,
            ..ReferenceTables::builtin()
        };

        let record = ProjectParser::new(tables).parse("40000 sf hangar");
        assert_eq!(record.building_type.as_deref(), Some("aerospace"));
        assert_eq!(record.building_subtype.as_deref(), Some("hangar"));
    }
}
