//! Record types produced by the parsing engine.
//!
//! `ParsedProjectDescription` is the single output of [`crate::ProjectParser::parse`].
//! It is constructed fresh on every call and never mutated afterwards; the
//! downstream form layer merges it verbatim into the cost-service request
//! payload, which is why everything here derives `Serialize`/`Deserialize`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Whether the project is new construction, an addition, or a renovation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectClassification {
    GroundUp,
    Addition,
    Renovation,
}

impl ProjectClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GroundUp => "ground_up",
            Self::Addition => "addition",
            Self::Renovation => "renovation",
        }
    }
}

/// Interior finish quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishLevel {
    Basic,
    Standard,
    Premium,
}

impl FinishLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

/// Restaurant service model. Only meaningful when the resolved building
/// type is `restaurant`; the aggregator suppresses it everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceLevel {
    FullService,
    CasualDining,
    FastFood,
}

impl ServiceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullService => "full_service",
            Self::CasualDining => "casual_dining",
            Self::FastFood => "fast_food",
        }
    }
}

/// The normalized project record extracted from one free-text description.
///
/// Every field is optional because partial input is the common case while
/// the user is still typing. `features` and `building_mix` use ordered
/// collections so repeated parses of identical text serialize
/// byte-identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedProjectDescription {
    /// Canonical building category id (e.g. `restaurant`, `mixed_use`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
    /// Canonical subtype id; for mixed-use projects, the largest-share
    /// occupancy label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<u32>,
    /// Title-case "City, ST" or "State, ST".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_classification: Option<ProjectClassification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_level: Option<FinishLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_level: Option<ServiceLevel>,
    /// Category → fraction of total area. Present only when two or more
    /// distinct occupancies were detected; fractions sum to 1.0 modulo
    /// integer-percentage rounding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_mix: Option<BTreeMap<String, f64>>,
    /// Deterministic textual restatement of `building_mix`
    /// ("warehouse (70%), office (30%)"). Re-parsing it yields the same
    /// mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix_summary: Option<String>,
    pub features: BTreeSet<String>,
    /// Heuristic 0–100 score for the building classification.
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

impl ParsedProjectDescription {
    /// The all-null, zero-confidence record returned for empty input.
    pub fn empty() -> Self {
        Self::default()
    }
}
