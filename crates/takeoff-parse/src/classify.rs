//! Building classification over the two-tier taxonomy.
//!
//! Matching policy: subtype keywords are scanned across every category;
//! a multi-word phrase scores 95, a single-word subtype keyword 85, a
//! bare category-level keyword 70. The highest confidence wins and ties
//! break on the earliest match position. A detected multi-occupancy mix
//! overrides the scan entirely and reports `mixed_use`.

use crate::mix::MixAllocation;
use crate::taxonomy::BuildingTaxonomy;

pub const PHRASE_CONFIDENCE: u8 = 95;
pub const SUBTYPE_CONFIDENCE: u8 = 85;
pub const CATEGORY_CONFIDENCE: u8 = 70;

/// Confidence for a mixed-use result with explicit percentages.
pub const MIX_EXPLICIT_CONFIDENCE: u8 = 90;
/// Confidence when the mix was inferred from bare mentions.
pub const MIX_INFERRED_CONFIDENCE: u8 = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub subtype: Option<String>,
    pub confidence: u8,
}

/// Classify a description. `mix` is the percentage allocator's result;
/// two or more distinct occupancies force `mixed_use`, with the subtype
/// slot holding the dominant occupancy label.
pub fn classify(
    text: &str,
    taxonomy: &BuildingTaxonomy,
    mix: Option<&MixAllocation>,
) -> Option<Classification> {
    if let Some(allocation) = mix {
        let confidence = if allocation.explicit {
            MIX_EXPLICIT_CONFIDENCE
        } else {
            MIX_INFERRED_CONFIDENCE
        };
        return Some(Classification {
            category: "mixed_use".to_string(),
            subtype: Some(allocation.dominant().to_string()),
            confidence,
        });
    }

    // (confidence, position): higher confidence wins, then earlier match.
    let mut best: Option<(u8, usize, Classification)> = None;
    let mut consider = |confidence: u8, pos: usize, category: &str, subtype: Option<&str>| {
        let better = match &best {
            None => true,
            Some((c, p, _)) => confidence > *c || (confidence == *c && pos < *p),
        };
        if better {
            best = Some((
                confidence,
                pos,
                Classification {
                    category: category.to_string(),
                    subtype: subtype.map(str::to_string),
                    confidence,
                },
            ));
        }
    };

    for cat in &taxonomy.categories {
        for sub in &cat.subtypes {
            for kw in &sub.keywords {
                if let Some(pos) = kw.find(text) {
                    let confidence = if kw.is_phrase() {
                        PHRASE_CONFIDENCE
                    } else {
                        SUBTYPE_CONFIDENCE
                    };
                    consider(confidence, pos, cat.id.as_str(), Some(sub.id.as_str()));
                }
            }
        }
        for kw in &cat.keywords {
            if let Some(pos) = kw.find(text) {
                consider(CATEGORY_CONFIDENCE, pos, cat.id.as_str(), None);
            }
        }
    }

    best.map(|(_, _, classification)| classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix::{allocate, builtin_mix_vocabulary};
    use crate::taxonomy::builtin_taxonomy;

    fn classify_builtin(text: &str) -> Option<Classification> {
        classify(text, &builtin_taxonomy(), None)
    }

    #[test]
    fn phrase_outranks_single_word() {
        // "bar" (85) also matches, but the full-service phrase scores 95.
        let c = classify_builtin("full-service restaurant with a bar").unwrap();
        assert_eq!(c.category, "restaurant");
        assert_eq!(c.subtype.as_deref(), Some("full_service"));
        assert_eq!(c.confidence, 95);
    }

    #[test]
    fn single_word_subtype_scores_85() {
        let c = classify_builtin("downtown hotel with 200 rooms").unwrap();
        assert_eq!(c.category, "commercial");
        assert_eq!(c.subtype.as_deref(), Some("hotel"));
        assert_eq!(c.confidence, 85);
    }

    #[test]
    fn bare_category_keyword_scores_70() {
        let c = classify_builtin("a medical campus expansion").unwrap();
        // "campus" is a university keyword (85); it outranks "medical".
        assert_eq!(c.confidence, 85);

        let c = classify_builtin("small medical suite").unwrap();
        assert_eq!(c.category, "healthcare");
        assert_eq!(c.subtype, None);
        assert_eq!(c.confidence, 70);
    }

    #[test]
    fn ties_break_on_earliest_position() {
        // "warehouse" and "factory" both score 85; warehouse appears first.
        let c = classify_builtin("warehouse and factory combo").unwrap();
        assert_eq!(c.subtype.as_deref(), Some("warehouse"));
    }

    #[test]
    fn mix_forces_mixed_use() {
        let vocab = builtin_mix_vocabulary();
        let text = "warehouse (70%) + office(30%)";
        let mix = allocate(text, &vocab).unwrap();
        let c = classify(text, &builtin_taxonomy(), Some(&mix)).unwrap();
        assert_eq!(c.category, "mixed_use");
        assert_eq!(c.subtype.as_deref(), Some("warehouse"));
        assert_eq!(c.confidence, 90);
    }

    #[test]
    fn no_match_is_none() {
        assert!(classify_builtin("just some text").is_none());
        assert!(classify_builtin("").is_none());
    }
}
