//! Finish-level and restaurant service-level detection.

use crate::types::{FinishLevel, ServiceLevel};

const PREMIUM: &[&str] = &["premium", "high-end", "high end", "luxury", "upscale", "class a"];
const BASIC: &[&str] = &["basic", "economy", "budget", "no-frills", "no frills"];

const FULL_SERVICE: &[&str] = &[
    "full-service",
    "full service",
    "fine dining",
    "sit-down",
    "white tablecloth",
];
const FAST_FOOD: &[&str] = &[
    "fast food",
    "fast-food",
    "quick service",
    "quick-service",
    "qsr",
    "drive-thru",
    "drive thru",
];
const CASUAL_DINING: &[&str] = &["casual dining", "family restaurant", "family-style"];

pub fn detect_finish(text: &str) -> Option<FinishLevel> {
    let lower = text.to_lowercase();
    if PREMIUM.iter().any(|k| lower.contains(k)) {
        return Some(FinishLevel::Premium);
    }
    if BASIC.iter().any(|k| lower.contains(k)) {
        return Some(FinishLevel::Basic);
    }
    None
}

/// Raw service-level scan; the aggregator suppresses the result unless the
/// building type resolves to `restaurant`.
pub fn detect_service(text: &str) -> Option<ServiceLevel> {
    let lower = text.to_lowercase();
    if FULL_SERVICE.iter().any(|k| lower.contains(k)) {
        return Some(ServiceLevel::FullService);
    }
    if FAST_FOOD.iter().any(|k| lower.contains(k)) {
        return Some(ServiceLevel::FastFood);
    }
    if CASUAL_DINING.iter().any(|k| lower.contains(k)) {
        return Some(ServiceLevel::CasualDining);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_levels() {
        assert_eq!(detect_finish("luxury condo tower"), Some(FinishLevel::Premium));
        assert_eq!(detect_finish("budget motel refresh"), Some(FinishLevel::Basic));
        assert_eq!(detect_finish("plain warehouse"), None);
    }

    #[test]
    fn premium_outranks_basic() {
        assert_eq!(
            detect_finish("high-end finishes on a budget schedule"),
            Some(FinishLevel::Premium)
        );
    }

    #[test]
    fn service_levels() {
        assert_eq!(
            detect_service("full-service restaurant"),
            Some(ServiceLevel::FullService)
        );
        assert_eq!(detect_service("fast food pad site"), Some(ServiceLevel::FastFood));
        assert_eq!(
            detect_service("casual dining concept"),
            Some(ServiceLevel::CasualDining)
        );
        assert_eq!(detect_service("coffee shop"), None);
    }
}
