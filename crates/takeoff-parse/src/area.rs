//! Dimension and area extraction.
//!
//! Two forms are recognized: explicit dimensions ("150x300", multiplied
//! out) and stated square footage ("4,000 sf", "20,000 square feet"). When
//! both co-occur the dimension form wins, since it is the more deliberate
//! statement of size.

use regex::Regex;

#[derive(Debug, Clone)]
pub struct AreaPatterns {
    dimensions: Regex,
    square_feet: Regex,
}

impl AreaPatterns {
    pub fn new() -> Self {
        Self {
            // "150x300", "150 X 300", "150 × 300"
            dimensions: Regex::new(r"(?i)\b(\d{2,4})\s*[x×]\s*(\d{2,4})\b").unwrap(),
            // "4000 sf", "4,000 sq ft", "20,000 square feet"
            square_feet: Regex::new(
                r"(?i)\b(\d{1,3}(?:,\d{3})+|\d+)\s*(?:sf|sqft|sq\.?\s*ft\.?|square\s+(?:feet|foot|footage))\b",
            )
            .unwrap(),
        }
    }
}

impl Default for AreaPatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract square footage from a description, dimension form first.
pub fn extract_square_footage(text: &str, patterns: &AreaPatterns) -> Option<u32> {
    if let Some(caps) = patterns.dimensions.captures(text) {
        let width: u32 = caps[1].parse().ok()?;
        let length: u32 = caps[2].parse().ok()?;
        return width.checked_mul(length);
    }

    let caps = patterns.square_feet.captures(text)?;
    caps[1].replace(',', "").parse().ok()
}
