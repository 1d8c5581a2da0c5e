//! Mixed-use occupancy allocation.
//!
//! Detects percentage-tagged occupancies ("warehouse (70%)", "30% office",
//! "retail 20%") over a fixed alias vocabulary, normalizes aliases to
//! canonical mix labels, and produces a share allocation that always sums
//! to exactly 100:
//! - a single bare mention with no percentages is not a mix (the building
//!   classifier handles it normally);
//! - one percentage-less mention alongside partial percentages absorbs the
//!   remainder;
//! - two or more bare mentions with no percentages split equally, with the
//!   integer remainder going to the first-detected label;
//! - percentages that do not sum to 100 with no single absorber are
//!   renormalized by largest remainder;
//! - partial percentages with several leftover bare mentions are ambiguous
//!   and rejected outright.

use std::collections::BTreeMap;
use std::ops::Range;

use regex::Regex;

/// One vocabulary alias with its canonical label and precompiled shapes.
#[derive(Debug, Clone)]
pub struct MixPattern {
    pub label: String,
    pub alias: String,
    /// "<alias>(<pct>%)", "<pct>% <alias>", "<alias> <pct>%".
    tagged: [Regex; 3],
    bare: Regex,
}

impl MixPattern {
    fn new(label: &str, alias: &str) -> Self {
        let a = regex::escape(alias);
        Self {
            label: label.to_string(),
            alias: alias.to_string(),
            tagged: [
                Regex::new(&format!(r"(?i)\b{a}\s*\(\s*(\d{{1,3}})\s*%\s*\)")).unwrap(),
                Regex::new(&format!(r"(?i)\b(\d{{1,3}})\s*%\s+{a}\b")).unwrap(),
                Regex::new(&format!(r"(?i)\b{a}\s+(\d{{1,3}})\s*%")).unwrap(),
            ],
            bare: Regex::new(&format!(r"(?i)\b{a}\b")).unwrap(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MixVocabulary {
    pub patterns: Vec<MixPattern>,
}

impl MixVocabulary {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let mut patterns = Vec::new();
        for (label, aliases) in entries {
            for alias in *aliases {
                patterns.push(MixPattern::new(label, alias));
            }
        }
        Self { patterns }
    }
}

/// The shipped alias vocabulary. Labels are the canonical mix categories;
/// aliases fold common phrasing onto them.
pub fn builtin_mix_vocabulary() -> MixVocabulary {
    MixVocabulary::new(&[
        ("warehouse", &["warehouse", "distribution", "storage"]),
        ("office", &["office", "offices"]),
        ("retail", &["retail", "store", "storefront"]),
        ("restaurant", &["restaurant", "kitchen", "dining", "food service"]),
        (
            "residential",
            &["residential", "apartment", "apartments", "housing", "condo"],
        ),
        (
            "industrial",
            &["industrial", "manufacturing", "facility", "production"],
        ),
        (
            "educational",
            &["educational", "school", "university", "college", "classroom"],
        ),
        ("healthcare", &["healthcare", "medical", "clinic", "hospital"]),
        ("hotel", &["hotel", "hospitality"]),
    ])
}

/// A resolved allocation. Shares are integer percentages in first-detected
/// order and always sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixAllocation {
    pub shares: Vec<(String, u32)>,
    /// At least one share came from an explicit percentage in the text.
    pub explicit: bool,
}

impl MixAllocation {
    /// Category → fraction, for the output record.
    pub fn fractions(&self) -> BTreeMap<String, f64> {
        self.shares
            .iter()
            .map(|(label, pct)| (label.clone(), f64::from(*pct) / 100.0))
            .collect()
    }

    /// The label holding the largest share; ties go to the first-detected.
    pub fn dominant(&self) -> &str {
        let mut best = &self.shares[0];
        for share in &self.shares[1..] {
            if share.1 > best.1 {
                best = share;
            }
        }
        &best.0
    }

    /// Deterministic textual restatement, lossless under re-parsing.
    pub fn summary(&self) -> String {
        self.shares
            .iter()
            .map(|(label, pct)| format!("{label} ({pct}%)"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

struct Detected {
    label: String,
    pct: Option<u32>,
    first_pos: usize,
}

/// Allocate occupancy shares from a description. Returns `None` unless at
/// least two distinct labels end up with a share.
pub fn allocate(text: &str, vocab: &MixVocabulary) -> Option<MixAllocation> {
    let mut tagged: Vec<Detected> = Vec::new();
    let mut tagged_spans: Vec<Range<usize>> = Vec::new();

    for pattern in &vocab.patterns {
        for shape in &pattern.tagged {
            for caps in shape.captures_iter(text) {
                let whole = caps.get(0).unwrap();
                let pct: u32 = match caps[1].parse() {
                    Ok(p) => p,
                    Err(_) => continue,
                };
                tagged_spans.push(whole.range());
                match tagged.iter_mut().find(|d| d.label == pattern.label) {
                    // First occurrence of a label wins; later restatements
                    // of the same label are ignored.
                    Some(existing) => existing.first_pos = existing.first_pos.min(whole.start()),
                    None => tagged.push(Detected {
                        label: pattern.label.clone(),
                        pct: Some(pct),
                        first_pos: whole.start(),
                    }),
                }
            }
        }
    }

    // Bare mentions: alias occurrences not consumed by a tagged form.
    let mut bare: Vec<Detected> = Vec::new();
    for pattern in &vocab.patterns {
        if tagged.iter().any(|d| d.label == pattern.label) {
            continue;
        }
        for m in pattern.bare.find_iter(text) {
            if tagged_spans.iter().any(|s| s.start <= m.start() && m.end() <= s.end) {
                continue;
            }
            match bare.iter_mut().find(|d| d.label == pattern.label) {
                Some(existing) => existing.first_pos = existing.first_pos.min(m.start()),
                None => bare.push(Detected {
                    label: pattern.label.clone(),
                    pct: None,
                    first_pos: m.start(),
                }),
            }
            break;
        }
    }

    let allocation = if tagged.is_empty() {
        equal_split(bare)?
    } else {
        resolve_tagged(tagged, bare)?
    };

    if allocation.shares.len() < 2 {
        return None;
    }
    debug_assert_eq!(allocation.shares.iter().map(|(_, p)| p).sum::<u32>(), 100);
    Some(allocation)
}

/// No explicit percentages: two or more bare mentions split equally, the
/// integer remainder going to the first-detected label.
fn equal_split(mut bare: Vec<Detected>) -> Option<MixAllocation> {
    if bare.len() < 2 {
        return None;
    }
    bare.sort_by_key(|d| d.first_pos);

    let n = bare.len() as u32;
    let base = 100 / n;
    let remainder = 100 % n;

    let shares = bare
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let pct = if i == 0 { base + remainder } else { base };
            (d.label.clone(), pct)
        })
        .collect();

    Some(MixAllocation {
        shares,
        explicit: false,
    })
}

fn resolve_tagged(mut tagged: Vec<Detected>, bare: Vec<Detected>) -> Option<MixAllocation> {
    let total: u32 = tagged.iter().filter_map(|d| d.pct).sum();

    if total < 100 {
        match bare.len() {
            // The single percentage-less mention absorbs the remainder.
            1 => {
                let absorber = bare.into_iter().next().unwrap();
                tagged.push(Detected {
                    pct: Some(100 - total),
                    ..absorber
                });
            }
            0 => renormalize(&mut tagged, total)?,
            // Several leftover bare mentions: ambiguous, refuse to guess.
            _ => return None,
        }
    } else if total > 100 {
        renormalize(&mut tagged, total)?;
    }
    // total == 100: extra bare mentions carry no share and are dropped.

    tagged.sort_by_key(|d| d.first_pos);
    Some(MixAllocation {
        shares: tagged
            .into_iter()
            .map(|d| (d.label, d.pct.unwrap_or(0)))
            .collect(),
        explicit: true,
    })
}

/// Scale percentages so they sum to exactly 100, distributing rounding
/// units by largest remainder (ties to the earliest mention).
fn renormalize(tagged: &mut [Detected], total: u32) -> Option<()> {
    if total == 0 {
        return None;
    }
    let mut scaled: Vec<(usize, u32, u32)> = tagged
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let raw = d.pct.unwrap_or(0) * 100;
            (i, raw / total, raw % total)
        })
        .collect();

    let assigned: u32 = scaled.iter().map(|(_, q, _)| q).sum();
    let mut leftover = 100 - assigned;

    scaled.sort_by(|a, b| b.2.cmp(&a.2).then(tagged[a.0].first_pos.cmp(&tagged[b.0].first_pos)));
    for entry in &mut scaled {
        if leftover == 0 {
            break;
        }
        entry.1 += 1;
        leftover -= 1;
    }

    for (i, q, _) in scaled {
        tagged[i].pct = Some(q);
    }
    Some(())
}
