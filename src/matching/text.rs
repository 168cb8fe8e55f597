//! Text edit classification heuristics.
//!
//! Given the old and new value of one field, decide what kind of edit
//! happened: a typo fix, a clarification, a meaning change, or something
//! the heuristics cannot place. All checks are O(n) in the string length;
//! ambiguity is never an error, the worst case is [`EditClass::Unclassified`].

use crate::model::FieldValue;
use std::collections::HashSet;

/// Maximum character-difference budget for the typo heuristic.
const MAX_TYPO_DISTANCE: usize = 3;

/// Minimum word length (exclusive) for a word to count as a keyword.
const KEYWORD_MIN_LEN: usize = 4;

/// Keyword-overlap ratio below which a change is considered a meaning change.
const MEANING_OVERLAP_THRESHOLD: f64 = 0.5;

/// Classification of a single field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditClass {
    /// Small character-level correction, same meaning
    TypoFix,
    /// New text is a strict superset of the old text's words
    Clarification,
    /// Keywords diverge enough that the meaning likely changed
    MeaningChange,
    /// None of the heuristics matched; treated as a generic update
    Unclassified,
}

/// Classify the edit between two field values.
///
/// Any non-text value on either side is a meaning change: structural changes
/// are never silently downgraded to cosmetic ones.
#[must_use]
pub fn classify(old: &FieldValue, new: &FieldValue) -> EditClass {
    match (old, new) {
        (FieldValue::Text(a), FieldValue::Text(b)) => classify_text(a, b),
        _ => EditClass::MeaningChange,
    }
}

/// Classify the edit between two text values.
///
/// Heuristics are checked in priority order: typo fix first, then
/// clarification, then meaning change.
#[must_use]
pub fn classify_text(old: &str, new: &str) -> EditClass {
    if is_typo_fix(old, new) {
        EditClass::TypoFix
    } else if is_clarification(old, new) {
        EditClass::Clarification
    } else if is_meaning_change(old, new) {
        EditClass::MeaningChange
    } else {
        EditClass::Unclassified
    }
}

/// Detect a typo fix: near-equal length, few differing character positions.
///
/// Counts positional mismatches over the zip of the lowercased strings plus
/// the length difference. This is a cheap approximation of edit distance,
/// deliberately conservative and order-sensitive; an insertion early in the
/// string shifts every later position and blows the budget, which is fine.
fn is_typo_fix(old: &str, new: &str) -> bool {
    // Length delta is taken from the raw strings; lowercasing can change the
    // character count (dotted capital I lowercases to two chars).
    let len_delta = old.chars().count().abs_diff(new.chars().count());
    if len_delta > MAX_TYPO_DISTANCE {
        return false;
    }

    let old = old.to_lowercase();
    let new = new.to_lowercase();

    let mismatches = old
        .chars()
        .zip(new.chars())
        .filter(|(a, b)| a != b)
        .count();

    mismatches + len_delta <= MAX_TYPO_DISTANCE
}

/// Detect a clarification: every old word appears in the new text, and the
/// new text has strictly more distinct words. Order and duplicates ignored.
fn is_clarification(old: &str, new: &str) -> bool {
    let old_words = word_set(old);
    let new_words = word_set(new);

    old_words.is_subset(&new_words) && new_words.len() > old_words.len()
}

/// Detect a meaning change via keyword overlap (Jaccard on long words).
///
/// Abstains (returns false) when either side has no keywords at all, falling
/// through to the generic update classification rather than guessing.
fn is_meaning_change(old: &str, new: &str) -> bool {
    let old_keywords = keyword_set(old);
    let new_keywords = keyword_set(new);

    if old_keywords.is_empty() || new_keywords.is_empty() {
        return false;
    }

    let overlap = old_keywords.intersection(&new_keywords).count();
    let total = old_keywords.union(&new_keywords).count();

    (overlap as f64) / (total as f64) < MEANING_OVERLAP_THRESHOLD
}

/// Case-insensitive set of all whitespace-separated words.
fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Case-insensitive set of "keywords": words longer than [`KEYWORD_MIN_LEN`].
///
/// A crude stand-in for noun/verb extraction, but long words carry most of
/// the meaning in UI guidance text.
fn keyword_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .filter(|w| w.chars().count() > KEYWORD_MIN_LEN)
        .map(str::to_lowercase)
        .collect()
}
