//! Vegan-status classification from free-text label data.
//!
//! The source data carries vegan-friendliness as a phrase buried in a
//! free-text certification label ("Vegan Friendly", "Not Vegan (fined with
//! isinglass)", ...). The rule is deliberately simple and deliberately
//! *isolated*: a record is vegan when its label contains "vegan friendly" and
//! does not contain "not vegan", matched case-insensitively as plain
//! substrings. The negative phrase wins when both appear.
//!
//! Substring heuristics over free text are fragile, so the classifier is a
//! seam, not a function call scattered through the engine: everything that
//! needs a verdict goes through [`VeganClassifier`], and every engine entry
//! point has a `_with` variant accepting a custom implementation. A stricter
//! label parser can replace [`PhraseClassifier`] without touching filtering or
//! aggregation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Classifies a record's label text as vegan or not.
///
/// Implementations must be pure and total: same label, same verdict, never a
/// failure.
pub trait VeganClassifier {
    fn is_vegan(&self, label: &str) -> bool;
}

/// Default classifier: case-insensitive phrase containment.
///
/// Positive phrase: "vegan friendly". Negative phrase: "not vegan". The
/// negative check is evaluated independently and takes precedence.
#[derive(Debug, Clone, Copy)]
pub struct PhraseClassifier {
    positive: &'static Regex,
    negative: &'static Regex,
}

impl PhraseClassifier {
    pub fn new() -> Self {
        Self { positive: regex!(r"(?i)vegan friendly"), negative: regex!(r"(?i)not vegan") }
    }
}

impl Default for PhraseClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl VeganClassifier for PhraseClassifier {
    fn is_vegan(&self, label: &str) -> bool {
        !self.negative.is_match(label) && self.positive.is_match(label)
    }
}

static DEFAULT: Lazy<PhraseClassifier> = Lazy::new(PhraseClassifier::new);

pub(crate) fn default_classifier() -> &'static PhraseClassifier {
    &DEFAULT
}

/// Classify `label` with the default [`PhraseClassifier`].
///
/// # Example
/// ```
/// use cantina::is_vegan;
///
/// assert!(is_vegan("Vegan Friendly"));
/// assert!(!is_vegan("Vegan Friendly, Not Vegan (finings)"));
/// ```
pub fn is_vegan(label: &str) -> bool {
    DEFAULT.is_vegan(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_examples_matching() {
        // Array of (expected_verdict, label_text)
        let cases: Vec<(bool, &str)> = vec![
            (true, "Vegan Friendly"),
            (true, "vegan friendly"),
            (true, "VEGAN FRIENDLY"),
            (true, "Certified: vegan friendly since 2015"),
            (true, "vegan friendly (no animal-derived finings)"),
            (false, "Not Vegan"),
            (false, "not vegan"),
            (false, "NOT VEGAN"),
            (false, "Not Vegan (fined with isinglass)"),
            (false, "Vegan Friendly, Not Vegan (finings)"),
            (false, "not vegan but vegan friendly on request"),
            (false, ""),
            (false, "Organic"),
            (false, "vegan"),
            (false, "vegetarian friendly"),
            (false, "friendly vegan"),
        ];

        for (expected, label) in cases {
            assert_eq!(is_vegan(label), expected, "label: {label:?}");
        }
    }

    #[test]
    fn casing_is_irrelevant() {
        let labels = ["Vegan Friendly", "Not Vegan", "Vegan Friendly, Not Vegan (finings)", "nothing relevant"];
        for label in labels {
            assert_eq!(is_vegan(label), is_vegan(&label.to_uppercase()), "upper: {label:?}");
            assert_eq!(is_vegan(label), is_vegan(&label.to_lowercase()), "lower: {label:?}");
        }
    }

    #[test]
    fn negative_phrase_takes_precedence() {
        assert!(!is_vegan("vegan friendly / not vegan"));
        assert!(!is_vegan("NOT VEGAN yet vegan friendly"));
    }

    #[test]
    fn substring_containment_only() {
        // No word-boundary logic: adjacent text does not defeat the match.
        assert!(is_vegan("xvegan friendlyx"));
        assert!(!is_vegan("this is definitely not veganized, vegan friendly"));
    }

    #[test]
    fn custom_classifier_is_swappable() {
        struct Strict;
        impl VeganClassifier for Strict {
            fn is_vegan(&self, label: &str) -> bool {
                label.eq_ignore_ascii_case("vegan friendly")
            }
        }

        let strict = Strict;
        assert!(strict.is_vegan("Vegan Friendly"));
        assert!(!strict.is_vegan("Certified: vegan friendly since 2015"));
    }
}
