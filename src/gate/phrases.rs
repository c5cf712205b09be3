//! Deceptive-phrase scanning.
//!
//! A fixed list of deceptive or conditional sales phrases that are never
//! waivable: any occurrence anywhere in the payload is a hard failure and
//! blocks publication regardless of every numeric threshold. Matching is
//! case-insensitive and tolerant of arbitrary whitespace between words.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Phrases that force `can_publish = false`. Order is the reporting order.
pub const DECEPTIVE_PHRASES: &[&str] = &[
    "requires financing",
    "subject to credit approval",
    "with approved credit",
    "price subject to change",
    "see dealer for details",
];

static PHRASE_SET: Lazy<RegexSet> = Lazy::new(|| {
    let patterns: Vec<String> = DECEPTIVE_PHRASES
        .iter()
        .map(|phrase| {
            let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
            format!(r"(?i)\b{}\b", words.join(r"\s+"))
        })
        .collect();
    RegexSet::new(&patterns).expect("static phrase patterns compile")
});

/// Return every deceptive phrase found in `text`, in catalog order.
pub fn scan(text: &str) -> Vec<&'static str> {
    PHRASE_SET
        .matches(text)
        .iter()
        .map(|index| DECEPTIVE_PHRASES[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_has_no_hits() {
        assert!(scan("A one-owner wagon with a full service history.").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let hits = scan("Offer Subject To Credit Approval only.");
        assert_eq!(hits, vec!["subject to credit approval"]);
    }

    #[test]
    fn whitespace_between_words_is_tolerated() {
        let hits = scan("price\n  subject   to\tchange without notice");
        assert_eq!(hits, vec!["price subject to change"]);
    }

    #[test]
    fn multiple_phrases_report_in_catalog_order() {
        let hits = scan("See dealer for details. This price requires financing.");
        assert_eq!(hits, vec!["requires financing", "see dealer for details"]);
    }

    #[test]
    fn partial_words_do_not_match() {
        // "refinancing" must not trip the "requires financing" pattern.
        assert!(scan("prequalifies refinancing offers").is_empty());
    }
}
