//! Instruction preprocessing: abbreviation expansion and canonicalization.
//!
//! Raw prescriptions arrive in every shape clinicians write them: mixed
//! case, Latin shorthand ("bid", "q8h", "prn"), stray whitespace, missing
//! final punctuation. [`normalize`] flattens all of that into the single
//! canonical form the lexing rules are written against: lowercase text,
//! full English phrases, single spaces, and a guaranteed terminal period.

use lazy_static::lazy_static;
use regex::Regex;

/// Medical shorthand and the full English phrase each expands to.
///
/// Expansion is whole-word only, so "bid" inside "morbid" is left alone.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("bid", "twice a day"),
    ("tid", "three times a day"),
    ("qid", "four times a day"),
    ("q.d.", "every day"),
    ("qd", "every day"),
    ("q4h", "every 4 hours"),
    ("q6h", "every 6 hours"),
    ("q8h", "every 8 hours"),
    ("prn", "as needed"),
    ("ac", "before meals"),
    ("pc", "after meals"),
    ("hs", "at bedtime"),
    ("stat", "immediately"),
    ("qam", "in the morning"),
    ("qpm", "at night"),
    ("po", "by mouth"),
    ("npo", "nothing by mouth"),
];

struct AbbrevRule {
    pattern: Regex,
    replacement: String,
}

lazy_static! {
    static ref ABBREV_RULES: Vec<AbbrevRule> = ABBREVIATIONS
        .iter()
        .map(|&(abbr, expansion)| {
            let escaped = regex::escape(abbr);
            if abbr.ends_with(|c: char| c.is_ascii_alphanumeric()) {
                AbbrevRule {
                    pattern: Regex::new(&format!(r"\b{escaped}\b")).expect("abbreviation pattern"),
                    replacement: expansion.to_string(),
                }
            } else {
                // Keys ending in '.' ("q.d.") have no trailing word boundary,
                // so consume the delimiter and re-emit it after the expansion.
                AbbrevRule {
                    pattern: Regex::new(&format!(r"\b{escaped}(\s|$)"))
                        .expect("abbreviation pattern"),
                    replacement: format!("{expansion}${{1}}"),
                }
            }
        })
        .collect();
}

/// Canonicalizes a raw instruction for lexing.
///
/// Trims and lowercases the input, expands every known abbreviation as a
/// whole word, appends a space-separated `.` when the text does not already
/// end with one, and collapses whitespace runs to single spaces.
///
/// The result is stable: normalizing already-normalized text returns it
/// unchanged.
pub fn normalize(input: &str) -> String {
    let mut text = input.trim().to_lowercase();
    for rule in ABBREV_RULES.iter() {
        if let std::borrow::Cow::Owned(expanded) =
            rule.pattern.replace_all(&text, rule.replacement.as_str())
        {
            text = expanded;
        }
    }
    if !text.ends_with('.') {
        text.push_str(" .");
    }
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    log::trace!("normalized {input:?} -> {normalized:?}");
    normalized
}
