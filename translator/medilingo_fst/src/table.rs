//! Static English-to-Taglish translation table.
//!
//! Keys are lowercase lexemes or whole frequency phrases as the lexer
//! produces them. Number words and their digit forms map to the Filipino
//! counting words, including the "na" linker where the counting word
//! requires one ("apat na", "anim na", "siyam na").

use lazy_static::lazy_static;
use std::collections::HashMap;

/// English lexeme or phrase paired with its Taglish rendering.
pub const TAGLISH_PAIRS: &[(&str, &str)] = &[
    // Route verbs
    ("take", "uminom"),
    ("apply", "ipahid"),
    ("consume", "kainin"),
    ("administer", "ibigay"),
    ("use", "gamitin"),
    ("insert", "ipasok"),
    ("swallow", "lunukin"),
    ("inhale", "langhapin"),
    // Quantities, word and digit forms
    ("a", "isang"),
    ("an", "isang"),
    ("one", "isang"),
    ("1", "isang"),
    ("two", "dalawang"),
    ("2", "dalawang"),
    ("three", "tatlong"),
    ("3", "tatlong"),
    ("four", "apat na"),
    ("4", "apat na"),
    ("five", "limang"),
    ("5", "limang"),
    ("six", "anim na"),
    ("6", "anim na"),
    ("seven", "pitong"),
    ("7", "pitong"),
    ("eight", "walong"),
    ("8", "walong"),
    ("nine", "siyam na"),
    ("9", "siyam na"),
    ("ten", "sampung"),
    ("10", "sampung"),
    ("half", "kalahating"),
    // Dose units
    ("tablet", "tableta"),
    ("capsule", "kapsula"),
    ("pill", "tableta"),
    ("ml", "ml"),
    ("milliliter", "milliliter"),
    ("tablespoon", "kutsara"),
    ("teaspoon", "kutsarita"),
    ("drop", "patak"),
    ("spray", "isprey"),
    ("puff", "puff"),
    ("application", "aplikasyon"),
    ("lozenge", "lozenge"),
    ("patch", "patch"),
    ("sachet", "sachet"),
    ("unit", "yunit"),
    ("mcg", "micrograms"),
    ("mg", "milligrams"),
    // Whole frequency phrases
    ("daily", "araw-araw"),
    ("once a day", "isang beses sa isang araw"),
    ("twice a day", "dalawang beses sa isang araw"),
    ("three times a day", "tatlong beses sa isang araw"),
    ("four times a day", "apat na beses sa isang araw"),
    ("as needed", "kung kinakailangan"),
    ("every other day", "tuwing makalawa"),
    ("twice weekly", "dalawang beses sa isang linggo"),
    ("for seven days", "sa loob ng pitong araw"),
    // Pieces of parameterized "every ..." phrases
    ("every", "bawat"),
    ("hours", "oras"),
    ("hour", "oras"),
    ("days", "na araw"),
    ("day", "araw"),
    ("weeks", "na linggo"),
    ("week", "linggo"),
    ("months", "na buwan"),
    ("month", "buwan"),
    // Timing and meal phrases
    ("before meals", "bago kumain"),
    ("after meals", "pagkatapos kumain"),
    ("with meals", "kasabay ng pagkain"),
    ("at bedtime", "bago matulog"),
    ("in the morning", "sa umaga"),
    ("in the afternoon", "sa hapon"),
    ("at night", "sa gabi"),
    ("immediately", "ngayon na"),
    // Connectives
    ("of", "ng"),
    ("and", "at"),
    ("then", "pagkatapos"),
];

lazy_static! {
    static ref TAGLISH: HashMap<&'static str, &'static str> =
        TAGLISH_PAIRS.iter().copied().collect();
}

/// Looks up the Taglish rendering of a lowercase lexeme or phrase.
pub fn taglish(key: &str) -> Option<&'static str> {
    TAGLISH.get(key).copied()
}
