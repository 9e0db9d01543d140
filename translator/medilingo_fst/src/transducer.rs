//! Token-to-Taglish transduction and sentence assembly.
//!
//! The transducer consumes a token sequence the validator has already
//! accepted, emits one translated part per non-period token, repairs the
//! grammar with a positional particle, and assembles the final sentence.
//! It has no failure mode: untranslatable lexemes pass through verbatim.

use medilingo_lexer::{Token, TokenType};

use crate::table::taglish;

/// Translates one piece of a parameterized "every ..." phrase.
///
/// Numbers stay as written: "every 8 hours" keeps its "8" rather than
/// becoming a counting word, which only reads naturally before a unit.
fn translate_piece(piece: &str) -> &str {
    if !piece.is_empty() && piece.chars().all(|c| c.is_ascii_digit()) {
        piece
    } else {
        taglish(piece).unwrap_or(piece)
    }
}

fn translate_every_phrase(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(translate_piece)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Transduces a validated token sequence into a Taglish sentence.
///
/// Periods are dropped during substitution and a single terminal period is
/// re-added at assembly. Particle repair inserts "ang" before the unit when
/// the instruction names no quantity, or "ng" before the quantity when it
/// does; neither applies when the anchor token opens the sentence.
pub fn transduce(tokens: &[Token]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(tokens.len());
    let mut has_quantity = false;

    for token in tokens {
        if token.token_type == TokenType::Period {
            continue;
        }
        if token.token_type == TokenType::Quantity {
            has_quantity = true;
        }
        if token.token_type == TokenType::Frequency && token.lexeme.starts_with("every") {
            parts.push(translate_every_phrase(&token.lexeme));
        } else {
            let key = token.lexeme.to_lowercase();
            parts.push(match taglish(&key) {
                Some(translated) => translated.to_string(),
                None => token.lexeme.clone(),
            });
        }
    }

    if !parts.is_empty() {
        if !has_quantity {
            if let Some(unit_index) = tokens.iter().position(|t| t.token_type == TokenType::Unit)
            {
                if unit_index > 0 {
                    parts.insert(unit_index.min(parts.len()), "ang".to_string());
                }
            }
        } else if let Some(quantity_index) =
            tokens.iter().position(|t| t.token_type == TokenType::Quantity)
        {
            if quantity_index > 0 {
                parts.insert(quantity_index.min(parts.len()), "ng".to_string());
            }
        }
    }

    let sentence = assemble(&parts);
    log::debug!("transduced {} token(s) -> {sentence:?}", tokens.len());
    sentence
}

/// Joins translated parts, capitalizes the first letter, and closes the
/// sentence with exactly one period.
fn assemble(parts: &[String]) -> String {
    let joined = parts.join(" ");
    let mut chars = joined.chars();
    let mut sentence = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    sentence.truncate(sentence.trim_end().len());
    sentence.push('.');
    sentence
}
