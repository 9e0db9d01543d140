//! Pipeline orchestration for the medilingo translator.
//!
//! Chains the four stages (normalize, tokenize, validate, transduce) behind a
//! small API: [`simplify_instruction`] for single instructions,
//! [`simplify_batch`] / [`simplify_prescription`] for multi-line payloads, and
//! [`inspect_instruction`] when the caller wants the intermediate stages too.

use medilingo_fst::transduce;
use medilingo_grammar::validator::{validate, SimplifyError};
use medilingo_lexer::{normalize, tokenize, Token};
use serde::Serialize;

/// Full trace of one instruction through the pipeline, for JSON output and
/// IDE-style consumers.
#[derive(Debug, Serialize)]
pub struct SimplifyReport {
    /// The raw input as the caller supplied it
    pub instruction: String,
    /// Canonical form after abbreviation expansion
    pub normalized: String,
    /// Lexed token stream, including the sentinel period
    pub tokens: Vec<Token>,
    /// The Taglish rendering
    pub translation: String,
}

/// Outcome of one segment of a batch payload.
#[derive(Debug)]
pub struct InstructionReport {
    /// The trimmed segment this outcome belongs to
    pub instruction: String,
    /// Its translation, or the first error the pipeline hit
    pub result: Result<String, SimplifyError>,
}

/// Translate a single English dosage instruction into Taglish.
///
/// Runs the whole pipeline and returns only the final rendering; the first
/// stage failure aborts the run.
pub fn simplify_instruction(input: &str) -> Result<String, SimplifyError> {
    inspect_instruction(input).map(|report| report.translation)
}

/// Translate a single instruction, keeping every intermediate stage.
pub fn inspect_instruction(input: &str) -> Result<SimplifyReport, SimplifyError> {
    if input.trim().is_empty() {
        return Err(SimplifyError::EmptyInput);
    }

    let normalized = normalize(input);
    let tokens = tokenize(&normalized);
    validate(&tokens)?;
    let translation = transduce(&tokens);

    log::debug!("simplified {input:?} -> {translation:?}");

    Ok(SimplifyReport {
        instruction: input.to_string(),
        normalized,
        tokens,
        translation,
    })
}

/// Split a multi-instruction payload into individual instructions.
///
/// Segments are separated by newlines or semicolons; surrounding whitespace
/// is trimmed and blank segments are dropped.
pub fn split_segments(text: &str) -> Vec<&str> {
    text.split(['\n', ';'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Translate each instruction of a multi-line payload independently.
///
/// Every segment gets its own [`InstructionReport`] in input order, so one
/// bad line does not hide the others. A payload with no non-empty segment is
/// rejected outright.
pub fn simplify_batch(text: &str) -> Result<Vec<InstructionReport>, SimplifyError> {
    let segments = split_segments(text);
    if segments.is_empty() {
        return Err(SimplifyError::EmptyInput);
    }

    Ok(segments
        .into_iter()
        .map(|segment| InstructionReport {
            instruction: segment.to_string(),
            result: simplify_instruction(segment),
        })
        .collect())
}

/// Translate a whole prescription, all lines or none.
///
/// Joins the per-instruction translations with newlines; the first failing
/// segment's error propagates and no partial output is produced.
pub fn simplify_prescription(text: &str) -> Result<String, SimplifyError> {
    let mut lines = Vec::new();
    for report in simplify_batch(text)? {
        lines.push(report.result?);
    }
    Ok(lines.join("\n"))
}
