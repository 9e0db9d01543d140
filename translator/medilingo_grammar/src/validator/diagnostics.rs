use medilingo_lexer::{Span, TokenType};
use thiserror::Error;

use super::GrammarState;

/// Failure surfaced by the instruction pipeline.
///
/// Every variant carries the data needed to rebuild its message;
/// `Display` produces exactly the sentence shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimplifyError {
    /// The raw input was empty; nothing was processed.
    #[error("Input cannot be empty.")]
    EmptyInput,

    /// The lexer produced an INVALID token; the message names the term.
    #[error("Unknown term: \"{term}\". Please use simpler terms.")]
    UnrecognizedTerm {
        /// The unrecognized word, exactly as lexed
        term: String,
        /// Where the word sits in the normalized instruction
        span: Span,
    },

    /// A token category not permitted in the current DFA state.
    #[error("{}", .state.describe_unexpected(.found))]
    UnexpectedToken {
        /// State the DFA was in when the token arrived
        state: GrammarState,
        /// Category of the offending token
        found: TokenType,
        /// Where the offending token sits in the normalized instruction
        span: Span,
    },

    /// The instruction ended before the DFA reached its accepting state.
    #[error("Incomplete instruction. The instruction seems to be missing parts. Last valid part was a {}.", .last.slot_name())]
    IncompleteInstruction {
        /// Last state the DFA reached, i.e. the last slot successfully filled
        last: GrammarState,
    },
}

impl SimplifyError {
    /// Span of the offending token, when the failure is anchored to one.
    pub fn span(&self) -> Option<Span> {
        match self {
            SimplifyError::UnrecognizedTerm { span, .. }
            | SimplifyError::UnexpectedToken { span, .. } => Some(*span),
            SimplifyError::EmptyInput | SimplifyError::IncompleteInstruction { .. } => None,
        }
    }
}

/// Renders a caret diagnostic for an error against the normalized
/// instruction it came from.
///
/// Unanchored failures (empty input, incomplete instruction) point one
/// column past the end of the text. Instructions are a single line, so the
/// line number is fixed.
pub fn render_snippet(error: &SimplifyError, source: &str) -> String {
    let span = error
        .span()
        .unwrap_or_else(|| Span::new(source.len(), source.len()));
    let col = source
        .get(..span.start)
        .map_or(1, |prefix| prefix.chars().count() + 1);
    let width = source
        .get(span.start..span.end)
        .map_or(span.len(), |lexeme| lexeme.chars().count());
    let underline = if width <= 1 {
        "^".to_string()
    } else {
        "~".repeat(width)
    };

    format!(
        "error: {error}\n --> line 1, col {col}\n1 | {source}\n  | {}{underline}\n",
        " ".repeat(col.saturating_sub(1))
    )
}
