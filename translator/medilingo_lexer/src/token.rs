//! Token types for dosage-instruction lexing.
//!
//! A token pairs the grammatical category the lexer assigned with the exact
//! slice of normalized text it matched, plus where in the input it sits.

use std::fmt;

/// Grammatical category of a lexed word or phrase.
///
/// The lexer only ever produces these six categories; anything the rule
/// table cannot claim is carried through as [`TokenType::Invalid`] so the
/// validator can report the offending word instead of dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TokenType {
    /// Verb that opens an instruction ("take", "apply", "inhale", ...)
    Route,
    /// Dose amount: a number word, digits, "half", or an article
    Quantity,
    /// Dose form ("tablet", "ml", "spray", ...), singular or plural
    Unit,
    /// Timing phrase ("daily", "every 8 hours", "as needed", ...)
    Frequency,
    /// The terminal `.` that closes an instruction
    Period,
    /// A word no lexing rule recognizes
    Invalid,
}

impl TokenType {
    /// Lowercase category name used in user-facing diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            TokenType::Route => "route",
            TokenType::Quantity => "quantity",
            TokenType::Unit => "unit",
            TokenType::Frequency => "frequency",
            TokenType::Period => "period",
            TokenType::Invalid => "invalid",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())
    }
}

/// Byte range of a token within the normalized instruction.
///
/// Spans index the *normalized* text, not the raw user input; diagnostics
/// that underline a token render the normalized line alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Byte offset of the first character of the lexeme
    pub start: usize,
    /// Byte offset one past the last character of the lexeme
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length of the spanned text in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A single classified unit of instruction text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Category the rule table assigned
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub token_type: TokenType,
    /// Exact matched text, as it appears in the normalized instruction
    pub lexeme: String,
    /// Position of the lexeme in the normalized instruction
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, span: Span) -> Self {
        Token {
            token_type,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.token_type, self.lexeme, self.span)
    }
}
