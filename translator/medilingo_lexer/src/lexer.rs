//! Ordered-pattern lexer for normalized dosage instructions.
//!
//! Rules are tried strictly top to bottom against the unconsumed suffix and
//! the first rule to match wins. Table order, not match length, resolves
//! every overlap: route verbs are claimed before anything else, and number
//! words are claimed as quantities before the unit rule can see them.

use lazy_static::lazy_static;
use regex::Regex;

use crate::token::{Span, Token, TokenType};

struct TokenRule {
    token_type: TokenType,
    pattern: Regex,
}

fn rule(token_type: TokenType, pattern: &str) -> TokenRule {
    TokenRule {
        token_type,
        pattern: Regex::new(pattern).expect("token pattern"),
    }
}

lazy_static! {
    static ref TOKEN_RULES: Vec<TokenRule> = vec![
        rule(
            TokenType::Route,
            r"(?i)^(take|apply|consume|administer|use|insert|swallow|inhale)\b",
        ),
        rule(
            TokenType::Quantity,
            r"(?i)^(a|an|one|two|three|four|five|six|seven|eight|nine|ten|half|\d+(\.\d+)?)\b",
        ),
        rule(
            TokenType::Unit,
            r"(?i)^(tablet|capsule|pill|ml|milliliter|tablespoon|teaspoon|drop|spray|puff|application|lozenge|patch|sachet|unit|mcg|mg)s?\b",
        ),
        rule(
            TokenType::Frequency,
            r"(?i)^(every\s\d+\s(hours?|days?|weeks?|months?)|daily|once a day|twice a day|three times a day|four times a day|as needed|before meals|after meals|at bedtime|immediately|in the morning|at night)\b",
        ),
        rule(TokenType::Period, r"^\."),
    ];
}

/// Streaming lexer over a normalized dosage instruction.
///
/// Yields one [`Token`] per matched rule. Unrecognized text is not an
/// error at this stage: the next whitespace-delimited word comes out as a
/// [`TokenType::Invalid`] token and lexing continues after it.
pub struct Lexer<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over normalized instruction text.
    ///
    /// The rule patterns assume the canonical form produced by
    /// [`crate::normalize`]; feed raw user input through that first.
    pub fn new(source: &'a str) -> Self {
        Lexer { source, cursor: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.cursor..];
        let trimmed = rest.trim_start();
        self.cursor += rest.len() - trimmed.len();
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.skip_whitespace();
        if self.cursor >= self.source.len() {
            return None;
        }
        let rest = &self.source[self.cursor..];

        for rule in TOKEN_RULES.iter() {
            if let Some(found) = rule.pattern.find(rest) {
                let span = Span::new(self.cursor, self.cursor + found.end());
                self.cursor = span.end;
                return Some(Token::new(rule.token_type, found.as_str(), span));
            }
        }

        // No rule claims this prefix. Emit the next whitespace-delimited
        // word as INVALID so the validator can name it in its diagnostic.
        let word = rest.split_whitespace().next().unwrap_or(rest);
        let span = Span::new(self.cursor, self.cursor + word.len());
        self.cursor = span.end;
        Some(Token::new(TokenType::Invalid, word, span))
    }
}

/// Tokenizes a whole normalized instruction in one call.
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    log::debug!("lexed {} token(s) from {:?}", tokens.len(), source);
    tokens
}
