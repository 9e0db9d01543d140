//! MediLingo lexical analysis module
//!
//! This module provides the first two pipeline stages for dosage
//! instructions: normalization of raw text (case folding, abbreviation
//! expansion, punctuation repair) and tokenization of the normalized text
//! into a stream of typed tokens for the grammar validator.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod normalizer;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{tokenize, Lexer};
pub use normalizer::{normalize, ABBREVIATIONS};
pub use token::{Span, Token, TokenType};
