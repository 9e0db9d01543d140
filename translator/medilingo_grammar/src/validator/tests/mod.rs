//! Tests for the validator module


use crate::validator::{transition, validate, GrammarState, SimplifyError};
use medilingo_lexer::{normalize, tokenize, Span, Token, TokenType};
use pretty_assertions::assert_eq;

fn lex(raw: &str) -> Vec<Token> {
    tokenize(&normalize(raw))
}

fn token(token_type: TokenType, lexeme: &str) -> Token {
    Token::new(token_type, lexeme, Span::default())
}

#[test]
fn test_accepts_full_instruction_shape() {
    assert_eq!(validate(&lex("take 1 tablet every 8 hours.")), Ok(()));
}

#[test]
fn test_accepts_instruction_without_frequency() {
    assert_eq!(validate(&lex("take 1 tablet.")), Ok(()));
}

#[test]
fn test_accepts_instruction_without_quantity() {
    assert_eq!(validate(&lex("apply patch once a day.")), Ok(()));
}

#[test]
fn test_accepts_redundant_as_needed() {
    assert_eq!(
        validate(&lex("take 1 tablet every 4 hours as needed.")),
        Ok(())
    );
}

#[test]
fn test_rejects_frequency_after_frequency() {
    let err = validate(&lex("take 1 tablet every 4 hours daily.")).unwrap_err();
    assert_eq!(
        err,
        SimplifyError::UnexpectedToken {
            state: GrammarState::AfterFrequency,
            found: TokenType::Frequency,
            span: err.span().unwrap(),
        }
    );
}

#[test]
fn test_rejects_instruction_cut_short_after_quantity() {
    let err = validate(&lex("take 1.")).unwrap_err();
    assert_eq!(
        err,
        SimplifyError::IncompleteInstruction {
            last: GrammarState::AfterQuantity,
        }
    );
}

#[test]
fn test_rejects_instruction_cut_short_after_route() {
    let err = validate(&lex("take.")).unwrap_err();
    assert_eq!(
        err,
        SimplifyError::IncompleteInstruction {
            last: GrammarState::AfterRoute,
        }
    );
}

#[test]
fn test_rejects_bare_sentinel_period() {
    let err = validate(&lex("   ")).unwrap_err();
    assert_eq!(
        err,
        SimplifyError::IncompleteInstruction {
            last: GrammarState::Start,
        }
    );
}

#[test]
fn test_rejects_unknown_term() {
    let err = validate(&lex("take 1 widget.")).unwrap_err();
    match err {
        SimplifyError::UnrecognizedTerm { ref term, .. } => assert_eq!(term, "widget."),
        other => panic!("expected UnrecognizedTerm, got {other:?}"),
    }
}

#[test]
fn test_rejects_missing_route() {
    let err = validate(&lex("1 tablet daily.")).unwrap_err();
    assert_eq!(
        err,
        SimplifyError::UnexpectedToken {
            state: GrammarState::Start,
            found: TokenType::Quantity,
            span: err.span().unwrap(),
        }
    );
}

#[test]
fn test_rejects_tokens_after_accept() {
    // The first period accepts; anything after it is out of grammar.
    let err = validate(&lex("take 1 tablet. daily")).unwrap_err();
    assert_eq!(
        err,
        SimplifyError::UnexpectedToken {
            state: GrammarState::Accept,
            found: TokenType::Frequency,
            span: err.span().unwrap(),
        }
    );
}

#[test]
fn test_rejects_empty_token_sequence() {
    assert_eq!(
        validate(&[]),
        Err(SimplifyError::IncompleteInstruction {
            last: GrammarState::Start,
        })
    );
}

#[test]
fn test_transition_table_edges() {
    let cases = [
        (GrammarState::Start, TokenType::Route, "take", GrammarState::AfterRoute),
        (GrammarState::AfterRoute, TokenType::Quantity, "1", GrammarState::AfterQuantity),
        (GrammarState::AfterRoute, TokenType::Unit, "patch", GrammarState::AfterUnit),
        (GrammarState::AfterQuantity, TokenType::Unit, "tablet", GrammarState::AfterUnit),
        (GrammarState::AfterUnit, TokenType::Frequency, "daily", GrammarState::AfterFrequency),
        (GrammarState::AfterUnit, TokenType::Period, ".", GrammarState::Accept),
        (GrammarState::AfterFrequency, TokenType::Period, ".", GrammarState::Accept),
    ];

    for (state, token_type, lexeme, expected) in cases {
        assert_eq!(
            transition(state, &token(token_type, lexeme)),
            Ok(expected),
            "{state:?} x {token_type:?}"
        );
    }
}

#[test]
fn test_as_needed_self_loop_requires_exact_phrase() {
    let as_needed = token(TokenType::Frequency, "as needed");
    assert_eq!(
        transition(GrammarState::AfterFrequency, &as_needed),
        Ok(GrammarState::AfterFrequency)
    );

    let daily = token(TokenType::Frequency, "daily");
    assert!(matches!(
        transition(GrammarState::AfterFrequency, &daily),
        Err(SimplifyError::UnexpectedToken {
            state: GrammarState::AfterFrequency,
            found: TokenType::Frequency,
            ..
        })
    ));
}

#[test]
fn test_invalid_token_fails_in_every_state() {
    let states = [
        GrammarState::Start,
        GrammarState::AfterRoute,
        GrammarState::AfterQuantity,
        GrammarState::AfterUnit,
        GrammarState::AfterFrequency,
        GrammarState::Accept,
    ];
    for state in states {
        let result = transition(state, &token(TokenType::Invalid, "blorp"));
        assert!(
            matches!(result, Err(SimplifyError::UnrecognizedTerm { ref term, .. }) if term == "blorp"),
            "{state:?} should reject INVALID, got {result:?}"
        );
    }
}
