// DFA-based grammar validation for dosage-instruction token sequences.
// The accepted shape is ROUTE QUANTITY? UNIT FREQUENCY? PERIOD, with a
// self-loop on FREQUENCY for a redundant "as needed".

pub mod diagnostics;

#[cfg(test)]
mod tests;

use medilingo_lexer::{Token, TokenType};

pub use diagnostics::{render_snippet, SimplifyError};

/// DFA states, one per grammatical slot already filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarState {
    /// No tokens consumed yet
    Start,
    /// A route verb has been consumed
    AfterRoute,
    /// A dose quantity has been consumed
    AfterQuantity,
    /// A dose unit has been consumed
    AfterUnit,
    /// A frequency phrase has been consumed
    AfterFrequency,
    /// The terminal period has been consumed; the sequence is accepted
    Accept,
}

impl GrammarState {
    /// Name of the grammatical slot this state represents, as it appears in
    /// incomplete-instruction diagnostics.
    pub fn slot_name(&self) -> &'static str {
        match self {
            GrammarState::Start => "start",
            GrammarState::AfterRoute => "ROUTE",
            GrammarState::AfterQuantity => "QUANTITY",
            GrammarState::AfterUnit => "UNIT",
            GrammarState::AfterFrequency => "FREQUENCY",
            GrammarState::Accept => "ACCEPT",
        }
    }

    pub(crate) fn describe_unexpected(&self, found: &TokenType) -> String {
        match self {
            GrammarState::Start => {
                "Invalid instruction. Expected a route (e.g., 'take', 'apply') to start."
                    .to_string()
            }
            GrammarState::AfterRoute => format!(
                "Invalid sequence. After a route, expected quantity (e.g., '1', 'one') or unit (e.g., 'tablet'), but got {found}."
            ),
            GrammarState::AfterQuantity => format!(
                "Invalid sequence. After a quantity, expected a unit (e.g., 'tablet'), but got {found}."
            ),
            GrammarState::AfterUnit => format!(
                "Invalid sequence. After a unit, expected frequency (e.g., 'daily') or end of instruction, but got {found}."
            ),
            GrammarState::AfterFrequency => format!(
                "Invalid sequence. After frequency, expected end of instruction, but got {found}."
            ),
            GrammarState::Accept => "Invalid instruction sequence.".to_string(),
        }
    }
}

/// Advances the DFA by one token.
///
/// INVALID tokens fail in every state. A PERIOD in a state with no period
/// transition marks an instruction cut short and reports the last filled
/// slot instead of a generic category mismatch; every other undefined
/// (state, token) pair is an unexpected-token failure.
pub fn transition(state: GrammarState, token: &Token) -> Result<GrammarState, SimplifyError> {
    if token.token_type == TokenType::Invalid {
        return Err(SimplifyError::UnrecognizedTerm {
            term: token.lexeme.clone(),
            span: token.span,
        });
    }
    match (state, token.token_type) {
        (GrammarState::Start, TokenType::Route) => Ok(GrammarState::AfterRoute),
        (GrammarState::AfterRoute, TokenType::Quantity) => Ok(GrammarState::AfterQuantity),
        (GrammarState::AfterRoute, TokenType::Unit) => Ok(GrammarState::AfterUnit),
        (GrammarState::AfterQuantity, TokenType::Unit) => Ok(GrammarState::AfterUnit),
        (GrammarState::AfterUnit, TokenType::Frequency) => Ok(GrammarState::AfterFrequency),
        (GrammarState::AfterUnit, TokenType::Period) => Ok(GrammarState::Accept),
        (GrammarState::AfterFrequency, TokenType::Frequency) if token.lexeme == "as needed" => {
            Ok(GrammarState::AfterFrequency)
        }
        (GrammarState::AfterFrequency, TokenType::Period) => Ok(GrammarState::Accept),
        (state, TokenType::Period) if state != GrammarState::Accept => {
            Err(SimplifyError::IncompleteInstruction { last: state })
        }
        (state, found) => Err(SimplifyError::UnexpectedToken {
            state,
            found,
            span: token.span,
        }),
    }
}

/// Runs the DFA over a whole token sequence.
///
/// Returns `Ok(())` only when the final state is [`GrammarState::Accept`];
/// the first offending token (or the missing remainder) is reported
/// through [`SimplifyError`].
pub fn validate(tokens: &[Token]) -> Result<(), SimplifyError> {
    let mut state = GrammarState::Start;
    for token in tokens {
        let next = transition(state, token)?;
        log::trace!("{state:?} --{token}--> {next:?}");
        state = next;
    }
    if state != GrammarState::Accept {
        return Err(SimplifyError::IncompleteInstruction { last: state });
    }
    log::debug!("validated {} token(s)", tokens.len());
    Ok(())
}
