use medilingo::simplify_instruction;
use medilingo_grammar::validator::{render_snippet, SimplifyError};
use medilingo_lexer::normalize;
use pretty_assertions::assert_eq;

#[test]
fn test_user_facing_messages_match_the_product() {
    let cases = [
        (
            "take 1 widget.",
            "Unknown term: \"widget.\". Please use simpler terms.",
        ),
        (
            "take 1.",
            "Incomplete instruction. The instruction seems to be missing parts. Last valid part was a QUANTITY.",
        ),
        (
            "take.",
            "Incomplete instruction. The instruction seems to be missing parts. Last valid part was a ROUTE.",
        ),
        (
            "take daily.",
            "Invalid sequence. After a route, expected quantity (e.g., '1', 'one') or unit (e.g., 'tablet'), but got frequency.",
        ),
        (
            "take 1 daily.",
            "Invalid sequence. After a quantity, expected a unit (e.g., 'tablet'), but got frequency.",
        ),
        (
            "take 1 tablet 2.",
            "Invalid sequence. After a unit, expected frequency (e.g., 'daily') or end of instruction, but got quantity.",
        ),
        (
            "take 1 tablet daily twice a day.",
            "Invalid sequence. After frequency, expected end of instruction, but got frequency.",
        ),
        (
            "daily.",
            "Invalid instruction. Expected a route (e.g., 'take', 'apply') to start.",
        ),
        ("take 1 tablet. daily", "Invalid instruction sequence."),
    ];
    for (instruction, message) in cases {
        let err = simplify_instruction(instruction).unwrap_err();
        assert_eq!(err.to_string(), message, "for {instruction:?}");
    }
}

#[test]
fn test_by_mouth_expansions_are_not_recognized() {
    // "po" expands to "by mouth", which no lexing rule claims.
    let err = simplify_instruction("take 1 tablet po bid.").unwrap_err();
    match err {
        SimplifyError::UnrecognizedTerm { ref term, .. } => assert_eq!(term, "by"),
        other => panic!("expected unrecognized term, got {other:?}"),
    }
}

#[test]
fn test_snippet_underlines_the_offending_word() {
    let instruction = "take 1 widget.";
    let err = simplify_instruction(instruction).unwrap_err();
    let snippet = render_snippet(&err, &normalize(instruction));
    assert_eq!(
        snippet,
        "error: Unknown term: \"widget.\". Please use simpler terms.\n --> line 1, col 8\n1 | take 1 widget.\n  |        ~~~~~~~\n"
    );
}

#[test]
fn test_snippet_points_past_the_end_for_incomplete_input() {
    let err = simplify_instruction("take 1.").unwrap_err();
    let snippet = render_snippet(&err, &normalize("take 1."));
    assert_eq!(
        snippet,
        "error: Incomplete instruction. The instruction seems to be missing parts. Last valid part was a QUANTITY.\n --> line 1, col 8\n1 | take 1.\n  |        ^\n"
    );
}
