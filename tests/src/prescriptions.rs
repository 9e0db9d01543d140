use medilingo::{simplify_batch, simplify_prescription, split_segments};
use medilingo_grammar::validator::SimplifyError;
use pretty_assertions::assert_eq;

#[test]
fn test_prescription_translates_line_by_line() {
    let payload =
        "take 1 tablet every 8 hours.\nuse 1 spray every 4 hours prn\napply patch once a day";
    let text = simplify_prescription(payload).unwrap();
    assert_eq!(
        text,
        "Uminom ng isang tableta bawat 8 oras.\n\
         Gamitin ng isang isprey bawat 4 oras kung kinakailangan.\n\
         Ipahid ang patch isang beses sa isang araw."
    );
}

#[test]
fn test_semicolons_separate_instructions() {
    let reports = simplify_batch("take 1 tablet daily.; swallow 1 pill hs").unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].instruction, "take 1 tablet daily.");
    assert_eq!(
        reports[0].result.as_deref(),
        Ok("Uminom ng isang tableta araw-araw.")
    );
    assert_eq!(reports[1].instruction, "swallow 1 pill hs");
    assert_eq!(
        reports[1].result.as_deref(),
        Ok("Lunukin ng isang tableta bago matulog.")
    );
}

#[test]
fn test_batch_reports_every_line_independently() {
    let reports = simplify_batch("take 1 tablet daily.\ntake 1 widget.\ntake 1.").unwrap();
    assert_eq!(reports.len(), 3);
    assert!(reports[0].result.is_ok());
    assert!(matches!(
        reports[1].result,
        Err(SimplifyError::UnrecognizedTerm { .. })
    ));
    assert!(matches!(
        reports[2].result,
        Err(SimplifyError::IncompleteInstruction { .. })
    ));
}

#[test]
fn test_prescription_returns_the_first_error() {
    let err = simplify_prescription("take 1 widget.\ntake 1 tablet daily.").unwrap_err();
    assert!(matches!(err, SimplifyError::UnrecognizedTerm { .. }));
}

#[test]
fn test_blank_payload_is_rejected() {
    assert_eq!(split_segments(" \n ; \n"), Vec::<&str>::new());
    assert!(matches!(
        simplify_batch("\n;\n"),
        Err(SimplifyError::EmptyInput)
    ));
    assert!(matches!(
        simplify_prescription("  "),
        Err(SimplifyError::EmptyInput)
    ));
}

#[test]
fn test_segments_are_trimmed() {
    let segments = split_segments("  take 1 tablet daily.  ;  apply patch at night  ");
    assert_eq!(
        segments,
        vec!["take 1 tablet daily.", "apply patch at night"]
    );
}
