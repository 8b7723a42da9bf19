// Pathological inputs must never panic and must keep the result invariants:
// severity in 0..=100, severity zero exactly when no violations, blocked
// implies violations, primary fields mirror the first violation.
use chaperone::{moderate, ModerationResult};

fn assert_invariants(text: &str) -> ModerationResult {
    let result = moderate(text);
    assert!(result.severity_score <= 100, "severity out of range for {:?}", text);
    assert_eq!(
        result.severity_score == 0,
        result.all_violations.is_empty(),
        "severity/violations mismatch for {:?}",
        text
    );
    if result.is_blocked {
        assert!(!result.all_violations.is_empty(), "blocked without violations for {:?}", text);
    }
    match result.all_violations.first() {
        Some(first) => {
            assert_eq!(result.violation_type, Some(first.kind));
            assert_eq!(result.detected_pattern.as_deref(), Some(first.matched_text.as_str()));
        }
        None => {
            assert_eq!(result.violation_type, None);
            assert_eq!(result.detected_pattern, None);
        }
    }
    result
}

#[test]
fn test_oversize_message_is_truncated() {
    let mut text = "a".repeat(12_000);
    text.push_str(" call me 9876543210");
    let result = assert_invariants(&text);
    assert_eq!(result.original_text.chars().count(), 10_000);
    // the number sits beyond the cap and is never seen
    assert!(!result.is_blocked);
}

#[test]
fn test_truncation_respects_multibyte_boundaries() {
    let text = "九".repeat(11_000);
    let result = assert_invariants(&text);
    assert_eq!(result.original_text.chars().count(), 10_000);
}

#[test]
fn test_huge_digit_runs() {
    assert_invariants(&"9".repeat(5_000));
    assert_invariants(&"12345 ".repeat(500));
}

#[test]
fn test_unicode_soup() {
    for text in &[
        "\u{202e}0123456789\u{202c}",
        "🙂🙂🙂🙂🙂🙂🙂🙂",
        "ة في شارع 123 مبنى",
        "電話番号は九八七六五四三二一〇です",
        "\u{200b}\u{200c}\u{200d}\u{2060}\u{feff}",
        "ᚠᚢᚦᚨᚱᚲ 98765 ᚠᚢᚦ",
    ] {
        assert_invariants(text);
    }
}

#[test]
fn test_regex_hostile_shapes() {
    for text in &[
        "((((((((((((((((((((",
        "a@a@a@a@a@a@a@a@a@a@",
        "dot dot dot dot dot dot dot dot",
        "one-two-three-four-five-six-seven-eight-nine-zero",
        "@@@@@#####$$$$$%%%%%",
        "9a9a9a9a9a9a9a9a9a9a9a9a9a9a9a9a",
    ] {
        assert_invariants(text);
    }
}

#[test]
fn test_every_corpus_entry_upholds_invariants() {
    for text in &[
        "",
        "   ",
        "call me on 98 76 54 32 10",
        "pay 9876543210@paytm",
        "wa.me/1234567890",
        "email me at john [at] gmail [dot] com",
        "My appointment is on 2025-01-15 at 14:30",
        "my ssn is 123-45-6789",
        "meet.google.com/abc-defg-hij",
        "j o h n a t g m a i l",
    ] {
        assert_invariants(text);
    }
}
