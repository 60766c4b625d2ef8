//! Splitter behaviour and member count checks.

mod common;

use common::split_texts;
use enum_meta::{ScanErrorKind, ScanOptions, SplitErrorKind, split};

#[test]
fn split_hahas() {
    let parts = split_texts(common::HAHAS, 4);
    assert_eq!(
        parts,
        vec![
            "Hi",
            r#" Ho= getDivFourOfLast(1, {(2, ")h(),,\"ej", 1)}, 4 >> 2)"#,
            " Hu =     4",
            " He",
        ]
    );
}

#[test]
fn split_nested_call_is_one_member() {
    let parts = split_texts(r#"Ho= f(1, "a,b")"#, 1);
    assert_eq!(parts, vec![r#"Ho= f(1, "a,b")"#]);
}

#[test]
fn split_escaped_quote() {
    let parts = split_texts(r#""x\"y",z"#, 2);
    assert_eq!(parts, vec![r#""x\"y""#, "z"]);
}

#[test]
fn split_preserves_multiline_whitespace() {
    let text = " One, Two\n    =\n    0b11010101, Three\n    ";
    let parts = split_texts(text, 3);
    assert_eq!(parts, vec![" One", " Two\n    =\n    0b11010101", " Three\n    "]);
}

#[test]
fn split_rejoin_reconstructs_text() {
    let text = "A,  B = 2 ,C=3,   D";
    let parts = split_texts(text, 4);
    assert_eq!(parts.join(","), text);
}

#[test]
fn split_empty_text_is_one_empty_member() {
    assert_eq!(split_texts("", 1), vec![""]);
}

#[test]
fn split_spans_cover_text_without_separators() {
    let text = "A, B, C";
    let spans = split(text, 3, &ScanOptions::default()).expect("split");
    let covered: usize = spans.iter().map(|s| s.len).sum();
    assert_eq!(covered + 2, text.len());
    assert_eq!(spans[2].end(), text.len());
}

// -----------------------------------------------------------
// Count mismatches and malformed input.
// -----------------------------------------------------------

#[test]
fn split_error_fewer_members_than_requested() {
    let err = split("A, B", 5, &ScanOptions::default()).unwrap_err();
    assert_eq!(
        err.kind,
        SplitErrorKind::CountMismatch {
            expected: 5,
            found: 2
        }
    );
}

#[test]
fn split_error_more_members_than_requested() {
    let err = split(common::HAHAS, 3, &ScanOptions::default()).unwrap_err();
    assert_eq!(
        err.kind,
        SplitErrorKind::CountMismatch {
            expected: 3,
            found: 4
        }
    );
}

#[test]
fn split_error_malformed() {
    let err = split(r#"A, B = "x"#, 2, &ScanOptions::default()).unwrap_err();
    assert_eq!(
        err.kind,
        SplitErrorKind::Malformed(ScanErrorKind::UnterminatedString)
    );
    assert_eq!(err.offset, 7);
}

#[test]
fn split_error_display() {
    let err = split("A, B", 1, &ScanOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected 1 enumerator(s), found 2 at offset 4"
    );
}
