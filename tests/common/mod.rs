#![allow(dead_code)]

use enum_meta::{EnumMetadata, ScanOptions, split};

/// Enumerator list with nested calls, braces, quoted separators and a
/// shift inside one initializer.
pub const HAHAS: &str =
    r#"Hi, Ho= getDivFourOfLast(1, {(2, ")h(),,\"ej", 1)}, 4 >> 2), Hu =     4, He"#;

/// Split with default options and return the member texts.
pub fn split_texts(text: &str, count: usize) -> Vec<String> {
    let spans = split(text, count, &ScanOptions::default())
        .unwrap_or_else(|e| panic!("split failed: {e}\n--- text ---\n{text}"));
    spans.iter().map(|s| s.slice(text).to_string()).collect()
}

pub fn raw_members(meta: &EnumMetadata) -> Vec<&str> {
    meta.iter().map(|m| m.raw.as_str()).collect()
}

pub fn values(meta: &EnumMetadata) -> Vec<i128> {
    meta.values().collect()
}
