//! Plain-text rendering of enumeration metadata.
//!
//! One header line with the declaration text, then one tab-separated
//! `index value name` line per member. Whitespace runs inside names
//! are collapsed so multi-line members stay on one line.

use std::fmt::Write as _;

use crate::meta::{EnumMetadata, MemberRecord};

/// Format `meta` as a member table.
#[must_use]
pub fn format(meta: &EnumMetadata) -> String {
    let mut out = String::new();
    out.push_str("declared: ");
    out.push_str(&collapse_whitespace(meta.text()));
    out.push('\n');

    for member in meta {
        format_member(&mut out, member);
    }

    out
}

fn format_member(out: &mut String, member: &MemberRecord) {
    let _ = writeln!(
        out,
        "\t{}\t{}\t{}",
        member.index,
        member.value,
        collapse_whitespace(&member.name)
    );
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
