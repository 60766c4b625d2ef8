//! Member name extraction.
//!
//! Two behaviors are kept apart on purpose: [`raw_echo`] hands the
//! member text back untouched, [`stripped_identifier`] cuts it down.
//! How far to cut is the caller's choice, see [`Strip`].

/// How much of a member's raw text to strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    /// Trim surrounding whitespace only; `Hu = 4` stays `Hu = 4`.
    Whitespace,
    /// Trim, drop separator residue and the `= <expression>` suffix,
    /// keeping the leading identifier; ` Hu = 4` becomes `Hu`.
    Initializer,
}

/// Name rule applied to every member during assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameRule {
    /// Name equals the raw member text.
    #[default]
    RawEcho,
    /// Name is the stripped member text.
    Stripped(Strip),
}

impl NameRule {
    /// Derive a name from `raw` under this rule.
    #[must_use]
    pub fn apply(self, raw: &str) -> &str {
        match self {
            Self::RawEcho => raw_echo(raw),
            Self::Stripped(strip) => stripped_identifier(raw, strip),
        }
    }
}

/// Return the member text unchanged.
#[must_use]
pub const fn raw_echo(raw: &str) -> &str {
    raw
}

/// Strip the member text down according to `strip`.
///
/// With [`Strip::Initializer`] the result is empty when the text does
/// not start with an identifier.
#[must_use]
pub fn stripped_identifier(raw: &str, strip: Strip) -> &str {
    match strip {
        Strip::Whitespace => raw.trim(),
        Strip::Initializer => leading_identifier(raw),
    }
}

fn leading_identifier(raw: &str) -> &str {
    let rest = raw.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Expression text after the first `=`, trimmed.
///
/// A member name cannot contain `=`, so the first one always starts
/// the initializer.
#[must_use]
pub fn initializer(raw: &str) -> Option<&str> {
    raw.split_once('=').map(|(_, expr)| expr.trim())
}
