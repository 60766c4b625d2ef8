use crate::name::{NameRule, Strip};
use crate::scanner::{AngleBrackets, ScanOptions};

/// Settings shared by every stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub scan: ScanOptions,
    pub names: NameRule,
}

impl Options {
    /// Default options: shift-aware angle brackets, no square brackets,
    /// raw-echo names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how `<` and `>` are treated.
    #[must_use]
    pub const fn angle_brackets(mut self, mode: AngleBrackets) -> Self {
        self.scan.angle_brackets = mode;
        self
    }

    /// Track `[` and `]` as brackets.
    #[must_use]
    pub const fn square_brackets(mut self, enabled: bool) -> Self {
        self.scan.square_brackets = enabled;
        self
    }

    /// Set the member name rule.
    #[must_use]
    pub const fn names(mut self, rule: NameRule) -> Self {
        self.names = rule;
        self
    }

    /// Shorthand for `names(NameRule::Stripped(strip))`.
    #[must_use]
    pub const fn strip_names(self, strip: Strip) -> Self {
        self.names(NameRule::Stripped(strip))
    }
}
