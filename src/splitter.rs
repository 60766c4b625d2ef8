use std::fmt;

use crate::scanner::{self, ScanError, ScanErrorKind, ScanOptions};
use crate::span::MemberSpan;

/// Classifies a splitter error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitErrorKind {
    /// Brackets or quotes do not balance.
    Malformed(ScanErrorKind),
    /// The requested member count disagrees with the text.
    CountMismatch { expected: usize, found: usize },
}

impl fmt::Display for SplitErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(kind) => {
                write!(f, "malformed enumerator list: {kind}")
            }
            Self::CountMismatch { expected, found } => {
                write!(
                    f,
                    "expected {expected} enumerator(s), \
                     found {found}"
                )
            }
        }
    }
}

/// Error produced while splitting an enumerator list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct SplitError {
    pub kind: SplitErrorKind,
    pub offset: usize,
}

impl From<ScanError> for SplitError {
    fn from(err: ScanError) -> Self {
        Self {
            kind: SplitErrorKind::Malformed(err.kind),
            offset: err.offset,
        }
    }
}

/// Split `text` into exactly `count` member spans.
///
/// Separators are excluded from every span; surrounding whitespace is
/// kept.
///
/// # Errors
///
/// Returns `SplitError` when the text is malformed or holds a
/// different number of top-level members than `count`.
pub fn split(
    text: &str,
    count: usize,
    options: &ScanOptions,
) -> Result<Vec<MemberSpan>, SplitError> {
    Splitter::new(text, options).split(count)
}

/// Split `text` at every top-level separator.
///
/// Same spans as [`split`] with the count taken from the text itself.
///
/// # Errors
///
/// Returns `SplitError` when the text is malformed.
pub fn split_all(text: &str, options: &ScanOptions) -> Result<Vec<MemberSpan>, SplitError> {
    Splitter::new(text, options).split_all()
}

struct Splitter<'a> {
    text: &'a str,
    options: &'a ScanOptions,
}

impl<'a> Splitter<'a> {
    const fn new(text: &'a str, options: &'a ScanOptions) -> Self {
        Self { text, options }
    }

    fn split(self, count: usize) -> Result<Vec<MemberSpan>, SplitError> {
        if count == 0 {
            return Err(self.mismatch(count, 0));
        }

        // a text never holds more than `len + 1` members
        let mut spans = Vec::with_capacity(count.min(self.text.len() + 1));
        let mut start = 0;

        loop {
            let end = scanner::next_boundary(self.text, start, self.options)?;
            spans.push(MemberSpan::new(start, end - start));

            if spans.len() == count {
                if end < self.text.len() {
                    let found = scanner::count_members(self.text, self.options)?;
                    return Err(self.mismatch(count, found));
                }
                break;
            }
            if end == self.text.len() {
                return Err(self.mismatch(count, spans.len()));
            }

            // skip the separator itself
            start = end + 1;
        }

        tracing::trace!(count, "split enumerator list");
        Ok(spans)
    }

    fn split_all(self) -> Result<Vec<MemberSpan>, SplitError> {
        let mut spans = Vec::new();
        let mut start = 0;

        loop {
            let end = scanner::next_boundary(self.text, start, self.options)?;
            spans.push(MemberSpan::new(start, end - start));
            if end == self.text.len() {
                break;
            }
            start = end + 1;
        }

        tracing::trace!(count = spans.len(), "split enumerator list");
        Ok(spans)
    }

    const fn mismatch(&self, expected: usize, found: usize) -> SplitError {
        SplitError {
            kind: SplitErrorKind::CountMismatch { expected, found },
            offset: self.text.len(),
        }
    }
}
