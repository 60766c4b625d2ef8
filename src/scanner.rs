use std::fmt;

/// The only byte that can separate two enumerators.
pub const SEPARATOR: u8 = b',';

/// How `<` and `>` take part in nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleBrackets {
    /// Track `<`/`>` as brackets, except when doubled (`<<`, `>>`),
    /// which are read as shift operators.
    ///
    /// This is an approximation: a nested generic closing with `>>`
    /// (`Foo<Bar<int>>`) is read as a shift and leaves the list
    /// unbalanced.
    #[default]
    ShiftAware,
    /// Never track `<`/`>`. Comparisons stop tripping the scanner, but
    /// commas inside template arguments become separators.
    Ignore,
}

/// Knobs for the boundary scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    pub angle_brackets: AngleBrackets,
    /// Also track `[` and `]`. Off by default.
    pub square_brackets: bool,
}

/// Classifies a scanner error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// A `"` was opened and never closed.
    UnterminatedString,
    /// A bracket was still open at end of text.
    UnclosedBracket(char),
    /// A closing bracket with nothing open.
    UnexpectedCloser(char),
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "unterminated quoted string")
            }
            Self::UnclosedBracket(ch) => {
                write!(f, "unclosed '{ch}'")
            }
            Self::UnexpectedCloser(ch) => {
                write!(f, "unexpected closing '{ch}'")
            }
        }
    }
}

/// Error produced while looking for a boundary.
///
/// `offset` points at the offending byte: the opening quote or bracket
/// for unterminated constructs, the stray closer otherwise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub offset: usize,
}

/// Nesting and quoting state of one `next_boundary` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub depth: usize,
    pub in_quote: bool,
    pub last: Option<u8>,
    pub lookahead: Option<u8>,
    outermost: Option<(u8, usize)>,
    quote_start: usize,
}

impl ScanState {
    /// Whether a separator at the current position would be inert.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.depth != 0 || self.in_quote
    }

    fn feed(&mut self, ch: u8, pos: usize, options: ScanOptions) -> Result<(), ScanError> {
        if self.in_quote {
            if ch == b'"' && self.last != Some(b'\\') {
                self.in_quote = false;
            }
            return Ok(());
        }

        match ch {
            b'"' if self.last != Some(b'\\') => {
                self.in_quote = true;
                self.quote_start = pos;
            }
            b'(' | b'{' => self.open(ch, pos),
            b'[' if options.square_brackets => self.open(ch, pos),
            b'<' if self.is_angle_bracket(ch, options) => self.open(ch, pos),
            b')' | b'}' => self.close(ch, pos)?,
            b']' if options.square_brackets => self.close(ch, pos)?,
            b'>' if self.is_angle_bracket(ch, options) => self.close(ch, pos)?,
            _ => {}
        }
        Ok(())
    }

    /// `<<` and `>>` are shifts: the symbol is a bracket only when
    /// neither neighbour repeats it.
    fn is_angle_bracket(&self, ch: u8, options: ScanOptions) -> bool {
        options.angle_brackets == AngleBrackets::ShiftAware
            && self.last != Some(ch)
            && self.lookahead != Some(ch)
    }

    fn open(&mut self, ch: u8, pos: usize) {
        if self.depth == 0 {
            self.outermost = Some((ch, pos));
        }
        self.depth += 1;
    }

    fn close(&mut self, ch: u8, pos: usize) -> Result<(), ScanError> {
        if self.depth == 0 {
            return Err(ScanError {
                kind: ScanErrorKind::UnexpectedCloser(char::from(ch)),
                offset: pos,
            });
        }
        self.depth -= 1;
        if self.depth == 0 {
            self.outermost = None;
        }
        Ok(())
    }

    fn finish(&self) -> Result<(), ScanError> {
        if self.in_quote {
            return Err(ScanError {
                kind: ScanErrorKind::UnterminatedString,
                offset: self.quote_start,
            });
        }
        if let Some((ch, pos)) = self.outermost {
            return Err(ScanError {
                kind: ScanErrorKind::UnclosedBracket(char::from(ch)),
                offset: pos,
            });
        }
        Ok(())
    }
}

/// Find the next top-level separator at or after `start`.
///
/// Returns the separator's offset, or `text.len()` when the rest of
/// the text holds no top-level separator.
///
/// # Errors
///
/// Returns `ScanError` when a quote or bracket is left open at end of
/// text, or when a closing bracket has no opener.
pub fn next_boundary(text: &str, start: usize, options: &ScanOptions) -> Result<usize, ScanError> {
    let bytes = text.as_bytes();
    let mut state = ScanState::default();
    let mut pos = start.min(bytes.len());

    while pos < bytes.len() {
        let ch = bytes[pos];
        if ch == SEPARATOR && !state.is_nested() {
            tracing::trace!(offset = pos, "top-level separator");
            return Ok(pos);
        }
        state.lookahead = bytes.get(pos + 1).copied();
        state.feed(ch, pos, *options)?;
        state.last = Some(ch);
        pos += 1;
    }

    state.finish()?;
    Ok(bytes.len())
}

/// Count enumerators: top-level separators plus one.
///
/// # Errors
///
/// Same as [`next_boundary`].
pub fn count_members(text: &str, options: &ScanOptions) -> Result<usize, ScanError> {
    let mut count = 1;
    let mut boundary = next_boundary(text, 0, options)?;
    while boundary < text.len() {
        count += 1;
        boundary = next_boundary(text, boundary + 1, options)?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary(text: &str, start: usize) -> usize {
        next_boundary(text, start, &ScanOptions::default()).expect("should scan")
    }

    #[test]
    fn plain_list() {
        assert_eq!(boundary("A, B, C", 0), 1);
        assert_eq!(boundary("A, B, C", 2), 4);
        assert_eq!(boundary("A, B, C", 5), 7);
    }

    #[test]
    fn nested_commas_are_inert() {
        assert_eq!(boundary("f(1, {2, 3}), B", 0), 12);
    }

    #[test]
    fn quoted_commas_are_inert() {
        assert_eq!(boundary(r#""a,b", c"#, 0), 5);
    }

    #[test]
    fn escaped_quote_stays_open() {
        assert_eq!(boundary(r#""x\"y",z"#, 0), 6);
    }

    #[test]
    fn brackets_inside_quotes_are_inert() {
        assert_eq!(boundary(r#"f(")h(", 1), B"#, 0), 11);
    }

    #[test]
    fn shift_is_not_a_bracket() {
        assert_eq!(boundary("A = 4 >> 2, B", 0), 10);
        assert_eq!(boundary("A = 1 << 3, B", 0), 10);
    }

    #[test]
    fn template_brackets_nest() {
        assert_eq!(boundary("A = f<int, 2>(), B", 0), 15);
    }

    #[test]
    fn start_past_end_is_end() {
        assert_eq!(boundary("A", 5), 1);
    }

    #[test]
    fn unterminated_quote() {
        let err = next_boundary("A = \"oops, B", 0, &ScanOptions::default()).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn unclosed_bracket_reports_outermost() {
        let err = next_boundary("A = f((1), B", 0, &ScanOptions::default()).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::UnclosedBracket('('));
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn stray_closer() {
        let err = next_boundary("A = 1), B", 0, &ScanOptions::default()).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::UnexpectedCloser(')'));
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn square_brackets_opt_in() {
        let text = "A = t[1, 2], B";
        assert_eq!(boundary(text, 0), 7);
        let options = ScanOptions {
            square_brackets: true,
            ..ScanOptions::default()
        };
        assert_eq!(next_boundary(text, 0, &options).expect("should scan"), 11);
    }

    #[test]
    fn counts_members() {
        let options = ScanOptions::default();
        assert_eq!(count_members("", &options).expect("count"), 1);
        assert_eq!(count_members("A", &options).expect("count"), 1);
        assert_eq!(count_members("A, B = f(1, 2), C", &options).expect("count"), 3);
    }
}
