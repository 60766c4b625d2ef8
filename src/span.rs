/// Byte region of one enumerator inside the declaration text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberSpan {
    pub offset: usize,
    pub len: usize,
}

impl MemberSpan {
    #[must_use]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Offset one past the last byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Borrow the spanned text out of `text`.
    ///
    /// Spans produced by the splitter always start and end at ASCII
    /// separators or text boundaries, so this never splits a character.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.offset..self.end()]
    }
}
