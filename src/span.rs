use std::ops::Range;

/// Byte range of a lexeme in the source, plus the line it was recognized on.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Span {
    pub range: Range<usize>,
    pub line: usize,
}

impl Span {
    pub const fn new(range: Range<usize>, line: usize) -> Self {
        Self { range, line }
    }

    /// Empty span sitting at `offset`.
    pub const fn point(offset: usize, line: usize) -> Self {
        Self {
            range: offset..offset,
            line,
        }
    }
}
