//! Source locations attached to tree nodes.
//!
//! Inference never reads source text. Spans only travel from the node a
//! rule was applied to into the type error it reports, so a front end can
//! point at the offending expression. Trees built by hand carry
//! [`Span::DUMMY`].
//!
//! ```
//! use tylam_syntax::span::Span;
//!
//! let pattern = Span::new(0, 3, 1, 1, 1, 4);
//! let body = Span::new(7, 12, 1, 8, 1, 13);
//!
//! let case = Span::merge(pattern, body);
//! assert_eq!((case.start, case.end), (0, 12));
//! assert_eq!(case.to_string(), "1:1");
//! ```

use std::fmt;

/// Byte range plus the line/column of both ends (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first byte
    pub start: usize,
    /// Byte offset one past the last byte
    pub end: usize,
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Span {
    /// Location of nodes that have no source text. Line 0 never occurs in
    /// real spans.
    pub const DUMMY: Span = Span::new(0, 0, 0, 0, 0, 0);

    #[must_use]
    pub const fn new(
        start: usize,
        end: usize,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start,
            end,
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Returns true for [`Span::DUMMY`].
    #[must_use]
    pub const fn is_dummy(&self) -> bool {
        self.start_line == 0
    }

    /// Smallest span running from `first`'s start to `last`'s end.
    ///
    /// A dummy operand contributes nothing, so merging a real span with a
    /// hand-built child keeps the real location.
    #[must_use]
    pub const fn merge(first: Span, last: Span) -> Self {
        if first.is_dummy() {
            return last;
        }
        if last.is_dummy() {
            return first;
        }
        Self {
            start: first.start,
            end: last.end,
            start_line: first.start_line,
            start_col: first.start_col,
            end_line: last.end_line,
            end_col: last.end_col,
        }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::DUMMY
    }
}

/// `line:col` of the start; error messages are prefixed with it.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// Items that carry a source span.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}
