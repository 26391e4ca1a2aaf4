//! Pattern nodes.
//!
//! Patterns appear on the left of a match case and destructure the value the
//! case is applied to.

use crate::span::{Span, Spanned};
use tylam_mem::Symbol;

/// A pattern in a match case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Wildcard pattern: `_`
    Wildcard {
        /// Source location
        span: Span,
    },

    /// Variable binding pattern: `x`
    Variable {
        /// Variable name
        name: Symbol,
        /// Source location
        span: Span,
    },

    /// Integer literal pattern: `0`
    Int {
        /// The literal value
        value: i64,
        /// Source location
        span: Span,
    },

    /// List pattern: `[]`, `[x, y]`, `[head, ..tail]`
    List {
        /// Element patterns
        elements: Vec<Pattern>,
        /// Optional rest pattern (for remaining elements)
        rest: Option<Box<Pattern>>,
        /// Source location
        span: Span,
    },
}

impl Pattern {
    /// `_`
    #[must_use]
    pub const fn wildcard() -> Self {
        Self::Wildcard { span: Span::DUMMY }
    }

    /// `name`
    #[must_use]
    pub const fn var(name: Symbol) -> Self {
        Self::Variable {
            name,
            span: Span::DUMMY,
        }
    }

    /// Integer literal pattern.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Int {
            value,
            span: Span::DUMMY,
        }
    }

    /// `[elements..]`, or `[elements.., ..rest]` when `rest` is given.
    #[must_use]
    pub fn list(elements: Vec<Pattern>, rest: Option<Pattern>) -> Self {
        Self::List {
            elements,
            rest: rest.map(Box::new),
            span: Span::DUMMY,
        }
    }

    /// Replaces the span of this pattern.
    #[must_use]
    pub fn with_span(mut self, new_span: Span) -> Self {
        match &mut self {
            Self::Wildcard { span }
            | Self::Variable { span, .. }
            | Self::Int { span, .. }
            | Self::List { span, .. } => *span = new_span,
        }
        self
    }

    /// Identifiers bound by this pattern, left to right, duplicates included.
    ///
    /// ```
    /// use tylam_mem::StringInterner;
    /// use tylam_syntax::ast::Pattern;
    ///
    /// let mut interner = StringInterner::new();
    /// let (x, xs) = (interner.intern("x"), interner.intern("xs"));
    ///
    /// let p = Pattern::list(vec![Pattern::var(x), Pattern::wildcard()], Some(Pattern::var(xs)));
    /// let names: Vec<_> = p.bindings().into_iter().map(|(name, _)| name).collect();
    /// assert_eq!(names, vec![x, xs]);
    /// ```
    #[must_use]
    pub fn bindings(&self) -> Vec<(Symbol, Span)> {
        let mut out = Vec::new();
        self.collect_bindings(&mut out);
        out
    }

    fn collect_bindings(&self, out: &mut Vec<(Symbol, Span)>) {
        match self {
            Self::Wildcard { .. } | Self::Int { .. } => {}
            Self::Variable { name, span } => out.push((*name, *span)),
            Self::List { elements, rest, .. } => {
                for element in elements {
                    element.collect_bindings(out);
                }
                if let Some(rest) = rest {
                    rest.collect_bindings(out);
                }
            }
        }
    }
}

impl Spanned for Pattern {
    fn span(&self) -> Span {
        match self {
            Self::Wildcard { span }
            | Self::Variable { span, .. }
            | Self::Int { span, .. }
            | Self::List { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tylam_mem::StringInterner;

    #[test]
    fn test_bindings_order_and_duplicates() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");
        let y = interner.intern("y");

        let p = Pattern::list(
            vec![Pattern::var(x), Pattern::int(0), Pattern::var(y)],
            Some(Pattern::var(x)),
        );
        let names: Vec<Symbol> = p.bindings().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec![x, y, x]);
    }

    #[test]
    fn test_literal_patterns_bind_nothing() {
        assert!(Pattern::wildcard().bindings().is_empty());
        assert!(Pattern::int(3).bindings().is_empty());
        assert!(Pattern::list(vec![], None).bindings().is_empty());
    }

    #[test]
    fn test_with_span() {
        let span = Span::new(1, 2, 1, 2, 1, 3);
        assert_eq!(Pattern::wildcard().with_span(span).span(), span);
        assert_eq!(Pattern::list(vec![], None).with_span(span).span(), span);
    }
}
