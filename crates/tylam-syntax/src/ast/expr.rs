//! Expression nodes.
//!
//! The language is a lambda calculus with integer literals, lists,
//! `where`-style local bindings and function-style pattern matching.
//! Operators such as `+` or `if` are ordinary variables supplied by the
//! environment, so `a + b` is `Apply(Apply(Var(+), a), b)`.

use crate::ast::pat::Pattern;
use crate::span::{Span, Spanned};
use tylam_mem::Symbol;

/// An expression together with its source location.
///
/// # Examples
///
/// ```
/// use tylam_mem::StringInterner;
/// use tylam_syntax::ast::{Expr, ExprKind};
///
/// let mut interner = StringInterner::new();
/// let f = interner.intern("f");
///
/// // f 5
/// let call = Expr::apply(Expr::var(f), Expr::int(5));
/// assert!(matches!(call.kind, ExprKind::Apply { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    /// What the expression is
    pub kind: ExprKind,
    /// Source location
    pub span: Span,
}

/// The node kinds of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// Variable reference: `x`, `+`, `cons`
    Var(Symbol),

    /// Integer literal: `42`
    Int(i64),

    /// Single-parameter function: `\param. body`
    Function {
        /// Parameter name
        param: Symbol,
        /// Function body
        body: Box<Expr>,
    },

    /// Application: `func arg`
    Apply {
        /// Function being applied
        func: Box<Expr>,
        /// Argument
        arg: Box<Expr>,
    },

    /// Local binding: `body where name = value`
    ///
    /// When `value` is a function or match function the binding may refer
    /// to itself.
    Where {
        /// The binding introduced for `body`
        binding: Binding,
        /// Expression evaluated with the binding in scope
        body: Box<Expr>,
    },

    /// A single case, `pattern -> body`, typed as a function from the
    /// pattern's type to the body's type.
    MatchCase(MatchCase),

    /// A function defined by cases: `| p1 -> e1 | p2 -> e2`
    MatchFunction(Vec<MatchCase>),

    /// List literal: `[a, b, c]`
    List(Vec<Expr>),
}

/// `name = value`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    /// Bound name
    pub name: Symbol,
    /// Bound value
    pub value: Box<Expr>,
    /// Source location of the whole binding
    pub span: Span,
}

/// `pattern -> body`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchCase {
    /// Pattern matched against the argument
    pub pattern: Pattern,
    /// Body evaluated when the pattern matches
    pub body: Box<Expr>,
    /// Source location of the whole case
    pub span: Span,
}

impl Expr {
    /// Creates an expression with an explicit span.
    #[must_use]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Replaces the span of this expression.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// `name`
    #[must_use]
    pub fn var(name: Symbol) -> Self {
        Self::new(ExprKind::Var(name), Span::DUMMY)
    }

    /// Integer literal.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::new(ExprKind::Int(value), Span::DUMMY)
    }

    /// `\param. body`
    #[must_use]
    pub fn function(param: Symbol, body: Expr) -> Self {
        Self::new(
            ExprKind::Function {
                param,
                body: Box::new(body),
            },
            Span::DUMMY,
        )
    }

    /// `func arg`
    #[must_use]
    pub fn apply(func: Expr, arg: Expr) -> Self {
        Self::new(
            ExprKind::Apply {
                func: Box::new(func),
                arg: Box::new(arg),
            },
            Span::DUMMY,
        )
    }

    /// Curried application of `func` to each argument in turn.
    ///
    /// ```
    /// use tylam_mem::StringInterner;
    /// use tylam_syntax::ast::Expr;
    ///
    /// let mut interner = StringInterner::new();
    /// let plus = interner.intern("+");
    ///
    /// // (+ 1) 2
    /// let sum = Expr::apply_n(Expr::var(plus), [Expr::int(1), Expr::int(2)]);
    /// assert_eq!(sum, Expr::apply(Expr::apply(Expr::var(plus), Expr::int(1)), Expr::int(2)));
    /// ```
    #[must_use]
    pub fn apply_n(func: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        args.into_iter().fold(func, Expr::apply)
    }

    /// `body where name = value`
    #[must_use]
    pub fn where_(name: Symbol, value: Expr, body: Expr) -> Self {
        let binding = Binding {
            name,
            span: value.span,
            value: Box::new(value),
        };
        Self::new(
            ExprKind::Where {
                binding,
                body: Box::new(body),
            },
            Span::DUMMY,
        )
    }

    /// A standalone `pattern -> body` case.
    #[must_use]
    pub fn match_case(pattern: Pattern, body: Expr) -> Self {
        Self::new(ExprKind::MatchCase(MatchCase::new(pattern, body)), Span::DUMMY)
    }

    /// A function defined by `cases`.
    #[must_use]
    pub fn match_function(cases: Vec<MatchCase>) -> Self {
        Self::new(ExprKind::MatchFunction(cases), Span::DUMMY)
    }

    /// `[items...]`
    #[must_use]
    pub fn list(items: Vec<Expr>) -> Self {
        Self::new(ExprKind::List(items), Span::DUMMY)
    }

    /// Returns true for a syntactic function, i.e. a node a binding may
    /// refer to recursively.
    #[must_use]
    pub const fn is_function_like(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Function { .. } | ExprKind::MatchFunction(_)
        )
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

impl MatchCase {
    /// Creates a case spanning from the pattern to the body.
    #[must_use]
    pub fn new(pattern: Pattern, body: Expr) -> Self {
        Self {
            span: Span::merge(pattern.span(), body.span),
            pattern,
            body: Box::new(body),
        }
    }
}

impl Spanned for MatchCase {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Binding {
    fn span(&self) -> Span {
        self.span
    }
}
