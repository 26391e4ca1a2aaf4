//! Syntax for the `tylam` lambda calculus.
//!
//! There is no concrete syntax: trees are built programmatically, usually
//! with the constructor helpers on [`Expr`] and [`Pattern`], and then handed
//! to the type checker. Every node carries a [`Span`] so errors can point
//! back at whatever produced the tree.
//!
//! ```
//! use tylam_mem::StringInterner;
//! use tylam_syntax::ast::Expr;
//!
//! let mut interner = StringInterner::new();
//! let x = interner.intern("x");
//!
//! // \x. x
//! let id = Expr::function(x, Expr::var(x));
//! assert!(id.is_function_like());
//! ```

pub mod ast;
pub mod span;

pub use ast::{Binding, Expr, ExprKind, MatchCase, Pattern};
pub use span::{Span, Spanned};
