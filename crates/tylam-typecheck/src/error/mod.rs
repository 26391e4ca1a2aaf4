//! Type inference errors.
//!
//! Every error is fatal to the top-level inference call. Errors raised by a
//! unifier carry the span of the expression whose rule asked for the
//! unification.

use crate::types::{Ty, TyVar};
use thiserror::Error;
use tylam_syntax::Span;

/// Type inference errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// An identifier with no binding in scope.
    #[error("{span}: unbound variable `{name}`")]
    UnboundVariable {
        /// The identifier
        name: String,
        /// Source location of the reference
        span: Span,
    },

    /// Two constructors with different names were unified.
    #[error("{span}: type constructor mismatch: `{expected}` vs `{found}`")]
    ConstructorMismatch {
        /// Constructor of the left operand
        expected: String,
        /// Constructor of the right operand
        found: String,
        /// Resolved left operand
        left: Ty,
        /// Resolved right operand
        right: Ty,
        /// Source location
        span: Span,
    },

    /// Two applications of the same constructor with different argument
    /// counts were unified.
    #[error("{span}: `{name}` applied to {left_arity} and {right_arity} argument(s)")]
    ArityMismatch {
        /// The constructor
        name: String,
        /// Argument count on the left
        left_arity: usize,
        /// Argument count on the right
        right_arity: usize,
        /// Source location
        span: Span,
    },

    /// Binding a variable to a type containing it would build an infinite
    /// type.
    #[error("{span}: infinite type: ?{var} occurs in the type it is unified with")]
    OccursCheck {
        /// The variable being bound
        var: TyVar,
        /// The type it occurs in, resolved
        ty: Ty,
        /// Source location
        span: Span,
    },

    /// A pattern binds the same identifier twice.
    #[error("{span}: `{name}` is bound more than once in the same pattern")]
    DuplicateBinding {
        /// The identifier
        name: String,
        /// Source location of the second occurrence
        span: Span,
    },

    /// The expression tree nests deeper than the configured limit.
    #[error("{span}: expression nesting exceeds the limit of {limit}")]
    RecursionLimit {
        /// Configured maximum depth
        limit: usize,
        /// Source location of the node that crossed the limit
        span: Span,
    },

    /// Every type variable id above the environment's own has been issued.
    #[error("{span}: ran out of type variables")]
    VariableSupplyExhausted {
        /// Source location of the node that needed a fresh variable
        span: Span,
    },
}

impl TypeError {
    /// Source location the error points at.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            TypeError::UnboundVariable { span, .. }
            | TypeError::ConstructorMismatch { span, .. }
            | TypeError::ArityMismatch { span, .. }
            | TypeError::OccursCheck { span, .. }
            | TypeError::DuplicateBinding { span, .. }
            | TypeError::RecursionLimit { span, .. }
            | TypeError::VariableSupplyExhausted { span } => *span,
        }
    }

    /// Short name of the error kind, independent of its payload.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            TypeError::UnboundVariable { .. } => "unbound variable",
            TypeError::ConstructorMismatch { .. } => "constructor mismatch",
            TypeError::ArityMismatch { .. } => "arity mismatch",
            TypeError::OccursCheck { .. } => "occurs check",
            TypeError::DuplicateBinding { .. } => "duplicate binding",
            TypeError::RecursionLimit { .. } => "recursion limit",
            TypeError::VariableSupplyExhausted { .. } => "variable supply exhausted",
        }
    }
}

/// A result type for inference operations.
pub type Result<T> = std::result::Result<T, TypeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypeError::UnboundVariable {
            name: "undefined_name".to_string(),
            span: Span::new(0, 14, 1, 1, 1, 15),
        };
        assert_eq!(err.to_string(), "1:1: unbound variable `undefined_name`");
        assert_eq!(err.description(), "unbound variable");
    }

    #[test]
    fn test_mismatch_error() {
        let span = Span::new(4, 7, 2, 3, 2, 6);
        let err = TypeError::ConstructorMismatch {
            expected: "int".to_string(),
            found: "->".to_string(),
            left: Ty::int(),
            right: Ty::arrow(Ty::int(), Ty::Var(0)),
            span,
        };
        assert_eq!(err.span(), span);
        assert!(err.to_string().contains("`int` vs `->`"));
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let span = Span::DUMMY;
        let errors = [
            TypeError::UnboundVariable { name: "x".into(), span },
            TypeError::ArityMismatch {
                name: "list".into(),
                left_arity: 1,
                right_arity: 2,
                span,
            },
            TypeError::OccursCheck {
                var: 0,
                ty: Ty::list(Ty::Var(0)),
                span,
            },
            TypeError::DuplicateBinding { name: "x".into(), span },
            TypeError::RecursionLimit { limit: 8, span },
            TypeError::VariableSupplyExhausted { span },
        ];
        let mut kinds: Vec<&str> = errors.iter().map(TypeError::description).collect();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }
}
