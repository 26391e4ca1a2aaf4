//! Unification with occurs check.
//!
//! Two formulations of the same algorithm:
//!
//! - [`Unifier`] mutates a [`TypeArena`] in place, linking variables
//!   union-find style.
//! - [`unify_subst`] is pure and returns the [`Substitution`] that makes
//!   its operands equal; the caller composes it onto whatever it already
//!   has.
//!
//! Both resolve the operands first. A variable is bound to the other
//! operand (the left variable is preferred) after an occurs check. Two
//! constructors must agree on name and arity, then their arguments are
//! unified pairwise, left to right, each pair seeing the bindings made by
//! the pairs before it.

use crate::context::{Substitution, TypeArena};
use crate::error::{Result, TypeError};
use crate::types::{Ty, TyVar};
use tylam_log::trace;
use tylam_mem::StringInterner;
use tylam_syntax::Span;

/// Union-find unifier over an arena owned by one inference run.
pub struct Unifier<'i> {
    arena: TypeArena,
    interner: &'i StringInterner,
}

impl<'i> Unifier<'i> {
    /// Creates a unifier with an empty arena.
    #[must_use]
    pub fn new(interner: &'i StringInterner) -> Self {
        Self::with_reserved(interner, 0)
    }

    /// Creates a unifier whose first fresh variable is `reserved`.
    #[must_use]
    pub fn with_reserved(interner: &'i StringInterner, reserved: TyVar) -> Self {
        Self {
            arena: TypeArena::with_reserved(reserved),
            interner,
        }
    }

    /// The arena holding the current bindings.
    #[must_use]
    pub fn arena(&self) -> &TypeArena {
        &self.arena
    }

    /// Allocates a fresh unbound variable.
    pub fn fresh_var(&mut self) -> Ty {
        self.arena.fresh_var()
    }

    /// Unifies `a` with `b`, binding variables in the arena.
    ///
    /// On failure the bindings made before the conflicting pair are kept;
    /// the run is expected to stop.
    ///
    /// # Errors
    ///
    /// `ConstructorMismatch`, `ArityMismatch` or `OccursCheck`.
    pub fn unify(&mut self, a: &Ty, b: &Ty, span: Span) -> Result<()> {
        let left = self.arena.find(a).clone();
        let right = self.arena.find(b).clone();

        match (&left, &right) {
            (Ty::Var(x), Ty::Var(y)) if x == y => Ok(()),

            (Ty::Var(var), other) | (other, Ty::Var(var)) => self.bind_var(*var, other, span),

            (
                Ty::Con {
                    name: n1,
                    args: args1,
                },
                Ty::Con {
                    name: n2,
                    args: args2,
                },
            ) => {
                if n1 != n2 {
                    return Err(constructor_mismatch(
                        self.interner,
                        &left,
                        &right,
                        self.arena.resolve(&left),
                        self.arena.resolve(&right),
                        span,
                    ));
                }
                if args1.len() != args2.len() {
                    return Err(arity_mismatch(self.interner, &left, &right, span));
                }
                for (l, r) in args1.iter().zip(args2) {
                    self.unify(l, r, span)?;
                }
                Ok(())
            }
        }
    }

    fn bind_var(&mut self, var: TyVar, ty: &Ty, span: Span) -> Result<()> {
        if self.arena.occurs(var, ty) {
            return Err(TypeError::OccursCheck {
                var,
                ty: self.arena.resolve(ty),
                span,
            });
        }
        trace!(
            "bind ?{} := {}",
            var,
            self.arena.resolve(ty).display(self.interner)
        );
        self.arena.bind(var, ty.clone());
        Ok(())
    }

    /// Fully substitutes the current bindings into `ty`.
    #[must_use]
    pub fn resolve(&self, ty: &Ty) -> Ty {
        self.arena.resolve(ty)
    }
}

/// Returns the substitution that makes `a` and `b` equal.
///
/// The operands must already have every earlier binding applied.
///
/// # Errors
///
/// `ConstructorMismatch`, `ArityMismatch` or `OccursCheck`.
///
/// # Example
///
/// ```
/// use tylam_mem::StringInterner;
/// use tylam_syntax::Span;
/// use tylam_typecheck::infer::unify_subst;
/// use tylam_typecheck::types::Ty;
///
/// let interner = StringInterner::new();
/// let a = Ty::arrow(Ty::Var(0), Ty::Var(0));
/// let b = Ty::arrow(Ty::Var(1), Ty::int());
///
/// let s = unify_subst(&interner, &a, &b, Span::DUMMY).unwrap();
/// assert_eq!(s.apply(&a), s.apply(&b));
/// assert_eq!(s.apply(&a), Ty::arrow(Ty::int(), Ty::int()));
/// ```
pub fn unify_subst(
    interner: &StringInterner,
    a: &Ty,
    b: &Ty,
    span: Span,
) -> Result<Substitution> {
    match (a, b) {
        (Ty::Var(x), Ty::Var(y)) if x == y => Ok(Substitution::empty()),

        (Ty::Var(var), other) | (other, Ty::Var(var)) => {
            if other.occurs_in(*var) {
                return Err(TypeError::OccursCheck {
                    var: *var,
                    ty: other.clone(),
                    span,
                });
            }
            Ok(Substitution::single(*var, other.clone()))
        }

        (
            Ty::Con {
                name: n1,
                args: args1,
            },
            Ty::Con {
                name: n2,
                args: args2,
            },
        ) => {
            if n1 != n2 {
                return Err(constructor_mismatch(
                    interner,
                    a,
                    b,
                    a.clone(),
                    b.clone(),
                    span,
                ));
            }
            if args1.len() != args2.len() {
                return Err(arity_mismatch(interner, a, b, span));
            }

            let mut subst = Substitution::empty();
            for (l, r) in args1.iter().zip(args2) {
                let step = unify_subst(interner, &subst.apply(l), &subst.apply(r), span)?;
                subst = step.compose(&subst);
            }
            Ok(subst)
        }
    }
}

fn con_name<'a>(interner: &'a StringInterner, ty: &Ty) -> &'a str {
    match ty {
        Ty::Con { name, .. } => interner.name(*name),
        Ty::Var(_) => "?",
    }
}

fn con_arity(ty: &Ty) -> usize {
    match ty {
        Ty::Con { args, .. } => args.len(),
        Ty::Var(_) => 0,
    }
}

fn constructor_mismatch(
    interner: &StringInterner,
    left_rep: &Ty,
    right_rep: &Ty,
    left: Ty,
    right: Ty,
    span: Span,
) -> TypeError {
    TypeError::ConstructorMismatch {
        expected: con_name(interner, left_rep).to_string(),
        found: con_name(interner, right_rep).to_string(),
        left,
        right,
        span,
    }
}

fn arity_mismatch(interner: &StringInterner, left: &Ty, right: &Ty, span: Span) -> TypeError {
    TypeError::ArityMismatch {
        name: con_name(interner, left).to_string(),
        left_arity: con_arity(left),
        right_arity: con_arity(right),
        span,
    }
}
