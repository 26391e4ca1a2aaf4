//! The seam between the inference driver and a unification strategy.
//!
//! The driver only needs three things from a solver: fresh variables,
//! unification, and a way to read back what a type has become. The two
//! implementations are the union-find [`Unifier`] and [`SubstSolver`], which
//! threads a [`Substitution`] through the run.

use crate::context::Substitution;
use crate::error::Result;
use crate::infer::unify::{Unifier, unify_subst};
use crate::types::{Ty, TyVar};
use tylam_log::trace;
use tylam_mem::StringInterner;
use tylam_syntax::Span;

/// Variable supply plus unification state of one inference run.
pub trait Solver {
    /// Allocates a fresh, unbound type variable.
    fn fresh_var(&mut self) -> Ty;

    /// Makes `a` and `b` equal or reports why they cannot be.
    ///
    /// # Errors
    ///
    /// Any unification error; `span` is attached to it.
    fn unify(&mut self, a: &Ty, b: &Ty, span: Span) -> Result<()>;

    /// Returns `ty` with every binding made so far substituted in.
    fn resolve(&self, ty: &Ty) -> Ty;

    /// Id the next fresh variable will get. `TyVar::MAX + 1` means the
    /// supply is used up.
    fn next_var(&self) -> u64;
}

impl Solver for Unifier<'_> {
    fn fresh_var(&mut self) -> Ty {
        Unifier::fresh_var(self)
    }

    fn unify(&mut self, a: &Ty, b: &Ty, span: Span) -> Result<()> {
        Unifier::unify(self, a, b, span)
    }

    fn resolve(&self, ty: &Ty) -> Ty {
        Unifier::resolve(self, ty)
    }

    fn next_var(&self) -> u64 {
        self.arena().next_var()
    }
}

/// Substitution-passing solver.
///
/// Holds the cumulative substitution of the run. Each unification applies
/// it to both operands, asks [`unify_subst`] for the new bindings and
/// composes them on top.
pub struct SubstSolver<'i> {
    subst: Substitution,
    next_var: u64,
    interner: &'i StringInterner,
}

impl<'i> SubstSolver<'i> {
    /// Creates a solver with the identity substitution.
    #[must_use]
    pub fn new(interner: &'i StringInterner) -> Self {
        Self::with_reserved(interner, 0)
    }

    /// Creates a solver whose first fresh variable is `reserved`.
    #[must_use]
    pub fn with_reserved(interner: &'i StringInterner, reserved: TyVar) -> Self {
        Self {
            subst: Substitution::empty(),
            next_var: u64::from(reserved),
            interner,
        }
    }

    /// The cumulative substitution.
    #[must_use]
    pub fn substitution(&self) -> &Substitution {
        &self.subst
    }
}

impl Solver for SubstSolver<'_> {
    fn fresh_var(&mut self) -> Ty {
        debug_assert!(
            self.next_var <= u64::from(TyVar::MAX),
            "type variable supply exhausted"
        );
        let var = self.next_var as TyVar;
        self.next_var += 1;
        Ty::Var(var)
    }

    fn unify(&mut self, a: &Ty, b: &Ty, span: Span) -> Result<()> {
        let a = self.subst.apply(a);
        let b = self.subst.apply(b);
        let step = unify_subst(self.interner, &a, &b, span)?;
        if !step.is_empty() {
            trace!(
                "compose {} binding(s) onto {}",
                step.len(),
                self.subst.len()
            );
            self.subst = step.compose(&self.subst);
        }
        Ok(())
    }

    fn resolve(&self, ty: &Ty) -> Ty {
        self.subst.apply(ty)
    }

    fn next_var(&self) -> u64 {
        self.next_var
    }
}
