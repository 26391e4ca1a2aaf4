//! Generalization and instantiation of type schemes.
//!
//! Generalizing at every binding site is what makes a `where`-bound
//! identity function usable at two different types in the same body: each
//! use instantiates the scheme with its own fresh variables.

use crate::context::{Scheme, TypeEnv};
use crate::infer::Solver;
use crate::types::{Ty, TyVar};
use fxhash::FxHashMap;
use tylam_log::debug;

/// Quantifies the variables of `ty` that are not free in `env`.
///
/// `ty` and every scheme of `env` are resolved through `solver` first, so
/// variables already bound are never quantified. Quantified variables are
/// listed in order of first appearance in the resolved type.
pub fn generalize<S: Solver + ?Sized>(solver: &S, env: &TypeEnv, ty: &Ty) -> Scheme {
    let ty = solver.resolve(ty);
    let in_env = env.free_vars_with(|t| solver.resolve(t));

    let vars: Vec<TyVar> = ty
        .free_vars()
        .into_iter()
        .filter(|var| !in_env.contains(var))
        .collect();

    debug!(
        "generalized over {} variable(s), {} pinned by the environment",
        vars.len(),
        in_env.len()
    );
    Scheme::poly(vars, ty)
}

/// Replaces each quantified variable of `scheme` with a fresh one.
///
/// Variables the scheme does not quantify are left untouched, so every call
/// returns an independent copy that still shares the scheme's free
/// variables.
pub fn instantiate<S: Solver + ?Sized>(solver: &mut S, scheme: &Scheme) -> Ty {
    if scheme.is_mono() {
        return scheme.ty.clone();
    }

    let mapping: FxHashMap<TyVar, Ty> = scheme
        .vars
        .iter()
        .map(|&var| (var, solver.fresh_var()))
        .collect();

    scheme
        .ty
        .map_vars(&mut |var| mapping.get(&var).cloned().unwrap_or(Ty::Var(var)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::{SubstSolver, Unifier};
    use tylam_mem::StringInterner;
    use tylam_syntax::Span;

    #[test]
    fn test_generalize_closed_type() {
        let interner = StringInterner::new();
        let mut solver = Unifier::new(&interner);
        let a = solver.fresh_var();

        let scheme = generalize(&solver, &TypeEnv::new(), &Ty::arrow(a.clone(), a));
        assert_eq!(scheme, Scheme::poly(vec![0], Ty::arrow(Ty::Var(0), Ty::Var(0))));
    }

    #[test]
    fn test_generalize_skips_env_vars() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");
        let mut solver = Unifier::new(&interner);
        let a = solver.fresh_var();
        let b = solver.fresh_var();

        let mut env = TypeEnv::new();
        env.bind(x, Scheme::mono(a.clone()));

        let scheme = generalize(&solver, &env, &Ty::arrow(a, b));
        assert_eq!(scheme.vars, vec![1]);
    }

    #[test]
    fn test_generalize_sees_through_bindings() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");
        let mut solver = Unifier::new(&interner);
        let a = solver.fresh_var();
        let b = solver.fresh_var();

        // env mentions ?0, which has since been bound to list ?1
        let mut env = TypeEnv::new();
        env.bind(x, Scheme::mono(a.clone()));
        solver.unify(&a, &Ty::list(b.clone()), Span::DUMMY).unwrap();

        let scheme = generalize(&solver, &env, &Ty::arrow(b.clone(), b));
        assert!(scheme.is_mono());
    }

    #[test]
    fn test_generalize_resolves_body() {
        let interner = StringInterner::new();
        let mut solver = SubstSolver::new(&interner);
        let a = solver.fresh_var();
        solver.unify(&a, &Ty::int(), Span::DUMMY).unwrap();

        let scheme = generalize(&solver, &TypeEnv::new(), &Ty::list(a));
        assert_eq!(scheme, Scheme::mono(Ty::list(Ty::int())));
    }

    #[test]
    fn test_instantiate_is_fresh_each_time() {
        let interner = StringInterner::new();
        let mut solver = Unifier::with_reserved(&interner, 1);
        let scheme = Scheme::poly(vec![0], Ty::arrow(Ty::Var(0), Ty::Var(0)));

        let first = instantiate(&mut solver, &scheme);
        let second = instantiate(&mut solver, &scheme);
        assert_eq!(first, Ty::arrow(Ty::Var(1), Ty::Var(1)));
        assert_eq!(second, Ty::arrow(Ty::Var(2), Ty::Var(2)));
    }

    #[test]
    fn test_instantiate_keeps_free_vars() {
        let interner = StringInterner::new();
        let mut solver = Unifier::with_reserved(&interner, 2);
        let scheme = Scheme::poly(vec![0], Ty::arrow(Ty::Var(0), Ty::Var(1)));

        let ty = instantiate(&mut solver, &scheme);
        assert_eq!(ty, Ty::arrow(Ty::Var(2), Ty::Var(1)));
    }

    #[test]
    fn test_instantiate_mono_is_clone() {
        let interner = StringInterner::new();
        let mut solver = Unifier::new(&interner);
        let scheme = Scheme::mono(Ty::int());
        assert_eq!(instantiate(&mut solver, &scheme), Ty::int());
        assert_eq!(solver.next_var(), 0);
    }

    #[test]
    fn test_instance_unifies_with_original() {
        let interner = StringInterner::new();
        let mut solver = Unifier::new(&interner);
        let a = solver.fresh_var();
        let original = Ty::arrow(a.clone(), Ty::list(a));

        let scheme = generalize(&solver, &TypeEnv::new(), &original);
        let instance = instantiate(&mut solver, &scheme);
        solver.unify(&instance, &original, Span::DUMMY).unwrap();
    }
}
