//! Substitutions for the substitution-passing solver.
//!
//! A [`Substitution`] is an ordered list of `(variable, type)` bindings with
//! the most recent binding first. Applying it applies the bindings oldest
//! first, so a later binding rewrites whatever the earlier ones produced.
//! Composition concatenates the lists; two substitutions are never merged as
//! maps, which would lose the effect of later bindings on earlier ranges.
//!
//! # Example
//!
//! ```
//! use tylam_typecheck::context::Substitution;
//! use tylam_typecheck::types::Ty;
//!
//! let older = Substitution::single(0, Ty::list(Ty::Var(1)));
//! let newer = Substitution::single(1, Ty::int());
//!
//! let both = newer.compose(&older);
//! assert_eq!(both.apply(&Ty::Var(0)), Ty::list(Ty::int()));
//! ```

use crate::types::{Ty, TyVar};

/// Sequence of variable bindings, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: Vec<(TyVar, Ty)>,
}

impl Substitution {
    /// The identity substitution.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A substitution binding only `var`.
    #[must_use]
    pub fn single(var: TyVar, ty: Ty) -> Self {
        Self {
            bindings: vec![(var, ty)],
        }
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true for the identity substitution.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &(TyVar, Ty)> {
        self.bindings.iter()
    }

    /// `self ∘ older`: apply `older`, then `self`.
    #[must_use]
    pub fn compose(&self, older: &Substitution) -> Substitution {
        let mut bindings = Vec::with_capacity(self.bindings.len() + older.bindings.len());
        bindings.extend(self.bindings.iter().cloned());
        bindings.extend(older.bindings.iter().cloned());
        Substitution { bindings }
    }

    /// Applies every binding to `ty`, oldest first.
    #[must_use]
    pub fn apply(&self, ty: &Ty) -> Ty {
        self.bindings
            .iter()
            .rev()
            .fold(ty.clone(), |acc, (var, replacement)| {
                if acc.occurs_in(*var) {
                    acc.map_vars(&mut |v| {
                        if v == *var {
                            replacement.clone()
                        } else {
                            Ty::Var(v)
                        }
                    })
                } else {
                    acc
                }
            })
    }

    /// Variables this substitution rewrites.
    pub fn domain(&self) -> impl Iterator<Item = TyVar> + '_ {
        self.bindings.iter().map(|(var, _)| *var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_identity() {
        let subst = Substitution::empty();
        let ty = Ty::arrow(Ty::Var(0), Ty::int());
        assert!(subst.is_empty());
        assert_eq!(subst.apply(&ty), ty);
    }

    #[test]
    fn test_single() {
        let subst = Substitution::single(0, Ty::bool());
        assert_eq!(subst.len(), 1);
        assert_eq!(subst.apply(&Ty::list(Ty::Var(0))), Ty::list(Ty::bool()));
        assert_eq!(subst.apply(&Ty::Var(1)), Ty::Var(1));
    }

    #[test]
    fn test_later_binding_rewrites_earlier_range() {
        // ?0 := ?1 first, then ?1 := int
        let older = Substitution::single(0, Ty::Var(1));
        let newer = Substitution::single(1, Ty::int());
        let composed = newer.compose(&older);

        assert_eq!(composed.apply(&Ty::Var(0)), Ty::int());
        assert_eq!(composed.apply(&Ty::Var(1)), Ty::int());
    }

    #[test]
    fn test_composition_is_not_map_union() {
        // Applied in the wrong order, ?0 would stop at ?1.
        let older = Substitution::single(0, Ty::Var(1));
        let newer = Substitution::single(1, Ty::int());

        let wrong_way = older.compose(&newer);
        assert_eq!(wrong_way.apply(&Ty::Var(0)), Ty::Var(1));

        let right_way = newer.compose(&older);
        assert_eq!(right_way.apply(&Ty::Var(0)), Ty::int());
    }

    #[test]
    fn test_order_most_recent_first() {
        let a = Substitution::single(0, Ty::int());
        let b = Substitution::single(1, Ty::bool());
        let composed = b.compose(&a);
        assert_eq!(composed.domain().collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn test_composition_associative_on_application() {
        let s1 = Substitution::single(0, Ty::list(Ty::Var(1)));
        let s2 = Substitution::single(1, Ty::Var(2));
        let s3 = Substitution::single(2, Ty::int());

        let left = s3.compose(&s2).compose(&s1);
        let right = s3.compose(&s2.compose(&s1));
        let ty = Ty::arrow(Ty::Var(0), Ty::Var(1));
        assert_eq!(left.apply(&ty), right.apply(&ty));
        assert_eq!(left.apply(&ty), Ty::arrow(Ty::list(Ty::int()), Ty::int()));
    }
}
