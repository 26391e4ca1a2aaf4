//! Variable arena with union-find bindings.
//!
//! Each variable has a parent link: none while the variable is unbound,
//! `ty` once it has been unified with `ty`. Variables the arena issued keep
//! their link in a slot indexed from the arena's first id; any other
//! variable keeps it in a side table.
//! Following links ends at the variable's *representative*, either an
//! unbound variable or a constructor.
//!
//! The arena belongs to a single inference run and is dropped with it;
//! variables are never freed individually.
//!
//! # Example
//!
//! ```
//! use tylam_typecheck::context::TypeArena;
//! use tylam_typecheck::types::Ty;
//!
//! let mut arena = TypeArena::new();
//! let a = arena.fresh_var();
//! let b = arena.fresh_var();
//!
//! arena.bind(0, b.clone());
//! arena.bind(1, Ty::int());
//!
//! assert_eq!(arena.find(&a), &Ty::int());
//! assert_eq!(arena.resolve(&Ty::list(a)), Ty::list(Ty::int()));
//! ```

use crate::types::{Ty, TyVar};
use fxhash::FxHashMap;

/// Owner of every type variable of one inference run.
#[derive(Debug, Clone, Default)]
pub struct TypeArena {
    /// Id of the first variable this arena issues.
    base: TyVar,
    /// `parent[i]` is the link of variable `base + i`: `None` while it is
    /// unbound, `Some(ty)` once it is bound to `ty`.
    parent: Vec<Option<Ty>>,
    /// Links of variables the arena did not issue, such as free variables
    /// of caller-supplied schemes.
    foreign: FxHashMap<TyVar, Ty>,
}

impl TypeArena {
    /// Creates an arena whose first variable is `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena whose first fresh variable is `reserved`.
    ///
    /// Variables below `reserved` belong to schemes supplied from outside
    /// the run. Nothing is allocated for them up front; they start unbound
    /// and can be bound like any other variable.
    #[must_use]
    pub fn with_reserved(reserved: TyVar) -> Self {
        Self {
            base: reserved,
            ..Self::default()
        }
    }

    /// Number of variables this arena has issued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if no variable has been issued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Id the next fresh variable will get. Reaches `TyVar::MAX + 1` once
    /// the supply is used up.
    #[must_use]
    pub fn next_var(&self) -> u64 {
        u64::from(self.base) + self.parent.len() as u64
    }

    /// Number of variables that have been bound, issued or not.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.parent.iter().filter(|slot| slot.is_some()).count() + self.foreign.len()
    }

    /// Allocates a fresh unbound variable.
    ///
    /// The caller checks that [`next_var`](Self::next_var) is still a valid
    /// id.
    pub fn fresh_var(&mut self) -> Ty {
        debug_assert!(
            self.next_var() <= u64::from(TyVar::MAX),
            "type variable supply exhausted"
        );
        let var = self.next_var() as TyVar;
        self.parent.push(None);
        Ty::Var(var)
    }

    fn slot(&self, var: TyVar) -> Option<usize> {
        let index = var.checked_sub(self.base)? as usize;
        (index < self.parent.len()).then_some(index)
    }

    fn link(&self, var: TyVar) -> Option<&Ty> {
        match self.slot(var) {
            Some(index) => self.parent[index].as_ref(),
            None => self.foreign.get(&var),
        }
    }

    /// Returns true if `var` has no parent link.
    #[must_use]
    pub fn is_unbound(&self, var: TyVar) -> bool {
        self.link(var).is_none()
    }

    /// Follows parent links from `ty` to its representative.
    ///
    /// Idempotent: `find(find(t)) == find(t)`.
    #[must_use]
    pub fn find<'a>(&'a self, ty: &'a Ty) -> &'a Ty {
        let mut current = ty;
        while let Ty::Var(var) = current {
            match self.link(*var) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Links the unbound variable `var` to `ty`. Variables the arena did not
    /// issue are recorded too.
    ///
    /// The caller performs the occurs check; `var` must not be `ty`'s
    /// representative.
    pub fn bind(&mut self, var: TyVar, ty: Ty) {
        debug_assert!(self.is_unbound(var), "?{var} is already bound");
        debug_assert!(
            self.find(&ty) != &Ty::Var(var),
            "binding ?{var} to itself"
        );
        match self.slot(var) {
            Some(index) => self.parent[index] = Some(ty),
            None => {
                self.foreign.insert(var, ty);
            }
        }
    }

    /// Returns true if `var` occurs in `ty` once bindings are followed.
    #[must_use]
    pub fn occurs(&self, var: TyVar, ty: &Ty) -> bool {
        match self.find(ty) {
            Ty::Var(v) => *v == var,
            Ty::Con { args, .. } => args.iter().any(|arg| self.occurs(var, arg)),
        }
    }

    /// Replaces every variable in `ty` by its representative, recursively.
    #[must_use]
    pub fn resolve(&self, ty: &Ty) -> Ty {
        match self.find(ty) {
            Ty::Var(v) => Ty::Var(*v),
            Ty::Con { name, args } => Ty::Con {
                name: *name,
                args: args.iter().map(|arg| self.resolve(arg)).collect(),
            },
        }
    }
}
