//! Type environment for lexical scoping.
//!
//! The environment maps identifiers to type schemes and is organized as a
//! stack of scopes. Bindings only ever go into the innermost scope, so
//! entering a nested scope never changes what an enclosing scope maps.
//!
//! # Example
//!
//! ```
//! use tylam_mem::StringInterner;
//! use tylam_typecheck::context::{Scheme, TypeEnv};
//! use tylam_typecheck::types::Ty;
//!
//! let mut interner = StringInterner::new();
//! let x = interner.intern("x");
//!
//! let mut env = TypeEnv::new();
//! env.bind(x, Scheme::mono(Ty::int()));
//!
//! env.new_scope();
//! env.bind(x, Scheme::mono(Ty::bool()));
//! assert_eq!(env.lookup(x).map(|s| &s.ty), Some(&Ty::bool()));
//!
//! env.pop_scope();
//! assert_eq!(env.lookup(x).map(|s| &s.ty), Some(&Ty::int()));
//! ```

use crate::types::{Ty, TyVar};
use fxhash::{FxHashMap, FxHashSet};
use tylam_mem::{StringInterner, Symbol};

/// Type scheme: a type with universally quantified variables.
///
/// - `forall a. a -> a` is the identity function's scheme
/// - `int -> int` is monomorphic (no quantified variables)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    /// Quantified variables.
    pub vars: Vec<TyVar>,

    /// The body (may mention `vars`).
    pub ty: Ty,
}

impl Scheme {
    /// A scheme quantifying nothing.
    #[must_use]
    pub fn mono(ty: Ty) -> Self {
        Self {
            vars: Vec::new(),
            ty,
        }
    }

    /// A scheme quantifying `vars`.
    #[must_use]
    pub fn poly(vars: Vec<TyVar>, ty: Ty) -> Self {
        Self { vars, ty }
    }

    /// Returns true if nothing is quantified.
    #[must_use]
    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables of the body that are not quantified, in order of first
    /// appearance.
    #[must_use]
    pub fn free_vars(&self) -> Vec<TyVar> {
        self.free_vars_with(|ty| ty.clone())
    }

    /// Free variables after each one is passed through `resolve`.
    ///
    /// Quantified variables are skipped before `resolve` sees them: their
    /// ids are local to the scheme and may coincide with unrelated
    /// variables of the caller's supply.
    #[must_use]
    pub fn free_vars_with(&self, resolve: impl Fn(&Ty) -> Ty) -> Vec<TyVar> {
        let mut out = Vec::new();
        for var in self.ty.free_vars() {
            if self.vars.contains(&var) {
                continue;
            }
            resolve(&Ty::Var(var)).collect_vars(&mut out);
        }
        out
    }

    /// Alpha-renames every variable to `0..n` in order of first appearance.
    ///
    /// Two schemes equal up to renaming have equal canonical forms.
    /// Quantified variables that do not occur in the body are dropped.
    ///
    /// ```
    /// use tylam_typecheck::context::Scheme;
    /// use tylam_typecheck::types::Ty;
    ///
    /// let a = Scheme::poly(vec![9, 4], Ty::arrow(Ty::Var(4), Ty::Var(9)));
    /// let b = Scheme::poly(vec![0, 1], Ty::arrow(Ty::Var(0), Ty::Var(1)));
    /// assert_eq!(a.canonical(), b.canonical());
    /// ```
    #[must_use]
    pub fn canonical(&self) -> Scheme {
        let order = self.ty.free_vars();
        let rename = |var: TyVar| {
            order
                .iter()
                .position(|v| *v == var)
                .map_or(var, |index| index as TyVar)
        };

        let ty = self.ty.map_vars(&mut |v| Ty::Var(rename(v)));
        let vars = order
            .iter()
            .filter(|&&v| self.vars.contains(&v))
            .map(|&v| rename(v))
            .collect();
        Scheme { vars, ty }
    }
}

/// Type environment mapping identifiers to schemes.
#[derive(Debug, Clone)]
pub struct TypeEnv {
    /// Stack of scopes, innermost last.
    scopes: Vec<FxHashMap<Symbol, Scheme>>,
}

impl TypeEnv {
    /// Creates an environment with one empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![FxHashMap::default()],
        }
    }

    /// Creates a global scope holding the builtin operators:
    ///
    /// | name | scheme |
    /// |---|---|
    /// | `+` `-` `*` | `int -> int -> int` |
    /// | `<` | `int -> int -> bool` |
    /// | `==` | `forall a. a -> a -> bool` |
    /// | `true` `false` | `bool` |
    /// | `cons` | `forall a. a -> list a -> list a` |
    /// | `if` | `forall a. bool -> a -> a -> a` |
    pub fn prelude(interner: &mut StringInterner) -> Self {
        let mut env = Self::new();
        let a = Ty::Var(0);

        let arith = Scheme::mono(Ty::arrows([Ty::int(), Ty::int()], Ty::int()));
        for op in ["+", "-", "*"] {
            env.bind(interner.intern(op), arith.clone());
        }
        env.bind(
            interner.intern("<"),
            Scheme::mono(Ty::arrows([Ty::int(), Ty::int()], Ty::bool())),
        );
        env.bind(
            interner.intern("=="),
            Scheme::poly(vec![0], Ty::arrows([a.clone(), a.clone()], Ty::bool())),
        );
        for name in ["true", "false"] {
            env.bind(interner.intern(name), Scheme::mono(Ty::bool()));
        }
        env.bind(
            interner.intern("cons"),
            Scheme::poly(
                vec![0],
                Ty::arrows([a.clone(), Ty::list(a.clone())], Ty::list(a.clone())),
            ),
        );
        env.bind(
            interner.intern("if"),
            Scheme::poly(vec![0], Ty::arrows([Ty::bool(), a.clone(), a.clone()], a)),
        );
        env
    }

    /// Number of scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Enters a new innermost scope.
    pub fn new_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Leaves the innermost scope. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Binds `name` in the innermost scope, shadowing outer bindings.
    pub fn bind(&mut self, name: Symbol, scheme: Scheme) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, scheme);
        }
    }

    /// Looks `name` up from the innermost scope outwards.
    #[must_use]
    pub fn lookup(&self, name: Symbol) -> Option<&Scheme> {
        self.scopes.iter().rev().find_map(|scope| scope.get(&name))
    }

    /// Returns true if `name` is bound in any scope.
    #[must_use]
    pub fn contains(&self, name: Symbol) -> bool {
        self.lookup(name).is_some()
    }

    /// Every binding in every scope, shadowed ones included.
    pub fn schemes(&self) -> impl Iterator<Item = &Scheme> {
        self.scopes.iter().flat_map(|scope| scope.values())
    }

    /// Variables free in any scheme, after passing each through `resolve`.
    #[must_use]
    pub fn free_vars_with(&self, resolve: impl Fn(&Ty) -> Ty) -> FxHashSet<TyVar> {
        self.schemes()
            .flat_map(|scheme| scheme.free_vars_with(&resolve))
            .collect()
    }

    /// One past the largest variable free in any scheme. An inference run
    /// over this environment starts its supply here.
    ///
    /// Quantified variables do not count: their ids are local to the scheme
    /// and instantiation replaces them before they meet the run's own
    /// variables. Returns `None` if a free variable is already `TyVar::MAX`,
    /// leaving no id for the run.
    #[must_use]
    pub fn var_watermark(&self) -> Option<TyVar> {
        match self.schemes().flat_map(Scheme::free_vars).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }
}

impl Default for TypeEnv {
    fn default() -> Self {
        Self::new()
    }
}
