//! Core type representation.
//!
//! A [`Ty`] is either a type variable or a constructor applied to argument
//! types. Functions, integers, booleans and lists are all constructors; the
//! builtin names are pre-interned (see [`tylam_mem::sym`]) so building them
//! needs no interner.

use tylam_mem::{Symbol, sym};

/// Type variable identity: an index into the variable supply of one
/// inference run.
pub type TyVar = u32;

/// A monotype.
///
/// # Example
///
/// ```
/// use tylam_typecheck::types::Ty;
///
/// // int -> list ?0
/// let ty = Ty::arrow(Ty::int(), Ty::list(Ty::Var(0)));
/// assert!(ty.occurs_in(0));
/// assert_eq!(ty.free_vars(), vec![0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    /// Type variable.
    Var(TyVar),

    /// Type constructor applied to arguments, e.g. `->` with two arguments
    /// or `int` with none.
    Con {
        /// Constructor name
        name: Symbol,
        /// Arguments, in order
        args: Vec<Ty>,
    },
}

impl Ty {
    /// Applies the constructor `name` to `args`.
    #[must_use]
    pub fn con(name: Symbol, args: Vec<Ty>) -> Self {
        Ty::Con { name, args }
    }

    /// `from -> to`
    #[must_use]
    pub fn arrow(from: Ty, to: Ty) -> Self {
        Ty::con(sym::ARROW, vec![from, to])
    }

    /// `p1 -> p2 -> ... -> ret`
    #[must_use]
    pub fn arrows(params: impl IntoIterator<Item = Ty>, ret: Ty) -> Self {
        let params: Vec<Ty> = params.into_iter().collect();
        params
            .into_iter()
            .rev()
            .fold(ret, |acc, param| Ty::arrow(param, acc))
    }

    /// `int`
    #[must_use]
    pub fn int() -> Self {
        Ty::con(sym::INT, Vec::new())
    }

    /// `bool`
    #[must_use]
    pub fn bool() -> Self {
        Ty::con(sym::BOOL, Vec::new())
    }

    /// `list elem`
    #[must_use]
    pub fn list(elem: Ty) -> Self {
        Ty::con(sym::LIST, vec![elem])
    }

    /// Returns the variable if this is one.
    #[must_use]
    pub const fn as_var(&self) -> Option<TyVar> {
        match self {
            Ty::Var(v) => Some(*v),
            Ty::Con { .. } => None,
        }
    }

    /// Returns `(param, result)` if this is a function type.
    #[must_use]
    pub fn as_arrow(&self) -> Option<(&Ty, &Ty)> {
        match self {
            Ty::Con { name, args } if *name == sym::ARROW => match args.as_slice() {
                [from, to] => Some((from, to)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Structural occurs check. Does not follow variable bindings.
    #[must_use]
    pub fn occurs_in(&self, var: TyVar) -> bool {
        match self {
            Ty::Var(v) => *v == var,
            Ty::Con { args, .. } => args.iter().any(|arg| arg.occurs_in(var)),
        }
    }

    /// Variables of this type in order of first appearance, without
    /// duplicates.
    #[must_use]
    pub fn free_vars(&self) -> Vec<TyVar> {
        let mut vars = Vec::new();
        self.collect_vars(&mut vars);
        vars
    }

    /// Appends the variables of this type not already in `vars`.
    pub fn collect_vars(&self, vars: &mut Vec<TyVar>) {
        match self {
            Ty::Var(v) => {
                if !vars.contains(v) {
                    vars.push(*v);
                }
            }
            Ty::Con { args, .. } => {
                for arg in args {
                    arg.collect_vars(vars);
                }
            }
        }
    }

    /// Rebuilds this type with every variable replaced by `f(var)`.
    #[must_use]
    pub fn map_vars(&self, f: &mut impl FnMut(TyVar) -> Ty) -> Ty {
        match self {
            Ty::Var(v) => f(*v),
            Ty::Con { name, args } => Ty::Con {
                name: *name,
                args: args.iter().map(|arg| arg.map_vars(f)).collect(),
            },
        }
    }

    /// Number of constructor and variable nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Ty::Var(_) => 1,
            Ty::Con { args, .. } => 1 + args.iter().map(Ty::size).sum::<usize>(),
        }
    }
}
