//! Type rendering for error messages and diagnostics.
//!
//! Function types are written infix and associate to the right
//! (`int -> int -> bool`); every other constructor is written prefix
//! (`list a`). Quantified variables of a scheme are named `a`, `b`, ... in
//! the order they are listed; any other variable is written `?n`.

use crate::context::Scheme;
use crate::types::{Ty, TyVar};
use std::fmt;
use tylam_mem::{StringInterner, sym};

/// A type paired with the interner needed to name its constructors.
pub struct DisplayTy<'a> {
    ty: &'a Ty,
    bound: &'a [TyVar],
    interner: &'a StringInterner,
}

/// A scheme paired with the interner needed to name its constructors.
pub struct DisplayScheme<'a> {
    scheme: &'a Scheme,
    interner: &'a StringInterner,
}

impl Ty {
    /// Renders this type with every variable as `?n`.
    ///
    /// ```
    /// use tylam_mem::StringInterner;
    /// use tylam_typecheck::types::Ty;
    ///
    /// let interner = StringInterner::new();
    /// let ty = Ty::arrow(Ty::arrow(Ty::int(), Ty::bool()), Ty::list(Ty::Var(4)));
    /// assert_eq!(ty.display(&interner).to_string(), "(int -> bool) -> list ?4");
    /// ```
    #[must_use]
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> DisplayTy<'a> {
        DisplayTy {
            ty: self,
            bound: &[],
            interner,
        }
    }
}

impl Scheme {
    /// Renders this scheme as `forall a b. ...`, or as a plain type when
    /// nothing is quantified.
    #[must_use]
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> DisplayScheme<'a> {
        DisplayScheme {
            scheme: self,
            interner,
        }
    }
}

/// Name of the `index`-th quantified variable: `a`..`z`, then `a1`..`z1`, ...
#[must_use]
pub fn var_name(index: usize) -> String {
    let letter = char::from(b'a' + (index % 26) as u8);
    match index / 26 {
        0 => letter.to_string(),
        round => format!("{letter}{round}"),
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    /// Right-hand side of an arrow, or top level
    Arrow,
    /// Left-hand side of an arrow
    ArrowLeft,
    /// Constructor argument
    Atom,
}

impl DisplayTy<'_> {
    fn format_type(&self, ty: &Ty, prec: Prec, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ty {
            Ty::Var(var) => match self.bound.iter().position(|b| b == var) {
                Some(index) => write!(f, "{}", var_name(index)),
                None => write!(f, "?{var}"),
            },

            Ty::Con { name, args } if *name == sym::ARROW && args.len() == 2 => {
                let parens = prec > Prec::Arrow;
                if parens {
                    write!(f, "(")?;
                }
                self.format_type(&args[0], Prec::ArrowLeft, f)?;
                write!(f, " -> ")?;
                self.format_type(&args[1], Prec::Arrow, f)?;
                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Ty::Con { name, args } => {
                let label = self.interner.name(*name);
                if args.is_empty() {
                    return write!(f, "{label}");
                }

                let parens = prec == Prec::Atom;
                if parens {
                    write!(f, "(")?;
                }
                if *name == sym::ARROW {
                    write!(f, "(->)")?;
                } else {
                    write!(f, "{label}")?;
                }
                for arg in args {
                    write!(f, " ")?;
                    self.format_type(arg, Prec::Atom, f)?;
                }
                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for DisplayTy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_type(self.ty, Prec::Arrow, f)
    }
}

impl fmt::Display for DisplayScheme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vars = &self.scheme.vars;
        if !vars.is_empty() {
            write!(f, "forall")?;
            for index in 0..vars.len() {
                write!(f, " {}", var_name(index))?;
            }
            write!(f, ". ")?;
        }
        let body = DisplayTy {
            ty: &self.scheme.ty,
            bound: vars,
            interner: self.interner,
        };
        write!(f, "{body}")
    }
}
