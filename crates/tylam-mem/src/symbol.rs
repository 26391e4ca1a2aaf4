//! Interned identifiers.
//!
//! A [`Symbol`] is a 32-bit handle to a string owned by a
//! [`StringInterner`](crate::StringInterner). Comparing two symbols is an
//! integer comparison, which is what the type environment and the unifier
//! do on every lookup and every constructor match.
//!
//! ```
//! use tylam_mem::Symbol;
//!
//! let a = Symbol::new(7);
//! assert_eq!(a, Symbol::new(7));
//! assert_eq!(a.as_u32(), 7);
//! ```

use std::fmt;

/// Handle to an interned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Creates a symbol from a raw id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the raw id as an index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns true for one of the pre-interned builtin type constructor names.
    #[must_use]
    pub const fn is_builtin(self) -> bool {
        self.0 < sym::BUILTIN_COUNT
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Fixed symbols for the builtin type constructors.
///
/// Every [`StringInterner`](crate::StringInterner) interns these names first,
/// in this order, so the constants are valid for any interner.
pub mod sym {
    use super::Symbol;

    /// `->`, the function type constructor (arity 2)
    pub const ARROW: Symbol = Symbol::new(0);
    /// `int` (arity 0)
    pub const INT: Symbol = Symbol::new(1);
    /// `bool` (arity 0)
    pub const BOOL: Symbol = Symbol::new(2);
    /// `list` (arity 1)
    pub const LIST: Symbol = Symbol::new(3);

    /// Names of the builtin constructors, indexed by symbol id.
    pub const BUILTIN_NAMES: &[&str] = &["->", "int", "bool", "list"];

    pub(crate) const BUILTIN_COUNT: u32 = BUILTIN_NAMES.len() as u32;
}
