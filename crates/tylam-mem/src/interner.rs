//! String interning with ID-based references.
//!
//! The interner maps each distinct identifier to a [`Symbol`] and back. The
//! builtin type constructor names are interned first so that the constants in
//! [`sym`](crate::sym) hold for every interner.
//!
//! ```
//! use tylam_mem::{sym, StringInterner};
//!
//! let mut interner = StringInterner::new();
//! let x = interner.intern("x");
//!
//! assert_eq!(interner.intern("x"), x);
//! assert_eq!(interner.resolve(x), Some("x"));
//! assert_eq!(interner.intern("int"), sym::INT);
//! ```

use crate::symbol::{Symbol, sym};

#[cfg(feature = "symbols")]
use hashbrown::HashMap;

#[cfg(not(feature = "symbols"))]
use std::collections::HashMap;

/// Bidirectional identifier table.
#[derive(Debug, Clone)]
pub struct StringInterner {
    /// Symbol id -> string
    strings: Vec<Box<str>>,
    /// String -> symbol
    symbols: HashMap<Box<str>, Symbol>,
}

impl StringInterner {
    /// Creates an interner holding only the builtin type constructor names.
    #[must_use]
    pub fn new() -> Self {
        let mut interner = Self {
            strings: Vec::new(),
            symbols: HashMap::new(),
        };
        for name in sym::BUILTIN_NAMES {
            interner.intern(name);
        }
        interner
    }

    /// Interns `s`, returning the existing symbol if it was seen before.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.symbols.get(s) {
            return sym;
        }

        let sym = Symbol::new(self.strings.len() as u32);
        self.strings.push(s.into());
        self.symbols.insert(s.into(), sym);
        sym
    }

    /// Returns the symbol for `s` without interning it.
    #[must_use]
    pub fn get(&self, s: &str) -> Option<Symbol> {
        self.symbols.get(s).copied()
    }

    /// Resolves a symbol to its string, or `None` for a foreign symbol.
    #[must_use]
    pub fn resolve(&self, sym: Symbol) -> Option<&str> {
        self.strings.get(sym.as_usize()).map(|s| &**s)
    }

    /// Resolves a symbol, falling back to `"?"` for a foreign symbol.
    ///
    /// Used when rendering diagnostics, where a missing name must not turn
    /// one error into another.
    #[must_use]
    pub fn name(&self, sym: Symbol) -> &str {
        self.resolve(sym).unwrap_or("?")
    }

    /// Number of interned strings, builtins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the builtin names are interned on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
