//! Identifier storage for the `tylam` type checker.
//!
//! - [`Symbol`]: a copyable handle to an interned identifier
//! - [`StringInterner`]: the identifier table, pre-seeded with the builtin
//!   type constructor names listed in [`sym`]

pub mod interner;
pub mod symbol;

pub use interner::StringInterner;
pub use symbol::{Symbol, sym};
