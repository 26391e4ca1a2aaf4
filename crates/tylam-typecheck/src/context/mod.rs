//! Inference state that outlives a single rule.
//!
//! - **TypeArena**: variable supply and union-find bindings of one run
//! - **Substitution**: ordered bindings for the substitution-passing solver
//! - **TypeEnv**: scoped identifier-to-scheme map, plus the builtin prelude

pub mod arena;
pub mod env;
pub mod subst;

pub use arena::TypeArena;
pub use env::{Scheme, TypeEnv};
pub use subst::Substitution;
