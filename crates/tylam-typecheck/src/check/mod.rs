//! Typing rules.
//!
//! - Expressions, including `where` bindings and match functions
//! - Patterns of match cases

pub mod expr;
pub mod pat;

pub use expr::synth;
pub use pat::{bind_pattern, synth_pat};
