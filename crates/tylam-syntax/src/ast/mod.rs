//! Abstract syntax tree consumed by inference.
//!
//! # Modules
//!
//! - [`expr`] - Expression nodes, let/where bindings and match cases
//! - [`pat`] - Pattern nodes used by match cases

pub mod expr;
pub mod pat;

pub use expr::{Binding, Expr, ExprKind, MatchCase};
pub use pat::Pattern;
