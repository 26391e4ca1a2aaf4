//! Type inference engine.
//!
//! Hindley-Milner inference with two interchangeable solvers behind the
//! [`Solver`] trait.

pub mod context;
pub mod generalize;
pub mod solver;
pub mod unify;

pub use context::Context;
pub use generalize::{generalize, instantiate};
pub use solver::{SubstSolver, Solver};
pub use unify::{Unifier, unify_subst};
