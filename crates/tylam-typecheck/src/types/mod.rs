//! Type representation.
//!
//! - **Ty**: monotypes, i.e. type variables and constructor applications
//! - **Display**: rendering for error messages and test output

pub mod display;
pub mod ty;

pub use display::{DisplayScheme, DisplayTy};
pub use ty::{Ty, TyVar};
