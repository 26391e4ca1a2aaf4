//! `tylam` type checker: Hindley-Milner inference for a small lambda calculus.
//!
//! This crate provides:
//! - Type representation and rendering ([`types`])
//! - Union-find arena, substitutions and the scoped environment ([`context`])
//! - Unification, generalization and instantiation ([`infer`])
//! - Typing rules for expressions and patterns ([`check`])
//!
//! Inference comes in two formulations, union-find and
//! substitution-passing, selected by [`InferConfig::formulation`]. They
//! agree on every result.
//!
//! # Example
//!
//! ```
//! use tylam_mem::StringInterner;
//! use tylam_syntax::ast::Expr;
//! use tylam_typecheck::TypeChecker;
//!
//! let mut interner = StringInterner::new();
//! let x = interner.intern("x");
//!
//! let checker = TypeChecker::new(&interner);
//! let scheme = checker.infer_scheme(&Expr::function(x, Expr::var(x))).unwrap();
//! assert_eq!(scheme.display(&interner).to_string(), "forall a. a -> a");
//! ```

#![warn(missing_docs)]

pub mod check;
pub mod config;
pub mod context;
pub mod error;
pub mod infer;
pub mod types;

pub use config::{Formulation, InferConfig};
pub use context::{Scheme, TypeEnv};
pub use error::{Result, TypeError};
pub use types::{Ty, TyVar};

use crate::infer::{Context, Solver, SubstSolver, Unifier, generalize};
use tylam_log::debug;
use tylam_mem::StringInterner;
use tylam_syntax::ast::Expr;

/// Entry point: infers types of whole expressions.
///
/// Every call runs with its own solver and variable supply over a copy of
/// the checker's environment, so a checker can be shared between threads.
#[derive(Debug, Clone)]
pub struct TypeChecker<'a> {
    interner: &'a StringInterner,
    env: TypeEnv,
    config: InferConfig,
}

impl<'a> TypeChecker<'a> {
    /// Creates a checker with an empty environment and default settings.
    #[must_use]
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            env: TypeEnv::new(),
            config: InferConfig::default(),
        }
    }

    /// Replaces the environment, e.g. with [`TypeEnv::prelude`].
    #[must_use]
    pub fn with_env(mut self, env: TypeEnv) -> Self {
        self.env = env;
        self
    }

    /// Replaces the settings.
    #[must_use]
    pub fn with_config(mut self, config: InferConfig) -> Self {
        self.config = config;
        self
    }

    /// The environment every run starts from.
    #[must_use]
    pub fn env(&self) -> &TypeEnv {
        &self.env
    }

    /// The current settings.
    #[must_use]
    pub fn config(&self) -> &InferConfig {
        &self.config
    }

    /// Infers the type of `expr`, fully resolved.
    ///
    /// Variables left in the result are unconstrained.
    ///
    /// # Errors
    ///
    /// The first [`TypeError`] met.
    pub fn infer(&self, expr: &Expr) -> Result<Ty> {
        let base = self.supply_base(expr)?;
        match self.config.formulation {
            Formulation::UnionFind => {
                self.infer_with(Unifier::with_reserved(self.interner, base), expr)
            }
            Formulation::Substitution => {
                self.infer_with(SubstSolver::with_reserved(self.interner, base), expr)
            }
        }
    }

    /// Infers the principal type scheme of `expr`, generalized over the
    /// checker's environment and alpha-renamed to canonical form.
    ///
    /// # Errors
    ///
    /// The first [`TypeError`] met.
    pub fn infer_scheme(&self, expr: &Expr) -> Result<Scheme> {
        let base = self.supply_base(expr)?;
        match self.config.formulation {
            Formulation::UnionFind => {
                self.infer_scheme_with(Unifier::with_reserved(self.interner, base), expr)
            }
            Formulation::Substitution => {
                self.infer_scheme_with(SubstSolver::with_reserved(self.interner, base), expr)
            }
        }
    }

    /// [`infer`](Self::infer) with a caller-supplied solver.
    ///
    /// The solver must not issue variables free in the environment; see
    /// [`TypeEnv::var_watermark`].
    ///
    /// # Errors
    ///
    /// The first [`TypeError`] met.
    pub fn infer_with<S: Solver>(&self, solver: S, expr: &Expr) -> Result<Ty> {
        let (ty, ctx) = self.run(solver, expr)?;
        Ok(ctx.resolve(&ty))
    }

    /// [`infer_scheme`](Self::infer_scheme) with a caller-supplied solver.
    ///
    /// # Errors
    ///
    /// The first [`TypeError`] met.
    pub fn infer_scheme_with<S: Solver>(&self, solver: S, expr: &Expr) -> Result<Scheme> {
        let (ty, ctx) = self.run(solver, expr)?;
        Ok(generalize(&ctx.solver, &ctx.env, &ty).canonical())
    }

    fn supply_base(&self, expr: &Expr) -> Result<TyVar> {
        self.env
            .var_watermark()
            .ok_or(TypeError::VariableSupplyExhausted { span: expr.span })
    }

    fn run<S: Solver>(&self, solver: S, expr: &Expr) -> Result<(Ty, Context<'a, S>)> {
        let mut ctx = Context::new(
            self.interner,
            self.env.clone(),
            solver,
            self.config.max_depth,
        );
        let result = check::synth(&mut ctx, expr);
        match &result {
            Ok(ty) => debug!(
                "{}: {} with next variable ?{}",
                self.config.formulation,
                ctx.resolve(ty).display(self.interner),
                ctx.solver.next_var()
            ),
            Err(err) => debug!("{}: failed: {}", self.config.formulation, err),
        }
        Ok((result?, ctx))
    }
}
