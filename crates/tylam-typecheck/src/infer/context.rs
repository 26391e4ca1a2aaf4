//! Per-run inference context.
//!
//! Bundles the environment, the solver and the recursion bound the driver
//! threads through every rule.

use crate::context::{Scheme, TypeEnv};
use crate::error::{Result, TypeError};
use crate::infer::{Solver, instantiate};
use crate::types::{Ty, TyVar};
use tylam_mem::{StringInterner, Symbol};
use tylam_syntax::Span;

/// Main inference context.
pub struct Context<'a, S: Solver> {
    /// String interner (shared with whoever built the tree)
    pub interner: &'a StringInterner,

    /// Type environment (symbol table)
    pub env: TypeEnv,

    /// Variable supply and bindings of this run
    pub solver: S,

    max_depth: usize,
    /// Spans of the currently open nodes, innermost last
    open: Vec<Span>,
}

impl<'a, S: Solver> Context<'a, S> {
    /// Creates a context for one run.
    pub fn new(interner: &'a StringInterner, env: TypeEnv, solver: S, max_depth: usize) -> Self {
        Self {
            interner,
            env,
            solver,
            max_depth,
            open: Vec::new(),
        }
    }

    /// Allocates a fresh type variable.
    ///
    /// # Errors
    ///
    /// `VariableSupplyExhausted` once every id has been issued.
    pub fn fresh_var(&mut self) -> Result<Ty> {
        self.ensure_supply(1)?;
        Ok(self.solver.fresh_var())
    }

    /// Instantiates `scheme` with fresh variables.
    ///
    /// # Errors
    ///
    /// `VariableSupplyExhausted` if too few ids are left.
    pub fn instantiate(&mut self, scheme: &Scheme) -> Result<Ty> {
        self.ensure_supply(scheme.vars.len())?;
        Ok(instantiate(&mut self.solver, scheme))
    }

    fn ensure_supply(&self, needed: usize) -> Result<()> {
        let last = self.solver.next_var() + needed as u64;
        if needed > 0 && last > u64::from(TyVar::MAX) + 1 {
            return Err(TypeError::VariableSupplyExhausted {
                span: self.current_span(),
            });
        }
        Ok(())
    }

    /// Unifies two types.
    pub fn unify(&mut self, a: &Ty, b: &Ty, span: Span) -> Result<()> {
        self.solver.unify(a, b, span)
    }

    /// Substitutes every binding made so far into `ty`.
    pub fn resolve(&self, ty: &Ty) -> Ty {
        self.solver.resolve(ty)
    }

    /// Binds `name` in the innermost scope.
    pub fn bind(&mut self, name: Symbol, scheme: Scheme) {
        self.env.bind(name, scheme);
    }

    /// Runs `f` in a new scope, popping it whatever `f` returns.
    pub fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.env.new_scope();
        let result = f(self);
        self.env.pop_scope();
        result
    }

    /// Records entry into a nested node.
    ///
    /// # Errors
    ///
    /// `RecursionLimit` once `max_depth` nodes are already open.
    pub fn enter(&mut self, span: Span) -> Result<()> {
        if self.open.len() >= self.max_depth {
            return Err(TypeError::RecursionLimit {
                limit: self.max_depth,
                span,
            });
        }
        self.open.push(span);
        Ok(())
    }

    /// Records exit from a node opened with [`enter`](Self::enter).
    pub fn leave(&mut self) {
        self.open.pop();
    }

    /// Number of currently open nodes.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Span of the innermost open node.
    pub fn current_span(&self) -> Span {
        self.open.last().copied().unwrap_or(Span::DUMMY)
    }

    /// Name of `sym` for diagnostics.
    pub fn name(&self, sym: Symbol) -> String {
        self.interner.name(sym).to_string()
    }
}
