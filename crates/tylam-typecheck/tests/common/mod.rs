// Common test utilities for integration tests
//
// Builds small programs over the prelude and runs them through either
// formulation.

#![allow(dead_code)]

use tylam_mem::{StringInterner, Symbol};
use tylam_syntax::ast::{Expr, MatchCase, Pattern};
use tylam_typecheck::{Formulation, InferConfig, Result, Scheme, Ty, TypeChecker, TypeEnv};

/// Both unifier formulations, in a fixed order.
pub const FORMULATIONS: [Formulation; 2] = [Formulation::UnionFind, Formulation::Substitution];

/// Interner plus the prelude environment built over it.
pub struct Fixture {
    pub interner: StringInterner,
    pub env: TypeEnv,
}

impl Fixture {
    pub fn new() -> Self {
        let mut interner = StringInterner::new();
        let env = TypeEnv::prelude(&mut interner);
        Self { interner, env }
    }

    /// Interns `name`.
    pub fn sym(&mut self, name: &str) -> Symbol {
        self.interner.intern(name)
    }

    /// A variable reference to `name`.
    pub fn var(&mut self, name: &str) -> Expr {
        Expr::var(self.sym(name))
    }

    /// `\param. body`
    pub fn lam(&mut self, param: &str, body: Expr) -> Expr {
        Expr::function(self.sym(param), body)
    }

    /// `func args...`
    pub fn call(&mut self, func: &str, args: impl IntoIterator<Item = Expr>) -> Expr {
        let func = self.var(func);
        Expr::apply_n(func, args)
    }

    /// `body where name = value`
    pub fn where_(&mut self, name: &str, value: Expr, body: Expr) -> Expr {
        Expr::where_(self.sym(name), value, body)
    }

    pub fn pvar(&mut self, name: &str) -> Pattern {
        Pattern::var(self.sym(name))
    }

    pub fn checker(&self, formulation: Formulation) -> TypeChecker<'_> {
        self.checker_with(InferConfig::default().with_formulation(formulation))
    }

    pub fn checker_with(&self, config: InferConfig) -> TypeChecker<'_> {
        TypeChecker::new(&self.interner)
            .with_env(self.env.clone())
            .with_config(config)
    }

    pub fn infer(&self, formulation: Formulation, expr: &Expr) -> Result<Ty> {
        self.checker(formulation).infer(expr)
    }

    pub fn scheme(&self, formulation: Formulation, expr: &Expr) -> Result<Scheme> {
        self.checker(formulation).infer_scheme(expr)
    }

    /// Rendered principal scheme of `expr`, e.g. `forall a. a -> a`.
    pub fn render(&self, formulation: Formulation, expr: &Expr) -> Result<String> {
        let scheme = self.scheme(formulation, expr)?;
        Ok(scheme.display(&self.interner).to_string())
    }

    /// `fact where fact = \n. if (n == 0) 1 (n * fact (n - 1))`
    pub fn factorial(&mut self) -> Expr {
        let n = self.var("n");
        let zero_test = self.call("==", [n, Expr::int(0)]);
        let n = self.var("n");
        let pred = self.call("-", [n, Expr::int(1)]);
        let recurse = self.call("fact", [pred]);
        let n = self.var("n");
        let product = self.call("*", [n, recurse]);
        let body = self.call("if", [zero_test, Expr::int(1), product]);
        let value = self.lam("n", body);
        let fact = self.var("fact");
        self.where_("fact", value, fact)
    }

    /// `length where length = | [] -> 0 | [_, ..rest] -> 1 + length rest`
    pub fn length(&mut self) -> Expr {
        let empty = MatchCase::new(Pattern::list(vec![], None), Expr::int(0));

        let rest = self.pvar("rest");
        let cons = Pattern::list(vec![Pattern::wildcard()], Some(rest));
        let rest = self.var("rest");
        let tail_len = self.call("length", [rest]);
        let sum = self.call("+", [Expr::int(1), tail_len]);
        let step = MatchCase::new(cons, sum);

        let value = Expr::match_function(vec![empty, step]);
        let length = self.var("length");
        self.where_("length", value, length)
    }

    /// `\x. x`
    pub fn identity(&mut self) -> Expr {
        let x = self.var("x");
        self.lam("x", x)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
