//! Expression typing rules.
//!
//! One rule per node kind. Children are inferred eagerly, depth first and
//! left to right; the first error aborts the whole run.

use crate::check::pat::{bind_pattern, synth_pat};
use crate::context::Scheme;
use crate::error::{Result, TypeError};
use crate::infer::{Context, Solver, generalize};
use crate::types::Ty;
use tylam_log::debug;
use tylam_mem::Symbol;
use tylam_syntax::Span;
use tylam_syntax::ast::{Binding, Expr, ExprKind, MatchCase};

/// Infers the type of `expr`.
///
/// The returned type may still mention variables bound in the solver; use
/// [`Context::resolve`] to read it back.
///
/// # Errors
///
/// The first [`TypeError`] met anywhere in the tree.
pub fn synth<S: Solver>(ctx: &mut Context<'_, S>, expr: &Expr) -> Result<Ty> {
    ctx.enter(expr.span)?;
    let ty = synth_kind(ctx, expr);
    ctx.leave();
    ty
}

fn synth_kind<S: Solver>(ctx: &mut Context<'_, S>, expr: &Expr) -> Result<Ty> {
    match &expr.kind {
        ExprKind::Var(name) => synth_var(ctx, *name, expr.span),

        ExprKind::Int(_) => Ok(Ty::int()),

        ExprKind::Function { param, body } => {
            let param_ty = ctx.fresh_var()?;
            let body_ty = ctx.scoped(|ctx| {
                ctx.bind(*param, Scheme::mono(param_ty.clone()));
                synth(ctx, body)
            })?;
            Ok(Ty::arrow(param_ty, body_ty))
        }

        ExprKind::Apply { func, arg } => {
            let func_ty = synth(ctx, func)?;
            let arg_ty = synth(ctx, arg)?;
            let result = ctx.fresh_var()?;
            ctx.unify(&func_ty, &Ty::arrow(arg_ty, result.clone()), expr.span)?;
            Ok(result)
        }

        ExprKind::Where { binding, body } => synth_where(ctx, binding, body),

        ExprKind::MatchCase(case) => synth_case(ctx, case),

        ExprKind::MatchFunction(cases) => {
            let result = ctx.fresh_var()?;
            for case in cases {
                let case_ty = synth_case(ctx, case)?;
                ctx.unify(&result, &case_ty, case.span)?;
            }
            Ok(result)
        }

        ExprKind::List(items) => {
            let elem = ctx.fresh_var()?;
            for item in items {
                let item_ty = synth(ctx, item)?;
                ctx.unify(&elem, &item_ty, item.span)?;
            }
            Ok(Ty::list(elem))
        }
    }
}

/// Instantiates the scheme bound to `name`.
pub(crate) fn synth_var<S: Solver>(
    ctx: &mut Context<'_, S>,
    name: Symbol,
    span: Span,
) -> Result<Ty> {
    match ctx.env.lookup(name).cloned() {
        Some(scheme) => ctx.instantiate(&scheme),
        None => Err(TypeError::UnboundVariable {
            name: ctx.name(name),
            span,
        }),
    }
}

/// `body where name = value`
///
/// A function-like `value` may refer to `name`: a placeholder variable is
/// bound while `value` is inferred and unified with the result afterwards.
/// The value's type is generalized against the enclosing environment before
/// `body` sees it.
fn synth_where<S: Solver>(
    ctx: &mut Context<'_, S>,
    binding: &Binding,
    body: &Expr,
) -> Result<Ty> {
    let name = binding.name;

    let value_ty = if binding.value.is_function_like() {
        let placeholder = ctx.fresh_var()?;
        let value_ty = ctx.scoped(|ctx| {
            ctx.bind(name, Scheme::mono(placeholder.clone()));
            synth(ctx, &binding.value)
        })?;
        ctx.unify(&placeholder, &value_ty, binding.span)?;
        value_ty
    } else {
        synth(ctx, &binding.value)?
    };

    let scheme = generalize(&ctx.solver, &ctx.env, &value_ty);
    debug!(
        "`{}` : {}",
        ctx.interner.name(name),
        scheme.display(ctx.interner)
    );

    ctx.scoped(|ctx| {
        ctx.bind(name, scheme);
        synth(ctx, body)
    })
}

/// `pattern -> body`, typed as a function from the pattern's type to the
/// body's type.
fn synth_case<S: Solver>(ctx: &mut Context<'_, S>, case: &MatchCase) -> Result<Ty> {
    ctx.scoped(|ctx| {
        bind_pattern(ctx, &case.pattern)?;
        let pat_ty = synth_pat(ctx, &case.pattern)?;
        let body_ty = synth(ctx, &case.body)?;
        Ok(Ty::arrow(pat_ty, body_ty))
    })
}
