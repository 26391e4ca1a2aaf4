//! Pattern typing.
//!
//! Identifiers bound by a pattern get fresh monotypes; patterns are never a
//! site of polymorphism. The pattern's own type is then inferred with those
//! bindings in scope.

use crate::check::expr::synth_var;
use crate::context::Scheme;
use crate::error::{Result, TypeError};
use crate::infer::{Context, Solver};
use crate::types::Ty;
use fxhash::FxHashSet;
use tylam_syntax::Spanned;
use tylam_syntax::ast::Pattern;

/// Binds every identifier of `pattern` to a fresh monotype in the innermost
/// scope.
///
/// # Errors
///
/// `DuplicateBinding` if an identifier appears twice.
pub fn bind_pattern<S: Solver>(ctx: &mut Context<'_, S>, pattern: &Pattern) -> Result<()> {
    let mut seen = FxHashSet::default();
    for (name, span) in pattern.bindings() {
        if !seen.insert(name) {
            return Err(TypeError::DuplicateBinding {
                name: ctx.name(name),
                span,
            });
        }
        let ty = ctx.fresh_var()?;
        ctx.bind(name, Scheme::mono(ty));
    }
    Ok(())
}

/// Infers the type of values `pattern` matches.
///
/// Must run after [`bind_pattern`] in the same scope. Identifiers are read
/// back from the environment, so skipping that step reports the pattern's
/// own identifiers as `UnboundVariable`, or silently picks up an outer
/// binding of the same name.
///
/// # Errors
///
/// Any unification error between list elements.
pub fn synth_pat<S: Solver>(ctx: &mut Context<'_, S>, pattern: &Pattern) -> Result<Ty> {
    ctx.enter(pattern.span())?;
    let ty = synth_pat_kind(ctx, pattern);
    ctx.leave();
    ty
}

fn synth_pat_kind<S: Solver>(ctx: &mut Context<'_, S>, pattern: &Pattern) -> Result<Ty> {
    match pattern {
        Pattern::Wildcard { .. } => ctx.fresh_var(),

        // bound to a monotype by `bind_pattern`
        Pattern::Variable { name, span } => synth_var(ctx, *name, *span),

        Pattern::Int { .. } => Ok(Ty::int()),

        Pattern::List { elements, rest, .. } => {
            let elem = ctx.fresh_var()?;
            for element in elements {
                let element_ty = synth_pat(ctx, element)?;
                ctx.unify(&elem, &element_ty, element.span())?;
            }

            let list = Ty::list(elem);
            if let Some(rest) = rest {
                let rest_ty = synth_pat(ctx, rest)?;
                ctx.unify(&list, &rest_ty, rest.span())?;
            }
            Ok(list)
        }
    }
}
