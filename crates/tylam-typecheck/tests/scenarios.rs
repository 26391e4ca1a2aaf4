//! End-to-end inference over small programs.
//!
//! Every test runs under both formulations.

mod common;

use common::{FORMULATIONS, Fixture};
use pretty_assertions::assert_eq;
use tylam_syntax::Span;
use tylam_syntax::ast::{Expr, MatchCase, Pattern};
use tylam_typecheck::{InferConfig, Ty, TypeError};

#[test]
fn test_identity_is_polymorphic() {
    let mut fx = Fixture::new();
    let id = fx.identity();
    for formulation in FORMULATIONS {
        assert_eq!(fx.render(formulation, &id).unwrap(), "forall a. a -> a");
    }
}

#[test]
fn test_applied_identity() {
    let mut fx = Fixture::new();
    // (\x. x) 5
    let id = fx.identity();
    let expr = Expr::apply(id, Expr::int(5));
    for formulation in FORMULATIONS {
        assert_eq!(fx.infer(formulation, &expr), Ok(Ty::int()));
    }
}

#[test]
fn test_where_bound_identity() {
    let mut fx = Fixture::new();

    // f 5 where f = \x. x
    let id = fx.identity();
    let use_once = fx.call("f", [Expr::int(5)]);
    let once = fx.where_("f", id, use_once);

    // f (f 5) where f = \x. x
    let id = fx.identity();
    let inner = fx.call("f", [Expr::int(5)]);
    let use_twice = fx.call("f", [inner]);
    let twice = fx.where_("f", id, use_twice);

    for formulation in FORMULATIONS {
        assert_eq!(fx.infer(formulation, &once), Ok(Ty::int()));
        assert_eq!(fx.infer(formulation, &twice), Ok(Ty::int()));
    }
}

#[test]
fn test_where_bound_identity_used_at_two_types() {
    let mut fx = Fixture::new();

    // cons (f 5) (f []) where f = \x. x
    let id = fx.identity();
    let head = fx.call("f", [Expr::int(5)]);
    let tail = fx.call("f", [Expr::list(vec![])]);
    let body = fx.call("cons", [head, tail]);
    let expr = fx.where_("f", id, body);

    for formulation in FORMULATIONS {
        assert_eq!(fx.render(formulation, &expr).unwrap(), "list int");
    }
}

#[test]
fn test_applying_an_integer() {
    let fx = Fixture::new();
    let span = Span::new(0, 3, 1, 1, 1, 4);
    // 5 3
    let expr = Expr::apply(Expr::int(5), Expr::int(3)).with_span(span);

    for formulation in FORMULATIONS {
        let err = fx.infer(formulation, &expr).unwrap_err();
        match err {
            TypeError::ConstructorMismatch {
                expected,
                found,
                span: at,
                ..
            } => {
                assert_eq!(expected, "int");
                assert_eq!(found, "->");
                assert_eq!(at, span);
            }
            other => panic!("expected a constructor mismatch, got {other:?}"),
        }
    }
}

#[test]
fn test_unbound_name() {
    let mut fx = Fixture::new();
    let expr = fx.var("undefined_name");
    for formulation in FORMULATIONS {
        assert_eq!(
            fx.infer(formulation, &expr),
            Err(TypeError::UnboundVariable {
                name: "undefined_name".into(),
                span: Span::DUMMY,
            })
        );
    }
}

#[test]
fn test_recursive_factorial() {
    let mut fx = Fixture::new();
    let fact = fx.factorial();
    for formulation in FORMULATIONS {
        assert_eq!(fx.render(formulation, &fact).unwrap(), "int -> int");
    }
}

#[test]
fn test_self_application_fails_occurs_check() {
    let mut fx = Fixture::new();
    // \x. x x
    let x1 = fx.var("x");
    let x2 = fx.var("x");
    let expr = fx.lam("x", Expr::apply(x1, x2));

    for formulation in FORMULATIONS {
        let err = fx.infer(formulation, &expr).unwrap_err();
        assert_eq!(err.description(), "occurs check");
    }
}

#[test]
fn test_recursive_match_function() {
    let mut fx = Fixture::new();
    let length = fx.length();
    for formulation in FORMULATIONS {
        assert_eq!(
            fx.render(formulation, &length).unwrap(),
            "forall a. list a -> int"
        );
    }
}

#[test]
fn test_length_applied_to_a_list() {
    let mut fx = Fixture::new();
    let length = fx.length();
    let t = fx.var("true");
    let expr = Expr::apply(length, Expr::list(vec![t]));
    for formulation in FORMULATIONS {
        assert_eq!(fx.infer(formulation, &expr), Ok(Ty::int()));
    }
}

#[test]
fn test_match_cases_must_agree() {
    let mut fx = Fixture::new();
    // | 0 -> true | [] -> false
    let t = fx.var("true");
    let f = fx.var("false");
    let expr = Expr::match_function(vec![
        MatchCase::new(Pattern::int(0), t),
        MatchCase::new(Pattern::list(vec![], None), f),
    ]);
    for formulation in FORMULATIONS {
        let err = fx.infer(formulation, &expr).unwrap_err();
        assert_eq!(err.description(), "constructor mismatch");
    }
}

#[test]
fn test_duplicate_pattern_binding() {
    let mut fx = Fixture::new();
    // [x, x] -> x
    let first = fx.pvar("x");
    let second = fx.pvar("x");
    let body = fx.var("x");
    let expr = Expr::match_case(Pattern::list(vec![first, second], None), body);
    for formulation in FORMULATIONS {
        assert_eq!(
            fx.infer(formulation, &expr),
            Err(TypeError::DuplicateBinding {
                name: "x".into(),
                span: Span::DUMMY,
            })
        );
    }
}

#[test]
fn test_shadowing_rebinds_name() {
    let mut fx = Fixture::new();
    // \x. \x. x
    let x = fx.var("x");
    let inner = fx.lam("x", x);
    let expr = fx.lam("x", inner);
    for formulation in FORMULATIONS {
        assert_eq!(fx.render(formulation, &expr).unwrap(), "forall a b. a -> b -> b");
    }
}

#[test]
fn test_recursion_limit() {
    let fx = Fixture::new();
    let mut expr = Expr::int(0);
    for _ in 0..10 {
        expr = Expr::list(vec![expr]);
    }

    for formulation in FORMULATIONS {
        let shallow = fx.checker_with(
            InferConfig::default()
                .with_formulation(formulation)
                .with_max_depth(5),
        );
        assert_eq!(
            shallow.infer(&expr),
            Err(TypeError::RecursionLimit {
                limit: 5,
                span: Span::DUMMY,
            })
        );

        let deep = fx.checker(formulation);
        assert!(deep.infer(&expr).is_ok());
    }
}

#[test]
fn test_error_message_has_location() {
    let mut fx = Fixture::new();
    let span = Span::new(10, 13, 2, 5, 2, 8);
    let sym = fx.sym("foo");
    let expr = Expr::var(sym).with_span(span);

    let err = fx.infer(common::FORMULATIONS[0], &expr).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("2:5"), "{message}");
    assert!(message.contains("foo"), "{message}");
}
