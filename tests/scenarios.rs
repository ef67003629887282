//! End-to-end scenario table, one test per row of the scenario table: lex,
//! parse, optimize to a fixpoint, evaluate, and check the final value (or
//! check that parsing fails with the expected diagnostic).

use cam::construct::value::Value;
use cam::{evaluate, lex, optimize, parse, CamError};

fn run(source: &str) -> Value {
    let ast = parse(lex(source).unwrap()).unwrap();
    evaluate(&optimize(ast)).unwrap()
}

fn parse_err(source: &str) -> CamError {
    parse(lex(source).unwrap()).unwrap_err()
}

#[test]
fn scenario_1_bare_literal() {
    assert_eq!(run("1"), Value::EInt(1));
}

#[test]
fn scenario_2_sum() {
    assert_eq!(run("(+ 1 2)"), Value::EInt(3));
}

#[test]
fn scenario_3_identity_application() {
    assert_eq!(run("((lambda (x) x) 42)"), Value::EInt(42));
}

#[test]
fn scenario_4_application_with_sum_body() {
    assert_eq!(run("((lambda (x) (+ x 2)) 1)"), Value::EInt(3));
}

#[test]
fn scenario_5_two_argument_application() {
    assert_eq!(run("((lambda (x y) (+ x y)) 3 4)"), Value::EInt(7));
}

#[test]
fn scenario_6_operator_must_be_an_abstraction() {
    // `(f 5)` in operator position: `f` is a bare variable, not a
    // syntactic abstraction, so this is a parse error, not a runtime one.
    let err = parse_err("((lambda (f) (f 5)) (lambda (y) (+ y 1)))");
    assert_eq!(err.to_string(), "Unexpected token: f.");
}

#[test]
fn scenario_7_unbound_variable() {
    let err = parse_err("((lambda (x) y) 1)");
    assert_eq!(err.to_string(), "Unbound variable: y.");
}

#[test]
fn scenario_4_optimizer_drops_app_and_cur() {
    fn contains_app_or_cur(ast: &cam::construct::tree::Ast) -> bool {
        use cam::construct::tree::Ast;
        match ast {
            Ast::App | Ast::Cur(_) => true,
            Ast::Pair(f, g) => contains_app_or_cur(f) || contains_app_or_cur(g),
            Ast::Comp(terms) => terms.iter().any(contains_app_or_cur),
            _ => false,
        }
    }

    let ast = parse(lex("((lambda (x) (+ x 2)) 1)").unwrap()).unwrap();
    let optimized = optimize(ast);
    assert!(!contains_app_or_cur(&optimized));
    assert_eq!(evaluate(&optimized).unwrap(), Value::EInt(3));
}

#[test]
fn additional_programs_from_the_surface_syntax_examples() {
    assert_eq!(run("((lambda (x y) (+ x y 3)) 1 2)"), Value::EInt(6));
}

#[test]
fn lexer_failure_surfaces_through_lex_then_parse() {
    let err = lex("((lambda (x) x) $)").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected token: $.");
}

#[test]
fn truncated_input_is_unexpected_end_of_input() {
    let err = parse_err("(+ 1");
    assert_eq!(err.to_string(), "Unexpected end of input.");
}

#[test]
fn plus_overflow_surfaces_as_a_diagnostic_not_a_panic() {
    let ast = parse(lex("(+ 18446744073709551615 1)").unwrap()).unwrap();
    let err = evaluate(&optimize(ast)).unwrap_err();
    assert_eq!(err.to_string(), "Arithmetic overflow: 18446744073709551615 + 1.");
}
