//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Operator precedence and associativity
//! - Blocks, implicit results and the boundary after `}`
//! - Variable declarations and type annotations
//! - Calls, conditionals and loops
//! - Syntax errors

use std::rc::Rc;

use super::parser::parse;
use crate::{
    ast::ast::{Expr, ExprKind, LiteralValue},
    errors::errors::{Error, ErrorImpl, ErrorKind, Expected},
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string()));
    parse(tokens, Rc::new("test.lang".to_string()))
}

fn parse_to_string(source: &str) -> String {
    parse_source(source).unwrap().to_string()
}

#[test]
fn test_left_associative_chains() {
    assert_eq!(parse_to_string("1 - 2 - 3;"), "(- (- 1 2) 3)");
    assert_eq!(parse_to_string("8 / 4 % 3 * 2;"), "(* (% (/ 8 4) 3) 2)");
    assert_eq!(parse_to_string("a or b or c;"), "(or (or a b) c)");
    assert_eq!(parse_to_string("a == b != c;"), "(!= (== a b) c)");
}

#[test]
fn test_precedence_levels() {
    assert_eq!(parse_to_string("2+3*4;"), "(+ 2 (* 3 4))");
    assert_eq!(
        parse_to_string("a or b and c == d < e + f * g;"),
        "(or a (and b (== c (< d (+ e (* f g))))))"
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(parse_to_string("(1+2)/4;"), "(/ (+ 1 2) 4)");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(parse_to_string("a=b=c"), "(= a (= b c))");
    assert_eq!(
        parse_to_string("a = 1 == 2 and 3 < 4;"),
        "(= a (and (== 1 2) (< 3 4)))"
    );
}

#[test]
fn test_unary_operators() {
    assert_eq!(parse_to_string("--45;"), "(- (- 45))");
    assert_eq!(parse_to_string("not not b;"), "(not (not b))");
    assert_eq!(parse_to_string("-a * b;"), "(* (- a) b)");
    assert_eq!(parse_to_string("1 - -2;"), "(- 1 (- 2))");
}

#[test]
fn test_block_result() {
    assert_eq!(parse_to_string("{a; b}"), "{a; b}");
    assert_eq!(parse_to_string("{a}"), "{a}");
}

#[test]
fn test_block_implicit_unit_after_semicolon() {
    let ast = parse_source("{a; b;}").unwrap();
    let ExprKind::Block { statements, result } = ast.kind else {
        panic!("expected a block");
    };

    assert_eq!(statements.len(), 2);
    assert_eq!(
        result.kind,
        ExprKind::Literal {
            value: LiteralValue::Unit
        }
    );
    assert_eq!(result.span.start.column, 7);
}

#[test]
fn test_empty_block() {
    assert_eq!(parse_to_string("{}"), "{unit}");
}

#[test]
fn test_boundary_after_closing_curly() {
    let with_semicolon = parse_source("{ if c then {a}; b }").unwrap();
    let without_semicolon = parse_source("{ if c then {a} b }").unwrap();

    assert!(with_semicolon.same_shape(&without_semicolon));
    assert_eq!(without_semicolon.to_string(), "{(if c {a}); b}");
}

#[test]
fn test_nested_block_as_result() {
    assert_eq!(parse_to_string("{ {a} }"), "{{a}}");
}

#[test]
fn test_var_declaration_as_block_result() {
    let err = parse_source("{ var x = 1 }").unwrap_err();

    assert_eq!(err.get_error(), &ErrorImpl::VarDeclAsResult);
    assert_eq!(err.get_position().column, 3);
}

#[test]
fn test_var_declarations() {
    assert_eq!(parse_to_string("{var x = 3; x}"), "{(var x 3); x}");
    assert_eq!(parse_to_string("var x: Int = 3;"), "(var x: Int 3)");
    assert_eq!(
        parse_to_string("var f: (Int, Bool) => Unit = g;"),
        "(var f: (Int, Bool) => Unit g)"
    );
    assert_eq!(
        parse_to_string("var f: ((Int) => Int) => Bool = g;"),
        "(var f: ((Int) => Int) => Bool g)"
    );
}

#[test]
fn test_bad_type_annotation() {
    let err = parse_source("var x: Str = 3;").unwrap_err();

    match err.get_error() {
        ErrorImpl::UnexpectedToken { expected, found, .. } => {
            assert_eq!(
                expected,
                &Expected::OneOf(vec![
                    "Int".to_string(),
                    "Bool".to_string(),
                    "Unit".to_string(),
                    "(".to_string()
                ])
            );
            assert_eq!(found, "Str");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_reserved_word_as_name() {
    let err = parse_source("var if = 3;").unwrap_err();
    assert_eq!(err.get_error_kind(), ErrorKind::Syntax);
}

#[test]
fn test_function_calls() {
    assert_eq!(parse_to_string("f();"), "(f)");
    assert_eq!(parse_to_string("f(1, a+b, g(c));"), "(f 1 (+ a b) (g c))");
    assert!(parse_source("f(1, 2;").is_err());
}

#[test]
fn test_if_then_else() {
    assert_eq!(parse_to_string("if a then b else c;"), "(if a b c)");
    assert_eq!(parse_to_string("if a then b;"), "(if a b)");
    assert_eq!(
        parse_to_string("1 + if a then 2 else 3;"),
        "(+ 1 (if a 2 3))"
    );
}

#[test]
fn test_while_loop() {
    assert_eq!(
        parse_to_string("while x do {x = x - 1;}"),
        "(while x {(= x (- x 1)); unit})"
    );
}

#[test]
fn test_top_level_statements() {
    assert_eq!(parse_to_string("a; b;"), "{a; b; unit}");
    assert_eq!(parse_to_string("{a} {b}"), "{{a}; {b}; unit}");
    assert_eq!(parse_to_string("x;"), "x");
}

#[test]
fn test_missing_terminator() {
    let err = parse_source("a; b").unwrap_err();

    match err.get_error() {
        ErrorImpl::UnexpectedToken { expected, .. } => {
            assert_eq!(expected, &Expected::Literal(";".to_string()))
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_garbage_at_end() {
    let err = parse_source("a + b c").unwrap_err();

    assert_eq!(err.get_error_kind(), ErrorKind::Syntax);
    assert_eq!(err.get_position().column, 7);
}

#[test]
fn test_unclosed_parenthesis() {
    let err = parse_source("(1 + 2;").unwrap_err();

    match err.get_error() {
        ErrorImpl::UnexpectedToken { expected, found, .. } => {
            assert_eq!(expected, &Expected::Literal(")".to_string()));
            assert_eq!(found, ";");
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.get_position().column, 7);
}

#[test]
fn test_empty_input() {
    assert!(parse_source("").is_err());
    assert!(parse_source("// only a comment").is_err());
}

#[test]
fn test_number_too_large() {
    let err = parse_source("99999999999999999999;").unwrap_err();

    assert_eq!(
        err.get_error(),
        &ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string()
        }
    );
}

#[test]
fn test_parse_is_deterministic() {
    let source = "{ var x: Int = 1; while x < 10 do { x = x + 1; } if x == 10 then {print_int(x)} x }";

    assert_eq!(parse_source(source).unwrap(), parse_source(source).unwrap());
}
