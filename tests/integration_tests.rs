//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenization, parsing and type
//! checking, the way the driver does.

use std::{collections::HashMap, rc::Rc, thread};

use exprc::{
    ast::ast::{Expr, ExprKind},
    errors::errors::{Error, ErrorImpl, ErrorKind},
    format_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::{
        scope::SymbolTable,
        type_checker::type_check,
        typed_ast::{TypedExpr, TypedExprKind},
        types::Type,
    },
};

fn parse_source(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string()));
    parse(tokens, Rc::new("test.lang".to_string()))
}

fn run(source: &str) -> Result<TypedExpr, Error> {
    let ast = parse_source(source)?;
    type_check(&ast, None)
}

#[test]
fn test_arithmetic_program() {
    let ast = parse_source("2+3*4;").unwrap();
    assert_eq!(ast.to_string(), "(+ 2 (* 3 4))");

    let typed = type_check(&ast, None).unwrap();
    assert_eq!(typed.ty, Type::Int);

    let TypedExprKind::BinaryOp { right, .. } = &typed.kind else {
        panic!("expected a binary operation");
    };
    assert_eq!(right.ty, Type::Int);
}

#[test]
fn test_block_with_declaration() {
    let typed = run("{var x=3; x=5; 23}").unwrap();
    assert_eq!(typed.ty, Type::Int);

    let err = run("{var x=3; x=5; 23}; x;").unwrap_err();
    assert_eq!(
        err.get_error(),
        &ErrorImpl::VariableNotDefined {
            variable: "x".to_string()
        }
    );
}

#[test]
fn test_branch_mismatch() {
    let err = run("if true then 3 else false;").unwrap_err();
    assert_eq!(err.get_error_kind(), ErrorKind::Semantic);
}

#[test]
fn test_loop_condition_must_be_bool() {
    let err = run("while 23 do {print_int(23);}").unwrap_err();
    assert_eq!(err.get_error_kind(), ErrorKind::Semantic);
    assert_eq!(err.get_position().line, 1);
    assert_eq!(err.get_position().column, 7);
}

#[test]
fn test_assignment_chain_in_empty_scope() {
    let ast = parse_source("a=b=c").unwrap();

    let ExprKind::Assignment { right, .. } = &ast.kind else {
        panic!("expected an assignment");
    };
    assert!(matches!(right.kind, ExprKind::Assignment { .. }));

    let base = HashMap::new();
    let err = type_check(&ast, Some(SymbolTable::new(&base))).unwrap_err();
    assert!(err.to_string().contains("not declared"));
    assert!(err.to_string().contains("\"a\""));
}

#[test]
fn test_shadowing_program() {
    let source = "
        var x = 1;
        {
            var x = true;
            if x then print_bool(x) else print_bool(false)
        }
        x = x + 1;
        print_int(x);
    ";
    let typed = run(source).unwrap();
    assert_eq!(typed.ty, Type::Unit);
}

#[test]
fn test_loop_program() {
    let source = "
        // count down
        var n: Int = 10;
        var total = 0;
        while n > 0 do {
            total = total + n;
            n = n - 1;
        }
        print_int(total);
    ";
    assert_eq!(run(source).unwrap().ty, Type::Unit);
}

#[test]
fn test_syntax_error_report() {
    let source = "var x = 1;\nvar y = (x + ;\n";
    let err = run(source).unwrap_err();

    assert_eq!(err.get_error_kind(), ErrorKind::Syntax);
    assert_eq!(err.get_position().line, 2);
    assert_eq!(err.get_position().column, 14);

    let report = format_error(&err, source);
    let lines: Vec<&str> = report.lines().collect();
    assert!(lines[0].starts_with("Error: UnexpectedToken"));
    assert_eq!(lines[1], "-> test.lang:2:14");
    assert_eq!(lines[3], "2 | var y = (x + ;");
}

#[test]
fn test_independent_runs_on_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let source = format!("{{var x = {}; x * 2}}", i);
                run(&source).map(|typed| typed.ty).map_err(|err| err.to_string())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(Type::Int));
    }
}
