//! Type annotation parsing.
//!
//! Annotations are either one of the simple type names or a function type
//! `(T1, T2, ...) => R`. Function types nest on both sides.

use crate::{
    ast::types::{TypeExpr, SIMPLE_TYPE_NAMES},
    errors::errors::{Error, Expected},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<TypeExpr, Error> {
    if parser.current_token().is("(") {
        return parse_function_type(parser);
    }

    let token = parser.current_token();
    if token.kind == TokenKind::Identifier && SIMPLE_TYPE_NAMES.contains(&token.text.as_str()) {
        let token = parser.advance().clone();
        return Ok(TypeExpr::Simple {
            name: token.text,
            span: token.span,
        });
    }

    let mut expected: Vec<String> = SIMPLE_TYPE_NAMES.iter().map(|name| name.to_string()).collect();
    expected.push(String::from("("));
    Err(parser.unexpected(Expected::OneOf(expected)))
}

pub fn parse_function_type(parser: &mut Parser) -> Result<TypeExpr, Error> {
    let start = parser.expect("(")?.span;

    let mut params = vec![parse_type(parser)?];
    while parser.current_token().is(",") {
        parser.advance();
        params.push(parse_type(parser)?);
    }

    if !parser.current_token().is(")") {
        return Err(parser.unexpected(Expected::OneOf(vec![
            String::from(","),
            String::from(")"),
        ])));
    }
    parser.advance();

    parser.expect("=>")?;
    let result = parse_type(parser)?;
    let span = start.to(result.get_span());

    Ok(TypeExpr::Function {
        params,
        result: Box::new(result),
        span,
    })
}
