use tracing::trace;

use crate::{
    ast::ast::{Expr, ExprKind},
    errors::errors::{Error, ErrorImpl, Expected},
};

use super::{
    expr::{parse_expr, parse_identifier},
    parser::{implicit_unit, Parser},
    types::parse_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token().is("var") {
        return parse_var_decl_stmt(parser);
    }

    parse_expr(parser)
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect("var")?.span;
    let name = parse_identifier(parser)?;

    let declared_type = if parser.current_token().is(":") {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    parser.expect("=")?;
    let value = parse_expr(parser)?;
    let span = start.to(&value.span);

    Ok(Expr::new(
        ExprKind::VarDec {
            name,
            value: Box::new(value),
            declared_type,
        },
        span,
    ))
}

/// Parses `{ stmt; stmt; result }`.
///
/// A `;` right before the closing `}` gives the block an implicit `Unit`
/// result. After a statement that itself ended in `}` the `;` may be left
/// out, so `{ if c then {a} b }` reads as `{ if c then {a}; b }`.
pub fn parse_block_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect("{")?.span;
    let mut statements = vec![];

    let result = loop {
        if parser.current_token().is("}") {
            break implicit_unit(parser.current_token().span.clone());
        }

        let stmt = parse_stmt(parser)?;

        if parser.current_token().is(";") {
            parser.advance();
            statements.push(stmt);
        } else if parser.follows_closing_curly() {
            trace!(after = %stmt, "statement boundary after closing brace");
            statements.push(stmt);
        } else if let ExprKind::VarDec { .. } = stmt.kind {
            return Err(Error::new(
                ErrorImpl::VarDeclAsResult,
                stmt.span.start.clone(),
            ));
        } else {
            break stmt;
        }
    };

    if !parser.current_token().is("}") {
        return Err(parser.unexpected(Expected::OneOf(vec![
            String::from(";"),
            String::from("}"),
        ])));
    }
    let span = start.to(&parser.advance().span);

    Ok(Expr::new(
        ExprKind::Block {
            statements,
            result: Box::new(result),
        },
        span,
    ))
}
