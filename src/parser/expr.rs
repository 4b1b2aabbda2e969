use crate::{
    ast::ast::{BinaryOperator, Expr, ExprKind, Identifier, LiteralValue, UnaryOperator},
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, NUD_LOOKUP},
    parser::Parser,
};

/// Parses a full expression: a binary expression, optionally followed by
/// `=` and another full expression. Assignment is therefore the loosest
/// construct and nests to the right.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_binary_expr(parser, BindingPower::Or)?;

    if parser.current_token().is("=") {
        parse_assignment_expr(parser, left)
    } else {
        Ok(left)
    }
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    parser.expect("=")?;
    let right = parse_expr(parser)?;
    let span = left.span.to(&right.span);

    Ok(Expr::new(
        ExprKind::Assignment {
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    ))
}

/// Parses both operands one level tighter than `bp`, then keeps folding
/// operators of exactly this level into a left-leaning tree.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    if bp == BindingPower::Unary {
        return parse_primary_expr(parser);
    }

    let mut left = parse_binary_expr(parser, bp.next())?;

    while parser.current_token().is_one_of(bp.operators()) {
        let operator_token = parser.current_token().clone();
        let Some(operator) = BinaryOperator::from_text(&operator_token.text) else {
            return Err(parser.unexpected(Expected::OneOf(
                bp.operators().iter().map(|op| op.to_string()).collect(),
            )));
        };
        parser.advance();

        let right = parse_binary_expr(parser, bp.next())?;
        let span = left.span.to(&right.span);

        left = Expr::new(
            ExprKind::BinaryOp {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            },
            span,
        );
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    if token.kind != TokenKind::End {
        if let Some(handler) = NUD_LOOKUP.get(token.text.as_str()) {
            return handler(parser);
        }
    }

    match token.kind {
        TokenKind::IntLiteral => {
            let value = token.text.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.text.clone(),
                    },
                    token.location().clone(),
                )
            })?;
            parser.advance();

            Ok(Expr::new(
                ExprKind::Literal {
                    value: LiteralValue::Int(value),
                },
                token.span,
            ))
        }
        TokenKind::BoolLiteral => {
            parser.advance();
            Ok(Expr::new(
                ExprKind::Literal {
                    value: LiteralValue::Bool(token.text == "true"),
                },
                token.span,
            ))
        }
        TokenKind::Identifier if !token.is_reserved() => {
            let identifier = parse_identifier(parser)?;

            if parser.current_token().is("(") {
                parse_call_expr(parser, identifier)
            } else {
                Ok(Expr::new(
                    ExprKind::Identifier {
                        name: identifier.name,
                    },
                    identifier.span,
                ))
            }
        }
        _ => Err(parser.unexpected(Expected::Description(String::from(
            "an integer literal, a boolean literal, an identifier or a parenthesized expression",
        )))),
    }
}

/// Consumes a name. Keywords are not names.
pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.current_token();

    if token.kind != TokenKind::Identifier || token.is_reserved() {
        return Err(parser.unexpected(Expected::Description(String::from("an identifier"))));
    }

    let token = parser.advance().clone();
    Ok(Identifier {
        name: token.text,
        span: token.span,
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let Some(operator) = UnaryOperator::from_text(&operator_token.text) else {
        return Err(parser.unexpected(Expected::OneOf(vec![
            String::from("-"),
            String::from("not"),
        ])));
    };
    parser.advance();

    let operand = parse_binary_expr(parser, BindingPower::Unary)?;
    let span = operator_token.span.to(&operand.span);

    Ok(Expr::new(
        ExprKind::UnaryOp {
            operator,
            operand: Box::new(operand),
        },
        span,
    ))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect("(")?;
    let expr = parse_expr(parser)?;
    parser.expect(")")?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, callee: Identifier) -> Result<Expr, Error> {
    parser.expect("(")?;

    let mut arguments = vec![];

    if !parser.current_token().is(")") {
        arguments.push(parse_expr(parser)?);

        while parser.current_token().is(",") {
            parser.advance();
            arguments.push(parse_expr(parser)?);
        }
    }

    if !parser.current_token().is(")") {
        return Err(parser.unexpected(Expected::OneOf(vec![
            String::from(","),
            String::from(")"),
        ])));
    }
    let span = callee.span.to(&parser.advance().span);

    Ok(Expr::new(ExprKind::FunctionCall { callee, arguments }, span))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect("if")?.span;

    let condition = parse_expr(parser)?;
    parser.expect("then")?;
    let then_branch = parse_expr(parser)?;

    let else_branch = if parser.current_token().is("else") {
        parser.advance();
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    let end = match &else_branch {
        Some(else_branch) => else_branch.span.clone(),
        None => then_branch.span.clone(),
    };

    Ok(Expr::new(
        ExprKind::IfThenElse {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch,
        },
        start.to(&end),
    ))
}

pub fn parse_loop_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect("while")?.span;

    let condition = parse_expr(parser)?;
    parser.expect("do")?;
    let body = parse_expr(parser)?;
    let span = start.to(&body.span);

    Ok(Expr::new(
        ExprKind::Loop {
            condition: Box::new(condition),
            body: Box::new(body),
        },
        span,
    ))
}
