//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser is a recursive descent over the binding power levels in
//! `lookups`, with one token of lookahead and one token of look-behind
//! (the statement boundary rule after a closing `}`).

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::ast::{Expr, ExprKind, LiteralValue},
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always closed by an `End` token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A stream that is not already closed by an `End` token gets one, so
    /// lookahead past the last real token always lands on `End`.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::End) {
            let end = Token::end(tokens.last());
            tokens.push(end);
        }

        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing. Past the end of the
    /// stream this keeps returning the `End` token.
    pub fn current_token(&self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token.
    pub fn previous_token(&self) -> Option<&Token> {
        if self.pos == 0 {
            None
        } else {
            self.tokens.get((self.pos - 1).min(self.tokens.len() - 1))
        }
    }

    /// Advances to the next token and returns the one just consumed.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        let index = (self.pos - 1).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Consumes the current token if its text is `expected`.
    pub fn expect(&mut self, expected: &str) -> Result<Token, Error> {
        if self.current_token().is(expected) {
            Ok(self.advance().clone())
        } else {
            Err(self.unexpected(Expected::Literal(String::from(expected))))
        }
    }

    /// True when the last consumed token was a closing `}` and the current
    /// token does not already end the statement. A statement boundary is
    /// assumed between the two.
    pub fn follows_closing_curly(&self) -> bool {
        self.previous_is("}") && !self.current_token().is_one_of(&[";", "}"])
    }

    pub fn previous_is(&self, text: &str) -> bool {
        self.previous_token()
            .map(|token| token.is(text))
            .unwrap_or(false)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::End
    }

    /// Builds a syntax error for the current token.
    pub fn unexpected(&self, expected: Expected) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: token.text.clone(),
                kind: token.kind,
            },
            token.location().clone(),
        )
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }
}

/// The `Unit` literal standing in for a missing result expression.
pub fn implicit_unit(span: Span) -> Expr {
    Expr::new(
        ExprKind::Literal {
            value: LiteralValue::Unit,
        },
        span,
    )
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// The program is a sequence of statements, each ended by `;` or by a
/// closing `}`. A single statement is returned as is; several are wrapped in
/// a block whose result is `Unit`. A program that is one expression with no
/// terminator at all is also accepted.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens, file);
    debug!(file = %parser.get_file(), tokens = parser.tokens.len(), "parsing");

    let mut statements = vec![];

    while parser.has_tokens() {
        let stmt = parse_stmt(&mut parser)?;

        if parser.current_token().is(";") {
            parser.advance();
            statements.push(stmt);
        } else if parser.previous_is("}") {
            statements.push(stmt);
        } else if statements.is_empty() && !parser.has_tokens() {
            debug!(root = %stmt, "parsed single expression");
            return Ok(stmt);
        } else {
            return Err(parser.unexpected(Expected::Literal(String::from(";"))));
        }
    }

    let ast = match statements.len() {
        0 => return Err(parser.unexpected(Expected::Description(String::from("an expression")))),
        1 => statements.remove(0),
        _ => {
            let span = statements[0].span.to(&statements[statements.len() - 1].span);
            let end = parser.current_token().span.clone();
            Expr::new(
                ExprKind::Block {
                    statements,
                    result: Box::new(implicit_unit(end)),
                },
                span,
            )
        }
    };

    debug!(root = %ast, "parsed program");
    Ok(ast)
}
