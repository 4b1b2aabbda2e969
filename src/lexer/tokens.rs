use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::{Position, Span};

lazy_static! {
    /// Words that lex as something other than a plain identifier.
    pub static ref WORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::BoolLiteral);
        map.insert("false", TokenKind::BoolLiteral);
        map.insert("and", TokenKind::Operator);
        map.insert("or", TokenKind::Operator);
        map.insert("not", TokenKind::Operator);
        map
    };

    /// Keywords. They lex as identifiers but can never name a variable.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("then");
        set.insert("else");
        set.insert("while");
        set.insert("do");
        set.insert("var");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntLiteral,
    BoolLiteral,
    Operator,
    Punctuation,
    End,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::IntLiteral => "int_literal",
            TokenKind::BoolLiteral => "bool_literal",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::End => "end",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.text, self.span.start)
    }
}

impl Token {
    /// The synthetic token closing every stream. It sits on the location of
    /// the token before it, or nowhere if there is none.
    pub fn end(previous: Option<&Token>) -> Token {
        let position = previous
            .map(|token| token.span.start.clone())
            .unwrap_or_else(Position::null);

        Token {
            kind: TokenKind::End,
            text: String::new(),
            span: Span {
                start: position.clone(),
                end: position,
            },
        }
    }

    pub fn location(&self) -> &Position {
        &self.span.start
    }

    pub fn is(&self, text: &str) -> bool {
        self.kind != TokenKind::End && self.text == text
    }

    pub fn is_one_of(&self, texts: &[&str]) -> bool {
        texts.iter().any(|text| self.is(text))
    }

    pub fn is_reserved(&self) -> bool {
        self.kind == TokenKind::Identifier && RESERVED_WORDS.contains(self.text.as_str())
    }
}
