use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::TokenKind,
    type_checker::types::{display_type_list, Type},
    Position,
};

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The token stream does not match the grammar.
    Syntax,
    /// The tree is well formed but violates a typing or scoping rule.
    Semantic,
    /// The tree handed to a pass is one the parser never produces.
    Internal,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Semantic => write!(f, "semantic error"),
            ErrorKind::Internal => write!(f, "internal error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::VarDeclAsResult => ErrorKind::Syntax,
            ErrorImpl::VariableNotDefined { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::OperandTypeMatchError { .. }
            | ErrorImpl::ConditionTypeError { .. }
            | ErrorImpl::BranchTypeMatchError { .. }
            | ErrorImpl::NotAFunction { .. } => ErrorKind::Semantic,
            ErrorImpl::UnknownType { .. } => ErrorKind::Internal,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::VarDeclAsResult => "VarDeclAsResult",
            ErrorImpl::VariableNotDefined { .. } => "VariableNotDefined",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::OperandTypeMatchError { .. } => "OperandTypeMatchError",
            ErrorImpl::ConditionTypeError { .. } => "ConditionTypeError",
            ErrorImpl::BranchTypeMatchError { .. } => "BranchTypeMatchError",
            ErrorImpl::NotAFunction { .. } => "NotAFunction",
            ErrorImpl::UnknownType { .. } => "UnknownType",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, kind, .. } if *kind == TokenKind::End => {
                ErrorTip::Suggestion(format!(
                    "Input ended early{}, is something missing?",
                    if found.is_empty() { String::new() } else { format!(" after `{}`", found) }
                ))
            }
            ErrorImpl::UnexpectedToken { expected, found, .. } => ErrorTip::Suggestion(format!(
                "Expected {}, found `{}`",
                expected, found
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::VarDeclAsResult => ErrorTip::Suggestion(String::from(
                "A block cannot end in a variable declaration, add a result expression after it",
            )),
            ErrorImpl::VariableNotDefined { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` is not defined", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Declare `{}` with `var` before assigning to it",
                variable
            )),
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::OperandTypeMatchError {
                operator,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` expects `{}`, received `{}`",
                operator,
                display_type_list(expected),
                display_type_list(received)
            )),
            ErrorImpl::ConditionTypeError { .. } => ErrorTip::None,
            ErrorImpl::BranchTypeMatchError { .. } => ErrorTip::Suggestion(String::from(
                "Both branches of an `if` with an `else` must have the same type",
            )),
            ErrorImpl::NotAFunction { name, .. } => {
                ErrorTip::Suggestion(format!("`{}` cannot be called", name))
            }
            ErrorImpl::UnknownType { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// What the parser was looking for when it hit an unexpected token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Literal(String),
    OneOf(Vec<String>),
    Description(String),
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Literal(text) => write!(f, "\"{}\"", text),
            Expected::OneOf(options) => write!(
                f,
                "one of: {}",
                options
                    .iter()
                    .map(|option| format!("\"{}\"", option))
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            Expected::Description(description) => write!(f, "{}", description),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected}, found {kind} {found:?}")]
    UnexpectedToken {
        expected: Expected,
        found: String,
        kind: TokenKind,
    },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("a variable declaration cannot be the result of a block")]
    VarDeclAsResult,
    #[error("variable {variable:?} not defined")]
    VariableNotDefined { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMatchError { expected: Type, received: Type },
    #[error(
        "operand types do not match for {:?}: expected {}, received {}",
        .operator,
        display_type_list(.expected),
        display_type_list(.received)
    )]
    OperandTypeMatchError {
        operator: String,
        expected: Vec<Type>,
        received: Vec<Type>,
    },
    #[error("{construct} condition must be Bool, received {received}")]
    ConditionTypeError { construct: String, received: Type },
    #[error("if branches do not match: then is {then_type}, else is {else_type}")]
    BranchTypeMatchError { then_type: Type, else_type: Type },
    #[error("{name:?} is not a function: its type is {found}")]
    NotAFunction { name: String, found: Type },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
}
