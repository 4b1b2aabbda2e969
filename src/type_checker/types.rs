use std::fmt::Display;

use crate::{
    ast::types::TypeExpr,
    errors::errors::{Error, ErrorImpl},
};

/// Semantic types. Two types are compatible only when they are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Bool,
    Unit,
    Function { params: Vec<Type>, result: Box<Type> },
}

impl Type {
    pub fn function(params: Vec<Type>, result: Type) -> Type {
        Type::Function {
            params,
            result: Box::new(result),
        }
    }

    /// Builds the type an annotation denotes.
    ///
    /// The parser only accepts the simple names `Int`, `Bool` and `Unit`, so
    /// any other name comes from a hand-built tree and is an internal error.
    pub fn from_type_expr(type_expr: &TypeExpr) -> Result<Type, Error> {
        match type_expr {
            TypeExpr::Simple { name, span } => match name.as_str() {
                "Int" => Ok(Type::Int),
                "Bool" => Ok(Type::Bool),
                "Unit" => Ok(Type::Unit),
                _ => Err(Error::new(
                    ErrorImpl::UnknownType {
                        type_: name.clone(),
                    },
                    span.start.clone(),
                )),
            },
            TypeExpr::Function { params, result, .. } => Ok(Type::Function {
                params: params
                    .iter()
                    .map(Type::from_type_expr)
                    .collect::<Result<Vec<Type>, Error>>()?,
                result: Box::new(Type::from_type_expr(result)?),
            }),
        }
    }
}

pub fn display_type_list(types: &[Type]) -> String {
    types
        .iter()
        .map(|ty| ty.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "Int"),
            Type::Bool => write!(f, "Bool"),
            Type::Unit => write!(f, "Unit"),
            Type::Function { params, result } => {
                write!(f, "({}) => {}", display_type_list(params), result)
            }
        }
    }
}
