//! Type annotation syntax.
//!
//! Annotations are only ever written on `var` declarations. The parser
//! stores them as written; the type checker turns them into semantic types.

use std::fmt::Display;

use crate::Span;

/// Names accepted as simple type annotations.
pub const SIMPLE_TYPE_NAMES: [&str; 3] = ["Int", "Bool", "Unit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Simple {
        name: String,
        span: Span,
    },
    Function {
        params: Vec<TypeExpr>,
        result: Box<TypeExpr>,
        span: Span,
    },
}

impl TypeExpr {
    pub fn get_span(&self) -> &Span {
        match self {
            TypeExpr::Simple { span, .. } => span,
            TypeExpr::Function { span, .. } => span,
        }
    }

    /// Compares two annotations ignoring source locations.
    pub fn same_shape(&self, other: &TypeExpr) -> bool {
        match (self, other) {
            (TypeExpr::Simple { name: a, .. }, TypeExpr::Simple { name: b, .. }) => a == b,
            (
                TypeExpr::Function { params: p1, result: r1, .. },
                TypeExpr::Function { params: p2, result: r2, .. },
            ) => {
                p1.len() == p2.len()
                    && p1.iter().zip(p2.iter()).all(|(a, b)| a.same_shape(b))
                    && r1.same_shape(r2)
            }
            _ => false,
        }
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExpr::Simple { name, .. } => write!(f, "{}", name),
            TypeExpr::Function { params, result, .. } => {
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ") => {}", result)
            }
        }
    }
}
