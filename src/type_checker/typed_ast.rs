//! Typed Abstract Syntax Tree definitions.
//!
//! The type checker never touches the parser's tree. It builds this parallel
//! tree instead, with the same variants and every node carrying its type.
//! This is the tree an evaluator consumes.

use crate::{
    ast::ast::{BinaryOperator, Identifier, LiteralValue, UnaryOperator},
    Span,
};

use super::types::Type;

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExprKind {
    Literal {
        value: LiteralValue,
    },
    Identifier {
        name: String,
    },
    BinaryOp {
        left: Box<TypedExpr>,
        operator: BinaryOperator,
        right: Box<TypedExpr>,
    },
    UnaryOp {
        operator: UnaryOperator,
        operand: Box<TypedExpr>,
    },
    IfThenElse {
        condition: Box<TypedExpr>,
        then_branch: Box<TypedExpr>,
        else_branch: Option<Box<TypedExpr>>,
    },
    Loop {
        condition: Box<TypedExpr>,
        body: Box<TypedExpr>,
    },
    Block {
        statements: Vec<TypedExpr>,
        result: Box<TypedExpr>,
    },
    VarDec {
        name: Identifier,
        value: Box<TypedExpr>,
        declared_type: Option<Type>,
    },
    Assignment {
        left: Box<TypedExpr>,
        right: Box<TypedExpr>,
    },
    FunctionCall {
        callee: Identifier,
        arguments: Vec<TypedExpr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr {
    pub kind: TypedExprKind,
    pub span: Span,
    pub ty: Type,
}

impl TypedExpr {
    pub fn new(kind: TypedExprKind, span: Span, ty: Type) -> Self {
        TypedExpr { kind, span, ty }
    }

    pub fn get_type(&self) -> &Type {
        &self.ty
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}
