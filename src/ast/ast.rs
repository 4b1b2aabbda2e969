use std::fmt::Display;

use crate::Span;

use super::types::TypeExpr;

/// Literal values. A `Unit` literal is never written in source; the parser
/// creates one for blocks ending in `;` and for multi-statement programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
    Int(i64),
    Bool(bool),
    Unit,
}

/// Binary Operators
///
/// Every operator except `==` and `!=` is typed through the function
/// signature bound to its text in the scope chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Or,
    And,
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    pub fn from_text(text: &str) -> Option<Self> {
        let operator = match text {
            "or" => BinaryOperator::Or,
            "and" => BinaryOperator::And,
            "==" => BinaryOperator::Equals,
            "!=" => BinaryOperator::NotEquals,
            "<" => BinaryOperator::Less,
            "<=" => BinaryOperator::LessEquals,
            ">" => BinaryOperator::Greater,
            ">=" => BinaryOperator::GreaterEquals,
            "+" => BinaryOperator::Plus,
            "-" => BinaryOperator::Minus,
            "*" => BinaryOperator::Multiply,
            "/" => BinaryOperator::Divide,
            "%" => BinaryOperator::Modulo,
            _ => return None,
        };
        Some(operator)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Or => "or",
            BinaryOperator::And => "and",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }

    /// `==` and `!=` accept any two operands of the same type.
    pub fn is_equality(&self) -> bool {
        matches!(self, BinaryOperator::Equals | BinaryOperator::NotEquals)
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl UnaryOperator {
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "-" => Some(UnaryOperator::Negate),
            "not" => Some(UnaryOperator::Not),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Not => "not",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A name together with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Expression Kinds
///
/// The language has no statements: blocks, loops and declarations are all
/// expressions. Passes match on this enum exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Literal {
        value: LiteralValue,
    },
    Identifier {
        name: String,
    },
    BinaryOp {
        left: Box<Expr>,
        operator: BinaryOperator,
        right: Box<Expr>,
    },
    UnaryOp {
        operator: UnaryOperator,
        operand: Box<Expr>,
    },
    IfThenElse {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    Loop {
        condition: Box<Expr>,
        body: Box<Expr>,
    },
    Block {
        statements: Vec<Expr>,
        result: Box<Expr>,
    },
    VarDec {
        name: Identifier,
        value: Box<Expr>,
        declared_type: Option<TypeExpr>,
    },
    Assignment {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    FunctionCall {
        callee: Identifier,
        arguments: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// Compares two trees ignoring source locations.
    pub fn same_shape(&self, other: &Expr) -> bool {
        match (&self.kind, &other.kind) {
            (ExprKind::Literal { value: a }, ExprKind::Literal { value: b }) => a == b,
            (ExprKind::Identifier { name: a }, ExprKind::Identifier { name: b }) => a == b,
            (
                ExprKind::BinaryOp { left: l1, operator: o1, right: r1 },
                ExprKind::BinaryOp { left: l2, operator: o2, right: r2 },
            ) => o1 == o2 && l1.same_shape(l2) && r1.same_shape(r2),
            (
                ExprKind::UnaryOp { operator: o1, operand: e1 },
                ExprKind::UnaryOp { operator: o2, operand: e2 },
            ) => o1 == o2 && e1.same_shape(e2),
            (
                ExprKind::IfThenElse { condition: c1, then_branch: t1, else_branch: e1 },
                ExprKind::IfThenElse { condition: c2, then_branch: t2, else_branch: e2 },
            ) => {
                c1.same_shape(c2)
                    && t1.same_shape(t2)
                    && match (e1, e2) {
                        (Some(e1), Some(e2)) => e1.same_shape(e2),
                        (None, None) => true,
                        _ => false,
                    }
            }
            (
                ExprKind::Loop { condition: c1, body: b1 },
                ExprKind::Loop { condition: c2, body: b2 },
            ) => c1.same_shape(c2) && b1.same_shape(b2),
            (
                ExprKind::Block { statements: s1, result: r1 },
                ExprKind::Block { statements: s2, result: r2 },
            ) => {
                s1.len() == s2.len()
                    && s1.iter().zip(s2.iter()).all(|(a, b)| a.same_shape(b))
                    && r1.same_shape(r2)
            }
            (
                ExprKind::VarDec { name: n1, value: v1, declared_type: t1 },
                ExprKind::VarDec { name: n2, value: v2, declared_type: t2 },
            ) => {
                n1.name == n2.name
                    && v1.same_shape(v2)
                    && match (t1, t2) {
                        (Some(t1), Some(t2)) => t1.same_shape(t2),
                        (None, None) => true,
                        _ => false,
                    }
            }
            (
                ExprKind::Assignment { left: l1, right: r1 },
                ExprKind::Assignment { left: l2, right: r2 },
            ) => l1.same_shape(l2) && r1.same_shape(r2),
            (
                ExprKind::FunctionCall { callee: c1, arguments: a1 },
                ExprKind::FunctionCall { callee: c2, arguments: a2 },
            ) => {
                c1.name == c2.name
                    && a1.len() == a2.len()
                    && a1.iter().zip(a2.iter()).all(|(a, b)| a.same_shape(b))
            }
            _ => false,
        }
    }
}

/// Compact s-expression rendering, e.g. `(+ 2 (* 3 4))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExprKind::Literal { value } => match value {
                LiteralValue::Int(value) => write!(f, "{}", value),
                LiteralValue::Bool(value) => write!(f, "{}", value),
                LiteralValue::Unit => write!(f, "unit"),
            },
            ExprKind::Identifier { name } => write!(f, "{}", name),
            ExprKind::BinaryOp { left, operator, right } => {
                write!(f, "({} {} {})", operator, left, right)
            }
            ExprKind::UnaryOp { operator, operand } => write!(f, "({} {})", operator, operand),
            ExprKind::IfThenElse { condition, then_branch, else_branch } => match else_branch {
                Some(else_branch) => {
                    write!(f, "(if {} {} {})", condition, then_branch, else_branch)
                }
                None => write!(f, "(if {} {})", condition, then_branch),
            },
            ExprKind::Loop { condition, body } => write!(f, "(while {} {})", condition, body),
            ExprKind::Block { statements, result } => {
                write!(f, "{{")?;
                for statement in statements {
                    write!(f, "{}; ", statement)?;
                }
                write!(f, "{}}}", result)
            }
            ExprKind::VarDec { name, value, declared_type } => match declared_type {
                Some(declared_type) => {
                    write!(f, "(var {}: {} {})", name.name, declared_type, value)
                }
                None => write!(f, "(var {} {})", name.name, value),
            },
            ExprKind::Assignment { left, right } => write!(f, "(= {} {})", left, right),
            ExprKind::FunctionCall { callee, arguments } => {
                write!(f, "({}", callee.name)?;
                for argument in arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
