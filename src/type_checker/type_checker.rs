use tracing::debug;

use crate::{
    ast::{
        ast::{BinaryOperator, Expr, ExprKind, Identifier, LiteralValue, UnaryOperator},
        types::TypeExpr,
    },
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::{
    scope::SymbolTable,
    typed_ast::{TypedExpr, TypedExprKind},
    types::Type,
};

#[derive(Debug)]
pub struct TypeChecker<'a> {
    pub symbols: SymbolTable<'a>,
}

impl<'a> TypeChecker<'a> {
    pub fn new(symbols: SymbolTable<'a>) -> Self {
        TypeChecker { symbols }
    }

    /// Opens a frame, runs `check` in it and closes the frame again, also
    /// when `check` fails.
    fn scoped<T>(
        &mut self,
        check: impl FnOnce(&mut TypeChecker<'a>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.symbols.push_scope();
        let result = check(self);
        self.symbols.pop_scope();
        result
    }
}

/// Type checks a whole program and returns its typed tree.
///
/// `symbols` replaces the default table of builtin signatures. Checking stops
/// at the first error.
pub fn type_check(ast: &Expr, symbols: Option<SymbolTable>) -> Result<TypedExpr, Error> {
    let symbols = match symbols {
        Some(symbols) => symbols,
        None => SymbolTable::with_builtins(),
    };
    let mut type_checker = TypeChecker::new(symbols);
    debug!(root = %ast, "type checking");

    let typed = type_check_expr(&mut type_checker, ast)?;

    debug!(ty = %typed.ty, "type checked program");
    Ok(typed)
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Result<TypedExpr, Error> {
    let span = ast.span.clone();

    match &ast.kind {
        ExprKind::Literal { value } => {
            let ty = match value {
                LiteralValue::Int(_) => Type::Int,
                LiteralValue::Bool(_) => Type::Bool,
                LiteralValue::Unit => Type::Unit,
            };
            Ok(TypedExpr::new(TypedExprKind::Literal { value: *value }, span, ty))
        }
        ExprKind::Identifier { name } => {
            let Some(ty) = type_checker.symbols.lookup(name).cloned() else {
                return Err(Error::new(
                    ErrorImpl::VariableNotDefined {
                        variable: name.clone(),
                    },
                    span.start.clone(),
                ));
            };
            Ok(TypedExpr::new(
                TypedExprKind::Identifier { name: name.clone() },
                span,
                ty,
            ))
        }
        ExprKind::BinaryOp {
            left,
            operator,
            right,
        } => type_check_binary(type_checker, left, *operator, right, span),
        ExprKind::UnaryOp { operator, operand } => {
            type_check_unary(type_checker, *operator, operand, span)
        }
        ExprKind::IfThenElse {
            condition,
            then_branch,
            else_branch,
        } => {
            let condition = type_check_condition(type_checker, condition, "if")?;
            let then_branch = type_check_expr(type_checker, then_branch)?;

            let else_branch = match else_branch {
                Some(else_branch) => {
                    let else_branch = type_check_expr(type_checker, else_branch)?;
                    if else_branch.ty != then_branch.ty {
                        return Err(Error::new(
                            ErrorImpl::BranchTypeMatchError {
                                then_type: then_branch.ty.clone(),
                                else_type: else_branch.ty.clone(),
                            },
                            else_branch.span.start.clone(),
                        ));
                    }
                    Some(Box::new(else_branch))
                }
                None => None,
            };

            let ty = then_branch.ty.clone();
            Ok(TypedExpr::new(
                TypedExprKind::IfThenElse {
                    condition: Box::new(condition),
                    then_branch: Box::new(then_branch),
                    else_branch,
                },
                span,
                ty,
            ))
        }
        ExprKind::Loop { condition, body } => {
            let condition = type_check_condition(type_checker, condition, "while")?;
            let body = type_check_expr(type_checker, body)?;

            Ok(TypedExpr::new(
                TypedExprKind::Loop {
                    condition: Box::new(condition),
                    body: Box::new(body),
                },
                span,
                Type::Unit,
            ))
        }
        ExprKind::Block { statements, result } => type_checker.scoped(|type_checker| {
            let statements = statements
                .iter()
                .map(|statement| type_check_expr(type_checker, statement))
                .collect::<Result<Vec<TypedExpr>, Error>>()?;
            let result = type_check_expr(type_checker, result)?;

            let ty = result.ty.clone();
            Ok(TypedExpr::new(
                TypedExprKind::Block {
                    statements,
                    result: Box::new(result),
                },
                span,
                ty,
            ))
        }),
        ExprKind::VarDec {
            name,
            value,
            declared_type,
        } => type_check_var_dec(type_checker, name, value, declared_type.as_ref(), span),
        ExprKind::Assignment { left, right } => {
            type_check_assignment(type_checker, left, right, span)
        }
        ExprKind::FunctionCall { callee, arguments } => {
            type_check_call(type_checker, callee, arguments, span)
        }
    }
}

fn type_check_condition(
    type_checker: &mut TypeChecker,
    condition: &Expr,
    construct: &str,
) -> Result<TypedExpr, Error> {
    let condition = type_check_expr(type_checker, condition)?;

    if condition.ty != Type::Bool {
        return Err(Error::new(
            ErrorImpl::ConditionTypeError {
                construct: construct.to_string(),
                received: condition.ty.clone(),
            },
            condition.span.start.clone(),
        ));
    }

    Ok(condition)
}

fn type_check_binary(
    type_checker: &mut TypeChecker,
    left: &Expr,
    operator: BinaryOperator,
    right: &Expr,
    span: Span,
) -> Result<TypedExpr, Error> {
    let left = type_check_expr(type_checker, left)?;
    let right = type_check_expr(type_checker, right)?;

    let ty = if operator.is_equality() {
        if left.ty != right.ty {
            return Err(Error::new(
                ErrorImpl::OperandTypeMatchError {
                    operator: operator.to_string(),
                    expected: vec![left.ty.clone(), left.ty.clone()],
                    received: vec![left.ty.clone(), right.ty.clone()],
                },
                right.span.start.clone(),
            ));
        }
        Type::Bool
    } else {
        let Some(signature) = type_checker.symbols.lookup(operator.as_str()).cloned() else {
            return Err(Error::new(
                ErrorImpl::VariableNotDefined {
                    variable: operator.to_string(),
                },
                span.start.clone(),
            ));
        };

        let (params, result) = match signature {
            Type::Function { params, result } => (params, result),
            other => {
                return Err(Error::new(
                    ErrorImpl::NotAFunction {
                        name: operator.to_string(),
                        found: other,
                    },
                    span.start.clone(),
                ))
            }
        };

        if params.len() != 2 || params[0] != left.ty || params[1] != right.ty {
            return Err(Error::new(
                ErrorImpl::OperandTypeMatchError {
                    operator: operator.to_string(),
                    expected: params,
                    received: vec![left.ty.clone(), right.ty.clone()],
                },
                span.start.clone(),
            ));
        }
        *result
    };

    Ok(TypedExpr::new(
        TypedExprKind::BinaryOp {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        },
        span,
        ty,
    ))
}

fn type_check_unary(
    type_checker: &mut TypeChecker,
    operator: UnaryOperator,
    operand: &Expr,
    span: Span,
) -> Result<TypedExpr, Error> {
    let operand = type_check_expr(type_checker, operand)?;

    let ty = match operator {
        UnaryOperator::Negate => Type::Int,
        UnaryOperator::Not => Type::Bool,
    };

    if operand.ty != ty {
        return Err(Error::new(
            ErrorImpl::OperandTypeMatchError {
                operator: operator.to_string(),
                expected: vec![ty],
                received: vec![operand.ty.clone()],
            },
            span.start.clone(),
        ));
    }

    Ok(TypedExpr::new(
        TypedExprKind::UnaryOp {
            operator,
            operand: Box::new(operand),
        },
        span,
        ty,
    ))
}

fn type_check_var_dec(
    type_checker: &mut TypeChecker,
    name: &Identifier,
    value: &Expr,
    declared_type: Option<&TypeExpr>,
    span: Span,
) -> Result<TypedExpr, Error> {
    let value = type_check_expr(type_checker, value)?;

    let declared_type = match declared_type {
        Some(declared_type) => {
            let declared_type = Type::from_type_expr(declared_type)?;
            if declared_type != value.ty {
                return Err(Error::new(
                    ErrorImpl::TypeMatchError {
                        expected: declared_type,
                        received: value.ty.clone(),
                    },
                    value.span.start.clone(),
                ));
            }
            Some(declared_type)
        }
        None => None,
    };

    let ty = value.ty.clone();
    type_checker.symbols.declare(&name.name, ty.clone());

    Ok(TypedExpr::new(
        TypedExprKind::VarDec {
            name: name.clone(),
            value: Box::new(value),
            declared_type,
        },
        span,
        ty,
    ))
}

fn type_check_assignment(
    type_checker: &mut TypeChecker,
    left: &Expr,
    right: &Expr,
    span: Span,
) -> Result<TypedExpr, Error> {
    // Any other left side is accepted as long as the types agree.
    let left = match &left.kind {
        ExprKind::Identifier { name } => match type_checker.symbols.lookup(name).cloned() {
            Some(ty) => TypedExpr::new(
                TypedExprKind::Identifier { name: name.clone() },
                left.span.clone(),
                ty,
            ),
            None => {
                return Err(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: name.clone(),
                    },
                    left.span.start.clone(),
                ))
            }
        },
        _ => type_check_expr(type_checker, left)?,
    };
    let right = type_check_expr(type_checker, right)?;

    if left.ty != right.ty {
        return Err(Error::new(
            ErrorImpl::TypeMatchError {
                expected: left.ty.clone(),
                received: right.ty.clone(),
            },
            right.span.start.clone(),
        ));
    }

    if let TypedExprKind::Identifier { name } = &left.kind {
        let assigned = type_checker.symbols.assign(name, right.ty.clone());
        debug_assert!(assigned, "{name} resolved but could not be assigned");
    }

    let ty = right.ty.clone();
    Ok(TypedExpr::new(
        TypedExprKind::Assignment {
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
        ty,
    ))
}

/// Only the first argument is compared with the signature; the remaining
/// arguments are checked on their own.
fn type_check_call(
    type_checker: &mut TypeChecker,
    callee: &Identifier,
    arguments: &[Expr],
    span: Span,
) -> Result<TypedExpr, Error> {
    let Some(signature) = type_checker.symbols.lookup(&callee.name).cloned() else {
        return Err(Error::new(
            ErrorImpl::VariableNotDefined {
                variable: callee.name.clone(),
            },
            callee.span.start.clone(),
        ));
    };

    let (params, result) = match signature {
        Type::Function { params, result } => (params, result),
        other => {
            return Err(Error::new(
                ErrorImpl::NotAFunction {
                    name: callee.name.clone(),
                    found: other,
                },
                callee.span.start.clone(),
            ))
        }
    };

    let arguments = arguments
        .iter()
        .map(|argument| type_check_expr(type_checker, argument))
        .collect::<Result<Vec<TypedExpr>, Error>>()?;

    if let (Some(param), Some(argument)) = (params.first(), arguments.first()) {
        if *param != argument.ty {
            return Err(Error::new(
                ErrorImpl::TypeMatchError {
                    expected: param.clone(),
                    received: argument.ty.clone(),
                },
                argument.span.start.clone(),
            ));
        }
    }

    Ok(TypedExpr::new(
        TypedExprKind::FunctionCall {
            callee: callee.clone(),
            arguments,
        },
        span,
        *result,
    ))
}
