use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, errors::errors::Error};

use super::{expr::*, parser::Parser, stmt::parse_block_expr};

/// Binary operator precedence, loosest first. Every level is left
/// associative; `Unary` is the level of prefix operators and primaries.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Or,
    And,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
}

impl BindingPower {
    /// The operators parsed at this level.
    pub fn operators(self) -> &'static [&'static str] {
        match self {
            BindingPower::Or => &["or"],
            BindingPower::And => &["and"],
            BindingPower::Equality => &["==", "!="],
            BindingPower::Relational => &["<", "<=", ">", ">="],
            BindingPower::Additive => &["+", "-"],
            BindingPower::Multiplicative => &["*", "/", "%"],
            BindingPower::Unary => &[],
        }
    }

    /// The next tighter level.
    pub fn next(self) -> BindingPower {
        match self {
            BindingPower::Or => BindingPower::And,
            BindingPower::And => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative | BindingPower::Unary => BindingPower::Unary,
        }
    }
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

// Primaries introduced by a fixed token text. Literals and identifiers are
// dispatched on token kind instead.
pub type NUDLookup = HashMap<&'static str, NUDHandler>;

lazy_static! {
    pub static ref NUD_LOOKUP: NUDLookup = {
        let mut map: NUDLookup = HashMap::new();
        map.insert("(", parse_grouping_expr);
        map.insert("{", parse_block_expr);
        map.insert("-", parse_prefix_expr);
        map.insert("not", parse_prefix_expr);
        map.insert("if", parse_if_expr);
        map.insert("while", parse_loop_expr);
        map
    };
}
