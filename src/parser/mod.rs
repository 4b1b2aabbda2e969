//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Binary operators are handled by precedence
//! climbing over the levels in `lookups`; everything else is plain
//! recursive descent:
//!
//! - Expressions (`expr`): operators, calls, if/while, assignment
//! - Statements (`stmt`): variable declarations and blocks
//! - Type annotations (`types`)
//!
//! Parsing stops at the first error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
