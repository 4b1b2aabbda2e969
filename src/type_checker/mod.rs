//! Type checking and semantic analysis module.
//!
//! This module checks the untyped AST and builds a typed copy of it while:
//!
//! - Resolving names through the block scope chain
//! - Checking operators and calls against their signatures
//! - Checking conditions, branches, declarations and assignments
//!
//! Operators are typed like functions: `+` is looked up by name and must be
//! bound to a two-parameter signature. Only `==` and `!=` are built into the
//! checker itself.

pub mod scope;
pub mod type_checker;
pub mod typed_ast;
pub mod types;
