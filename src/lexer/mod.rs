//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a flat stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of identifiers, literals, operators and punctuation
//! - Line and column tracking for error reporting
//! - Skipping of comments, whitespace and unrecognised characters

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
