//! Error types and error handling for the front end.
//!
//! This module defines the error types shared by the parser and the type
//! checker. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each pass, with structured detail fields
//! - A coarse syntax / semantic / internal classification
//! - Helpful error messages and suggestions

pub mod errors;
