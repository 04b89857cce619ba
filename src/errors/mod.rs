//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the front end.
//! It includes:
//!
//! - Error structures with source position information
//! - One error variant per lexical, syntactic and semantic violation
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
