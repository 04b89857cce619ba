//! First semantic pass: declarations into symbol tables.
//!
//! Walks the global declarations once, resolving every type expression and
//! entering types, procedures, parameters and local variables into their
//! scopes. Procedure bodies are left to the type checker.

pub mod table_builder;

#[cfg(test)]
mod tests;
