//! Symbol tables shared by the semantic passes.
//!
//! Scopes are kept in an arena and link to their enclosing scope by index.
//! The global scope is seeded with the built-in type and the library
//! procedures before any declaration of the program is entered.

pub mod entries;
pub mod initializer;
pub mod symbol_table;
