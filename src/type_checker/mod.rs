//! Type checking of procedure bodies.
//!
//! Runs after the table builder, so every procedure signature is known and
//! forward or recursive calls resolve. It:
//!
//! - Resolves variable and procedure references through the scope chain
//! - Annotates every expression and variable with its type
//! - Checks assignments, conditions, operators and array indexing
//! - Matches call arguments against procedure signatures
//!
//! Checking stops at the first error; `collect_procedure_errors` reports the
//! first error of every procedure instead.

pub mod type_checker;

#[cfg(test)]
mod tests;
