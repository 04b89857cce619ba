use std::fmt::Display;

use crate::ast::types::Type;

use super::symbol_table::ScopeId;

/// What a declared name is bound to.
#[derive(Debug, Clone)]
pub enum Entry {
    Type(TypeEntry),
    Variable(VariableEntry),
    Procedure(ProcedureEntry),
}

/// A type alias, including the built-in `int`
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub ty: Type,
}

/// A local variable or parameter
#[derive(Debug, Clone)]
pub struct VariableEntry {
    pub ty: Type,
    pub is_reference: bool,
}

#[derive(Debug, Clone)]
pub struct ProcedureEntry {
    pub local_table: ScopeId,
    /// In declaration order
    pub parameter_types: Vec<ParameterType>,
}

/// One slot of a procedure signature
#[derive(Debug, Clone)]
pub struct ParameterType {
    pub ty: Type,
    pub is_reference: bool,
}

impl ParameterType {
    pub fn new(ty: Type, is_reference: bool) -> Self {
        ParameterType { ty, is_reference }
    }
}

impl Entry {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Entry::Type(_) => "type",
            Entry::Variable(_) => "var",
            Entry::Procedure(_) => "proc",
        }
    }
}

impl Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_reference {
            write!(f, "ref {}", self.ty)
        } else {
            write!(f, "{}", self.ty)
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : ", self.kind_name())?;
        match self {
            Entry::Type(entry) => write!(f, "{}", entry.ty),
            Entry::Variable(entry) if entry.is_reference => write!(f, "ref {}", entry.ty),
            Entry::Variable(entry) => write!(f, "{}", entry.ty),
            Entry::Procedure(entry) => {
                let parameters = entry
                    .parameter_types
                    .iter()
                    .map(|parameter| parameter.to_string())
                    .collect::<Vec<_>>();
                write!(f, "({})", parameters.join(", "))
            }
        }
    }
}
