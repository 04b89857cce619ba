use crate::{Position, Span};

use super::{statements::Statement, types::{Type, TypeExpression}};

/// Resolved type of a node.
///
/// Starts out empty and is written exactly once by whichever pass resolves
/// the node; later phases only read it.
#[derive(Debug, Clone, Default)]
pub struct DataType(Option<Type>);

impl DataType {
    pub fn new() -> Self {
        DataType(None)
    }

    pub fn set(&mut self, data_type: Type) {
        debug_assert!(
            self.0.is_none(),
            "data type annotated twice (was {:?}, now {:?})",
            self.0,
            data_type
        );
        self.0 = Some(data_type);
    }

    pub fn get(&self) -> Option<&Type> {
        self.0.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// Root of the AST
#[derive(Debug, Clone)]
pub struct Program {
    pub declarations: Vec<GlobalDeclaration>,
    pub span: Span,
}

impl Program {
    pub fn procedures(&self) -> impl Iterator<Item = &ProcedureDeclaration> {
        self.declarations.iter().filter_map(|declaration| match declaration {
            GlobalDeclaration::Procedure(procedure) => Some(procedure),
            GlobalDeclaration::Type(_) => None,
        })
    }

    pub fn procedures_mut(&mut self) -> impl Iterator<Item = &mut ProcedureDeclaration> {
        self.declarations.iter_mut().filter_map(|declaration| match declaration {
            GlobalDeclaration::Procedure(procedure) => Some(procedure),
            GlobalDeclaration::Type(_) => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum GlobalDeclaration {
    Type(TypeDeclaration),
    Procedure(ProcedureDeclaration),
}

impl GlobalDeclaration {
    pub fn name(&self) -> &str {
        match self {
            GlobalDeclaration::Type(declaration) => &declaration.name,
            GlobalDeclaration::Procedure(declaration) => &declaration.name,
        }
    }

    pub fn position(&self) -> &Position {
        match self {
            GlobalDeclaration::Type(declaration) => &declaration.position,
            GlobalDeclaration::Procedure(declaration) => &declaration.position,
        }
    }
}

/// `type name = type_expression;`
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub name: String,
    pub type_expression: TypeExpression,
    pub position: Position,
}

/// `proc name(parameters) { variables body }`
#[derive(Debug, Clone)]
pub struct ProcedureDeclaration {
    pub name: String,
    pub parameters: Vec<ParameterDeclaration>,
    pub variables: Vec<VariableDeclaration>,
    pub body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct ParameterDeclaration {
    pub name: String,
    pub type_expression: TypeExpression,
    pub is_reference: bool,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct VariableDeclaration {
    pub name: String,
    pub type_expression: TypeExpression,
    pub position: Position,
}
