use crate::Position;

use super::expressions::{Expression, Variable};

/// Statement kinds that can appear in a procedure body
#[derive(Debug, Clone)]
pub enum Statement {
    Empty(EmptyStatement),
    Compound(CompoundStatement),
    Assign(AssignStatement),
    Call(CallStatement),
    If(IfStatement),
    While(WhileStatement),
}

impl Statement {
    pub fn position(&self) -> &Position {
        match self {
            Statement::Empty(stmt) => &stmt.position,
            Statement::Compound(stmt) => &stmt.position,
            Statement::Assign(stmt) => &stmt.position,
            Statement::Call(stmt) => &stmt.position,
            Statement::If(stmt) => &stmt.position,
            Statement::While(stmt) => &stmt.position,
        }
    }
}

/// `;`, also stands in for a missing `else` branch
#[derive(Debug, Clone)]
pub struct EmptyStatement {
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct CompoundStatement {
    pub statements: Vec<Statement>,
    pub position: Position,
}

/// `target := value;`
#[derive(Debug, Clone)]
pub struct AssignStatement {
    pub target: Variable,
    pub value: Expression,
    pub position: Position,
}

/// `procedure_name(arguments);`
#[derive(Debug, Clone)]
pub struct CallStatement {
    pub procedure_name: String,
    pub arguments: Vec<Expression>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_part: Box<Statement>,
    pub else_part: Box<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub position: Position,
}
