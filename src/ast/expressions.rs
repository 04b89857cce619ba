use std::fmt::Display;

use crate::Position;

use super::ast::DataType;

/// Binary operators, split into arithmetic and comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Equ,
    Neq,
    Lst,
    Lse,
    Grt,
    Gre,
}

impl Operator {
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Operator::Add | Operator::Sub | Operator::Mul | Operator::Div)
    }

    pub fn is_comparison(&self) -> bool {
        !self.is_arithmetic()
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Equ => "=",
            Operator::Neq => "#",
            Operator::Lst => "<",
            Operator::Lse => "<=",
            Operator::Grt => ">",
            Operator::Gre => ">=",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Minus,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Minus => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Expression {
    IntLiteral(IntLiteral),
    Variable(VariableExpression),
    Unary(UnaryExpression),
    Binary(BinaryExpression),
}

impl Expression {
    pub fn position(&self) -> &Position {
        match self {
            Expression::IntLiteral(literal) => &literal.position,
            Expression::Variable(variable) => &variable.position,
            Expression::Unary(unary) => &unary.position,
            Expression::Binary(binary) => &binary.position,
        }
    }

    pub fn data_type(&self) -> &DataType {
        match self {
            Expression::IntLiteral(literal) => &literal.data_type,
            Expression::Variable(variable) => &variable.data_type,
            Expression::Unary(unary) => &unary.data_type,
            Expression::Binary(binary) => &binary.data_type,
        }
    }

    /// Whether the expression denotes storage that can be passed by reference.
    pub fn is_variable(&self) -> bool {
        matches!(self, Expression::Variable(_))
    }
}

#[derive(Debug, Clone)]
pub struct IntLiteral {
    pub value: i32,
    pub position: Position,
    pub data_type: DataType,
}

/// A variable used as a value
#[derive(Debug, Clone)]
pub struct VariableExpression {
    pub variable: Variable,
    pub position: Position,
    pub data_type: DataType,
}

#[derive(Debug, Clone)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
    pub position: Position,
    pub data_type: DataType,
}

#[derive(Debug, Clone)]
pub struct BinaryExpression {
    pub operator: Operator,
    pub left_operand: Box<Expression>,
    pub right_operand: Box<Expression>,
    pub position: Position,
    pub data_type: DataType,
}

/// Something that names storage: a plain name or an indexed array element.
#[derive(Debug, Clone)]
pub enum Variable {
    Named(NamedVariable),
    ArrayAccess(ArrayAccess),
}

impl Variable {
    pub fn position(&self) -> &Position {
        match self {
            Variable::Named(named) => &named.position,
            Variable::ArrayAccess(access) => &access.position,
        }
    }

    pub fn data_type(&self) -> &DataType {
        match self {
            Variable::Named(named) => &named.data_type,
            Variable::ArrayAccess(access) => &access.data_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NamedVariable {
    pub name: String,
    pub position: Position,
    pub data_type: DataType,
}

/// `array[index]`
#[derive(Debug, Clone)]
pub struct ArrayAccess {
    pub array: Box<Variable>,
    pub index: Box<Expression>,
    pub position: Position,
    pub data_type: DataType,
}
