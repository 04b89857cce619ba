//! Type system definitions for the AST.
//!
//! This module defines both halves of typing in the language:
//!
//! - Syntactic type expressions as written in declarations
//!   (`int`, `array [5] of int`, names of type aliases)
//! - The semantic `Type` they resolve to (primitives and arrays)
//!
//! Type expressions are resolved by the table builder; the resulting types
//! are shared by every entry and node that refers to them.

use std::{fmt::Display, rc::Rc};

use crate::Position;

use super::ast::DataType;

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Bool,
}

/// Represents an array type with a fixed number of elements.
#[derive(Debug)]
pub struct ArrayType {
    pub base_type: Type,
    pub array_size: u32,
}

/// A resolved type.
///
/// Primitive types compare by value. Array types compare by identity: every
/// `array [n] of T` expression creates a type of its own, and only names that
/// resolve to the same declaration denote the same array type.
#[derive(Debug, Clone)]
pub enum Type {
    Primitive(PrimitiveType),
    Array(Rc<ArrayType>),
}

impl Type {
    pub fn int() -> Self {
        Type::Primitive(PrimitiveType::Int)
    }

    pub fn bool() -> Self {
        Type::Primitive(PrimitiveType::Bool)
    }

    pub fn new_array(base_type: Type, array_size: u32) -> Self {
        Type::Array(Rc::new(ArrayType {
            base_type,
            array_size,
        }))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Type::Primitive(PrimitiveType::Int))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Primitive(PrimitiveType::Bool))
    }

    pub fn as_array(&self) -> Option<&ArrayType> {
        match self {
            Type::Array(array) => Some(array),
            Type::Primitive(_) => None,
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Type::Primitive(left), Type::Primitive(right)) => left == right,
            (Type::Array(left), Type::Array(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl Eq for Type {}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Primitive(PrimitiveType::Int) => write!(f, "int"),
            Type::Primitive(PrimitiveType::Bool) => write!(f, "boolean"),
            Type::Array(array) => write!(f, "array [{}] of {}", array.array_size, array.base_type),
        }
    }
}

/// A type as written in the source.
#[derive(Debug, Clone)]
pub enum TypeExpression {
    Named(NamedTypeExpression),
    Array(ArrayTypeExpression),
}

impl TypeExpression {
    pub fn position(&self) -> &Position {
        match self {
            TypeExpression::Named(named) => &named.position,
            TypeExpression::Array(array) => &array.position,
        }
    }

    pub fn data_type(&self) -> &DataType {
        match self {
            TypeExpression::Named(named) => &named.data_type,
            TypeExpression::Array(array) => &array.data_type,
        }
    }
}

/// Reference to a declared type by name, e.g. `int`
#[derive(Debug, Clone)]
pub struct NamedTypeExpression {
    pub name: String,
    pub position: Position,
    pub data_type: DataType,
}

/// `array [array_size] of base_type`
#[derive(Debug, Clone)]
pub struct ArrayTypeExpression {
    pub base_type: Box<TypeExpression>,
    pub array_size: u32,
    pub position: Position,
    pub data_type: DataType,
}
