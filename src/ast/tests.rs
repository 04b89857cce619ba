//! Unit tests for types and annotations.

use super::{
    ast::DataType,
    expressions::Operator,
    types::{PrimitiveType, Type},
};

#[test]
fn test_primitive_types_are_canonical() {
    assert_eq!(Type::int(), Type::int());
    assert_eq!(Type::bool(), Type::Primitive(PrimitiveType::Bool));
    assert_ne!(Type::int(), Type::bool());
}

#[test]
fn test_array_types_compare_by_identity() {
    let first = Type::new_array(Type::int(), 5);
    let second = Type::new_array(Type::int(), 5);

    assert_ne!(first, second);
    assert_eq!(first, first.clone());
}

#[test]
fn test_array_type_accessors() {
    let matrix = Type::new_array(Type::new_array(Type::int(), 3), 4);
    let rows = matrix.as_array().unwrap();

    assert_eq!(rows.array_size, 4);
    assert_eq!(rows.base_type.as_array().unwrap().array_size, 3);
    assert!(Type::int().as_array().is_none());
}

#[test]
fn test_type_display() {
    assert_eq!(Type::int().to_string(), "int");
    assert_eq!(Type::bool().to_string(), "boolean");
    assert_eq!(
        Type::new_array(Type::new_array(Type::int(), 3), 4).to_string(),
        "array [4] of array [3] of int"
    );
}

#[test]
fn test_operator_classes() {
    for operator in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
        assert!(operator.is_arithmetic());
    }
    for operator in [
        Operator::Equ,
        Operator::Neq,
        Operator::Lst,
        Operator::Lse,
        Operator::Grt,
        Operator::Gre,
    ] {
        assert!(operator.is_comparison());
    }
    assert_eq!(Operator::Neq.to_string(), "#");
}

#[test]
fn test_data_type_starts_unset() {
    let mut data_type = DataType::new();
    assert!(!data_type.is_set());

    data_type.set(Type::int());
    assert_eq!(data_type.get(), Some(&Type::int()));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "data type annotated twice")]
fn test_data_type_is_write_once() {
    let mut data_type = DataType::new();
    data_type.set(Type::int());
    data_type.set(Type::bool());
}
