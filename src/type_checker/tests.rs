//! Unit tests for the procedure body type checker.

use std::{io, rc::Rc};

use crate::{
    ast::{
        ast::Program,
        expressions::{Expression, Variable},
        statements::Statement,
    },
    config::{CompilerOptions, Library, PhaseOption},
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::parse,
    table::symbol_table::SymbolTable,
    table_builder::table_builder::TableBuilder,
};

use super::type_checker::{check_procedures, collect_procedure_errors};

fn build(source: &str) -> (Program, SymbolTable) {
    let _ = env_logger::builder().is_test(true).try_init();
    let tokens = tokenize(source.to_string(), Some("test.spl".to_string())).unwrap();
    let (_, result) = parse(tokens, Rc::new("test.spl".to_string()));
    let mut program = result.unwrap();
    let options = CompilerOptions::new(PhaseOption::Semant, Library::Standard);
    let table = TableBuilder::with_output(options, io::sink())
        .build_symbol_table(&mut program)
        .unwrap();
    (program, table)
}

fn check(source: &str) -> Result<Program, Error> {
    let (mut program, table) = build(source);
    check_procedures(&mut program, &table)?;
    Ok(program)
}

fn check_main(body: &str) -> Result<Program, Error> {
    check(&format!("type A = array [5] of int; proc main() {{ var i: int; var a: A; {} }}", body))
}

fn error_name(result: Result<Program, Error>) -> String {
    result.unwrap_err().get_error_name().to_string()
}

#[test]
fn test_check_valid_program() {
    let source = "
        type Vector = array [10] of int;
        proc fill(ref v: Vector, n: int) {
            var i: int;
            i := 0;
            while (i < 10) { v[i] := n * i; i := i + 1; }
        }
        proc main() {
            var v: Vector;
            var x: int;
            fill(v, 3);
            readi(x);
            readi(v[2]);
            if (x >= v[2]) printi(x); else printi(-v[2]);
        }";
    assert!(check(source).is_ok());
}

#[test]
fn test_forward_and_recursive_calls_resolve() {
    let source = "
        proc main() { later(3); }
        proc later(n: int) { if (n > 0) later(n - 1); }";
    assert!(check(source).is_ok());
}

#[test]
fn test_expressions_are_annotated() {
    let program = check_main("i := (i + 2) * -a[1];").unwrap();
    let main = program.procedures().next().unwrap();

    match &main.body[0] {
        Statement::Assign(assign) => {
            assert_eq!(assign.target.data_type().get().unwrap().to_string(), "int");
            match &assign.value {
                Expression::Binary(binary) => {
                    assert!(binary.data_type.get().unwrap().is_int());
                    assert!(binary.left_operand.data_type().is_set());
                    match binary.right_operand.as_ref() {
                        Expression::Unary(unary) => match unary.operand.as_ref() {
                            Expression::Variable(variable) => match &variable.variable {
                                Variable::ArrayAccess(access) => {
                                    assert!(access.data_type.get().unwrap().is_int());
                                    assert_eq!(
                                        access.array.data_type().get().unwrap().to_string(),
                                        "array [5] of int"
                                    );
                                    assert!(access.index.data_type().is_set());
                                }
                                other => panic!("expected array access, found {:?}", other),
                            },
                            other => panic!("expected variable, found {:?}", other),
                        },
                        other => panic!("expected unary, found {:?}", other),
                    }
                }
                other => panic!("expected binary, found {:?}", other),
            }
        }
        other => panic!("expected assignment, found {:?}", other),
    }
}

#[test]
fn test_comparison_yields_boolean() {
    let program = check_main("while (i # 3) i := i + 1;").unwrap();
    let main = program.procedures().next().unwrap();

    match &main.body[0] {
        Statement::While(while_stmt) => assert!(while_stmt.condition.data_type().get().unwrap().is_bool()),
        other => panic!("expected while, found {:?}", other),
    }
}

#[test]
fn test_resolution_errors() {
    assert_eq!(error_name(check_main("j := 1;")), "UndefinedVariable");
    assert_eq!(error_name(check_main("A := 1;")), "NotAVariable");
    assert_eq!(error_name(check_main("main := 1;")), "NotAVariable");
    assert_eq!(error_name(check_main("nothing();")), "UndefinedProcedure");
    assert_eq!(error_name(check_main("i();")), "CallOfNonProcedure");
    assert_eq!(error_name(check_main("A();")), "CallOfNonProcedure");
}

#[test]
fn test_local_variable_shadows_procedure() {
    assert_eq!(
        error_name(check("proc main() { var printi: int; printi(1); }")),
        "CallOfNonProcedure"
    );
}

#[test]
fn test_assignment_errors() {
    assert_eq!(error_name(check_main("i := 1 < 2;")), "IllegalAssignment");
    assert_eq!(error_name(check_main("i := a;")), "IllegalAssignment");
    assert_eq!(error_name(check("type A = array [5] of int; proc main() { var a: A; var b: A; a := b; }")), "IllegalAssignmentToArray");
}

#[test]
fn test_structurally_equal_arrays_are_distinct() {
    let source = "
        type A = array [5] of int;
        type B = array [5] of int;
        proc main() { var a: A; var b: B; a := b; }";
    assert_eq!(error_name(check(source)), "IllegalAssignment");
}

#[test]
fn test_condition_errors() {
    assert_eq!(error_name(check_main("if (1) {} else {}")), "IfConditionMustBeBoolean");
    assert_eq!(error_name(check_main("while (i) ;")), "WhileConditionMustBeBoolean");
}

#[test]
fn test_both_branches_are_checked() {
    assert_eq!(error_name(check_main("if (i < 1) ; else j := 1;")), "UndefinedVariable");
    assert_eq!(error_name(check_main("if (i < 1) j := 1; else ;")), "UndefinedVariable");

    let program = check_main("if (i < 1) ; else i := i + 1;").unwrap();
    let main = program.procedures().next().unwrap();
    match &main.body[0] {
        Statement::If(if_stmt) => match if_stmt.else_part.as_ref() {
            Statement::Assign(assign) => {
                assert!(assign.target.data_type().get().unwrap().is_int());
                assert!(assign.value.data_type().get().unwrap().is_int());
            }
            other => panic!("expected assignment, found {:?}", other),
        },
        other => panic!("expected if, found {:?}", other),
    }
}

#[test]
fn test_condition_checked_before_branches() {
    let error = check_main("if (i) j := 1;").unwrap_err();
    assert_eq!(error.get_error_name(), "IfConditionMustBeBoolean");
}

#[test]
fn test_operator_errors() {
    assert_eq!(error_name(check_main("i := (1 < 2) + (2 < 3);")), "NoSuchOperator");
    assert_eq!(error_name(check_main("if (1 < (1 < 2)) ;")), "NoSuchOperator");
    assert_eq!(error_name(check_main("if ((1 < 2) = (2 < 3)) ;")), "NoSuchOperator");
    assert_eq!(error_name(check_main("i := -(1 < 2);")), "NoSuchOperator");
    assert_eq!(error_name(check_main("i := a + 1;")), "NoSuchOperator");
}

#[test]
fn test_operator_error_reports_operand_types() {
    let error = check_main("if (1 < (1 < 2)) ;").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::NoSuchOperator {
            operator: "<".to_string(),
            left: "int".to_string(),
            right: Some("boolean".to_string()),
        }
    );
}

#[test]
fn test_indexing_errors() {
    assert_eq!(error_name(check_main("i[0] := 1;")), "IndexingNonArray");
    assert_eq!(error_name(check_main("a[1 < 2] := 1;")), "IndexingWithNonInteger");
    assert_eq!(error_name(check_main("a[0][0] := 1;")), "IndexingNonArray");
}

#[test]
fn test_argument_count_errors() {
    let error = check_main("printi(1, 2);").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::TooManyArguments {
            procedure: "printi".to_string()
        }
    );

    let error = check_main("printi();").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::TooFewArguments {
            procedure: "printi".to_string()
        }
    );
}

#[test]
fn test_reference_argument_must_be_variable() {
    let error = check_main("readi(1 + 2);").unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::ArgumentMustBeAVariable {
            procedure: "readi".to_string(),
            index: 0,
        }
    );

    assert!(check_main("readi(i); readi(a[i]);").is_ok());
}

#[test]
fn test_argument_type_mismatch_reports_index() {
    let source = "
        type A = array [5] of int;
        proc p(x: int, ref y: A) {}
        proc main() { var i: int; p(1, i); }";
    let error = check(source).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::ArgumentTypeMismatch {
            procedure: "p".to_string(),
            index: 1,
            expected: "array [5] of int".to_string(),
            received: "int".to_string(),
        }
    );
}

#[test]
fn test_array_argument_of_other_declaration_mismatches() {
    let source = "
        type A = array [5] of int;
        type B = array [5] of int;
        proc p(ref x: A) {}
        proc main() { var b: B; p(b); }";
    assert_eq!(error_name(check(source)), "ArgumentTypeMismatch");
}

#[test]
fn test_check_stops_at_first_error() {
    let source = "
        proc p() { x := 1; }
        proc main() { y := 1; }";
    let error = check(source).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UndefinedVariable {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_collect_procedure_errors() {
    let (mut program, table) = build(
        "
        proc p() { x := 1; z := 2; }
        proc q() { printi(1); }
        proc main() { if (1) ; }",
    );
    let errors = collect_procedure_errors(&mut program, &table);

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_error_name(), "UndefinedVariable");
    assert_eq!(errors[1].get_error_name(), "IfConditionMustBeBoolean");
}
