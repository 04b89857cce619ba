//! Unit tests for the table builder.

use std::{io, rc::Rc};

use crate::{
    ast::{
        ast::{GlobalDeclaration, Program},
        types::TypeExpression,
    },
    config::{CompilerOptions, Library, PhaseOption},
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    table::{
        entries::Entry,
        symbol_table::{ScopeId, SymbolTable},
    },
};

use super::table_builder::TableBuilder;

fn parse_source(source: &str) -> Program {
    let tokens = tokenize(source.to_string(), Some("test.spl".to_string())).unwrap();
    let (_, result) = parse(tokens, Rc::new("test.spl".to_string()));
    result.unwrap()
}

fn build(source: &str) -> Result<(Program, SymbolTable), Error> {
    let mut program = parse_source(source);
    let mut output = Vec::new();
    let table = TableBuilder::with_output(CompilerOptions::default(), &mut output)
        .build_symbol_table(&mut program)?;
    Ok((program, table))
}

fn build_error(source: &str) -> String {
    build(source).unwrap_err().get_error_name().to_string()
}

#[test]
fn test_build_minimal_program() {
    let (_, table) = build("proc main() {}").unwrap();

    let main = table.lookup_procedure("main").unwrap();
    assert!(main.parameter_types.is_empty());
    assert_eq!(table.level(main.local_table), 1);
}

#[test]
fn test_build_enters_parameters_and_variables_locally() {
    let (_, table) = build("proc p(x: int, ref y: int) { var z: int; } proc main() {}").unwrap();

    let p = table.lookup_procedure("p").unwrap();
    let local = p.local_table;
    match table.lookup_local(local, "y") {
        Some(Entry::Variable(entry)) => assert!(entry.is_reference),
        other => panic!("expected variable, found {:?}", other),
    }
    match table.lookup_local(local, "z") {
        Some(Entry::Variable(entry)) => assert!(!entry.is_reference),
        other => panic!("expected variable, found {:?}", other),
    }
    assert!(table.lookup_local(ScopeId::GLOBAL, "x").is_none());
    assert_eq!(p.parameter_types.len(), 2);
    assert!(!p.parameter_types[0].is_reference);
    assert!(p.parameter_types[1].is_reference);
}

#[test]
fn test_build_annotates_type_expressions() {
    let (program, table) = build("type Row = array [4] of int; type Grid = array [3] of Row; proc main() {}").unwrap();

    for declaration in &program.declarations {
        if let GlobalDeclaration::Type(declaration) = declaration {
            assert!(declaration.type_expression.data_type().is_set());
            if let TypeExpression::Array(array) = &declaration.type_expression {
                assert!(array.base_type.data_type().is_set());
            }
        }
    }

    match table.lookup(ScopeId::GLOBAL, "Grid") {
        Some(Entry::Type(entry)) => assert_eq!(entry.ty.to_string(), "array [3] of array [4] of int"),
        other => panic!("expected type, found {:?}", other),
    }
}

#[test]
fn test_type_alias_shares_array_identity() {
    let (_, table) = build("type A = array [2] of int; type B = A; type C = array [2] of int; proc main() {}").unwrap();

    let type_of = |name: &str| match table.lookup(ScopeId::GLOBAL, name) {
        Some(Entry::Type(entry)) => entry.ty.clone(),
        other => panic!("expected type, found {:?}", other),
    };
    assert_eq!(type_of("A"), type_of("B"));
    assert_ne!(type_of("A"), type_of("C"));
}

#[test]
fn test_redeclarations_fail() {
    assert_eq!(build_error("type T = int; type T = int; proc main() {}"), "RedeclarationAsType");
    assert_eq!(build_error("type p = int; proc p() {} proc main() {}"), "RedeclarationAsProcedure");
    assert_eq!(build_error("proc main() {} proc main() {}"), "RedeclarationAsProcedure");
    assert_eq!(build_error("proc main() { var x: int; var x: int; }"), "RedeclarationAsVariable");
    assert_eq!(build_error("proc p(a: int, ref a: int) {} proc main() {}"), "RedeclarationAsParameter");
    assert_eq!(build_error("proc p(a: int) { var a: int; } proc main() {}"), "RedeclarationAsVariable");
    assert_eq!(build_error("type printi = int; proc main() {}"), "RedeclarationAsType");
}

#[test]
fn test_local_may_shadow_global() {
    let (_, table) = build("type T = int; proc main() { var T: int; }").unwrap();
    let main = table.lookup_procedure("main").unwrap();

    assert!(matches!(table.lookup(main.local_table, "T"), Some(Entry::Variable(_))));
}

#[test]
fn test_undefined_and_non_types_fail() {
    assert_eq!(build_error("type T = U; proc main() {}"), "UndefinedType");
    assert_eq!(build_error("proc main() {} type T = main;"), "NotAType");
    assert_eq!(build_error("proc main() { var x: int; var y: x; }"), "NotAType");
    assert_eq!(build_error("type T = boolean; proc main() {}"), "UndefinedType");
}

#[test]
fn test_parameter_types_ignore_sibling_parameters() {
    // `x: T` names the global type even though a parameter `T` precedes it
    let (program, table) = build("type T = int; proc p(T: int, x: T) {} proc main() {}").unwrap();

    let p = table.lookup_procedure("p").unwrap();
    assert!(p.parameter_types[1].ty.is_int());
    assert!(matches!(table.lookup_local(p.local_table, "T"), Some(Entry::Variable(_))));
    let parameters = &program.procedures().next().unwrap().parameters;
    assert!(parameters[1].type_expression.data_type().get().unwrap().is_int());
}

#[test]
fn test_variable_types_resolve_locally() {
    assert_eq!(build_error("type T = int; proc p(T: int) { var x: T; } proc main() {}"), "NotAType");
}

#[test]
fn test_array_parameter_must_be_reference() {
    assert_eq!(
        build_error("type A = array [3] of int; proc p(a: A) {} proc main() {}"),
        "MustBeAReferenceParameter"
    );
    assert!(build("type A = array [3] of int; proc p(ref a: A) {} proc main() {}").is_ok());
}

#[test]
fn test_main_checks() {
    assert_eq!(build_error(""), "MainIsMissing");
    assert_eq!(build_error("proc p() {}"), "MainIsMissing");
    assert_eq!(build_error("type main = int;"), "MainIsNotAProcedure");
    assert_eq!(build_error("proc main(x: int) {}"), "MainMustNotHaveParameters");
}

#[test]
fn test_bodies_are_not_checked() {
    assert!(build("proc main() { undefined := 1; }").is_ok());
}

#[test]
fn test_table_dump() {
    let mut program = parse_source("proc p(ref a: int) { var b: int; } proc main() {}");
    let mut output = Vec::new();
    {
        let options = CompilerOptions::new(PhaseOption::Tables, Library::Standard);
        let mut builder = TableBuilder::with_output(options, &mut output);
        builder.build_symbol_table(&mut program).unwrap();
    }
    let dump = String::from_utf8(output).unwrap();

    assert!(dump.starts_with("Symbol table at end of procedure 'p':\n  level 1\n"));
    assert!(dump.contains("Symbol table at end of procedure 'main':"));
    assert!(dump.lines().any(|line| line.starts_with("    a ") && line.ends_with(": var : ref int")));
    assert!(dump.lines().any(|line| line.starts_with("    readi ") && line.ends_with(": proc : (ref int)")));
}

#[test]
fn test_no_dump_without_tables_phase() {
    let mut program = parse_source("proc main() {}");
    let mut output = Vec::new();
    TableBuilder::with_output(CompilerOptions::default(), &mut output)
        .build_symbol_table(&mut program)
        .unwrap();

    assert!(output.is_empty());
}

struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_dump_failure_is_reported() {
    let mut program = parse_source("proc main() {}");
    let options = CompilerOptions::new(PhaseOption::Tables, Library::Graphics);
    let error = TableBuilder::with_output(options, FailingWriter)
        .build_symbol_table(&mut program)
        .unwrap_err();

    assert_eq!(error.get_error_name(), "TableDumpFailed");
}
