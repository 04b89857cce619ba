#![allow(clippy::module_inception)]

use std::{path::Path, rc::Rc};

use crate::{
    ast::ast::Program,
    config::CompilerOptions,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    table::symbol_table::SymbolTable,
    table_builder::table_builder::TableBuilder,
    type_checker::type_checker::check_procedures,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod table;
pub mod table_builder;
pub mod type_checker;

const NULL_FILE: &str = "<null>";

/// Byte offset into a source file.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    /// Position of errors that do not belong to any source location.
    pub fn null() -> Self {
        Position(0, Rc::new(String::from(NULL_FILE)))
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0 && *self.1 == NULL_FILE
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole front end over `source`: tokenizing, parsing, building the
/// symbol tables and checking every procedure body.
///
/// Returns the program with every type annotation filled in, together with
/// its symbol table.
pub fn analyze(
    source: &str,
    file: &str,
    options: &CompilerOptions,
) -> Result<(Program, SymbolTable), Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    let (_, parsed) = parse(tokens, Rc::new(file.to_string()));
    let mut program = parsed?;

    let table = TableBuilder::new(options.clone()).build_symbol_table(&mut program)?;
    check_procedures(&mut program, &table)?;

    log::debug!("analyzed {} without errors", file);
    Ok((program, table))
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line itself and the offset within
/// the line, or `None` if `position` lies outside `source`. The end of the
/// source maps to the end of its last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;
    let mut last = None;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        last = Some((index + 1, line));
        start = end;
    }

    match last {
        Some((line_number, line)) if pos == source.len() => Some((
            line_number,
            line.to_string(),
            line.trim_end_matches('\n').len(),
        )),
        _ => None,
    }
}


/// Prints `error` together with the offending line of `source`.
pub fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Error: UndefinedVariable (Variable `x` not declared)
        -> test.spl
           |
        20 | x := 1;
           | ^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {} ({})", error.get_error_name(), error);
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());

    let position = error.get_position();
    if position.is_null() {
        return;
    }
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
