use crate::{
    ast::types::Type,
    config::{CompilerOptions, Library},
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    entries::{Entry, ParameterType, ProcedureEntry, TypeEntry},
    symbol_table::{ScopeId, SymbolTable},
};

const STANDARD_PROCEDURES: &[(&str, &[(bool, &str)])] = &[
    ("printi", &[(false, "i")]),
    ("printc", &[(false, "c")]),
    ("readi", &[(true, "i")]),
    ("readc", &[(true, "c")]),
    ("exit", &[]),
    ("time", &[(true, "t")]),
];

const GRAPHICS_PROCEDURES: &[(&str, &[(bool, &str)])] = &[
    ("clearAll", &[(false, "color")]),
    ("setPixel", &[(false, "x"), (false, "y"), (false, "color")]),
    ("drawLine", &[(false, "x1"), (false, "y1"), (false, "x2"), (false, "y2"), (false, "color")]),
    ("drawCircle", &[(false, "x0"), (false, "y0"), (false, "radius"), (false, "color")]),
];

/// Creates the global table with the built-in type `int` and the library
/// procedures selected by `options`.
///
/// Every library parameter is an `int`; `(true, _)` marks a reference parameter.
pub fn initialize_global_table(options: &CompilerOptions) -> Result<SymbolTable, Error> {
    let mut table = SymbolTable::new();

    table.enter(
        ScopeId::GLOBAL,
        "int",
        Entry::Type(TypeEntry { ty: Type::int() }),
        || redeclared("int"),
    )?;

    let graphics: &[_] = match options.library {
        Library::Standard => &[],
        Library::Graphics => GRAPHICS_PROCEDURES,
    };

    for (name, parameters) in STANDARD_PROCEDURES.iter().chain(graphics) {
        enter_library_procedure(&mut table, name, parameters)?;
    }

    log::debug!(
        "initialized global table with {} entries",
        table.scope(ScopeId::GLOBAL).len()
    );

    Ok(table)
}

fn enter_library_procedure(
    table: &mut SymbolTable,
    name: &str,
    parameters: &[(bool, &str)],
) -> Result<(), Error> {
    let local_table = table.add_scope(ScopeId::GLOBAL);
    let parameter_types = parameters
        .iter()
        .map(|(is_reference, _)| ParameterType::new(Type::int(), *is_reference))
        .collect();

    table.enter(
        ScopeId::GLOBAL,
        name,
        Entry::Procedure(ProcedureEntry {
            local_table,
            parameter_types,
        }),
        || redeclared(name),
    )
}

fn redeclared(name: &str) -> Error {
    Error::new(
        ErrorImpl::RedeclarationAsProcedure {
            name: name.to_string(),
        },
        Position::null(),
    )
}
