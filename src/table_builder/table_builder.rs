use std::io::{self, Write};

use crate::{
    ast::{
        ast::{GlobalDeclaration, ParameterDeclaration, ProcedureDeclaration, Program, TypeDeclaration, VariableDeclaration},
        types::{Type, TypeExpression},
    },
    config::CompilerOptions,
    errors::errors::{Error, ErrorImpl},
    table::{
        entries::{Entry, ParameterType, ProcedureEntry, TypeEntry, VariableEntry},
        initializer::initialize_global_table,
        symbol_table::{ScopeId, SymbolTable},
    },
    Position,
};

pub struct TableBuilder<'a> {
    options: CompilerOptions,
    output: Box<dyn Write + 'a>,
}

impl<'a> TableBuilder<'a> {
    /// Table dumps go to stdout.
    pub fn new(options: CompilerOptions) -> Self {
        TableBuilder {
            options,
            output: Box::new(io::stdout()),
        }
    }

    pub fn with_output(options: CompilerOptions, output: impl Write + 'a) -> Self {
        TableBuilder {
            options,
            output: Box::new(output),
        }
    }

    /// Builds the global table and one local table per procedure, annotating
    /// every type expression of `program` with its resolved type.
    pub fn build_symbol_table(&mut self, program: &mut Program) -> Result<SymbolTable, Error> {
        let mut table = initialize_global_table(&self.options)?;

        for declaration in program.declarations.iter_mut() {
            match declaration {
                GlobalDeclaration::Type(declaration) => {
                    build_type_declaration(&mut table, declaration)?
                }
                GlobalDeclaration::Procedure(declaration) => {
                    let local_table = build_procedure_declaration(&mut table, declaration)?;
                    if self.options.dump_tables() {
                        self.dump_table(&table, &declaration.name, local_table)
                            .map_err(|error| {
                                Error::new(
                                    ErrorImpl::TableDumpFailed {
                                        reason: error.to_string(),
                                    },
                                    declaration.position.clone(),
                                )
                            })?;
                    }
                }
            }
        }

        check_main(&table)?;
        log::debug!(
            "built symbol table: {} scopes, {} global entries",
            table.scope_count(),
            table.scope(ScopeId::GLOBAL).len()
        );

        Ok(table)
    }

    fn dump_table(&mut self, table: &SymbolTable, name: &str, scope: ScopeId) -> io::Result<()> {
        writeln!(self.output, "Symbol table at end of procedure '{}':", name)?;
        writeln!(self.output, "{}", table.display_scope(scope))?;
        self.output.flush()
    }
}

/// Resolves `type_expression` in `scope` and records the result on the node.
///
/// Array types resolve their base type first; each array expression yields a
/// type of its own.
pub fn resolve_type_expression(
    table: &SymbolTable,
    scope: ScopeId,
    type_expression: &mut TypeExpression,
) -> Result<Type, Error> {
    let resolved = match type_expression {
        TypeExpression::Named(named) => {
            let ty = match table.lookup(scope, &named.name) {
                Some(Entry::Type(entry)) => entry.ty.clone(),
                Some(_) => {
                    return Err(Error::new(
                        ErrorImpl::NotAType {
                            name: named.name.clone(),
                        },
                        named.position.clone(),
                    ))
                }
                None => {
                    return Err(Error::new(
                        ErrorImpl::UndefinedType {
                            name: named.name.clone(),
                        },
                        named.position.clone(),
                    ))
                }
            };
            named.data_type.set(ty.clone());
            ty
        }
        TypeExpression::Array(array) => {
            let base_type = resolve_type_expression(table, scope, &mut array.base_type)?;
            let ty = Type::new_array(base_type, array.array_size);
            array.data_type.set(ty.clone());
            ty
        }
    };

    log::trace!("resolved type expression to {}", resolved);
    Ok(resolved)
}

fn build_type_declaration(table: &mut SymbolTable, declaration: &mut TypeDeclaration) -> Result<(), Error> {
    let ty = resolve_type_expression(table, ScopeId::GLOBAL, &mut declaration.type_expression)?;

    table.enter(
        ScopeId::GLOBAL,
        &declaration.name,
        Entry::Type(TypeEntry { ty }),
        || redeclaration(ErrorImpl::RedeclarationAsType { name: declaration.name.clone() }, &declaration.position),
    )
}

/// Enters the procedure's parameters and variables into a fresh local scope
/// and the procedure itself into the global scope.
fn build_procedure_declaration(
    table: &mut SymbolTable,
    declaration: &mut ProcedureDeclaration,
) -> Result<ScopeId, Error> {
    let local_table = table.add_scope(ScopeId::GLOBAL);

    let mut parameter_types = Vec::with_capacity(declaration.parameters.len());
    for parameter in declaration.parameters.iter_mut() {
        parameter_types.push(build_parameter_declaration(table, local_table, parameter)?);
    }

    for variable in declaration.variables.iter_mut() {
        build_variable_declaration(table, local_table, variable)?;
    }

    table.enter(
        ScopeId::GLOBAL,
        &declaration.name,
        Entry::Procedure(ProcedureEntry {
            local_table,
            parameter_types,
        }),
        || redeclaration(ErrorImpl::RedeclarationAsProcedure { name: declaration.name.clone() }, &declaration.position),
    )?;

    log::debug!(
        "entered procedure {} with {} parameters and {} variables",
        declaration.name,
        declaration.parameters.len(),
        declaration.variables.len()
    );

    Ok(local_table)
}

fn build_parameter_declaration(
    table: &mut SymbolTable,
    local_table: ScopeId,
    parameter: &mut ParameterDeclaration,
) -> Result<ParameterType, Error> {
    // parameter types name global types only
    let ty = resolve_type_expression(table, ScopeId::GLOBAL, &mut parameter.type_expression)?;

    if ty.as_array().is_some() && !parameter.is_reference {
        return Err(Error::new(
            ErrorImpl::MustBeAReferenceParameter {
                name: parameter.name.clone(),
            },
            parameter.position.clone(),
        ));
    }

    table.enter(
        local_table,
        &parameter.name,
        Entry::Variable(VariableEntry {
            ty: ty.clone(),
            is_reference: parameter.is_reference,
        }),
        || redeclaration(ErrorImpl::RedeclarationAsParameter { name: parameter.name.clone() }, &parameter.position),
    )?;

    Ok(ParameterType::new(ty, parameter.is_reference))
}

fn build_variable_declaration(
    table: &mut SymbolTable,
    local_table: ScopeId,
    variable: &mut VariableDeclaration,
) -> Result<(), Error> {
    let ty = resolve_type_expression(table, local_table, &mut variable.type_expression)?;

    table.enter(
        local_table,
        &variable.name,
        Entry::Variable(VariableEntry {
            ty,
            is_reference: false,
        }),
        || redeclaration(ErrorImpl::RedeclarationAsVariable { name: variable.name.clone() }, &variable.position),
    )
}

/// `main` must exist, be a procedure and take no parameters.
fn check_main(table: &SymbolTable) -> Result<(), Error> {
    match table.lookup_local(ScopeId::GLOBAL, "main") {
        None => Err(Error::new(ErrorImpl::MainIsMissing, Position::null())),
        Some(Entry::Procedure(main)) if !main.parameter_types.is_empty() => {
            Err(Error::new(ErrorImpl::MainMustNotHaveParameters, Position::null()))
        }
        Some(Entry::Procedure(_)) => Ok(()),
        Some(_) => Err(Error::new(ErrorImpl::MainIsNotAProcedure, Position::null())),
    }
}

fn redeclaration(error_impl: ErrorImpl, position: &Position) -> Error {
    Error::new(error_impl, position.clone())
}
