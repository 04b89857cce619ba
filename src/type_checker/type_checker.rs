use crate::{
    ast::{
        ast::{ProcedureDeclaration, Program},
        expressions::{Expression, Variable},
        statements::{AssignStatement, CallStatement, Statement},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    table::{
        entries::{Entry, ProcedureEntry},
        symbol_table::{ScopeId, SymbolTable},
    },
    Position,
};

/// Checks the body of one procedure against its local scope.
#[derive(Debug)]
pub struct TypeChecker<'a> {
    pub table: &'a SymbolTable,
    pub scope: ScopeId,
}

impl<'a> TypeChecker<'a> {
    pub fn new(table: &'a SymbolTable, scope: ScopeId) -> Self {
        TypeChecker { table, scope }
    }

    pub fn check_statement(&self, statement: &mut Statement) -> Result<(), Error> {
        match statement {
            Statement::Empty(_) => Ok(()),
            Statement::Compound(compound) => {
                for statement in compound.statements.iter_mut() {
                    self.check_statement(statement)?;
                }
                Ok(())
            }
            Statement::Assign(assign) => self.check_assign(assign),
            Statement::Call(call) => self.check_call(call),
            Statement::If(if_stmt) => {
                let condition = self.check_expression(&mut if_stmt.condition)?;
                if !condition.is_bool() {
                    return Err(Error::new(
                        ErrorImpl::IfConditionMustBeBoolean {
                            actual: condition.to_string(),
                        },
                        if_stmt.position.clone(),
                    ));
                }
                self.check_statement(&mut if_stmt.then_part)?;
                self.check_statement(&mut if_stmt.else_part)
            }
            Statement::While(while_stmt) => {
                let condition = self.check_expression(&mut while_stmt.condition)?;
                if !condition.is_bool() {
                    return Err(Error::new(
                        ErrorImpl::WhileConditionMustBeBoolean {
                            actual: condition.to_string(),
                        },
                        while_stmt.position.clone(),
                    ));
                }
                self.check_statement(&mut while_stmt.body)
            }
        }
    }

    fn check_assign(&self, assign: &mut AssignStatement) -> Result<(), Error> {
        let target = self.check_variable(&mut assign.target)?;
        let value = self.check_expression(&mut assign.value)?;

        if target != value {
            return Err(Error::new(
                ErrorImpl::IllegalAssignment {
                    target: target.to_string(),
                    value: value.to_string(),
                },
                assign.position.clone(),
            ));
        }
        if !target.is_int() {
            return Err(Error::new(ErrorImpl::IllegalAssignmentToArray, assign.position.clone()));
        }

        Ok(())
    }

    fn check_call(&self, call: &mut CallStatement) -> Result<(), Error> {
        let procedure = self.lookup_procedure(&call.procedure_name, &call.position)?;

        let mut argument_types = Vec::with_capacity(call.arguments.len());
        for argument in call.arguments.iter_mut() {
            argument_types.push(self.check_expression(argument)?);
        }

        let expected = procedure.parameter_types.len();
        if call.arguments.len() > expected {
            return Err(Error::new(
                ErrorImpl::TooManyArguments {
                    procedure: call.procedure_name.clone(),
                },
                call.position.clone(),
            ));
        }
        if call.arguments.len() < expected {
            return Err(Error::new(
                ErrorImpl::TooFewArguments {
                    procedure: call.procedure_name.clone(),
                },
                call.position.clone(),
            ));
        }

        let parameters = procedure.parameter_types.iter();
        for (index, ((parameter, argument), received)) in parameters
            .zip(call.arguments.iter())
            .zip(argument_types)
            .enumerate()
        {
            if parameter.is_reference && !argument.is_variable() {
                return Err(Error::new(
                    ErrorImpl::ArgumentMustBeAVariable {
                        procedure: call.procedure_name.clone(),
                        index,
                    },
                    call.position.clone(),
                ));
            }
            if parameter.ty != received {
                return Err(Error::new(
                    ErrorImpl::ArgumentTypeMismatch {
                        procedure: call.procedure_name.clone(),
                        index,
                        expected: parameter.ty.to_string(),
                        received: received.to_string(),
                    },
                    call.position.clone(),
                ));
            }
        }

        log::trace!("call of {} matches its signature", call.procedure_name);
        Ok(())
    }

    fn lookup_procedure(&self, name: &str, position: &Position) -> Result<&'a ProcedureEntry, Error> {
        match self.table.lookup(self.scope, name) {
            Some(Entry::Procedure(procedure)) => Ok(procedure),
            Some(_) => Err(Error::new(
                ErrorImpl::CallOfNonProcedure {
                    name: name.to_string(),
                },
                position.clone(),
            )),
            None => Err(Error::new(
                ErrorImpl::UndefinedProcedure {
                    name: name.to_string(),
                },
                position.clone(),
            )),
        }
    }

    /// Type checks `expression`, records its type on the node and returns it.
    pub fn check_expression(&self, expression: &mut Expression) -> Result<Type, Error> {
        match expression {
            Expression::IntLiteral(literal) => {
                literal.data_type.set(Type::int());
                Ok(Type::int())
            }
            Expression::Variable(variable) => {
                let ty = self.check_variable(&mut variable.variable)?;
                variable.data_type.set(ty.clone());
                Ok(ty)
            }
            Expression::Unary(unary) => {
                let operand = self.check_expression(&mut unary.operand)?;
                if !operand.is_int() {
                    return Err(Error::new(
                        ErrorImpl::NoSuchOperator {
                            operator: unary.operator.to_string(),
                            left: operand.to_string(),
                            right: None,
                        },
                        unary.position.clone(),
                    ));
                }
                unary.data_type.set(Type::int());
                Ok(Type::int())
            }
            Expression::Binary(binary) => {
                let left = self.check_expression(&mut binary.left_operand)?;
                let right = self.check_expression(&mut binary.right_operand)?;

                // both operator classes are defined on int operands only
                if left != right || !left.is_int() {
                    return Err(Error::new(
                        ErrorImpl::NoSuchOperator {
                            operator: binary.operator.to_string(),
                            left: left.to_string(),
                            right: Some(right.to_string()),
                        },
                        binary.position.clone(),
                    ));
                }

                let ty = if binary.operator.is_comparison() {
                    Type::bool()
                } else {
                    Type::int()
                };
                binary.data_type.set(ty.clone());
                Ok(ty)
            }
        }
    }

    /// Type checks `variable`, records its type on the node and returns it.
    pub fn check_variable(&self, variable: &mut Variable) -> Result<Type, Error> {
        match variable {
            Variable::Named(named) => {
                let ty = match self.table.lookup(self.scope, &named.name) {
                    Some(Entry::Variable(entry)) => entry.ty.clone(),
                    Some(_) => {
                        return Err(Error::new(
                            ErrorImpl::NotAVariable {
                                name: named.name.clone(),
                            },
                            named.position.clone(),
                        ))
                    }
                    None => {
                        return Err(Error::new(
                            ErrorImpl::UndefinedVariable {
                                name: named.name.clone(),
                            },
                            named.position.clone(),
                        ))
                    }
                };
                named.data_type.set(ty.clone());
                Ok(ty)
            }
            Variable::ArrayAccess(access) => {
                let array = self.check_variable(&mut access.array)?;
                let index = self.check_expression(&mut access.index)?;

                let element = match array.as_array() {
                    Some(array) => array.base_type.clone(),
                    None => return Err(Error::new(ErrorImpl::IndexingNonArray, access.position.clone())),
                };
                if !index.is_int() {
                    return Err(Error::new(ErrorImpl::IndexingWithNonInteger, access.position.clone()));
                }

                access.data_type.set(element.clone());
                Ok(element)
            }
        }
    }
}

/// Checks the body of `procedure` against its local scope in `table`.
pub fn check_procedure(procedure: &mut ProcedureDeclaration, table: &SymbolTable) -> Result<(), Error> {
    let entry = match table.lookup_procedure(&procedure.name) {
        Some(entry) => entry,
        None => {
            return Err(Error::new(
                ErrorImpl::UndefinedProcedure {
                    name: procedure.name.clone(),
                },
                procedure.position.clone(),
            ))
        }
    };

    let type_checker = TypeChecker::new(table, entry.local_table);
    for statement in procedure.body.iter_mut() {
        type_checker.check_statement(statement)?;
    }

    log::debug!("checked procedure {}", procedure.name);
    Ok(())
}

/// Checks every procedure body in declaration order, stopping at the first
/// error.
pub fn check_procedures(program: &mut Program, table: &SymbolTable) -> Result<(), Error> {
    for procedure in program.procedures_mut() {
        check_procedure(procedure, table)?;
    }
    Ok(())
}

/// Checks every procedure body and returns the first error of each failing
/// procedure, in declaration order.
pub fn collect_procedure_errors(program: &mut Program, table: &SymbolTable) -> Vec<Error> {
    program
        .procedures_mut()
        .filter_map(|procedure| check_procedure(procedure, table).err())
        .collect()
}
