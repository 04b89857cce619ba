use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::RedeclarationAsType { .. } => "RedeclarationAsType",
            ErrorImpl::RedeclarationAsProcedure { .. } => "RedeclarationAsProcedure",
            ErrorImpl::RedeclarationAsVariable { .. } => "RedeclarationAsVariable",
            ErrorImpl::RedeclarationAsParameter { .. } => "RedeclarationAsParameter",
            ErrorImpl::UndefinedType { .. } => "UndefinedType",
            ErrorImpl::NotAType { .. } => "NotAType",
            ErrorImpl::MustBeAReferenceParameter { .. } => "MustBeAReferenceParameter",
            ErrorImpl::MainIsMissing => "MainIsMissing",
            ErrorImpl::MainIsNotAProcedure => "MainIsNotAProcedure",
            ErrorImpl::MainMustNotHaveParameters => "MainMustNotHaveParameters",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::NotAVariable { .. } => "NotAVariable",
            ErrorImpl::UndefinedProcedure { .. } => "UndefinedProcedure",
            ErrorImpl::CallOfNonProcedure { .. } => "CallOfNonProcedure",
            ErrorImpl::IllegalAssignment { .. } => "IllegalAssignment",
            ErrorImpl::IllegalAssignmentToArray => "IllegalAssignmentToArray",
            ErrorImpl::IfConditionMustBeBoolean { .. } => "IfConditionMustBeBoolean",
            ErrorImpl::WhileConditionMustBeBoolean { .. } => "WhileConditionMustBeBoolean",
            ErrorImpl::NoSuchOperator { .. } => "NoSuchOperator",
            ErrorImpl::IndexingNonArray => "IndexingNonArray",
            ErrorImpl::IndexingWithNonInteger => "IndexingWithNonInteger",
            ErrorImpl::TooManyArguments { .. } => "TooManyArguments",
            ErrorImpl::TooFewArguments { .. } => "TooFewArguments",
            ErrorImpl::ArgumentMustBeAVariable { .. } => "ArgumentMustBeAVariable",
            ErrorImpl::ArgumentTypeMismatch { .. } => "ArgumentTypeMismatch",
            ErrorImpl::TableDumpFailed { .. } => "TableDumpFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::RedeclarationAsType { name } => ErrorTip::Suggestion(format!(
                "`{}` is already declared in this scope and cannot be redeclared as a type",
                name
            )),
            ErrorImpl::RedeclarationAsProcedure { name } => ErrorTip::Suggestion(format!(
                "`{}` is already declared in this scope and cannot be redeclared as a procedure",
                name
            )),
            ErrorImpl::RedeclarationAsVariable { name } => ErrorTip::Suggestion(format!(
                "`{}` is already declared in this scope and cannot be redeclared as a variable",
                name
            )),
            ErrorImpl::RedeclarationAsParameter { name } => ErrorTip::Suggestion(format!(
                "`{}` is already declared in this scope and cannot be redeclared as a parameter",
                name
            )),
            ErrorImpl::UndefinedType { name } => {
                ErrorTip::Suggestion(format!("Type `{}` is not defined", name))
            }
            ErrorImpl::NotAType { name } => {
                ErrorTip::Suggestion(format!("`{}` is not a type", name))
            }
            ErrorImpl::MustBeAReferenceParameter { name } => ErrorTip::Suggestion(format!(
                "Parameter `{}` has an array type, declare it with `ref`",
                name
            )),
            ErrorImpl::MainIsMissing => {
                ErrorTip::Suggestion(String::from("Declare a procedure `main()`"))
            }
            ErrorImpl::MainIsNotAProcedure => {
                ErrorTip::Suggestion(String::from("`main` must be declared as a procedure"))
            }
            ErrorImpl::MainMustNotHaveParameters => {
                ErrorTip::Suggestion(String::from("Remove the parameters of `main`"))
            }
            ErrorImpl::UndefinedVariable { name } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", name))
            }
            ErrorImpl::NotAVariable { name } => {
                ErrorTip::Suggestion(format!("`{}` is not a variable", name))
            }
            ErrorImpl::UndefinedProcedure { name } => {
                ErrorTip::Suggestion(format!("Procedure `{}` not declared", name))
            }
            ErrorImpl::CallOfNonProcedure { name } => {
                ErrorTip::Suggestion(format!("`{}` is not a procedure and cannot be called", name))
            }
            ErrorImpl::IllegalAssignment { target, value } => ErrorTip::Suggestion(format!(
                "Cannot assign a value of type `{}` to a target of type `{}`",
                value, target
            )),
            ErrorImpl::IllegalAssignmentToArray => ErrorTip::Suggestion(String::from(
                "Arrays cannot be assigned as a whole, assign their elements instead",
            )),
            ErrorImpl::IfConditionMustBeBoolean { actual } => ErrorTip::Suggestion(format!(
                "Expected a `boolean` condition, found `{}`",
                actual
            )),
            ErrorImpl::WhileConditionMustBeBoolean { actual } => ErrorTip::Suggestion(format!(
                "Expected a `boolean` condition, found `{}`",
                actual
            )),
            ErrorImpl::NoSuchOperator {
                operator,
                left,
                right: Some(right),
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` is not defined for `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::NoSuchOperator {
                operator,
                left,
                right: None,
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` is not defined for `{}`",
                operator, left
            )),
            ErrorImpl::IndexingNonArray => {
                ErrorTip::Suggestion(String::from("Only arrays can be indexed"))
            }
            ErrorImpl::IndexingWithNonInteger => {
                ErrorTip::Suggestion(String::from("Array indices must be of type `int`"))
            }
            ErrorImpl::TooManyArguments { procedure } => ErrorTip::Suggestion(format!(
                "Too many arguments in call of procedure `{}`",
                procedure
            )),
            ErrorImpl::TooFewArguments { procedure } => ErrorTip::Suggestion(format!(
                "Too few arguments in call of procedure `{}`",
                procedure
            )),
            ErrorImpl::ArgumentMustBeAVariable { procedure, index } => {
                ErrorTip::Suggestion(format!(
                    "Argument {} of procedure `{}` is passed by reference and must be a variable",
                    index + 1,
                    procedure
                ))
            }
            ErrorImpl::ArgumentTypeMismatch {
                procedure,
                index,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Argument {} of procedure `{}`: expected type `{}`, received `{}`",
                index + 1,
                procedure,
                expected,
                received
            )),
            ErrorImpl::TableDumpFailed { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Types are carried as their rendered names so errors stay independent of
/// the symbol table that produced them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    #[error("identifier {name:?} is already defined in this scope, cannot redeclare it as a type")]
    RedeclarationAsType { name: String },
    #[error("identifier {name:?} is already defined in this scope, cannot redeclare it as a procedure")]
    RedeclarationAsProcedure { name: String },
    #[error("identifier {name:?} is already defined in this scope, cannot redeclare it as a variable")]
    RedeclarationAsVariable { name: String },
    #[error("identifier {name:?} is already defined in this scope, cannot redeclare it as a parameter")]
    RedeclarationAsParameter { name: String },
    #[error("undefined type {name:?}")]
    UndefinedType { name: String },
    #[error("identifier {name:?} does not refer to a type")]
    NotAType { name: String },
    #[error("parameter {name:?} must be a reference parameter")]
    MustBeAReferenceParameter { name: String },
    #[error("procedure 'main' is missing")]
    MainIsMissing,
    #[error("'main' is not a procedure")]
    MainIsNotAProcedure,
    #[error("procedure 'main' must not have any parameters")]
    MainMustNotHaveParameters,

    #[error("undefined variable {name:?}")]
    UndefinedVariable { name: String },
    #[error("identifier {name:?} does not refer to a variable")]
    NotAVariable { name: String },
    #[error("undefined procedure {name:?}")]
    UndefinedProcedure { name: String },
    #[error("identifier {name:?} does not refer to a procedure")]
    CallOfNonProcedure { name: String },

    #[error("illegal assignment: cannot assign {value} to {target}")]
    IllegalAssignment { target: String, value: String },
    #[error("illegal assignment to an array")]
    IllegalAssignmentToArray,
    #[error("'if' condition must be a boolean, found {actual}")]
    IfConditionMustBeBoolean { actual: String },
    #[error("'while' condition must be a boolean, found {actual}")]
    WhileConditionMustBeBoolean { actual: String },
    #[error("no such operator {operator:?} for operand types {left} and {right:?}")]
    NoSuchOperator {
        operator: String,
        left: String,
        right: Option<String>,
    },
    #[error("indexing a non-array")]
    IndexingNonArray,
    #[error("indexing with a non-integer")]
    IndexingWithNonInteger,
    #[error("too many arguments in call of procedure {procedure:?}")]
    TooManyArguments { procedure: String },
    #[error("too few arguments in call of procedure {procedure:?}")]
    TooFewArguments { procedure: String },
    #[error("argument {index} of procedure {procedure:?} must be a variable")]
    ArgumentMustBeAVariable { procedure: String, index: usize },
    #[error("argument {index} of procedure {procedure:?}: expected {expected}, received {received}")]
    ArgumentTypeMismatch {
        procedure: String,
        index: usize,
        expected: String,
        received: String,
    },

    #[error("failed to write symbol table dump: {reason}")]
    TableDumpFailed { reason: String },
}
