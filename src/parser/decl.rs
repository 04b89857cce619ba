//! Global declaration parsing: type aliases and procedures.

use crate::{
    ast::ast::{
        GlobalDeclaration, ParameterDeclaration, ProcedureDeclaration, TypeDeclaration,
        VariableDeclaration,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_stmt, types::parse_type};

pub fn parse_global_declaration(parser: &mut Parser) -> Result<GlobalDeclaration, Error> {
    match parser.current_token_kind() {
        TokenKind::Type => Ok(GlobalDeclaration::Type(parse_type_declaration(parser)?)),
        TokenKind::Proc => Ok(GlobalDeclaration::Procedure(parse_procedure_declaration(parser)?)),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a type or procedure declaration"),
            },
            parser.get_position(),
        )),
    }
}

/// `type name = type_expression;`
pub fn parse_type_declaration(parser: &mut Parser) -> Result<TypeDeclaration, Error> {
    let position = parser.expect(TokenKind::Type)?.span.start;
    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Equals)?;
    let type_expression = parse_type(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(TypeDeclaration {
        name,
        type_expression,
        position,
    })
}

/// `proc name(params) { var ...; statements }`
pub fn parse_procedure_declaration(parser: &mut Parser) -> Result<ProcedureDeclaration, Error> {
    parser.expect(TokenKind::Proc)?;
    let name = parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::OpenParen)?;
    let mut parameters = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            parameters.push(parse_parameter_declaration(parser)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;

    let mut variables = vec![];
    while parser.current_token_kind() == TokenKind::Var {
        variables.push(parse_variable_declaration(parser)?);
    }

    let mut body = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected_token());
        }
        body.push(parse_stmt(parser)?);
    }
    parser.expect(TokenKind::CloseCurly)?;

    Ok(ProcedureDeclaration {
        name: name.value,
        parameters,
        variables,
        body,
        position: name.span.start,
    })
}

/// `[ref] name: type_expression`
pub fn parse_parameter_declaration(parser: &mut Parser) -> Result<ParameterDeclaration, Error> {
    let is_reference = parser.current_token_kind() == TokenKind::Ref;
    if is_reference {
        parser.advance();
    }

    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Colon)?;
    let type_expression = parse_type(parser)?;

    Ok(ParameterDeclaration {
        name: name.value,
        type_expression,
        is_reference,
        position: name.span.start,
    })
}

/// `var name: type_expression;`
pub fn parse_variable_declaration(parser: &mut Parser) -> Result<VariableDeclaration, Error> {
    parser.expect(TokenKind::Var)?;
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Colon)?;
    let type_expression = parse_type(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(VariableDeclaration {
        name: name.value,
        type_expression,
        position: name.span.start,
    })
}
