use crate::{
    ast::statements::{
        AssignStatement, CallStatement, CompoundStatement, EmptyStatement, IfStatement, Statement,
        WhileStatement,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::{parse_expr, parse_variable}, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        Some(handler) => {
            let handler = *handler;
            handler(parser)
        }
        None => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a statement"),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let position = parser.advance().span.start.clone();

    Ok(Statement::Empty(EmptyStatement { position }))
}

pub fn parse_compound_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let position = parser.advance().span.start.clone();

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected_token());
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Statement::Compound(CompoundStatement { statements, position }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let position = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_part = parse_stmt(parser)?;

    let else_part = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_stmt(parser)?
    } else {
        Statement::Empty(EmptyStatement {
            position: parser.get_position(),
        })
    };

    Ok(Statement::If(IfStatement {
        condition,
        then_part: Box::new(then_part),
        else_part: Box::new(else_part),
        position,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let position = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Statement::While(WhileStatement {
        condition,
        body: Box::new(body),
        position,
    }))
}

/// Statements starting with a name: `p(args);` or `target := value;`
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if parser.peek_token_kind() == TokenKind::OpenParen {
        parse_call_stmt(parser)
    } else {
        parse_assign_stmt(parser)
    }
}

pub fn parse_call_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Call(CallStatement {
        procedure_name: name.value,
        arguments,
        position: name.span.start,
    }))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let target = parse_variable(parser)?;
    let position = parser.expect(TokenKind::Assignment)?.span.start;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Assign(AssignStatement {
        target,
        value,
        position,
    }))
}
