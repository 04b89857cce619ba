//! Type expression parsing.
//!
//! Type expressions are either the name of a declared type or an array
//! type `array [size] of base`, where `base` is again a type expression.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::DataType,
        types::{ArrayTypeExpression, NamedTypeExpression, TypeExpression},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_integer, parser::Parser};

/// Type alias for type expression handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeExpression, Error>;

/// Type alias for the type expression lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_named_type);
    parser.type_nud(TokenKind::Array, parse_array_type);
}

pub fn parse_named_type(parser: &mut Parser) -> Result<TypeExpression, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    Ok(TypeExpression::Named(NamedTypeExpression {
        name: token.value,
        position: token.span.start,
        data_type: DataType::new(),
    }))
}

pub fn parse_array_type(parser: &mut Parser) -> Result<TypeExpression, Error> {
    let position = parser.expect(TokenKind::Array)?.span.start;
    parser.expect(TokenKind::OpenBracket)?;

    let size_token = parser.advance().clone();
    let array_size = u32::try_from(parse_integer(&size_token)?).map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: size_token.value.clone(),
            },
            size_token.span.start.clone(),
        )
    })?;

    parser.expect(TokenKind::CloseBracket)?;
    parser.expect(TokenKind::Of)?;

    let base_type = parse_type(parser)?;

    Ok(TypeExpression::Array(ArrayTypeExpression {
        base_type: Box::new(base_type),
        array_size,
        position,
        data_type: DataType::new(),
    }))
}

pub fn parse_type(parser: &mut Parser) -> Result<TypeExpression, Error> {
    match parser.get_type_nud_lookup().get(&parser.current_token_kind()) {
        Some(handler) => {
            let handler = *handler;
            handler(parser)
        }
        None => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a type"),
            },
            parser.get_position(),
        )),
    }
}
