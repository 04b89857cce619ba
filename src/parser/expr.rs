use crate::{
    ast::{
        ast::DataType,
        expressions::{
            ArrayAccess, BinaryExpression, Expression, IntLiteral, NamedVariable, Operator,
            UnaryExpression, UnaryOperator, Variable, VariableExpression,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected_token()),
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while *parser.get_bp_lookup().get(&parser.current_token_kind()).unwrap_or(&BindingPower::Default) > bp {
        let token_kind = parser.current_token_kind();
        let (led, token_bp) = match (parser.get_led_lookup().get(&token_kind), parser.get_bp_lookup().get(&token_kind)) {
            (Some(led), Some(token_bp)) => (*led, *token_bp),
            _ => return Err(parser.unexpected_token()),
        };

        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

/// Value of an integer literal token: decimal, hexadecimal or character.
pub fn parse_integer(token: &Token) -> Result<i32, Error> {
    let number_error = || {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    };

    match token.kind {
        TokenKind::Number => token.value.parse::<i32>().map_err(|_| number_error()),
        // Hex literals spell out the 32 bit pattern, so 0xFFFFFFFF is -1.
        TokenKind::HexNumber => u32::from_str_radix(&token.value[2..], 16)
            .map(|value| value as i32)
            .map_err(|_| number_error()),
        TokenKind::Character => match token.value.as_str() {
            "\\n" => Ok('\n' as i32),
            value => value.chars().next().map(|c| c as i32).ok_or_else(number_error),
        },
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("expected an integer literal"),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance().clone();
    let value = parse_integer(&token)?;

    Ok(Expression::IntLiteral(IntLiteral {
        value,
        position: token.span.start,
        data_type: DataType::new(),
    }))
}

/// `name` followed by any number of `[index]` suffixes.
pub fn parse_variable(parser: &mut Parser) -> Result<Variable, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    let position = name.span.start.clone();

    let mut variable = Variable::Named(NamedVariable {
        name: name.value,
        position: position.clone(),
        data_type: DataType::new(),
    });

    while parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();
        let index = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseBracket)?;

        variable = Variable::ArrayAccess(ArrayAccess {
            array: Box::new(variable),
            index: Box::new(index),
            position: position.clone(),
            data_type: DataType::new(),
        });
    }

    Ok(variable)
}

pub fn parse_variable_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let variable = parse_variable(parser)?;

    Ok(Expression::Variable(VariableExpression {
        position: variable.position().clone(),
        variable,
        data_type: DataType::new(),
    }))
}

fn operator_of(token: &Token) -> Result<Operator, Error> {
    match token.kind {
        TokenKind::Plus => Ok(Operator::Add),
        TokenKind::Dash => Ok(Operator::Sub),
        TokenKind::Star => Ok(Operator::Mul),
        TokenKind::Slash => Ok(Operator::Div),
        TokenKind::Equals => Ok(Operator::Equ),
        TokenKind::NotEquals => Ok(Operator::Neq),
        TokenKind::Less => Ok(Operator::Lst),
        TokenKind::LessEquals => Ok(Operator::Lse),
        TokenKind::Greater => Ok(Operator::Grt),
        TokenKind::GreaterEquals => Ok(Operator::Gre),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expression, bp: BindingPower) -> Result<Expression, Error> {
    let operator_token = parser.advance().clone();
    let operator = operator_of(&operator_token)?;

    let right = parse_expr(parser, bp)?;

    // Comparisons do not chain: `a < b < c` is rejected.
    if bp == BindingPower::Relational
        && parser.get_bp_lookup().get(&parser.current_token_kind()) == Some(&BindingPower::Relational)
    {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("comparison operators cannot be chained"),
            },
            parser.get_position(),
        ));
    }

    Ok(Expression::Binary(BinaryExpression {
        operator,
        left_operand: Box::new(left),
        right_operand: Box::new(right),
        position: operator_token.span.start,
        data_type: DataType::new(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.advance().clone();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expression::Unary(UnaryExpression {
        operator: UnaryOperator::Minus,
        operand: Box::new(operand),
        position: operator_token.span.start,
        data_type: DataType::new(),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
