use crate::{
    ast::{Expr, Location, UnaryOperator},
    error::ParseError,
    interpreter::{
        identifier::Identifier,
        lexer::TokenKind,
        parser::{
            binary::{checked_height, parse_expression},
            core::{ParseResult, Subtree, TokenStream},
            utils::parse_arguments,
        },
    },
};

/// Parses a leaf (operand) expression.
///
/// Grammar:
/// ```text
///     leaf := ("+" | "-") expression@3
///           | NUMBER
///           | IDENTIFIER ("(" arguments ")")?
///           | "(" expression@0 ")"
/// ```
/// The operand of a prefix operator is parsed at the prefix precedence, so
/// `-2^2` is `-(2^2)` while `-2*3` is `(-2)*3`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an operand.
/// - `depth`: Nesting of the enclosing `parse_expression` call.
///
/// # Returns
/// The parsed leaf and its height.
///
/// # Errors
/// `UnexpectedEndOfInput` at the end token, `UnexpectedToken` for any token
/// that cannot start an operand, and whatever nested parsing reports.
pub(crate) fn parse_leaf(tokens: &mut TokenStream<'_, '_>, depth: usize) -> ParseResult<Subtree> {
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { location: Location::default() });
    };
    let location = token.location;

    match &token.kind {
        TokenKind::Plus => parse_prefix(tokens, UnaryOperator::Plus, location, depth),
        TokenKind::Minus => parse_prefix(tokens, UnaryOperator::Minus, location, depth),
        TokenKind::Number(value) => Ok((Expr::Number { value: *value,
                                                       location },
                                        1)),
        TokenKind::Identifier(name) => parse_application(tokens, name, location, depth),
        TokenKind::LParen => parse_grouping(tokens, location, depth),
        TokenKind::End => Err(ParseError::UnexpectedEndOfInput { location }),
        _ => Err(ParseError::UnexpectedToken { token: token.describe(),
                                               location }),
    }
}

fn parse_prefix(tokens: &mut TokenStream<'_, '_>,
                op: UnaryOperator,
                location: Location,
                depth: usize)
                -> ParseResult<Subtree> {
    let (operand, height) = parse_expression(tokens, UnaryOperator::PRECEDENCE, depth + 1)?;
    Ok((Expr::Unary { op,
                      operand: Box::new(operand),
                      location },
        checked_height(height, location)?))
}

/// Parses an identifier reference with an optional argument list.
///
/// The name is resolved against the special identifier table here, once, so
/// later passes never compare strings for builtins. Argument counts are not
/// validated; that is the checker's job.
fn parse_application(tokens: &mut TokenStream<'_, '_>,
                     name: &str,
                     location: Location,
                     depth: usize)
                     -> ParseResult<Subtree> {
    let (arguments, height) = match tokens.next_if(|token| token.kind == TokenKind::LParen) {
        Some(open) => parse_arguments(tokens, open.location, depth)?,
        None => (Vec::new(), 0),
    };

    Ok((Expr::Application { identifier: Identifier::resolve(name),
                            arguments,
                            location },
        checked_height(height, location)?))
}

/// Parses a parenthesized expression.
///
/// The opening parenthesis has already been consumed. The inner expression is
/// returned as-is (no wrapper node).
fn parse_grouping(tokens: &mut TokenStream<'_, '_>,
                  open_location: Location,
                  depth: usize)
                  -> ParseResult<Subtree> {
    let subtree = parse_expression(tokens, 0, depth + 1)?;
    match tokens.next() {
        Some(token) if token.kind == TokenKind::RParen => Ok(subtree),
        _ => Err(ParseError::MissingClosingParen { location: open_location }),
    }
}
