use crate::{
    ast::{Expr, Location},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::parse_expression,
            core::{ParseResult, TokenStream},
        },
    },
};

/// Parses a comma-separated argument list up to the closing `)`.
///
/// The opening parenthesis has already been consumed. Each argument is a full
/// expression parsed at the lowest precedence. An immediately encountered `)`
/// produces an empty list.
///
/// Grammar (simplified): `arguments := (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after `(`.
/// - `open_location`: Location of the `(`, blamed when `)` is missing.
/// - `depth`: Nesting of the enclosing `parse_expression` call.
///
/// # Returns
/// The parsed arguments, in source order, and the height of the tallest.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - something other than `,` or `)` follows an argument.
pub(in crate::interpreter::parser) fn parse_arguments(tokens: &mut TokenStream<'_, '_>,
                                                      open_location: Location,
                                                      depth: usize)
                                                      -> ParseResult<(Vec<Expr>, usize)> {
    let mut arguments = Vec::new();
    let mut height = 0;

    if tokens.next_if(|token| token.kind == TokenKind::RParen).is_some() {
        return Ok((arguments, height));
    }

    loop {
        let (argument, argument_height) = parse_expression(tokens, 0, depth + 1)?;
        arguments.push(argument);
        height = height.max(argument_height);
        match tokens.next().map(|token| &token.kind) {
            Some(TokenKind::Comma) => {},
            Some(TokenKind::RParen) => break,
            _ => return Err(ParseError::MissingClosingParen { location: open_location }),
        }
    }

    Ok((arguments, height))
}
