use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_expression,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest accepted expression tree, counted in nodes from the root to the
/// farthest leaf. Parenthesized groups count toward the same limit.
///
/// The checker and evaluator recurse once per level, so trees from the
/// parser never exhaust the stack.
pub const MAX_DEPTH: usize = 256;

/// A parsed subtree together with its height in nodes.
pub type Subtree = (Expr, usize);

/// Token cursor shared by all parsing functions.
///
/// The underlying slice always ends with a [`TokenKind::End`] token, so
/// peeking only yields `None` once that token has been consumed.
pub type TokenStream<'a, 's> = Peekable<Iter<'a, Token<'s>>>;

/// Parses a full token list into one expression.
///
/// This is the entry point for expression parsing. It parses an expression at
/// the lowest precedence and then requires the end-of-input token.
///
/// # Errors
/// Propagates the first error from expression parsing, or reports
/// `UnexpectedTrailingToken` if anything follows a complete expression.
/// Input nested deeper than [`MAX_DEPTH`] is rejected with `TooDeep`.
///
/// # Example
/// ```
/// use curvexpr::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// ```
pub fn parse(tokens: &[Token<'_>]) -> ParseResult<Expr> {
    let mut stream = tokens.iter().peekable();
    let (expr, _) = parse_expression(&mut stream, 0, 0)?;

    match stream.next() {
        None
        | Some(Token { kind: TokenKind::End,
                       .. }) => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedTrailingToken { token:    token.describe(),
                                                                 location: token.location, }),
    }
}
