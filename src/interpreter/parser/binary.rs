use crate::{
    ast::{BinaryOperator, Expr, Location},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{MAX_DEPTH, ParseResult, Subtree, TokenStream},
            unary::parse_leaf,
        },
    },
};

/// Parses an expression by precedence climbing.
///
/// A leaf is parsed first and then greedily extended: while the next token is
/// a binary operator that binds tighter than `min_precedence` (or equally
/// tight and right-associative), the operator is consumed, its right operand
/// is parsed at the operator's own precedence, and the two sides are combined.
///
/// The recursion produces right-leaning trees for increasing precedence and
/// the loop produces left-leaning chains, so `1 - 2 - 3` is `(1 - 2) - 3`
/// while `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.
///
/// Precedences: `+ -` = 1, `* /` = 2, prefix `+ -` = 3, `^ **` = 4.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an operand.
/// - `min_precedence`: Operators must bind tighter than this to be absorbed.
/// - `depth`: How many calls of this function enclose this one.
///
/// # Returns
/// The parsed expression tree and its height.
///
/// # Errors
/// `TooDeep` once either the nesting or the height of the tree exceeds
/// [`MAX_DEPTH`], plus whatever leaf parsing reports.
pub fn parse_expression(tokens: &mut TokenStream<'_, '_>,
                        min_precedence: u8,
                        depth: usize)
                        -> ParseResult<Subtree> {
    if depth > MAX_DEPTH {
        let location = tokens.peek().map_or_else(Location::default, |token| token.location);
        return Err(ParseError::TooDeep { location });
    }

    let (mut left, mut height) = parse_leaf(tokens, depth)?;

    while let Some(&token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && extends(op, min_precedence)
    {
        tokens.next();
        let (right, right_height) = parse_expression(tokens, op.precedence(), depth + 1)?;
        height = checked_height(height.max(right_height), token.location)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              location: token.location };
    }

    Ok((left, height))
}

/// Height of a node whose tallest child is `child_height` nodes high.
pub(in crate::interpreter::parser) const fn checked_height(child_height: usize,
                                                          location: Location)
                                                          -> ParseResult<usize> {
    if child_height >= MAX_DEPTH {
        return Err(ParseError::TooDeep { location });
    }
    Ok(child_height + 1)
}

/// Whether `op` may absorb the expression parsed so far at `min_precedence`.
const fn extends(op: BinaryOperator, min_precedence: u8) -> bool {
    let precedence = op.precedence();
    precedence > min_precedence || (precedence == min_precedence && op.is_right_associative())
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that cannot continue an expression.
///
/// # Example
/// ```
/// use curvexpr::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Pow),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Plus),
        TokenKind::Minus => Some(BinaryOperator::Minus),
        TokenKind::Mult => Some(BinaryOperator::Mult),
        TokenKind::Div => Some(BinaryOperator::Div),
        TokenKind::Pow => Some(BinaryOperator::Pow),
        _ => None,
    }
}
