use crate::ast::Location;

/// Represents all errors that can occur during lexing or parsing.
///
/// Lexing and parsing stop at the first error, so at most one of these is
/// ever produced per call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("{location} unexpected character '{character}'")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it appears.
        location:  Location,
    },
    /// The input ended inside a `/* ... */` comment.
    #[error("{location} non-terminated multiline comment")]
    UnterminatedComment {
        /// Where the outermost comment opens.
        location: Location,
    },
    /// A numeric literal too large to represent as an `f32`.
    #[error("{location} number '{literal}' is out of range")]
    NumberOutOfRange {
        /// The literal as written.
        literal:  String,
        /// Where it appears.
        location: Location,
    },
    /// A `:` not immediately followed by `=`.
    #[error("{location} expected '=' after ':'")]
    ExpectedEqualAfterColon {
        /// Where the colon appears.
        location: Location,
    },
    /// Reached the end of input where an operand was required.
    #[error("{location} unexpected end of input")]
    UnexpectedEndOfInput {
        /// Where the input ended.
        location: Location,
    },
    /// Found a token that cannot start an operand.
    #[error("{location} unexpected token '{token}'")]
    UnexpectedToken {
        /// Source text of the token.
        token:    String,
        /// Where the token appears.
        location: Location,
    },
    /// An opening parenthesis without its closing partner.
    #[error("{location} '(' is missing ')'")]
    MissingClosingParen {
        /// Where the unmatched `(` appears.
        location: Location,
    },
    /// Tokens left over after a complete expression.
    #[error("{location} unexpected token '{token}' after end of expression")]
    UnexpectedTrailingToken {
        /// Source text of the first leftover token.
        token:    String,
        /// Where the token appears.
        location: Location,
    },
    /// Parentheses, prefix operators or operator chains nested past the
    /// supported depth.
    #[error("{location} expression nested too deeply")]
    TooDeep {
        /// Where the limit was crossed.
        location: Location,
    },
}

impl ParseError {
    /// Gets the source location of the error.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnexpectedCharacter { location, .. }
            | Self::UnterminatedComment { location }
            | Self::NumberOutOfRange { location, .. }
            | Self::ExpectedEqualAfterColon { location }
            | Self::UnexpectedEndOfInput { location }
            | Self::UnexpectedToken { location, .. }
            | Self::MissingClosingParen { location }
            | Self::UnexpectedTrailingToken { location, .. }
            | Self::TooDeep { location } => *location,
        }
    }
}
