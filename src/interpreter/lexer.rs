use std::fmt;

use logos::{FilterResult, Lexer, Logos};

use crate::{ast::Location, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents the kind of a lexical token.
///
/// Whitespace and comments are consumed by the lexer and never reach the
/// parser. [`TokenKind::End`] is never matched from the source; it is appended
/// by [`tokenize`] so the parser always has a lookahead token.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `3`, `3.25`, `2.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f32),
    /// Identifier tokens such as `t`, `sin` or `r'`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_']*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mult,
    /// `/`
    #[token("/")]
    Div,
    /// `**` or `^`
    #[token("**")]
    #[token("^")]
    Pow,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:=` or `=`. A lone `:` is a lexical error.
    #[token("=")]
    #[token(":=")]
    #[token(":", dangling_colon)]
    Equal,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    LineComment,
    /// `/* Block comments, which may /* nest */. */`
    #[token("/*", block_comment)]
    BlockComment,
    /// Spaces, tabs, carriage returns, form feeds and newlines.
    #[regex(r"[ \t\r\n\f]+", whitespace)]
    Whitespace,
    /// End of input.
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Mult => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Pow => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::Equal => write!(f, ":="),
            Self::LineComment | Self::BlockComment | Self::Whitespace => Ok(()),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// A token together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'s> {
    /// What was recognized.
    pub kind:     TokenKind,
    /// The span of source text the token was matched from; empty for
    /// synthesized tokens.
    pub text:     &'s str,
    /// Line and column of the first character.
    pub location: Location,
}

impl Token<'_> {
    /// Text used to name this token in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.text.is_empty() {
            self.kind.to_string()
        } else {
            self.text.to_string()
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and a cursor (a byte offset and its column) that
/// only ever moves forward, so locating each token costs only the characters
/// since the previous one.
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:   usize,
    /// Byte offset of the last located position.
    pub cursor: usize,
    /// Column of `cursor`, starting at 1.
    pub column: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:   1,
               cursor: 0,
               column: 1, }
    }
}

impl LexerExtras {
    fn newline_at(&mut self, offset: usize) {
        self.line += 1;
        self.cursor = offset + 1;
        self.column = 1;
    }

    /// Location of `offset`, which must not precede the cursor.
    fn location(&mut self, source: &str, offset: usize) -> Location {
        self.column += source[self.cursor..offset].chars().count();
        self.cursor = offset;
        Location::new(self.line, self.column)
    }
}

/// Why the lexer stopped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with the current character.
    #[default]
    UnexpectedCharacter,
    /// A numeric literal that overflows `f32`.
    NumberOutOfRange,
    /// Input ended inside a block comment.
    UnterminatedComment,
    /// A `:` without the `=` that completes `:=`.
    DanglingColon,
}

impl LexErrorKind {
    fn into_parse_error(self, slice: &str, location: Location) -> ParseError {
        match self {
            Self::UnexpectedCharacter => {
                let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                ParseError::UnexpectedCharacter { character, location }
            },
            Self::NumberOutOfRange => ParseError::NumberOutOfRange { literal: slice.to_string(),
                                                                     location },
            Self::UnterminatedComment => ParseError::UnterminatedComment { location },
            Self::DanglingColon => ParseError::ExpectedEqualAfterColon { location },
        }
    }
}

/// Converts equation text into a flat token list.
///
/// The list always ends with a [`TokenKind::End`] token. Whenever a number is
/// directly followed by an identifier, a zero-width `*` token is inserted
/// between them so that `12t` reads as `12 * t`. Identifiers followed by
/// numbers are never split: `t12` is a single identifier.
///
/// # Errors
/// Stops at the first character that starts no token, at a number too large
/// for `f32`, at a `:` without `=`, or at a block comment that is still open
/// at the end of input.
///
/// # Example
/// ```
/// use curvexpr::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("12t").unwrap().into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Number(12.0),
///                 TokenKind::Mult,
///                 TokenKind::Identifier("t".to_string()),
///                 TokenKind::End]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token<'_>>> {
    let mut tokens = Vec::with_capacity(2 * source.len() + 1);
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let start = lexer.span().start;
        let location = lexer.extras.location(source, start);
        let kind = result.map_err(|kind| kind.into_parse_error(lexer.slice(), location))?;

        if matches!(kind, TokenKind::Identifier(_))
           && matches!(tokens.last(),
                       Some(Token { kind: TokenKind::Number(_),
                                    .. }))
        {
            tokens.push(Token { kind: TokenKind::Mult,
                                text: "",
                                location });
        }

        tokens.push(Token { kind,
                            text: lexer.slice(),
                            location });
    }

    tokens.push(Token { kind:     TokenKind::End,
                        text:     "",
                        location: lexer.extras.location(source, source.len()), });

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// Rust's float grammar accepts every form the token regexes admit,
/// including a bare trailing dot (`2.`) and a missing integer part (`.5`).
/// Literals that round to infinity are rejected.
fn parse_number(lex: &Lexer<TokenKind>) -> Result<f32, LexErrorKind> {
    match lex.slice().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexErrorKind::NumberOutOfRange),
    }
}

const fn dangling_colon(_: &Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::DanglingColon)
}

fn whitespace(lex: &mut Lexer<TokenKind>) -> logos::Skip {
    let start = lex.span().start;
    for (offset, _) in lex.slice().match_indices('\n') {
        lex.extras.newline_at(start + offset);
    }
    logos::Skip
}

/// Skips a block comment, honoring nested `/* ... */` pairs.
///
/// Line tracking is only advanced once the comment is known to be closed,
/// so an unterminated comment is reported where it opens.
fn block_comment(lex: &mut Lexer<TokenKind>) -> FilterResult<(), LexErrorKind> {
    let body_start = lex.span().end;
    let body = lex.remainder().as_bytes();

    let mut depth = 1usize;
    let mut newlines = Vec::new();
    let mut i = 0;

    while i < body.len() {
        match (body[i], body.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            },
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    for offset in newlines {
                        lex.extras.newline_at(body_start + offset);
                    }
                    lex.bump(i);
                    return FilterResult::Skip;
                }
            },
            (b'\n', _) => {
                newlines.push(i);
                i += 1;
            },
            _ => i += 1,
        }
    }

    lex.bump(body.len());
    FilterResult::Error(LexErrorKind::UnterminatedComment)
}
