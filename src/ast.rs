use std::fmt;

use crate::interpreter::identifier::Identifier;

/// A position in the source text.
///
/// Both fields are 1-based. The column counts characters, not bytes, and
/// restarts at 1 after every newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Location {
    /// Creates a location from a 1-based line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// A tree is built once per parse and never mutated afterwards, so a single
/// tree can be checked once and then evaluated from many threads at the same
/// time. Every node records the location of the token that introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. `Number { value: 0.0, .. }` doubles as the empty
    /// expression.
    Number {
        /// The literal value.
        value:    f32,
        /// Location of the literal.
        location: Location,
    },
    /// A prefix `+` or `-`.
    Unary {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Location of the operator.
        location: Location,
    },
    /// A binary arithmetic operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Location of the operator.
        location: Location,
    },
    /// A reference to a builtin or a user variable, with optional call
    /// arguments (e.g. `t`, `pi`, `sin(x)`, `pow(a, b)`).
    Application {
        /// The resolved identifier.
        identifier: Identifier,
        /// The call arguments; empty when no parentheses were given.
        arguments:  Vec<Self>,
        /// Location of the identifier.
        location:   Location,
    },
}

impl Expr {
    /// Gets the source location from `self`.
    /// ## Example
    /// ```
    /// use curvexpr::ast::{Expr, Location};
    ///
    /// let expr = Expr::Number { value:    2.0,
    ///                           location: Location::new(3, 7), };
    ///
    /// assert_eq!(expr.location(), Location::new(3, 7));
    /// ```
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Number { location, .. }
            | Self::Unary { location, .. }
            | Self::Binary { location, .. }
            | Self::Application { location, .. } => *location,
        }
    }

    /// Iterates over the direct subexpressions of `self`, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        let none: &[Self] = &[];
        let (pair, arguments) = match self {
            Self::Number { .. } => ([None, None], none),
            Self::Unary { operand, .. } => ([Some(operand.as_ref()), None], none),
            Self::Binary { left, right, .. } => ([Some(left.as_ref()), Some(right.as_ref())], none),
            Self::Application { arguments, .. } => ([None, None], arguments.as_slice()),
        };
        pair.into_iter().flatten().chain(arguments)
    }
}

/// Prints the expression fully parenthesized, in a form that parses back to
/// the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Unary { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::Binary { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Application { identifier,
                                arguments,
                                .. } => {
                write!(f, "{}", identifier.name())?;
                if arguments.is_empty() {
                    return Ok(());
                }
                write!(f, "(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`), also produced by implicit multiplication.
    Mult,
    /// Safe division (`/`)
    Div,
    /// Exponentiation (`^` or `**`)
    Pow,
}

impl BinaryOperator {
    /// Binding strength of the operator; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mult | Self::Div => 2,
            Self::Pow => 4,
        }
    }

    /// Only `Pow` chains to the right: `2^3^2` is `2^(3^2)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Negation (`-x`).
    Minus,
}

impl UnaryOperator {
    /// Prefix operators bind tighter than `*` but looser than `^`, so `-2^2`
    /// is `-(2^2)`.
    pub const PRECEDENCE: u8 = 3;
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mult => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
