/// Lexing and parsing errors.
///
/// Defines all error types that can occur while turning equation text into
/// an expression tree: unrecognized characters, unterminated comments,
/// unexpected tokens and unbalanced parentheses.
pub mod parse_error;
/// Binding and arity errors.
///
/// Contains the diagnostics produced by the checker when an identifier is not
/// bound or is applied to the wrong number of arguments.
pub mod check_error;

pub use check_error::CheckError;
pub use parse_error::ParseError;

/// Every way turning equation text into an evaluable [`Equation`] can fail.
///
/// Located errors render as `"(line,col) message"` with 1-based positions.
///
/// [`Equation`]: crate::Equation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree refers to unbound names or misuses a builtin.
    #[error(transparent)]
    Check(#[from] CheckError),
    /// Variable names and values were supplied as slices of different length.
    #[error("{names} variable name(s) but {values} value(s)")]
    VariableCountMismatch {
        /// Number of names supplied.
        names:  usize,
        /// Number of values supplied.
        values: usize,
    },
    /// The same variable name was supplied twice.
    #[error("variable '{name}' is bound more than once")]
    DuplicateVariable {
        /// The repeated name.
        name: String,
    },
}
