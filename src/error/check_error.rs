use crate::ast::Location;

/// Represents the diagnostics reported by the checker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// A name that is neither a builtin nor a bound variable, or `t` when the
    /// parameter is not bound.
    #[error("{location} '{name}' identifier not bound")]
    UnboundIdentifier {
        /// The identifier as written.
        name:     String,
        /// Where it appears.
        location: Location,
    },
    /// A constant or variable applied to arguments.
    #[error("{location} '{name}' is not a function (got {got})")]
    NotAFunction {
        /// The identifier.
        name:     String,
        /// Number of arguments supplied.
        got:      usize,
        /// Where it appears.
        location: Location,
    },
    /// A builtin function applied to the wrong number of arguments.
    #[error("{location} '{name}' expects {expected} {} (got {got})", argument_noun(.expected))]
    ArityMismatch {
        /// The builtin.
        name:     String,
        /// Declared arity.
        expected: usize,
        /// Number of arguments supplied.
        got:      usize,
        /// Where it appears.
        location: Location,
    },
}

impl CheckError {
    /// Gets the source location of the error.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnboundIdentifier { location, .. }
            | Self::NotAFunction { location, .. }
            | Self::ArityMismatch { location, .. } => *location,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn argument_noun(count: &usize) -> &'static str {
    if *count == 1 { "argument" } else { "arguments" }
}
