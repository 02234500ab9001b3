/// Parser entry point and shared result type.
///
/// Parses a complete token list into a single expression and rejects any
/// tokens left over after it.
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing over `+ - * / ^`, with `^` chaining to the
/// right and everything else to the left.
pub mod binary;

/// Leaf parsing.
///
/// Parses operands: numbers, prefix `+`/`-`, identifiers and calls, and
/// parenthesized subexpressions.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides the argument-list parser used for identifier applications.
pub mod utils;
