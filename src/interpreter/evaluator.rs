/// Core evaluation logic and the binding environment.
///
/// Contains [`Variables`](core::Variables), the
/// [`Environment`](core::Environment) the checker and evaluator share, and
/// the tree-walking `eval` entry point.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements prefix `+` (identity) and `-` (negation).
pub mod unary;

/// Binary operator evaluation logic.
///
/// Implements `+ - * ^` as IEEE-754 operations and `/` as safe division.
pub mod binary;

/// Application evaluation.
///
/// Evaluates builtin functions and constants, the parameter `t`, and user
/// variable lookups.
pub mod function;
