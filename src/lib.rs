//! # curvexpr
//!
//! curvexpr is the expression language behind parametric curves. It lexes,
//! parses, checks, and evaluates textual formulas such as `2*pi*sin(3t) + r`
//! so they can be sampled at many values of the parameter `t`.
//!
//! A formula is parsed and checked once, producing an immutable
//! [`Equation`]. Evaluation is a pure tree walk that never fails and never
//! allocates, so one equation can be sampled from many threads at once.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed equations.
///
/// This module declares the `Expr` enum and related types that represent an
/// equation as a tree. The AST is built by the parser, validated by the
/// checker and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the four expression node kinds and the operator enums.
/// - Attaches source locations to every node for error reporting.
/// - Prints trees back as fully parenthesized source text.
pub mod ast;
/// Provides unified error types for parsing and checking.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// checking an equation. Every located error renders as `"(line,col)
/// message"`.
///
/// # Responsibilities
/// - Defines error enums for each failure mode (lexer/parser, checker).
/// - Attaches 1-based line and column locations to every diagnostic.
/// - Wraps all of them in one crate-level [`Error`](error::Error).
pub mod error;
/// Orchestrates turning text into values.
///
/// This module ties together lexing, parsing, identifier resolution, checking
/// and evaluation, plus sampling of equations over ranges of `t`.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, checker and evaluator.
/// - Keeps the builtin identifier table in one place.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Numeric helpers shared by the evaluator and the sampler.
pub mod util;

mod proptests;

pub use crate::{
    error::Error,
    interpreter::{
        equation::Equation,
        evaluator::core::{Environment, Variables},
        sampler::{SampleRange, sample, sample_parallel},
    },
};

/// Parses and checks an equation.
///
/// With `t_bound` set ("equation mode") the text may use `t` and is not
/// evaluated. Without it ("eval mode") `t` is unbound and the expression is
/// evaluated once right away; read the result with [`Equation::value`].
///
/// # Errors
/// Returns the first lexing, parsing, binding or arity error. Its `Display`
/// output is the message to show to the user.
///
/// # Examples
/// ```
/// use curvexpr::{Variables, eval_with_t, parse_equation};
///
/// let equation = parse_equation("2*pi*sin(t)", &Variables::new(), true).unwrap();
/// assert_eq!(eval_with_t(&equation, 0.0), 0.0);
///
/// let constant = parse_equation("2^3^2", &Variables::new(), false).unwrap();
/// assert_eq!(constant.value(), Some(512.0));
///
/// let err = parse_equation("sin(1, 2)", &Variables::new(), true).unwrap_err();
/// assert_eq!(err.to_string(), "(1,1) 'sin' expects 1 argument (got 2)");
/// ```
pub fn parse_equation(text: &str, variables: &Variables, t_bound: bool) -> Result<Equation, Error> {
    Equation::parse(text, variables, t_bound)
}

/// Evaluates a previously parsed equation at `t` with no named variables.
#[must_use]
pub fn eval_with_t(equation: &Equation, t: f32) -> f32 {
    equation.eval(t, &Variables::new())
}
