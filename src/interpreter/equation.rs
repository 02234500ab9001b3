use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::{Environment, Variables},
        lexer::tokenize,
        parser::core::parse,
    },
};

/// A parsed and checked expression, ready to be evaluated many times.
///
/// An `Equation` is immutable and `Send + Sync`: parse it once, then share it
/// between as many sampling threads as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    expression: Expr,
    value:      Option<f32>,
}

impl Equation {
    /// Lexes, parses and checks `text`.
    ///
    /// With `t_bound` set, `t` may appear in the text and nothing is
    /// evaluated yet. Without it, `t` is rejected like any unbound name and
    /// the expression is evaluated once against `variables`; the result is
    /// available from [`Equation::value`].
    ///
    /// # Errors
    /// The first lexing, parsing, binding or arity error.
    pub fn parse(text: &str, variables: &Variables, t_bound: bool) -> Result<Self, Error> {
        let tokens = tokenize(text)?;
        let expression = parse(&tokens)?;

        let env = if t_bound {
            Environment::equation(variables)
        } else {
            Environment::constant(variables)
        };
        env.check(&expression)?;

        let value = (!t_bound).then(|| env.eval(&expression));
        Ok(Self { expression, value })
    }

    /// The checked expression tree.
    #[must_use]
    pub const fn expression(&self) -> &Expr {
        &self.expression
    }

    /// The value computed at parse time, present only when `t` was unbound.
    #[must_use]
    pub const fn value(&self) -> Option<f32> {
        self.value
    }

    /// Evaluates the equation at `t` with the given named values.
    #[must_use]
    pub fn eval(&self, t: f32, variables: &Variables) -> f32 {
        Environment::equation(variables).at(t).eval(&self.expression)
    }
}
