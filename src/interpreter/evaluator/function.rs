use std::f32::consts::{E, PI, TAU};

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::Environment,
        identifier::{Identifier, Special},
    },
    util::num::safe_rem,
};

impl Environment<'_> {
    /// Evaluates an identifier application.
    ///
    /// Builtins dispatch to [`Environment::eval_special`]; user variables are
    /// looked up by name and read as `0.0` when unbound.
    #[must_use]
    pub fn eval_application(&self, identifier: &Identifier, arguments: &[Expr]) -> f32 {
        match identifier {
            Identifier::Special(special) => self.eval_special(*special, arguments),
            Identifier::Variable(name) => self.variables.get(name).unwrap_or(0.0),
        }
    }

    /// Evaluates a builtin applied to `arguments`.
    ///
    /// Arguments beyond the builtin's arity are ignored and missing ones read
    /// as `0.0`, so trees that skipped the checker still evaluate.
    ///
    /// # Example
    /// ```
    /// use curvexpr::{
    ///     ast::{Expr, Location},
    ///     interpreter::{
    ///         evaluator::core::{Environment, Variables},
    ///         identifier::Special,
    ///     },
    /// };
    ///
    /// let variables = Variables::new();
    /// let env = Environment::equation(&variables).at(0.25);
    /// let two = Expr::Number { value:    2.0,
    ///                          location: Location::default(), };
    ///
    /// assert_eq!(env.eval_special(Special::T, &[]), 0.25);
    /// assert_eq!(env.eval_special(Special::Sqrt, &[two]), 2.0_f32.sqrt());
    /// ```
    #[must_use]
    pub fn eval_special(&self, special: Special, arguments: &[Expr]) -> f32 {
        let arg = |index: usize| arguments.get(index).map_or(0.0, |argument| self.eval(argument));

        match special {
            Special::Sin => arg(0).sin(),
            Special::Cos => arg(0).cos(),
            Special::Tan => arg(0).tan(),
            Special::Sqrt => arg(0).sqrt(),
            Special::Log => arg(0).ln(),
            Special::Log10 => arg(0).log10(),
            Special::Floor => arg(0).floor(),
            Special::Ceil => arg(0).ceil(),
            Special::Round => arg(0).round(),
            Special::Tanh => arg(0).tanh(),
            Special::Exp => arg(0).exp(),
            Special::Pow => arg(0).powf(arg(1)),
            Special::Mod => safe_rem(arg(0), arg(1)),
            Special::Pi => PI,
            Special::Tau => TAU,
            Special::Euler => E,
            Special::T => self.t,
        }
    }
}
