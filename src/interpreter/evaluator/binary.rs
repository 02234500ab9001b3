use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::Environment,
    util::num::safe_div,
};

impl Environment<'_> {
    /// Evaluates a binary arithmetic operation on already evaluated operands.
    ///
    /// `+`, `-` and `*` are plain IEEE-754 operations and `^` is `powf`.
    /// Division returns `0.0` for an exactly zero denominator instead of
    /// `inf` or `NaN`.
    ///
    /// # Example
    /// ```
    /// use curvexpr::{ast::BinaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Pow, 2.0, 9.0), 512.0);
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Div, 1.0, 0.0), 0.0);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f32, right: f32) -> f32 {
        match op {
            BinaryOperator::Plus => left + right,
            BinaryOperator::Minus => left - right,
            BinaryOperator::Mult => left * right,
            BinaryOperator::Div => safe_div(left, right),
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
