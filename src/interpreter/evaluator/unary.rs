use crate::{ast::UnaryOperator, interpreter::evaluator::core::Environment};

impl Environment<'_> {
    /// Evaluates a prefix operator on an already evaluated operand.
    ///
    /// # Example
    /// ```
    /// use curvexpr::{ast::UnaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Minus, 2.5), -2.5);
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Plus, 2.5), 2.5);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f32) -> f32 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Minus => -value,
        }
    }
}
