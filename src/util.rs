/// Numeric helpers.
///
/// This module provides the total arithmetic the evaluator relies on
/// (division and remainder that never produce `inf`/`NaN` from a zero
/// divisor) and the index-to-float conversion used when sampling.
pub mod num;
