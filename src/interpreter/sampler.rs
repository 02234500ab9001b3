use rayon::prelude::*;

use crate::{
    interpreter::{equation::Equation, evaluator::core::Variables},
    util::num::usize_to_f32,
};

/// Evenly spaced values of `t` over a closed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// First value of `t`.
    pub start: f32,
    /// Last value of `t`.
    pub end:   f32,
    /// Number of samples, both ends included.
    pub count: usize,
}

impl SampleRange {
    /// Creates a range of `count` samples from `start` to `end`.
    #[must_use]
    pub const fn new(start: f32, end: f32, count: usize) -> Self {
        Self { start, end, count }
    }

    /// The `index`-th value of `t`.
    ///
    /// A single sample sits at `start`; otherwise the first sample is `start`
    /// and the last is exactly `end`.
    ///
    /// # Example
    /// ```
    /// use curvexpr::interpreter::sampler::SampleRange;
    ///
    /// let range = SampleRange::new(0.0, 1.0, 5);
    /// assert_eq!(range.t_at(0), 0.0);
    /// assert_eq!(range.t_at(2), 0.5);
    /// assert_eq!(range.t_at(4), 1.0);
    /// ```
    #[must_use]
    pub fn t_at(&self, index: usize) -> f32 {
        if self.count <= 1 {
            return self.start;
        }
        if index + 1 == self.count {
            return self.end;
        }
        let fraction = usize_to_f32(index) / usize_to_f32(self.count - 1);
        (self.end - self.start).mul_add(fraction, self.start)
    }
}

/// Samples `equation` at every `t` in `range`, returning `(t, value)` pairs.
///
/// # Example
/// ```
/// use curvexpr::{
///     Equation,
///     interpreter::{evaluator::core::Variables, sampler::{SampleRange, sample}},
/// };
///
/// let variables = Variables::new();
/// let equation = Equation::parse("2t + 1", &variables, true).unwrap();
/// let points = sample(&equation, &SampleRange::new(0.0, 1.0, 3), &variables);
///
/// assert_eq!(points, vec![(0.0, 1.0), (0.5, 2.0), (1.0, 3.0)]);
/// ```
#[must_use]
pub fn sample(equation: &Equation, range: &SampleRange, variables: &Variables) -> Vec<(f32, f32)> {
    (0..range.count).map(|index| point(equation, range, variables, index))
                    .collect()
}

/// Same as [`sample`], spread across the rayon thread pool.
///
/// Every thread evaluates the same shared tree; the output is identical to
/// the sequential version, in the same order.
#[must_use]
pub fn sample_parallel(equation: &Equation,
                       range: &SampleRange,
                       variables: &Variables)
                       -> Vec<(f32, f32)> {
    (0..range.count).into_par_iter()
                    .map(|index| point(equation, range, variables, index))
                    .collect()
}

fn point(equation: &Equation, range: &SampleRange, variables: &Variables, index: usize) -> (f32, f32) {
    let t = range.t_at(index);
    (t, equation.eval(t, variables))
}
