use crate::{ast::Expr, error::Error};

/// Named scalar values supplied by the caller.
///
/// Names are unique: [`Variables::set`] replaces the value of an existing
/// name instead of adding a second entry. Lookups are linear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    names:  Vec<String>,
    values: Vec<f32>,
}

impl Variables {
    /// Creates an empty set of variables.
    #[must_use]
    pub const fn new() -> Self {
        Self { names:  Vec::new(),
               values: Vec::new(), }
    }

    /// Builds variables from parallel name and value slices.
    ///
    /// # Errors
    /// `VariableCountMismatch` when the slices differ in length and
    /// `DuplicateVariable` when a name appears twice.
    ///
    /// # Example
    /// ```
    /// use curvexpr::interpreter::evaluator::core::Variables;
    ///
    /// let variables = Variables::from_slices(&["r", "k"], &[2.0, 3.0]).unwrap();
    /// assert_eq!(variables.get("k"), Some(3.0));
    ///
    /// assert!(Variables::from_slices(&["r", "r"], &[1.0, 2.0]).is_err());
    /// assert!(Variables::from_slices(&["r"], &[]).is_err());
    /// ```
    pub fn from_slices<S: AsRef<str>>(names: &[S], values: &[f32]) -> Result<Self, Error> {
        if names.len() != values.len() {
            return Err(Error::VariableCountMismatch { names:  names.len(),
                                                      values: values.len(), });
        }

        let mut variables = Self::new();
        for (name, value) in names.iter().zip(values) {
            let name = name.as_ref();
            if variables.contains(name) {
                return Err(Error::DuplicateVariable { name: name.to_string() });
            }
            variables.set(name, *value);
        }
        Ok(variables)
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: f32) {
        let name = name.into();
        match self.position(&name) {
            Some(index) => self.values[index] = value,
            None => {
                self.names.push(name);
                self.values.push(value);
            },
        }
    }

    /// Gets the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f32> {
        self.position(name).map(|index| self.values[index])
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterates over the bound names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of bound variables.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no variable is bound.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|bound| bound == name)
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for Variables {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        let mut variables = Self::new();
        for (name, value) in iter {
            variables.set(name, value);
        }
        variables
    }
}

/// The names considered defined while checking, and their values while
/// evaluating.
///
/// `t` is bound separately from the named variables. An environment only
/// borrows its variables, so many threads can each evaluate the same tree
/// with their own `t` against one shared snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Environment<'v> {
    /// Whether the parameter `t` is defined.
    pub t_bound:   bool,
    /// Value of `t` during evaluation.
    pub t:         f32,
    /// Caller-supplied named values.
    pub variables: &'v Variables,
}

impl<'v> Environment<'v> {
    /// An environment for curve equations: `t` is bound, starting at `0.0`.
    #[must_use]
    pub const fn equation(variables: &'v Variables) -> Self {
        Self { t_bound: true,
               t: 0.0,
               variables }
    }

    /// An environment for one-off evaluation: `t` is not bound.
    #[must_use]
    pub const fn constant(variables: &'v Variables) -> Self {
        Self { t_bound: false,
               t: 0.0,
               variables }
    }

    /// Returns a copy of `self` with `t` set to `t`.
    #[must_use]
    pub const fn at(self, t: f32) -> Self {
        Self { t, ..self }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. It is total: it
    /// never fails, never panics and never allocates. Division by zero yields
    /// `0.0`. Names missing from the environment evaluate to `0.0`, and
    /// missing arguments of a malformed application evaluate as `0.0`; run
    /// [`Environment::check`] first to rule both out.
    ///
    /// # Example
    /// ```
    /// use curvexpr::interpreter::{
    ///     evaluator::core::{Environment, Variables},
    ///     lexer::tokenize,
    ///     parser::core::parse,
    /// };
    ///
    /// let tokens = tokenize("12t / 0 + r").unwrap();
    /// let expr = parse(&tokens).unwrap();
    /// let variables = Variables::from_slices(&["r"], &[1.5]).unwrap();
    ///
    /// assert_eq!(Environment::equation(&variables).at(2.0).eval(&expr), 1.5);
    /// ```
    #[must_use]
    pub fn eval(&self, expr: &Expr) -> f32 {
        match expr {
            Expr::Number { value, .. } => *value,
            Expr::Unary { op, operand, .. } => Self::eval_unary(*op, self.eval(operand)),
            Expr::Binary { left, op, right, .. } => {
                Self::eval_binary(*op, self.eval(left), self.eval(right))
            },
            Expr::Application { identifier,
                                arguments,
                                .. } => self.eval_application(identifier, arguments),
        }
    }
}
