use crate::{
    ast::{Expr, Location},
    error::CheckError,
    interpreter::{
        evaluator::core::Environment,
        identifier::{Identifier, Special},
    },
};

/// Result type used by the checker.
pub type CheckResult<T> = Result<T, CheckError>;

impl Environment<'_> {
    /// Verifies that every identifier in `expr` is bound and applied to the
    /// right number of arguments.
    ///
    /// Nodes are visited in source order (a node before its children, left
    /// before right) and the first diagnostic is returned. Within one
    /// application, a binding problem is reported before an arity problem.
    ///
    /// # Errors
    /// `UnboundIdentifier`, `NotAFunction` or `ArityMismatch`.
    ///
    /// # Example
    /// ```
    /// use curvexpr::interpreter::{
    ///     evaluator::core::{Environment, Variables},
    ///     lexer::tokenize,
    ///     parser::core::parse,
    /// };
    ///
    /// let expr = parse(&tokenize("x + t").unwrap()).unwrap();
    /// let variables = Variables::new();
    /// let err = Environment::equation(&variables).check(&expr).unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "(1,1) 'x' identifier not bound");
    /// ```
    pub fn check(&self, expr: &Expr) -> CheckResult<()> {
        let [binding, arity] = self.node_diagnostics(expr);
        if let Some(error) = binding.or(arity) {
            return Err(error);
        }
        expr.children().try_for_each(|child| self.check(child))
    }

    /// Collects every diagnostic in `expr`, in the order [`Environment::check`]
    /// would encounter them.
    ///
    /// The first element, if any, is the error `check` returns.
    #[must_use]
    pub fn check_all(&self, expr: &Expr) -> Vec<CheckError> {
        let mut diagnostics = Vec::new();
        self.collect_diagnostics(expr, &mut diagnostics);
        diagnostics
    }

    /// Whether `identifier` is defined in this environment.
    ///
    /// Builtins are always defined except `t`, which needs `t_bound`.
    #[must_use]
    pub fn is_bound(&self, identifier: &Identifier) -> bool {
        match identifier {
            Identifier::Special(Special::T) => self.t_bound,
            Identifier::Special(_) => true,
            Identifier::Variable(name) => self.variables.contains(name),
        }
    }

    fn collect_diagnostics(&self, expr: &Expr, diagnostics: &mut Vec<CheckError>) {
        diagnostics.extend(self.node_diagnostics(expr).into_iter().flatten());
        for child in expr.children() {
            self.collect_diagnostics(child, diagnostics);
        }
    }

    fn node_diagnostics(&self, expr: &Expr) -> [Option<CheckError>; 2] {
        match expr {
            Expr::Application { identifier,
                                arguments,
                                location, } => {
                let binding = (!self.is_bound(identifier)).then(|| {
                    CheckError::UnboundIdentifier { name:     identifier.name().to_string(),
                                                    location: *location, }
                });
                [binding, arity_error(identifier, arguments.len(), *location)]
            },
            Expr::Number { .. } | Expr::Unary { .. } | Expr::Binary { .. } => [None, None],
        }
    }
}

/// Compares an application's argument count with the declared arity.
fn arity_error(identifier: &Identifier, got: usize, location: Location) -> Option<CheckError> {
    let expected = identifier.arity();
    if got == expected {
        return None;
    }

    let name = identifier.name().to_string();
    Some(if expected == 0 {
             CheckError::NotAFunction { name,
                                        got,
                                        location }
         } else {
             CheckError::ArityMismatch { name,
                                         expected,
                                         got,
                                         location }
         })
}
