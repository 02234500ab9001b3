use std::{fs, thread};

use curvexpr::{
    Error, SampleRange, Variables,
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{CheckError, ParseError},
    eval_with_t,
    interpreter::{
        evaluator::core::Environment,
        identifier::{Identifier, Special},
        lexer::tokenize,
        parser::core::parse,
    },
    parse_equation, sample, sample_parallel,
};
use walkdir::WalkDir;

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "curve"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            let case = Case::parse(line).unwrap_or_else(|| {
                                            panic!("{path:?}:{}: malformed case '{line}'", number + 1)
                                        });
            if let Err(e) = case.run() {
                panic!("{path:?}:{}: {e}", number + 1);
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// What a case file line expects from its expression.
enum Expectation {
    Value(f32),
    Failure(String),
}

/// One line of a `.curve` file: `ok <value> | <bindings> | <expression>` or
/// `err <message> | <bindings> | <expression>`.
///
/// Bindings are whitespace-separated `name=value` pairs, or `-` for none. A
/// `t=` binding parses the expression as an equation and evaluates it at that
/// `t`; without one, `t` is unbound.
struct Case<'a> {
    expectation: Expectation,
    t:           Option<f32>,
    variables:   Variables,
    source:      &'a str,
}

impl<'a> Case<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let mut parts = line.splitn(3, '|');
        let (verdict, expected) = parts.next()?.trim().split_once(' ')?;
        let bindings = parts.next()?.trim();
        let source = parts.next()?.trim();

        let expectation = match verdict {
            "ok" => Expectation::Value(expected.trim().parse().ok()?),
            "err" => Expectation::Failure(expected.trim().to_string()),
            _ => return None,
        };

        let mut t = None;
        let mut variables = Variables::new();
        if bindings != "-" {
            for binding in bindings.split_whitespace() {
                let (name, value) = binding.split_once('=')?;
                let value: f32 = value.parse().ok()?;
                if name == "t" {
                    t = Some(value);
                } else {
                    variables.set(name, value);
                }
            }
        }

        Some(Self { expectation,
                    t,
                    variables,
                    source })
    }

    fn run(&self) -> Result<(), String> {
        let source = self.source;
        let result = parse_equation(source, &self.variables, self.t.is_some());

        match (&self.expectation, result) {
            (Expectation::Value(expected), Ok(equation)) => {
                let actual = match self.t {
                    Some(t) => equation.eval(t, &self.variables),
                    None => equation.value().unwrap_or(f32::NAN),
                };
                if close(actual, *expected) {
                    Ok(())
                } else {
                    Err(format!("'{source}' evaluated to {actual}, expected {expected}"))
                }
            },
            (Expectation::Value(_), Err(e)) => Err(format!("'{source}' failed: {e}")),
            (Expectation::Failure(message), Err(e)) => {
                if e.to_string().contains(message.as_str()) {
                    Ok(())
                } else {
                    Err(format!("'{source}' failed with \"{e}\", expected \"{message}\""))
                }
            },
            (Expectation::Failure(message), Ok(_)) => {
                Err(format!("'{source}' succeeded but was expected to fail with \"{message}\""))
            },
        }
    }
}

fn close(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() <= 1e-5 * expected.abs().max(1.0)
}

fn assert_value(src: &str, t: f32, expected: f32) {
    match parse_equation(src, &Variables::new(), true) {
        Ok(equation) => {
            let actual = eval_with_t(&equation, t);
            assert!(close(actual, expected),
                    "'{src}' at t={t} evaluated to {actual}, expected {expected}");
        },
        Err(e) => panic!("Equation failed: {e}"),
    }
}

fn assert_failure(src: &str, message: &str) {
    match parse_equation(src, &Variables::new(), true) {
        Ok(_) => panic!("Equation succeeded but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message),
    }
}

fn parse_tree(src: &str) -> Expr {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expr = parse_tree("a+b*c");
    assert_eq!(expr.to_string(), "(a + (b * c))");

    let Expr::Binary { op: BinaryOperator::Plus,
                       left,
                       right,
                       .. } = expr
    else {
        panic!("expected an addition at the root");
    };
    assert!(matches!(*left,
                     Expr::Application { identifier: Identifier::Variable(ref name),
                                         .. } if name == "a"));
    assert!(matches!(*right,
                     Expr::Binary { op: BinaryOperator::Mult,
                                    .. }));
}

#[test]
fn operator_structure() {
    assert_eq!(parse_tree("2^3^2").to_string(), "(2 ^ (3 ^ 2))");
    assert_eq!(parse_tree("1-2-3").to_string(), "((1 - 2) - 3)");
    assert_eq!(parse_tree("8/2/2").to_string(), "((8 / 2) / 2)");
    assert_eq!(parse_tree("-2^2").to_string(), "(-(2 ^ 2))");
    assert_eq!(parse_tree("-2*3").to_string(), "((-2) * 3)");
    assert_eq!(parse_tree("2**-1").to_string(), "(2 ^ (-1))");
    assert_eq!(parse_tree("((t))").to_string(), "t");
    assert_eq!(parse_tree("SIN(t) + Pow(t, 2)").to_string(), "(sin(t) + pow(t, 2))");
}

#[test]
fn unary_operators_keep_their_location() {
    let expr = parse_tree("  -t");
    let Expr::Unary { op: UnaryOperator::Minus,
                      operand,
                      location, } = expr
    else {
        panic!("expected a negation");
    };
    assert_eq!(location.column, 3);
    assert_eq!(operand.location().column, 4);
}

#[test]
fn implicit_multiplication() {
    assert_value("12t", 2.0, 24.0);
    assert_value("2pi", 0.0, std::f32::consts::TAU);
    assert_value("3sin(t)", std::f32::consts::FRAC_PI_2, 3.0);
    assert_eq!(parse_tree("12t").to_string(), "(12 * t)");
    assert_failure("t12", "(1,1) 't12' identifier not bound");
}

#[test]
fn power_is_right_associative() {
    assert_value("2^3^2", 0.0, 512.0);
    assert_value("2**3**2", 0.0, 512.0);
}

#[test]
fn division_by_zero_is_zero() {
    assert_value("1/0", 0.0, 0.0);
    assert_value("t/(t-1)", 1.0, 0.0);
    assert_value("mod(5, 0)", 0.0, 0.0);
}

#[test]
fn curve_equation_over_t() {
    assert_value("2*pi*sin(t)", 0.0, 0.0);
    assert_value("2*pi*sin(t)", std::f32::consts::FRAC_PI_2, std::f32::consts::TAU);
}

#[test]
fn evaluation_is_idempotent() {
    let variables = Variables::from_slices(&["r"], &[1.25]).unwrap();
    let equation = parse_equation("r*cos(3t) + sqrt(t)/7 - 2^t", &variables, true).unwrap();

    for t in [-2.5, 0.0, 0.1, 1.0, 17.25] {
        let first = equation.eval(t, &variables);
        let second = equation.eval(t, &variables);
        assert_eq!(first.to_bits(), second.to_bits(), "differs at t={t}");
    }
}

#[test]
fn eval_mode_computes_a_value_once() {
    let variables = Variables::from_slices(&["a", "b"], &[3.0, 4.0]).unwrap();
    let equation = parse_equation("sqrt(a^2 + b^2)", &variables, false).unwrap();
    assert_eq!(equation.value(), Some(5.0));

    let equation = parse_equation("a", &variables, true).unwrap();
    assert_eq!(equation.value(), None);
}

#[test]
fn variables_do_not_shadow_builtins() {
    let variables = Variables::from_slices(&["pi"], &[3.0]).unwrap();
    let equation = parse_equation("pi", &variables, false).unwrap();
    assert_eq!(equation.value(), Some(std::f32::consts::PI));
}

#[test]
fn unbound_identifiers() {
    assert_failure("x+t", "(1,1) 'x' identifier not bound");
    assert_failure("t + 2*radius", "(1,7) 'radius' identifier not bound");

    let err = parse_equation("t", &Variables::new(), false).unwrap_err();
    assert!(matches!(err,
                     Error::Check(CheckError::UnboundIdentifier { ref name, .. }) if name == "t"));
}

#[test]
fn arity_errors() {
    assert_failure("sin(1,2)", "(1,1) 'sin' expects 1 argument (got 2)");
    assert_failure("1 + pow(t)", "(1,5) 'pow' expects 2 arguments (got 1)");
    assert_failure("pi(1)", "(1,1) 'pi' is not a function (got 1)");
    assert_failure("sin", "(1,1) 'sin' expects 1 argument (got 0)");
}

#[test]
fn nested_comments_are_skipped() {
    assert_value("1 /* a /* b */ c */ + t", 2.0, 3.0);
    assert_value("t // the rest of this line is ignored\n+ 1", 2.0, 3.0);
    assert_failure("1 /* a /* b */ c", "(1,3) non-terminated multiline comment");
}

#[test]
fn locations_follow_lines_and_characters() {
    assert_failure("1 +\n  x", "(2,3) 'x' identifier not bound");
    assert_failure("/* one\n two */\n  $", "(3,3) unexpected character '$'");
    assert_failure("1 +\n /* open\n", "(2,2) non-terminated multiline comment");
    assert_failure("/* é */ $", "(1,9) unexpected character '$'");
    assert_failure("t\r\n+ q", "(2,3) 'q' identifier not bound");
}

#[test]
fn syntax_errors() {
    assert_failure("a : b", "(1,3) expected '=' after ':'");
    assert_failure("(1 + 2", "(1,1) '(' is missing ')'");
    assert_failure("2 * sin(t", "(1,8) '(' is missing ')'");
    assert_failure("1 +", "(1,4) unexpected end of input");
    assert_failure("", "(1,1) unexpected end of input");
    assert_failure("*2", "(1,1) unexpected token '*'");
    assert_failure("t t", "(1,3) unexpected token 't' after end of expression");
    assert_failure("1 # 2", "(1,3) unexpected character '#'");
}

#[test]
fn parse_errors_are_typed() {
    let err = parse_equation("1 /* open", &Variables::new(), true).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnterminatedComment { .. })));

    let err = parse_equation("(t", &Variables::new(), true).unwrap_err();
    let Error::Parse(parse_error) = err else {
        panic!("expected a parse error");
    };
    assert_eq!(parse_error.location().column, 1);
}

#[test]
fn deep_nesting_is_rejected() {
    assert_failure(&"(".repeat(100_000), "(1,258) expression nested too deeply");
    assert_failure(&format!("{}1", "-".repeat(50_000)), "(1,258) expression nested too deeply");
    assert_failure(&format!("{}1", "sin(".repeat(10_000)),
                   "(1,1029) expression nested too deeply");

    let err = parse_equation(&format!("{}2", "2^".repeat(10_000)), &Variables::new(), false).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::TooDeep { .. })));
}

#[test]
fn long_operator_chains_are_bounded() {
    let sum = |terms: usize| format!("{}t", "t+".repeat(terms - 1));

    assert_value(&sum(256), 1.0, 256.0);
    assert_failure(&sum(257), "(1,512) expression nested too deeply");
    assert_failure(&sum(100_000), "(1,512) expression nested too deeply");
}

#[test]
fn moderate_nesting_is_accepted() {
    let depth = 200;
    assert_value(&format!("{}t{}", "(".repeat(depth), ")".repeat(depth)), 3.0, 3.0);
    assert_value(&format!("{}t", "-".repeat(depth)), 3.0, 3.0);
}

#[test]
fn columns_stay_exact_on_long_lines() {
    let line = format!("{}$", "1+".repeat(100_000));
    assert_failure(&line, "(1,200001) unexpected character '$'");

    let lines = format!("{}\n{}$", "t*".repeat(1000), "1/*é*/+".repeat(1000));
    assert_failure(&lines, "(2,7001) unexpected character '$'");
}

#[test]
fn overflowing_literals_are_rejected() {
    let literal = format!("1{}", "0".repeat(40));
    let err = parse_equation(&literal, &Variables::new(), false).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::NumberOutOfRange { .. })));

    let largest = parse_equation("340282350000000000000000000000000000000", &Variables::new(), false).unwrap();
    let printed = largest.expression().to_string();
    let reparsed = parse_equation(&printed, &Variables::new(), false).unwrap();
    assert_eq!(reparsed.value(), Some(f32::MAX));
}

#[test]
fn builtin_table_agrees_with_lookup() {
    let table: Vec<_> = Special::table().collect();
    assert_eq!(table.len(), 17);

    for (name, arity) in table {
        let special = Special::lookup(name).unwrap_or_else(|| panic!("'{name}' does not resolve"));
        assert_eq!(special.name(), name);
        assert_eq!(special.arity(), arity);
    }
}

#[test]
fn check_all_reports_every_diagnostic() {
    let expr = parse_tree("x + sin(1,2) + y");
    let variables = Variables::new();
    let env = Environment::equation(&variables);

    let messages: Vec<String> = env.check_all(&expr).iter().map(ToString::to_string).collect();
    assert_eq!(messages,
               vec!["(1,1) 'x' identifier not bound",
                    "(1,5) 'sin' expects 1 argument (got 2)",
                    "(1,16) 'y' identifier not bound"]);

    let first = env.check(&expr).unwrap_err();
    assert_eq!(first.to_string(), messages[0]);
}

#[test]
fn binding_errors_come_before_arity_errors() {
    let expr = parse_tree("f(1)");
    let variables = Variables::new();
    let env = Environment::equation(&variables);

    assert!(matches!(env.check(&expr), Err(CheckError::UnboundIdentifier { .. })));
    let diagnostics = env.check_all(&expr);
    assert_eq!(diagnostics.len(), 2);
    assert!(matches!(diagnostics[1], CheckError::NotAFunction { got: 1, .. }));
}

#[test]
fn variable_construction_errors() {
    let err = Variables::from_slices(&["a", "b"], &[1.0]).unwrap_err();
    assert_eq!(err,
               Error::VariableCountMismatch { names:  2,
                                              values: 1, });

    let err = Variables::from_slices(&["a", "a"], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err.to_string(), "variable 'a' is bound more than once");

    let mut variables = Variables::from_slices(&["a"], &[1.0]).unwrap();
    variables.set("a", 2.0);
    variables.set("b", 3.0);
    assert_eq!(variables.len(), 2);
    assert_eq!(variables.get("a"), Some(2.0));
    assert_eq!(variables.names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn parallel_sampling_matches_sequential() {
    let variables = Variables::from_slices(&["r"], &[2.0]).unwrap();
    let equation = parse_equation("r*sin(t) + t^2/3", &variables, true).unwrap();
    let range = SampleRange::new(-1.0, 4.0, 257);

    let sequential = sample(&equation, &range, &variables);
    let parallel = sample_parallel(&equation, &range, &variables);

    assert_eq!(sequential.len(), 257);
    assert_eq!(sequential.first().map(|p| p.0), Some(-1.0));
    assert_eq!(sequential.last().map(|p| p.0), Some(4.0));
    assert_eq!(sequential, parallel);
}

#[test]
fn one_equation_is_shared_across_threads() {
    let variables = Variables::from_slices(&["k"], &[0.5]).unwrap();
    let equation = parse_equation("cos(k*t) * exp(-t/10)", &variables, true).unwrap();
    let ts: Vec<f32> = (0..64u8).map(|i| f32::from(i) * 0.25).collect();

    let expected: Vec<u32> = ts.iter().map(|&t| equation.eval(t, &variables).to_bits()).collect();

    thread::scope(|scope| {
        let handles: Vec<_> =
            (0..4).map(|_| {
                      scope.spawn(|| {
                               ts.iter()
                                 .map(|&t| equation.eval(t, &variables).to_bits())
                                 .collect::<Vec<_>>()
                           })
                  })
                  .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
