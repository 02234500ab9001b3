use std::fs;

use clap::Parser;
use curvexpr::{
    SampleRange, Variables, interpreter::identifier::Special, parse_equation, sample,
    sample_parallel,
};

/// curvexpr evaluates and samples the equations that drive parametric curves.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells curvexpr to read the equation from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Binds a named variable, e.g. `--var r=2.5`. May be repeated.
    #[arg(short, long = "var", value_parser = parse_binding)]
    vars: Vec<(String, f32)>,

    /// Evaluates once with `t` unbound instead of treating the text as an
    /// equation of `t`.
    #[arg(short, long)]
    eval: bool,

    /// The value of `t` to evaluate the equation at.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    t: f32,

    /// Samples the curve from this value of `t` (requires `--to`).
    #[arg(long, requires = "to", allow_negative_numbers = true)]
    from: Option<f32>,

    /// Samples the curve up to this value of `t` (requires `--from`).
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    to: Option<f32>,

    /// Number of samples between `--from` and `--to`, both ends included.
    #[arg(short = 'n', long, default_value_t = 16)]
    samples: usize,

    /// Spreads sampling across all cores.
    #[arg(short, long)]
    parallel: bool,

    /// Prints the parsed expression, fully parenthesized, before any result.
    #[arg(short, long)]
    ast: bool,

    /// Lists the builtin identifiers and their arities, then exits.
    #[arg(short, long)]
    builtins: bool,

    #[arg(required_unless_present = "builtins")]
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.builtins {
        for (name, arity) in Special::table() {
            println!("{name}\t{arity}");
        }
        return;
    }

    let contents = args.contents.unwrap_or_default();
    let text = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let variables: Variables = args.vars.into_iter().collect();

    let equation = match parse_equation(&text, &variables, !args.eval) {
        Ok(equation) => equation,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    if args.ast {
        println!("{}", equation.expression());
    }

    if let Some(value) = equation.value() {
        println!("{value}");
        return;
    }

    if let (Some(start), Some(end)) = (args.from, args.to) {
        let range = SampleRange::new(start, end, args.samples);
        let points = if args.parallel {
            sample_parallel(&equation, &range, &variables)
        } else {
            sample(&equation, &range, &variables)
        };
        for (t, value) in points {
            println!("{t}\t{value}");
        }
    } else {
        println!("{}", equation.eval(args.t, &variables));
    }
}

/// Parses a `name=value` command-line binding.
fn parse_binding(binding: &str) -> Result<(String, f32), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected name=value, found '{binding}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}
