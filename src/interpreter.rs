/// The lexer module tokenizes equation text for further parsing.
///
/// The lexer reads the raw source text and produces a flat list of tokens
/// with their source text and line/column locations. It skips whitespace, line
/// comments and nested block comments, and inserts the implicit `*` in
/// forms like `12t`.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A precedence-climbing recursive-descent parser with one token of
/// lookahead. It resolves identifiers against the builtin table as it goes.
pub mod parser;
/// The fixed table of builtin identifiers and their arities.
///
/// The parser, checker and evaluator all consult this one table, so they
/// always agree on which names are builtins and how many arguments each
/// takes.
pub mod identifier;
/// The checker verifies bindings and arities before evaluation.
///
/// It is a read-only pass over the tree that reports unbound identifiers and
/// builtins applied to the wrong number of arguments.
pub mod checker;
/// The evaluator computes the value of a checked tree.
///
/// A pure tree walk over `f32` that never fails and never allocates, safe to
/// run from many threads at once over one shared tree.
pub mod evaluator;
/// Parsed, checked equations.
pub mod equation;
/// Sampling an equation across a range of `t`, sequentially or in parallel.
pub mod sampler;
