//! Property-based tests for parsing and evaluation.
