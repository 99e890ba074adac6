//! # shunt
//!
//! shunt is a small arithmetic expression evaluator written in Rust.
//! It resolves named variables through an injectable value source, then
//! tokenizes, converts to postfix with the shunting-yard algorithm, and
//! evaluates with an operand stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::evaluator::{
    brackets::brackets_balanced,
    lexer::tokenize,
    rpn::eval_postfix,
    shunting::to_postfix,
    vars::{resolve_variables, ValueSource},
};

/// Provides unified error types for the whole pipeline.
///
/// This module defines all errors that can be raised while resolving
/// variables, validating brackets, or evaluating the postfix sequence. Each
/// error carries the details of the failure: the offending variable name,
/// literal text, or operator.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the stages of the evaluation pipeline.
///
/// This module ties together variable resolution, bracket validation,
/// tokenization, infix-to-postfix conversion, and postfix evaluation. Each
/// stage consumes the previous stage's full output before the next begins.
///
/// # Responsibilities
/// - Declares the pipeline stages as submodules.
/// - Keeps every stage independently usable and testable.
pub mod evaluator;

pub use error::{EvalError, EvalResult};

/// Evaluates an arithmetic expression and returns its value.
///
/// This is the single external entry point. The pipeline runs in order:
/// strip whitespace, resolve variables through `source`, validate brackets,
/// tokenize, convert to postfix, evaluate. Every call starts from a clean
/// scope; no variable or value from a prior call leaks into the next, so
/// independent callers may evaluate in parallel as long as each owns its
/// own source.
///
/// # Parameters
/// - `expression`: Expression text using numbers, variables, `+ - * /`, and
///   parentheses.
/// - `source`: Provider of values for any variables the expression names.
///
/// # Returns
/// The numeric result of the expression.
///
/// # Errors
/// Returns an error if brackets do not balance, a variable resolves to a
/// non-numeric value, a literal is malformed, or the expression itself is
/// malformed. Every failure is terminal for the call; no stage retries.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use shunt::evaluate;
///
/// let mut vars: HashMap<String, f64> = HashMap::new();
/// assert_eq!(evaluate("2 * (5 + 2)", &mut vars).unwrap(), 14.0);
///
/// // Variables come from the value source.
/// let mut vars = HashMap::from([("x".to_string(), 10.0), ("y".to_string(), 20.0)]);
/// assert_eq!(evaluate("x + y + 12", &mut vars).unwrap(), 42.0);
///
/// // An unbound variable is an error, never zero.
/// let mut vars: HashMap<String, f64> = HashMap::new();
/// assert!(evaluate("x + 1", &mut vars).is_err());
/// ```
pub fn evaluate<S: ValueSource>(expression: &str, source: &mut S) -> EvalResult<f64> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let resolved = resolve_variables(&stripped, source)?;

    if !brackets_balanced(&resolved) {
        return Err(EvalError::UnbalancedParentheses);
    }

    let tokens = tokenize(&resolved);
    let postfix = to_postfix(tokens);

    eval_postfix(&postfix)
}
