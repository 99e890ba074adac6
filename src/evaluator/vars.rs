use std::collections::HashMap;

use crate::error::{EvalError, EvalResult};

/// Supplies numeric values for variables found in an expression.
///
/// The resolver asks the source once per distinct variable name, in
/// discovery order, and blocks until an answer is given. The answer is the
/// raw reply text; the resolver parses it, so a reply that is not a valid
/// number is reported as [`EvalError::InvalidVariableValue`] rather than
/// crashing.
///
/// Implementations range from an interactive prompt (the CLI) to a plain
/// `HashMap<String, f64>` acting as a configuration map or test double.
pub trait ValueSource {
    /// Returns the raw textual value for the variable `name`.
    fn value_for(&mut self, name: &str) -> String;
}

/// A map of preassigned variable values.
///
/// A name missing from the map replies with an empty string, which fails
/// parsing downstream: an unresolved variable is an error, never zero.
impl ValueSource for HashMap<String, f64> {
    fn value_for(&mut self, name: &str) -> String {
        self.get(name).map_or_else(String::new, f64::to_string)
    }
}

/// Collects the distinct variable names referenced in an expression.
///
/// A name is a maximal run of ASCII letters; any other character ends the
/// current run, and a run still open at the end of the text is included.
/// Duplicates are collapsed and discovery order is preserved.
///
/// # Parameters
/// - `expression`: Raw expression text (whitespace already stripped).
///
/// # Returns
/// The ordered set of distinct identifiers.
///
/// # Example
/// ```
/// use shunt::evaluator::vars::collect_identifiers;
///
/// let names = collect_identifiers("x+y*2+x");
/// assert_eq!(names, vec!["x".to_string(), "y".to_string()]);
/// ```
#[must_use]
pub fn collect_identifiers(expression: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in expression.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c);
        } else if !current.is_empty() {
            if !names.contains(&current) {
                names.push(current.clone());
            }
            current.clear();
        }
    }

    // A variable can sit at the very end of the expression.
    if !current.is_empty() && !names.contains(&current) {
        names.push(current);
    }

    names
}

/// Replaces every variable in the expression with the textual form of its
/// bound value.
///
/// Replacement is keyed on whole letter runs rather than substring search,
/// so a name that is a prefix of another name (`a` vs `ab`) never rewrites
/// part of the longer one.
fn substitute(expression: &str, bindings: &HashMap<String, f64>) -> String {
    let mut output = String::with_capacity(expression.len());
    let mut current = String::new();

    for c in expression.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c);
            continue;
        }
        flush_identifier(&mut output, &mut current, bindings);
        output.push(c);
    }
    flush_identifier(&mut output, &mut current, bindings);

    output
}

/// Writes the pending identifier's bound value into the output and clears
/// the accumulator. Every collected identifier has a binding by the time
/// substitution runs.
fn flush_identifier(output: &mut String,
                    current: &mut String,
                    bindings: &HashMap<String, f64>) {
    if current.is_empty() {
        return;
    }
    if let Some(value) = bindings.get(current.as_str()) {
        output.push_str(&value.to_string());
    }
    current.clear();
}

/// Resolves every variable in the expression through the value source and
/// substitutes the values back into the text.
///
/// Each distinct identifier is resolved exactly once, in discovery order.
/// An expression without variables is returned unchanged and the source is
/// never consulted.
///
/// # Parameters
/// - `expression`: Raw expression text (whitespace already stripped).
/// - `source`: Provider of variable values.
///
/// # Returns
/// The expression with every identifier replaced by its decimal value.
///
/// # Errors
/// Returns `EvalError::InvalidVariableValue` when the source's reply for a
/// variable does not parse as a number.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use shunt::evaluator::vars::resolve_variables;
///
/// let mut vars = HashMap::from([("x".to_string(), 10.0)]);
/// let resolved = resolve_variables("x+2", &mut vars).unwrap();
/// assert_eq!(resolved, "10+2");
/// ```
pub fn resolve_variables<S: ValueSource>(expression: &str,
                                         source: &mut S)
                                         -> EvalResult<String> {
    let names = collect_identifiers(expression);
    if names.is_empty() {
        return Ok(expression.to_string());
    }

    let mut bindings: HashMap<String, f64> = HashMap::new();
    for name in names {
        let reply = source.value_for(&name);
        let value = reply.trim()
                         .parse::<f64>()
                         .map_err(|_| EvalError::InvalidVariableValue { name: name.clone(),
                                                                        text: reply.clone(), })?;
        bindings.insert(name, value);
    }

    Ok(substitute(expression, &bindings))
}
