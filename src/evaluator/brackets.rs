/// Checks that parentheses in the expression balance.
///
/// Only round brackets participate, so the matching stack reduces to a
/// depth counter: `(` raises it, `)` lowers it, and a `)` at depth zero or
/// a nonzero depth at the end of the text is a mismatch.
///
/// # Parameters
/// - `expression`: The variable-substituted expression text.
///
/// # Returns
/// `true` when every parenthesis is matched.
///
/// # Example
/// ```
/// use shunt::evaluator::brackets::brackets_balanced;
///
/// assert!(brackets_balanced("(1+2)*(3-4)"));
/// assert!(!brackets_balanced("(1+2"));
/// assert!(!brackets_balanced("1+2)"));
/// ```
#[must_use]
pub fn brackets_balanced(expression: &str) -> bool {
    let mut depth: usize = 0;

    for c in expression.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            },
            _ => {},
        }
    }

    depth == 0
}
