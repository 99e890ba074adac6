/// The bracket validator confirms parenthesis balance before parsing.
///
/// Validation runs on the variable-substituted expression text, so a
/// mismatch is reported before any token is produced.
///
/// # Responsibilities
/// - Checks that every `)` closes an earlier `(`.
/// - Checks that no `(` is left open at the end of the expression.
pub mod brackets;
/// The lexer module tokenizes an expression for the converter.
///
/// The lexer reads the flat, variable-substituted expression text and
/// produces the token sequence: numeric literals, the four arithmetic
/// operators, and parentheses. Characters that match no token are dropped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Accumulates runs of digits and `.` into a single numeric literal,
///   deferring numeric well-formedness to evaluation.
pub mod lexer;
/// Operator classification, precedence, and application.
///
/// Declares the [`Op`](op::Op) type shared by the converter (which orders
/// operators by precedence) and the postfix evaluator (which applies them).
///
/// # Responsibilities
/// - Maps operator tokens to their [`Op`](op::Op) kind.
/// - Defines the precedence table: `+` and `-` bind at 1, `*` and `/` at 2.
/// - Applies an operator to two operands, rejecting division by zero.
pub mod op;
/// The postfix evaluator reduces a postfix token sequence to one value.
///
/// Walks the converter's output with an operand stack: numbers push their
/// parsed value, operators pop two operands and push the result. A valid
/// sequence leaves exactly one value on the stack.
///
/// # Responsibilities
/// - Parses numeric literal text, reporting malformed literals.
/// - Applies operators, reporting missing operands and division by zero.
/// - Verifies that evaluation ends with a single result.
pub mod rpn;
/// The converter reorders infix tokens into postfix (Reverse Polish) form.
///
/// Implements the shunting-yard algorithm: a single pass over the infix
/// sequence with an auxiliary operator stack, honoring the precedence table
/// and parenthesis grouping. Operators of equal precedence pop, which makes
/// every operator left-associative.
///
/// # Responsibilities
/// - Moves numbers straight to the output.
/// - Stacks operators and parentheses, emitting them in postfix order.
/// - Drops parentheses from the output once their group is closed.
pub mod shunting;
/// The variable resolver substitutes named variables with numeric values.
///
/// Scans the raw expression for identifiers (maximal runs of ASCII
/// letters), obtains a value for each distinct name from a
/// [`ValueSource`](vars::ValueSource), and substitutes the values back into
/// the text. Substitution is keyed on whole letter runs, so a name that is
/// a prefix of another name is never rewritten inside the longer one.
///
/// # Responsibilities
/// - Collects distinct identifiers in discovery order.
/// - Resolves each identifier exactly once through the value source.
/// - Rejects values that do not parse as numbers.
pub mod vars;
