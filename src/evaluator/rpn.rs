use crate::{
    error::{EvalError, EvalResult},
    evaluator::{lexer::Token, op::token_to_operator},
};

/// Walks a postfix token sequence with an operand stack and computes the
/// final value.
///
/// Numbers parse their literal text and push the value. An operator pops
/// `b` then `a` (`b` is the more recently pushed operand) and pushes
/// `a op b`. A valid sequence reduces to exactly one value.
///
/// # Parameters
/// - `tokens`: Postfix token sequence produced by the converter.
///
/// # Returns
/// The single remaining value.
///
/// # Errors
/// - `EvalError::InvalidNumber` when a literal does not parse as a decimal
///   number (for example `1.2.3`).
/// - `EvalError::InsufficientOperands` when fewer than two operands are
///   available for an operator.
/// - `EvalError::DivisionByZero` when a divisor is exactly zero.
/// - `EvalError::MalformedExpression` when other than exactly one value
///   remains after all tokens are consumed.
///
/// # Example
/// ```
/// use shunt::evaluator::{lexer::tokenize, rpn::eval_postfix, shunting::to_postfix};
///
/// let postfix = to_postfix(tokenize("2*(5+2)"));
/// assert_eq!(eval_postfix(&postfix).unwrap(), 14.0);
/// ```
pub fn eval_postfix(tokens: &[Token]) -> EvalResult<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in tokens {
        if let Token::Number(text) = token {
            let value = text.parse::<f64>()
                            .map_err(|_| EvalError::InvalidNumber { text: text.clone() })?;
            operands.push(value);
            continue;
        }

        if let Some(op) = token_to_operator(token) {
            let b = operands.pop()
                            .ok_or(EvalError::InsufficientOperands { op })?;
            let a = operands.pop()
                            .ok_or(EvalError::InsufficientOperands { op })?;
            operands.push(op.apply(a, b)?);
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvalError::MalformedExpression { operands: operands.len() }),
    }
}
