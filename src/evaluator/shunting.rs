use crate::evaluator::{lexer::Token, op::token_to_operator};

/// Reorders an infix token sequence into postfix (Reverse Polish) form.
///
/// Implements the shunting-yard algorithm. Per token:
/// - a number is appended straight to the output;
/// - `(` is pushed onto the operator stack;
/// - `)` pops operators into the output until the matching `(`, which is
///   discarded;
/// - an operator first pops every stacked operator whose precedence is
///   greater than or equal to its own (equal precedence pops, which makes
///   every operator left-associative), then pushes itself.
///
/// At the end of input the remaining operators are drained into the output.
/// The output drops parentheses and keeps every other token, so its length
/// equals the input length minus the paren count.
///
/// This stage performs no arithmetic and cannot fail on bracket-validated
/// input.
///
/// # Parameters
/// - `tokens`: Infix token sequence with balanced parentheses.
///
/// # Returns
/// The postfix token sequence.
///
/// # Example
/// ```
/// use shunt::evaluator::{
///     lexer::{tokenize, Token},
///     shunting::to_postfix,
/// };
///
/// // 2+3*4 => 2 3 4 * +
/// let postfix = to_postfix(tokenize("2+3*4"));
/// assert_eq!(postfix[3], Token::Star);
/// assert_eq!(postfix[4], Token::Plus);
/// ```
#[must_use]
pub fn to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),

            Token::LParen => stack.push(token),

            Token::RParen => {
                while let Some(top) = stack.pop() {
                    if top == Token::LParen {
                        break;
                    }
                    output.push(top);
                }
            },

            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                // The arm guarantees this is one of the four operators.
                let Some(op) = token_to_operator(&token) else {
                    continue;
                };

                while let Some(top) = stack.last() {
                    match token_to_operator(top) {
                        Some(stacked) if stacked.precedence() >= op.precedence() => {
                            if let Some(top) = stack.pop() {
                                output.push(top);
                            }
                        },
                        // A left paren stops the popping.
                        _ => break,
                    }
                }

                stack.push(token);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top != Token::LParen {
            output.push(top);
        }
    }

    output
}
