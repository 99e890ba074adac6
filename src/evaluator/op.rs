use crate::{
    error::{EvalError, EvalResult},
    evaluator::lexer::Token,
};

/// Represents one of the four supported binary operators.
///
/// `Op` is shared by the infix-to-postfix converter, which orders operators
/// by precedence, and by the postfix evaluator, which applies them to
/// operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

impl Op {
    /// Returns the operator's binding strength.
    ///
    /// `+` and `-` bind at 1, `*` and `/` at 2. All four operators are
    /// left-associative, so no associativity table is needed: the converter
    /// pops on equal precedence.
    ///
    /// # Example
    /// ```
    /// use shunt::evaluator::op::Op;
    ///
    /// assert!(Op::Mul.precedence() > Op::Add.precedence());
    /// assert_eq!(Op::Sub.precedence(), Op::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns the operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operator to two operands.
    ///
    /// # Parameters
    /// - `a`: Left operand.
    /// - `b`: Right operand.
    ///
    /// # Returns
    /// The value of `a op b`.
    ///
    /// # Errors
    /// Returns `EvalError::DivisionByZero` when dividing by a zero `b`.
    pub fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            },
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Maps a token to its corresponding operator.
///
/// Returns `Some(Op)` for the four operator tokens and `None` for numbers
/// and parentheses.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(Op)` if the token is an operator, otherwise `None`.
///
/// # Example
/// ```
/// use shunt::evaluator::{
///     lexer::Token,
///     op::{token_to_operator, Op},
/// };
///
/// assert_eq!(token_to_operator(&Token::Plus), Some(Op::Add));
/// assert_eq!(token_to_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Op> {
    match token {
        Token::Plus => Some(Op::Add),
        Token::Minus => Some(Op::Sub),
        Token::Star => Some(Op::Mul),
        Token::Slash => Some(Op::Div),
        _ => None,
    }
}
