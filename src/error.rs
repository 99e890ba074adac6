use crate::evaluator::op::Op;

/// Result type used throughout the evaluation pipeline.
///
/// Every stage returns either a value of type `T` or an [`EvalError`]
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The expression's parentheses do not balance.
    UnbalancedParentheses,
    /// The value supplied for a variable was not a valid number.
    InvalidVariableValue {
        /// The name of the variable.
        name: String,
        /// The text that was supplied for it.
        text: String,
    },
    /// A numeric literal could not be parsed as a decimal number.
    InvalidNumber {
        /// The literal text that failed to parse.
        text: String,
    },
    /// An operator was applied with fewer than two operands available.
    InsufficientOperands {
        /// The operator that could not be applied.
        op: Op,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Evaluation finished with other than exactly one value remaining.
    MalformedExpression {
        /// How many operands were left on the stack.
        operands: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses => {
                write!(f, "Error: Parentheses are unbalanced.")
            },

            Self::InvalidVariableValue { name, text } => write!(f,
                                                                "Error: '{text}' is not a valid number for variable '{name}'."),

            Self::InvalidNumber { text } => {
                write!(f, "Error: '{text}' is not a valid number.")
            },

            Self::InsufficientOperands { op } => write!(f,
                                                        "Error: Not enough operands to apply '{op}'."),

            Self::DivisionByZero => write!(f, "Error: Division by zero."),

            Self::MalformedExpression { operands } => write!(f,
                                                             "Error: Expression is malformed; {operands} values remain after evaluation."),
        }
    }
}

impl std::error::Error for EvalError {}
