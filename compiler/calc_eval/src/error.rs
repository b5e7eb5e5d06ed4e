use std::fmt;

use thiserror::Error;

/// Kind of non-finite value an operation produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonFinite {
    /// Not a number, e.g. `0/0`
    NaN,
    /// Positive infinity, e.g. `1/0`
    Infinity,
    /// Negative infinity, e.g. `-1/0`
    NegInfinity,
}

impl NonFinite {
    /// Classify `value`, or `None` if it is finite
    pub fn classify(value: f64) -> Option<Self> {
        if value.is_nan() {
            Some(NonFinite::NaN)
        } else if value == f64::INFINITY {
            Some(NonFinite::Infinity)
        } else if value == f64::NEG_INFINITY {
            Some(NonFinite::NegInfinity)
        } else {
            None
        }
    }
}

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NonFinite::NaN => "NaN",
            NonFinite::Infinity => "Infinity",
            NonFinite::NegInfinity => "-Infinity",
        };
        f.write_str(text)
    }
}

/// Errors that can occur while evaluating a token stream
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A numeral token that does not parse, such as `.` or `1.2.3`, or one
    /// too large for `f64` while invalid results are disallowed
    #[error("Unexpected number '{value}' at position {position}")]
    UnexpectedNumber {
        /// Text of the numeral as written
        value: String,
        /// Character index of its first digit
        position: usize,
    },

    /// An unclosed `(` or a stray `)`
    #[error("Unmatched parenthesis at position {position}")]
    UnmatchedParenthesis {
        /// Character index of the offending parenthesis
        position: usize,
    },

    /// An operator produced NaN or an infinity while those are disallowed
    #[error("Invalid operation: '{symbol}' at position {position} produced {result}")]
    InvalidOperation {
        /// Operator symbol
        symbol: &'static str,
        /// Character index of the operator
        position: usize,
        /// What it produced
        result: NonFinite,
    },

    /// An operator ran out of operands, e.g. `2+` or `*3`
    #[error("Incomplete expression: '{symbol}' at position {position} is missing an operand")]
    MissingOperand {
        /// Operator symbol
        symbol: &'static str,
        /// Character index of the operator
        position: usize,
    },

    /// Nothing was left to evaluate
    #[error("Incomplete expression: nothing to evaluate")]
    EmptyExpression,

    /// Operands left over with no operator joining them, e.g. `(2)3`
    #[error("Missing operator: {operands} values are not joined by an operator")]
    MissingOperator {
        /// Number of values left on the output stack
        operands: usize,
    },
}

/// Result type for evaluation
pub type EvalResult<T> = Result<T, EvalError>;
