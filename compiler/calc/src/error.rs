use calc_eval::EvalError;
use calc_lexer::LexError;
use serde::Serialize;
use thiserror::Error;

/// Any failure of [`crate::calculate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression could not be tokenized
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The tokens could not be evaluated
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Flat classification of [`CalcError`] for callers that only need to
/// branch on the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A character outside the accepted set
    UnexpectedToken,
    /// An empty `()` group
    InvalidExpression,
    /// A numeral that is not a valid number
    UnexpectedNumber,
    /// Unbalanced parentheses
    UnmatchedParenthesis,
    /// A NaN or infinite result that was not allowed
    InvalidOperation,
    /// An operator without its operands, or no value at all
    IncompleteExpression,
    /// Values with no operator between them
    MissingOperator,
}

impl CalcError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Lex(LexError::UnexpectedToken { .. }) => ErrorKind::UnexpectedToken,
            CalcError::Lex(LexError::InvalidExpression { .. }) => ErrorKind::InvalidExpression,
            CalcError::Eval(err) => match err {
                EvalError::UnexpectedNumber { .. } => ErrorKind::UnexpectedNumber,
                EvalError::UnmatchedParenthesis { .. } => ErrorKind::UnmatchedParenthesis,
                EvalError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
                EvalError::MissingOperand { .. } | EvalError::EmptyExpression => {
                    ErrorKind::IncompleteExpression
                }
                EvalError::MissingOperator { .. } => ErrorKind::MissingOperator,
            },
        }
    }

    /// 0-based character index the error points at, when it has one
    pub fn position(&self) -> Option<usize> {
        match self {
            CalcError::Lex(LexError::UnexpectedToken { position, .. })
            | CalcError::Lex(LexError::InvalidExpression { position })
            | CalcError::Eval(EvalError::UnexpectedNumber { position, .. })
            | CalcError::Eval(EvalError::UnmatchedParenthesis { position })
            | CalcError::Eval(EvalError::InvalidOperation { position, .. })
            | CalcError::Eval(EvalError::MissingOperand { position, .. }) => Some(*position),
            CalcError::Eval(EvalError::EmptyExpression)
            | CalcError::Eval(EvalError::MissingOperator { .. }) => None,
        }
    }
}
