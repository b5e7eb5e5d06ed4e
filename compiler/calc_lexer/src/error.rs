use thiserror::Error;

/// Errors raised while tokenizing an expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside the accepted symbol set
    #[error("Unexpected token '{character}' at position {position}")]
    UnexpectedToken {
        /// The offending character
        character: char,
        /// 0-based character index in the input
        position: usize,
    },

    /// A structurally invalid construct, such as an empty `()` group
    #[error("Invalid expression: empty parentheses at position {position}")]
    InvalidExpression {
        /// 0-based character index of the closing parenthesis
        position: usize,
    },
}

/// Result type for tokenizer operations
pub type LexResult<T> = Result<T, LexError>;
