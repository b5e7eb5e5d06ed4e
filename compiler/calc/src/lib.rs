//! Calculator facade.
//!
//! Ties the tokenizer and the evaluator together behind [`calculate`] and
//! provides what a front end needs to present the outcome: an error kind
//! for every failure, number formatting, and a serializable [`Report`].

#![warn(missing_docs)]

/// Errors of the whole pipeline
pub mod error;
/// Display formatting of results
pub mod format;
/// JSON-serializable outcome records
pub mod report;

use calc_lexer::tokenize;
use log::debug;

pub use calc_eval::EvalConfig;
pub use error::{CalcError, ErrorKind};
pub use format::format_result;
pub use report::{Report, ReportError};

/// Tokenize and evaluate a single expression
pub fn calculate(expression: &str, config: &EvalConfig) -> Result<f64, CalcError> {
    let tokens = tokenize(expression)?;
    let value = calc_eval::evaluate(&tokens, config)?;
    debug!("{} = {}", expression, value);
    Ok(value)
}
