//! Shunting-yard evaluation of arithmetic token streams.
//!
//! Operators are applied eagerly as they leave the operator stack, so no
//! syntax tree is ever built. Every call to [`evaluate`] runs on fresh
//! stacks; the only shared state is the read-only [`OPERATORS`] table.

#![warn(missing_docs)]

/// Evaluation settings
pub mod config;
/// Evaluation errors
pub mod error;
/// The shunting-yard stack machine
pub mod evaluator;
/// Rounding of floating-point results
pub mod numeric;
/// Operator precedence, associativity and functions
pub mod operator;

pub use config::EvalConfig;
pub use error::{EvalError, EvalResult, NonFinite};
pub use evaluator::{evaluate, Evaluator};
pub use numeric::{fix_up, round_at_scale, SIGNIFICANT_DIGITS};
pub use operator::{operator_info, Associativity, Function, OperatorInfo, OPERATORS};
