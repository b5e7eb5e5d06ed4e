//! Arithmetic expression tokenizer
//!
//! This crate turns raw expression text such as `2(3 + 4) ^ -1` into a
//! sequence of classified tokens for the shunting-yard evaluator. Unary
//! `+`/`-` are resolved here, and an implicit `*` is inserted in front of a
//! parenthesis group that directly follows an operand.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Tokenizer errors
pub mod error;
/// Classification of raw tokens into [`Token`]s
pub mod lexer;
/// Raw tokens recognized by logos
pub mod logos_token;
/// Token and operator types
pub mod token;

// Re-export the main types for convenience
pub use error::{LexError, LexResult};
pub use lexer::{format_tokens, tokenize, Tokenizer};
pub use logos_token::LogosToken;
pub use token::{Operator, Token, TokenKind};
