//! Expression tokenizer built on the 'logos' crate
//! Classifies operators as unary or binary and merges numerals

use std::iter::Peekable;
use std::ops::Range;

use log::{debug, trace};
use logos::{Logos, SpannedIter};

use crate::error::{LexError, LexResult};
use crate::logos_token::LogosToken;
use crate::token::{Operator, Token, TokenKind};

/// Streaming tokenizer over an expression.
///
/// Yields tokens left to right and stops after the first error.
pub struct Tokenizer<'source> {
    /// The source text being tokenized
    source: &'source str,
    /// The logos lexer instance
    inner: Peekable<SpannedIter<'source, LogosToken>>,
    /// Kind of the previously emitted token
    previous: Option<TokenKind>,
    /// A `(` held back behind an implicit `*`
    pending: Option<Token>,
    /// Byte offset of the last position lookup
    last_offset: usize,
    /// Character index matching `last_offset`
    last_position: usize,
    /// Set once an error has been yielded
    failed: bool,
}

impl<'source> Tokenizer<'source> {
    /// Create a new tokenizer for the given expression
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            inner: LogosToken::lexer(source).spanned().peekable(),
            previous: None,
            pending: None,
            last_offset: 0,
            last_position: 0,
            failed: false,
        }
    }

    /// Convert a byte offset into a 0-based character index.
    /// Offsets are requested in increasing order.
    fn position_of(&mut self, offset: usize) -> usize {
        self.last_position += self.source[self.last_offset..offset].chars().count();
        self.last_offset = offset;
        self.last_position
    }

    /// Unary when nothing precedes the operator, or an operator or `(` does
    fn is_unary_position(&self) -> bool {
        matches!(
            self.previous,
            None | Some(TokenKind::Operator(_)) | Some(TokenKind::LeftParen)
        )
    }

    fn classify(&self, raw: LogosToken) -> Option<Operator> {
        let unary = self.is_unary_position();
        let op = match raw {
            LogosToken::Plus if unary => Operator::Plus,
            LogosToken::Plus => Operator::Add,
            LogosToken::Minus if unary => Operator::Neg,
            LogosToken::Minus => Operator::Sub,
            LogosToken::Star => Operator::Mul,
            LogosToken::Slash => Operator::Div,
            LogosToken::Caret => Operator::Pow,
            _ => return None,
        };
        Some(op)
    }

    /// Append every directly following digit run, skipping whitespace
    fn read_number(&mut self, span: Range<usize>) -> String {
        let mut value = self.source[span].to_string();
        while let Some((Ok(LogosToken::Number), next)) = self.inner.peek() {
            let next = next.clone();
            value.push_str(&self.source[next]);
            self.inner.next();
        }
        value
    }

    fn lex_token(&mut self, raw: LogosToken, span: Range<usize>) -> LexResult<Token> {
        let position = self.position_of(span.start);
        match raw {
            LogosToken::Number => {
                let value = self.read_number(span);
                Ok(Token::new(value, TokenKind::Number, position))
            }
            LogosToken::LeftParen => {
                let paren = Token::new("(", TokenKind::LeftParen, position);
                // Only a completed operand can be multiplied by the group
                match self.previous {
                    Some(TokenKind::Number) | Some(TokenKind::RightParen) => {
                        trace!("implicit multiplication before '(' at {}", position);
                        self.pending = Some(paren);
                        Ok(Token::new(
                            "*",
                            TokenKind::Operator(Operator::Mul),
                            position,
                        ))
                    }
                    _ => Ok(paren),
                }
            }
            LogosToken::RightParen => {
                if self.previous == Some(TokenKind::LeftParen) {
                    return Err(LexError::InvalidExpression { position });
                }
                Ok(Token::new(")", TokenKind::RightParen, position))
            }
            other => match self.classify(other) {
                Some(op) => Ok(Token::new(
                    &self.source[span],
                    TokenKind::Operator(op),
                    position,
                )),
                // Whitespace is skipped by logos and never reaches here
                None => Err(self.unexpected(span)),
            },
        }
    }

    fn unexpected(&mut self, span: Range<usize>) -> LexError {
        let character = self.source[span.start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::UnexpectedToken {
            character,
            position: self.position_of(span.start),
        }
    }

    fn emit(&mut self, token: Token) -> Option<LexResult<Token>> {
        trace!("token {} ({:?})", token, token.kind);
        self.previous = Some(token.kind);
        Some(Ok(token))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return self.emit(token);
        }
        if self.failed {
            return None;
        }

        let (raw, span) = self.inner.next()?;
        let result = match raw {
            Ok(raw) => self.lex_token(raw, span),
            Err(()) => Err(self.unexpected(span)),
        };

        match result {
            Ok(token) => self.emit(token),
            Err(err) => {
                debug!("tokenizer stopped: {}", err);
                self.failed = true;
                self.pending = None;
                Some(Err(err))
            }
        }
    }
}

/// Tokenize a whole expression, failing on the first lexical error
pub fn tokenize(expression: &str) -> LexResult<Vec<Token>> {
    let tokens = Tokenizer::new(expression).collect::<LexResult<Vec<_>>>()?;
    debug!("tokenized {:?} into {} tokens", expression, tokens.len());
    Ok(tokens)
}

/// Render a token sequence as space separated values, for debug output
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t.kind {
            TokenKind::Operator(op) if op.is_unary() => format!("u{}", op.symbol()),
            _ => t.value.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
