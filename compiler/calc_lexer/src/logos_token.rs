use logos::Logos;

/// Raw token type produced by the logos lexer.
///
/// Classification into unary/binary operators and numeral merging happens
/// later in [`crate::Tokenizer`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogosToken {
    /// A run of digits and decimal points, validated only at evaluation time
    #[regex(r"[0-9.]+")]
    Number,

    // Operators
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,

    // Delimiters
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,

    /// Any Unicode whitespace (skipped)
    #[regex(r"\s+", logos::skip)]
    Whitespace,
}
