use std::fmt;

/// Identity of an arithmetic operator.
///
/// Unary `+`/`-` are separate identities from their binary counterparts
/// since they differ in arity and precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Binary `+`
    Add,
    /// Binary `-`
    Sub,
    /// `*`, explicit or implicit
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// Unary `+`
    Plus,
    /// Unary `-`
    Neg,
}

impl Operator {
    /// All operator identities
    pub const ALL: [Operator; 7] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
        Operator::Plus,
        Operator::Neg,
    ];

    /// The source symbol of this operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add | Operator::Plus => "+",
            Operator::Sub | Operator::Neg => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }

    /// Returns true for the prefix operators `+x` and `-x`
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Plus | Operator::Neg)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unary() {
            write!(f, "unary {}", self.symbol())
        } else {
            f.write_str(self.symbol())
        }
    }
}

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeral; its text is validated by the evaluator
    Number,
    /// An arithmetic operator
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// A classified lexical unit of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The source text of the token
    pub value: String,
    /// What kind of token this is
    pub kind: TokenKind,
    /// 0-based character index of the token's first character
    pub position: usize,
}

impl Token {
    /// Creates a new token
    pub fn new<S: Into<String>>(value: S, kind: TokenKind, position: usize) -> Self {
        Self {
            value: value.into(),
            kind,
            position,
        }
    }

    /// Returns true if this token is a numeral
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    /// Returns the operator identity if this token is an operator
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("42", TokenKind::Number, 3);
        assert_eq!(token.value, "42");
        assert!(token.is_number());
        assert_eq!(token.operator(), None);
        assert_eq!(token.to_string(), "42@3");
    }

    #[test]
    fn test_unary_identity() {
        assert_eq!(Operator::Neg.symbol(), Operator::Sub.symbol());
        assert_ne!(Operator::Neg, Operator::Sub);
        assert!(Operator::Neg.is_unary());
        assert!(!Operator::Pow.is_unary());
        assert_eq!(Operator::Plus.to_string(), "unary +");
        assert_eq!(Operator::Div.to_string(), "/");
    }
}
