use std::collections::HashMap;

use calc_lexer::Operator;
use lazy_static::lazy_static;

/// How operators of equal precedence group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`
    Right,
}

/// The function an operator applies, tagged by arity
#[derive(Debug, Clone, Copy)]
pub enum Function {
    /// Prefix operator taking one operand
    Unary(fn(f64) -> f64),
    /// Infix operator; the first argument is the left operand
    Binary(fn(f64, f64) -> f64),
}

/// Static description of an operator
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    /// Higher binds tighter
    pub precedence: u8,
    /// Grouping among equal precedence
    pub associativity: Associativity,
    /// What the operator computes
    pub function: Function,
}

impl OperatorInfo {
    const fn unary(precedence: u8, function: fn(f64) -> f64) -> Self {
        Self {
            precedence,
            associativity: Associativity::Right,
            function: Function::Unary(function),
        }
    }

    const fn binary(
        precedence: u8,
        associativity: Associativity,
        function: fn(f64, f64) -> f64,
    ) -> Self {
        Self {
            precedence,
            associativity,
            function: Function::Binary(function),
        }
    }

    /// Number of operands consumed
    pub fn arity(&self) -> usize {
        match self.function {
            Function::Unary(_) => 1,
            Function::Binary(_) => 2,
        }
    }

    /// Whether an incoming operator with this descriptor pops `top` off the
    /// operator stack before being pushed
    pub fn yields_to(&self, top: &OperatorInfo) -> bool {
        match self.associativity {
            Associativity::Left => self.precedence <= top.precedence,
            Associativity::Right => self.precedence < top.precedence,
        }
    }
}

lazy_static! {
    /// Process-wide operator table, built on first use and never mutated.
    ///
    /// `^` binds tightest, then unary `+`/`-`, then `*` and `/`, then binary
    /// `+` and `-`.
    pub static ref OPERATORS: HashMap<Operator, OperatorInfo> = {
        use Associativity::*;

        let mut table = HashMap::with_capacity(Operator::ALL.len());
        table.insert(Operator::Pow, OperatorInfo::binary(4, Right, f64::powf));
        table.insert(Operator::Plus, OperatorInfo::unary(3, |a| a));
        table.insert(Operator::Neg, OperatorInfo::unary(3, |a| -a));
        table.insert(Operator::Mul, OperatorInfo::binary(2, Left, |a, b| a * b));
        table.insert(Operator::Div, OperatorInfo::binary(2, Left, |a, b| a / b));
        table.insert(Operator::Add, OperatorInfo::binary(1, Left, |a, b| a + b));
        table.insert(Operator::Sub, OperatorInfo::binary(1, Left, |a, b| a - b));
        table
    };
}

/// Look up the descriptor of an operator.
pub fn operator_info(op: Operator) -> &'static OperatorInfo {
    // Every `Operator` variant is registered above
    &OPERATORS[&op]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_is_registered() {
        for op in Operator::ALL {
            let info = operator_info(op);
            assert_eq!(info.arity() == 1, op.is_unary(), "arity of {}", op);
        }
    }

    #[test]
    fn test_precedence_order() {
        let p = |op| operator_info(op).precedence;
        assert!(p(Operator::Pow) > p(Operator::Neg));
        assert_eq!(p(Operator::Neg), p(Operator::Plus));
        assert!(p(Operator::Neg) > p(Operator::Mul));
        assert_eq!(p(Operator::Mul), p(Operator::Div));
        assert!(p(Operator::Div) > p(Operator::Add));
        assert_eq!(p(Operator::Add), p(Operator::Sub));
    }

    #[test]
    fn test_associativity_decides_ties() {
        let sub = operator_info(Operator::Sub);
        let pow = operator_info(Operator::Pow);
        // 1 - 2 - 3 pops the first '-' before pushing the second
        assert!(sub.yields_to(sub));
        // 2 ^ 3 ^ 2 keeps both on the stack
        assert!(!pow.yields_to(pow));
        assert!(sub.yields_to(pow));
        assert!(!pow.yields_to(sub));
    }

    #[test]
    fn test_functions() {
        match operator_info(Operator::Pow).function {
            Function::Binary(f) => assert_eq!(f(2.0, 10.0), 1024.0),
            Function::Unary(_) => panic!("'^' must be binary"),
        }
        match operator_info(Operator::Neg).function {
            Function::Unary(f) => assert_eq!(f(4.0), -4.0),
            Function::Binary(_) => panic!("unary '-' must be unary"),
        }
    }
}
