// Shunting-yard evaluator
// Operators are evaluated as soon as they are popped; no RPN queue or tree is kept.

use calc_lexer::{Operator, Token, TokenKind};
use log::{debug, trace};

use crate::config::EvalConfig;
use crate::error::{EvalError, EvalResult, NonFinite};
use crate::numeric::{fix_up, round_at_scale};
use crate::operator::{operator_info, Function};

/// Entry of the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Operator { op: Operator, position: usize },
    LeftParen { position: usize },
}

/// Stack machine for one expression.
///
/// An `Evaluator` is consumed by [`Evaluator::run`]; evaluating another
/// expression needs a new one.
#[derive(Debug)]
pub struct Evaluator {
    config: EvalConfig,
    output: Vec<f64>,
    operators: Vec<StackEntry>,
}

impl Evaluator {
    /// Create an evaluator with empty stacks
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            output: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Evaluate `tokens` left to right and return the rounded result
    pub fn run(mut self, tokens: &[Token]) -> EvalResult<f64> {
        debug!("evaluating {} tokens", tokens.len());

        for token in tokens {
            match token.kind {
                TokenKind::Number => self.push_number(token)?,
                TokenKind::Operator(op) => self.push_operator(op, token.position)?,
                TokenKind::LeftParen => self.operators.push(StackEntry::LeftParen {
                    position: token.position,
                }),
                TokenKind::RightParen => self.close_group(token.position)?,
            }
            trace!(
                "token {}, output {:?}, stack {:?}",
                token,
                self.output,
                self.operators
            );
        }

        self.finish()
    }

    fn push_number(&mut self, token: &Token) -> EvalResult<()> {
        let unexpected = || EvalError::UnexpectedNumber {
            value: token.value.clone(),
            position: token.position,
        };
        let value = token.value.parse::<f64>().map_err(|_| unexpected())?;
        // Numerals beyond f64::MAX parse to infinity
        if !value.is_finite() && !self.config.allow_invalid_results {
            return Err(unexpected());
        }
        self.output.push(value);
        Ok(())
    }

    fn push_operator(&mut self, op: Operator, position: usize) -> EvalResult<()> {
        let info = operator_info(op);

        // A prefix operator has no left operand, so nothing below it can be complete yet
        if !op.is_unary() {
            while let Some(&StackEntry::Operator {
                op: top,
                position: top_position,
            }) = self.operators.last()
            {
                if !info.yields_to(operator_info(top)) {
                    break;
                }
                self.operators.pop();
                self.apply(top, top_position)?;
            }
        }

        self.operators.push(StackEntry::Operator { op, position });
        Ok(())
    }

    fn close_group(&mut self, position: usize) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(StackEntry::Operator {
                    op,
                    position: op_position,
                }) => self.apply(op, op_position)?,
                Some(StackEntry::LeftParen { .. }) => return Ok(()),
                None => return Err(EvalError::UnmatchedParenthesis { position }),
            }
        }
    }

    fn finish(mut self) -> EvalResult<f64> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::Operator { op, position } => self.apply(op, position)?,
                StackEntry::LeftParen { position } => {
                    return Err(EvalError::UnmatchedParenthesis { position })
                }
            }
        }

        match self.output.as_slice() {
            [value] => {
                let result = fix_up(*value);
                debug!("result {}", result);
                Ok(result)
            }
            [] => Err(EvalError::EmptyExpression),
            values => Err(EvalError::MissingOperator {
                operands: values.len(),
            }),
        }
    }

    fn pop_operand(&mut self, op: Operator, position: usize) -> EvalResult<f64> {
        self.output.pop().ok_or(EvalError::MissingOperand {
            symbol: op.symbol(),
            position,
        })
    }

    /// Pop the operator's operands, apply it and push the result
    fn apply(&mut self, op: Operator, position: usize) -> EvalResult<()> {
        let result = match operator_info(op).function {
            Function::Unary(f) => {
                let a = self.pop_operand(op, position)?;
                f(a)
            }
            Function::Binary(f) => {
                let b = self.pop_operand(op, position)?;
                let a = self.pop_operand(op, position)?;
                match op {
                    Operator::Add | Operator::Sub => {
                        round_at_scale(f(a, b), a.abs().max(b.abs()))
                    }
                    _ => f(a, b),
                }
            }
        };

        if !self.config.allow_invalid_results {
            if let Some(result) = NonFinite::classify(result) {
                return Err(EvalError::InvalidOperation {
                    symbol: op.symbol(),
                    position,
                    result,
                });
            }
        }

        trace!("applied {} at {} -> {}", op, position, result);
        self.output.push(result);
        Ok(())
    }
}

/// Evaluate a token sequence produced by [`calc_lexer::tokenize`]
pub fn evaluate(tokens: &[Token], config: &EvalConfig) -> EvalResult<f64> {
    Evaluator::new(*config).run(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_logger;
    use calc_lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn eval(source: &str) -> EvalResult<f64> {
        init_test_logger();
        let tokens = tokenize(source).expect("tokenize");
        evaluate(&tokens, &EvalConfig::default())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4"), Ok(14.0));
        assert_eq!(eval("(2+3)*4"), Ok(20.0));
        assert_eq!(eval("10-4/2"), Ok(8.0));
        assert_eq!(eval("2*3^2"), Ok(18.0));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("10-4-3"), Ok(3.0));
        assert_eq!(eval("64/4/2"), Ok(8.0));
        assert_eq!(eval("8/2*4"), Ok(16.0));
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(eval("2^3^2"), Ok(512.0));
        assert_eq!(eval("(2^3)^2"), Ok(64.0));
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(eval("-3+5"), Ok(2.0));
        assert_eq!(eval("3*-2"), Ok(-6.0));
        assert_eq!(eval("--4"), Ok(4.0));
        assert_eq!(eval("+-+2"), Ok(-2.0));
        assert_eq!(eval("2-(-3)"), Ok(5.0));
    }

    #[test]
    fn test_power_binds_tighter_than_negation() {
        assert_eq!(eval("-2^2"), Ok(-4.0));
        assert_eq!(eval("(-2)^2"), Ok(4.0));
        assert_eq!(eval("2^-1"), Ok(0.5));
        assert_eq!(eval("2^-1^2"), Ok(0.5));
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(eval("2(3+4)"), Ok(14.0));
        assert_eq!(eval("(1+1)(2+2)"), Ok(8.0));
        assert_eq!(eval("-2(3)"), Ok(-6.0));
    }

    #[test]
    fn test_fix_up_is_applied() {
        assert_eq!(eval("0.1+0.1+0.1-0.3"), Ok(0.0));
        assert_eq!(eval("0.1+0.2"), Ok(0.3));
        assert_eq!(eval("1/3"), Ok(0.333333333333));
    }

    #[test]
    fn test_products_keep_full_precision() {
        assert_eq!(eval("1/3*3"), Ok(1.0));
        assert_eq!(eval("2^0.5*2^0.5"), Ok(2.0));
        assert_eq!(eval("1.1-1"), Ok(0.1));
    }

    #[test]
    fn test_nested_groups() {
        assert_eq!(eval("((2+3))"), Ok(5.0));
        assert_eq!(eval("2*((1+1))"), Ok(4.0));
        assert_eq!(eval("((1.5+2.25)*-4^0.5)/(7-2)"), Ok(-1.5));
        assert_eq!(eval("-((2))(3)"), Ok(-6.0));
    }

    #[test]
    fn test_overflowing_numeral() {
        let nines = "9".repeat(400);
        assert_eq!(
            eval(&format!("1+{nines}")),
            Err(EvalError::UnexpectedNumber {
                value: nines.clone(),
                position: 2
            })
        );

        let config = EvalConfig::default().with_invalid_results(true);
        let tokens = tokenize(&nines).unwrap();
        assert_eq!(evaluate(&tokens, &config), Ok(f64::INFINITY));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(eval(".5*4"), Ok(2.0));
        assert_eq!(eval("3.*2"), Ok(6.0));
    }

    #[test]
    fn test_unexpected_number() {
        assert_eq!(
            eval("1.2.3+1"),
            Err(EvalError::UnexpectedNumber {
                value: "1.2.3".to_string(),
                position: 0
            })
        );
        assert_eq!(
            eval("2*."),
            Err(EvalError::UnexpectedNumber {
                value: ".".to_string(),
                position: 2
            })
        );
    }

    #[test]
    fn test_unmatched_parenthesis() {
        assert_eq!(
            eval("(2+3"),
            Err(EvalError::UnmatchedParenthesis { position: 0 })
        );
        assert_eq!(
            eval("2+3)"),
            Err(EvalError::UnmatchedParenthesis { position: 3 })
        );
        assert_eq!(
            eval("((1)"),
            Err(EvalError::UnmatchedParenthesis { position: 0 })
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            eval("2/0"),
            Err(EvalError::InvalidOperation {
                symbol: "/",
                position: 1,
                ..
            })
        ));
        assert_eq!(
            eval("0/0"),
            Err(EvalError::InvalidOperation {
                symbol: "/",
                position: 1,
                result: NonFinite::NaN
            })
        );
        assert_eq!(eval("0/0"), eval("0/0"));
        assert_eq!(
            eval("-1/0"),
            Err(EvalError::InvalidOperation {
                symbol: "/",
                position: 2,
                result: NonFinite::NegInfinity
            })
        );
    }

    #[test]
    fn test_invalid_results_allowed() {
        let config = EvalConfig::default().with_invalid_results(true);
        let tokens = tokenize("2/0").unwrap();
        assert_eq!(evaluate(&tokens, &config), Ok(f64::INFINITY));

        let tokens = tokenize("-1/0").unwrap();
        assert_eq!(evaluate(&tokens, &config), Ok(f64::NEG_INFINITY));

        let tokens = tokenize("0/0").unwrap();
        assert!(evaluate(&tokens, &config).unwrap().is_nan());
    }

    #[test]
    fn test_incomplete_expressions() {
        assert_eq!(
            eval("2+"),
            Err(EvalError::MissingOperand {
                symbol: "+",
                position: 1
            })
        );
        assert_eq!(
            eval("*3"),
            Err(EvalError::MissingOperand {
                symbol: "*",
                position: 0
            })
        );
        assert_eq!(
            eval("-"),
            Err(EvalError::MissingOperand {
                symbol: "-",
                position: 0
            })
        );
        assert_eq!(eval(""), Err(EvalError::EmptyExpression));
    }

    #[test]
    fn test_missing_operator() {
        assert_eq!(
            eval("(2)3"),
            Err(EvalError::MissingOperator { operands: 2 })
        );
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let tokens = tokenize("(1.5+2.25)*-4^0.5").unwrap();
        let config = EvalConfig::default();
        let first = evaluate(&tokens, &config);
        let second = evaluate(&tokens, &config);
        assert_eq!(first, Ok(-7.5));
        assert_eq!(first, second);
    }
}
