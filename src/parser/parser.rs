use std::collections::VecDeque;

use big_num::{BigNumError, BigUnsigned};

use crate::error::CalcError;
use crate::tokenizer::{tokenize, ExprTokenType, Token, TokenType};
use super::ast::{ASTNode, Operator, ResultType};

/// A parsed line, ready to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    main_expr: ASTNode,
}

impl Expression {
    pub fn parse(origin: &str) -> Result<Self, CalcError> {
        Parser::new().parse(origin)
    }
    pub fn execute(&self) -> Result<ResultType, CalcError> {
        self.main_expr.execute()
    }
    pub fn operator(&self) -> Operator {
        self.main_expr.operator()
    }
}

/// Parses and executes `origin` in one go.
pub fn evaluate(origin: &str) -> Result<ResultType, CalcError> {
    Expression::parse(origin)?.execute()
}

struct Parser {
    tokens: VecDeque<Token<ExprTokenType>>,
}

// 文法
// E  -> num B num | num !
// B  -> + | - | *
//
// Both operands of a binary expression are built before the operator is
// looked at, so a bad value is reported ahead of a bad operator.

impl Parser {
    fn new() -> Self {
        Parser { tokens: VecDeque::new() }
    }
    fn get_next_token(&mut self) -> Result<Token<ExprTokenType>, CalcError> {
        self.tokens
            .pop_front()
            .ok_or_else(|| CalcError::InvalidInput("unexpected end of input".to_string()))
    }
    fn parse(&mut self, origin: &str) -> Result<Expression, CalcError> {
        self.tokens = tokenize(origin);
        let main_expr = match self.tokens.len() {
            3 => self.parse_binary()?,
            2 => self.parse_factorial()?,
            n => {
                return Err(CalcError::InvalidInput(format!(
                    "expected `a + b`, `a - b`, `a * b` or `a !`, got {} token{}",
                    n,
                    if n == 1 { "" } else { "s" }
                )))
            }
        };
        Ok(Expression { main_expr })
    }
    fn parse_binary(&mut self) -> Result<ASTNode, CalcError> {
        let left = self.get_next_token()?;
        let op = self.get_next_token()?;
        let right = self.get_next_token()?;

        let left_op = Parser::parse_operand(&left)?;
        let right_op = Parser::parse_operand(&right)?;

        match op.ty {
            ExprTokenType::Add => Ok(ASTNode::Add(left_op, right_op)),
            ExprTokenType::Sub => Ok(ASTNode::Sub(left_op, right_op)),
            ExprTokenType::Mul => Ok(ASTNode::Mul(left_op, right_op)),
            _ => Err(CalcError::UnknownOperator(op.val)),
        }
    }
    fn parse_factorial(&mut self) -> Result<ASTNode, CalcError> {
        let operand = self.get_next_token()?;
        let op = self.get_next_token()?;
        match op.ty {
            ExprTokenType::Fac => {
                let operand = Parser::parse_operand(&operand)?;
                Ok(ASTNode::Fac(operand))
            },
            ty if ty.is_operator() => Err(CalcError::InvalidInput(format!(
                "`{}` needs two operands",
                op.val
            ))),
            _ => Err(CalcError::InvalidInput(format!(
                "expected `!` after `{}`, got `{}`",
                operand.val, op.val
            ))),
        }
    }
    /// Only `Num` tokens can become operands; words and operator symbols are
    /// rejected as values.
    fn parse_operand(token: &Token<ExprTokenType>) -> Result<BigUnsigned, CalcError> {
        match token.ty {
            ExprTokenType::Num => Ok(token.val.parse::<BigUnsigned>()?),
            _ => Err(CalcError::Value(BigNumError::InvalidValue(token.val.clone()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use big_num::{BigNumError, BigUnsigned};

    use super::{evaluate, Expression};
    use crate::error::CalcError;
    use crate::parser::ast::Operator;

    fn value(s: &str) -> BigUnsigned {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse() {
        let expr = Expression::parse("12 + 30").unwrap();
        assert_eq!(expr.operator(), Operator::Add);
        assert_eq!(expr.execute(), Ok(value("42")));

        let expr = Expression::parse("  5\t!  ").unwrap();
        assert_eq!(expr.operator(), Operator::Fac);
        assert_eq!(expr.execute(), Ok(value("120")));
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(
            evaluate("123456789123456789 * 2"),
            Ok(value("246913578246913578"))
        );
        assert_eq!(evaluate("4 !"), Ok(value("24")));
        assert_eq!(evaluate("0 !"), Ok(value("1")));
        assert_eq!(evaluate("9 - 5"), Ok(value("4")));
        assert_eq!(evaluate("007 + 3"), Ok(value("10")));
        assert_eq!(
            evaluate("5 - 9"),
            Err(CalcError::Value(BigNumError::NegativeResult))
        );
    }

    #[test]
    fn test_token_count() {
        assert!(matches!(evaluate(""), Err(CalcError::InvalidInput(_))));
        assert!(matches!(evaluate("42"), Err(CalcError::InvalidInput(_))));
        assert!(matches!(evaluate("1 + 2 + 3"), Err(CalcError::InvalidInput(_))));
        assert!(matches!(evaluate("1+2"), Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(
            evaluate("6 / 3"),
            Err(CalcError::UnknownOperator("/".to_string()))
        );
        assert_eq!(
            evaluate("6 % 3"),
            Err(CalcError::UnknownOperator("%".to_string()))
        );
        assert_eq!(
            evaluate("4 ! 5"),
            Err(CalcError::UnknownOperator("!".to_string()))
        );
        assert_eq!(
            evaluate("4 4 5"),
            Err(CalcError::UnknownOperator("4".to_string()))
        );
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(
            evaluate("x + 1"),
            Err(CalcError::Value(BigNumError::InvalidValue("x".to_string())))
        );
        // operands are checked before the operator
        assert_eq!(
            evaluate("1 / -2"),
            Err(CalcError::Value(BigNumError::InvalidValue("-2".to_string())))
        );
        assert_eq!(
            evaluate("1.5 !"),
            Err(CalcError::Value(BigNumError::InvalidValue("1.5".to_string())))
        );
        // operator symbols in operand position are values, not operators
        assert_eq!(
            evaluate("- + 3"),
            Err(CalcError::Value(BigNumError::InvalidValue("-".to_string())))
        );
        assert_eq!(
            evaluate("2 * *"),
            Err(CalcError::Value(BigNumError::InvalidValue("*".to_string())))
        );
    }

    #[test]
    fn test_parse_operand_by_token_type() {
        use crate::tokenizer::{ExprTokenType, Token};
        use super::Parser;

        let num = Token::new("0042".to_string(), ExprTokenType::Num);
        assert_eq!(Parser::parse_operand(&num), Ok(value("42")));

        let word = Token::new("4x".to_string(), ExprTokenType::Word);
        assert_eq!(
            Parser::parse_operand(&word),
            Err(CalcError::Value(BigNumError::InvalidValue("4x".to_string())))
        );
    }

    #[test]
    fn test_factorial_limit() {
        assert_eq!(evaluate("0012 !"), Ok(value("479001600")));
        assert!(matches!(
            evaluate("99999999999999999999 !"),
            Err(CalcError::OperandTooLarge { .. })
        ));
    }

    #[test]
    fn test_factorial_shape() {
        assert_eq!(
            evaluate("4 +"),
            Err(CalcError::InvalidInput("`+` needs two operands".to_string()))
        );
        assert_eq!(
            evaluate("4 5"),
            Err(CalcError::InvalidInput("expected `!` after `4`, got `5`".to_string()))
        );
        // the operator is checked before the operand here
        assert!(matches!(evaluate("abc 5"), Err(CalcError::InvalidInput(_))));
    }
}
