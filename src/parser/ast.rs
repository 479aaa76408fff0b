use big_num::BigUnsigned;

use crate::error::CalcError;

pub type ResultType = BigUnsigned;

/// Largest factorial operand the runner accepts, in decimal digits.
///
/// Factorial costs one schoolbook multiplication per step, so `n !` runs `n`
/// of them; past four digits a single line stalls the session.
pub const MAX_FACTORIAL_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Fac,
}

/// A single-operator expression. Factorial is the only node with one operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ASTNode {
    Add(ResultType, ResultType),
    Sub(ResultType, ResultType),
    Mul(ResultType, ResultType),
    Fac(ResultType),
}

impl ASTNode {
    pub fn operator(&self) -> Operator {
        match self {
            ASTNode::Add(..) => Operator::Add,
            ASTNode::Sub(..) => Operator::Sub,
            ASTNode::Mul(..) => Operator::Mul,
            ASTNode::Fac(_) => Operator::Fac,
        }
    }
    pub fn execute(&self) -> Result<ResultType, CalcError> {
        match self {
            ASTNode::Add(left, right) => Ok(left + right),
            ASTNode::Sub(left, right) => Ok(left.checked_sub(right)?),
            ASTNode::Mul(left, right) => Ok(left * right),
            ASTNode::Fac(operand) => {
                if operand.digit_len() > MAX_FACTORIAL_DIGITS {
                    return Err(CalcError::OperandTooLarge {
                        operand: operand.to_string(),
                        max_digits: MAX_FACTORIAL_DIGITS,
                    });
                }
                Ok(operand.factorial())
            },
        }
    }
}

#[test]
fn test_execute() {
    use big_num::BigNumError;

    let n = |v: u32| BigUnsigned::from(v);

    let ast = ASTNode::Add(n(1), n(1));
    assert_eq!(ast.operator(), Operator::Add);
    assert_eq!(ast.execute(), Ok(n(2)));

    let ast = ASTNode::Mul(n(7), n(6));
    assert_eq!(ast.execute(), Ok(n(42)));

    let ast = ASTNode::Sub(n(10), n(3));
    assert_eq!(ast.execute(), Ok(n(7)));

    let ast = ASTNode::Sub(n(3), n(10));
    assert_eq!(ast.execute(), Err(CalcError::Value(BigNumError::NegativeResult)));

    let ast = ASTNode::Fac(n(6));
    assert_eq!(ast.operator(), Operator::Fac);
    assert_eq!(ast.execute(), Ok(n(720)));
}

#[test]
fn test_factorial_operand_limit() {
    let ast = ASTNode::Fac(BigUnsigned::from(9999u32));
    assert_eq!(ast.operator(), Operator::Fac);

    let ast = ASTNode::Fac(BigUnsigned::from(10000u32));
    assert_eq!(
        ast.execute(),
        Err(CalcError::OperandTooLarge {
            operand: "10000".to_string(),
            max_digits: MAX_FACTORIAL_DIGITS,
        })
    );

    let huge: BigUnsigned = "99999999999999999999".parse().unwrap();
    assert!(matches!(
        ASTNode::Fac(huge).execute(),
        Err(CalcError::OperandTooLarge { .. })
    ));
}
