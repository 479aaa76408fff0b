//! # BigUnsigned
//! Immutable arbitrary-precision unsigned integers, stored as base-10 digits.
//! Every operator returns a new value; operands are never modified.
//! # Example
//! ```
//! use big_num::BigUnsigned;
//!
//! let a: BigUnsigned = "10000000000000".parse().unwrap();
//! let b: BigUnsigned = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", a.checked_sub(&b).unwrap());
//! println!("a * b = {}", &a * &b);
//! println!("20! = {}", BigUnsigned::from(20u32).factorial());
//! ```
//!

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Mul, MulAssign,
};
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::BigNumError;

macro_rules! strip_leading_zero {
    ($digits: expr) => {
        {
            let digits: &mut Vec<u8> = &mut $digits;
            while digits.len() > 1 && digits.last() == Some(&0) {
                digits.pop();
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigUnsigned {
    /// Least-significant digit first. Never empty, no most-significant zeros
    /// unless the value is zero itself.
    digits: Vec<u8>,
}

// 实现构造
impl BigUnsigned {
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.len() == 1 || digits.last() != Some(&0));
        debug_assert!(digits.iter().all(|&d| d < RADIX));
        BigUnsigned { digits }
    }
    fn from_digits(mut digits: Vec<u8>) -> Self {
        if digits.is_empty() {
            digits.push(0);
        }
        strip_leading_zero!(digits);
        BigUnsigned::from_raw(digits)
    }
    fn value_of(mut val: u128) -> BigUnsigned {
        if val <= MAX_CONSTANT as u128 {
            return SMALL_CACHE[val as usize].clone();
        }
        let mut digits = Vec::with_capacity(39);
        while val != 0 {
            digits.push((val % RADIX as u128) as u8);
            val /= RADIX as u128;
        }
        BigUnsigned::from_raw(digits)
    }
    pub fn zero() -> BigUnsigned {
        SMALL_CACHE[0].clone()
    }
    pub fn one() -> BigUnsigned {
        SMALL_CACHE[1].clone()
    }
    pub fn is_zero(&self) -> bool {
        self.digits[..] == [0]
    }
    pub fn is_one(&self) -> bool {
        self.digits[..] == [1]
    }
    /// Number of decimal digits in the canonical form; zero has one digit.
    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }
}

impl Default for BigUnsigned {
    fn default() -> Self {
        BigUnsigned::zero()
    }
}

// 实现打印
impl Display for BigUnsigned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.digits
            .iter()
            .rev()
            .map(|&d| DIGITS[d as usize])
            .collect();
        f.pad(&s)
    }
}

// 实现解析
impl FromStr for BigUnsigned {
    type Err = BigNumError;

    /// Accepts ASCII decimal digits only. Leading zeros are dropped, so
    /// `"007"` parses to `7` and `"000"` to `0`.
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        if val.is_empty() {
            return Err(BigNumError::InvalidValue(String::new()));
        }
        let mut digits = Vec::with_capacity(val.len());
        for b in val.bytes().rev() {
            if !b.is_ascii_digit() {
                return Err(BigNumError::InvalidValue(val.to_string()));
            }
            digits.push(b - b'0');
        }
        Ok(BigUnsigned::from_digits(digits))
    }
}

impl TryFrom<&str> for BigUnsigned {
    type Error = BigNumError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        val.parse()
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUnsigned {
        fn from(val: $u) -> Self {
            BigUnsigned::value_of(val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl TryFrom<$i> for BigUnsigned {
        type Error = BigNumError;

        fn try_from(val: $i) -> Result<Self, Self::Error> {
            match u128::try_from(val) {
                Ok(val) => Ok(BigUnsigned::value_of(val)),
                Err(_) => Err(BigNumError::InvalidValue(val.to_string())),
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_num!(i8, i16, i32, isize, i64, i128);

// 实现大小比较
impl BigUnsigned {
    fn compare_digits(&self, other: &BigUnsigned) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        let pairs = self.digits.iter().rev().zip(other.digits.iter().rev());
        for (a, b) in pairs {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_digits(other)
    }
}

// 实现加法
impl BigUnsigned {
    fn add_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;
        for (i, &a) in long.iter().enumerate() {
            let b = short.get(i).copied().unwrap_or(0);
            let sum = a + b + carry;
            result.push(sum % RADIX);
            carry = sum / RADIX;
        }

        // a genuine carry is the only way to grow, and it is never zero
        if carry != 0 {
            result.push(carry);
        }

        result
    }
}

impl Add<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn add(self, rhs: &BigUnsigned) -> Self::Output {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }
        BigUnsigned::from_raw(BigUnsigned::add_digits(&self.digits, &rhs.digits))
    }
}

impl Add for BigUnsigned {
    type Output = BigUnsigned;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl AddAssign for BigUnsigned {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl AddAssign<&BigUnsigned> for BigUnsigned {
    fn add_assign(&mut self, rhs: &BigUnsigned) {
        *self = &*self + rhs;
    }
}

// 实现减法
impl BigUnsigned {
    /// Returns `self - other`, or [`BigNumError::NegativeResult`] when
    /// `self < other`.
    pub fn checked_sub(&self, other: &BigUnsigned) -> Result<BigUnsigned, BigNumError> {
        match self.compare_digits(other) {
            Ordering::Less => Err(BigNumError::NegativeResult),
            Ordering::Equal => Ok(BigUnsigned::zero()),
            Ordering::Greater => {
                let digits = BigUnsigned::sub_digits(&self.digits, &other.digits);
                Ok(BigUnsigned::from_digits(digits))
            },
        }
    }
    /// `big` must not be smaller than `little`.
    fn sub_digits(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0;
        for (i, &a) in big.iter().enumerate() {
            let b = little.get(i).copied().unwrap_or(0);
            let mut diff = a as i8 - b as i8 - borrow;
            if diff < 0 {
                diff += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }
        debug_assert_eq!(borrow, 0);

        result
    }
}

// 实现乘法
impl BigUnsigned {
    /// One partial product per digit of `x`, so `x` should be the shorter
    /// operand.
    fn mul_digits(x: &[u8], y: &[u8]) -> BigUnsigned {
        let mut result = BigUnsigned::zero();
        for (shift, &digit) in x.iter().enumerate() {
            if digit == 0 {
                continue;
            }
            result += BigUnsigned::mul_by_digit(y, digit, shift);
        }
        result
    }
    /// `y * digit * 10^shift`; the shift is `shift` zeros at the low end.
    fn mul_by_digit(y: &[u8], digit: u8, shift: usize) -> BigUnsigned {
        let mut partial = vec![0; shift];
        partial.reserve(y.len() + 1);

        let mut carry = 0;
        for &b in y {
            let product = digit * b + carry;
            partial.push(product % RADIX);
            carry = product / RADIX;
        }
        if carry != 0 {
            partial.push(carry);
        }

        BigUnsigned::from_digits(partial)
    }
}

impl Mul<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn mul(self, rhs: &BigUnsigned) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return BigUnsigned::zero();
        }
        if rhs.is_one() {
            return self.clone();
        }
        if self.is_one() {
            return rhs.clone();
        }
        if self.digits.len() <= rhs.digits.len() {
            BigUnsigned::mul_digits(&self.digits, &rhs.digits)
        } else {
            BigUnsigned::mul_digits(&rhs.digits, &self.digits)
        }
    }
}

impl Mul for BigUnsigned {
    type Output = BigUnsigned;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl MulAssign for BigUnsigned {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl MulAssign<&BigUnsigned> for BigUnsigned {
    fn mul_assign(&mut self, rhs: &BigUnsigned) {
        *self = &*self * rhs;
    }
}

// 实现阶乘
impl BigUnsigned {
    /// `self!`, with `0! = 1`.
    ///
    /// Runs `self` schoolbook multiplications, so the cost grows quickly;
    /// callers evaluating large inputs should bound them themselves.
    pub fn factorial(&self) -> BigUnsigned {
        let one = BigUnsigned::one();
        let mut result = BigUnsigned::one();
        let mut counter = BigUnsigned::one();
        while &counter <= self {
            result *= &counter;
            counter += &one;
        }
        result
    }
}

#[test]
fn test_from_str() {
    let a: BigUnsigned = "12345".parse().unwrap();
    assert_eq!(a.digits, vec![5, 4, 3, 2, 1]);

    let a: BigUnsigned = "000".parse().unwrap();
    assert_eq!(a.digits, vec![0]);

    let a: BigUnsigned = "007".parse().unwrap();
    assert_eq!(a.digits, vec![7]);
    assert_eq!(a.to_string(), "7");

    assert_eq!(
        "".parse::<BigUnsigned>(),
        Err(BigNumError::InvalidValue(String::new()))
    );
    assert_eq!(
        "12a".parse::<BigUnsigned>(),
        Err(BigNumError::InvalidValue("12a".to_string()))
    );
    assert!("-1".parse::<BigUnsigned>().is_err());
    assert!("+1".parse::<BigUnsigned>().is_err());
    assert!(" 1".parse::<BigUnsigned>().is_err());
    assert!("1 ".parse::<BigUnsigned>().is_err());
    assert!("1.5".parse::<BigUnsigned>().is_err());
    assert!("٣".parse::<BigUnsigned>().is_err());
    assert!(BigUnsigned::try_from("99").is_ok());
}

#[test]
fn test_from() {
    let big = BigUnsigned::from(0u8);
    assert_eq!(big.digits, vec![0]);

    let big = BigUnsigned::from(16u16);
    assert_eq!(big.digits, vec![6, 1]);

    let big = BigUnsigned::from(17u32);
    assert_eq!(big.digits, vec![7, 1]);

    let big = BigUnsigned::from(u64::MAX);
    assert_eq!(big.to_string(), u64::MAX.to_string());

    let big = BigUnsigned::from(u128::MAX);
    assert_eq!(big.to_string(), u128::MAX.to_string());

    let big = BigUnsigned::try_from(1000i64).unwrap();
    assert_eq!(big.digits, vec![0, 0, 0, 1]);

    let big = BigUnsigned::try_from(0isize).unwrap();
    assert!(big.is_zero());

    assert_eq!(
        BigUnsigned::try_from(-1i32),
        Err(BigNumError::InvalidValue("-1".to_string()))
    );
    assert!(BigUnsigned::try_from(i128::MIN).is_err());
}

#[test]
fn test_cmp() {
    let a: BigUnsigned = "999".parse().unwrap();
    let b: BigUnsigned = "1000".parse().unwrap();
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(b.cmp(&a), Ordering::Greater);

    let a: BigUnsigned = "123456789123456789123456789".parse().unwrap();
    let b: BigUnsigned = "123456789123456789123456780".parse().unwrap();
    assert!(a > b);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    assert_eq!(a, a.clone());

    let a: BigUnsigned = "0005".parse().unwrap();
    assert_eq!(a, BigUnsigned::from(5u8));
}

#[test]
fn test_add() {
    let a: BigUnsigned = "999".parse().unwrap();
    let b: BigUnsigned = "1".parse().unwrap();
    assert_eq!((&a + &b).digits, vec![0, 0, 0, 1]);

    let a: BigUnsigned = "123".parse().unwrap();
    let b: BigUnsigned = "98765".parse().unwrap();
    assert_eq!((&a + &b).to_string(), "98888");
    assert_eq!((b + a).to_string(), "98888");

    let mut a = BigUnsigned::zero();
    a += BigUnsigned::from(7u8);
    a += &BigUnsigned::from(5u8);
    assert_eq!(a.to_string(), "12");

    let a: BigUnsigned = "99999999999999999999999999999999".parse().unwrap();
    assert_eq!(
        (&a + &a).to_string(),
        "199999999999999999999999999999998"
    );
}

#[test]
fn test_checked_sub() {
    let a: BigUnsigned = "1000".parse().unwrap();
    let b: BigUnsigned = "1".parse().unwrap();
    let c = a.checked_sub(&b).unwrap();
    assert_eq!(c.digits, vec![9, 9, 9]);

    let a: BigUnsigned = "12345".parse().unwrap();
    let b: BigUnsigned = "12340".parse().unwrap();
    assert_eq!(a.checked_sub(&b).unwrap().digits, vec![5]);
    assert!(a.checked_sub(&a).unwrap().is_zero());

    assert_eq!(
        BigUnsigned::from(5u8).checked_sub(&BigUnsigned::from(9u8)),
        Err(BigNumError::NegativeResult)
    );
    assert_eq!(b.checked_sub(&a), Err(BigNumError::NegativeResult));
}

#[test]
fn test_mul() {
    let a: BigUnsigned = "123456789123456789".parse().unwrap();
    let b = BigUnsigned::from(2u8);
    assert_eq!((&a * &b).to_string(), "246913578246913578");

    let a: BigUnsigned = "99".parse().unwrap();
    assert_eq!((&a * &a).to_string(), "9801");

    let a: BigUnsigned = "1203".parse().unwrap();
    let b: BigUnsigned = "405".parse().unwrap();
    assert_eq!((a * b).to_string(), "487215");

    let a: BigUnsigned = "123456789".parse().unwrap();
    assert!((&a * &BigUnsigned::zero()).is_zero());
    assert!((&BigUnsigned::zero() * &a).is_zero());
    assert_eq!(&a * &BigUnsigned::one(), a);

    let mut a = BigUnsigned::from(12u8);
    a *= BigUnsigned::from(12u8);
    assert_eq!(a.to_string(), "144");
}

#[test]
fn test_mul_operand_order() {
    let long: BigUnsigned = "98765432109876543210".parse().unwrap();
    let short = BigUnsigned::from(37u8);
    let expected = "3654320988065432098770";
    assert_eq!((&long * &short).to_string(), expected);
    assert_eq!((&short * &long).to_string(), expected);
    assert_eq!(
        BigUnsigned::mul_digits(&short.digits, &long.digits),
        BigUnsigned::mul_digits(&long.digits, &short.digits)
    );
}

#[test]
fn test_mul_by_digit() {
    let partial = BigUnsigned::mul_by_digit(&[9, 9], 9, 2);
    assert_eq!(partial.to_string(), "89100");

    let partial = BigUnsigned::mul_by_digit(&[5], 2, 0);
    assert_eq!(partial.digits, vec![0, 1]);
}

#[test]
fn test_factorial() {
    assert_eq!(BigUnsigned::zero().factorial(), BigUnsigned::one());
    assert_eq!(BigUnsigned::one().factorial(), BigUnsigned::one());
    assert_eq!(BigUnsigned::from(4u8).factorial().to_string(), "24");
    assert_eq!(BigUnsigned::from(5u8).factorial().to_string(), "120");
    assert_eq!(BigUnsigned::from(10u8).factorial().to_string(), "3628800");
    assert_eq!(
        BigUnsigned::from(25u8).factorial().to_string(),
        "15511210043330985984000000"
    );
}

#[test]
fn test_to_string() {
    let s = "12345678909876523784950683472613487560983287654321";
    let a: BigUnsigned = s.parse().unwrap();
    assert_eq!(a.to_string(), s);
    assert_eq!(a.digit_len(), s.len());
    assert_eq!(BigUnsigned::zero().to_string(), "0");
    assert_eq!(BigUnsigned::default().to_string(), "0");
}
