use std::collections::{HashMap, VecDeque};

use lazy_static::*;

use super::token::{ExprTokenType, Token};

lazy_static! {
    static ref OPERATOR_SYMBOLS: HashMap<&'static str, ExprTokenType> = {
        let mut symbols = HashMap::new();
        symbols.insert("+", ExprTokenType::Add);
        symbols.insert("-", ExprTokenType::Sub);
        symbols.insert("*", ExprTokenType::Mul);
        symbols.insert("!", ExprTokenType::Fac);
        symbols
    };
}

fn classify(word: &str) -> ExprTokenType {
    if let Some(ty) = OPERATOR_SYMBOLS.get(word) {
        return *ty;
    }
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
        ExprTokenType::Num
    } else {
        ExprTokenType::Word
    }
}

/// Splits `origin` on whitespace and classifies every piece.
///
/// Never fails: pieces that are neither numbers nor operators come back as
/// [`ExprTokenType::Word`] and are rejected by the parser.
pub fn tokenize(origin: &str) -> VecDeque<Token<ExprTokenType>> {
    origin
        .split_whitespace()
        .map(|word| Token::new(word.to_string(), classify(word)))
        .collect()
}

#[test]
fn test_tokenizer() {
    let tokens = tokenize("  12 +\t007 ");
    let types: Vec<_> = tokens.iter().map(|t| t.ty).collect();
    assert_eq!(types, vec![ExprTokenType::Num, ExprTokenType::Add, ExprTokenType::Num]);
    assert_eq!(tokens[2].val, "007");

    let tokens = tokenize("4 !");
    assert_eq!(tokens[1], Token::new("!".to_string(), ExprTokenType::Fac));

    let types: Vec<_> = tokenize("x - 3.5 * / -1")
        .into_iter()
        .map(|t| t.ty)
        .collect();
    assert_eq!(
        types,
        vec![
            ExprTokenType::Word,
            ExprTokenType::Sub,
            ExprTokenType::Word,
            ExprTokenType::Mul,
            ExprTokenType::Word,
            ExprTokenType::Word,
        ]
    );

    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n").is_empty());
}

#[test]
fn test_is_operator() {
    use super::token::TokenType;

    assert!(ExprTokenType::Add.is_operator());
    assert!(ExprTokenType::Fac.is_operator());
    assert!(!ExprTokenType::Num.is_operator());
    assert!(!ExprTokenType::Word.is_operator());
}
