pub trait TokenType: Copy {
    fn is_operator(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprTokenType {
    Num,
    Add,
    Sub,
    Mul,
    Fac,
    /// Anything that is neither a digit run nor a known operator symbol.
    Word,
}

impl TokenType for ExprTokenType {
    fn is_operator(&self) -> bool {
        match self {
            ExprTokenType::Num | ExprTokenType::Word => false,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<TokenType> {
    pub val: String,
    pub ty: TokenType,
}

impl<TokenType> Token<TokenType>  {
    pub fn new(val: String, ty: TokenType) -> Token<TokenType> {
        Token { val, ty }
    }
}
