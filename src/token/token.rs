use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;

pub static KEYWORDS: Lazy<HashMap<&'static str, TokenType>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("fn", TokenType::Function);
    m.insert("let", TokenType::Let);
    m.insert("if", TokenType::If);
    m.insert("else", TokenType::Else);
    m.insert("return", TokenType::Return);
    m.insert("true", TokenType::True);
    m.insert("false", TokenType::False);
    m
});

/// Looks a lexeme up in the keyword table; anything unknown is an identifier.
pub fn lookup_ident(ident: &str) -> TokenType {
    KEYWORDS
        .get(ident)
        .cloned()
        .unwrap_or(TokenType::Identifier)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Illegal,
    Eof,

    // identifiers + literals
    Identifier,
    Int,
    String,

    // one or two character operators
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Plus,
    PlusPlus,
    Minus,
    MinusMinus,
    Star,
    Slash,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // delimiters
    Comma,
    SemiColon,
    Colon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,

    // keywords
    Function,
    Let,
    If,
    Else,
    Return,
    True,
    False,
}

impl TokenType {
    /// Canonical spelling, used in parser diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Illegal => "ILLEGAL",
            TokenType::Eof => "EOF",
            TokenType::Identifier => "IDENT",
            TokenType::Int => "INT",
            TokenType::String => "STRING",
            TokenType::Equal => "=",
            TokenType::EqualEqual => "==",
            TokenType::Bang => "!",
            TokenType::BangEqual => "!=",
            TokenType::Plus => "+",
            TokenType::PlusPlus => "++",
            TokenType::Minus => "-",
            TokenType::MinusMinus => "--",
            TokenType::Star => "*",
            TokenType::Slash => "/",
            TokenType::Less => "<",
            TokenType::LessEqual => "<=",
            TokenType::Greater => ">",
            TokenType::GreaterEqual => ">=",
            TokenType::Comma => ",",
            TokenType::SemiColon => ";",
            TokenType::Colon => ":",
            TokenType::LeftParen => "(",
            TokenType::RightParen => ")",
            TokenType::LeftBrace => "{",
            TokenType::RightBrace => "}",
            TokenType::LeftBracket => "[",
            TokenType::RightBracket => "]",
            TokenType::Function => "fn",
            TokenType::Let => "let",
            TokenType::If => "if",
            TokenType::Else => "else",
            TokenType::Return => "return",
            TokenType::True => "true",
            TokenType::False => "false",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A token is the pair of a kind and the source lexeme it was built from.
/// Identifiers, numbers and strings keep their spelling in `literal`;
/// operators and delimiters carry their canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub token_type: TokenType,
    pub literal: String,
}

impl Token {
    pub fn new(token_type: TokenType, literal: String) -> Self {
        Self {
            token_type,
            literal,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {:?}", self.token_type, self.literal)
    }
}
