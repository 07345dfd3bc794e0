//! Token types produced by the lexer.

use crate::error::Span;

/// A single lexical token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn line(&self) -> usize {
        self.span.line
    }
}

/// Token payloads. Keyword and symbol variants carry no payload; literal
/// and identifier variants carry their decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals and identifiers
    IntLiteral(i64),
    StringLiteral(String),
    Ident(String),

    // Reserved words
    Return,
    If,
    Else,
    While,
    For,
    Break,
    Continue,
    IntType, // int | long | char — all collapse to a single integer type
    Void,

    // Compound symbols (must be matched longest-first by the lexer)
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    AndAnd,
    OrOr,
    PlusPlus,
    MinusMinus,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,

    // Single-character symbols
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Lt,
    Gt,
    Eq,
    Not,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,

    Eof,
}

impl TokenKind {
    /// Is this token one of the three integer-typed keywords?
    pub fn is_int_type_word(word: &str) -> bool {
        matches!(word, "int" | "long" | "char")
    }

    pub fn keyword_for(word: &str) -> Option<TokenKind> {
        match word {
            "return" => Some(TokenKind::Return),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "while" => Some(TokenKind::While),
            "for" => Some(TokenKind::For),
            "break" => Some(TokenKind::Break),
            "continue" => Some(TokenKind::Continue),
            "void" => Some(TokenKind::Void),
            w if Self::is_int_type_word(w) => Some(TokenKind::IntType),
            _ => None,
        }
    }
}
