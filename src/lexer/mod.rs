//! Lexer
//!
//! Converts sanitized source into an ordered token sequence, or fails with
//! a single syntax error — the lexer does not try to recover and keep
//! scanning past a bad character.

pub mod cursor;
pub mod token;

#[cfg(test)]
mod tests;

use crate::error::{CError, Span};
use cursor::Cursor;
use token::{Token, TokenKind};

#[must_use]
pub fn tokenize(source: &str) -> Result<Vec<Token>, CError> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    while !cursor.is_at_end() {
        if let Some(token) = lex_token(&mut cursor)? {
            tokens.push(token);
        }
    }

    tokens.push(Token::new(TokenKind::Eof, cursor.span()));
    Ok(tokens)
}

fn lex_token(cursor: &mut Cursor) -> Result<Option<Token>, CError> {
    while matches!(cursor.peek(), Some(c) if c.is_whitespace()) {
        cursor.advance();
    }

    if cursor.is_at_end() {
        return Ok(None);
    }

    let line = cursor.line();
    let ch = cursor.peek().unwrap();

    match ch {
        '/' if cursor.peek_at(1) == Some('/') => {
            skip_line_comment(cursor);
            Ok(None)
        }
        '/' if cursor.peek_at(1) == Some('*') => skip_block_comment(cursor, line).map(|_| None),
        '"' => lex_string(cursor, line).map(Some),
        c if c.is_ascii_digit() => lex_number(cursor, line).map(Some),
        c if c.is_ascii_alphabetic() || c == '_' => Ok(Some(lex_word(cursor, line))),
        _ => lex_symbol(cursor, line).map(Some),
    }
}

fn skip_line_comment(cursor: &mut Cursor) {
    while let Some(c) = cursor.peek() {
        if c == '\n' {
            break;
        }
        cursor.advance();
    }
}

fn skip_block_comment(cursor: &mut Cursor, start_line: usize) -> Result<(), CError> {
    cursor.advance(); // '/'
    cursor.advance(); // '*'
    loop {
        match cursor.peek() {
            None => {
                return Err(CError::syntax("Unterminated block comment", Span::new(start_line)))
            }
            Some('*') if cursor.peek_at(1) == Some('/') => {
                cursor.advance();
                cursor.advance();
                return Ok(());
            }
            Some(_) => {
                cursor.advance();
            }
        }
    }
}

fn lex_string(cursor: &mut Cursor, start_line: usize) -> Result<Token, CError> {
    cursor.advance(); // opening quote
    let mut value = String::new();

    loop {
        match cursor.peek() {
            None => return Err(CError::syntax("Unterminated string literal", Span::new(start_line))),
            Some('\n') => return Err(CError::syntax("Unterminated string literal", Span::new(start_line))),
            Some('"') => {
                cursor.advance();
                break;
            }
            Some('\\') => {
                cursor.advance();
                let escaped = cursor.peek().ok_or_else(|| {
                    CError::syntax("Unterminated string literal", Span::new(start_line))
                })?;
                value.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '"' => '"',
                    '\\' => '\\',
                    other => other,
                });
                cursor.advance();
            }
            Some(c) => {
                value.push(c);
                cursor.advance();
            }
        }
    }

    Ok(Token::new(TokenKind::StringLiteral(value), Span::new(start_line)))
}

fn lex_number(cursor: &mut Cursor, start_line: usize) -> Result<Token, CError> {
    let mut digits = String::new();
    while matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
        digits.push(cursor.advance().unwrap());
    }

    let value = digits.parse::<i64>().map_err(|_| {
        CError::syntax(format!("Invalid integer literal: {digits}"), Span::new(start_line))
    })?;

    Ok(Token::new(TokenKind::IntLiteral(value), Span::new(start_line)))
}

fn lex_word(cursor: &mut Cursor, start_line: usize) -> Token {
    let mut word = String::new();
    while matches!(cursor.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
        word.push(cursor.advance().unwrap());
    }

    let kind = TokenKind::keyword_for(&word).unwrap_or(TokenKind::Ident(word));
    Token::new(kind, Span::new(start_line))
}

/// Longest-match compound symbols; checked before falling back to
/// single-character symbols.
const COMPOUND_SYMBOLS: &[(&str, TokenKind)] = &[
    ("<=", TokenKind::LtEq),
    (">=", TokenKind::GtEq),
    ("==", TokenKind::EqEq),
    ("!=", TokenKind::NotEq),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("+=", TokenKind::PlusEq),
    ("-=", TokenKind::MinusEq),
    ("*=", TokenKind::StarEq),
    ("/=", TokenKind::SlashEq),
    ("%=", TokenKind::PercentEq),
];

fn lex_symbol(cursor: &mut Cursor, start_line: usize) -> Result<Token, CError> {
    let first = cursor.peek().unwrap();
    let second = cursor.peek_at(1);

    if let Some(second) = second {
        let two: String = [first, second].iter().collect();
        if let Some((_, kind)) = COMPOUND_SYMBOLS.iter().find(|(sym, _)| *sym == two) {
            cursor.advance();
            cursor.advance();
            return Ok(Token::new(kind.clone(), Span::new(start_line)));
        }
    }

    let kind = match first {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Percent,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        '=' => TokenKind::Eq,
        '!' => TokenKind::Not,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        other => {
            cursor.advance();
            return Err(CError::syntax(
                format!("Unexpected character: '{other}'"),
                Span::new(start_line),
            ));
        }
    };

    cursor.advance();
    Ok(Token::new(kind, Span::new(start_line)))
}
