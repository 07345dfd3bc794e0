//! Parser
//!
//! Recursive-descent parser producing the statement tree rooted at the
//! body of `main`, plus any non-fatal parser warnings.

pub mod ast;


use crate::error::{CError, Span};
use crate::lexer::token::{Token, TokenKind};
use ast::{AssignOp, BinOp, Expr, Stmt, UnaryOp};

pub struct ParseResult {
    pub body: Vec<Stmt>,
    pub warnings: Vec<String>,
}

#[must_use]
pub fn parse(tokens: &[Token]) -> Result<ParseResult, CError> {
    let mut parser = Parser::new(tokens);
    parser.find_main()?;
    parser.expect_param_list()?;
    let body = parser.parse_brace_block()?;
    Ok(ParseResult { body, warnings: parser.warnings })
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    warnings: Vec<String>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0, warnings: Vec::new() }
    }

    fn peek(&self) -> &TokenKind {
        &self.tokens[self.pos.min(self.tokens.len() - 1)].kind
    }

    fn peek_at(&self, offset: usize) -> &TokenKind {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    fn span(&self) -> Span {
        self.tokens[self.pos.min(self.tokens.len() - 1)].span
    }

    fn advance(&mut self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[idx]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek() == kind
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<(), CError> {
        if self.check(&kind) {
            self.advance();
            Ok(())
        } else {
            Err(CError::syntax(message, self.span()))
        }
    }

    fn expect_ident(&mut self, message: &str) -> Result<String, CError> {
        match self.peek().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(CError::syntax(message, self.span())),
        }
    }

    /// Scan forward for `<int-type-keyword> identifier("main")`, tolerating
    /// whatever the preprocessor left before it.
    fn find_main(&mut self) -> Result<(), CError> {
        let len = self.tokens.len();
        let mut i = 0;
        while i + 1 < len {
            if self.tokens[i].kind == TokenKind::IntType {
                if let TokenKind::Ident(name) = &self.tokens[i + 1].kind {
                    if name == "main" {
                        self.pos = i + 2;
                        return Ok(());
                    }
                }
            }
            i += 1;
        }
        Err(CError::syntax("No `main` function found", self.span()))
    }

    /// Consume a balanced `(...)` parameter list; contents are ignored.
    fn expect_param_list(&mut self) -> Result<(), CError> {
        self.expect(TokenKind::LParen, "Expected '(' after main")?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.peek() {
                TokenKind::Eof => {
                    return Err(CError::syntax("Unterminated parameter list", self.span()))
                }
                TokenKind::LParen => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen => {
                    depth -= 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
        Ok(())
    }

    fn parse_brace_block(&mut self) -> Result<Vec<Stmt>, CError> {
        self.expect(TokenKind::LBrace, "Expected '{'")?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            if self.check(&TokenKind::Eof) {
                return Err(CError::syntax("Unterminated block", self.span()));
            }
            stmts.push(self.parse_statement()?);
        }
        self.advance(); // consume '}'
        Ok(stmts)
    }

    fn parse_body(&mut self) -> Result<Vec<Stmt>, CError> {
        if self.check(&TokenKind::LBrace) {
            self.parse_brace_block()
        } else {
            Ok(vec![self.parse_statement()?])
        }
    }

    fn parse_statement(&mut self) -> Result<Stmt, CError> {
        match self.peek().clone() {
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_brace_block()?)),
            TokenKind::IntType => self.parse_decl_statement(true),
            TokenKind::Return => self.parse_return(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Semicolon => {
                self.advance();
                Ok(Stmt::Empty)
            }
            TokenKind::Ident(name) if name == "printf" && *self.peek_at(1) == TokenKind::LParen => {
                self.parse_printf()
            }
            TokenKind::Ident(_) => self.parse_assignment_statement(true),
            _ => Err(CError::syntax("Unexpected token in statement", self.span())),
        }
    }

    /// Parses one or more comma-separated declarations. A single
    /// declaration returns a bare `Decl`; multiple collapse into a `Block`
    /// so callers that expect one statement node still see one.
    fn parse_decl_statement(&mut self, consume_semicolon: bool) -> Result<Stmt, CError> {
        self.advance(); // consume the type keyword
        let mut decls = Vec::new();
        loop {
            let name = self.expect_ident("Expected identifier after type")?;
            let init = if self.check(&TokenKind::Eq) {
                self.advance();
                Some(self.parse_expr()?)
            } else {
                None
            };
            decls.push(Stmt::Decl { name, init });
            if self.check(&TokenKind::Comma) {
                self.advance();
                continue;
            }
            break;
        }
        if consume_semicolon {
            self.expect(TokenKind::Semicolon, "Expected ';' after declaration")?;
        }
        if decls.len() == 1 {
            Ok(decls.into_iter().next().unwrap())
        } else {
            Ok(Stmt::Block(decls))
        }
    }

    fn parse_return(&mut self) -> Result<Stmt, CError> {
        self.advance(); // 'return'
        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon, "Expected ';' after return")?;
        Ok(Stmt::Return { value })
    }

    fn parse_if(&mut self) -> Result<Stmt, CError> {
        self.advance(); // 'if'
        self.expect(TokenKind::LParen, "Expected '(' after if")?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen, "Expected ')' after if condition")?;
        let then_branch = self.parse_body()?;
        let else_branch = if self.check(&TokenKind::Else) {
            self.advance();
            Some(self.parse_body()?)
        } else {
            None
        };
        Ok(Stmt::If { cond, then_branch, else_branch })
    }

    fn parse_while(&mut self) -> Result<Stmt, CError> {
        self.advance(); // 'while'
        self.expect(TokenKind::LParen, "Expected '(' after while")?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen, "Expected ')' after while condition")?;
        let body = self.parse_body()?;
        Ok(Stmt::While { cond, body })
    }

    fn parse_for(&mut self) -> Result<Stmt, CError> {
        self.advance(); // 'for'
        self.expect(TokenKind::LParen, "Expected '(' after for")?;

        let init = if self.check(&TokenKind::Semicolon) {
            self.advance();
            None
        } else if self.check(&TokenKind::IntType) {
            let stmt = self.parse_decl_statement(false)?;
            self.expect(TokenKind::Semicolon, "Expected ';' after for-initializer")?;
            Some(Box::new(stmt))
        } else {
            let stmt = self.parse_assignment_statement(false)?;
            self.expect(TokenKind::Semicolon, "Expected ';' after for-initializer")?;
            Some(Box::new(stmt))
        };

        let cond = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon, "Expected ';' after for-condition")?;

        let incr = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(Box::new(self.parse_assignment_statement(false)?))
        };
        self.expect(TokenKind::RParen, "Expected ')' after for-clauses")?;

        let body = self.parse_body()?;
        Ok(Stmt::For { init, cond, incr, body })
    }

    fn parse_printf(&mut self) -> Result<Stmt, CError> {
        let span = self.span();
        self.advance(); // 'printf'
        self.expect(TokenKind::LParen, "Expected '(' after printf")?;
        let format = match self.peek().clone() {
            TokenKind::StringLiteral(s) => {
                self.advance();
                s
            }
            _ => return Err(CError::syntax("printf requires a format string", self.span())),
        };
        let mut args = Vec::new();
        while self.check(&TokenKind::Comma) {
            self.advance();
            args.push(self.parse_expr()?);
        }
        self.expect(TokenKind::RParen, "Expected ')' after printf arguments")?;
        self.expect(TokenKind::Semicolon, "Expected ';' after printf")?;
        Ok(Stmt::Printf { format, args, span })
    }

    /// `identifier (++|--| compound-assign expr)`. The follow-up determines
    /// whether this desugars `i++`/`i--` into `i = i ± 1`.
    fn parse_assignment_statement(&mut self, consume_semicolon: bool) -> Result<Stmt, CError> {
        let span = self.span();
        let name = self.expect_ident("Expected identifier")?;

        let stmt = match self.peek() {
            TokenKind::PlusPlus => {
                self.advance();
                Stmt::Assign { name, op: AssignOp::AddSet, value: Expr::IntLit(1), span }
            }
            TokenKind::MinusMinus => {
                self.advance();
                Stmt::Assign { name, op: AssignOp::SubSet, value: Expr::IntLit(1), span }
            }
            TokenKind::Eq => {
                self.advance();
                let value = self.parse_expr()?;
                Stmt::Assign { name, op: AssignOp::Set, value, span }
            }
            TokenKind::PlusEq => {
                self.advance();
                Stmt::Assign { name, op: AssignOp::AddSet, value: self.parse_expr()?, span }
            }
            TokenKind::MinusEq => {
                self.advance();
                Stmt::Assign { name, op: AssignOp::SubSet, value: self.parse_expr()?, span }
            }
            TokenKind::StarEq => {
                self.advance();
                Stmt::Assign { name, op: AssignOp::MulSet, value: self.parse_expr()?, span }
            }
            TokenKind::SlashEq => {
                self.advance();
                Stmt::Assign { name, op: AssignOp::DivSet, value: self.parse_expr()?, span }
            }
            TokenKind::PercentEq => {
                self.advance();
                Stmt::Assign { name, op: AssignOp::ModSet, value: self.parse_expr()?, span }
            }
            _ => return Err(CError::unsupported("Unsupported operator in assignment-like statement")),
        };

        if consume_semicolon {
            self.expect(TokenKind::Semicolon, "Expected ';' after statement")?;
        }
        Ok(stmt)
    }

    // --- Expressions: precedence-climbing, left-associative binary ops. ---

    fn parse_expr(&mut self) -> Result<Expr, CError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, CError> {
        let mut left = self.parse_and()?;
        while self.check(&TokenKind::OrOr) {
            let span = self.span();
            self.advance();
            let right = self.parse_and()?;
            left = Expr::Binary(BinOp::Or, Box::new(left), Box::new(right), span);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, CError> {
        let mut left = self.parse_equality()?;
        while self.check(&TokenKind::AndAnd) {
            let span = self.span();
            self.advance();
            let right = self.parse_equality()?;
            left = Expr::Binary(BinOp::And, Box::new(left), Box::new(right), span);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, CError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.peek() {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::NotEq => BinOp::Ne,
                _ => break,
            };
            let span = self.span();
            self.advance();
            let right = self.parse_relational()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right), span);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expr, CError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek() {
                TokenKind::Lt => BinOp::Lt,
                TokenKind::LtEq => BinOp::Le,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::GtEq => BinOp::Ge,
                _ => break,
            };
            let span = self.span();
            self.advance();
            let right = self.parse_additive()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right), span);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, CError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            let span = self.span();
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right), span);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, CError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                TokenKind::Percent => BinOp::Mod,
                _ => break,
            };
            let span = self.span();
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right), span);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, CError> {
        let op = match self.peek() {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Not => Some(UnaryOp::Not),
            _ => None,
        };
        if let Some(op) = op {
            let span = self.span();
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary(op, Box::new(operand), span));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, CError> {
        let span = self.span();
        match self.peek().clone() {
            TokenKind::IntLiteral(v) => {
                self.advance();
                Ok(Expr::IntLit(v))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::Ident(name, span))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen, "Expected ')' after expression")?;
                Ok(expr)
            }
            TokenKind::Eof => Err(CError::syntax("Unexpected end of input", span)),
            _ => Err(CError::syntax("Expected expression", span)),
        }
    }
}
