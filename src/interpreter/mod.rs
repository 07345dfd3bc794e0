//! Tree-walking interpreter
//!
//! Executes the statement list produced by the parser over an explicit
//! scope stack. Variables live in the innermost scope that declared them;
//! a scope is pushed on block entry and always popped on exit — including
//! on an error or `return` unwind — so the stack depth is never left out
//! of sync with lexical nesting.

pub mod format;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::config::RunnerConfig;
use crate::error::{CError, Span};
use crate::parser::ast::{AssignOp, BinOp, Expr, Stmt, UnaryOp};

/// What a statement sequence produced, besides its side effects.
enum Signal {
    None,
    Returned(i64),
}

pub struct ExecOutcome {
    pub output: String,
    pub warnings: Vec<String>,
}

/// Run `body` to completion and collect its `printf` output.
///
/// Mirrors [`crate::parser::parse`]'s shape: one `Result`, plus a side
/// channel of non-fatal warnings.
pub fn execute(body: &[Stmt], config: &RunnerConfig) -> Result<ExecOutcome, CError> {
    let mut interp = Interpreter::new(config);
    interp.push_scope();
    let result = interp.exec_block(body);
    interp.pop_scope();
    result?; // the implicit `return` at the end of `main`, if any, is just exit
    Ok(ExecOutcome { output: interp.output, warnings: interp.warnings })
}

struct Interpreter<'a> {
    scopes: Vec<HashMap<String, i64>>,
    output: String,
    warnings: Vec<String>,
    config: &'a RunnerConfig,
    steps: u64,
}

impl<'a> Interpreter<'a> {
    fn new(config: &'a RunnerConfig) -> Self {
        Self { scopes: Vec::new(), output: String::new(), warnings: Vec::new(), config, steps: 0 }
    }

    fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &str, value: i64) {
        self.scopes
            .last_mut()
            .expect("a scope is always pushed before statements run")
            .insert(name.to_string(), value);
    }

    fn get(&self, name: &str) -> Option<i64> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name).copied())
    }

    fn set_existing(&mut self, name: &str, value: i64, span: Span) -> Result<(), CError> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }
        Err(CError::runtime(format!("use of undeclared identifier '{name}'"), span))
    }

    fn count_step(&mut self, span: Span) -> Result<(), CError> {
        self.steps += 1;
        if let Some(max) = self.config.max_steps {
            if self.steps > max {
                return Err(CError::internal("step budget exceeded", span));
            }
        }
        Ok(())
    }

    fn check_output_budget(&self, span: Span) -> Result<(), CError> {
        if let Some(max) = self.config.max_output_bytes {
            if self.output.len() > max {
                return Err(CError::internal("output budget exceeded", span));
            }
        }
        Ok(())
    }

    /// Execute `stmts` in a fresh child scope, always popping it before
    /// returning — on success, on an error, and on a propagating `return`.
    fn exec_body(&mut self, stmts: &[Stmt]) -> Result<Signal, CError> {
        self.push_scope();
        let result = self.exec_block(stmts);
        self.pop_scope();
        result
    }

    fn exec_block(&mut self, stmts: &[Stmt]) -> Result<Signal, CError> {
        for stmt in stmts {
            match self.exec_stmt(stmt)? {
                Signal::None => {}
                returned @ Signal::Returned(_) => return Ok(returned),
            }
        }
        Ok(Signal::None)
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Signal, CError> {
        match stmt {
            Stmt::Decl { name, init } => {
                let value = match init {
                    Some(expr) => self.eval_expr(expr)?,
                    None => 0,
                };
                self.declare(name, value);
                Ok(Signal::None)
            }
            Stmt::Assign { name, op, value, span } => {
                let rhs = self.eval_expr(value)?;
                let next = match op {
                    AssignOp::Set => rhs,
                    AssignOp::AddSet => self.get_or_undeclared(name, *span)?.wrapping_add(rhs),
                    AssignOp::SubSet => self.get_or_undeclared(name, *span)?.wrapping_sub(rhs),
                    AssignOp::MulSet => self.get_or_undeclared(name, *span)?.wrapping_mul(rhs),
                    AssignOp::DivSet => {
                        let current = self.get_or_undeclared(name, *span)?;
                        if rhs == 0 {
                            return Err(CError::runtime("division by zero", *span));
                        }
                        current.wrapping_div(rhs)
                    }
                    AssignOp::ModSet => {
                        let current = self.get_or_undeclared(name, *span)?;
                        if rhs == 0 {
                            return Err(CError::runtime("modulus by zero", *span));
                        }
                        current.wrapping_rem(rhs)
                    }
                };
                self.set_existing(name, next, *span)?;
                Ok(Signal::None)
            }
            Stmt::Printf { format, args, span } => {
                let values: Vec<i64> = args.iter().map(|a| self.eval_expr(a)).collect::<Result<_, _>>()?;
                let (text, mut warnings) = format::render(format, &values);
                self.output.push_str(&text);
                self.warnings.append(&mut warnings);
                self.check_output_budget(*span)?;
                Ok(Signal::None)
            }
            Stmt::If { cond, then_branch, else_branch } => {
                self.count_step(cond.span(Span::new(0)))?;
                if self.eval_expr(cond)? != 0 {
                    self.exec_body(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_body(else_branch)
                } else {
                    Ok(Signal::None)
                }
            }
            Stmt::While { cond, body } => {
                loop {
                    let span = cond.span(Span::new(0));
                    self.count_step(span)?;
                    if self.eval_expr(cond)? == 0 {
                        break;
                    }
                    match self.exec_body(body)? {
                        Signal::None => {}
                        returned @ Signal::Returned(_) => return Ok(returned),
                    }
                }
                Ok(Signal::None)
            }
            Stmt::For { init, cond, incr, body } => {
                self.push_scope();
                let result = (|| {
                    if let Some(init) = init {
                        self.exec_stmt(init)?;
                    }
                    loop {
                        let keep_going = match cond {
                            Some(cond) => {
                                self.count_step(cond.span(Span::new(0)))?;
                                self.eval_expr(cond)? != 0
                            }
                            None => {
                                self.count_step(Span::new(0))?;
                                true
                            }
                        };
                        if !keep_going {
                            break;
                        }
                        match self.exec_body(body)? {
                            Signal::None => {}
                            returned @ Signal::Returned(_) => return Ok(returned),
                        }
                        if let Some(incr) = incr {
                            self.exec_stmt(incr)?;
                        }
                    }
                    Ok(Signal::None)
                })();
                self.pop_scope();
                result
            }
            Stmt::Return { value } => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => 0,
                };
                Ok(Signal::Returned(value))
            }
            Stmt::Block(stmts) => self.exec_body(stmts),
            Stmt::Empty => Ok(Signal::None),
        }
    }

    fn get_or_undeclared(&self, name: &str, span: Span) -> Result<i64, CError> {
        self.get(name).ok_or_else(|| CError::runtime(format!("use of undeclared identifier '{name}'"), span))
    }

    fn eval_expr(&mut self, expr: &Expr) -> Result<i64, CError> {
        self.count_step(expr.span(Span::new(0)))?;
        match expr {
            Expr::IntLit(value) => Ok(*value),
            Expr::Ident(name, span) => self.get_or_undeclared(name, *span),
            Expr::Unary(op, inner, _span) => {
                let value = self.eval_expr(inner)?;
                Ok(match op {
                    UnaryOp::Plus => value,
                    UnaryOp::Neg => value.wrapping_neg(),
                    UnaryOp::Not => i64::from(value == 0),
                })
            }
            Expr::Binary(op, left, right, span) => {
                // Both operands are always evaluated, unlike C's short-circuit
                // `&&`/`||` — a deliberate simplification over C's short-circuit rules.
                let lhs = self.eval_expr(left)?;
                let rhs = self.eval_expr(right)?;
                self.eval_binary(*op, lhs, rhs, *span)
            }
        }
    }

    fn eval_binary(&self, op: BinOp, lhs: i64, rhs: i64, span: Span) -> Result<i64, CError> {
        Ok(match op {
            BinOp::Add => lhs.wrapping_add(rhs),
            BinOp::Sub => lhs.wrapping_sub(rhs),
            BinOp::Mul => lhs.wrapping_mul(rhs),
            BinOp::Div => {
                if rhs == 0 {
                    return Err(CError::runtime("division by zero", span));
                }
                lhs.wrapping_div(rhs)
            }
            BinOp::Mod => {
                if rhs == 0 {
                    return Err(CError::runtime("modulus by zero", span));
                }
                lhs.wrapping_rem(rhs)
            }
            BinOp::Lt => i64::from(lhs < rhs),
            BinOp::Le => i64::from(lhs <= rhs),
            BinOp::Gt => i64::from(lhs > rhs),
            BinOp::Ge => i64::from(lhs >= rhs),
            BinOp::Eq => i64::from(lhs == rhs),
            BinOp::Ne => i64::from(lhs != rhs),
            BinOp::And => i64::from(lhs != 0 && rhs != 0),
            BinOp::Or => i64::from(lhs != 0 || rhs != 0),
        })
    }
}
