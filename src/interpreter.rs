use std::io::Write;

#[cfg(feature = "tracing")]
use tracing::{instrument, Level};

use crate::error::Error;
use crate::symbols::SymbolTable;
use crate::syntax::{BinaryOp, Expr, Stmt, StmtKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {left} {op} {right}")]
    Overflow { left: i32, op: BinaryOp, right: i32 },
    #[error("integer literal '{0}' is out of range")]
    InvalidLiteral(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

fn apply(op: BinaryOp, left: i32, right: i32) -> Result<i32> {
    let value = match op {
        BinaryOp::Add => left.checked_add(right),
        BinaryOp::Sub => left.checked_sub(right),
        BinaryOp::Mul => left.checked_mul(right),
        BinaryOp::Div if right == 0 => return Err(RuntimeError::DivisionByZero),
        BinaryOp::Div => left.checked_div(right),
    };

    value.ok_or(RuntimeError::Overflow { left, op, right })
}

/// Tree-walking evaluator with C `int` semantics. Printed values go to `out`.
pub struct Interpreter<W: Write> {
    symbols: SymbolTable,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn with_output(symbols: SymbolTable, out: W) -> Self {
        Self { symbols, out }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_parts(self) -> (SymbolTable, W) {
        (self.symbols, self.out)
    }

    pub fn eval(&self, expr: &Expr) -> Result<i32> {
        match expr {
            Expr::Number(text) => text
                .parse::<i32>()
                .map_err(|_| RuntimeError::InvalidLiteral(text.clone())),
            Expr::Ident(name) => self
                .symbols
                .get(name)
                .ok_or_else(|| RuntimeError::UndefinedVariable(name.clone())),
            Expr::Binary(op, left, right) => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;

                apply(*op, left, right)
            }
        }
    }

    #[cfg_attr(feature = "tracing", instrument(level = Level::TRACE, skip_all, fields(line = stmt.line)))]
    pub fn exec(&mut self, stmt: &Stmt) -> std::result::Result<(), Error> {
        match &stmt.kind {
            StmtKind::Assign(name, expr) => {
                let value = self.eval(expr)?;
                self.symbols.set(name, value)?;

                #[cfg(feature = "tracing")]
                tracing::trace!(%name, value, "assign");
            }
            StmtKind::Print(expr) => {
                let value = self.eval(expr)?;
                writeln!(self.out, "{}", value)?;
            }
        }

        Ok(())
    }

    pub fn run(&mut self, stmts: &[Stmt]) -> std::result::Result<(), Error> {
        for stmt in stmts {
            self.exec(stmt)?;
        }

        self.out.flush()?;

        Ok(())
    }
}
