#[cfg(feature = "tracing")]
use tracing::{instrument, Level};

use crate::syntax::{
    BinaryOp, Expr, Lexer, ParseError, Stmt, StmtKind, SyntaxError, Token, TokenKind,
};

type Result<T> = std::result::Result<T, SyntaxError>;

macro_rules! accept {
    ($parser:expr, $kind:path) => {
        matches!($parser.peek()?.kind, $kind)
    };
}

macro_rules! make_bin {
    ($expr:expr, $right:expr, $op:ident) => {
        $expr = Expr::Binary(BinaryOp::$op, Box::new($expr), Box::new($right))
    };
}

pub struct Parser<'s> {
    lexer: Lexer<'s>,
    peeked: Option<Token>,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            peeked: None,
        }
    }

    /// Start over from the first token of the source.
    pub fn reset(&mut self) {
        self.lexer.reset();
        self.peeked = None;
    }

    fn peek(&mut self) -> Result<&Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };

        Ok(&*self.peeked.insert(token))
    }

    fn advance(&mut self) -> Result<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => Ok(self.lexer.next_token()?),
        }
    }

    fn factor(&mut self) -> Result<Expr> {
        let token = self.advance()?;

        match token.kind {
            TokenKind::Number => Ok(Expr::Number(token.text)),
            TokenKind::Ident => Ok(Expr::Ident(token.text)),
            TokenKind::ParentLeft => {
                let expr = self.expr()?;
                let closing = self.advance()?;

                if closing.kind != TokenKind::ParentRight {
                    return Err(ParseError::new(
                        closing.line,
                        format!("expected ')', found '{}'", closing),
                    )
                    .into());
                }

                Ok(expr)
            }
            _ => Err(ParseError::new(token.line, format!("unexpected token '{}'", token)).into()),
        }
    }

    fn term(&mut self) -> Result<Expr> {
        let mut expr = self.factor()?;

        loop {
            match self.peek()?.kind {
                TokenKind::Mul => {
                    self.advance()?;
                    make_bin!(expr, self.factor()?, Mul);
                }
                TokenKind::Div => {
                    self.advance()?;
                    make_bin!(expr, self.factor()?, Div);
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    pub fn expr(&mut self) -> Result<Expr> {
        let mut expr = self.term()?;

        loop {
            match self.peek()?.kind {
                TokenKind::Add => {
                    self.advance()?;
                    make_bin!(expr, self.term()?, Add);
                }
                TokenKind::Sub => {
                    self.advance()?;
                    make_bin!(expr, self.term()?, Sub);
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// Parses exactly one statement, leaving any trailing `;` in the stream.
    #[cfg_attr(feature = "tracing", instrument(level = Level::TRACE, skip_all, ret))]
    pub fn statement(&mut self) -> Result<Stmt> {
        let token = self.advance()?;
        let line = token.line;

        match token.kind {
            TokenKind::Ident => {
                if !accept!(self, TokenKind::Assign) {
                    return Err(ParseError::new(line, "invalid statement").into());
                }

                self.advance()?;
                Ok(StmtKind::Assign(token.text, self.expr()?).at(line))
            }
            TokenKind::Print => Ok(StmtKind::Print(self.expr()?).at(line)),
            _ => Err(ParseError::new(line, "invalid statement").into()),
        }
    }

    /// Parses statements until the end of input. Blank lines are skipped and
    /// each statement may be followed by a single `;`.
    pub fn parse(&mut self) -> Result<Vec<Stmt>> {
        let mut stmts = vec![];

        loop {
            match self.peek()?.kind {
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    self.advance()?;
                }
                _ => {
                    stmts.push(self.statement()?);

                    if accept!(self, TokenKind::Semi) {
                        self.advance()?;
                    }
                }
            }
        }

        Ok(stmts)
    }
}

pub fn parse(source: &str) -> Result<Vec<Stmt>> {
    Parser::new(source).parse()
}
