use std::fmt::{Display, Formatter};

use logos::Logos;

use crate::syntax::LexError;

pub struct LexerExtras {
    pub line: usize,
}

impl LexerExtras {
    pub fn apply(&mut self, text: &str) {
        self.line += text.matches('\n').count();
    }
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(extras = LexerExtras)]
enum RawToken {
    #[token("=")]
    Assign,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("(")]
    ParentLeft,

    #[token(")")]
    ParentRight,

    #[token(";")]
    Semi,

    #[token("\n")]
    Newline,

    #[token("print")]
    Print,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    #[error]
    #[regex(r"[ \t]+", logos::skip)]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Ident,
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    ParentLeft,
    ParentRight,
    Print,
    Semi,
    Newline,
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Ident => write!(f, "identifier"),
            Self::Assign => write!(f, "="),
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::ParentLeft => write!(f, "("),
            Self::ParentRight => write!(f, ")"),
            Self::Print => write!(f, "print"),
            Self::Semi => write!(f, ";"),
            Self::Newline => write!(f, "newline"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::Ident => write!(f, "{}", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Cursor over an immutable source buffer producing one token at a time.
pub struct Lexer<'s> {
    source: &'s str,
    inner: logos::Lexer<'s, RawToken>,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            inner: RawToken::lexer(source),
        }
    }

    /// Rewind to the start of the buffer and line 1.
    pub fn reset(&mut self) {
        self.inner = RawToken::lexer(self.source);
    }

    pub fn line(&self) -> usize {
        self.inner.extras.line
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let line = self.line();

        let raw = match self.inner.next() {
            Some(raw) => raw,
            None => return Ok(Token::new(TokenKind::Eof, "", line)),
        };

        let kind = match raw {
            RawToken::Assign => TokenKind::Assign,
            RawToken::Add => TokenKind::Add,
            RawToken::Sub => TokenKind::Sub,
            RawToken::Mul => TokenKind::Mul,
            RawToken::Div => TokenKind::Div,
            RawToken::ParentLeft => TokenKind::ParentLeft,
            RawToken::ParentRight => TokenKind::ParentRight,
            RawToken::Semi => TokenKind::Semi,
            RawToken::Newline => {
                self.inner.extras.apply(self.inner.slice());
                TokenKind::Newline
            }
            RawToken::Print => TokenKind::Print,
            RawToken::Ident => TokenKind::Ident,
            RawToken::Number => TokenKind::Number,
            RawToken::Error => {
                let ch = self
                    .source
                    .get(self.inner.span().start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);

                return Err(LexError { ch, line });
            }
        };

        Ok(Token::new(kind, self.inner.slice(), line))
    }
}
