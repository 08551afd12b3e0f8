#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown character '{}' at line {}", .ch.escape_debug(), .line)]
pub struct LexError {
    pub ch: char,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

/// Anything the front-end can fail with while turning text into statements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("LexError: {0}")]
    Lex(#[from] LexError),
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),
}
