use std::io;
use std::path::PathBuf;

use crate::interpreter::RuntimeError;
use crate::syntax::{LexError, ParseError, SyntaxError};

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("too many variables (limit is {limit})")]
    Capacity { limit: usize },
    #[error("cannot open file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write output file '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("LexError: {0}")]
    Lex(#[from] LexError),
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),
    #[error("RuntimeError: {0}")]
    Runtime(#[from] RuntimeError),
    #[error("ResourceError: {0}")]
    Resource(#[from] ResourceError),
    #[error("I/O error: {0}")]
    IO(#[from] io::Error),
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Lex(e) => Self::Lex(e),
            SyntaxError::Parse(e) => Self::Parse(e),
        }
    }
}

impl Error {
    /// Source line of the failure, for errors that have one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Lex(e) => Some(e.line),
            Error::Parse(e) => Some(e.line),
            Error::Runtime(_) | Error::Resource(_) | Error::IO(_) => None,
        }
    }
}
