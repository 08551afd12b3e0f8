mod ast;
mod error;
mod lexer;
pub mod parser;

pub use ast::*;
pub use error::{LexError, ParseError, SyntaxError};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse, Parser};
