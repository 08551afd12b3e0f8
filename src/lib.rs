pub mod codegen;
pub mod engine;
pub mod error;
pub mod gcc;
pub mod interpreter;
pub mod symbols;
pub mod syntax;
#[cfg(test)]
mod tests;

pub use engine::{Compilation, Engine, Options, Translation};
pub use error::{Error, ResourceError};
pub use interpreter::{Interpreter, RuntimeError};
pub use symbols::SymbolTable;
