use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "tracing")]
use tracing::{debug, instrument, Level};

use crate::codegen;
use crate::error::{Error, ResourceError};
use crate::interpreter::Interpreter;
use crate::symbols::{SymbolTable, DEFAULT_CAPACITY};
use crate::syntax::parser;

pub const OUTPUT_SUFFIX: &str = ".c";

pub struct Options {
    pub output: Option<PathBuf>,
    pub max_variables: usize,
    pub print_ast: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: None,
            max_variables: DEFAULT_CAPACITY,
            print_ast: false,
        }
    }
}

/// Result of running a program and rendering it as C.
#[derive(Debug)]
pub struct Translation {
    /// Assigned variables in first-assignment order.
    pub variables: Vec<String>,
    pub code: String,
}

#[derive(Debug)]
pub struct Compilation {
    pub output: PathBuf,
    pub translation: Translation,
}

/// `<source>.c`, the suffix is appended rather than replacing an extension.
pub fn output_path(source: &Path) -> PathBuf {
    let mut path = OsString::from(source.as_os_str());
    path.push(OUTPUT_SUFFIX);
    PathBuf::from(path)
}

pub struct Engine<W: Write = io::Stdout> {
    opts: Options,
    out: W,
}

impl Engine {
    pub fn new(opts: Options) -> Self {
        Self::with_output(opts, io::stdout())
    }
}

impl<W: Write> Engine<W> {
    pub fn with_output(opts: Options, out: W) -> Self {
        Self { opts, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Parses `source` once, runs it, then renders the same statements as C.
    ///
    /// The declaration list of the generated program is the symbol table as
    /// it stands after the run.
    #[cfg_attr(feature = "tracing", instrument(level = Level::DEBUG, skip_all))]
    pub fn translate(&mut self, source: &str) -> Result<Translation, Error> {
        let stmts = parser::parse(source)?;

        if self.opts.print_ast {
            writeln!(self.out, "{:#?}", stmts)?;
        }

        #[cfg(feature = "tracing")]
        debug!(statements = stmts.len(), "interpreting");

        let symbols = SymbolTable::with_capacity(self.opts.max_variables);
        let mut interpreter = Interpreter::with_output(symbols, &mut self.out);

        interpreter.run(&stmts)?;

        let (symbols, _) = interpreter.into_parts();
        let variables = symbols.names().map(str::to_string).collect::<Vec<_>>();

        #[cfg(feature = "tracing")]
        debug!(?variables, "generating code");

        let code = codegen::generate(variables.iter().map(String::as_str), &stmts);

        Ok(Translation { variables, code })
    }

    /// Translates the file at `path` and writes the generated program. The
    /// output file is only created once both passes have succeeded.
    pub fn compile_file(&mut self, path: impl AsRef<Path>) -> Result<Compilation, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ResourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let translation = self.translate(&source)?;
        let output = self
            .opts
            .output
            .clone()
            .unwrap_or_else(|| output_path(path));

        #[cfg(feature = "tracing")]
        debug!(output = %output.display(), "writing generated code");

        fs::write(&output, &translation.code).map_err(|source| ResourceError::Write {
            path: output.clone(),
            source,
        })?;

        Ok(Compilation {
            output,
            translation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::RuntimeError;

    fn translate(source: &str) -> (Result<Translation, Error>, String) {
        let mut engine = Engine::with_output(Options::default(), vec![]);
        let result = engine.translate(source);
        let out = String::from_utf8(engine.into_output()).unwrap();

        (result, out)
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("dir/prog.calc")),
            PathBuf::from("dir/prog.calc.c")
        );
        assert_eq!(output_path(Path::new("prog")), PathBuf::from("prog.c"));
    }

    #[test]
    fn test_declaration_order() {
        let (result, out) = translate("x = 10\ny = 20\nz = x + y * 2\nprint z");
        let translation = result.unwrap();

        assert_eq!(out, "50\n");
        assert_eq!(translation.variables, vec!["x", "y", "z"]);
        assert!(translation.code.contains("    int x, y, z;\n"));
        assert!(translation.code.contains("    z = (x + (y * 2));\n"));
    }

    #[test]
    fn test_declared_once() {
        let (result, out) = translate("a = 5\na = a + 1\nprint a");
        let translation = result.unwrap();

        assert_eq!(out, "6\n");
        assert_eq!(translation.variables, vec!["a"]);
        assert_eq!(translation.code.matches("int a;").count(), 1);
    }

    #[test]
    fn test_statements_in_source_order() {
        let (result, _) = translate("b = 1\na = 2\nprint a\nb = a");
        let code = result.unwrap().code;
        let body = code
            .lines()
            .skip_while(|line| !line.starts_with("    int"))
            .skip(2)
            .collect::<Vec<_>>();

        assert_eq!(
            body,
            vec![
                "    b = 1;",
                "    a = 2;",
                "    printf(\"%d\\n\", a);",
                "    b = a;",
                "    return 0;",
                "}",
            ]
        );
    }

    #[test]
    fn test_runtime_error() {
        let (result, _) = translate("print y");

        assert!(matches!(
            result,
            Err(Error::Runtime(RuntimeError::UndefinedVariable(name))) if name == "y"
        ));
    }

    #[test]
    fn test_syntax_error_runs_nothing() {
        let (result, out) = translate("print 1\nprint 2\nx = )");

        assert!(matches!(result, Err(Error::Parse(_))));
        assert_eq!(out, "");
    }

    #[test]
    fn test_runtime_error_keeps_earlier_output() {
        let (result, out) = translate("print 1\nprint 2 / 0\nprint 3");

        assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero))));
        assert_eq!(out, "1\n");
    }

    #[test]
    fn test_print_ast() {
        let opts = Options {
            print_ast: true,
            ..Options::default()
        };
        let mut engine = Engine::with_output(opts, vec![]);

        engine.translate("print 1").unwrap();

        let out = String::from_utf8(engine.into_output()).unwrap();
        assert!(out.starts_with("[\n    Stmt {"));
        assert!(out.ends_with("1\n"));
    }

    #[test]
    fn test_max_variables() {
        let opts = Options {
            max_variables: 1,
            ..Options::default()
        };
        let mut engine = Engine::with_output(opts, vec![]);

        assert!(matches!(
            engine.translate("a = 1\nb = 2"),
            Err(Error::Resource(ResourceError::Capacity { limit: 1 }))
        ));
    }
}
