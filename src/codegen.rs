use std::borrow::Cow;

use crate::syntax::{Expr, Stmt, StmtKind};

const INDENT: &str = "    ";

/// Names a script variable cannot use verbatim in the generated program: C
/// keywords (up to C23 plus GNU `asm`), the names the generated code itself
/// refers to, object-like macros from `<stdio.h>` and gcc's predefined
/// `unix`/`linux` macros.
const RESERVED: &[&str] = &[
    "alignas", "alignof", "asm", "auto", "bool", "break", "case", "char", "const",
    "constexpr", "continue", "default", "do", "double", "else", "enum", "extern", "false",
    "float", "for", "goto", "if", "inline", "int", "long", "nullptr", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "static_assert", "struct",
    "switch", "thread_local", "true", "typedef", "typeof", "typeof_unqual", "union",
    "unsigned", "void", "volatile", "while", "main", "printf", "BUFSIZ", "EOF",
    "FILENAME_MAX", "FOPEN_MAX", "L_ctermid", "L_tmpnam", "NULL", "P_tmpdir", "SEEK_CUR",
    "SEEK_DATA", "SEEK_END", "SEEK_HOLE", "SEEK_SET", "TMP_MAX", "stderr", "stdin",
    "stdout", "linux", "unix",
];

/// Script identifiers start with a letter, so a leading `_` never collides
/// with another variable.
fn c_name(name: &str) -> Cow<'_, str> {
    if RESERVED.contains(&name) {
        Cow::Owned(format!("_{}", name))
    } else {
        Cow::Borrowed(name)
    }
}

/// C reads a literal with a leading zero as octal.
fn decimal(text: &str) -> &str {
    match text.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    }
}

/// Renders statements as the body of a C `main` function.
///
/// Nothing is evaluated here: every expression is emitted fully
/// parenthesized so the C compiler sees exactly the tree that was parsed.
#[derive(Default)]
pub struct CodeGenerator {
    out: String,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prologue(&mut self) {
        self.out.push_str("#include <stdio.h>\n\n");
        self.out.push_str("int main() {\n");
    }

    /// Emits one combined `int` declaration. Nothing is emitted when there
    /// are no variables, `int ;` is not valid C.
    pub fn declarations<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        let names = names.into_iter().map(c_name).collect::<Vec<_>>();

        if names.is_empty() {
            return;
        }

        self.out.push_str(INDENT);
        self.out.push_str("int ");
        self.out.push_str(&names.join(", "));
        self.out.push_str(";\n\n");
    }

    pub fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Number(text) => self.out.push_str(decimal(text)),
            Expr::Ident(name) => self.out.push_str(&c_name(name)),
            Expr::Binary(op, left, right) => {
                self.out.push('(');
                self.expr(left);
                self.out.push(' ');
                self.out.push(op.symbol());
                self.out.push(' ');
                self.expr(right);
                self.out.push(')');
            }
        }
    }

    pub fn stmt(&mut self, stmt: &Stmt) {
        self.out.push_str(INDENT);

        match &stmt.kind {
            StmtKind::Assign(name, expr) => {
                self.out.push_str(&c_name(name));
                self.out.push_str(" = ");
                self.expr(expr);
            }
            StmtKind::Print(expr) => {
                self.out.push_str("printf(\"%d\\n\", ");
                self.expr(expr);
                self.out.push(')');
            }
        }

        self.out.push_str(";\n");
    }

    pub fn epilogue(&mut self) {
        self.out.push_str(INDENT);
        self.out.push_str("return 0;\n");
        self.out.push_str("}\n");
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Renders a complete C program declaring `names` and running `stmts`.
pub fn generate<'a>(names: impl IntoIterator<Item = &'a str>, stmts: &[Stmt]) -> String {
    let mut generator = CodeGenerator::new();

    generator.prologue();
    generator.declarations(names);

    for stmt in stmts {
        generator.stmt(stmt);
    }

    generator.epilogue();
    generator.finish()
}
