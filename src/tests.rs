use test_case::test_case;

use crate::engine::{Engine, Options, Translation};
use crate::error::Error;

fn run_code(source: &str) -> Result<(Translation, String), Error> {
    let mut engine = Engine::with_output(Options::default(), vec![]);
    let translation = engine.translate(source)?;
    let out = String::from_utf8(engine.into_output()).expect("output is not utf-8");

    Ok((translation, out))
}

#[test_case(include_str!("../demos/precedence.calc"), "50\n", &["x", "y", "z"]; "operator precedence")]
#[test_case(include_str!("../demos/reassign.calc"), "6\n", &["a"]; "reassignment")]
#[test_case(include_str!("../demos/parentheses.calc"), "20\n", &["x"]; "parentheses")]
#[test_case(include_str!("../demos/division.calc"), "14\n2\n-14\n", &["total", "parts", "share", "rest"]; "integer division")]
#[test_case(include_str!("../demos/separators.calc"), "3\n3\n", &["a", "b", "c"]; "statement separators")]
#[test_case(include_str!("../demos/temperature.calc"), "98\n-40\n", &["celsius", "fahrenheit"]; "temperature conversion")]
fn code(source: &str, output: &str, variables: &[&str]) {
    let (translation, out) = run_code(source).unwrap();

    assert_eq!(out, output);
    assert_eq!(translation.variables, variables);
}

#[test]
fn parentheses_are_rendered_explicitly() {
    let (translation, _) = run_code(include_str!("../demos/parentheses.calc")).unwrap();

    assert!(translation.code.contains("    x = ((2 + 3) * 4);\n"));
}

#[test_case("x = 1\ny = 2 # 3", "LexError: unknown character '#' at line 2"; "lex error")]
#[test_case("print 1\n\r", "LexError: unknown character '\\r' at line 2"; "control character is escaped")]
#[test_case("x = (1 + 2", "ParseError: expected ')', found 'EOF' at line 1"; "parse error")]
#[test_case("\n\nx + 1", "ParseError: invalid statement at line 3"; "invalid statement")]
#[test_case("print 1 / 0", "RuntimeError: division by zero"; "division by zero")]
#[test_case("print y", "RuntimeError: undefined variable 'y'"; "undefined variable")]
fn diagnostics(source: &str, message: &str) {
    let err = run_code(source).unwrap_err();

    assert_eq!(err.to_string(), message);
}

#[test]
fn error_lines() {
    assert_eq!(run_code("a = 1\n\nb = ?").unwrap_err().line(), Some(3));
    assert_eq!(run_code("print 1 / 0").unwrap_err().line(), None);
}
