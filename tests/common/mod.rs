#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use arithc::{Engine, Options, Translation};
use temp_dir::TempDir;

pub fn source(name: &str) -> String {
    fs::read_to_string(format!("demos/{name}.calc")).expect("demo program not found")
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Writes `source` into a fresh temporary directory.
pub fn write_source(source: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.child("program.calc");

    fs::write(&path, source).expect("failed to write source");

    (dir, path)
}

pub fn translate(source: &str) -> Result<(Translation, String), arithc::Error> {
    let mut engine = Engine::with_output(Options::default(), vec![]);
    let translation = engine.translate(source)?;
    let out = String::from_utf8(engine.into_output()).expect("output is not utf-8");

    Ok((translation, out))
}

pub fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arithc"))
        .args(args)
        .output()
        .expect("failed to run arithc")
}

pub fn has_gcc() -> bool {
    Command::new("gcc")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Compiles a C file with gcc and returns what the program prints.
pub fn run_c(src: &Path) -> String {
    let exe = arithc::gcc::executable_path(src);

    arithc::gcc::compile(src, &exe, false).expect("gcc failed");

    let output = Command::new(&exe)
        .output()
        .expect("failed to run compiled program");

    assert!(output.status.success());

    String::from_utf8(output.stdout).expect("output is not utf-8")
}
