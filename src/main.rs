use std::path::PathBuf;
use std::process::exit;

use anyhow::Result;
use arithc::symbols::DEFAULT_CAPACITY;
use arithc::{gcc, Engine, Options};
use clap::{ErrorKind, Parser};
#[cfg(feature = "tracing")]
use tracing_subscriber::EnvFilter;

const EXAMPLE: &str = "\
Example source code:
x = 10
y = 20
z = x + y * 2
print z";

/// Runs an arithmetic script and translates it into an equivalent C program
#[derive(Parser)]
#[clap(version, after_help = EXAMPLE)]
struct Opts {
    /// Source file to run and translate
    source: PathBuf,
    /// Write the C program here instead of <SOURCE>.c
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Maximum number of distinct variables
    #[clap(long, default_value_t = DEFAULT_CAPACITY)]
    max_variables: usize,
    /// Print the parsed statements before running them
    #[clap(long)]
    show_ast: bool,
    /// Compile the generated program with gcc
    #[clap(long)]
    build: bool,
    /// Pass -O3 to gcc
    #[clap(long, requires = "build")]
    optimize: bool,
}

fn cmd(opts: Opts) -> Result<()> {
    let options = Options {
        output: opts.output,
        max_variables: opts.max_variables,
        print_ast: opts.show_ast,
    };

    let mut engine = Engine::new(options);
    let compilation = engine.compile_file(&opts.source)?;

    println!(
        "Compilation complete. Output written to '{}'",
        compilation.output.display()
    );

    if opts.build {
        let dest = gcc::executable_path(&compilation.output);
        gcc::compile(&compilation.output, &dest, opts.optimize)?;

        println!("Executable written to '{}'", dest.display());
    }

    Ok(())
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{EXAMPLE}");
            exit(1);
        }
    };

    if let Err(e) = cmd(opts) {
        eprintln!("{e}");
        exit(1);
    }
}
