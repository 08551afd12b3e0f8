use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Context, Result};

/// Executable path for a generated C file: `prog.calc.c` becomes
/// `prog.calc.out`, never the script path.
pub fn executable_path(src: &Path) -> PathBuf {
    src.with_extension("out")
}

pub fn compile(src: impl AsRef<Path>, dest: impl AsRef<Path>, optimize: bool) -> Result<()> {
    let mut cmd = Command::new("gcc");

    if optimize {
        cmd.arg("-O3");
    }

    let status = cmd
        .arg("-o")
        .arg(dest.as_ref())
        .arg(src.as_ref())
        .spawn()
        .context("failed to start gcc")?
        .wait()?;

    if !status.success() {
        return Err(anyhow!(
            "gcc failed to compile '{}'",
            src.as_ref().display()
        ));
    }

    Ok(())
}
