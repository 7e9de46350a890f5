// ABOUTME: External LaTeX compilation for the nb-beamer application
// ABOUTME: Runs the generated compile script as a fire-and-wait child process

use crate::errors::{BeamerError, Result};
use log::info;
use std::path::Path;
use std::process::Command;

/// Compile the generated presentation by running the platform compile
/// script inside the output directory.
///
/// This blocks until the compiler exits. A failure here never invalidates
/// the already-written LaTeX and asset files.
pub fn compile_presentation(output_dir: &Path, tex_file: &str, compiler: &str) -> Result<()> {
    info!("Compiling {} in {:?}", tex_file, output_dir);

    let mut command = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "compile_presentation.bat", tex_file]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["compile_presentation.sh", tex_file]);
        cmd
    };

    let status = command
        .current_dir(output_dir)
        .env("LATEX_COMPILER", compiler)
        .status()
        .map_err(|e| BeamerError::CompileError(format!("Failed to run compile script: {}", e)))?;

    if !status.success() {
        return Err(BeamerError::CompileError(format!(
            "Compile script exited with status {}",
            status
        )));
    }

    info!("PDF compilation successful");
    Ok(())
}

/// Manual recompile instructions shown when the compile step fails.
pub fn recompile_guidance(output_dir: &Path) -> String {
    if cfg!(windows) {
        format!(
            "You can manually re-compile using:\n   cd {}\n   compile_presentation.bat presentation.tex",
            output_dir.display()
        )
    } else {
        format!(
            "You can manually re-compile using:\n   cd {}\n   ./compile_presentation.sh presentation.tex",
            output_dir.display()
        )
    }
}
