// ABOUTME: Output asset handling for the nb-beamer application
// ABOUTME: Writes code files, logos, and compile scripts into the output tree

use crate::errors::{BeamerError, Result};
use crate::notebook::CodeCell;
use crate::themes::Theme;
use crate::utils::ensure_directory_exists;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

const COMPILE_SCRIPT_SH: &str = include_str!("../templates/compile_presentation.sh");
const COMPILE_SCRIPT_BAT: &str = include_str!("../templates/compile_presentation.bat");

/// Save each code cell as a standalone file named by its cell position.
pub fn save_code_cells(
    code_cells: &[CodeCell],
    output_dir: &Path,
    code_ext: &str,
) -> Result<Vec<PathBuf>> {
    ensure_directory_exists(output_dir)?;

    let mut saved = Vec::with_capacity(code_cells.len());
    for cell in code_cells {
        let filename = format!("cell_{:03}{}", cell.cell_index, code_ext);
        let filepath = output_dir.join(&filename);
        fs::write(&filepath, &cell.content).map_err(BeamerError::IoError)?;
        info!("Saved: {}", filename);
        saved.push(filepath);
    }

    Ok(saved)
}

/// Copy the two static compile scripts into the output directory. They are
/// shipped verbatim, not generated.
pub fn write_compile_scripts(output_dir: &Path) -> Result<()> {
    ensure_directory_exists(output_dir)?;

    let shell_path = output_dir.join("compile_presentation.sh");
    fs::write(&shell_path, COMPILE_SCRIPT_SH).map_err(BeamerError::IoError)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&shell_path, fs::Permissions::from_mode(0o755))
            .map_err(BeamerError::IoError)?;
    }
    info!("Shell script created: {:?}", shell_path);

    let batch_path = output_dir.join("compile_presentation.bat");
    fs::write(&batch_path, COMPILE_SCRIPT_BAT).map_err(BeamerError::IoError)?;
    info!("Batch script created: {:?}", batch_path);

    Ok(())
}

/// Place the theme logo into `<output_dir>/assets/logos/` and return the
/// filename the template should reference.
///
/// When no logo file is found in `logo_dir`, a placeholder SVG tinted with
/// the theme's primary color is generated instead.
pub fn ensure_logo(theme: &Theme, logo_dir: Option<&Path>, output_dir: &Path) -> Result<String> {
    let logos_dir = output_dir.join("assets").join("logos");
    ensure_directory_exists(&logos_dir)?;

    if let Some(dir) = logo_dir {
        let source = dir.join(theme.logo);
        if source.exists() {
            fs::copy(&source, logos_dir.join(theme.logo)).map_err(BeamerError::IoError)?;
            info!("Copied logo: {:?}", source);
            return Ok(theme.logo.to_string());
        }
    }

    let placeholder_name = theme.logo.replace(".png", ".svg");
    let svg = placeholder_svg(theme);
    fs::write(logos_dir.join(&placeholder_name), svg).map_err(BeamerError::IoError)?;
    info!("Generated placeholder logo: {}", placeholder_name);
    Ok(placeholder_name)
}

fn placeholder_svg(theme: &Theme) -> String {
    let (r, g, b) = theme.primary;
    let mut words = theme.name.split_whitespace();
    let first_word = words.next().unwrap_or("");
    let rest = words.collect::<Vec<_>>().join(" ");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="300" height="300" xmlns="http://www.w3.org/2000/svg">
  <rect width="300" height="300" fill="rgb({r},{g},{b})" opacity="0.1"/>
  <text x="150" y="150" font-family="Arial, sans-serif" font-size="24"
        font-weight="bold" text-anchor="middle"
        fill="rgb({r},{g},{b})">
    {first_word}
  </text>
  <text x="150" y="180" font-family="Arial, sans-serif" font-size="18"
        text-anchor="middle"
        fill="rgb({r},{g},{b})">
    {rest}
  </text>
</svg>"#
    )
}
