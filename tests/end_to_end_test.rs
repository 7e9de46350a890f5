use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

// 1x1 transparent PNG, base64-encoded.
const TINY_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Full pipeline over a notebook exercising every cell kind: markdown with
/// sections and separators, small and oversized code cells, and a plot
/// output that must be extracted to disk.
#[test]
fn test_full_notebook_generation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let big_code = (0..250)
        .map(|i| format!("def helper_{}(): pass", i))
        .collect::<Vec<_>>()
        .join("\n");

    let notebook = serde_json::json!({
        "cells": [
            {
                "cell_type": "markdown",
                "source": [
                    "# Sales Forecasting\n",
                    "### A Regional Study\n",
                    "I, **Ada Lovelace**, prepared this for the University of Colorado Boulder.\n",
                    "---\n",
                    "Some introductory remarks about 50% growth & outliers.\n"
                ]
            },
            {
                "cell_type": "code",
                "source": "import numpy as np\nx = np.arange(10)",
                "outputs": []
            },
            {
                "cell_type": "code",
                "source": "plt.plot(x)",
                "outputs": [
                    {"output_type": "display_data", "data": {"image/png": TINY_PNG}}
                ]
            },
            {
                "cell_type": "code",
                "source": big_code,
                "outputs": []
            }
        ],
        "metadata": {"language_info": {"name": "python", "file_extension": ".py"}}
    });

    let notebook_path = temp_path.join("sales.ipynb");
    fs::write(&notebook_path, notebook.to_string()).expect("Failed to write notebook");

    let output_dir = temp_path.join("out");
    let output = run_command(&[
        "generate",
        "-i",
        notebook_path.to_str().unwrap(),
        "-o",
        output_dir.to_str().unwrap(),
        "--no-compile",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    // Extracted assets on disk.
    assert!(output_dir.join("assets/figures/figure_001.png").exists());
    assert!(output_dir.join("assets/code/cell_001.py").exists());
    assert!(output_dir.join("assets/code/cell_002.py").exists());
    assert!(output_dir.join("assets/code/cell_003.py").exists());

    let tex = fs::read_to_string(output_dir.join("presentation.tex"))
        .expect("Failed to read presentation.tex");

    // Title metadata from the heuristics.
    assert!(tex.contains(r"\title{Sales Forecasting}"));
    assert!(tex.contains(r"\subtitle{A Regional Study}"));
    assert!(tex.contains(r"\author{Ada Lovelace}"));
    assert!(tex.contains(r"\institute{University of Colorado Boulder}"));

    // Markdown body with escaping applied.
    assert!(tex.contains(r"50\% growth \& outliers"));

    // Small code cell embeds, oversized cell is referenced instead.
    assert!(tex.contains(r"\CODE{cell_001.py}"));
    assert!(tex.contains("Large File - 250 lines"));
    assert!(tex.contains(r"\texttt{code/cell_003.py}"));
    assert!(!tex.contains(r"\CODE{cell_003.py}"));

    // The extracted plot gets its own fallback-titled frame.
    assert!(tex.contains(r"\begin{frame}{Analysis Result}"));
    assert!(tex.contains("assets/figures/figure_001.png"));
    assert!(tex.contains(r"\caption{Output from Cell 2}"));
}

/// The compile step failing must not remove or invalidate generated files.
#[test]
fn test_compile_failure_keeps_outputs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let notebook_path = temp_dir.path().join("nb.ipynb");
    fs::write(
        &notebook_path,
        serde_json::json!({
            "cells": [
                {"cell_type": "markdown", "source": "# Deck\nSome body text\n"}
            ]
        })
        .to_string(),
    )
    .expect("Failed to write notebook");

    let output_dir = temp_dir.path().join("out");

    // Point the compile script at a compiler that does not exist; the run
    // must still succeed and leave the .tex behind.
    let output = Command::new("cargo")
        .arg("run")
        .arg("--")
        .args([
            "generate",
            "-i",
            notebook_path.to_str().unwrap(),
            "-o",
            output_dir.to_str().unwrap(),
        ])
        .env("NB_BEAMER_COMPILER", "definitely-not-a-latex-compiler")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_dir.join("presentation.tex").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("re-compile"),
        "Missing recompile guidance: {}",
        stderr
    );
}
