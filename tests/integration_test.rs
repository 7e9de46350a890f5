use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn write_notebook(path: &std::path::Path, json: &serde_json::Value) {
    fs::write(path, json.to_string()).expect("Failed to write notebook file");
}

#[test]
fn test_generate_command() {
    // Create temporary directory
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    // Create sample notebook file
    let notebook_path = temp_path.join("test.ipynb");
    let notebook = serde_json::json!({
        "cells": [
            {
                "cell_type": "markdown",
                "source": "# Churn Analysis\n### A Customer Study\nAuthor: Jane Doe.\nHosted by: Stanford University\n"
            },
            {
                "cell_type": "markdown",
                "source": "## Methods\n### Approach\nWe use **gradient boosting**.\n- feature engineering\n- cross validation\n"
            },
            {
                "cell_type": "code",
                "source": "import pandas as pd\ndf = pd.read_csv('churn.csv')",
                "outputs": []
            }
        ],
        "metadata": {"language_info": {"name": "python", "file_extension": ".py"}}
    });
    write_notebook(&notebook_path, &notebook);

    let output_dir = temp_path.join("presentation");

    // Run command
    let output = run_command(&[
        "generate",
        "-i",
        notebook_path.to_str().unwrap(),
        "-o",
        output_dir.to_str().unwrap(),
        "--theme",
        "stanford",
        "--no-compile",
    ]);

    // Check command executed successfully
    assert!(output.status.success(), "Command failed: {:?}", output);

    // Check the presentation and helper scripts exist
    let tex_path = output_dir.join("presentation.tex");
    assert!(tex_path.exists(), "presentation.tex was not created");
    assert!(output_dir.join("compile_presentation.sh").exists());
    assert!(output_dir.join("compile_presentation.bat").exists());
    assert!(
        output_dir.join("assets/code/cell_002.py").exists(),
        "code cell file was not created"
    );
    assert!(
        output_dir.join("assets/logos/stanford_logo.svg").exists(),
        "placeholder logo was not created"
    );

    // Verify output file content
    let tex = fs::read_to_string(&tex_path).expect("Failed to read presentation.tex");
    assert!(!tex.contains("{{"), "Unfilled template placeholder");
    assert!(tex.contains(r"\title{Churn Analysis}"), "Missing title");
    assert!(tex.contains(r"\subtitle{A Customer Study}"), "Missing subtitle");
    assert!(tex.contains(r"\author{Jane Doe}"), "Missing author");
    assert!(
        tex.contains(r"\institute{Stanford University}"),
        "Missing institute"
    );
    assert!(tex.contains(r"\section{Methods}"), "Missing section");
    assert!(
        tex.contains(r"\begin{frame}{Approach}"),
        "Missing titled frame"
    );
    assert!(tex.contains(r"\textbf{gradient boosting}"), "Missing bold span");
    assert!(tex.contains(r"\begin{itemize}"), "Missing list block");
    assert!(tex.contains(r"\CODE{cell_002.py}"), "Missing code inclusion");
}

#[test]
fn test_generate_command_unknown_theme() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let notebook_path = temp_dir.path().join("test.ipynb");
    write_notebook(&notebook_path, &serde_json::json!({"cells": []}));

    let output = run_command(&[
        "generate",
        "-i",
        notebook_path.to_str().unwrap(),
        "-o",
        temp_dir.path().join("out").to_str().unwrap(),
        "--theme",
        "hogwarts",
        "--no-compile",
    ]);

    assert!(!output.status.success(), "Unknown theme should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown theme 'hogwarts'"),
        "Missing theme error: {}",
        stderr
    );
}

#[test]
fn test_generate_command_missing_notebook() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(&[
        "generate",
        "-i",
        temp_dir.path().join("absent.ipynb").to_str().unwrap(),
        "-o",
        temp_dir.path().join("out").to_str().unwrap(),
        "--no-compile",
    ]);

    assert!(!output.status.success(), "Missing notebook should fail");

    // No partial output is attempted.
    assert!(!temp_dir.path().join("out/presentation.tex").exists());
}

#[test]
fn test_themes_command() {
    let output = run_command(&["themes"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in ["cu", "mit", "stanford", "fiu"] {
        assert!(stdout.contains(key), "Missing theme {} in: {}", key, stdout);
    }
    assert!(stdout.contains("Massachusetts Institute of Technology"));
}
