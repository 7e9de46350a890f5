// ABOUTME: Markdown-to-LaTeX translation module for the nb-beamer application
// ABOUTME: Converts lightweight markdown blocks into Beamer-ready LaTeX text

use regex::Regex;
use std::sync::LazyLock;

// Sentinel markers protect already-converted spans from the escaping pass.
// They come from the Unicode private use area, so they cannot collide with
// markdown syntax or with any character in the escaped set.
const H5_OPEN: char = '\u{E000}';
const H5_CLOSE: char = '\u{E001}';
const H4_OPEN: char = '\u{E002}';
const H4_CLOSE: char = '\u{E003}';
const BOLD_OPEN: char = '\u{E004}';
const BOLD_CLOSE: char = '\u{E005}';
const ITALIC_OPEN: char = '\u{E006}';
const ITALIC_CLOSE: char = '\u{E007}';
const CODE_OPEN: char = '\u{E008}';
const CODE_CLOSE: char = '\u{E009}';
const LINK_OPEN: char = '\u{E00A}';
const LINK_MID: char = '\u{E00B}';
const LINK_CLOSE: char = '\u{E00C}';

static H5_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#####\s+(.*?)$").unwrap());
static H4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^####\s+(.*?)$").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

// Late header pass: headers that survive the earlier steps (e.g. nested in
// content) are still normalized to sectioning commands.
static LATE_H4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^####\s+(.*?)$").unwrap());
static LATE_H3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^###\s+(.*?)$").unwrap());
static LATE_H2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s+(.*?)$").unwrap());
static LATE_H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.*?)$").unwrap());

/// LaTeX escapes for the special output characters. The sentinel markers
/// are disjoint from this set, so escaping never corrupts protected spans.
const ESCAPES: &[(char, &str)] = &[
    ('&', r"\&"),
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
];

/// Convert a markdown text block to LaTeX.
///
/// Returns `None` when the input is blank after trimming. Malformed
/// markdown is passed through degraded rather than rejected; this function
/// never fails.
pub fn markdown_to_latex(markdown_text: &str) -> Option<String> {
    let text = markdown_text.trim();
    if text.is_empty() {
        return None;
    }

    // Step 1: tag the two lowest heading levels before anything else.
    // Sub-headers render as styled text rather than true section commands.
    let text = H5_RE.replace_all(text, format!("{}${{1}}{}", H5_OPEN, H5_CLOSE));
    let text = H4_RE.replace_all(&text, format!("{}${{1}}{}", H4_OPEN, H4_CLOSE));

    // Step 2: protect inline spans before escaping.
    let text = BOLD_RE.replace_all(&text, format!("{}${{1}}{}", BOLD_OPEN, BOLD_CLOSE));
    let text = ITALIC_RE.replace_all(&text, format!("{}${{1}}{}", ITALIC_OPEN, ITALIC_CLOSE));
    let text = CODE_RE.replace_all(&text, format!("{}${{1}}{}", CODE_OPEN, CODE_CLOSE));
    let text = LINK_RE.replace_all(
        &text,
        format!("{}${{2}}{}${{1}}{}", LINK_OPEN, LINK_MID, LINK_CLOSE),
    );

    // Step 3: escape special LaTeX characters.
    let mut text = text.into_owned();
    for (ch, replacement) in ESCAPES {
        text = text.replace(*ch, replacement);
    }

    // Step 4: expand sentinels to LaTeX commands.
    let text = text
        .replace(H5_OPEN, r"\textit{")
        .replace(H5_CLOSE, "}\\\\")
        .replace(H4_OPEN, r"\textbf{")
        .replace(H4_CLOSE, "}\\\\")
        .replace(BOLD_OPEN, r"\textbf{")
        .replace(BOLD_CLOSE, "}")
        .replace(ITALIC_OPEN, r"\textit{")
        .replace(ITALIC_CLOSE, "}")
        .replace(CODE_OPEN, r"\texttt{")
        .replace(CODE_CLOSE, "}")
        .replace(LINK_OPEN, r"\href{")
        .replace(LINK_MID, "}{")
        .replace(LINK_CLOSE, "}");

    // Step 5: normalize any headers that survived to this point.
    let text = LATE_H4_RE.replace_all(&text, r"\textbf{${1}}");
    let text = LATE_H3_RE.replace_all(&text, r"\subsection{${1}}");
    let text = LATE_H2_RE.replace_all(&text, r"\section{${1}}");
    let text = LATE_H1_RE.replace_all(&text, r"\section{${1}}");

    // Step 6: line-oriented list conversion.
    Some(convert_lists(&text))
}

/// Convert `- ` / `* ` prefixed lines into itemize blocks.
///
/// A non-list, non-blank line closes an open list before being appended;
/// blank lines are dropped. Any list left open at end of block is closed.
fn convert_lists(text: &str) -> String {
    let mut result_lines: Vec<String> = Vec::new();
    let mut in_list = false;

    for line in text.lines() {
        let stripped = line.trim();

        if stripped.starts_with("- ") || stripped.starts_with("* ") {
            if !in_list {
                result_lines.push(r"\begin{itemize}".to_string());
                in_list = true;
            }
            let content = stripped[2..].trim();
            result_lines.push(format!("    \\item {}", content));
        } else {
            if in_list {
                result_lines.push(r"\end{itemize}".to_string());
                in_list = false;
            }
            if !stripped.is_empty() {
                result_lines.push(line.to_string());
            }
        }
    }

    if in_list {
        result_lines.push(r"\end{itemize}".to_string());
    }

    result_lines.join("\n")
}
