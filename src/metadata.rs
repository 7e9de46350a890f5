// ABOUTME: Title metadata extraction module for the nb-beamer application
// ABOUTME: Heuristic scan of markdown cells for title, subtitle, author, institute

use crate::notebook::MarkdownCell;
use regex::Regex;
use std::sync::LazyLock;

/// Title-page metadata with hardcoded fallbacks. Extraction never fails,
/// it only degrades to these defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub institute: String,
}

impl Default for TitleInfo {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            subtitle: String::new(),
            author: "Author".to_string(),
            institute: "Institute".to_string(),
        }
    }
}

/// Generic section headers that must not be mistaken for a subtitle.
const SUBTITLE_EXCLUSIONS: &[&str] = &[
    "problem statement",
    "objectives",
    "introduction",
    "the dataset",
    "eda",
    "models",
    "deliverables",
];

// Author patterns, tried in priority order. First match anywhere in the
// document wins.
static AUTHOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"I,?\s+\*\*([^*]+)\*\*,",          // "I, **Name**,"
        r"[Aa]uthor:?\s+([A-Z][a-zA-Z\s]+)", // "Author: Name"
        r"[Bb]y:?\s+([A-Z][a-zA-Z\s]+)",     // "By: Name"
        r"[Nn]ame:?\s+([A-Z][a-zA-Z\s]+)",   // "Name: Full Name"
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Institute patterns, also tried in priority order.
static INSTITUTE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(University of Colorado Boulder)",
        r"(Colorado Boulder)",
        r"(University of [A-Z][a-zA-Z\s]+)",
        r"([A-Z][a-zA-Z\s]+ University)",
        r"([A-Z][a-zA-Z\s]+ College)",
        r"([A-Z][a-zA-Z\s]+ Institute)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Extract title-page metadata from the notebook's markdown cells.
///
/// Title and subtitle are taken from the first markdown cell only; author
/// and institute are searched across the whole concatenated document.
pub fn extract_title_info(markdown_cells: &[MarkdownCell]) -> TitleInfo {
    let mut info = TitleInfo::default();

    let Some(first_cell) = markdown_cells.first() else {
        return info;
    };

    let all_content = markdown_cells
        .iter()
        .map(|cell| cell.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let mut title_found = false;
    for line in first_cell.content.lines() {
        let line_stripped = line.trim();

        // H1 or H2 becomes the title; first occurrence wins.
        if line_stripped.starts_with("## ") && !title_found {
            info.title = strip_header(line_stripped);
            title_found = true;
        } else if line_stripped.starts_with("# ") && !title_found {
            info.title = strip_header(line_stripped);
            title_found = true;
        } else if line_stripped.starts_with("### ") && title_found && info.subtitle.is_empty() {
            let potential_subtitle = strip_header(line_stripped);
            if !SUBTITLE_EXCLUSIONS.contains(&potential_subtitle.to_lowercase().as_str()) {
                info.subtitle = potential_subtitle;
            }
        }
    }

    for pattern in AUTHOR_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(&all_content) {
            info.author = captures[1].trim().to_string();
            break;
        }
    }

    for pattern in INSTITUTE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(&all_content) {
            let mut institute = captures[1].trim().to_string();
            // A bare campus match gets the full university name.
            if institute == "Colorado Boulder" {
                institute = "University of Colorado Boulder".to_string();
            }
            info.institute = institute;
            break;
        }
    }

    info
}

fn strip_header(line: &str) -> String {
    line.trim_start_matches(['#', ' ']).trim().to_string()
}
