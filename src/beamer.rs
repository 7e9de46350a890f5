// ABOUTME: Beamer generation module for the nb-beamer application
// ABOUTME: Assembles notebook cells into ordered frames and populates the template

use crate::errors::{BeamerError, Result};
use crate::latex::markdown_to_latex;
use crate::metadata::TitleInfo;
use crate::notebook::{CodeCell, ExtractedImage, MarkdownCell};
use crate::themes::Theme;
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The default Beamer template shipped with the binary.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/beamer_template.tex");

/// Everything attached to one cell index in the notebook timeline.
/// Within an index the emission order is fixed: markdown, code, images.
#[derive(Default)]
struct TimelineEntry<'a> {
    markdown: Option<&'a MarkdownCell>,
    code: Option<&'a CodeCell>,
    images: Vec<&'a ExtractedImage>,
}

/// Load the Beamer template, either the embedded default or an override
/// file from disk. A missing override is fatal before any output exists.
pub fn load_template(override_path: Option<&Path>) -> Result<String> {
    match override_path {
        Some(path) => {
            if !path.exists() {
                return Err(BeamerError::PathNotFoundError(path.to_path_buf()));
            }
            info!("Using template override: {:?}", path);
            fs::read_to_string(path).map_err(BeamerError::IoError)
        }
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// Populate the template's named placeholders with theme colors, title
/// metadata, logo reference, and the assembled content body.
pub fn populate_template(
    template: &str,
    theme: &Theme,
    title_info: &TitleInfo,
    logo_file: &str,
    content: &str,
) -> String {
    let subtitle_line = if title_info.subtitle.is_empty() {
        String::new()
    } else {
        format!("\\subtitle{{{}}}", title_info.subtitle)
    };

    let replacements: &[(&str, String)] = &[
        ("{{UNIVERSITY_NAME}}", theme.name.to_string()),
        ("{{PRIMARY_R}}", theme.primary.0.to_string()),
        ("{{PRIMARY_G}}", theme.primary.1.to_string()),
        ("{{PRIMARY_B}}", theme.primary.2.to_string()),
        ("{{SECONDARY_R}}", theme.secondary.0.to_string()),
        ("{{SECONDARY_G}}", theme.secondary.1.to_string()),
        ("{{SECONDARY_B}}", theme.secondary.2.to_string()),
        ("{{TERTIARY_R}}", theme.tertiary.0.to_string()),
        ("{{TERTIARY_G}}", theme.tertiary.1.to_string()),
        ("{{TERTIARY_B}}", theme.tertiary.2.to_string()),
        ("{{QUATERNARY_R}}", theme.quaternary.0.to_string()),
        ("{{QUATERNARY_G}}", theme.quaternary.1.to_string()),
        ("{{QUATERNARY_B}}", theme.quaternary.2.to_string()),
        ("{{LOGO_FILE}}", logo_file.to_string()),
        ("{{TITLE}}", title_info.title.clone()),
        ("{{SUBTITLE}}", subtitle_line),
        ("{{AUTHOR}}", title_info.author.clone()),
        ("{{INSTITUTE}}", title_info.institute.clone()),
        (
            "{{DATE}}",
            chrono::Local::now().format("%B %d, %Y").to_string(),
        ),
        ("{{CONTENT}}", content.to_string()),
    ];

    let mut populated = template.to_string();
    for (placeholder, value) in replacements {
        populated = populated.replace(placeholder, value);
    }
    populated
}

/// Merge the three cell collections into the ordered LaTeX content body.
///
/// Indices are walked in ascending order through a single sorted map so
/// each index is visited exactly once. `code_ext` is the extension
/// (including the dot) of the saved per-cell code files.
pub fn assemble_content(
    markdown_cells: &[MarkdownCell],
    code_cells: &[CodeCell],
    images: &[ExtractedImage],
    code_ext: &str,
) -> String {
    let mut timeline: BTreeMap<usize, TimelineEntry> = BTreeMap::new();
    for cell in markdown_cells {
        timeline.entry(cell.cell_index).or_default().markdown = Some(cell);
    }
    for cell in code_cells {
        timeline.entry(cell.cell_index).or_default().code = Some(cell);
    }
    for img in images {
        timeline.entry(img.cell_index).or_default().images.push(img);
    }

    let mut content = String::new();

    for (cell_idx, entry) in &timeline {
        if let Some(md_cell) = entry.markdown {
            emit_markdown_cell(&mut content, &md_cell.content);
        }
        if let Some(code_cell) = entry.code {
            emit_code_frame(&mut content, *cell_idx, &code_cell.content, code_ext);
        }
        for img in &entry.images {
            emit_image_frame(&mut content, *cell_idx, img);
        }
    }

    content
}

/// Walk one markdown cell's lines, splitting it into sections and frames.
///
/// `#` and `##` headers become document sections, `###` headers open a
/// titled frame, `---` closes the current frame, and any other non-blank
/// line opens an untitled frame if none is open.
fn emit_markdown_cell(content: &mut String, markdown: &str) {
    let trimmed = markdown.trim();
    if trimmed.is_empty() {
        return;
    }

    let mut frame_lines: Vec<&str> = Vec::new();
    let mut frame_title = String::new();
    let mut in_frame = false;

    let close_frame = |content: &mut String, lines: &mut Vec<&str>, title: &str| {
        content.push_str(&markdown_frame(title, &lines.join("\n")));
        lines.clear();
    };

    for line in trimmed.lines() {
        let stripped = line.trim();

        if stripped.starts_with("## ") {
            if in_frame && !frame_lines.is_empty() {
                close_frame(content, &mut frame_lines, &frame_title);
            }
            let section_title = strip_header(stripped);
            content.push_str(&format!("\n\\section{{{}}}\n\n", section_title));
            in_frame = false;
            frame_title.clear();
        } else if stripped.starts_with("### ") {
            if in_frame && !frame_lines.is_empty() {
                close_frame(content, &mut frame_lines, &frame_title);
            }
            frame_title = strip_header(stripped);
            in_frame = true;
        } else if stripped.starts_with("# ") {
            if in_frame && !frame_lines.is_empty() {
                close_frame(content, &mut frame_lines, &frame_title);
            }
            let section_title = strip_header(stripped);
            content.push_str(&format!("\n\\section{{{}}}\n\n", section_title));
            in_frame = false;
            frame_title.clear();
        } else if stripped.starts_with("---") {
            // Separator closes the frame without starting a new one.
            if in_frame && !frame_lines.is_empty() {
                close_frame(content, &mut frame_lines, &frame_title);
                in_frame = false;
                frame_title.clear();
            }
        } else {
            if !in_frame && !stripped.is_empty() {
                in_frame = true;
                frame_title.clear();
            }
            if in_frame {
                frame_lines.push(line);
            }
        }
    }

    if in_frame && !frame_lines.is_empty() {
        close_frame(content, &mut frame_lines, &frame_title);
    }
}

/// Emit one code frame, sized by line count. Very large cells would blow
/// up LaTeX, so they are referenced instead of embedded; medium cells get
/// continuation slides via allowframebreaks.
fn emit_code_frame(content: &mut String, cell_idx: usize, code: &str, code_ext: &str) {
    let filename = format!("cell_{:03}{}", cell_idx, code_ext);
    let num_lines = code.matches('\n').count() + 1;

    if num_lines > 200 {
        content.push_str(&format!(
            r"
\begin{{frame}}{{Code: Cell {cell_idx} (Large File - {num_lines} lines)}}
    \textbf{{Note:}} This code cell is very large and has been excluded from the presentation.

    \vspace{{1em}}

    The complete code is available in: \texttt{{code/{filename}}}

    \vspace{{1em}}

    \begin{{block}}{{Summary}}
    This cell contains substantial implementation code that is better reviewed
    in the source file rather than displayed in presentation slides.
    \end{{block}}
\end{{frame}}

"
        ));
    } else if num_lines > 50 {
        content.push_str(&format!(
            r"
\begin{{frame}}[fragile,allowframebreaks]{{Code: Cell {cell_idx}}}
    \begin{{figure}}
        \CODE{{{filename}}}
        \caption{{Code from Cell {cell_idx}}}
    \end{{figure}}
\end{{frame}}

"
        ));
    } else {
        content.push_str(&format!(
            r"
\begin{{frame}}[fragile]{{Code: Cell {cell_idx}}}
    \begin{{figure}}
        \CODE{{{filename}}}
        \caption{{Code from Cell {cell_idx}}}
    \end{{figure}}
\end{{frame}}

"
        ));
    }
}

/// Emit one frame per extracted image, titled by its category when the
/// classifier assigned one.
fn emit_image_frame(content: &mut String, cell_idx: usize, img: &ExtractedImage) {
    let (title, caption) = match &img.category {
        Some(category) => {
            let title = title_case(&category.replace('_', " "));
            (title.clone(), title)
        }
        None => (
            "Analysis Result".to_string(),
            format!("Output from Cell {}", cell_idx),
        ),
    };

    content.push_str(&format!(
        r"
\begin{{frame}}{{{title}}}
    \begin{{figure}}
        \centering
        \includegraphics[width=0.85\textwidth,height=0.7\textheight,keepaspectratio]{{assets/figures/{filename}}}
        \caption{{{caption}}}
    \end{{figure}}
\end{{frame}}

",
        title = title,
        filename = img.filename,
        caption = caption,
    ));
}

/// Wrap a (title, body) pair into a complete frame. A blank body or a
/// body that converts to nothing yields no frame at all. An empty title
/// renders as an untitled frame.
pub fn markdown_frame(title: &str, content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let Some(latex_text) = markdown_to_latex(content) else {
        return String::new();
    };

    let mut frame = if title.is_empty() {
        "\\begin{frame}\n".to_string()
    } else {
        format!("\\begin{{frame}}{{{}}}\n", title)
    };
    frame.push_str(&latex_text);
    frame.push('\n');
    frame.push_str("\\end{frame}\n\n");
    frame
}

fn strip_header(line: &str) -> String {
    line.trim_start_matches(['#', ' ']).trim().to_string()
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
