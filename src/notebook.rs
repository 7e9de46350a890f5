// ABOUTME: Notebook parsing module for the nb-beamer application
// ABOUTME: Extracts markdown cells, code cells, and embedded images from ipynb JSON

use crate::errors::{BeamerError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A markdown cell extracted from the notebook, keyed by its position.
#[derive(Debug, Clone)]
pub struct MarkdownCell {
    pub cell_index: usize,
    pub content: String,
}

/// A non-empty code cell extracted from the notebook.
#[derive(Debug, Clone)]
pub struct CodeCell {
    pub cell_index: usize,
    pub content: String,
}

/// An image payload decoded from a cell output and written to disk.
#[derive(Debug, Clone)]
pub struct ExtractedImage {
    pub filename: String,
    pub filepath: PathBuf,
    pub cell_index: usize,
    pub category: Option<String>,
}

/// Classification hook for extracted plots. The default implementation
/// never assigns a category, so images get generic sequential names.
pub trait PlotClassifier {
    fn classify(&self, cell_source: &str, counter: usize) -> Option<String>;
}

/// Classifier that always returns `None`, keeping the tool generic.
pub struct NoopClassifier;

impl PlotClassifier for NoopClassifier {
    fn classify(&self, _cell_source: &str, _counter: usize) -> Option<String> {
        None
    }
}

/// Notebook `source` fields may be a single string or a list of lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SourceText {
    Text(String),
    Lines(Vec<String>),
}

impl SourceText {
    fn joined(&self) -> String {
        match self {
            SourceText::Text(s) => s.clone(),
            SourceText::Lines(lines) => lines.concat(),
        }
    }
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::Text(String::new())
    }
}

#[derive(Debug, Deserialize)]
struct RawOutput {
    #[serde(default)]
    output_type: String,
    #[serde(default)]
    data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    #[serde(default)]
    cell_type: String,
    #[serde(default)]
    source: SourceText,
    #[serde(default)]
    outputs: Vec<RawOutput>,
}

#[derive(Debug, Default, Deserialize)]
struct LanguageInfo {
    #[serde(default)]
    file_extension: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NotebookMetadata {
    #[serde(default)]
    language_info: Option<LanguageInfo>,
}

/// A parsed Jupyter notebook, read fully into memory.
#[derive(Debug, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    cells: Vec<RawCell>,
    #[serde(default)]
    metadata: NotebookMetadata,
}

impl Notebook {
    /// Read and parse a notebook file.
    pub fn from_path(path: &Path) -> Result<Self> {
        crate::utils::validate_file_exists(path)?;
        info!("Reading notebook: {:?}", path);
        let content = fs::read_to_string(path).map_err(BeamerError::IoError)?;
        let notebook: Notebook = serde_json::from_str(&content)?;
        Ok(notebook)
    }

    /// Extract all markdown cells in original order.
    pub fn markdown_cells(&self) -> Vec<MarkdownCell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.cell_type == "markdown")
            .map(|(cell_index, cell)| {
                debug!("Extracted markdown cell {}", cell_index);
                MarkdownCell {
                    cell_index,
                    content: cell.source.joined(),
                }
            })
            .collect()
    }

    /// Extract all non-empty code cells in original order.
    pub fn code_cells(&self) -> Vec<CodeCell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.cell_type == "code")
            .filter_map(|(cell_index, cell)| {
                let content = cell.source.joined();
                if content.trim().is_empty() {
                    return None;
                }
                debug!("Extracted code cell {}", cell_index);
                Some(CodeCell {
                    cell_index,
                    content,
                })
            })
            .collect()
    }

    /// File extension for saved code cells, from the notebook's language
    /// metadata. Falls back to Python.
    pub fn code_extension(&self) -> String {
        self.metadata
            .language_info
            .as_ref()
            .and_then(|info| info.file_extension.clone())
            .unwrap_or_else(|| ".py".to_string())
    }

    /// Decode every image output and write it into `output_dir`.
    ///
    /// Images are named by a global 1-based counter, prefixed with the
    /// classifier's category when one is assigned. Payloads that are not
    /// valid base64 are skipped with a warning and do not consume a
    /// counter slot; payloads that decode but are not a recognizable
    /// image are still written, with a warning.
    pub fn extract_images(
        &self,
        output_dir: &Path,
        classifier: &dyn PlotClassifier,
    ) -> Result<Vec<ExtractedImage>> {
        fs::create_dir_all(output_dir).map_err(BeamerError::IoError)?;

        let mut extracted = Vec::new();
        let mut image_counter = 0usize;

        for (cell_index, cell) in self.cells.iter().enumerate() {
            if cell.cell_type != "code" {
                continue;
            }
            let cell_source = cell.source.joined();

            for output in &cell.outputs {
                if output.output_type != "display_data" && output.output_type != "execute_result" {
                    continue;
                }

                for (mime, ext) in [("image/png", "png"), ("image/jpeg", "jpg")] {
                    let Some(value) = output.data.get(mime) else {
                        continue;
                    };
                    let Some(payload) = image_payload(value) else {
                        warn!(
                            "Cell {} has a {} output with an unexpected payload shape, skipping",
                            cell_index, mime
                        );
                        continue;
                    };

                    let bytes = match BASE64.decode(payload.replace('\n', "")) {
                        Ok(bytes) => bytes,
                        Err(err) => {
                            warn!(
                                "Cell {} has a {} output that is not valid base64 ({}), skipping",
                                cell_index, mime, err
                            );
                            continue;
                        }
                    };
                    image_counter += 1;

                    if image::guess_format(&bytes).is_err() {
                        warn!(
                            "Image {} from cell {} is not a recognizable {} payload",
                            image_counter, cell_index, mime
                        );
                    }

                    let category = classifier.classify(&cell_source, image_counter);
                    let filename = match &category {
                        Some(cat) => format!("{}_{:03}.{}", cat, image_counter, ext),
                        None => format!("figure_{:03}.{}", image_counter, ext),
                    };
                    let filepath = output_dir.join(&filename);
                    fs::write(&filepath, &bytes).map_err(BeamerError::IoError)?;
                    info!("Extracted: {}", filename);

                    extracted.push(ExtractedImage {
                        filename,
                        filepath,
                        cell_index,
                        category,
                    });
                }
            }
        }

        Ok(extracted)
    }
}

/// Image data values are either one base64 string or a list of chunks.
fn image_payload(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(parts) => {
            let mut joined = String::new();
            for part in parts {
                joined.push_str(part.as_str()?);
            }
            Some(joined)
        }
        _ => None,
    }
}
