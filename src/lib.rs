// ABOUTME: Library module for the nb-beamer program.
// ABOUTME: Contains core functionality for turning notebooks into Beamer presentations.

// Reexport modules
pub mod assets;
pub mod beamer;
pub mod compile;
pub mod config;
pub mod errors;
pub mod latex;
pub mod metadata;
pub mod notebook;
pub mod themes;
pub mod utils;

// Reexport common types and functions
pub use assets::{ensure_logo, save_code_cells, write_compile_scripts};
pub use beamer::{assemble_content, load_template, markdown_frame, populate_template};
pub use compile::compile_presentation;
pub use config::Config;
pub use errors::{BeamerError, Result};
pub use latex::markdown_to_latex;
pub use metadata::{TitleInfo, extract_title_info};
pub use notebook::{
    CodeCell, ExtractedImage, MarkdownCell, NoopClassifier, Notebook, PlotClassifier,
};
pub use themes::{THEMES, Theme};
