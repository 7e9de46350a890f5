// ABOUTME: Configuration module for the nb-beamer application
// ABOUTME: Provides configuration settings and environment variable handling

use std::env;
use std::path::PathBuf;

/// Global configuration for the application
pub struct Config {
    /// Default theme key when none is given on the command line
    pub default_theme: String,
    /// Optional on-disk template overriding the embedded one
    pub template_path: Option<PathBuf>,
    /// Directory searched for theme logo files
    pub logo_dir: Option<PathBuf>,
    /// LaTeX compiler binary handed to the compile scripts
    pub compiler: String,
    /// Whether to invoke the compile step after generation
    pub auto_compile: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_theme: "cu".to_string(),
            template_path: None,
            logo_dir: None,
            compiler: "pdflatex".to_string(),
            auto_compile: true,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default_theme = env::var("NB_BEAMER_THEME").unwrap_or_else(|_| "cu".to_string());
        let template_path = env::var("NB_BEAMER_TEMPLATE").ok().map(PathBuf::from);
        let logo_dir = env::var("NB_BEAMER_LOGO_DIR").ok().map(PathBuf::from);
        let compiler = env::var("NB_BEAMER_COMPILER").unwrap_or_else(|_| "pdflatex".to_string());
        let auto_compile = env::var("NB_BEAMER_AUTO_COMPILE")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(true);

        Self {
            default_theme,
            template_path,
            logo_dir,
            compiler,
            auto_compile,
        }
    }
}
