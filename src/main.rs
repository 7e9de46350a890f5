// ABOUTME: Main entry point for the nb-beamer program.
// ABOUTME: Provides CLI interface and executes the generation pipeline.

use clap::{Args, Parser, Subcommand};
use log::warn;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Beamer presentation from a Jupyter notebook
    Generate(GenerateArgs),

    /// List the available university themes
    Themes,
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to the notebook file (.ipynb)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the presentation and its assets
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// University theme key
    #[arg(short, long)]
    theme: Option<String>,

    /// Path to a Beamer template overriding the built-in one
    #[arg(long)]
    template: Option<PathBuf>,

    /// Skip the LaTeX compile step after generation
    #[arg(long)]
    no_compile: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Generate(args)) => run_generate(args),
        Some(Commands::Themes) => {
            for theme in nb_beamer::THEMES {
                println!("  {:10} - {}", theme.key, theme.name);
            }
            Ok(())
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_generate(args: &GenerateArgs) -> nb_beamer::Result<()> {
    let config = nb_beamer::Config::from_env();

    let theme_key = args.theme.as_deref().unwrap_or(&config.default_theme);
    let theme = nb_beamer::Theme::lookup(theme_key)?;

    // Resolve the template before writing anything, so a missing override
    // aborts with no partial output.
    let template_path = args.template.as_deref().or(config.template_path.as_deref());
    let template = nb_beamer::load_template(template_path)?;

    println!("Generating Beamer presentation from {:?}", args.input);
    println!("Theme: {}", theme.name);

    let notebook = nb_beamer::Notebook::from_path(&args.input)?;
    nb_beamer::utils::validate_directory_writable(&args.output)?;

    let markdown_cells = notebook.markdown_cells();
    println!("Extracted {} markdown cells", markdown_cells.len());

    let code_cells = notebook.code_cells();
    println!("Extracted {} code cells", code_cells.len());

    let code_ext = notebook.code_extension();
    let code_dir = args.output.join("assets").join("code");
    let saved_code = nb_beamer::save_code_cells(&code_cells, &code_dir, &code_ext)?;
    println!("Saved {} code files", saved_code.len());

    let figures_dir = args.output.join("assets").join("figures");
    let classifier = nb_beamer::NoopClassifier;
    let images = notebook.extract_images(&figures_dir, &classifier)?;
    println!("Extracted {} images", images.len());
    if images.is_empty() {
        warn!("No images found in notebook, generating presentation without images");
    }

    let title_info = nb_beamer::extract_title_info(&markdown_cells);
    let logo_file = nb_beamer::ensure_logo(theme, config.logo_dir.as_deref(), &args.output)?;
    let content = nb_beamer::assemble_content(&markdown_cells, &code_cells, &images, &code_ext);
    let latex = nb_beamer::populate_template(&template, theme, &title_info, &logo_file, &content);

    let tex_path = args.output.join("presentation.tex");
    fs::write(&tex_path, latex)?;
    println!("Presentation saved to: {:?}", tex_path);

    nb_beamer::write_compile_scripts(&args.output)?;

    if args.no_compile || !config.auto_compile {
        println!("Skipping compile step");
        return Ok(());
    }

    // A failed compile leaves the generated files intact and is reported
    // as guidance rather than a process error.
    match nb_beamer::compile_presentation(&args.output, "presentation.tex", &config.compiler) {
        Ok(()) => println!("PDF compiled: {:?}", args.output.join("presentation.pdf")),
        Err(e) => {
            eprintln!("PDF compilation encountered issues: {}", e);
            eprintln!("{}", nb_beamer::compile::recompile_guidance(&args.output));
        }
    }

    Ok(())
}
