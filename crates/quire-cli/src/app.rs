//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use quire_core::settings::CONFIG_FILE;
use quire_core::upload::mime_from_extension;
use quire_core::{slugify, ArticleDraft, ArticleSources, Converter, Settings};

/// Output format for article drafts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output, field names as stored with the article
    Json,
}

/// Which conversion to apply to a single document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Article,
    Citations,
    Preview,
}

#[derive(Parser)]
#[command(name = "quire")]
#[command(author, version, about = "Word documents in, magazine articles out", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./quire.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log conversion steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an article body: HTML with linked footnote markers
    Article {
        /// Input .docx file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a citations document into citation blocks
    Citations {
        /// Input .docx file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a preview document into a single line of plain text
    Preview {
        /// Input .docx file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the filename derived from an article title
    Slug {
        /// Article title
        title: String,
    },

    /// Convert every document of an article
    Draft {
        /// Article title
        #[arg(long)]
        title: String,

        /// Article body .docx file
        #[arg(long)]
        content: PathBuf,

        /// Preview .docx file
        #[arg(long)]
        preview: PathBuf,

        /// Citations .docx file
        #[arg(long)]
        citations: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Article { input, output } => {
            convert_command(DocumentKind::Article, &input, output.as_deref(), &settings)?;
        }
        Commands::Citations { input, output } => {
            convert_command(DocumentKind::Citations, &input, output.as_deref(), &settings)?;
        }
        Commands::Preview { input, output } => {
            convert_command(DocumentKind::Preview, &input, output.as_deref(), &settings)?;
        }
        Commands::Slug { title } => {
            slug_command(&title)?;
        }
        Commands::Draft {
            title,
            content,
            preview,
            citations,
            format,
        } => {
            draft_command(
                &title,
                &content,
                &preview,
                citations.as_deref(),
                format,
                &settings,
            )?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays the converted output
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load settings from an explicit path, or from `quire.toml` when present
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Settings::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => Settings::load_or_default(Path::new(CONFIG_FILE))
            .with_context(|| format!("Failed to load config: {}", CONFIG_FILE)),
    }
}

/// Read an uploaded document, applying the upload rules
///
/// The MIME type is derived from the file extension.
pub fn read_document(path: &Path, settings: &Settings) -> Result<Vec<u8>> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Input file not found: {}", path.display()))?;

    let mime = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_from_extension)
        .unwrap_or("application/octet-stream");

    settings
        .upload
        .validate_document(mime, metadata.len())
        .with_context(|| format!("Rejected upload: {}", path.display()))?;

    debug!("Reading {} ({} bytes, {})", path.display(), metadata.len(), mime);
    fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))
}

/// Execute the article, citations or preview command
pub fn convert_command(
    kind: DocumentKind,
    input: &Path,
    output: Option<&Path>,
    settings: &Settings,
) -> Result<()> {
    let buffer = read_document(input, settings)?;
    let converter = Converter::new().with_highlight(settings.highlight.clone());

    let converted = match kind {
        DocumentKind::Article => converter.article_body(&buffer),
        DocumentKind::Citations => converter.citations(&buffer),
        DocumentKind::Preview => converter.preview(&buffer),
    }
    .with_context(|| format!("Failed to convert: {}", input.display()))?;

    match output {
        Some(path) => {
            fs::write(path, &converted)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            eprintln!("Created: {}", path.display());
        }
        None => println!("{}", converted),
    }

    Ok(())
}

/// Execute the slug command
pub fn slug_command(title: &str) -> Result<()> {
    println!("{}", slugify(title));
    Ok(())
}

/// Convert every document of an article into a draft
pub fn build_draft(
    title: &str,
    content: &Path,
    preview: &Path,
    citations: Option<&Path>,
    settings: &Settings,
) -> Result<ArticleDraft> {
    let content = read_document(content, settings)?;
    let preview = read_document(preview, settings)?;
    let citations = match citations {
        Some(path) => read_citations(path, settings)?,
        None => None,
    };

    let sources = ArticleSources {
        title,
        content: &content,
        citations: citations.as_deref(),
        preview: &preview,
    };

    Converter::new()
        .with_highlight(settings.highlight.clone())
        .draft(&sources)
        .with_context(|| format!("Failed to prepare article: {}", title))
}

/// Read an optional citations upload; a zero-length file means no citations
fn read_citations(path: &Path, settings: &Settings) -> Result<Option<Vec<u8>>> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Input file not found: {}", path.display()))?;
    if metadata.len() == 0 {
        debug!("Citations file {} is empty, skipping", path.display());
        return Ok(None);
    }
    read_document(path, settings).map(Some)
}

/// Format a draft for printing
pub fn render_draft(draft: &ArticleDraft, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(draft).context("Failed to serialize draft to JSON")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("Title:     {}\n", draft.title));
            out.push_str(&format!("File name: {}\n", draft.file_name));
            out.push_str(&format!("Preview:   {}\n", draft.preview_text));
            out.push_str("\nContent:\n");
            out.push_str(&draft.content);
            out.push('\n');
            if !draft.citations.is_empty() {
                out.push_str("\nCitations:\n");
                out.push_str(&draft.citations);
            }
            Ok(out)
        }
    }
}

/// Execute the draft command
pub fn draft_command(
    title: &str,
    content: &Path,
    preview: &Path,
    citations: Option<&Path>,
    format: OutputFormat,
    settings: &Settings,
) -> Result<()> {
    let draft = build_draft(title, content, preview, citations, settings)?;
    print!("{}", render_draft(&draft, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
