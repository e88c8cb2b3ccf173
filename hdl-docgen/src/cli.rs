use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{parse_modules, render_documentation};

pub const DEFAULT_OUTPUT_DIR: &str = "output/verilog_docs";
pub const DEFAULT_OUTPUT_NAME: &str = "verilog_design.md";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self, String> {
        match name.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format: {} (expected markdown or json)",
                other
            )),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsedArgs {
    pub inputs: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub to_stdout: bool,
    pub verbose: bool,
}

pub fn parse_docgen_args(
    inputs: Vec<PathBuf>,
    output_dir: PathBuf,
    output_name: String,
    format: &str,
    to_stdout: bool,
    verbose: bool,
) -> Result<ParsedArgs, String> {
    if inputs.is_empty() {
        return Err("No input files specified".to_string());
    }

    if output_name.trim().is_empty() {
        return Err("Empty output name".to_string());
    }
    if output_name.contains('/') || output_name.contains('\\') {
        return Err(format!(
            "Output name '{}' must be a file name, use --output-dir for the directory",
            output_name
        ));
    }

    let format = OutputFormat::parse(format)?;

    Ok(ParsedArgs {
        inputs,
        output_path: output_dir.join(output_name),
        format,
        to_stdout,
        verbose,
    })
}

/// Read every input, run the pipeline, and return the rendered document.
///
/// Inputs are joined with a newline in the order given. Nothing is
/// written here, so a source without modules leaves no output behind.
pub fn generate(args: &ParsedArgs) -> Result<String> {
    let mut sources = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        debug!("reading {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        sources.push(content);
    }

    let modules = parse_modules(&sources.join("\n"))?;

    match args.format {
        OutputFormat::Markdown => Ok(render_documentation(&modules)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&modules)
                .context("Failed to serialize module model")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write `document` to the configured output path, creating its directory.
pub fn write_document(output_path: &Path, document: &str) -> Result<()> {
    if let Some(dir) = output_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    fs::write(output_path, document)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    info!("wrote {}", output_path.display());

    Ok(())
}

pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hdl_docgen=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hdl_docgen=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
