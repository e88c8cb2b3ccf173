use clap::Parser;
use hdl_docgen::cli::{self, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_NAME};
use hdl_docgen::parse_docgen_args;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "hdl-docgen")]
#[command(about = "Generate Markdown documentation and a module diagram from Verilog source.")]
#[command(version)]
struct Cli {
    /// Verilog source file (repeat to document several files together)
    #[arg(long = "input", short = 'i', required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for generated documentation
    #[arg(long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// File name of the generated document
    #[arg(long = "output-name", default_value = DEFAULT_OUTPUT_NAME)]
    output_name: String,

    /// Output format: markdown or json
    #[arg(long = "format", default_value = "markdown")]
    format: String,

    /// Print the document instead of writing it
    #[arg(long = "stdout")]
    stdout: bool,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let cli_args = Cli::parse();

    let parsed_args = match parse_docgen_args(
        cli_args.inputs,
        cli_args.output_dir,
        cli_args.output_name,
        &cli_args.format,
        cli_args.stdout,
        cli_args.verbose,
    ) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            eprintln!("Usage: hdl-docgen --input <FILE>... [--output-dir <DIR>] [--output-name <NAME>] [--format markdown|json] [--stdout]");
            process::exit(1);
        }
    };

    cli::init_logger(parsed_args.verbose);
    tracing::debug!("arguments: {:?}", parsed_args);

    let document = match cli::generate(&parsed_args) {
        Ok(document) => document,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    };

    if parsed_args.to_stdout {
        print!("{}", document);
        return;
    }

    if let Err(err) = cli::write_document(&parsed_args.output_path, &document) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }

    println!("{}", parsed_args.output_path.display());
}
