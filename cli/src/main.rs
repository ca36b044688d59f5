//! unsuite CLI - document and spreadsheet payload extraction tool

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use unsuite::render::to_json;
use unsuite::{
    detect_content_type, extract, read_payload, read_payload_from, ContentType,
    DocumentExtractor, ExtractionResult, ExtractionStats, JsonFormat, SheetExtractor,
    SheetPayload,
};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "unsuite")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract HTML and plain text from document and spreadsheet API payloads", long_about = None)]
struct Cli {
    /// Input JSON payload ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Payload content type (detected from the payload if omitted)
    #[arg(short = 't', long = "type", value_enum)]
    content_type: Option<TypeArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract to all outputs (HTML, text, JSON message)
    Convert {
        /// Input JSON payload ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Payload content type
        #[arg(short = 't', long = "type", value_enum)]
        content_type: Option<TypeArg>,
    },

    /// Extract the HTML rendering
    Html {
        /// Input JSON payload ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Payload content type
        #[arg(short = 't', long = "type", value_enum)]
        content_type: Option<TypeArg>,
    },

    /// Extract the plain text rendering
    Text {
        /// Input JSON payload ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Payload content type
        #[arg(short = 't', long = "type", value_enum)]
        content_type: Option<TypeArg>,

        /// Keep at most this many characters of text
        #[arg(long, value_name = "N", env = "UNSUITE_MAX_CHARS")]
        max_chars: Option<usize>,
    },

    /// Extract to a JSON message ({htmlContent, plainTextContent})
    Json {
        /// Input JSON payload ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Payload content type
        #[arg(short = 't', long = "type", value_enum)]
        content_type: Option<TypeArg>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output the normalized content model instead of the message
        #[arg(long)]
        model: bool,
    },

    /// Show payload information
    Info {
        /// Input JSON payload ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Payload content type
        #[arg(short = 't', long = "type", value_enum)]
        content_type: Option<TypeArg>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TypeArg {
    /// Text document (body → paragraphs → runs)
    #[value(alias = "doc")]
    Document,
    /// Spreadsheet, grid data or value ranges
    #[value(alias = "spreadsheet")]
    Sheet,
}

impl From<TypeArg> for ContentType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Document => ContentType::Document,
            TypeArg::Sheet => ContentType::Sheet,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            content_type,
        }) => cmd_convert(&input, output.as_deref(), content_type),
        Some(Commands::Html {
            input,
            output,
            content_type,
        }) => cmd_html(&input, output.as_deref(), content_type),
        Some(Commands::Text {
            input,
            output,
            content_type,
            max_chars,
        }) => cmd_text(&input, output.as_deref(), content_type, max_chars),
        Some(Commands::Json {
            input,
            output,
            content_type,
            compact,
            model,
        }) => cmd_json(&input, output.as_deref(), content_type, compact, model),
        Some(Commands::Info {
            input,
            content_type,
        }) => cmd_info(&input, content_type),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), cli.content_type)
            } else {
                println!("{}", "Usage: unsuite <FILE> [OUTPUT]".yellow());
                println!("       unsuite --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read the payload from a file, or from stdin for "-".
fn load_payload(input: &Path) -> CliResult<Value> {
    let payload = if input == Path::new("-") {
        read_payload_from(io::stdin().lock())?
    } else {
        read_payload(input)?
    };
    Ok(payload)
}

fn resolve_type(payload: &Value, content_type: Option<TypeArg>) -> CliResult<ContentType> {
    match content_type {
        Some(arg) => Ok(arg.into()),
        None => detect_content_type(payload).ok_or_else(|| {
            "Unable to detect the payload type; pass --type document or --type sheet".into()
        }),
    }
}

fn load_and_extract(
    input: &Path,
    content_type: Option<TypeArg>,
) -> CliResult<ExtractionResult> {
    let payload = load_payload(input)?;
    let content_type = resolve_type(&payload, content_type)?;
    log::debug!("extracting {} payload from {}", content_type, input.display());

    let result = extract(content_type, &payload);
    if result.is_empty() {
        eprintln!(
            "{}",
            format!(
                "Unable to extract {} content. Please ensure the payload is complete.",
                content_type
            )
            .as_str()
            .yellow()
        );
    }
    Ok(result)
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(input: &Path, output: Option<&Path>, content_type: Option<TypeArg>) -> CliResult {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = if input == Path::new("-") {
            "stdin".into()
        } else {
            input.file_stem().unwrap_or_default().to_string_lossy()
        };
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Extracting content...");
    let result = load_and_extract(input, content_type)?;
    pb.inc(1);

    pb.set_message("Writing HTML...");
    fs::write(output_dir.join("extract.html"), &result.html_content)?;
    pb.inc(1);

    pb.set_message("Writing text...");
    fs::write(output_dir.join("extract.txt"), &result.plain_text_content)?;

    let json = to_json(&result, JsonFormat::Pretty)?;
    fs::write(output_dir.join("result.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} extract.html", "├─".dimmed());
    println!("  {} extract.txt", "├─".dimmed());
    println!("  {} result.json", "└─".dimmed());

    Ok(())
}

fn cmd_html(input: &Path, output: Option<&Path>, content_type: Option<TypeArg>) -> CliResult {
    let result = load_and_extract(input, content_type)?;
    write_output(output, &result.html_content)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    content_type: Option<TypeArg>,
    max_chars: Option<usize>,
) -> CliResult {
    let mut result = load_and_extract(input, content_type)?;
    if let Some(max_chars) = max_chars {
        result = result.with_text_budget(max_chars);
    }
    write_output(output, &result.plain_text_content)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    content_type: Option<TypeArg>,
    compact: bool,
    model: bool,
) -> CliResult {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = if model {
        let payload = load_payload(input)?;
        match resolve_type(&payload, content_type)? {
            ContentType::Document => to_json(&DocumentExtractor::new().document(&payload)?, format)?,
            ContentType::Sheet => to_json(&SheetExtractor::new().sheet(&payload)?, format)?,
        }
    } else {
        let result = load_and_extract(input, content_type)?;
        to_json(&result, format)?
    };

    write_output(output, &json)
}

fn cmd_info(input: &Path, content_type: Option<TypeArg>) -> CliResult {
    let payload = load_payload(input)?;
    let content_type = resolve_type(&payload, content_type)?;

    println!("{}", "Payload Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Type".bold(), content_type);

    let stats = match content_type {
        ContentType::Document => {
            let doc = DocumentExtractor::new().document(&payload)?;
            if let Some(ref title) = doc.title {
                println!("{}: {}", "Title".bold(), title);
            }
            ExtractionStats::for_document(&doc)
        }
        ContentType::Sheet => {
            let sheet = SheetExtractor::new().sheet(&payload)?;
            if let SheetPayload::Grid(ref grid) = sheet {
                if let Some(ref title) = grid.title {
                    println!("{}: {}", "Title".bold(), title);
                }
            }
            ExtractionStats::for_sheet(&sheet)
        }
    };

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    match content_type {
        ContentType::Document => {
            println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
            println!("{}: {}", "Empty paragraphs".bold(), stats.empty_paragraph_count);
            println!("{}: {}", "Text runs".bold(), stats.run_count);
            println!("{}: {}", "Other blocks".bold(), stats.unsupported_block_count);
        }
        ContentType::Sheet => {
            println!("{}: {}", "Sheets".bold(), stats.sheet_count);
            println!("{}: {}", "Rows".bold(), stats.row_count);
            println!("{}: {}", "Cells".bold(), stats.cell_count);
        }
    }
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unsuite".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document and spreadsheet payload extraction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unsuite".dimmed());
    println!("License: MIT");
}
