//! vowsite CLI - render and inspect content documents

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use vowsite::{parse_content_str, render, ContentDocument, Theme};

#[derive(Parser)]
#[command(name = "vowsite")]
#[command(version)]
#[command(about = "Render and inspect block-based content documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a content document to HTML
    Html {
        /// Input content JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit theme classes from the output
        #[arg(long)]
        unstyled: bool,
    },

    /// Render a content document to plain text
    Text {
        /// Input content JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Re-emit a content document as normalized JSON
    Json {
        /// Input content JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show block counts and document details
    Info {
        /// Input content JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Check that a file parses as a content document
    Validate {
        /// Input content JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Html {
            input,
            output,
            unstyled,
        } => cmd_html(&input, output.as_deref(), unstyled),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Info { input } => cmd_info(&input),
        Commands::Validate { input } => cmd_validate(&input),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn load_document(input: &std::path::Path) -> Result<ContentDocument, String> {
    let raw = fs::read_to_string(input)
        .map_err(|err| format!("cannot read {}: {}", input.display(), err))?;
    parse_content_str(&raw).ok_or_else(|| {
        log::warn!("{} did not parse as a content document", input.display());
        format!(
            "{} is not a valid content document (no content available)",
            input.display()
        )
    })
}

fn emit(output: Option<&std::path::Path>, content: &str) -> Result<(), String> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .map_err(|err| format!("cannot write {}: {}", path.display(), err))?;
            eprintln!("{} {}", "wrote".green(), path.display());
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn cmd_html(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    unstyled: bool,
) -> Result<bool, String> {
    let doc = load_document(input)?;
    let theme = if unstyled {
        Theme::unstyled()
    } else {
        Theme::new()
    };
    emit(output, &render::to_html(&doc, &theme))?;
    Ok(true)
}

fn cmd_text(input: &std::path::Path, output: Option<&std::path::Path>) -> Result<bool, String> {
    let doc = load_document(input)?;
    emit(output, &render::to_text(&doc))?;
    Ok(true)
}

fn cmd_json(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    compact: bool,
) -> Result<bool, String> {
    let doc = load_document(input)?;
    let json = if compact {
        serde_json::to_string(&doc)
    } else {
        serde_json::to_string_pretty(&doc)
    }
    .map_err(|err| format!("cannot serialize document: {}", err))?;
    emit(output, &json)?;
    Ok(true)
}

fn cmd_info(input: &std::path::Path) -> Result<bool, String> {
    let doc = load_document(input)?;

    println!("{}", "Document".bold());
    println!("  blocks: {}", doc.len());
    if let Some(version) = &doc.version {
        println!("  editor version: {}", version);
    }
    if let Some(url) = doc.first_image_url() {
        println!("  lead image: {}", url);
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for block in &doc.blocks {
        *counts.entry(block.tag.as_str()).or_insert(0) += 1;
    }
    if !counts.is_empty() {
        println!("{}", "Blocks by type".bold());
        for (tag, count) in counts {
            let line = format!("  {:<12} {}", tag, count);
            if block_is_recognized(tag) {
                println!("{}", line);
            } else {
                println!("{} {}", line.yellow(), "(unrecognized, will be skipped)".yellow());
            }
        }
    }
    Ok(true)
}

fn cmd_validate(input: &std::path::Path) -> Result<bool, String> {
    let raw = fs::read_to_string(input)
        .map_err(|err| format!("cannot read {}: {}", input.display(), err))?;
    match parse_content_str(&raw) {
        Some(doc) => {
            println!(
                "{} {} ({} blocks)",
                "valid".green().bold(),
                input.display(),
                doc.len()
            );
            Ok(true)
        }
        None => {
            log::warn!("{} did not parse as a content document", input.display());
            println!("{} {}", "invalid".red().bold(), input.display());
            Ok(false)
        }
    }
}

fn block_is_recognized(tag: &str) -> bool {
    matches!(
        tag,
        "paragraph" | "header" | "list" | "image" | "gallery" | "quote" | "code" | "table" | "embed"
    )
}
