//! `strictjson` CLI — validate, format, and minify JSON files from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate JSON from stdin
//! echo '{"name":"Alice","age":30}' | strictjson check
//!
//! # Validate, tolerating repeated object keys (last one wins)
//! strictjson check --allow-duplicate-keys -i data.json
//!
//! # Pretty-print (stdin → stdout)
//! strictjson fmt -i data.json
//!
//! # Pretty-print with a four-space indent, file to file
//! strictjson fmt --indent 4 -i data.json -o formatted.json
//!
//! # Minify
//! strictjson minify -i formatted.json -o data.json
//!
//! # Show size statistics
//! strictjson stats -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use strictjson_core::{Mode, ParseOptions, Renderer};

#[derive(Parser)]
#[command(name = "strictjson", version, about = "Strict JSON checker, formatter, and minifier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate JSON and report the first error with its byte offset
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Accept repeated object keys; the last occurrence wins
        #[arg(long)]
        allow_duplicate_keys: bool,
    },
    /// Pretty-print JSON
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Strip all inter-token whitespace from JSON
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show size statistics (input vs. minified bytes)
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            allow_duplicate_keys,
        } => {
            let text = read_input(input.as_deref())?;
            let options = ParseOptions {
                allow_duplicate_keys,
                ..ParseOptions::default()
            };
            strictjson_core::parse_with_options(&text, options).context("Invalid JSON")?;
            println!("OK");
        }
        Commands::Fmt {
            input,
            output,
            indent,
        } => {
            let text = read_input(input.as_deref())?;
            let value = strictjson_core::parse(&text).context("Invalid JSON")?;
            let renderer = Renderer::with_indent_width(indent);
            let mut pretty = renderer.render(&value, Mode::Pretty);
            pretty.push('\n');
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Minify { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = strictjson_core::parse(&text).context("Invalid JSON")?;
            let minified = strictjson_core::render(&value, Mode::Minified);
            write_output(output.as_deref(), &minified)?;
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let value = strictjson_core::parse(&text).context("Invalid JSON")?;
            let minified = strictjson_core::render(&value, Mode::Minified);
            let input_bytes = text.len();
            let minified_bytes = minified.len();
            let ratio = if input_bytes > 0 {
                (1.0 - (minified_bytes as f64 / input_bytes as f64)) * 100.0
            } else {
                0.0
            };
            println!("Input size:     {} bytes", input_bytes);
            println!("Minified size:  {} bytes", minified_bytes);
            println!("Reduction:      {:.1}%", ratio);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
