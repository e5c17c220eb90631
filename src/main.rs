
//! Command line interface: `comp40 compress [FILE]` or `comp40 decompress [FILE]`.
//! Reads from standard input if no file is given, and always writes to standard output.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comp40::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "comp40", version, about = "Lossy image compression to a quarter of the raw size")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Convert all blocks on the current thread
    #[arg(long, global = true, default_value_t = false)]
    sequential: bool,

    /// Reject compressed files with unexpected bytes after the last codeword
    #[arg(long, global = true, default_value_t = false)]
    pedantic: bool,

    /// Log each conversion stage to standard error
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a portable pixmap and write a compressed image
    Compress {
        /// Input pixmap, `-` for standard input
        file: Option<PathBuf>,
    },

    /// Read a compressed image and write a binary portable pixmap
    Decompress {
        /// Input compressed image, `-` for standard input
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if args.verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut options = Options::default();
    if args.sequential { options = options.non_parallel(); }
    if args.pedantic { options = options.pedantic(); }

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    match &args.command {
        Command::Compress { file } => {
            let input = open(file.as_ref())?;
            comp40::pipeline::compress_to(input, output, options)
                .with_context(|| format!("could not compress {}", describe(file.as_ref())))?;
        },

        Command::Decompress { file } => {
            let input = open(file.as_ref())?;
            comp40::pipeline::decompress_from(input, output, options)
                .with_context(|| format!("could not decompress {}", describe(file.as_ref())))?;
        },
    }

    Ok(())
}

fn open(path: Option<&PathBuf>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?;

            Ok(Box::new(BufReader::new(file)))
        },

        _ => Ok(Box::new(io::stdin())),
    }
}

fn describe(path: Option<&PathBuf>) -> String {
    match path {
        Some(path) if path.as_os_str() != "-" => path.display().to_string(),
        _ => String::from("standard input"),
    }
}
