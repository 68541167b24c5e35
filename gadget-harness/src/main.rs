//! `gadget` command-line harness.
//!
//! Usage:
//!   gadget types [--json]
//!   gadget decode --type Contact contact.json [--pretty]
//!   gadget demo
//!
//! Logs go to stderr; `RUST_LOG` overrides the level picked by `--verbose`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gadget_codec::Codec;
use gadget_harness::{decode_document, demo, describe_types, load_config};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::{Level, debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "gadget")]
#[command(about = "Decode and encode schema-driven gadgets as JSON")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a codec config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered gadget types and enumerations
    Types {
        /// Print as JSON instead of one line per type
        #[arg(long)]
        json: bool,
    },
    /// Decode a JSON document and print its minimal re-encoding
    Decode {
        /// Gadget type to decode into
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Show copy-on-write behaviour of the example gadgets
    Demo,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let registry = gadget_catalog::registry().context("Failed to build type registry")?;
    let config = load_config(args.config.as_deref())?;
    debug!(?config, "codec config");
    let codec = Codec::with_config(&registry, config);

    match args.command {
        Command::Types { json } => {
            let types = describe_types(&registry);
            if json {
                println!("{}", serde_json::to_string_pretty(&types)?);
            } else {
                for summary in &types {
                    println!("{summary}");
                }
            }
        }
        Command::Decode {
            type_name,
            input,
            pretty,
        } => {
            let text = read_input(&input)?;
            let decoded = decode_document(&codec, &type_name, &text)?;
            for diagnostic in decoded.report.diagnostics() {
                warn!("{}", diagnostic);
            }
            debug!("{:?}", decoded.gadget);
            let gadget = decoded.gadget.as_ref();
            let output = if pretty {
                codec.encode_to_string_pretty(gadget)?
            } else {
                codec.encode_to_string(gadget)?
            };
            println!("{output}");
        }
        Command::Demo => {
            info!("Running copy-on-write demo");
            for line in demo() {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}
