//! shadecraft CLI (`sc`): thin wrapper over shadecraft-core.
//!
//! All color math lives in the core crate; this binary only parses
//! arguments, initializes logging, and formats output.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shadecraft_core::logging::{init_logging, LogConfig, LogFormat};
use shadecraft_core::{
    default_presets, generate_palette, hex_to_hsl, normalize_hex, presets, HexColor,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "sc", version, about = "Brand color palette engine")]
struct Cli {
    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Canonicalize a hex color (uppercase, #-prefixed, 6-digit)
    Normalize {
        /// Color string, e.g. "4f46e5", "#F0A"
        color: String,
    },
    /// Convert a hex color to integer HSL
    Convert {
        color: String,
        /// Emit a JSON object instead of "h s l"
        #[arg(long)]
        json: bool,
    },
    /// Generate the ten-shade ramp for a base color
    Palette {
        color: String,
        /// Emit an ordered shade→hex JSON map instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the built-in quick colors
    Presets {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config =
        LogConfig { level: cli.log_level.clone(), format: cli.log_format.into() };
    init_logging(&log_config).context("failed to initialize logging")?;

    match cli.command {
        Command::Normalize { color } => {
            let color = parse_color(&color)?;
            println!("{color}");
        }
        Command::Convert { color, json } => {
            let color = parse_color(&color)?;
            let hsl = hex_to_hsl(&color);
            if json {
                println!("{}", serde_json::to_string(&hsl)?);
            } else {
                println!("{} {} {}", hsl.h, hsl.s, hsl.l);
            }
        }
        Command::Palette { color, json } => {
            let color = parse_color(&color)?;
            let palette = generate_palette(&color);
            if json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else {
                for (shade, hex) in palette.iter() {
                    println!("{shade:>4}  {hex}");
                }
            }
        }
        Command::Presets { json } => {
            let resolved = presets::resolve(&default_presets());
            if json {
                let entries: Vec<serde_json::Value> = resolved
                    .iter()
                    .map(|(name, color)| {
                        serde_json::json!({ "name": name, "value": color })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for (name, color) in resolved {
                    println!("{name:<8}  {color}");
                }
            }
        }
    }

    Ok(())
}

fn parse_color(input: &str) -> Result<HexColor> {
    debug!(input, "normalizing color input");
    match normalize_hex(input) {
        Some(color) => Ok(color),
        None => bail!("invalid hex color: {input:?} (expected 3 or 6 hex digits)"),
    }
}
