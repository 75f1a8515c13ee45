//! rt - rt-rs command line
//!
//! Runs the projectile demo and writes canvases to disk.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;
mod sim;

#[derive(Parser)]
#[command(name = "rt")]
#[command(author, version, about = "rt-rs command line")]
#[command(long_about = "
Tuple algebra and canvas playground.

Examples:
  rt cannon                                  # Default flight, writes cannon.ppm
  rt cannon --speed 8 --wind -0.02,0,0 -o slow.ppm
  rt -vv cannon --width 400 --height 300     # Log every tick
  rt blank 64 48 --color 0.2,0.4,0.6 -o swatch.ppm
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fire a projectile and plot its trajectory
    #[command(visible_alias = "c")]
    Cannon(CannonArgs),

    /// Write a canvas filled with a single color
    Blank(BlankArgs),
}

#[derive(Args)]
struct CannonArgs {
    /// Output image
    #[arg(short, long, default_value = "cannon.ppm")]
    output: PathBuf,

    /// Canvas width
    #[arg(long, default_value = "900")]
    width: u32,

    /// Canvas height
    #[arg(long, default_value = "550")]
    height: u32,

    /// Start position x,y,z
    #[arg(
        long,
        default_value = "0,1,0",
        value_parser = parse_triple,
        allow_hyphen_values = true
    )]
    start: [f64; 3],

    /// Launch direction x,y,z (normalized before use)
    #[arg(
        long,
        default_value = "1,1.8,0",
        value_parser = parse_triple,
        allow_hyphen_values = true
    )]
    direction: [f64; 3],

    /// Launch speed (length of the initial velocity)
    #[arg(short, long, default_value = "11.25")]
    speed: f64,

    /// Gravity per tick x,y,z
    #[arg(
        long,
        default_value = "0,-0.1,0",
        value_parser = parse_triple,
        allow_hyphen_values = true
    )]
    gravity: [f64; 3],

    /// Wind per tick x,y,z
    #[arg(
        long,
        default_value = "-0.01,0,0",
        value_parser = parse_triple,
        allow_hyphen_values = true
    )]
    wind: [f64; 3],

    /// Plot color r,g,b
    #[arg(
        short,
        long,
        default_value = "1,0,0",
        value_parser = parse_triple,
        allow_hyphen_values = true
    )]
    color: [f64; 3],

    /// Stop after this many ticks even if the projectile never lands
    #[arg(long, default_value = "100000")]
    max_ticks: usize,
}

#[derive(Args)]
struct BlankArgs {
    /// Canvas width
    width: u32,

    /// Canvas height
    height: u32,

    /// Fill color r,g,b
    #[arg(
        short,
        long,
        default_value = "0,0,0",
        value_parser = parse_triple,
        allow_hyphen_values = true
    )]
    color: [f64; 3],

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

/// Parses `"x,y,z"` into three floats.
fn parse_triple(s: &str) -> std::result::Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated numbers, got '{}'", s));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid number '{}': {}", part, e))?;
    }
    Ok(out)
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the `-v` count. The returned guard must live until
/// exit so buffered file logs get flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Cannon(args) => commands::cannon::run(args, cli.verbose),
        Commands::Blank(args) => commands::blank::run(args, cli.verbose),
    }
}
