use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use coach::{Coach, CoachConfig};
use tracing_subscriber::EnvFilter;

mod protocol;

#[derive(Parser)]
#[command(name = "coach")]
#[command(about = "Chess move coach: JSON requests on stdin, JSON responses on stdout", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search depth for requests that do not name one
    #[arg(short, long)]
    depth: Option<u8>,

    /// Seed for reproducible tie-breaking
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CoachConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CoachConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.default_depth = depth;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    // Responses go to stdout, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(depth = config.default_depth, seed = ?config.seed, "coach ready");

    let mut coach = Coach::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = protocol::handle_line(&mut coach, &line);
        writeln!(stdout, "{response}").context("writing response")?;
        stdout.flush().context("writing response")?;
    }

    Ok(())
}
