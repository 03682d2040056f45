//! `hypercube`: interactive explorer for the symmetries of Q0..Q5.
//!
//! Frames and command output go to stdout; logs go to stderr
//! (`RUST_LOG=debug` to see every executed command).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use hypercube_rs::{repl, Dimension, ReplConfig, Session};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "hypercube")]
#[command(about = "Explore automorphisms of the hypercube graphs Q0..Q5 as ASCII art")]
struct Args {
    /// Dimension of the cube shown at startup (0-5).
    #[arg(short, long)]
    dimension: Option<usize>,

    /// Seed for the `random` command.
    #[arg(long)]
    seed: Option<u64>,

    /// Print frames without ANSI colors.
    #[arg(long)]
    no_color: bool,

    /// JSON configuration file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prompt printed before each command line.
    #[arg(long)]
    prompt: Option<String>,

    /// Start in verbose mode.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> hypercube_rs::Result<ReplConfig> {
        let mut config = match &self.config {
            Some(path) => ReplConfig::load(path)?,
            None => ReplConfig::default(),
        };
        if let Some(n) = self.dimension {
            config.initial_dimension = Dimension::new(n)?;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_color {
            config.color = false;
        }
        if let Some(prompt) = self.prompt {
            config.prompt = prompt;
        }
        config.verbose |= self.verbose;
        Ok(config)
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match start(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "fatal");
            eprintln!("hypercube: {e}");
            ExitCode::FAILURE
        }
    }
}

fn start(args: Args) -> hypercube_rs::Result<()> {
    let config = args.into_config()?;
    info!(dimension = %config.initial_dimension, seed = ?config.seed, "starting session");

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), &mut stdout)
}
