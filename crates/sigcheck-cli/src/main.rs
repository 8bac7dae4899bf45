//! sigcheck - verify executables against detached RSA signatures

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sigcheck_cli::cmd;
use sigcheck_cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let key = cmd::load_key(cli.key.as_deref())?;

    let ok = match cli.command {
        Commands::Verify { paths } => cmd::verify::verify(&key, &paths, cli.quiet),
        Commands::SigPath { path } => cmd::sig_path::sig_path(&path)?,
        Commands::Hash { files } => cmd::hash::hash(&files)?,
        Commands::KeyInfo => cmd::key_info::key_info(&key),
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
