//! Entry point: parse CLI, set up logging and run the interactive session.

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rugby_roster::{
    cli::Cli,
    commands::{
        ingest::IngestPolicy,
        session::{Session, SessionConfig},
    },
    logging::setup_logging,
};
use std::io;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the whole session so logs are flushed
    let _guard = match setup_logging(cli.log_file.as_deref(), cli.debug) {
        Ok((_, guard)) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {e}");
            None
        }
    };

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let config = SessionConfig {
        kind: cli.kind,
        club_form: cli.club_form,
        policy: IngestPolicy::from_strict_flag(cli.strict),
        as_json: cli.json,
    };

    let stdin = io::stdin();
    let mut session = Session::new(config, rng, stdin.lock(), io::stdout());

    session
        .load_startup_file(cli.file)
        .context("failed to load startup records")?;
    session.run().context("interactive session failed")?;

    Ok(())
}
