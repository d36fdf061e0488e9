use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use shamrock::cli::Cli;
use shamrock::commands::{self, Recovery};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The raw text holds share material; zeroized on drop.
    let raw = Zeroizing::new(
        fs::read_to_string(&cli.input)
            .with_context(|| format!("failed to read {}", cli.input.display()))?,
    );

    let recovery = commands::recover(&raw)?;
    report(&recovery);

    println!("{}", recovery.outcome.secret);
    Ok(())
}

/// Prints the run diagnostics to stderr, leaving stdout for the secret alone
fn report(recovery: &Recovery) {
    let params = &recovery.params;
    eprintln!(
        "n = {}, k = {}",
        *params.share_count(),
        *params.threshold()
    );

    for share in &recovery.shares {
        eprintln!("share {share}");
    }
    if recovery.shares.len() != *params.share_count() {
        eprintln!(
            "warning: input declares n = {} but {} share(s) were decoded",
            *params.share_count(),
            recovery.shares.len()
        );
    }

    let outcome = &recovery.outcome;
    eprintln!(
        "tested {} combination(s), discarded {}",
        outcome.tested, outcome.discarded
    );
    for (secret, count) in outcome.tally.candidates() {
        eprintln!("candidate {secret} appears {count} time(s)");
    }
    eprintln!(
        "majority: {} of {} vote(s)",
        outcome.agreeing,
        outcome.tested - outcome.discarded
    );
}
