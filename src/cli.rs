use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shamrock")]
#[command(about = "Reconstruct a shared secret from (k, n) threshold shares, \
tolerating corrupted shares via majority voting")]
pub struct Cli {
    /// Path to the share file
    pub input: PathBuf,
}
