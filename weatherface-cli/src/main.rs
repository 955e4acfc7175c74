//! Binary crate for the `weatherface` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Running the single fetch-and-format pass
//! - Printing the status line

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
