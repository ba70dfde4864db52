//! Lease configuration maintenance binary.
//!
//! Operates directly on a filesystem-backed store, outside any running
//! service: `write` validates and replaces the configured bounds, `read`
//! prints them in grammar form or reports that nothing is configured yet.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use issuance_lease::{format_duration, LeaseStore};
use storage_kv::FsStore;

#[derive(Debug, Parser)]
#[command(author, version, about = "Lease configuration maintenance tool")]
struct Args {
    /// Root directory of the filesystem-backed store.
    #[arg(long, value_name = "DIR")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate and persist the lease bounds, replacing any prior record.
    Write {
        /// Default validity period, e.g. "1h" or "90m".
        #[arg(long)]
        lease: String,

        /// Upper bound on the validity period, e.g. "24h".
        #[arg(long)]
        lease_max: String,
    },
    /// Print the configured bounds, or "unconfigured" if none exist.
    Read,
}

fn run(args: Args) -> Result<ExitCode> {
    let store = LeaseStore::new(FsStore::new(&args.root));

    match args.command {
        Command::Write { lease, lease_max } => match store.write(&lease, &lease_max) {
            Ok(()) => {
                println!("lease configuration updated");
                Ok(ExitCode::SUCCESS)
            }
            Err(err) if err.is_client_fault() => {
                eprintln!("{err}");
                Ok(ExitCode::FAILURE)
            }
            Err(err) => Err(err).context("could not persist lease configuration"),
        },
        Command::Read => {
            let config = store
                .read()
                .context("could not read lease configuration")?;
            match config {
                Some(config) => {
                    println!("lease = {}", format_duration(config.lease));
                    println!("lease_max = {}", format_duration(config.lease_max));
                }
                None => println!("unconfigured"),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> Result<ExitCode> {
    run(Args::parse())
}
