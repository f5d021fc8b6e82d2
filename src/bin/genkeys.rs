//! Command `genkeys` creates a pair of RSA-2048 keys in PEM format.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use rsacrypt_rs::KeyPair;

/// Create a pair of private and public RSA-2048 keys in PEM format.
#[derive(Parser)]
#[command(name = "genkeys", version)]
struct Args {
    /// Private key file to create (must not exist)
    #[arg(long)]
    private: PathBuf,

    /// Public key file to create (must not exist)
    #[arg(long)]
    public: PathBuf,
}

fn main() {
    let args = parse_args();
    if let Err(err) = run(&args) {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let keypair = KeyPair::generate().context("generating RSA keypair")?;
    keypair
        .store(&args.private, &args.public)
        .context("storing keypair")?;
    Ok(())
}

// Missing flags print usage to stderr and exit 1; --help/--version exit 0.
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
            _ => process::exit(1),
        }
    })
}
