//! Command `decrypt` decrypts a file encrypted with an RSA public key,
//! using the matching RSA private key.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use rsacrypt_rs::{decrypt_stream, file_ops, load_private_key, read_header};

/// Decrypt a file with an RSA private key.
#[derive(Parser)]
#[command(name = "decrypt", version)]
struct Args {
    /// Path to the private key in PEM format
    #[arg(long)]
    key: PathBuf,

    /// Path to the encrypted file to decrypt
    #[arg(long = "in")]
    input: PathBuf,

    /// Path to the decrypted file to create (must not exist)
    #[arg(long)]
    out: PathBuf,
}

fn main() {
    let args = parse_args();
    if let Err(err) = run(&args) {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let private_key = load_private_key(&args.key)
        .with_context(|| format!("reading private key {}", args.key.display()))?;
    let mut input = BufReader::new(
        File::open(&args.input).with_context(|| format!("opening {}", args.input.display()))?,
    );

    // Header is read and unwrapped first: a truncated input or a key
    // mismatch is reported before the output file is ever created.
    let header = read_header(&mut input, &private_key)?;
    let session_key = header.unwrap_session_key(&private_key)?;

    let mut output = BufWriter::new(file_ops::create_excl(&args.out)?);
    decrypt_stream(&session_key, &header.nonce(), input, &mut output)?;
    output.flush()?;
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
