//! Command `encrypt` encrypts a file using an RSA public key in PEM format.
//! The matching private key decrypts it.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use rsacrypt_rs::{encrypt_stream, file_ops, load_public_key, Header, SessionKey};

/// Encrypt a file for the holder of an RSA private key.
#[derive(Parser)]
#[command(name = "encrypt", version)]
struct Args {
    /// Path to the recipient's public key in PEM format
    #[arg(long)]
    key: PathBuf,

    /// Path to the plaintext file to encrypt
    #[arg(long = "in")]
    input: PathBuf,

    /// Path to the encrypted file to create (must not exist)
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
    let input = File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let public_key = load_public_key(&args.key)
        .with_context(|| format!("reading public key {}", args.key.display()))?;

    // All key material is in place before the output file is created, so an
    // existing path or a bad key never leaves a stray file behind.
    let session_key = SessionKey::generate();
    let header = Header::wrap(&public_key, &session_key)?;

    let mut output = BufWriter::new(file_ops::create_excl(&args.out)?);
    output.write_all(header.as_bytes())?;
    encrypt_stream(
        &session_key,
        &header.nonce(),
        BufReader::new(input),
        &mut output,
    )?;
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
