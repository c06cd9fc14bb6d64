#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! `rw-verify`: check a Rabin-Williams signature from the command line.
//!
//! Exit status is 0 for a valid signature, 1 for an invalid one and 2 when
//! the inputs could not be read or are not a signature at all.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rw_core::logging::{CorrelationGuard, init_tracing_with_default};
use rw_core::{VerifierConfig, load_public_key, load_signature, verify_rabin_williams_with_key};
use rw_primitives::ResidueMode;
use rw_primitives::sig::MAX_RESIDUE_LEN;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(author, version, about = "Verify a Rabin-Williams signature", long_about = None)]
struct Args {
    /// Public key file (hex-encoded modulus n)
    #[arg(short = 'k', long)]
    public_key: PathBuf,

    /// Signature file (hex-encoded packed signature)
    #[arg(short = 's', long)]
    signature: PathBuf,

    /// Message to verify (read from stdin when omitted)
    #[arg(short, long)]
    message: Option<String>,

    /// Wrap n - x^2 into [0, n), so x^2 = 0 yields 0 rather than n
    #[arg(long)]
    canonical_residues: bool,

    /// Longest accepted residue in bytes
    #[arg(long, default_value_t = MAX_RESIDUE_LEN)]
    max_residue_len: usize,

    /// Smallest accepted modulus in bits (0 accepts any size)
    #[arg(long, default_value_t = 0)]
    min_modulus_bits: usize,
}

impl Args {
    fn config(&self) -> Result<VerifierConfig> {
        let mode =
            if self.canonical_residues { ResidueMode::Canonical } else { ResidueMode::Compatible };
        VerifierConfig::new()
            .with_residue_mode(mode)
            .with_max_residue_len(self.max_residue_len)
            .with_min_modulus_bits(self.min_modulus_bits)
            .build()
            .context("invalid verifier settings")
    }
}

fn read_message(message: Option<&str>) -> Result<Vec<u8>> {
    match message {
        Some(m) => Ok(m.as_bytes().to_vec()),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read message from stdin")?;
            Ok(buffer)
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let _guard = CorrelationGuard::lightweight();
    let config = args.config()?;

    let key = load_public_key(&args.public_key).with_context(|| {
        format!("failed to load public key from {}", args.public_key.display())
    })?;
    let signature = load_signature(&args.signature)
        .with_context(|| format!("failed to load signature from {}", args.signature.display()))?;
    let message = read_message(args.message.as_deref())?;
    debug!(message_len = message.len(), ?config, "verifying");

    let valid = verify_rabin_williams_with_key(&message, &signature, &key, &config)?;
    Ok(valid)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Quiet unless RUST_LOG asks for more; stdout carries the verdict
    if let Err(e) = init_tracing_with_default("warn") {
        eprintln!("Warning: logging unavailable: {e}");
    }

    match run(&args) {
        Ok(true) => {
            println!("Signature is valid");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("Signature is invalid");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
