// Copyright (c) 2024, The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Command-line front-end for generating keys and producing and verifying ring signatures.

use std::{error::Error, process::ExitCode};

use clap::{Parser, Subcommand};
use rand_core::OsRng;
use ringsig::{PrivateKey, PublicKey, RingSignature};

#[derive(Parser)]
#[command(name = "ringsig", version, about = "Generate and verify ring signatures")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a public and private key
    #[command(visible_alias = "g")]
    Generate,
    /// Sign a message with a ring
    ///
    /// Alice has private key "Pr1v4T3k3y", public key "4l1c3" and wants to sign the message
    /// "hello!". She wants to use Bob and Carol's public keys to form a ring. Bob's public key is
    /// "b0b" and Carol's public key is "c4r0l". Alice can form the ring [c4r0l, 4l1c3, b0b] and
    /// hide herself in that ring with the following command:
    ///
    /// ringsig sign --message "hello!" --private-key 4l1c3 --ring-index 1 --ring c4r0l --ring
    /// 4l1c3 --ring b0b
    #[command(visible_alias = "s")]
    Sign {
        /// Message to sign
        #[arg(short, long)]
        message: String,
        /// Private key to use for signing
        #[arg(short = 'k', long)]
        private_key: String,
        /// Index of your private key in the signing ring
        #[arg(short = 'i', long)]
        ring_index: usize,
        /// Public key to use as a ring member, in ring order (repeatable)
        #[arg(short = 'r', long = "ring")]
        ring: Vec<String>,
    },
    /// Verify a message signature
    #[command(visible_alias = "v")]
    Verify {
        /// Message that was signed
        #[arg(short, long)]
        message: String,
        /// Signature to verify
        #[arg(short, long)]
        signature: String,
    },
}

fn main() -> ExitCode {
    // Remap clap's parse failures onto the same failure exit code as everything else
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return ExitCode::FAILURE;
        },
    };

    let result = match cli.command {
        Command::Generate => generate(),
        Command::Sign {
            message,
            private_key,
            ring_index,
            ring,
        } => sign(&message, &private_key, ring_index, &ring),
        Command::Verify { message, signature } => verify(&message, &signature),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}

fn generate() -> Result<(), Box<dyn Error>> {
    println!("Generating your public and private key...");

    let private = PrivateKey::random(&mut OsRng);
    let public = private.public_key();

    println!("Public key: {}", public.to_base64());
    println!("Private key: {}", private.to_base64());
    println!("You can (should) share your public key with the world, but make sure you secure your private key.");

    Ok(())
}

fn sign(
    message: &str,
    private_key: &str,
    ring_index: usize,
    ring: &[String],
) -> Result<(), Box<dyn Error>> {
    if ring.is_empty() {
        return Err("you need to specify a ring to use for signing".into());
    }

    let mut ring_keys = Vec::with_capacity(ring.len());
    for key in ring {
        let decoded =
            PublicKey::from_base64(key).map_err(|_| format!("invalid public key: {key}"))?;
        ring_keys.push(decoded);
    }

    if message.is_empty() {
        return Err("you need to specify a message to sign".into());
    }

    if private_key.is_empty() {
        return Err("you need to specify the private key to use for signing".into());
    }
    let private = PrivateKey::from_base64(private_key).map_err(|_| "invalid private key")?;

    println!("Signing message...");
    let signature =
        RingSignature::sign(message.as_bytes(), &ring_keys, ring_index, &private, &mut OsRng)?;

    println!("{}", signature.to_base64()?);

    Ok(())
}

fn verify(message: &str, signature: &str) -> Result<(), Box<dyn Error>> {
    let Ok(signature) = RingSignature::from_base64(signature) else {
        return Err("invalid signature".into());
    };

    if !signature.verify(message.as_bytes()) {
        return Err("invalid signature".into());
    }

    println!("Signature is valid.");

    Ok(())
}
