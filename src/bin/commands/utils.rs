// Utility functions for CLI commands

use anyhow::{Context, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair, Signature};
use std::str::FromStr;
use token_launchpad::Cluster;

/// Load the wallet keypair from a file path, expanding a leading ~
pub fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded = if path.starts_with('~') {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        path.replacen('~', &home, 1)
    } else {
        path.to_string()
    };

    read_keypair_file(&expanded)
        .map_err(|e| anyhow::anyhow!("Failed to load keypair from {}: {}", expanded, e))
}

/// Parse a pubkey from string
pub fn parse_pubkey(s: &str) -> Result<Pubkey> {
    Pubkey::from_str(s).context("Invalid public key")
}

/// Print success message
pub fn success(msg: &str) {
    println!("[OK] {}", msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("[INFO] {}", msg);
}

/// Print warning message
pub fn warn(msg: &str) {
    eprintln!("[WARN] {}", msg);
}

/// Print a labelled explorer link for an account
pub fn address_link(cluster: &Cluster, label: &str, address: &Pubkey) {
    success(&format!("{}: {}", label, cluster.explorer_address(address)));
}

/// Print a labelled explorer link for a transaction
pub fn tx_link(cluster: &Cluster, label: &str, signature: &Signature) {
    info(&format!("{}: {}", label, cluster.explorer_tx(signature)));
}
