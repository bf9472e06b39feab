// Associated token account command

use anyhow::{Context, Result};
use clap::Args;
use solana_sdk::signer::Signer;
use token_launchpad::{LaunchClient, LaunchConfig};

use super::utils::{address_link, info, load_keypair, parse_pubkey, tx_link, warn};

#[derive(Args)]
pub struct CreateAccountCmd {
    /// Mint address
    #[arg(long)]
    mint: String,

    /// Owner of the token account (defaults to the wallet)
    #[arg(long)]
    owner: Option<String>,
}

pub fn execute(cmd: CreateAccountCmd, config: &LaunchConfig, wallet_path: &str) -> Result<()> {
    info("Creating token account...");

    let wallet = load_keypair(wallet_path)?;
    let client = LaunchClient::new(config.clone())?;
    let mint = parse_pubkey(&cmd.mint)?;
    let owner = match cmd.owner {
        Some(ref s) => parse_pubkey(s)?,
        None => wallet.pubkey(),
    };

    let result = client
        .token
        .create_token_account(&wallet, &mint, &owner)
        .context("Failed to create token account")?;

    if !result.created {
        warn("Token account already exists");
    }
    address_link(&config.cluster, "Token account", &result.address);
    if let Some(signature) = result.signature {
        tx_link(&config.cluster, "Transaction", &signature);
    }

    Ok(())
}
