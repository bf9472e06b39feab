// Mint creation command

use anyhow::{Context, Result};
use clap::Args;
use solana_sdk::signer::Signer;
use token_launchpad::{LaunchClient, LaunchConfig};

use super::utils::{address_link, info, load_keypair, parse_pubkey, tx_link};

#[derive(Args)]
pub struct CreateMintCmd {
    /// Number of decimal places for the new mint
    #[arg(long, default_value = "9")]
    decimals: u8,

    /// Mint authority (defaults to the wallet)
    #[arg(long)]
    mint_authority: Option<String>,

    /// Freeze authority (defaults to the wallet)
    #[arg(long, conflicts_with = "no_freeze")]
    freeze_authority: Option<String>,

    /// Create the mint without a freeze authority
    #[arg(long)]
    no_freeze: bool,
}

pub fn execute(cmd: CreateMintCmd, config: &LaunchConfig, wallet_path: &str) -> Result<()> {
    info("Creating token mint...");

    let wallet = load_keypair(wallet_path)?;
    let client = LaunchClient::new(config.clone())?;

    let mint_authority = match cmd.mint_authority {
        Some(ref s) => parse_pubkey(s)?,
        None => wallet.pubkey(),
    };
    let freeze_authority = if cmd.no_freeze {
        None
    } else {
        Some(match cmd.freeze_authority {
            Some(ref s) => parse_pubkey(s)?,
            None => wallet.pubkey(),
        })
    };

    let result = client
        .token
        .create_mint(
            &wallet,
            &mint_authority,
            freeze_authority.as_ref(),
            cmd.decimals,
        )
        .context("Failed to create mint")?;

    address_link(&config.cluster, "Token mint", &result.mint);
    info(&format!("Decimals: {}", result.decimals));
    tx_link(&config.cluster, "Transaction", &result.signature);

    Ok(())
}
