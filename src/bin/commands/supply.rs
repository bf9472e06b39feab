// Supply minting command

use anyhow::{Context, Result};
use clap::Args;
use solana_sdk::signer::Signer;
use token_launchpad::utils::format_base_units;
use token_launchpad::{pda, LaunchClient, LaunchConfig};

use super::utils::{info, load_keypair, parse_pubkey, success, tx_link};

#[derive(Args)]
pub struct MintCmd {
    /// Mint address
    #[arg(long)]
    mint: String,

    /// Amount in whole tokens
    #[arg(long)]
    amount: u64,

    /// Recipient owner; tokens land in their associated account
    /// (defaults to the wallet)
    #[arg(long, conflicts_with = "destination")]
    recipient: Option<String>,

    /// Explicit destination token account
    #[arg(long)]
    destination: Option<String>,
}

pub fn execute(cmd: MintCmd, config: &LaunchConfig, wallet_path: &str) -> Result<()> {
    info("Minting supply...");

    let wallet = load_keypair(wallet_path)?;
    let client = LaunchClient::new(config.clone())?;
    let mint = parse_pubkey(&cmd.mint)?;

    let destination = match cmd.destination {
        Some(ref s) => parse_pubkey(s)?,
        None => {
            let recipient = match cmd.recipient {
                Some(ref s) => parse_pubkey(s)?,
                None => wallet.pubkey(),
            };
            pda::find_associated_token_address(&recipient, &mint)
        }
    };

    let result = client
        .token
        .mint_supply(&wallet, &wallet, &mint, &destination, cmd.amount)
        .context("Failed to mint supply")?;

    success(&format!(
        "Minted {} tokens ({} base units)",
        format_base_units(result.base_units, result.decimals),
        result.base_units
    ));
    tx_link(&config.cluster, "Mint token transaction", &result.signature);

    Ok(())
}
