// Token transfer command

use anyhow::{Context, Result};
use clap::Args;
use solana_sdk::signer::Signer;
use token_launchpad::utils::format_base_units;
use token_launchpad::{pda, LaunchClient, LaunchConfig};

use super::utils::{info, load_keypair, parse_pubkey, success, tx_link};

#[derive(Args)]
pub struct TransferCmd {
    /// Mint address
    #[arg(long)]
    mint: String,

    /// Amount in whole tokens
    #[arg(long)]
    amount: u64,

    /// Recipient owner address
    #[arg(long)]
    to: String,
}

pub fn execute(cmd: TransferCmd, config: &LaunchConfig, wallet_path: &str) -> Result<()> {
    info("Transferring tokens...");

    let wallet = load_keypair(wallet_path)?;
    let client = LaunchClient::new(config.clone())?;
    let mint = parse_pubkey(&cmd.mint)?;
    let recipient = parse_pubkey(&cmd.to)?;

    let source = pda::find_associated_token_address(&wallet.pubkey(), &mint);

    // The recipient may not have an account for this mint yet
    let destination = client
        .token
        .create_token_account(&wallet, &mint, &recipient)
        .context("Failed to prepare recipient token account")?;
    if destination.created {
        info(&format!(
            "Created recipient token account {}",
            destination.address
        ));
    }

    let result = client
        .token
        .transfer(
            &wallet,
            &wallet,
            &mint,
            &source,
            &destination.address,
            cmd.amount,
        )
        .context("Failed to transfer tokens")?;

    success(&format!(
        "Transferred {} tokens ({} base units)",
        format_base_units(result.base_units, result.decimals),
        result.base_units
    ));
    tx_link(&config.cluster, "Transfer transaction", &result.signature);

    Ok(())
}
