// Complete end-to-end token launch
//
// Runs a validated plan of workflow steps in dependency order, instead of
// toggling steps by editing code. Partial runs resume from an existing
// mint via --mint.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use token_launchpad::utils::format_base_units;
use token_launchpad::{pda, LaunchClient, LaunchConfig, LaunchPlan, MetadataParams, Step};

use super::utils::{address_link, info, load_keypair, parse_pubkey, success, tx_link, warn};

#[derive(Args)]
pub struct LaunchCmd {
    /// Steps to run, comma separated (defaults to every step the other
    /// flags call for)
    #[arg(long, value_delimiter = ',')]
    steps: Option<Vec<String>>,

    /// Existing mint, for plans that skip create-mint
    #[arg(long)]
    mint: Option<String>,

    /// Decimals for the new mint
    #[arg(long, default_value = "9")]
    decimals: u8,

    /// Supply to mint, in whole tokens
    #[arg(long)]
    supply: Option<u64>,

    /// Token name
    #[arg(long)]
    name: Option<String>,

    /// Token symbol
    #[arg(long)]
    symbol: Option<String>,

    /// Description for the off-chain document
    #[arg(long, default_value = "")]
    description: String,

    /// Path to the token image
    #[arg(long)]
    image: Option<PathBuf>,

    /// Royalty in basis points
    #[arg(long, default_value = "0")]
    seller_fee_bps: u16,

    /// Transfer part of the supply to this owner after minting
    #[arg(long)]
    transfer_to: Option<String>,

    /// Amount to transfer, in whole tokens
    #[arg(long)]
    transfer_amount: Option<u64>,

    /// Write the launch addresses and signatures to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Addresses and signatures collected over a run
#[derive(Default, Serialize)]
struct LaunchState {
    mint: Option<String>,
    token_account: Option<String>,
    metadata: Option<String>,
    image_uri: Option<String>,
    metadata_uri: Option<String>,
    signatures: Vec<String>,
}

pub fn execute(cmd: LaunchCmd, config: &LaunchConfig, wallet_path: &str) -> Result<()> {
    let wallet = load_keypair(wallet_path)?;
    let client = LaunchClient::new(config.clone())?;

    // Assemble and validate the plan before touching the network
    let steps = match cmd.steps {
        Some(ref names) => names
            .iter()
            .map(|name| name.parse::<Step>())
            .collect::<Result<Vec<_>, _>>()?,
        None => default_steps(&cmd),
    };
    let existing_mint = match cmd.mint {
        Some(ref s) => Some(parse_pubkey(s)?),
        None => None,
    };

    let mut plan = LaunchPlan::new(steps.clone());
    if let Some(mint) = existing_mint {
        plan = plan
            .with_existing_mint(mint)
            .with_existing_token_account(pda::find_associated_token_address(
                &wallet.pubkey(),
                &mint,
            ));
    }
    plan.validate()?;

    info(&format!(
        "Launch plan: {}",
        steps
            .iter()
            .map(|step| step.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    ));

    preflight(&client, &wallet, &plan)?;

    let total = steps.len();
    let mut state = LaunchState::default();
    let mut mint = existing_mint;
    let mut token_account = plan.existing_token_account;

    for (index, step) in steps.iter().enumerate() {
        info(&format!("\n[{}/{}] {}...", index + 1, total, step));
        match step {
            Step::CreateMint => {
                let result = client
                    .token
                    .create_mint(&wallet, &wallet.pubkey(), Some(&wallet.pubkey()), cmd.decimals)
                    .context("Failed to create mint")?;
                address_link(&config.cluster, "Token mint", &result.mint);
                tx_link(&config.cluster, "Transaction", &result.signature);
                state.mint = Some(result.mint.to_string());
                state.signatures.push(result.signature.to_string());
                mint = Some(result.mint);
            }

            Step::CreateTokenAccount => {
                let mint = require_mint(mint)?;
                let result = client
                    .token
                    .create_token_account(&wallet, &mint, &wallet.pubkey())
                    .context("Failed to create token account")?;
                if !result.created {
                    warn("Token account already exists");
                }
                address_link(&config.cluster, "Token account", &result.address);
                if let Some(signature) = result.signature {
                    tx_link(&config.cluster, "Transaction", &signature);
                    state.signatures.push(signature.to_string());
                }
                state.token_account = Some(result.address.to_string());
                token_account = Some(result.address);
            }

            Step::MintSupply => {
                let mint = require_mint(mint)?;
                let supply = cmd
                    .supply
                    .context("--supply is required for the mint step")?;
                let destination = token_account
                    .context("no token account to mint into")?;
                let result = client
                    .token
                    .mint_supply(&wallet, &wallet, &mint, &destination, supply)
                    .context("Failed to mint supply")?;
                success(&format!(
                    "Minted {} tokens ({} base units)",
                    format_base_units(result.base_units, result.decimals),
                    result.base_units
                ));
                tx_link(&config.cluster, "Mint token transaction", &result.signature);
                state.signatures.push(result.signature.to_string());
            }

            Step::CreateMetadata => {
                let mint = require_mint(mint)?;
                let params = metadata_params(&cmd)?;
                let result = client
                    .metadata
                    .create(&wallet, &mint, &params)
                    .context("Failed to create metadata")?;
                info(&format!("Image uri: {}", result.image_uri));
                info(&format!("Metadata uri: {}", result.metadata_uri));
                tx_link(
                    &config.cluster,
                    "Create metadata transaction",
                    &result.signature,
                );
                state.metadata = Some(result.metadata_address.to_string());
                state.image_uri = Some(result.image_uri);
                state.metadata_uri = Some(result.metadata_uri);
                state.signatures.push(result.signature.to_string());
            }

            Step::UpdateMetadata => {
                let mint = require_mint(mint)?;
                let params = metadata_params(&cmd)?;
                let result = client
                    .metadata
                    .update(&wallet, &mint, &params)
                    .context("Failed to update metadata")?;
                info(&format!("Image uri: {}", result.image_uri));
                info(&format!("Metadata uri: {}", result.metadata_uri));
                tx_link(
                    &config.cluster,
                    "Update metadata transaction",
                    &result.signature,
                );
                state.metadata = Some(result.metadata_address.to_string());
                state.image_uri = Some(result.image_uri);
                state.metadata_uri = Some(result.metadata_uri);
                state.signatures.push(result.signature.to_string());
            }

            Step::Transfer => {
                let mint = require_mint(mint)?;
                let recipient = cmd
                    .transfer_to
                    .as_deref()
                    .context("--transfer-to is required for the transfer step")?;
                let recipient = parse_pubkey(recipient)?;
                let amount = cmd
                    .transfer_amount
                    .context("--transfer-amount is required for the transfer step")?;
                let source = token_account
                    .context("no token account to transfer from")?;

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
                        amount,
                    )
                    .context("Failed to transfer tokens")?;
                success(&format!(
                    "Transferred {} tokens ({} base units)",
                    format_base_units(result.base_units, result.decimals),
                    result.base_units
                ));
                tx_link(&config.cluster, "Transfer transaction", &result.signature);
                state.signatures.push(result.signature.to_string());
            }
        }
    }

    if let Some(ref path) = cmd.output {
        fs::write(path, serde_json::to_vec_pretty(&state)?)
            .with_context(|| format!("Failed to write launch state to {}", path.display()))?;
        success(&format!("Launch state saved to {}", path.display()));
    }

    success("\nLaunch complete");
    Ok(())
}

/// Steps implied by the flags when --steps is not given
fn default_steps(cmd: &LaunchCmd) -> Vec<Step> {
    let mut steps = Vec::new();
    if cmd.mint.is_none() {
        steps.push(Step::CreateMint);
    }
    steps.push(Step::CreateTokenAccount);
    if cmd.supply.is_some() {
        steps.push(Step::MintSupply);
    }
    if cmd.name.is_some() {
        steps.push(Step::CreateMetadata);
    }
    if cmd.transfer_to.is_some() {
        steps.push(Step::Transfer);
    }
    steps
}

fn require_mint(mint: Option<Pubkey>) -> Result<Pubkey> {
    mint.context("no mint available at this step")
}

fn metadata_params(cmd: &LaunchCmd) -> Result<MetadataParams> {
    let name = cmd
        .name
        .clone()
        .context("--name is required for metadata steps")?;
    let symbol = cmd
        .symbol
        .clone()
        .context("--symbol is required for metadata steps")?;
    let image_path = cmd
        .image
        .clone()
        .context("--image is required for metadata steps")?;
    Ok(MetadataParams {
        name,
        symbol,
        description: cmd.description.clone(),
        image_path,
        seller_fee_basis_points: cmd.seller_fee_bps,
    })
}

/// The payer must at least cover rent for the accounts the plan creates
fn preflight(client: &LaunchClient, wallet: &Keypair, plan: &LaunchPlan) -> Result<()> {
    let balance = client.base.get_balance(&wallet.pubkey())?;
    let mut required = 0u64;
    if plan.steps.contains(&Step::CreateMint) {
        required += client.base.minimum_rent(spl_token::state::Mint::LEN)?;
    }
    if plan.steps.contains(&Step::CreateTokenAccount) {
        required += client.base.minimum_rent(spl_token::state::Account::LEN)?;
    }
    info(&format!(
        "Payer balance: {} lamports, rent required: {}",
        balance, required
    ));
    if balance < required {
        anyhow::bail!("insufficient payer balance for rent");
    }
    Ok(())
}
