// Metadata commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use token_launchpad::{LaunchClient, LaunchConfig, MetadataParams};

use super::utils::{address_link, info, load_keypair, parse_pubkey, tx_link, warn};

#[derive(Subcommand)]
pub enum MetadataCommands {
    /// Upload assets and create the on-chain metadata account
    Create(MetadataArgs),

    /// Re-upload assets and rewrite existing metadata
    Update(MetadataArgs),

    /// Show the metadata currently attached to a mint
    Show {
        /// Mint address
        #[arg(long)]
        mint: String,
    },
}

#[derive(Args)]
pub struct MetadataArgs {
    /// Mint address
    #[arg(long)]
    mint: String,

    /// Token name
    #[arg(long)]
    name: String,

    /// Token symbol
    #[arg(long)]
    symbol: String,

    /// Description for the off-chain document
    #[arg(long, default_value = "")]
    description: String,

    /// Path to the token image
    #[arg(long)]
    image: PathBuf,

    /// Royalty in basis points
    #[arg(long, default_value = "0")]
    seller_fee_bps: u16,
}

impl MetadataArgs {
    fn params(&self) -> MetadataParams {
        MetadataParams {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            description: self.description.clone(),
            image_path: self.image.clone(),
            seller_fee_basis_points: self.seller_fee_bps,
        }
    }
}

pub fn execute(cmd: MetadataCommands, config: &LaunchConfig, wallet_path: &str) -> Result<()> {
    match cmd {
        MetadataCommands::Create(args) => {
            info("Creating token metadata...");

            let wallet = load_keypair(wallet_path)?;
            let client = LaunchClient::new(config.clone())?;
            let mint = parse_pubkey(&args.mint)?;

            let result = client
                .metadata
                .create(&wallet, &mint, &args.params())
                .context("Failed to create metadata")?;

            info(&format!("Image uri: {}", result.image_uri));
            info(&format!("Metadata uri: {}", result.metadata_uri));
            address_link(&config.cluster, "Metadata account", &result.metadata_address);
            tx_link(&config.cluster, "Create metadata transaction", &result.signature);
        }

        MetadataCommands::Update(args) => {
            info("Updating token metadata...");

            let wallet = load_keypair(wallet_path)?;
            let client = LaunchClient::new(config.clone())?;
            let mint = parse_pubkey(&args.mint)?;

            let result = client
                .metadata
                .update(&wallet, &mint, &args.params())
                .context("Failed to update metadata")?;

            info(&format!("Image uri: {}", result.image_uri));
            info(&format!("Metadata uri: {}", result.metadata_uri));
            address_link(&config.cluster, "Metadata account", &result.metadata_address);
            tx_link(&config.cluster, "Update metadata transaction", &result.signature);
        }

        MetadataCommands::Show { mint } => {
            let client = LaunchClient::new(config.clone())?;
            let mint = parse_pubkey(&mint)?;

            match client.metadata.fetch(&mint)? {
                Some(metadata) => {
                    info(&format!("Name: {}", metadata.name));
                    info(&format!("Symbol: {}", metadata.symbol));
                    info(&format!("Uri: {}", metadata.uri));
                    info(&format!("Update authority: {}", metadata.update_authority));
                }
                None => warn(&format!("No metadata found for mint {}", mint)),
            }
        }
    }

    Ok(())
}
