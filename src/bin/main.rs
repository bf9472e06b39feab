// CLI tool for launching SPL tokens
//
// This binary provides one subcommand per workflow step plus a `launch`
// command that runs the full mint/account/supply/metadata sequence.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use token_launchpad::{Cluster, LaunchConfig};

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "SPL token launch CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// RPC URL to connect to
    #[arg(long, default_value = "https://api.devnet.solana.com")]
    rpc_url: String,

    /// Storage gateway URL for image and metadata uploads
    #[arg(long, default_value = "https://devnet.bundlr.network")]
    storage_url: String,

    /// Cluster label used for explorer links
    #[arg(long, default_value = "devnet")]
    cluster: String,

    /// Path to wallet keypair file
    #[arg(long, default_value = "~/.config/solana/id.json")]
    wallet: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new token mint
    CreateMint(commands::mint::CreateMintCmd),

    /// Get or create an associated token account
    CreateAccount(commands::account::CreateAccountCmd),

    /// Mint supply to an owner's token account
    Mint(commands::supply::MintCmd),

    /// Transfer tokens to another owner
    Transfer(commands::transfer::TransferCmd),

    /// Create, update or inspect token metadata
    #[command(subcommand)]
    Metadata(commands::metadata::MetadataCommands),

    /// Run the full launch workflow
    Launch(commands::launch::LaunchCmd),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cluster = cli.cluster.parse::<Cluster>()?;
    let config = LaunchConfig::devnet()
        .with_cluster(cluster)
        .with_rpc_url(cli.rpc_url)
        .with_storage_url(cli.storage_url);

    match cli.command {
        Commands::CreateMint(cmd) => commands::mint::execute(cmd, &config, &cli.wallet),
        Commands::CreateAccount(cmd) => commands::account::execute(cmd, &config, &cli.wallet),
        Commands::Mint(cmd) => commands::supply::execute(cmd, &config, &cli.wallet),
        Commands::Transfer(cmd) => commands::transfer::execute(cmd, &config, &cli.wallet),
        Commands::Metadata(cmd) => commands::metadata::execute(cmd, &config, &cli.wallet),
        Commands::Launch(cmd) => commands::launch::execute(cmd, &config, &cli.wallet),
    }
}
