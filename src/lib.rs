//! SPL token launchpad
//!
//! CLI and SDK for launching fungible SPL tokens on Solana: mint creation,
//! associated token accounts, supply minting, transfers, and Metaplex token
//! metadata backed by an HTTP storage gateway.

pub mod client;
pub mod config;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod storage;
pub mod types;
pub mod utils;
pub mod workflow;

pub use client::{BaseClient, LaunchClient, MetadataParams, MetadataService, TokenService};
pub use config::{Cluster, LaunchConfig};
pub use error::{LaunchError, LaunchResult};
pub use storage::StorageClient;
pub use types::*;
pub use workflow::{LaunchPlan, Step};
