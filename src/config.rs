//! Connection configuration

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::error::LaunchError;

/// Cluster the launchpad talks to, used to render explorer links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    Mainnet,
    Devnet,
    Testnet,
    Localnet,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::Localnet => "localnet",
        }
    }

    fn query_suffix(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "",
            Cluster::Devnet => "?cluster=devnet",
            Cluster::Testnet => "?cluster=testnet",
            Cluster::Localnet => "?cluster=custom",
        }
    }

    /// Explorer link for an account address
    pub fn explorer_address(&self, address: &Pubkey) -> String {
        format!(
            "https://explorer.solana.com/address/{}{}",
            address,
            self.query_suffix()
        )
    }

    /// Explorer link for a transaction signature
    pub fn explorer_tx(&self, signature: &Signature) -> String {
        format!(
            "https://explorer.solana.com/tx/{}{}",
            signature,
            self.query_suffix()
        )
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" | "mainnet-beta" => Ok(Cluster::Mainnet),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            other => Err(LaunchError::InvalidParameters(format!(
                "unknown cluster: {}",
                other
            ))),
        }
    }
}

/// Configuration for connecting to the ledger and the storage gateway
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Storage gateway URL for image and metadata uploads
    pub storage_url: String,

    /// Cluster label for explorer links
    pub cluster: Cluster,

    /// Transaction commitment level
    pub commitment: CommitmentConfig,

    /// Connect/upload timeout for the storage gateway, in seconds
    pub storage_timeout_secs: u64,
}

impl LaunchConfig {
    pub fn devnet() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            storage_url: "https://devnet.bundlr.network".to_string(),
            cluster: Cluster::Devnet,
            commitment: CommitmentConfig::confirmed(),
            storage_timeout_secs: 60,
        }
    }

    pub fn mainnet() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            storage_url: "https://node1.bundlr.network".to_string(),
            cluster: Cluster::Mainnet,
            commitment: CommitmentConfig::confirmed(),
            storage_timeout_secs: 60,
        }
    }

    pub fn localnet() -> Self {
        Self {
            rpc_url: "http://localhost:8899".to_string(),
            storage_url: "http://localhost:1984".to_string(),
            cluster: Cluster::Localnet,
            commitment: CommitmentConfig::confirmed(),
            storage_timeout_secs: 60,
        }
    }

    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = url.into();
        self
    }

    pub fn with_storage_url(mut self, url: impl Into<String>) -> Self {
        self.storage_url = url.into();
        self
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = cluster;
        self
    }

    pub fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.storage_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devnet_links_carry_the_cluster_label() {
        let address = Pubkey::new_unique();
        let url = Cluster::Devnet.explorer_address(&address);
        assert_eq!(
            url,
            format!(
                "https://explorer.solana.com/address/{}?cluster=devnet",
                address
            )
        );
    }

    #[test]
    fn mainnet_links_have_no_suffix() {
        let signature = Signature::default();
        let url = Cluster::Mainnet.explorer_tx(&signature);
        assert_eq!(
            url,
            format!("https://explorer.solana.com/tx/{}", signature)
        );
    }

    #[test]
    fn cluster_labels_parse() {
        assert_eq!("devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("mainnet-beta".parse::<Cluster>().unwrap(), Cluster::Mainnet);
        assert!("betanet".parse::<Cluster>().is_err());
    }
}
