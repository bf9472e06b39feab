//! Client services for the launch workflow

pub mod base;
pub mod metadata;
pub mod token;

use std::sync::Arc;

use crate::config::LaunchConfig;
use crate::error::LaunchResult;
use crate::storage::StorageClient;

pub use base::BaseClient;
pub use metadata::{MetadataParams, MetadataService};
pub use token::TokenService;

/// Launchpad client with service-based architecture
pub struct LaunchClient {
    /// Base RPC client
    pub base: Arc<BaseClient>,
    /// Token operations service
    pub token: TokenService,
    /// Metadata operations service
    pub metadata: MetadataService,
    /// Storage gateway client
    pub storage: Arc<StorageClient>,
    /// Connection configuration
    pub config: LaunchConfig,
}

impl LaunchClient {
    /// Create a new client from a configuration
    pub fn new(config: LaunchConfig) -> LaunchResult<Self> {
        let base = Arc::new(BaseClient::new(&config.rpc_url, config.commitment));
        let storage = Arc::new(StorageClient::new(
            &config.storage_url,
            config.storage_timeout(),
        ));
        Ok(Self {
            token: TokenService::new(base.clone()),
            metadata: MetadataService::new(base.clone(), storage.clone()),
            base,
            storage,
            config,
        })
    }

    /// Get the RPC endpoint
    pub fn rpc_url(&self) -> String {
        self.base.rpc_url()
    }
}
