//! Account state and step result types threaded between workflow steps

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

/// On-chain state of a token mint
#[derive(Debug, Clone, Copy)]
pub struct MintInfo {
    pub address: Pubkey,
    pub decimals: u8,
    pub supply: u64,
    pub mint_authority: Option<Pubkey>,
    pub freeze_authority: Option<Pubkey>,
}

/// On-chain state of a token account
#[derive(Debug, Clone, Copy)]
pub struct TokenAccountInfo {
    pub address: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

/// Result of the create-mint step
#[derive(Debug, Clone)]
pub struct CreateMintResult {
    pub mint: Pubkey,
    pub decimals: u8,
    pub signature: Signature,
}

/// Result of the get-or-create token account step
#[derive(Debug, Clone)]
pub struct TokenAccountResult {
    pub address: Pubkey,
    /// false when the account already existed
    pub created: bool,
    pub signature: Option<Signature>,
}

/// Result of the mint-supply step
#[derive(Debug, Clone)]
pub struct MintSupplyResult {
    pub signature: Signature,
    pub base_units: u64,
    pub decimals: u8,
}

/// Result of the transfer step
#[derive(Debug, Clone)]
pub struct TransferResult {
    pub signature: Signature,
    pub base_units: u64,
    pub decimals: u8,
}

/// Result of a metadata create or update submission
#[derive(Debug, Clone)]
pub struct MetadataResult {
    /// Derived from the mint; identical across create and update
    pub metadata_address: Pubkey,
    pub image_uri: String,
    pub metadata_uri: String,
    pub signature: Signature,
}

/// Fields read back from an on-chain metadata account
#[derive(Debug, Clone)]
pub struct OnchainMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub update_authority: Pubkey,
}

/// Off-chain metadata document uploaded to the storage gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffchainMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    /// URI of the previously uploaded image
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offchain_document_shape() {
        let document = OffchainMetadata {
            name: "Token".to_string(),
            symbol: "TKX".to_string(),
            description: "a token".to_string(),
            image: "https://arweave.net/abc".to_string(),
        };
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["name"], "Token");
        assert_eq!(value["symbol"], "TKX");
        assert_eq!(value["description"], "a token");
        assert_eq!(value["image"], "https://arweave.net/abc");
    }
}
