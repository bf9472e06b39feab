//! Launchpad error types

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::workflow::Step;

/// Error type for launchpad operations
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Network or validation failure reported by the ledger RPC client
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Storage gateway upload failure
    #[error("storage upload failed: {0}")]
    StorageUpload(String),

    /// A caller-supplied file path does not exist
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Any other local I/O failure
    #[error("I/O error: {0}")]
    Io(String),

    /// The signer does not hold the mint authority
    #[error("signer {signer} is not the mint authority of {mint}")]
    AuthorityMismatch { mint: Pubkey, signer: Pubkey },

    /// The source account cannot cover the scaled amount
    #[error("insufficient balance: need {required} base units, account holds {available}")]
    InsufficientBalance { required: u64, available: u64 },

    /// Metadata already exists for this mint
    #[error("metadata already initialized for mint {0}")]
    AlreadyInitialized(Pubkey),

    /// No metadata account exists for this mint
    #[error("no metadata account found for mint {0}")]
    MetadataNotFound(Pubkey),

    /// Amounts must be strictly positive
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// Scaling a human amount into base units overflowed
    #[error("amount {amount} with {decimals} decimals overflows u64")]
    AmountOverflow { amount: u64, decimals: u8 },

    /// Account not found
    #[error("account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Deserialization error
    #[error("failed to deserialize account data: {0}")]
    Deserialization(String),

    /// A workflow step was selected before one it depends on
    #[error("step {step} is out of order: {requires} must run first")]
    StepOrder { step: Step, requires: Step },

    /// A workflow step needs a mint and none is available
    #[error("step {step} needs a mint: run create-mint first or pass an existing one")]
    MissingMint { step: Step },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl From<solana_client::client_error::ClientError> for LaunchError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        LaunchError::Rpc(err.to_string())
    }
}

impl From<solana_sdk::program_error::ProgramError> for LaunchError {
    fn from(err: solana_sdk::program_error::ProgramError) -> Self {
        LaunchError::InvalidParameters(err.to_string())
    }
}

pub type LaunchResult<T> = Result<T, LaunchError>;
