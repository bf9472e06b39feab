//! Base RPC client wrapper

use solana_client::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

use crate::error::{LaunchError, LaunchResult};
use crate::types::{MintInfo, TokenAccountInfo};

/// Blocking RPC wrapper shared by the workflow services.
///
/// Every step suspends until its network call resolves; there is no retry
/// or cancellation, failures propagate to the caller unchanged.
pub struct BaseClient {
    rpc: RpcClient,
    commitment: CommitmentConfig,
}

impl BaseClient {
    pub fn new(rpc_url: &str, commitment: CommitmentConfig) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url.to_string(), commitment),
            commitment,
        }
    }

    pub fn rpc_url(&self) -> String {
        self.rpc.url()
    }

    /// Fetch an account, None when it does not exist
    pub fn get_account(&self, address: &Pubkey) -> LaunchResult<Option<Account>> {
        Ok(self
            .rpc
            .get_account_with_commitment(address, self.commitment)?
            .value)
    }

    pub fn account_exists(&self, address: &Pubkey) -> LaunchResult<bool> {
        Ok(self.get_account(address)?.is_some())
    }

    /// Fetch and unpack a mint account. Decimals always comes from here,
    /// never from a cached descriptor.
    pub fn get_mint(&self, mint: &Pubkey) -> LaunchResult<MintInfo> {
        let account = self
            .get_account(mint)?
            .ok_or(LaunchError::AccountNotFound(*mint))?;
        let state = spl_token::state::Mint::unpack(&account.data)
            .map_err(|e| LaunchError::Deserialization(format!("mint {}: {}", mint, e)))?;
        Ok(MintInfo {
            address: *mint,
            decimals: state.decimals,
            supply: state.supply,
            mint_authority: state.mint_authority.into(),
            freeze_authority: state.freeze_authority.into(),
        })
    }

    /// Fetch and unpack a token account, None when it does not exist
    pub fn get_token_account(
        &self,
        address: &Pubkey,
    ) -> LaunchResult<Option<TokenAccountInfo>> {
        let Some(account) = self.get_account(address)? else {
            return Ok(None);
        };
        let state = spl_token::state::Account::unpack(&account.data).map_err(|e| {
            LaunchError::Deserialization(format!("token account {}: {}", address, e))
        })?;
        Ok(Some(TokenAccountInfo {
            address: *address,
            mint: state.mint,
            owner: state.owner,
            amount: state.amount,
        }))
    }

    pub fn get_balance(&self, address: &Pubkey) -> LaunchResult<u64> {
        Ok(self.rpc.get_balance(address)?)
    }

    pub fn minimum_rent(&self, space: usize) -> LaunchResult<u64> {
        Ok(self.rpc.get_minimum_balance_for_rent_exemption(space)?)
    }

    /// Sign and submit a transaction, blocking until confirmed.
    /// Extra signers already covered by the payer are dropped.
    pub fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        payer: &Keypair,
        extra_signers: &[&Keypair],
    ) -> LaunchResult<Signature> {
        let blockhash = self.rpc.get_latest_blockhash()?;
        let mut signers: Vec<&Keypair> = vec![payer];
        for signer in extra_signers {
            if signers.iter().all(|s| s.pubkey() != signer.pubkey()) {
                signers.push(signer);
            }
        }
        let transaction = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &signers,
            blockhash,
        );
        Ok(self.rpc.send_and_confirm_transaction(&transaction)?)
    }
}
