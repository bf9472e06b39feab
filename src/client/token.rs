//! Token workflow service: mint creation, accounts, supply, transfers

use std::sync::Arc;

use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

use crate::error::{LaunchError, LaunchResult};
use crate::instructions;
use crate::pda::find_associated_token_address;
use crate::types::{
    CreateMintResult, MintInfo, MintSupplyResult, TokenAccountInfo, TokenAccountResult,
    TransferResult,
};
use crate::utils::to_base_units;

use super::BaseClient;

/// Token operations of the launch workflow
pub struct TokenService {
    base: Arc<BaseClient>,
}

impl TokenService {
    pub fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Create and initialize a new mint
    pub fn create_mint(
        &self,
        payer: &Keypair,
        mint_authority: &Pubkey,
        freeze_authority: Option<&Pubkey>,
        decimals: u8,
    ) -> LaunchResult<CreateMintResult> {
        let mint = Keypair::new();
        let rent = self.base.minimum_rent(spl_token::state::Mint::LEN)?;
        let ixs = instructions::create_mint(
            &payer.pubkey(),
            &mint.pubkey(),
            mint_authority,
            freeze_authority,
            decimals,
            rent,
        )?;
        let signature = self.base.send_and_confirm(&ixs, payer, &[&mint])?;
        Ok(CreateMintResult {
            mint: mint.pubkey(),
            decimals,
            signature,
        })
    }

    /// Get or create the associated token account of an owner.
    /// Calling this twice with the same (mint, owner) yields the same
    /// address both times.
    pub fn create_token_account(
        &self,
        payer: &Keypair,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> LaunchResult<TokenAccountResult> {
        let address = find_associated_token_address(owner, mint);
        if self.base.account_exists(&address)? {
            return Ok(TokenAccountResult {
                address,
                created: false,
                signature: None,
            });
        }
        let ix = instructions::create_associated_token_account(&payer.pubkey(), owner, mint);
        let signature = self.base.send_and_confirm(&[ix], payer, &[])?;
        Ok(TokenAccountResult {
            address,
            created: true,
            signature: Some(signature),
        })
    }

    /// Mint whole tokens to a token account. The signer must hold the mint
    /// authority; the amount is scaled by the mint's current decimals.
    pub fn mint_supply(
        &self,
        payer: &Keypair,
        authority: &Keypair,
        mint: &Pubkey,
        destination: &Pubkey,
        amount: u64,
    ) -> LaunchResult<MintSupplyResult> {
        let info = self.base.get_mint(mint)?;
        check_mint_authority(&info, &authority.pubkey())?;
        let base_units = to_base_units(amount, info.decimals)?;
        let ix = instructions::mint_to(mint, destination, &authority.pubkey(), base_units)?;
        let signature = self.base.send_and_confirm(&[ix], payer, &[authority])?;
        Ok(MintSupplyResult {
            signature,
            base_units,
            decimals: info.decimals,
        })
    }

    /// Transfer whole tokens between token accounts of a mint
    pub fn transfer(
        &self,
        payer: &Keypair,
        owner: &Keypair,
        mint: &Pubkey,
        source: &Pubkey,
        destination: &Pubkey,
        amount: u64,
    ) -> LaunchResult<TransferResult> {
        let info = self.base.get_mint(mint)?;
        let base_units = to_base_units(amount, info.decimals)?;
        let source_account = self
            .base
            .get_token_account(source)?
            .ok_or(LaunchError::AccountNotFound(*source))?;
        check_balance(&source_account, base_units)?;
        let ix = instructions::transfer(
            source,
            mint,
            destination,
            &owner.pubkey(),
            base_units,
            info.decimals,
        )?;
        let signature = self.base.send_and_confirm(&[ix], payer, &[owner])?;
        Ok(TransferResult {
            signature,
            base_units,
            decimals: info.decimals,
        })
    }
}

/// The signer must match the mint's current authority
fn check_mint_authority(info: &MintInfo, signer: &Pubkey) -> LaunchResult<()> {
    match info.mint_authority {
        Some(authority) if authority == *signer => Ok(()),
        _ => Err(LaunchError::AuthorityMismatch {
            mint: info.address,
            signer: *signer,
        }),
    }
}

/// The source account must cover the scaled amount
fn check_balance(account: &TokenAccountInfo, required: u64) -> LaunchResult<()> {
    if account.amount < required {
        return Err(LaunchError::InsufficientBalance {
            required,
            available: account.amount,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mint_info(authority: Option<Pubkey>) -> MintInfo {
        MintInfo {
            address: Pubkey::new_unique(),
            decimals: 2,
            supply: 0,
            mint_authority: authority,
            freeze_authority: None,
        }
    }

    fn token_account(amount: u64) -> TokenAccountInfo {
        TokenAccountInfo {
            address: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount,
        }
    }

    #[test]
    fn authority_must_match_the_mint() {
        let authority = Pubkey::new_unique();
        let info = mint_info(Some(authority));
        assert!(check_mint_authority(&info, &authority).is_ok());

        let outsider = Pubkey::new_unique();
        assert!(matches!(
            check_mint_authority(&info, &outsider),
            Err(LaunchError::AuthorityMismatch { signer, .. }) if signer == outsider
        ));
    }

    #[test]
    fn fixed_supply_mints_reject_every_signer() {
        let info = mint_info(None);
        assert!(matches!(
            check_mint_authority(&info, &Pubkey::new_unique()),
            Err(LaunchError::AuthorityMismatch { .. })
        ));
    }

    #[test]
    fn balance_must_cover_the_scaled_amount() {
        let account = token_account(9_999);
        assert!(matches!(
            check_balance(&account, 10_000),
            Err(LaunchError::InsufficientBalance {
                required: 10_000,
                available: 9_999,
            })
        ));
    }

    #[test]
    fn exact_balance_is_sufficient() {
        let account = token_account(10_000);
        assert!(check_balance(&account, 10_000).is_ok());
    }
}
