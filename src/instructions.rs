//! Instruction builders for the launch workflow
//!
//! Thin wrappers over the spl-token and mpl-token-metadata instruction
//! constructors, so the client services only deal in complete instructions.

use mpl_token_metadata::instructions::{
    CreateMetadataAccountV3Builder, UpdateMetadataAccountV2Builder,
};
use mpl_token_metadata::types::DataV2;
use solana_sdk::instruction::Instruction;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;
use spl_token::state::Mint;

use crate::error::LaunchResult;
use crate::pda::find_metadata_address;

/// Instructions creating and initializing a new mint account.
/// The mint keypair must co-sign the transaction.
pub fn create_mint(
    payer: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
    rent_lamports: u64,
) -> LaunchResult<Vec<Instruction>> {
    let create_account = system_instruction::create_account(
        payer,
        mint,
        rent_lamports,
        Mint::LEN as u64,
        &spl_token::id(),
    );
    let initialize = spl_token::instruction::initialize_mint2(
        &spl_token::id(),
        mint,
        mint_authority,
        freeze_authority,
        decimals,
    )?;
    Ok(vec![create_account, initialize])
}

/// Instruction creating the associated token account of an owner
pub fn create_associated_token_account(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    spl_associated_token_account::instruction::create_associated_token_account(
        payer,
        owner,
        mint,
        &spl_token::id(),
    )
}

/// Instruction minting base units to a token account
pub fn mint_to(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    base_units: u64,
) -> LaunchResult<Instruction> {
    Ok(spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        authority,
        &[],
        base_units,
    )?)
}

/// Instruction transferring base units between token accounts
pub fn transfer(
    source: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    base_units: u64,
    decimals: u8,
) -> LaunchResult<Instruction> {
    Ok(spl_token::instruction::transfer_checked(
        &spl_token::id(),
        source,
        mint,
        destination,
        owner,
        &[],
        base_units,
        decimals,
    )?)
}

/// Instruction creating the metadata account of a mint.
/// The authority acts as mint authority, payer and update authority.
pub fn create_metadata(mint: &Pubkey, authority: &Pubkey, data: DataV2) -> Instruction {
    let (metadata, _) = find_metadata_address(mint);
    CreateMetadataAccountV3Builder::new()
        .metadata(metadata)
        .mint(*mint)
        .mint_authority(*authority)
        .payer(*authority)
        .update_authority(*authority, true)
        .data(data)
        .is_mutable(true)
        .instruction()
}

/// Instruction rewriting the metadata account of a mint
pub fn update_metadata(mint: &Pubkey, update_authority: &Pubkey, data: DataV2) -> Instruction {
    let (metadata, _) = find_metadata_address(mint);
    UpdateMetadataAccountV2Builder::new()
        .metadata(metadata)
        .update_authority(*update_authority)
        .data(data)
        .new_update_authority(*update_authority)
        .primary_sale_happened(true)
        .is_mutable(true)
        .instruction()
}
