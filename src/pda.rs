//! Address derivation helpers

use solana_sdk::pubkey::Pubkey;

/// Derive the metadata PDA for a mint.
///
/// One metadata address exists per mint; it is recomputed on demand and
/// never stored.
pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            b"metadata",
            mpl_token_metadata::ID.as_ref(),
            mint.as_ref(),
        ],
        &mpl_token_metadata::ID,
    )
}

/// Associated token account address for an owner and mint
pub fn find_associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(owner, mint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_address_is_stable_per_mint() {
        let mint = Pubkey::new_unique();
        let (first, _) = find_metadata_address(&mint);
        let (second, _) = find_metadata_address(&mint);
        assert_eq!(first, second);

        let (other, _) = find_metadata_address(&Pubkey::new_unique());
        assert_ne!(first, other);
    }

    #[test]
    fn associated_account_derivation_is_idempotent() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        assert_eq!(
            find_associated_token_address(&owner, &mint),
            find_associated_token_address(&owner, &mint)
        );
        assert_ne!(
            find_associated_token_address(&owner, &mint),
            find_associated_token_address(&Pubkey::new_unique(), &mint)
        );
    }
}
