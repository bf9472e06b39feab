//! Test the instruction builders used by the launch workflow

#[cfg(test)]
mod tests {
    use mpl_token_metadata::types::DataV2;
    use solana_sdk::pubkey::Pubkey;
    use token_launchpad::utils::to_base_units;
    use token_launchpad::{instructions, pda};

    fn data(name: &str, symbol: &str, uri: &str) -> DataV2 {
        DataV2 {
            name: name.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        }
    }

    #[test]
    fn create_mint_pairs_account_creation_with_initialization() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let ixs = instructions::create_mint(&payer, &mint, &authority, Some(&authority), 2, 1)
            .unwrap();

        assert_eq!(ixs.len(), 2);
        assert_eq!(ixs[0].program_id, solana_sdk::system_program::id());
        assert_eq!(ixs[1].program_id, spl_token::id());
        // InitializeMint2 carries the decimals right after the tag
        assert_eq!(ixs[1].data[0], 20);
        assert_eq!(ixs[1].data[1], 2);
    }

    #[test]
    fn mint_to_carries_the_scaled_amount() {
        let mint = Pubkey::new_unique();
        let destination = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        // 100 whole tokens on a 2-decimals mint
        let base_units = to_base_units(100, 2).unwrap();
        assert_eq!(base_units, 10_000);

        let ix = instructions::mint_to(&mint, &destination, &authority, base_units).unwrap();
        assert_eq!(ix.program_id, spl_token::id());
        // MintTo layout: tag, u64 amount little-endian
        assert_eq!(ix.data[0], 7);
        assert_eq!(&ix.data[1..9], &10_000u64.to_le_bytes());
    }

    #[test]
    fn transfer_encodes_amount_and_decimals() {
        let source = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let destination = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let ix =
            instructions::transfer(&source, &mint, &destination, &owner, 5_000, 2).unwrap();
        assert_eq!(ix.program_id, spl_token::id());
        // TransferChecked layout: tag, u64 amount little-endian, decimals
        assert_eq!(ix.data[0], 12);
        assert_eq!(&ix.data[1..9], &5_000u64.to_le_bytes());
        assert_eq!(ix.data[9], 2);
    }

    #[test]
    fn create_metadata_targets_the_derived_address() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let (metadata, _) = pda::find_metadata_address(&mint);

        let ix = instructions::create_metadata(&mint, &authority, data("Token", "TKX", "uri"));

        assert_eq!(ix.program_id, mpl_token_metadata::ID);
        assert_eq!(ix.accounts[0].pubkey, metadata);
        assert_eq!(ix.accounts[1].pubkey, mint);
        assert!(!ix.data.is_empty());
    }

    #[test]
    fn update_metadata_reuses_the_same_address() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let (metadata, _) = pda::find_metadata_address(&mint);

        let create = instructions::create_metadata(&mint, &authority, data("Token", "TKX", "a"));
        let update = instructions::update_metadata(&mint, &authority, data("Token v2", "TKX", "b"));

        // The metadata address is derived from the mint and never changes
        assert_eq!(create.accounts[0].pubkey, metadata);
        assert_eq!(update.accounts[0].pubkey, metadata);
        assert_eq!(update.accounts[1].pubkey, authority);
        assert!(update.accounts[1].is_signer);
    }
}
