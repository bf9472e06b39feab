//! Metadata workflow service: storage uploads and on-chain metadata

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mpl_token_metadata::accounts::Metadata;
use mpl_token_metadata::types::DataV2;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

use crate::error::{LaunchError, LaunchResult};
use crate::instructions;
use crate::pda::find_metadata_address;
use crate::storage::StorageClient;
use crate::types::{MetadataResult, OffchainMetadata, OnchainMetadata};

use super::BaseClient;

/// Parameters for creating or updating token metadata
#[derive(Debug, Clone)]
pub struct MetadataParams {
    pub name: String,
    pub symbol: String,
    /// Only part of the off-chain document, never submitted on-chain
    pub description: String,
    /// Path of the image file to upload
    pub image_path: PathBuf,
    pub seller_fee_basis_points: u16,
}

/// Metadata operations of the launch workflow
pub struct MetadataService {
    base: Arc<BaseClient>,
    storage: Arc<StorageClient>,
}

impl MetadataService {
    pub fn new(base: Arc<BaseClient>, storage: Arc<StorageClient>) -> Self {
        Self { base, storage }
    }

    /// Metadata PDA of a mint
    pub fn metadata_address(&self, mint: &Pubkey) -> Pubkey {
        find_metadata_address(mint).0
    }

    /// Read back the on-chain metadata of a mint, None when absent
    pub fn fetch(&self, mint: &Pubkey) -> LaunchResult<Option<OnchainMetadata>> {
        let address = self.metadata_address(mint);
        let Some(account) = self.base.get_account(&address)? else {
            return Ok(None);
        };
        let metadata = Metadata::safe_deserialize(&account.data)
            .map_err(|e| LaunchError::Deserialization(format!("metadata {}: {}", address, e)))?;
        Ok(Some(OnchainMetadata {
            name: trim_padding(&metadata.name),
            symbol: trim_padding(&metadata.symbol),
            uri: trim_padding(&metadata.uri),
            update_authority: metadata.update_authority,
        }))
    }

    /// Upload assets and create the metadata account of a mint.
    ///
    /// Refuses before any upload when metadata already exists; use
    /// [`MetadataService::update`] for that.
    pub fn create(
        &self,
        user: &Keypair,
        mint: &Pubkey,
        params: &MetadataParams,
    ) -> LaunchResult<MetadataResult> {
        let metadata_address = self.metadata_address(mint);
        ensure_no_metadata(mint, self.base.account_exists(&metadata_address)?)?;
        let (image_uri, metadata_uri) = self.upload_assets(params)?;
        let data = build_data(params, metadata_uri.clone());
        let ix = instructions::create_metadata(mint, &user.pubkey(), data);
        let signature = self.base.send_and_confirm(&[ix], user, &[])?;
        Ok(MetadataResult {
            metadata_address,
            image_uri,
            metadata_uri,
            signature,
        })
    }

    /// Re-upload assets and rewrite the metadata account of a mint.
    ///
    /// The metadata address is derived from the mint and stays the same;
    /// only its contents and the referenced URIs change. Fails when no
    /// metadata exists yet.
    pub fn update(
        &self,
        user: &Keypair,
        mint: &Pubkey,
        params: &MetadataParams,
    ) -> LaunchResult<MetadataResult> {
        let metadata_address = self.metadata_address(mint);
        ensure_metadata(mint, self.base.account_exists(&metadata_address)?)?;
        let (image_uri, metadata_uri) = self.upload_assets(params)?;
        let data = build_data(params, metadata_uri.clone());
        let ix = instructions::update_metadata(mint, &user.pubkey(), data);
        let signature = self.base.send_and_confirm(&[ix], user, &[])?;
        Ok(MetadataResult {
            metadata_address,
            image_uri,
            metadata_uri,
            signature,
        })
    }

    /// Image upload, then metadata JSON upload. The image file is read
    /// first so a missing path aborts before any network call.
    fn upload_assets(&self, params: &MetadataParams) -> LaunchResult<(String, String)> {
        let bytes = read_image(&params.image_path)?;
        let file_name = image_file_name(&params.image_path)?;
        let image_uri = self.storage.upload(&bytes, &file_name)?;
        let document = OffchainMetadata {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            description: params.description.clone(),
            image: image_uri.clone(),
        };
        let metadata_uri = self.storage.upload_metadata(&document)?;
        Ok((image_uri, metadata_uri))
    }
}

/// Create refuses when metadata already exists for the mint
fn ensure_no_metadata(mint: &Pubkey, exists: bool) -> LaunchResult<()> {
    if exists {
        return Err(LaunchError::AlreadyInitialized(*mint));
    }
    Ok(())
}

/// Update requires metadata to exist already
fn ensure_metadata(mint: &Pubkey, exists: bool) -> LaunchResult<()> {
    if exists {
        return Ok(());
    }
    Err(LaunchError::MetadataNotFound(*mint))
}

/// Read the image file, distinguishing a missing file from other I/O errors
fn read_image(path: &Path) -> LaunchResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LaunchError::FileNotFound(path.display().to_string()),
        _ => LaunchError::Io(e.to_string()),
    })
}

fn image_file_name(path: &Path) -> LaunchResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            LaunchError::InvalidParameters(format!("not a file path: {}", path.display()))
        })
}

fn build_data(params: &MetadataParams, uri: String) -> DataV2 {
    DataV2 {
        name: params.name.clone(),
        symbol: params.symbol.clone(),
        uri,
        seller_fee_basis_points: params.seller_fee_basis_points,
        creators: None,
        collection: None,
        uses: None,
    }
}

/// On-chain strings are stored padded to a fixed width
fn trim_padding(s: &str) -> String {
    s.trim_end_matches('\0').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn params(image_path: PathBuf) -> MetadataParams {
        MetadataParams {
            name: "Token".to_string(),
            symbol: "TKX".to_string(),
            description: "a token".to_string(),
            image_path,
            seller_fee_basis_points: 0,
        }
    }

    #[test]
    fn create_refuses_existing_metadata() {
        let mint = Pubkey::new_unique();
        assert!(ensure_no_metadata(&mint, false).is_ok());
        assert!(matches!(
            ensure_no_metadata(&mint, true),
            Err(LaunchError::AlreadyInitialized(m)) if m == mint
        ));
    }

    #[test]
    fn update_requires_existing_metadata() {
        let mint = Pubkey::new_unique();
        assert!(ensure_metadata(&mint, true).is_ok());
        assert!(matches!(
            ensure_metadata(&mint, false),
            Err(LaunchError::MetadataNotFound(m)) if m == mint
        ));
    }

    #[test]
    fn missing_image_is_a_file_not_found() {
        let path = Path::new("/definitely/not/here/poop.png");
        assert!(matches!(
            read_image(path),
            Err(LaunchError::FileNotFound(p)) if p.contains("poop.png")
        ));
    }

    #[test]
    fn existing_image_reads_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not really a png").unwrap();
        let bytes = read_image(file.path()).unwrap();
        assert_eq!(bytes, b"not really a png");
    }

    #[test]
    fn file_name_comes_from_the_path() {
        assert_eq!(
            image_file_name(Path::new("assets/poop.png")).unwrap(),
            "poop.png"
        );
        assert!(image_file_name(Path::new("/")).is_err());
    }

    #[test]
    fn onchain_data_carries_the_metadata_uri() {
        let params = params(PathBuf::from("assets/poop.png"));
        let data = build_data(&params, "https://arweave.net/doc".to_string());
        assert_eq!(data.name, "Token");
        assert_eq!(data.symbol, "TKX");
        assert_eq!(data.uri, "https://arweave.net/doc");
        assert_eq!(data.seller_fee_basis_points, 0);
        assert!(data.creators.is_none());
        assert!(data.collection.is_none());
        assert!(data.uses.is_none());
    }

    #[test]
    fn padded_strings_are_trimmed() {
        assert_eq!(trim_padding("TKX\0\0\0\0"), "TKX");
        assert_eq!(trim_padding("TKX"), "TKX");
    }
}
