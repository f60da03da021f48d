use anchor_lang::prelude::*;

use crate::errors::LightClientError;

/// Bridgeable asset identifier.
///
/// IDs are global, permanent, and never reused. A new bridgeable asset means
/// a new variant here and a new mint program with its own `bound_asset_id`,
/// never a new branch inside an existing mint program.
#[repr(u8)]
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    Xencat = 1,
    Dgn = 2,
}

impl Asset {
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Asset::Xencat),
            2 => Ok(Asset::Dgn),
            _ => Err(error!(LightClientError::UnknownAsset)),
        }
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn registry_entry(&self) -> &'static AssetEntry {
        registry_entry_for(self.id()).expect("every Asset variant has a registry entry")
    }
}

/// Compile-time `{asset_id -> (source_mint, destination_mint, mint_program)}`
/// mapping. Identical across the light client, both mint programs, and the
/// off-chain validator service; a mismatch between deployments is a
/// deployment bug, not a runtime condition this program can detect.
#[derive(Clone, Copy, Debug)]
pub struct AssetEntry {
    pub asset: Asset,
    pub source_mint: Pubkey,
    pub destination_mint: Pubkey,
    pub mint_program: Pubkey,
}

pub const ASSET_REGISTRY: &[AssetEntry] = &[
    AssetEntry {
        asset: Asset::Xencat,
        source_mint: Pubkey::new_from_array(*b"XENCATsourcemint1111111111111111"),
        destination_mint: Pubkey::new_from_array(*b"XENCATdestmint111111111111111111"),
        mint_program: Pubkey::new_from_array(*b"XENCATmintprogram111111111111111"),
    },
    AssetEntry {
        asset: Asset::Dgn,
        source_mint: Pubkey::new_from_array(*b"DGNsourcemint1111111111111111111"),
        destination_mint: Pubkey::new_from_array(*b"DGNdestmint111111111111111111111"),
        mint_program: Pubkey::new_from_array(*b"DGNmintprogram111111111111111111"),
    },
];

pub fn registry_entry_for(asset_id: u8) -> Option<&'static AssetEntry> {
    ASSET_REGISTRY.iter().find(|e| e.asset.id() == asset_id)
}

pub fn registry_entry_for_source_mint(source_mint: &Pubkey) -> Option<&'static AssetEntry> {
    ASSET_REGISTRY.iter().find(|e| &e.source_mint == source_mint)
}
