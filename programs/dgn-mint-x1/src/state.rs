use anchor_lang::prelude::*;

/// Per-deployment mint configuration. `bound_asset_id` is fixed once at
/// `initialize` and never changes: this program mints exactly one asset for
/// its lifetime. A different asset means a different deployment of this same
/// program, not a runtime branch here.
#[account]
#[derive(InitSpace)]
pub struct MintState {
    pub authority: Pubkey,
    pub destination_mint: Pubkey,
    pub fee_per_validator: u64,
    pub light_client_program: Pubkey,
    pub bound_asset_id: u8,
    pub processed_burns_count: u64,
    pub total_minted: u64,
    pub bump: u8,
}

/// Replay-protection record for a `(asset_id, burn_nonce, user)` tuple. Its
/// atomic PDA creation during `mint_from_burn_v3` is the only
/// replay-protection mechanism this program needs.
#[account]
#[derive(InitSpace)]
pub struct ProcessedBurn {
    pub asset_id: u8,
    pub burn_nonce: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub processed_at: i64,
}

pub const MINT_STATE_SEED: &[u8] = b"mint_state";
pub const PROCESSED_BURN_SEED: &[u8] = b"processed_burn_v3";
