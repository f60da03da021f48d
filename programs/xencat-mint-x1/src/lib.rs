use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("8kmoPKtLAjjzQRN5i4emUsmWeu3LM5yPWFrsqZVyekhk");

#[program]
pub mod xencat_mint_x1 {
    use super::*;

    /// Deploy-time initialization. Binds this program to one asset for its
    /// lifetime.
    pub fn initialize(
        ctx: Context<Initialize>,
        light_client_program: Pubkey,
        bound_asset_id: u8,
        fee_per_validator: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, light_client_program, bound_asset_id, fee_per_validator)
    }

    /// Mint tokens for a burn the light client has already verified.
    pub fn mint_from_burn_v3<'info>(
        ctx: Context<'_, '_, '_, 'info, MintFromBurnV3<'info>>,
        asset_id: u8,
        burn_nonce: u64,
    ) -> Result<()> {
        instructions::mint_from_burn_v3::handler(ctx, asset_id, burn_nonce)
    }
}
