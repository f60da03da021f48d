use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::errors::MintError;
use crate::state::{MintState, MINT_STATE_SEED};
use solana_light_client_x1::asset::registry_entry_for;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + MintState::INIT_SPACE,
        seeds = [MINT_STATE_SEED],
        bump
    )]
    pub mint_state: Account<'info, MintState>,

    /// Destination-chain mint this program is authorized to mint into.
    pub destination_mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Deploy-time initialization. `bound_asset_id` fixes this deployment to a
/// single asset for its lifetime.
pub fn handler(
    ctx: Context<Initialize>,
    light_client_program: Pubkey,
    bound_asset_id: u8,
    fee_per_validator: u64,
) -> Result<()> {
    require!(registry_entry_for(bound_asset_id).is_some(), MintError::AssetNotMintable);

    let state = &mut ctx.accounts.mint_state;
    state.authority = ctx.accounts.authority.key();
    state.destination_mint = ctx.accounts.destination_mint.key();
    state.fee_per_validator = fee_per_validator;
    state.light_client_program = light_client_program;
    state.bound_asset_id = bound_asset_id;
    state.processed_burns_count = 0;
    state.total_minted = 0;
    state.bump = ctx.bumps.mint_state;

    msg!("mint program initialized: asset_id={} authority={}", bound_asset_id, state.authority);

    Ok(())
}
