use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::errors::MintError;
use crate::state::{MintState, ProcessedBurn, MINT_STATE_SEED, PROCESSED_BURN_SEED};
use solana_light_client_x1::{ValidatorSet, VerifiedBurn, VERIFIED_BURN_SEED, ID as LIGHT_CLIENT_ID};

#[derive(Accounts)]
#[instruction(asset_id: u8, burn_nonce: u64)]
pub struct MintFromBurnV3<'info> {
    #[account(
        mut,
        seeds = [MINT_STATE_SEED],
        bump = mint_state.bump
    )]
    pub mint_state: Account<'info, MintState>,

    #[account(
        mut,
        address = mint_state.destination_mint
    )]
    pub destination_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = user,
        space = 8 + ProcessedBurn::INIT_SPACE,
        seeds = [
            PROCESSED_BURN_SEED,
            asset_id.to_le_bytes().as_ref(),
            burn_nonce.to_le_bytes().as_ref(),
            user.key().as_ref()
        ],
        bump
    )]
    pub processed_burn: Account<'info, ProcessedBurn>,

    #[account(
        mut,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(owner = LIGHT_CLIENT_ID)]
    pub validator_set: Account<'info, ValidatorSet>,

    #[account(
        mut,
        seeds = [
            VERIFIED_BURN_SEED,
            asset_id.to_le_bytes().as_ref(),
            user.key().as_ref(),
            burn_nonce.to_le_bytes().as_ref()
        ],
        bump = verified_burn.bump,
        seeds::program = LIGHT_CLIENT_ID,
        constraint = verified_burn.user == user.key() @ MintError::InvalidVerifiedBurn,
        constraint = verified_burn.burn_nonce == burn_nonce @ MintError::InvalidVerifiedBurn,
        constraint = verified_burn.asset_id == asset_id @ MintError::InvalidVerifiedBurn,
    )]
    pub verified_burn: Account<'info, VerifiedBurn>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Mints tokens for a burn the light client has already verified.
///
/// 1. `asset_id` must match this deployment's `bound_asset_id` (a DGN proof
///    cannot mint XENCAT and vice versa).
/// 2. `verified_burn` is read, never re-verified. Its existence at this PDA
///    is the full verification result from `submit_burn_attestation_v3`.
/// 3. `processed_burn`'s atomic `init` is the entire replay guard: a second
///    call with the same `(asset_id, burn_nonce, user)` fails here.
/// 4. Mint the verified amount, then distribute `fee_per_validator` from the
///    user to each current validator via `remaining_accounts`.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, MintFromBurnV3<'info>>,
    asset_id: u8,
    burn_nonce: u64,
) -> Result<()> {
    require!(
        asset_id == ctx.accounts.mint_state.bound_asset_id,
        MintError::AssetNotMintable
    );

    let verified = &ctx.accounts.verified_burn;
    let mint_state = &ctx.accounts.mint_state;
    let amount = verified.amount;

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.destination_mint.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.mint_state.to_account_info(),
            },
            &[&[MINT_STATE_SEED, &[mint_state.bump]]],
        ),
        amount,
    )?;

    let processed = &mut ctx.accounts.processed_burn;
    processed.asset_id = asset_id;
    processed.burn_nonce = burn_nonce;
    processed.user = ctx.accounts.user.key();
    processed.amount = amount;
    processed.processed_at = Clock::get()?.unix_timestamp;

    let validator_set = &ctx.accounts.validator_set;
    let fee_per_validator = mint_state.fee_per_validator;
    let total_fee = fee_per_validator
        .checked_mul(validator_set.validators.len() as u64)
        .ok_or(MintError::Overflow)?;

    for (i, validator_pubkey) in validator_set.validators.iter().enumerate() {
        let validator_account = ctx
            .remaining_accounts
            .get(i)
            .ok_or(MintError::MissingValidatorAccount)?;

        require!(
            validator_account.key() == *validator_pubkey,
            MintError::InvalidValidatorAccount
        );
        require!(
            validator_account.is_writable,
            MintError::ValidatorAccountNotWritable
        );

        if fee_per_validator > 0 {
            let fee_transfer = anchor_lang::solana_program::system_instruction::transfer(
                ctx.accounts.user.key,
                validator_account.key,
                fee_per_validator,
            );

            anchor_lang::solana_program::program::invoke(
                &fee_transfer,
                &[
                    ctx.accounts.user.to_account_info(),
                    validator_account.to_account_info(),
                ],
            )?;
        }
    }

    if fee_per_validator > 0 {
        msg!("distributed {} lamports across {} validators", total_fee, validator_set.validators.len());
    }

    let mint_state = &mut ctx.accounts.mint_state;
    mint_state.processed_burns_count = mint_state.processed_burns_count.saturating_add(1);
    mint_state.total_minted = mint_state.total_minted.saturating_add(amount);

    emit!(MintedFromBurn {
        asset_id,
        burn_nonce,
        user: ctx.accounts.user.key(),
        amount,
    });

    msg!(
        "minted {} tokens: asset_id={} nonce={} total_minted={}",
        amount,
        asset_id,
        burn_nonce,
        mint_state.total_minted
    );

    Ok(())
}

#[event]
pub struct MintedFromBurn {
    pub asset_id: u8,
    pub burn_nonce: u64,
    pub user: Pubkey,
    pub amount: u64,
}
