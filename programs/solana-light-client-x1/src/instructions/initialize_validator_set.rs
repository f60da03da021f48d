use anchor_lang::prelude::*;

use crate::errors::LightClientError;
use crate::state::{ValidatorSet, VALIDATOR_SET_SEED};

#[derive(Accounts)]
pub struct InitializeValidatorSet<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + ValidatorSet::INIT_SPACE,
        seeds = [VALIDATOR_SET_SEED],
        bump
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    pub system_program: Program<'info, System>,
}

/// Deploy-time initialization of the validator set (run once per deployment).
pub fn handler(ctx: Context<InitializeValidatorSet>, validators: Vec<Pubkey>, threshold: u8) -> Result<()> {
    validate_validator_set(&validators, threshold)?;

    let validator_set = &mut ctx.accounts.validator_set;
    validator_set.version = 1;
    validator_set.validators = validators;
    validator_set.threshold = threshold;
    validator_set.bump = ctx.bumps.validator_set;

    msg!(
        "validator set initialized: version={} validators={} threshold={}",
        validator_set.version,
        validator_set.validators.len(),
        validator_set.threshold
    );

    Ok(())
}

pub fn validate_validator_set(validators: &[Pubkey], threshold: u8) -> Result<()> {
    require!(threshold > 0, LightClientError::InvalidThreshold);
    require!(
        (threshold as usize) <= validators.len(),
        LightClientError::InvalidThreshold
    );
    require!(
        validators.len() <= ValidatorSet::MAX_VALIDATORS,
        LightClientError::InvalidValidatorSet
    );

    let mut seen = std::collections::HashSet::new();
    for validator in validators {
        require!(seen.insert(*validator), LightClientError::InvalidValidatorSet);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_threshold() {
        let validators = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        assert!(validate_validator_set(&validators, 0).is_err());
    }

    #[test]
    fn rejects_threshold_above_validator_count() {
        let validators = vec![Pubkey::new_unique()];
        assert!(validate_validator_set(&validators, 2).is_err());
    }

    #[test]
    fn rejects_duplicate_validators() {
        let key = Pubkey::new_unique();
        assert!(validate_validator_set(&[key, key], 1).is_err());
    }

    #[test]
    fn accepts_three_of_five() {
        let validators: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
        assert!(validate_validator_set(&validators, 3).is_ok());
    }
}
