use anchor_lang::prelude::*;
use std::collections::HashSet;

use crate::asset::Asset;
use crate::errors::LightClientError;
use crate::message::build_canonical_message;
use crate::state::{AttestationBundle, ValidatorSet, VerifiedBurn, VALIDATOR_SET_SEED, VERIFIED_BURN_SEED};
use crate::verification::verify_attestation_signature;

#[derive(Accounts)]
#[instruction(asset_id: u8, burn_nonce: u64)]
pub struct SubmitBurnAttestationV3<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [VALIDATOR_SET_SEED],
        bump = validator_set.bump
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    /// Created exactly once per `(asset_id, user, burn_nonce)`. The runtime
    /// refusing to re-initialize this account on a second call is the whole
    /// replay-protection mechanism: there is no separate processed-tuple set
    /// to maintain.
    #[account(
        init,
        payer = user,
        space = 8 + VerifiedBurn::INIT_SPACE,
        seeds = [
            VERIFIED_BURN_SEED,
            asset_id.to_le_bytes().as_ref(),
            user.key().as_ref(),
            burn_nonce.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub verified_burn: Account<'info, VerifiedBurn>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SubmitBurnAttestationV3>,
    asset_id: u8,
    burn_nonce: u64,
    bundle: AttestationBundle,
) -> Result<()> {
    // Step 1: instruction-level parameters must agree with the bundle.
    require!(bundle.asset_id == asset_id, LightClientError::InvalidAttestation);
    require!(bundle.burn_nonce == burn_nonce, LightClientError::InvalidAttestation);
    require!(bundle.user == ctx.accounts.user.key(), LightClientError::InvalidAttestation);

    // Step 2 (PDA binding) is enforced by the `seeds` constraint above:
    // Anchor aborts with its own `ConstraintSeeds` error before this handler
    // runs if the caller supplied the wrong `verified_burn` address.

    let asset = Asset::from_u8(asset_id)?;

    let validator_set = &ctx.accounts.validator_set;

    // Step 3: version check.
    require!(
        bundle.set_version == validator_set.version,
        LightClientError::VersionMismatch
    );

    // Step 4: threshold (checked again after verification below, but an
    // early reject avoids doing any crypto work for a bundle that can't
    // possibly satisfy it).
    require!(
        bundle.attestations.len() >= validator_set.threshold as usize,
        LightClientError::InsufficientAttestations
    );

    // Step 5: canonical message, identical to the one the attestor signed.
    let message = build_canonical_message(
        asset_id,
        bundle.set_version,
        bundle.burn_nonce,
        bundle.amount,
        bundle.user,
    );

    // Step 6: per-attestation verification. The bundle's order must not
    // affect the outcome; the only order-sensitive behavior is that the
    // first failing attestation aborts the whole transaction.
    let mut seen_validators: HashSet<Pubkey> = HashSet::new();
    let mut valid_count: usize = 0;

    for attestation in &bundle.attestations {
        require!(
            validator_set.validators.contains(&attestation.validator_pubkey),
            LightClientError::UnknownValidator
        );
        require!(
            seen_validators.insert(attestation.validator_pubkey),
            LightClientError::DuplicateValidator
        );
        verify_attestation_signature(&attestation.validator_pubkey, &message, &attestation.signature)?;
        valid_count += 1;
    }

    require!(
        valid_count >= validator_set.threshold as usize,
        LightClientError::InsufficientAttestations
    );

    // Step 7: atomic creation of the verified-burn record.
    let verified_burn = &mut ctx.accounts.verified_burn;
    verified_burn.asset_id = asset_id;
    verified_burn.user = bundle.user;
    verified_burn.burn_nonce = burn_nonce;
    verified_burn.amount = bundle.amount;
    verified_burn.set_version = bundle.set_version;
    verified_burn.created_at = Clock::get()?.unix_timestamp;
    verified_burn.bump = ctx.bumps.verified_burn;

    msg!(
        "verified burn: asset={:?} user={} nonce={} amount={} signers={}",
        asset,
        verified_burn.user,
        verified_burn.burn_nonce,
        verified_burn.amount,
        valid_count
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};
    use rand::rngs::OsRng;

    struct TestValidator {
        signing_key: SigningKey,
        pubkey: Pubkey,
    }

    fn make_validator() -> TestValidator {
        let signing_key = SigningKey::generate(&mut OsRng);
        let pubkey = Pubkey::new_from_array(signing_key.verifying_key().to_bytes());
        TestValidator { signing_key, pubkey }
    }

    fn sign(validator: &TestValidator, message: &[u8]) -> [u8; 64] {
        validator.signing_key.sign(message).to_bytes()
    }

    /// Pure re-implementation of the handler's verification core (steps
    /// 3-6) against in-memory validators, so acceptance/rejection logic is
    /// testable without spinning up the Solana runtime.
    fn verify_bundle(validator_set: &ValidatorSet, bundle: &AttestationBundle) -> Result<usize> {
        require!(
            bundle.set_version == validator_set.version,
            LightClientError::VersionMismatch
        );
        require!(
            bundle.attestations.len() >= validator_set.threshold as usize,
            LightClientError::InsufficientAttestations
        );

        let message = build_canonical_message(
            bundle.asset_id,
            bundle.set_version,
            bundle.burn_nonce,
            bundle.amount,
            bundle.user,
        );

        let mut seen = HashSet::new();
        let mut valid_count = 0;
        for attestation in &bundle.attestations {
            require!(
                validator_set.validators.contains(&attestation.validator_pubkey),
                LightClientError::UnknownValidator
            );
            require!(
                seen.insert(attestation.validator_pubkey),
                LightClientError::DuplicateValidator
            );
            verify_attestation_signature(&attestation.validator_pubkey, &message, &attestation.signature)?;
            valid_count += 1;
        }

        require!(
            valid_count >= validator_set.threshold as usize,
            LightClientError::InsufficientAttestations
        );
        Ok(valid_count)
    }

    fn bundle_for(validators: &[TestValidator], count: usize, set_version: u64, user: Pubkey) -> AttestationBundle {
        let burn_nonce = 42;
        let amount = 10_000;
        let asset_id = 1;
        let message = build_canonical_message(asset_id, set_version, burn_nonce, amount, user);

        let attestations = validators
            .iter()
            .take(count)
            .map(|v| crate::state::Attestation {
                validator_pubkey: v.pubkey,
                signature: sign(v, &message),
                timestamp: 0,
            })
            .collect();

        AttestationBundle {
            asset_id,
            burn_nonce,
            user,
            amount,
            set_version,
            attestations,
        }
    }

    #[test]
    fn exactly_threshold_accepts() {
        let validators: Vec<_> = (0..5).map(|_| make_validator()).collect();
        let validator_set = ValidatorSet {
            version: 1,
            validators: validators.iter().map(|v| v.pubkey).collect(),
            threshold: 3,
            bump: 0,
        };
        let user = Pubkey::new_unique();
        let bundle = bundle_for(&validators, 3, 1, user);

        assert_eq!(verify_bundle(&validator_set, &bundle).unwrap(), 3);
    }

    #[test]
    fn below_threshold_rejects() {
        let validators: Vec<_> = (0..5).map(|_| make_validator()).collect();
        let validator_set = ValidatorSet {
            version: 1,
            validators: validators.iter().map(|v| v.pubkey).collect(),
            threshold: 3,
            bump: 0,
        };
        let user = Pubkey::new_unique();
        let bundle = bundle_for(&validators, 2, 1, user);

        assert!(verify_bundle(&validator_set, &bundle).is_err());
    }

    #[test]
    fn reordering_attestations_does_not_change_acceptance() {
        let validators: Vec<_> = (0..5).map(|_| make_validator()).collect();
        let validator_set = ValidatorSet {
            version: 1,
            validators: validators.iter().map(|v| v.pubkey).collect(),
            threshold: 3,
            bump: 0,
        };
        let user = Pubkey::new_unique();
        let mut bundle = bundle_for(&validators, 3, 1, user);
        assert!(verify_bundle(&validator_set, &bundle).is_ok());

        bundle.attestations.reverse();
        assert!(verify_bundle(&validator_set, &bundle).is_ok());

        bundle.attestations.swap(0, 2);
        assert!(verify_bundle(&validator_set, &bundle).is_ok());
    }

    #[test]
    fn duplicate_validator_rejects_regardless_of_position() {
        let validators: Vec<_> = (0..5).map(|_| make_validator()).collect();
        let validator_set = ValidatorSet {
            version: 1,
            validators: validators.iter().map(|v| v.pubkey).collect(),
            threshold: 3,
            bump: 0,
        };
        let user = Pubkey::new_unique();
        let mut bundle = bundle_for(&validators, 3, 1, user);
        let duplicate = bundle.attestations[0].clone();
        bundle.attestations.push(duplicate);

        assert!(verify_bundle(&validator_set, &bundle).is_err());
    }

    #[test]
    fn unknown_validator_rejects() {
        let validators: Vec<_> = (0..5).map(|_| make_validator()).collect();
        let validator_set = ValidatorSet {
            version: 1,
            validators: validators.iter().map(|v| v.pubkey).collect(),
            threshold: 3,
            bump: 0,
        };
        let user = Pubkey::new_unique();
        let mut bundle = bundle_for(&validators, 3, 1, user);
        let outsider = make_validator();
        let message = build_canonical_message(bundle.asset_id, bundle.set_version, bundle.burn_nonce, bundle.amount, user);
        bundle.attestations[0] = crate::state::Attestation {
            validator_pubkey: outsider.pubkey,
            signature: sign(&outsider, &message),
            timestamp: 0,
        };

        assert!(verify_bundle(&validator_set, &bundle).is_err());
    }

    #[test]
    fn wrong_set_version_rejects() {
        let validators: Vec<_> = (0..5).map(|_| make_validator()).collect();
        let validator_set = ValidatorSet {
            version: 2,
            validators: validators.iter().map(|v| v.pubkey).collect(),
            threshold: 3,
            bump: 0,
        };
        let user = Pubkey::new_unique();
        let bundle = bundle_for(&validators, 3, 1, user);

        assert!(verify_bundle(&validator_set, &bundle).is_err());
    }

    #[test]
    fn threshold_plus_one_invalid_signature_rejects() {
        let validators: Vec<_> = (0..5).map(|_| make_validator()).collect();
        let validator_set = ValidatorSet {
            version: 1,
            validators: validators.iter().map(|v| v.pubkey).collect(),
            threshold: 3,
            bump: 0,
        };
        let user = Pubkey::new_unique();
        let mut bundle = bundle_for(&validators, 4, 1, user);
        bundle.attestations[3].signature = [0u8; 64];

        assert!(verify_bundle(&validator_set, &bundle).is_err());
    }

    #[test]
    fn cross_asset_signature_does_not_verify() {
        let validators: Vec<_> = (0..5).map(|_| make_validator()).collect();
        let validator_set = ValidatorSet {
            version: 1,
            validators: validators.iter().map(|v| v.pubkey).collect(),
            threshold: 3,
            bump: 0,
        };
        let user = Pubkey::new_unique();
        let mut bundle = bundle_for(&validators, 3, 1, user);
        // Attestations were signed for asset_id=1 (XENCAT); claim asset_id=2 (DGN) instead.
        bundle.asset_id = 2;

        assert!(verify_bundle(&validator_set, &bundle).is_err());
    }
}
