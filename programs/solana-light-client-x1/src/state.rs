use anchor_lang::prelude::*;

/// Trusted validator set. Version increments on every rotation so that
/// attestations signed against a previous generation can never be replayed
/// against the current one (see `message::build_canonical_message`, which
/// binds `set_version` into every signed byte string).
#[account]
#[derive(InitSpace)]
pub struct ValidatorSet {
    /// Monotonically increasing; starts at 1.
    pub version: u64,

    /// Trusted validator public keys. No duplicates.
    #[max_len(20)]
    pub validators: Vec<Pubkey>,

    /// Minimum distinct in-set signatures required to accept an attestation.
    pub threshold: u8,

    pub bump: u8,
}

impl ValidatorSet {
    pub const MAX_VALIDATORS: usize = 20;
}

/// A single validator's signed statement that a specific finalized burn
/// occurred. `timestamp` is carried for observability only; it is not part
/// of the canonical message and does not affect acceptance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, InitSpace)]
pub struct Attestation {
    pub validator_pubkey: Pubkey,
    pub signature: [u8; 64],
    pub timestamp: i64,
}

/// The bundle of attestations a caller assembles and submits to
/// `submit_burn_attestation_v3`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct AttestationBundle {
    pub asset_id: u8,
    pub burn_nonce: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub set_version: u64,
    pub attestations: Vec<Attestation>,
}

/// Cross-program handoff record from the light client to a mint program.
/// Created exactly once per `(asset_id, user, burn_nonce)` tuple; its
/// existence alone is the verification result, and the atomicity of its PDA
/// creation is the entire replay-protection mechanism. There is no separate
/// processed-nonce set to maintain.
#[account]
#[derive(InitSpace)]
pub struct VerifiedBurn {
    pub asset_id: u8,
    pub user: Pubkey,
    pub burn_nonce: u64,
    pub amount: u64,
    pub set_version: u64,
    pub created_at: i64,
    pub bump: u8,
}

pub const VERIFIED_BURN_SEED: &[u8] = b"verified_burn_v3";
pub const VALIDATOR_SET_SEED: &[u8] = b"validator_set";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_set_max_matches_account_bound() {
        assert_eq!(ValidatorSet::MAX_VALIDATORS, 20);
    }
}
