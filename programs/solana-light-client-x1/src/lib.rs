use anchor_lang::prelude::*;

pub mod asset;
pub mod errors;
pub mod instructions;
pub mod message;
pub mod state;
pub mod verification;

use instructions::*;
pub use asset::{Asset, AssetEntry, ASSET_REGISTRY};
pub use errors::LightClientError;
pub use message::build_canonical_message;
pub use state::{
    Attestation, AttestationBundle, ValidatorSet, VerifiedBurn, VALIDATOR_SET_SEED,
    VERIFIED_BURN_SEED,
};

declare_id!("BXBZtvFfCtCapQgqFTxGQ9hgJTQZUoHFzBXD2V3ys5C5");

/// Domain separator for cryptographic signature binding. Prevents a
/// signature produced for one bridge deployment from being replayed against
/// another that happens to share validators.
pub const DOMAIN_SEPARATOR: &str = "XENCAT_X1_BRIDGE_V1";

#[program]
pub mod solana_light_client_x1 {
    use super::*;

    /// Deploy-time initialization of the validator set. Run once per
    /// deployment; there is no on-chain rotation instruction (see DESIGN.md).
    pub fn initialize_validator_set(
        ctx: Context<InitializeValidatorSet>,
        validators: Vec<Pubkey>,
        threshold: u8,
    ) -> Result<()> {
        instructions::initialize_validator_set::handler(ctx, validators, threshold)
    }

    /// Verify a threshold-signed attestation bundle for a single burn and
    /// record the result as a `VerifiedBurn` PDA for the bound mint program
    /// to consume.
    pub fn submit_burn_attestation_v3(
        ctx: Context<SubmitBurnAttestationV3>,
        asset_id: u8,
        burn_nonce: u64,
        bundle: AttestationBundle,
    ) -> Result<()> {
        instructions::submit_burn_attestation_v3::handler(ctx, asset_id, burn_nonce, bundle)
    }
}
