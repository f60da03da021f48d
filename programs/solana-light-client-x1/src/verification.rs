use anchor_lang::prelude::*;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::errors::LightClientError;

/// Verify that `signature` is a valid Ed25519 signature by `pubkey` over
/// `message`.
///
/// Unlike the format-only check this bridge used to ship (64-byte length
/// validation, trusting validator operational security for the rest), this
/// performs the actual curve verification: a well-formed but invalid
/// signature (including an all-zero or all-0xFF signature) is rejected here,
/// not merely accepted on the strength of the validator's trustworthiness.
pub fn verify_attestation_signature(
    pubkey: &Pubkey,
    message: &[u8],
    signature: &[u8; 64],
) -> Result<()> {
    let verifying_key = VerifyingKey::from_bytes(&pubkey.to_bytes())
        .map_err(|_| error!(LightClientError::InvalidValidatorSignature))?;
    let signature = Signature::from_bytes(signature);

    verifying_key
        .verify(message, &signature)
        .map_err(|_| error!(LightClientError::InvalidValidatorSignature))
}
