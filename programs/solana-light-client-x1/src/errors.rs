use anchor_lang::prelude::*;

#[error_code]
pub enum LightClientError {
    #[msg("Invalid asset ID - unknown or unsupported asset")]
    UnknownAsset,

    #[msg("Invalid attestation data - instruction parameters don't match bundle fields")]
    InvalidAttestation,

    #[msg("Validator set version mismatch - attestations are for a different generation")]
    VersionMismatch,

    #[msg("Not enough attestations to meet threshold")]
    InsufficientAttestations,

    #[msg("Unknown validator - not in the current validator set")]
    UnknownValidator,

    #[msg("Duplicate validator signature in bundle")]
    DuplicateValidator,

    #[msg("Invalid validator signature - Ed25519 verification failed")]
    InvalidValidatorSignature,

    #[msg("Invalid threshold - must be > 0 and <= validator count")]
    InvalidThreshold,

    #[msg("Invalid validator set - duplicate key or too many validators")]
    InvalidValidatorSet,
}
