use anchor_lang::prelude::*;

#[error_code]
pub enum MintError {
    #[msg("This asset is not mintable by this program")]
    AssetNotMintable,

    #[msg("Verified burn does not match the requested user, nonce, or asset")]
    InvalidVerifiedBurn,

    #[msg("Missing validator account in remaining_accounts")]
    MissingValidatorAccount,

    #[msg("Validator account does not match the validator set")]
    InvalidValidatorAccount,

    #[msg("Validator account must be writable to receive fees")]
    ValidatorAccountNotWritable,

    #[msg("Arithmetic overflow")]
    Overflow,
}
