use std::path::PathBuf;

use clap::Parser;
use solana_sdk::pubkey::Pubkey;

/// Runs one validator's attestation service: observes the source chain,
/// signs canonical messages for finalized burns it recognizes.
#[derive(Parser, Debug)]
#[command(name = "validator-attestor", version)]
pub struct Config {
    /// Path to this validator's Ed25519 signing key, raw 32-byte seed.
    #[arg(long, env = "VALIDATOR_ATTESTOR_KEYPAIR")]
    pub keypair_path: PathBuf,

    /// Source-chain RPC endpoint this validator queries for burn records.
    #[arg(long, env = "VALIDATOR_ATTESTOR_SOURCE_RPC_URL")]
    pub source_rpc_url: String,

    /// Source-chain program id that owns `BurnRecord` accounts.
    #[arg(long, env = "VALIDATOR_ATTESTOR_BURN_PROGRAM")]
    pub burn_program: Pubkey,

    /// Address to bind the HTTP server to.
    #[arg(long, env = "VALIDATOR_ATTESTOR_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// This validator's initial view of the active validator-set version.
    /// Updated out-of-band (process restart with a new value) when the set
    /// rotates.
    #[arg(long, env = "VALIDATOR_ATTESTOR_SET_VERSION", default_value_t = 1)]
    pub set_version: u64,
}
