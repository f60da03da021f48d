use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_program::program_pack::Pack;
use spl_associated_token_account::get_associated_token_address;
use spl_token::state::Account as SplTokenAccount;

use solana_light_client_x1::asset::ASSET_REGISTRY;

use crate::burn_record::BurnRecord;
use crate::errors::AttestError;

/// Seam between the attestation service and the source chain. The RPC-backed
/// implementation is the only thing that talks to a live cluster; tests
/// substitute an in-memory fake so the rest of the request pipeline never
/// needs a real endpoint.
#[async_trait]
pub trait BurnSource: Send + Sync {
    /// Fetches the burn record for `burn_nonce` at finalized commitment.
    /// `Ok(None)` means the record does not exist (`BurnNotFound`); an
    /// `Err(NotFinalized)` means the record exists but has not yet reached
    /// the source chain's finality depth.
    async fn fetch_finalized(&self, burn_nonce: u64) -> Result<Option<BurnRecord>, AttestError>;

    /// The SPL-like mint associated with a burn record's token account.
    /// Separated from `fetch_finalized` because on a real chain this is a
    /// second account read: the burn record identifies a user, not a mint,
    /// directly.
    async fn resolve_mint(&self, record: &BurnRecord) -> Result<Pubkey, AttestError>;
}

pub struct RpcBurnSource {
    client: RpcClient,
    burn_program: Pubkey,
}

impl RpcBurnSource {
    pub fn new(rpc_url: String, burn_program: Pubkey) -> Self {
        Self {
            client: RpcClient::new_with_commitment(rpc_url, CommitmentConfig::finalized()),
            burn_program,
        }
    }
}

#[async_trait]
impl BurnSource for RpcBurnSource {
    async fn fetch_finalized(&self, burn_nonce: u64) -> Result<Option<BurnRecord>, AttestError> {
        let address = BurnRecord::derive_address(&self.burn_program, burn_nonce);

        let account = match self.client.get_account(&address).await {
            Ok(account) => account,
            Err(err) => {
                let message = err.to_string();
                if message.contains("AccountNotFound") {
                    return Ok(None);
                }
                return Err(AttestError::SourceChainUnavailable(message));
            }
        };

        BurnRecord::parse(&account.data)
            .map(Some)
            .ok_or_else(|| AttestError::SourceChainUnavailable("malformed burn record layout".into()))
    }

    async fn resolve_mint(&self, record: &BurnRecord) -> Result<Pubkey, AttestError> {
        // The burn record itself carries only `user`, not a token account or
        // mint. The associated token account for the burned mint is derived
        // per candidate registry entry and read back; whichever one exists
        // for this user is the mint that was actually burned.
        for entry in ASSET_REGISTRY {
            let candidate = get_associated_token_address(&record.user, &entry.source_mint);

            let account = match self.client.get_account(&candidate).await {
                Ok(account) => account,
                Err(err) => {
                    let message = err.to_string();
                    if message.contains("AccountNotFound") {
                        continue;
                    }
                    return Err(AttestError::SourceChainUnavailable(message));
                }
            };

            let token_account = SplTokenAccount::unpack(&account.data).map_err(|_| {
                AttestError::SourceChainUnavailable("malformed token account layout".into())
            })?;

            if token_account.mint == entry.source_mint {
                return Ok(entry.source_mint);
            }
        }

        Err(AttestError::UnknownAsset)
    }
}

#[cfg(test)]
pub mod fake {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    pub struct FakeBurnSource {
        finalized: Mutex<HashMap<u64, BurnRecord>>,
        pending: Mutex<HashMap<u64, BurnRecord>>,
        mints: Mutex<HashMap<u64, Pubkey>>,
    }

    impl FakeBurnSource {
        pub fn new() -> Self {
            Self {
                finalized: Mutex::new(HashMap::new()),
                pending: Mutex::new(HashMap::new()),
                mints: Mutex::new(HashMap::new()),
            }
        }

        pub fn insert_finalized(&self, record: BurnRecord, mint: Pubkey) {
            self.mints.lock().unwrap().insert(record.nonce, mint);
            self.finalized.lock().unwrap().insert(record.nonce, record);
        }

        pub fn insert_pending(&self, record: BurnRecord) {
            self.pending.lock().unwrap().insert(record.nonce, record);
        }
    }

    #[async_trait]
    impl BurnSource for FakeBurnSource {
        async fn fetch_finalized(&self, burn_nonce: u64) -> Result<Option<BurnRecord>, AttestError> {
            if let Some(record) = self.finalized.lock().unwrap().get(&burn_nonce) {
                return Ok(Some(*record));
            }
            if self.pending.lock().unwrap().contains_key(&burn_nonce) {
                return Err(AttestError::NotFinalized);
            }
            Ok(None)
        }

        async fn resolve_mint(&self, record: &BurnRecord) -> Result<Pubkey, AttestError> {
            self.mints
                .lock()
                .unwrap()
                .get(&record.nonce)
                .copied()
                .ok_or(AttestError::BurnNotFound)
        }
    }
}
