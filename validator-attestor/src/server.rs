use std::str::FromStr;
use std::sync::{Arc, RwLock};

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use ed25519_dalek::{Signer, SigningKey};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use solana_light_client_x1::asset::registry_entry_for_source_mint;
use solana_light_client_x1::build_canonical_message;

use crate::burn_source::BurnSource;
use crate::errors::AttestError;

pub struct AppState {
    pub signing_key: SigningKey,
    pub burn_source: Arc<dyn BurnSource>,
    /// The validator's own view of the active set version. Updated
    /// out-of-band by the operator when the set rotates; read once per
    /// request.
    pub set_version: RwLock<u64>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/attest-burn-v3", post(attest_burn_v3))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::timeout::TimeoutLayer::new(std::time::Duration::from_secs(10)))
}

#[derive(Deserialize)]
pub struct AttestBurnRequest {
    pub burn_nonce: u64,
    pub user: String,
    pub amount: u64,
    pub set_version: u64,
}

#[derive(Serialize)]
pub struct AttestationResponse {
    pub asset_id: u8,
    pub burn_nonce: u64,
    pub user: String,
    pub amount: u64,
    pub set_version: u64,
    pub validator_pubkey: String,
    pub signature: String,
    pub timestamp: i64,
}

#[tracing::instrument(skip(state, request), fields(burn_nonce = request.burn_nonce))]
async fn attest_burn_v3(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AttestBurnRequest>,
) -> Result<Json<AttestationResponse>, AttestError> {
    let user = Pubkey::from_str(&request.user)
        .map_err(|_| AttestError::UserMismatch)?;

    // Step 1 + 2: fetch and finality-gate the source-chain burn record.
    let record = state
        .burn_source
        .fetch_finalized(request.burn_nonce)
        .await?
        .ok_or(AttestError::BurnNotFound)?;

    // Step 3: resolve asset from on-chain data, never from the request.
    let mint = state.burn_source.resolve_mint(&record).await?;
    let entry = registry_entry_for_source_mint(&mint).ok_or(AttestError::UnknownAsset)?;

    // Step 4: match request against the record.
    if record.user != user {
        return Err(AttestError::UserMismatch);
    }
    if record.amount != request.amount {
        return Err(AttestError::AmountMismatch);
    }

    // Step 5: set-version check against this validator's current view.
    let current_version = *state.set_version.read().expect("set_version lock poisoned");
    if request.set_version != current_version {
        return Err(AttestError::WrongSetVersion);
    }

    // Step 6: build and sign the canonical message.
    let message = build_canonical_message(
        entry.asset.id(),
        request.set_version,
        request.burn_nonce,
        record.amount,
        user,
    );
    let signature = state.signing_key.sign(&message);
    let validator_pubkey = Pubkey::new_from_array(state.signing_key.verifying_key().to_bytes());

    Ok(Json(AttestationResponse {
        asset_id: entry.asset.id(),
        burn_nonce: request.burn_nonce,
        user: user.to_string(),
        amount: record.amount,
        set_version: request.set_version,
        validator_pubkey: validator_pubkey.to_string(),
        signature: hex::encode(signature.to_bytes()),
        timestamp: chrono_now(),
    }))
}

/// Wall-clock timestamp carried for observability only; never part of the
/// canonical message and never checked by the light client.
fn chrono_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
