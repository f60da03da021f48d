mod burn_record;
mod burn_source;
mod config;
mod errors;
mod server;

use std::sync::{Arc, RwLock};

use anyhow::Context;
use clap::Parser;
use ed25519_dalek::SigningKey;

use burn_source::RpcBurnSource;
use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::parse();

    let seed = std::fs::read(&config.keypair_path)
        .with_context(|| format!("reading validator keypair from {}", config.keypair_path.display()))?;
    let seed: [u8; 32] = seed
        .try_into()
        .map_err(|_| anyhow::anyhow!("keypair file must contain exactly 32 raw bytes"))?;
    let signing_key = SigningKey::from_bytes(&seed);

    let burn_source = Arc::new(RpcBurnSource::new(config.source_rpc_url.clone(), config.burn_program));

    let state = Arc::new(AppState {
        signing_key,
        burn_source,
        set_version: RwLock::new(config.set_version),
    });

    tracing::info!(
        listen_addr = %config.listen_addr,
        source_rpc_url = %config.source_rpc_url,
        set_version = config.set_version,
        "starting validator-attestor"
    );

    let app = server::router(state);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("binding to {}", config.listen_addr))?;

    axum::serve(listener, app).await.context("http server exited")?;

    Ok(())
}
