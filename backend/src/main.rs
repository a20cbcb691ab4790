//! # Backend Service
//!
//! Thin entry point that delegates to lib-web for server setup.

use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment (LOG_LEVEL included)
    dotenvy::dotenv().ok();

    let defaults = ServerConfig::default();
    let config = ServerConfig {
        bind_address: std::env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
        ..defaults
    };

    start_server(config).await
}
