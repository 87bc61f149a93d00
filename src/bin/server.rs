//! faultbox server binary.
//!
//! Entry point for the demo service: initializes logging, builds the router,
//! and serves until interrupted.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin faultbox-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: bind port (default: 8080)
//! - `RUST_LOG`: tracing filter (default: faultbox=info,tower_http=info)

use std::env;
use std::net::SocketAddr;

use tracing::info;

use faultbox::http::{create_router, AppState};
use faultbox::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    info!("Starting faultbox server");

    let state = AppState::default();
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Endpoint catalogue: http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
