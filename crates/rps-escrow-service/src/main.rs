//! RPS Escrow Service binary.

use rps_core::Address;
use rps_escrow_service::{config::ServiceConfig, create_router, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env()?;
    let state = AppState::new(config.blind);

    // Demo accounts so the flow can be driven without a faucet call
    if let Some(amount) = config.demo_funds {
        for label in ["alice", "bob"] {
            let address = Address::from_label(label);
            state.ledger().fund(address, amount);
            tracing::info!("Funded demo account {} ({}) with {}", label, address, amount);
        }
    } else {
        tracing::info!("Demo accounts not funded (set RPS_DEMO_FUNDS to enable)");
    }

    let game_id = state.create_game(config.blind);
    tracing::info!("Opened game {} with blind {}", game_id, config.blind);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Escrow service starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
