//! tabdock-relay: local WebSocket fan-out between tab bridges and
//! controllers.
//!
//! Bridges push state payloads and keep-alive pings; controllers send tab
//! commands. The relay classifies each peer from its first meaningful frame,
//! forwards state frames to controllers and command frames to bridges as
//! opaque text, and filters pings. It never re-serializes a payload.

mod connection;
mod frame;
mod peers;

use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio_tungstenite::accept_async;

use crate::connection::handle_connection;
use crate::peers::{PeerStore, Role};

#[derive(Parser)]
#[command(name = "tabdock-relay", about = "Local relay between tab bridges and controllers")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 8765)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabdock_relay=info".into()),
        )
        .init();

    let args = Args::parse();
    let store = PeerStore::new();

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind TCP listener");

    tracing::info!("tabdock-relay listening on {}", addr);

    // Periodic peer-count tick.
    let tick_store = store.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let bridges = tick_store.count(Role::Bridge).await;
            let controllers = tick_store.count(Role::Controller).await;
            tracing::debug!(bridges, controllers, "Peer tick");
        }
    });

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let store = store.clone();
                tokio::spawn(async move {
                    match accept_async(stream).await {
                        Ok(ws) => handle_connection(ws, addr, store).await,
                        Err(e) => {
                            tracing::warn!(peer = %addr, error = %e, "WS handshake failed");
                        }
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "TCP accept error");
            }
        }
    }
}
