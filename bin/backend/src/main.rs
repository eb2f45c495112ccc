//! Game Server Binary
//!
//! Runs the lobby engine behind its WebSocket and HTTP surface.
//! Binds on BIND_ADDR (e.g. 0.0.0.0:8888).

#[tokio::main]
async fn main() {
    mc_core::log();
    mc_core::kys();
    mc_server::run().await.unwrap();
}
