//! Game Server
//!
//! Binds the lobby engine to its transport: a WebSocket endpoint for play
//! and a small read-only HTTP surface, in a single actix-web server.
//!
//! ## Submodules
//!
//! - [`handlers`] — Route handlers for health, snapshots, and the socket

pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use mc_hosting::Arcade;

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let arcade = web::Data::new(Arcade::default());
    log::info!("starting game server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(arcade.clone())
            .route("/health", web::get().to(handlers::health))
            .route("/lobby/{code}", web::get().to(handlers::lobby))
            .route("/ws", web::get().to(handlers::connect))
    })
    .bind(std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8888")))?
    .run()
    .await
}
