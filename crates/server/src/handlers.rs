use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use mc_hosting::Arcade;

/// Liveness probe. The engine holds no external resources, so alive means
/// healthy.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Read-only lobby snapshot, for spectating and debugging.
pub async fn lobby(arcade: web::Data<Arcade>, path: web::Path<String>) -> impl Responder {
    match arcade.get(&path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(session.view().await),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}

/// WebSocket upgrade: all play happens over this one socket.
pub async fn connect(
    arcade: web::Data<Arcade>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            match arcade.into_inner().bridge(session, stream).await {
                Ok(()) => response.map_into_left_body(),
                Err(e) => HttpResponse::InternalServerError()
                    .body(e.to_string())
                    .map_into_right_body(),
            }
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
