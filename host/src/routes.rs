//! HTTP surface of the host.
//!
//! - `GET /config.json`: the [`ClientConfig`] the frontend boots with.
//! - `GET /healthz`: liveness probe, plain `ok`.
//! - anything else: a file of the embedded frontend bundle, falling back to
//!   `index.html` so client-side routes survive a reload.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::config::{ClientConfig, CONFIG_PATH};
use include_dir::Dir;
use mime_guess::from_path;

/// The compiled frontend, embedded at build time.
#[derive(Clone, Copy)]
pub struct Bundle(pub &'static Dir<'static>);

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(CONFIG_PATH, web::get().to(client_config))
        .route("/healthz", web::get().to(healthz))
        .default_service(web::route().to(serve_embedded));
}

async fn client_config(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}

async fn healthz() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}

async fn serve_embedded(req: HttpRequest, bundle: web::Data<Bundle>) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match bundle.0.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match bundle.0.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}
