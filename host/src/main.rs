mod config;
mod routes;

use crate::config::Config;
use crate::routes::Bundle;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is the normal case outside development.
    let _ = dotenvy::dotenv();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let url = config.url();

    if STATIC_DIR.get_file("index.html").is_none() {
        log::warn!("no frontend bundle embedded; build the frontend into frontend/dist first");
    }

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let client_config = web::Data::new(config.client_config());
    let bundle = web::Data::new(Bundle(&STATIC_DIR));

    info!("Serving records desk at {}", url);
    info!("Records API expected at {}", client_config.api_base_url);

    HttpServer::new(move || {
        App::new()
            .app_data(client_config.clone())
            .app_data(bundle.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
