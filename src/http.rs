#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::path::PathBuf;

use actix_files::Files;
use actix_web::{get, App, HttpResponse, HttpServer, Responder};

pub const WELCOME: &str = "Noise-machine server: Welcome.";

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body(WELCOME)
}

pub async fn serve(bind: &str, static_root: PathBuf) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .service(index)
            .service(Files::new("/static", static_root.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
