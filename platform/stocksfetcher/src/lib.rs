pub mod config;
pub mod routes;

use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use config::FetchSettings;
use std::net::TcpListener;
use std::sync::Arc;
use stonks::data::Interface as DataInterface;

pub fn run(
    listener: TcpListener,
    data_client: Arc<dyn DataInterface>,
    settings: FetchSettings,
) -> Result<Server> {
    let data_client = web::Data::new(data_client);

    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data_client.clone())
            .app_data(settings.clone())
            .service(routes::health::handler)
            .service(routes::fetch::handler)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
