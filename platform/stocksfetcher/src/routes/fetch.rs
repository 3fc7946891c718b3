use crate::config::FetchSettings;
use actix_web::{get, web, HttpResponse};
use log::{error, info};
use std::sync::Arc;
use stonks::data::Interface as DataInterface;

#[get("/fetchstocksdata")]
pub async fn handler(
    data_client: web::Data<Arc<dyn DataInterface>>,
    settings: web::Data<FetchSettings>,
) -> HttpResponse {
    info!(
        "fetching {} price history over the last {}",
        settings.ticker, settings.range
    );

    match data_client
        .fetch_price_history(settings.ticker.clone(), settings.range.clone())
        .await
    {
        Ok(history) => info!("{} price history:\n{}", history.ticker, history),
        Err(e) => error!("Failed to fetch data: {}", e),
    }

    HttpResponse::Ok().body("true")
}
