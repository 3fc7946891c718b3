use std::env;
use std::net::TcpListener;
use std::sync::Arc;

use stocksfetcher::config::FetchSettings;
use stocksfetcher::run;
use stonks::data::{Client as DataClient, Interface as DataInterface};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_port = env::var("SERVER_PORT")
        .unwrap_or("8080".to_string())
        .parse::<u16>()?;

    let chart_base_url =
        env::var("YAHOO_BASE_URL").unwrap_or("https://query1.finance.yahoo.com".to_string());

    let data_client: Arc<dyn DataInterface> = Arc::new(DataClient::new(chart_base_url));

    let settings = FetchSettings::from_env();

    let listener = TcpListener::bind(("0.0.0.0", server_port))?;

    run(listener, data_client, settings)?.await?;

    Ok(())
}
