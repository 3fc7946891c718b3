use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockall::automock;
use reqwest::Client as HTTPClient;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error as ThisError;

const CHART_PATH: &str = "v8/finance/chart/";

const INTERVAL: &str = "1d";

const REQUEST_TIMEOUT_SECONDS: u64 = 10;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("provider error: {0}")]
    Provider(String),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PriceHistory {
    pub ticker: String,
    pub bars: Vec<Bar>,
}

impl fmt::Display for PriceHistory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            formatter,
            "{:<12} {:>10} {:>10} {:>10} {:>10} {:>12}",
            "date", "open", "high", "low", "close", "volume"
        )?;

        for bar in &self.bars {
            let date = bar.timestamp.format("%Y-%m-%d").to_string();

            writeln!(
                formatter,
                "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12}",
                date, bar.open, bar.high, bar.low, bar.close, bar.volume
            )?;
        }

        Ok(())
    }
}

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize, Debug)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug, Default)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[automock]
#[async_trait]
pub trait Interface: Send + Sync {
    async fn fetch_price_history(
        &self,
        ticker: String,
        range: String,
    ) -> Result<PriceHistory, Error>;
}

#[derive(Clone)]
pub struct Client {
    base_url: String,
    http_client: HTTPClient,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        let http_client = HTTPClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .unwrap();

        Client {
            base_url,
            http_client,
        }
    }
}

#[async_trait]
impl Interface for Client {
    async fn fetch_price_history(
        &self,
        ticker: String,
        range: String,
    ) -> Result<PriceHistory, Error> {
        let chart_url = Url::parse(&self.base_url)?.join(&format!("{}{}", CHART_PATH, ticker))?;

        tracing::debug!("requesting chart data from {}", chart_url);

        let response = self
            .http_client
            .get(chart_url)
            .header("accept", "application/json")
            .query(&[("interval", INTERVAL), ("range", range.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Provider(format!(
                "chart request failed with status: {}",
                response.status()
            )));
        }

        let chart_response: ChartResponse = response.json().await?;

        if let Some(error) = chart_response.chart.error {
            return Err(Error::Provider(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let result = chart_response
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| Error::Provider("empty chart result".to_string()))?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .unwrap_or_default();

        let timestamps = result.timestamp.unwrap_or_default();

        let mut bars: Vec<Bar> = Vec::new();

        for (index, seconds) in timestamps.iter().enumerate() {
            let timestamp = match Utc.timestamp_opt(*seconds, 0).single() {
                Some(timestamp) => timestamp,
                None => continue,
            };

            // the provider emits nulls for sessions without trades
            let row = (
                column_value(&quote.open, index),
                column_value(&quote.high, index),
                column_value(&quote.low, index),
                column_value(&quote.close, index),
                column_value(&quote.volume, index),
            );

            if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = row {
                bars.push(Bar {
                    timestamp,
                    open,
                    high,
                    low,
                    close,
                    volume,
                });
            }
        }

        Ok(PriceHistory { ticker, bars })
    }
}

fn column_value<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}
