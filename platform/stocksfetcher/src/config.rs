#[derive(Clone)]
pub struct FetchSettings {
    pub ticker: String,
    pub range: String,
}

impl FetchSettings {
    pub fn from_env() -> Self {
        let ticker = std::env::var("STOCKS_TICKER").unwrap_or("AAPL".to_string());
        let range = std::env::var("STOCKS_RANGE").unwrap_or("5d".to_string());

        Self { ticker, range }
    }
}
