use crate::config::Config;
use crate::models::{
    error::AppError,
    prices::{PriceRecord, parse_response},
};
use chrono::{DateTime, NaiveDate, TimeZone};

/// The viewer's local calendar date, formatted for the prices endpoint.
///
/// `now` must already carry the viewer's offset; its date portion is used,
/// not the UTC date.
pub fn request_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

// API CONFIGURATION
/// Configuration for the prices API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    date: Option<NaiveDate>,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fixed date to request instead of the viewer's today.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Constructs the full URL for one day of prices.
    pub fn prices_url(&self, date: &str) -> String {
        format!("{}/api/prices/{date}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    date: Option<NaiveDate>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Pins the requested date (primarily for testing).
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| Config::API_URL.to_string()),
            date: self.date,
        }
    }
}

// FETCH CAPABILITY
/// Performs one HTTP GET and returns the response body.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get(&self, url: &str) -> Result<String, AppError>;
}

/// `Fetch` backed by reqwest (the browser's `fetch` when compiled to wasm).
#[derive(Debug, Clone)]
pub struct ReqwestFetch {
    http: reqwest::Client,
}

impl ReqwestFetch {
    /// Creates a new fetcher.
    pub fn new() -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Creates a fetcher for the page, failing when there is no browser window.
    pub fn browser() -> Result<Self, AppError> {
        if cfg!(target_arch = "wasm32") && web_sys::window().is_none() {
            return Err(AppError::EnvironmentUnavailable(
                "fetch requires a browser window".to_string(),
            ));
        }

        Self::new()
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("No prices found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl Fetch for ReqwestFetch {
    async fn get(&self, url: &str) -> Result<String, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("Failed to read response: {e}")))
    }
}

// PRICE CLIENT
/// Client for the prices API. Every call issues exactly one request.
pub struct PriceClient<F: Fetch> {
    fetch: F,
    config: ApiConfig,
}

impl<F: Fetch> PriceClient<F> {
    /// Creates a client from an explicitly supplied fetch capability.
    pub fn new(config: ApiConfig, fetch: Option<F>) -> Result<Self, AppError> {
        let fetch = fetch.ok_or_else(|| {
            AppError::EnvironmentUnavailable("no fetch capability supplied".to_string())
        })?;

        Ok(Self { fetch, config })
    }

    /// Fetches the prices for the viewer's today, or the configured date.
    pub async fn fetch_todays_prices<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<Vec<PriceRecord>, AppError> {
        let date = match self.config.date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => request_date(now),
        };

        self.fetch_prices_for(&date).await
    }

    /// Fetches the prices for a `YYYY-MM-DD` date.
    pub async fn fetch_prices_for(&self, date: &str) -> Result<Vec<PriceRecord>, AppError> {
        let url = self.config.prices_url(date);
        tracing::debug!(%url, "fetching prices");

        let body = self.fetch.get(&url).await?;
        let records = parse_response(&body).inspect_err(|e| {
            tracing::warn!(%url, error = %e, "prices response rejected");
        })?;

        tracing::debug!(count = records.len(), "prices loaded");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use std::cell::RefCell;

    struct ScriptedFetch {
        body: String,
        requests: RefCell<Vec<String>>,
    }

    impl ScriptedFetch {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Fetch for &ScriptedFetch {
        async fn get(&self, url: &str) -> Result<String, AppError> {
            self.requests.borrow_mut().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    const BODY: &str = r#"[
        {"p": 45.2, "s": "2025-12-06T22:00:00Z", "e": "2025-12-06T23:00:00Z"},
        {"p": 51.0, "s": "2025-12-06T23:00:00Z", "e": "2025-12-07T00:00:00Z"}
    ]"#;

    #[test]
    fn test_request_date_uses_local_offset() {
        let helsinki = FixedOffset::east_opt(2 * 3600).unwrap();
        // 23:30 UTC on the 6th is already the 7th in Helsinki
        let now = Utc
            .with_ymd_and_hms(2025, 12, 6, 23, 30, 0)
            .unwrap()
            .with_timezone(&helsinki);
        assert_eq!(request_date(&now), "2025-12-07");

        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2025, 12, 7, 2, 0, 0)
            .unwrap()
            .with_timezone(&new_york);
        assert_eq!(request_date(&now), "2025-12-06");
    }

    #[test]
    fn test_prices_url_construction() {
        let config = ApiConfig::builder().base_url("https://example.com/").build();
        assert_eq!(
            config.prices_url("2025-03-26"),
            "https://example.com/api/prices/2025-03-26"
        );
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::API_URL);
        assert!(config.date().is_none());
    }

    #[test]
    fn test_missing_fetch_is_environment_error() {
        let result = PriceClient::<ReqwestFetch>::new(ApiConfig::default(), None);
        assert!(matches!(result, Err(AppError::EnvironmentUnavailable(_))));
    }

    #[tokio::test]
    async fn test_fetch_issues_one_request_per_call() {
        let fetch = ScriptedFetch::new(BODY);
        let config = ApiConfig::builder().base_url("http://prices.test").build();
        let client = PriceClient::new(config, Some(&fetch)).unwrap();

        let records = client.fetch_prices_for("2025-12-07").await.unwrap();
        assert_eq!(records.len(), 2);
        client.fetch_prices_for("2025-12-07").await.unwrap();

        assert_eq!(
            *fetch.requests.borrow(),
            vec![
                "http://prices.test/api/prices/2025-12-07",
                "http://prices.test/api/prices/2025-12-07"
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_todays_prices_requests_local_date() {
        let fetch = ScriptedFetch::new(BODY);
        let config = ApiConfig::builder().base_url("http://prices.test").build();
        let client = PriceClient::new(config, Some(&fetch)).unwrap();
        let helsinki = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = helsinki.with_ymd_and_hms(2025, 12, 7, 0, 30, 0).unwrap();

        client.fetch_todays_prices(&now).await.unwrap();
        assert_eq!(
            fetch.requests.borrow()[0],
            "http://prices.test/api/prices/2025-12-07"
        );
    }

    #[tokio::test]
    async fn test_pinned_date_overrides_today() {
        let fetch = ScriptedFetch::new("[]");
        let config = ApiConfig::builder()
            .base_url("http://prices.test")
            .date(NaiveDate::from_ymd_opt(2025, 3, 26).unwrap())
            .build();
        let client = PriceClient::new(config, Some(&fetch)).unwrap();

        let records = client.fetch_todays_prices(&Utc::now()).await.unwrap();
        assert!(records.is_empty());
        assert!(fetch.requests.borrow()[0].ends_with("/api/prices/2025-03-26"));
    }

    #[tokio::test]
    async fn test_malformed_body_fails() {
        let fetch = ScriptedFetch::new(r#"{"error": "nope"}"#);
        let client = PriceClient::new(ApiConfig::default(), Some(&fetch)).unwrap();

        let result = client.fetch_prices_for("2025-12-07").await;
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }
}
