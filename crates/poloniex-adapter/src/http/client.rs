/*
[INPUT]:  HTTP configuration (base URL, timeouts), optional credentials, nonce source
[OUTPUT]: Configured client issuing public GET and signed POST requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request primitives
*/

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::auth::{ApiCredentials, ClockNonce, NonceSource, RequestSigner};
use crate::config::AdapterConfig;
use crate::http::params::RequestParams;
use crate::http::result::ApiResult;
use crate::http::{PoloniexError, Result};

/// Base URL for the Poloniex API
pub const BASE_URL: &str = "https://poloniex.com";
/// Path of the unauthenticated market data endpoint
pub const PUBLIC_PATH: &str = "/public";
/// Path of the signed trading endpoint
pub const TRADING_PATH: &str = "/tradingApi";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    #[serde(with = "duration_secs")]
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another host (mock servers, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

/// Main HTTP client for the Poloniex API
#[derive(Debug, Clone)]
pub struct PoloniexClient {
    http_client: Client,
    public_url: Url,
    trading_url: Url,
    signer: Option<RequestSigner>,
    nonce_source: Arc<dyn NonceSource>,
}

impl PoloniexClient {
    /// Create a public-only client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a public-only client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create a client from an optional key/secret pair.
    ///
    /// Fails with [`PoloniexError::IncompleteCredentials`] when exactly one of
    /// the two is given. Trading is enabled when both are.
    pub fn with_credentials(
        api_key: Option<&str>,
        api_secret: Option<&str>,
        config: ClientConfig,
    ) -> Result<Self> {
        let credentials = ApiCredentials::from_parts(api_key, api_secret)?;
        Self::build(config, credentials)
    }

    /// Create a client from a loaded configuration file
    pub fn from_config(config: AdapterConfig) -> Result<Self> {
        Self::with_credentials(
            config.api_key.as_deref(),
            config.api_secret.as_deref(),
            config.client,
        )
    }

    fn build(config: ClientConfig, credentials: Option<ApiCredentials>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(PoloniexError::Config(format!(
                "base url {} cannot carry a path",
                config.base_url
            )));
        }

        Ok(Self {
            http_client,
            public_url: base_url.join(PUBLIC_PATH)?,
            trading_url: base_url.join(TRADING_PATH)?,
            signer: credentials.map(RequestSigner::new),
            nonce_source: Arc::new(ClockNonce::new()),
        })
    }

    /// Replace the nonce source used for trading requests
    pub fn with_nonce_source(mut self, nonce_source: Arc<dyn NonceSource>) -> Self {
        self.nonce_source = nonce_source;
        self
    }

    /// Underlying transport client
    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Whether credentials are present and trading commands may be sent
    pub fn trading_enabled(&self) -> bool {
        self.signer.is_some()
    }

    /// Send an unauthenticated GET to the public endpoint
    pub async fn send_public_request(&self, params: RequestParams) -> Result<ApiResult> {
        let mut url = self.public_url.clone();
        if !params.is_empty() {
            url.set_query(Some(&params.encode()));
        }

        debug!(command = params.command_name().unwrap_or_default(), "sending public request");
        self.send(self.http_client.get(url)).await
    }

    /// Send a signed POST to the trading endpoint.
    ///
    /// Appends a fresh `nonce`, signs the encoded body and attaches the `Key`
    /// and `Sign` headers. Without credentials this fails with
    /// [`PoloniexError::TradingDisabled`] before any I/O.
    pub async fn send_trading_request(&self, mut params: RequestParams) -> Result<ApiResult> {
        let signer = self.signer.as_ref().ok_or(PoloniexError::TradingDisabled)?;

        let nonce = self.nonce_source.next_nonce();
        params.insert("nonce", nonce);

        let body = params.encode();
        let signature = signer.sign(&body);

        debug!(command = params.command_name().unwrap_or_default(), nonce, "sending trading request");
        let builder = self
            .http_client
            .post(self.trading_url.clone())
            .header("Key", signer.api_key())
            .header("Sign", signature)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);
        self.send(builder).await
    }

    async fn send(&self, builder: RequestBuilder) -> Result<ApiResult> {
        let response = builder.send().await?;
        let result = ApiResult::from_response(response).await?;
        let status = result.status();
        debug!(status = %status, decoded = result.decoded().is_some(), "response received");

        if !status.is_success() {
            return Err(PoloniexError::HttpStatus {
                status,
                result: Box::new(result),
            });
        }
        Ok(result)
    }
}
