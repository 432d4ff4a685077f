/*
[INPUT]:  Error sources (HTTP transport, status, serialization, usage)
[OUTPUT]: Structured error type grouped into usage/transport/decoding
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::http::result::ApiResult;

/// Main error type for the Poloniex adapter
#[derive(Error, Debug)]
pub enum PoloniexError {
    /// Exactly one of api key / api secret was supplied
    #[error("Both \"apiKey\" and \"apiSecret\" have to be provided")]
    IncompleteCredentials,

    /// A trading command was called on a client without credentials
    #[error("Trading requests are not possible if api key and secret have not been set")]
    TradingDisabled,

    /// Candlestick period outside the set accepted by returnChartData
    #[error("Candle stick period \"{period}\" is invalid. Valid are \"{valid}\"")]
    InvalidChartPeriod { period: u32, valid: String },

    /// Argument list does not match the command's parameter table
    #[error("Command {command} expects {expected} arguments, got {actual}")]
    InvalidArguments {
        command: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP status {status}: {}", .result.contents())]
    HttpStatus {
        status: StatusCode,
        result: Box<ApiResult>,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response did not carry the expected content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl PoloniexError {
    /// Raised before any network I/O because of how the client was called
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            PoloniexError::IncompleteCredentials
                | PoloniexError::TradingDisabled
                | PoloniexError::InvalidChartPeriod { .. }
                | PoloniexError::InvalidArguments { .. }
                | PoloniexError::Config(_)
        )
    }

    /// Raised by the transport or by a non-2xx status
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            PoloniexError::Http(_) | PoloniexError::HttpStatus { .. } | PoloniexError::UrlParse(_)
        )
    }

    /// Non-2xx response whose body reports a stale nonce
    pub fn is_nonce_error(&self) -> bool {
        match self {
            PoloniexError::HttpStatus { result, .. } => result.has_nonce_error(),
            _ => false,
        }
    }

    /// The response behind a non-2xx status, if any
    pub fn result(&self) -> Option<&ApiResult> {
        match self {
            PoloniexError::HttpStatus { result, .. } => Some(result.as_ref()),
            _ => None,
        }
    }
}

/// Result type alias for Poloniex operations
pub type Result<T> = std::result::Result<T, PoloniexError>;
