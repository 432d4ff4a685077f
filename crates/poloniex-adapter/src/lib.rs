/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Poloniex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod config;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{ApiCredentials, ClockNonce, NonceSource, RequestSigner, SequenceNonce};

pub use config::AdapterConfig;

// Re-export commonly used types from http
pub use http::{
    ApiResult,
    CANDLESTICK_PERIODS,
    ClientConfig,
    ParamValue,
    PoloniexClient,
    PoloniexError,
    RequestParams,
    Result,
};

// Re-export all types
pub use types::*;
