/*
[INPUT]:  HTTP client configuration, credentials and command arguments
[OUTPUT]: ApiResult values wrapping raw and decoded responses
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod commands;
pub mod error;
pub mod params;
pub mod public;
pub mod result;
pub mod trade;
pub mod user;

pub use error::{PoloniexError, Result};
pub use params::{ParamValue, RequestParams};
pub use result::{ApiResult, NONCE_ERROR_FRAGMENT};

pub use client::{BASE_URL, ClientConfig, PUBLIC_PATH, PoloniexClient, TRADING_PATH};
pub use commands::{Access, Command, ParamDefault, ParamSpec, find_command};
pub use public::{CANDLESTICK_PERIODS, validate_chart_period};
