/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for poloniex-adapter tests

use poloniex_adapter::{ClientConfig, PoloniexClient, SequenceNonce};
use std::sync::Arc;
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-api-key";
pub const TEST_SECRET: &str = "secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client without credentials pointed at the mock server
#[allow(dead_code)]
pub fn public_client(server: &MockServer) -> PoloniexClient {
    PoloniexClient::with_config(ClientConfig::with_base_url(server.uri())).expect("client init")
}

/// Trading client with a deterministic nonce sequence starting at `nonce`
#[allow(dead_code)]
pub fn trading_client(server: &MockServer, nonce: u64) -> PoloniexClient {
    PoloniexClient::with_credentials(
        Some(TEST_KEY),
        Some(TEST_SECRET),
        ClientConfig::with_base_url(server.uri()),
    )
    .expect("client init")
    .with_nonce_source(Arc::new(SequenceNonce::starting_at(nonce)))
}

/// returnTicker payload with two markets
#[allow(dead_code)]
pub fn mock_ticker() -> serde_json::Value {
    serde_json::json!({
        "BTC_ETH": {
            "id": 148,
            "last": "0.05",
            "lowestAsk": "0.0501",
            "highestBid": "0.0499",
            "percentChange": "-0.012",
            "baseVolume": "120.5",
            "quoteVolume": "2400.1",
            "isFrozen": "0",
            "high24hr": "0.052",
            "low24hr": "0.048"
        },
        "BTC_LTC": {
            "id": 50,
            "last": "0.0251",
            "lowestAsk": "0.02589999",
            "highestBid": "0.0251",
            "percentChange": "0.02390438",
            "baseVolume": "6.16485315",
            "quoteVolume": "245.82513926",
            "isFrozen": "0",
            "high24hr": "0.0258",
            "low24hr": "0.0241"
        }
    })
}
