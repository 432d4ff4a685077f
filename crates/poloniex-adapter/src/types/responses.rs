/*
[INPUT]:  Decoded JSON bodies of common commands
[OUTPUT]: Optional typed views (ticker, candles, balances)
[POS]:    Data layer - typed views built on top of ApiResult::decoded
[UPDATE]: When response schemas change or new views are needed
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One market in the returnTicker response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerEntry {
    pub id: u64,
    pub last: Decimal,
    pub lowest_ask: Decimal,
    pub highest_bid: Decimal,
    pub percent_change: Decimal,
    pub base_volume: Decimal,
    pub quote_volume: Decimal,
    /// "0" or "1"
    pub is_frozen: String,
    #[serde(rename = "high24hr")]
    pub high_24hr: Decimal,
    #[serde(rename = "low24hr")]
    pub low_24hr: Decimal,
}

impl TickerEntry {
    pub fn is_frozen(&self) -> bool {
        self.is_frozen == "1"
    }
}

/// returnTicker response keyed by currency pair
pub type Ticker = BTreeMap<String, TickerEntry>;

/// One returnChartData candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartCandle {
    pub date: i64,
    pub high: Decimal,
    pub low: Decimal,
    pub open: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    pub quote_volume: Decimal,
    pub weighted_average: Decimal,
}

/// returnBalances response keyed by currency
pub type Balances = BTreeMap<String, Decimal>;
