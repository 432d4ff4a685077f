/*
[INPUT]:  Currency pairs, time ranges and query options
[OUTPUT]: Market data results (ticker, volume, order book, trades, candles, loans)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing parameter defaults
*/

use crate::http::commands::{
    RETURN_24H_VOLUME, RETURN_CHART_DATA, RETURN_CURRENCIES, RETURN_LOAN_ORDERS,
    RETURN_ORDER_BOOK, RETURN_PUBLIC_TRADE_HISTORY, RETURN_TICKER,
};
use crate::http::{ApiResult, PoloniexClient, PoloniexError, Result};

/// Candlestick periods (seconds) accepted by returnChartData
pub const CANDLESTICK_PERIODS: [u32; 6] = [300, 900, 1800, 7200, 14400, 86400];

/// Reject periods the exchange does not serve
pub fn validate_chart_period(period: u32) -> Result<()> {
    if CANDLESTICK_PERIODS.contains(&period) {
        return Ok(());
    }
    let valid = CANDLESTICK_PERIODS
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(PoloniexError::InvalidChartPeriod { period, valid })
}

impl PoloniexClient {
    /// Ticker for all markets
    ///
    /// GET /public?command=returnTicker
    pub async fn get_ticker(&self) -> Result<ApiResult> {
        self.execute(&RETURN_TICKER, vec![]).await
    }

    /// 24-hour volume for all markets
    ///
    /// GET /public?command=return24hVolume
    pub async fn get_24h_volume(&self) -> Result<ApiResult> {
        self.execute(&RETURN_24H_VOLUME, vec![]).await
    }

    /// Order book for a pair (`ALL` when `None`), depth defaults to 10
    ///
    /// GET /public?command=returnOrderBook&currencyPair={pair}&depth={depth}
    pub async fn get_order_book(&self, currency_pair: Option<&str>, depth: Option<u32>) -> Result<ApiResult> {
        self.execute(
            &RETURN_ORDER_BOOK,
            vec![currency_pair.map(Into::into), depth.map(Into::into)],
        )
        .await
    }

    /// Public trades between two UNIX timestamps
    ///
    /// GET /public?command=returnTradeHistory&currencyPair={pair}&start={start}&end={end}
    pub async fn get_public_trade_history(
        &self,
        currency_pair: Option<&str>,
        start: i64,
        end: i64,
    ) -> Result<ApiResult> {
        self.execute(
            &RETURN_PUBLIC_TRADE_HISTORY,
            vec![currency_pair.map(Into::into), Some(start.into()), Some(end.into())],
        )
        .await
    }

    /// Candlesticks; `period` must be one of [`CANDLESTICK_PERIODS`]
    ///
    /// GET /public?command=returnChartData&currencyPair={pair}&start={start}&end={end}&period={period}
    pub async fn get_chart_data(
        &self,
        currency_pair: Option<&str>,
        start: i64,
        end: i64,
        period: u32,
    ) -> Result<ApiResult> {
        validate_chart_period(period)?;
        self.execute(
            &RETURN_CHART_DATA,
            vec![
                currency_pair.map(Into::into),
                Some(start.into()),
                Some(end.into()),
                Some(period.into()),
            ],
        )
        .await
    }

    /// Currency metadata
    ///
    /// GET /public?command=returnCurrencies
    pub async fn get_currencies(&self) -> Result<ApiResult> {
        self.execute(&RETURN_CURRENCIES, vec![]).await
    }

    /// Open loan offers and demands for a currency (`BTC` when `None`)
    ///
    /// GET /public?command=returnLoanOrders&currency={currency}&limit={limit}
    pub async fn get_loan_orders(&self, currency: Option<&str>, limit: Option<u32>) -> Result<ApiResult> {
        self.execute(
            &RETURN_LOAN_ORDERS,
            vec![currency.map(Into::into), limit.map(Into::into)],
        )
        .await
    }
}
