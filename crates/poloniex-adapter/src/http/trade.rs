/*
[INPUT]:  Order parameters (pair, rate, amount, execution flags)
[OUTPUT]: Order placement, cancellation, move and margin results
[POS]:    HTTP layer - trading endpoints (require key + HMAC signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use rust_decimal::Decimal;

use crate::http::commands::{
    BUY, CANCEL_ORDER, CLOSE_MARGIN_POSITION, GET_MARGIN_POSITION, MARGIN_BUY, MARGIN_SELL,
    MOVE_ORDER, RETURN_MARGIN_ACCOUNT_SUMMARY, RETURN_OPEN_ORDERS, RETURN_ORDER_TRADES,
    RETURN_TRADE_HISTORY, SELL,
};
use crate::http::params::ParamValue;
use crate::http::{ApiResult, PoloniexClient, Result};
use crate::types::OrderOptions;

fn order_args(
    currency_pair: &str,
    rate: Decimal,
    amount: Decimal,
    options: OrderOptions,
) -> Vec<Option<ParamValue>> {
    vec![
        Some(currency_pair.into()),
        Some(rate.into()),
        Some(amount.into()),
        Some(options.fill_or_kill.into()),
        Some(options.immediate_or_cancel.into()),
        Some(options.post_only.into()),
    ]
}

impl PoloniexClient {
    /// Open orders for a pair (`ALL` when `None`)
    ///
    /// POST /tradingApi command=returnOpenOrders
    pub async fn get_open_orders(&self, currency_pair: Option<&str>) -> Result<ApiResult> {
        self.execute(&RETURN_OPEN_ORDERS, vec![currency_pair.map(Into::into)]).await
    }

    /// Own trade history, optionally bounded by UNIX timestamps
    ///
    /// POST /tradingApi command=returnTradeHistory
    pub async fn get_trade_history(
        &self,
        currency_pair: Option<&str>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<ApiResult> {
        self.execute(
            &RETURN_TRADE_HISTORY,
            vec![currency_pair.map(Into::into), start.map(Into::into), end.map(Into::into)],
        )
        .await
    }

    /// Trades belonging to one order (`ALL` when `None`)
    ///
    /// POST /tradingApi command=returnOrderTrades
    pub async fn get_order_trades(&self, order_number: Option<&str>) -> Result<ApiResult> {
        self.execute(&RETURN_ORDER_TRADES, vec![order_number.map(Into::into)]).await
    }

    /// Place a limit buy order.
    ///
    /// `OrderOptions::default()` sends fill-or-kill on, immediate-or-cancel
    /// and post-only off.
    ///
    /// POST /tradingApi command=buy
    pub async fn buy(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
        options: OrderOptions,
    ) -> Result<ApiResult> {
        self.execute(&BUY, order_args(currency_pair, rate, amount, options)).await
    }

    /// Place a limit sell order; see [`buy`](Self::buy) for the flags
    ///
    /// POST /tradingApi command=sell
    pub async fn sell(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
        options: OrderOptions,
    ) -> Result<ApiResult> {
        self.execute(&SELL, order_args(currency_pair, rate, amount, options)).await
    }

    /// POST /tradingApi command=cancelOrder
    pub async fn cancel_order(&self, order_number: &str) -> Result<ApiResult> {
        self.execute(&CANCEL_ORDER, vec![Some(order_number.into())]).await
    }

    /// Cancel an order and place a new one at `rate`, keeping the order's
    /// remaining amount unless `amount` is given
    ///
    /// POST /tradingApi command=moveOrder
    pub async fn move_order(
        &self,
        order_number: &str,
        rate: Decimal,
        amount: Option<Decimal>,
        post_only: Option<bool>,
        immediate_or_cancel: Option<bool>,
    ) -> Result<ApiResult> {
        self.execute(
            &MOVE_ORDER,
            vec![
                Some(order_number.into()),
                Some(rate.into()),
                amount.map(Into::into),
                immediate_or_cancel.map(Into::into),
                post_only.map(Into::into),
            ],
        )
        .await
    }

    /// POST /tradingApi command=returnMarginAccountSummary
    pub async fn get_margin_account_summary(&self) -> Result<ApiResult> {
        self.execute(&RETURN_MARGIN_ACCOUNT_SUMMARY, vec![]).await
    }

    /// POST /tradingApi command=marginBuy
    pub async fn margin_buy(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
        lending_rate: Option<Decimal>,
    ) -> Result<ApiResult> {
        self.execute(
            &MARGIN_BUY,
            vec![
                Some(currency_pair.into()),
                Some(rate.into()),
                Some(amount.into()),
                lending_rate.map(Into::into),
            ],
        )
        .await
    }

    /// POST /tradingApi command=marginSell
    pub async fn margin_sell(
        &self,
        currency_pair: &str,
        rate: Decimal,
        amount: Decimal,
        lending_rate: Option<Decimal>,
    ) -> Result<ApiResult> {
        self.execute(
            &MARGIN_SELL,
            vec![
                Some(currency_pair.into()),
                Some(rate.into()),
                Some(amount.into()),
                lending_rate.map(Into::into),
            ],
        )
        .await
    }

    /// Margin position for a pair (`ALL` when `None`)
    ///
    /// POST /tradingApi command=getMarginPosition
    pub async fn get_margin_position(&self, currency_pair: Option<&str>) -> Result<ApiResult> {
        self.execute(&GET_MARGIN_POSITION, vec![currency_pair.map(Into::into)]).await
    }

    /// POST /tradingApi command=closeMarginPosition
    pub async fn close_margin_position(&self, currency_pair: &str) -> Result<ApiResult> {
        self.execute(&CLOSE_MARGIN_POSITION, vec![Some(currency_pair.into())]).await
    }
}
