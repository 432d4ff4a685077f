/*
[INPUT]:  Account, currency and time-range parameters
[OUTPUT]: Balances, addresses, transfers, withdrawals and lending results
[POS]:    HTTP layer - account and lending endpoints (require key + HMAC signature)
[UPDATE]: When adding new account endpoints or changing parameter defaults
*/

// ### Account Endpoints

use rust_decimal::Decimal;

use crate::http::commands::{
    CANCEL_LOAN_OFFER, CREATE_LOAN_OFFER, GENERATE_NEW_ADDRESS, RETURN_ACTIVE_LOANS,
    RETURN_AVAILABLE_ACCOUNT_BALANCES, RETURN_BALANCES, RETURN_COMPLETE_BALANCES,
    RETURN_DEPOSIT_ADDRESSES, RETURN_DEPOSITS_WITHDRAWALS, RETURN_FEE_INFO,
    RETURN_LENDING_HISTORY, RETURN_OPEN_LOAN_OFFERS, RETURN_TRADABLE_BALANCES, TOGGLE_AUTO_RENEW,
    TRANSFER_BALANCE, WITHDRAW,
};
use crate::http::{ApiResult, PoloniexClient, Result};

impl PoloniexClient {
    /// POST /tradingApi command=returnBalances
    pub async fn get_balances(&self) -> Result<ApiResult> {
        self.execute(&RETURN_BALANCES, vec![]).await
    }

    /// Balances with on-orders and BTC value (`exchange` account when `None`)
    ///
    /// POST /tradingApi command=returnCompleteBalances
    pub async fn get_complete_balances(&self, account: Option<&str>) -> Result<ApiResult> {
        self.execute(&RETURN_COMPLETE_BALANCES, vec![account.map(Into::into)]).await
    }

    /// POST /tradingApi command=returnDepositAddresses
    pub async fn get_deposit_addresses(&self) -> Result<ApiResult> {
        self.execute(&RETURN_DEPOSIT_ADDRESSES, vec![]).await
    }

    /// POST /tradingApi command=generateNewAddress
    pub async fn generate_new_address(&self, currency: &str) -> Result<ApiResult> {
        self.execute(&GENERATE_NEW_ADDRESS, vec![Some(currency.into())]).await
    }

    /// Deposits and withdrawals between two UNIX timestamps
    ///
    /// POST /tradingApi command=returnDepositsWithdrawals
    pub async fn get_deposits_withdrawals(&self, start: i64, end: i64) -> Result<ApiResult> {
        self.execute(
            &RETURN_DEPOSITS_WITHDRAWALS,
            vec![Some(start.into()), Some(end.into())],
        )
        .await
    }

    /// Withdraw to an address; `payment_id` is needed by some currencies
    ///
    /// POST /tradingApi command=withdraw
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> Result<ApiResult> {
        self.execute(
            &WITHDRAW,
            vec![
                Some(currency.into()),
                Some(amount.into()),
                Some(address.into()),
                payment_id.map(Into::into),
            ],
        )
        .await
    }

    /// POST /tradingApi command=returnFeeInfo
    pub async fn get_fee_info(&self) -> Result<ApiResult> {
        self.execute(&RETURN_FEE_INFO, vec![]).await
    }

    /// POST /tradingApi command=returnAvailableAccountBalances
    pub async fn get_available_account_balances(&self, account: Option<&str>) -> Result<ApiResult> {
        self.execute(&RETURN_AVAILABLE_ACCOUNT_BALANCES, vec![account.map(Into::into)])
            .await
    }

    /// POST /tradingApi command=returnTradableBalances
    pub async fn get_tradable_balances(&self) -> Result<ApiResult> {
        self.execute(&RETURN_TRADABLE_BALANCES, vec![]).await
    }

    /// Move funds between `exchange`, `margin` and `lending` accounts
    ///
    /// POST /tradingApi command=transferBalance
    pub async fn transfer_balance(
        &self,
        currency: &str,
        amount: Decimal,
        from_account: &str,
        to_account: &str,
    ) -> Result<ApiResult> {
        self.execute(
            &TRANSFER_BALANCE,
            vec![
                Some(currency.into()),
                Some(amount.into()),
                Some(from_account.into()),
                Some(to_account.into()),
            ],
        )
        .await
    }

    /// Offer a loan; `duration` in days, `auto_renew` defaults to off
    ///
    /// POST /tradingApi command=createLoanOffer
    pub async fn create_loan_offer(
        &self,
        currency: &str,
        amount: Decimal,
        lending_rate: Decimal,
        duration: u32,
        auto_renew: Option<bool>,
    ) -> Result<ApiResult> {
        self.execute(
            &CREATE_LOAN_OFFER,
            vec![
                Some(currency.into()),
                Some(amount.into()),
                Some(lending_rate.into()),
                Some(duration.into()),
                auto_renew.map(Into::into),
            ],
        )
        .await
    }

    /// POST /tradingApi command=cancelLoanOffer
    pub async fn cancel_loan_offer(&self, order_number: u64) -> Result<ApiResult> {
        self.execute(&CANCEL_LOAN_OFFER, vec![Some(order_number.into())]).await
    }

    /// POST /tradingApi command=returnOpenLoanOffers
    pub async fn get_open_loan_offers(&self) -> Result<ApiResult> {
        self.execute(&RETURN_OPEN_LOAN_OFFERS, vec![]).await
    }

    /// POST /tradingApi command=returnActiveLoans
    pub async fn get_active_loans(&self) -> Result<ApiResult> {
        self.execute(&RETURN_ACTIVE_LOANS, vec![]).await
    }

    /// POST /tradingApi command=returnLendingHistory
    pub async fn get_lending_history(&self, start: i64, end: i64, limit: Option<u32>) -> Result<ApiResult> {
        self.execute(
            &RETURN_LENDING_HISTORY,
            vec![Some(start.into()), Some(end.into()), limit.map(Into::into)],
        )
        .await
    }

    /// POST /tradingApi command=toggleAutoRenew
    pub async fn toggle_auto_renew(&self, order_number: u64) -> Result<ApiResult> {
        self.execute(&TOGGLE_AUTO_RENEW, vec![Some(order_number.into())]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::SequenceNonce;
    use crate::http::{ClientConfig, PoloniexClient};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn trading_client(server: &MockServer) -> PoloniexClient {
        PoloniexClient::with_credentials(
            Some("api-key"),
            Some("secret"),
            ClientConfig::with_base_url(server.uri()),
        )
        .expect("client init")
        .with_nonce_source(Arc::new(SequenceNonce::starting_at(1)))
    }

    #[tokio::test]
    async fn test_withdraw_sends_empty_payment_id() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/tradingApi"))
            .and(header(
                "Sign",
                "495ed033b9491d14a5e8854e4624c6e0e7e785ed39f2e20409b34c5675bf9f3883889058159e3a3cfa1668d7c1a66511b308662ea7e9f915d39ccf08af0a693f",
            ))
            .and(body_string(
                "command=withdraw&currency=BTC&amount=0.1&address=1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa&paymentId=&nonce=1",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"response":"Withdrew 0.1 BTC."}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let result = trading_client(&server)
            .withdraw(
                "BTC",
                Decimal::from_str("0.1").unwrap(),
                "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
                None,
            )
            .await
            .expect("withdraw failed");
        assert_eq!(result.decoded().expect("decoded")["response"], "Withdrew 0.1 BTC.");
    }

    #[tokio::test]
    async fn test_complete_balances_default_account() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/tradingApi"))
            .and(body_string("command=returnCompleteBalances&account=exchange&nonce=1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"LTC":{"available":"5.015","onOrders":"1.0025","btcValue":"0.078"}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        trading_client(&server)
            .get_complete_balances(None)
            .await
            .expect("get_complete_balances failed");
    }

    #[tokio::test]
    async fn test_create_loan_offer_auto_renew_default() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/tradingApi"))
            .and(body_string(
                "command=createLoanOffer&currency=BTC&amount=0.5&lendingRate=0.0002&duration=2&autoRenew=0&nonce=1",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"success":1,"message":"Loan order placed.","orderID":10590}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        trading_client(&server)
            .create_loan_offer(
                "BTC",
                Decimal::from_str("0.5").unwrap(),
                Decimal::from_str("0.0002").unwrap(),
                2,
                None,
            )
            .await
            .expect("create_loan_offer failed");
    }

    #[tokio::test]
    async fn test_lending_history_with_limit() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/tradingApi"))
            .and(body_string("command=returnLendingHistory&start=1410158341&end=1410499372&limit=5&nonce=1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let result = trading_client(&server)
            .get_lending_history(1_410_158_341, 1_410_499_372, Some(5))
            .await
            .expect("get_lending_history failed");
        assert_eq!(result.decoded(), Some(&serde_json::json!([])));
    }

    #[tokio::test]
    async fn test_cancel_loan_offer_large_order_number() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/tradingApi"))
            .and(body_string(
                "command=cancelLoanOffer&orderNumber=18446744073709551615&nonce=1",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"success":1,"message":"Loan offer canceled."}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        trading_client(&server)
            .cancel_loan_offer(u64::MAX)
            .await
            .expect("cancel_loan_offer failed");
    }
}
