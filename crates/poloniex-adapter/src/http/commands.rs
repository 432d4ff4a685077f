/*
[INPUT]:  Command name, access level and parameter schema
[OUTPUT]: Declarative command table and the generic dispatcher over it
[POS]:    HTTP layer - maps every remote command onto the two request primitives
[UPDATE]: When the exchange adds, renames or changes defaults of a command
*/

use crate::http::params::{ParamValue, RequestParams};
use crate::http::result::ApiResult;
use crate::http::{PoloniexClient, PoloniexError, Result};

/// Which request primitive a command goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// GET /public
    Public,
    /// Signed POST /tradingApi
    Trading,
}

/// Value used when the caller leaves a parameter out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    Str(&'static str),
    Int(i64),
}

impl From<ParamDefault> for ParamValue {
    fn from(value: ParamDefault) -> Self {
        match value {
            ParamDefault::Str(value) => ParamValue::from(value),
            ParamDefault::Int(value) => ParamValue::Int(value),
        }
    }
}

/// One named parameter of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    /// `None` means an omitted argument is sent as an empty value
    pub default: Option<ParamDefault>,
}

const fn param(name: &'static str) -> ParamSpec {
    ParamSpec { name, default: None }
}

const fn param_or(name: &'static str, default: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        default: Some(ParamDefault::Str(default)),
    }
}

const fn flag_or(name: &'static str, default: i64) -> ParamSpec {
    ParamSpec {
        name,
        default: Some(ParamDefault::Int(default)),
    }
}

/// A remote command: wire name, access level, parameters in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub access: Access,
    pub params: &'static [ParamSpec],
}

impl Command {
    const fn public(name: &'static str, params: &'static [ParamSpec]) -> Self {
        Self {
            name,
            access: Access::Public,
            params,
        }
    }

    const fn trading(name: &'static str, params: &'static [ParamSpec]) -> Self {
        Self {
            name,
            access: Access::Trading,
            params,
        }
    }

    /// Assemble `command=<name>` followed by each parameter.
    ///
    /// `args` lines up with [`Command::params`]; `None` takes the table
    /// default, or an empty value when there is none.
    pub fn build_params(&self, args: Vec<Option<ParamValue>>) -> Result<RequestParams> {
        if args.len() != self.params.len() {
            return Err(PoloniexError::InvalidArguments {
                command: self.name,
                expected: self.params.len(),
                actual: args.len(),
            });
        }

        let mut params = RequestParams::command(self.name);
        for (spec, arg) in self.params.iter().zip(args) {
            let value = arg
                .or_else(|| spec.default.map(ParamValue::from))
                .unwrap_or(ParamValue::Null);
            params.insert(spec.name, value);
        }
        Ok(params)
    }
}

const CURRENCY_PAIR_ALL: ParamSpec = param_or("currencyPair", "ALL");
const ACCOUNT_EXCHANGE: ParamSpec = param_or("account", "exchange");

// Public market data
pub const RETURN_TICKER: Command = Command::public("returnTicker", &[]);
pub const RETURN_24H_VOLUME: Command = Command::public("return24hVolume", &[]);
pub const RETURN_ORDER_BOOK: Command =
    Command::public("returnOrderBook", &[CURRENCY_PAIR_ALL, flag_or("depth", 10)]);
pub const RETURN_PUBLIC_TRADE_HISTORY: Command = Command::public(
    "returnTradeHistory",
    &[CURRENCY_PAIR_ALL, param("start"), param("end")],
);
pub const RETURN_CHART_DATA: Command = Command::public(
    "returnChartData",
    &[CURRENCY_PAIR_ALL, param("start"), param("end"), param("period")],
);
pub const RETURN_CURRENCIES: Command = Command::public("returnCurrencies", &[]);
pub const RETURN_LOAN_ORDERS: Command =
    Command::public("returnLoanOrders", &[param_or("currency", "BTC"), param("limit")]);

// Account
pub const RETURN_BALANCES: Command = Command::trading("returnBalances", &[]);
pub const RETURN_COMPLETE_BALANCES: Command =
    Command::trading("returnCompleteBalances", &[ACCOUNT_EXCHANGE]);
pub const RETURN_DEPOSIT_ADDRESSES: Command = Command::trading("returnDepositAddresses", &[]);
pub const GENERATE_NEW_ADDRESS: Command = Command::trading("generateNewAddress", &[param("currency")]);
pub const RETURN_DEPOSITS_WITHDRAWALS: Command =
    Command::trading("returnDepositsWithdrawals", &[param("start"), param("end")]);
pub const RETURN_FEE_INFO: Command = Command::trading("returnFeeInfo", &[]);
pub const RETURN_AVAILABLE_ACCOUNT_BALANCES: Command =
    Command::trading("returnAvailableAccountBalances", &[ACCOUNT_EXCHANGE]);
pub const RETURN_TRADABLE_BALANCES: Command = Command::trading("returnTradableBalances", &[]);
pub const TRANSFER_BALANCE: Command = Command::trading(
    "transferBalance",
    &[param("currency"), param("amount"), param("fromAccount"), param("toAccount")],
);
pub const WITHDRAW: Command = Command::trading(
    "withdraw",
    &[param("currency"), param("amount"), param("address"), param("paymentId")],
);

// Orders
pub const RETURN_OPEN_ORDERS: Command = Command::trading("returnOpenOrders", &[CURRENCY_PAIR_ALL]);
pub const RETURN_TRADE_HISTORY: Command = Command::trading(
    "returnTradeHistory",
    &[CURRENCY_PAIR_ALL, param("start"), param("end")],
);
pub const RETURN_ORDER_TRADES: Command =
    Command::trading("returnOrderTrades", &[param_or("orderNumber", "ALL")]);
const ORDER_PARAMS: &[ParamSpec] = &[
    param("currencyPair"),
    param("rate"),
    param("amount"),
    flag_or("fillOrKill", 1),
    flag_or("immediateOrCancel", 0),
    flag_or("postOnly", 0),
];
pub const BUY: Command = Command::trading("buy", ORDER_PARAMS);
pub const SELL: Command = Command::trading("sell", ORDER_PARAMS);
pub const CANCEL_ORDER: Command = Command::trading("cancelOrder", &[param("orderNumber")]);
pub const MOVE_ORDER: Command = Command::trading(
    "moveOrder",
    &[
        param("orderNumber"),
        param("rate"),
        param("amount"),
        param("immediateOrCancel"),
        param("postOnly"),
    ],
);

// Margin
pub const RETURN_MARGIN_ACCOUNT_SUMMARY: Command =
    Command::trading("returnMarginAccountSummary", &[]);
const MARGIN_ORDER_PARAMS: &[ParamSpec] = &[
    param("currencyPair"),
    param("rate"),
    param("amount"),
    param("lendingRate"),
];
pub const MARGIN_BUY: Command = Command::trading("marginBuy", MARGIN_ORDER_PARAMS);
pub const MARGIN_SELL: Command = Command::trading("marginSell", MARGIN_ORDER_PARAMS);
pub const GET_MARGIN_POSITION: Command = Command::trading("getMarginPosition", &[CURRENCY_PAIR_ALL]);
pub const CLOSE_MARGIN_POSITION: Command =
    Command::trading("closeMarginPosition", &[param("currencyPair")]);

// Lending
pub const CREATE_LOAN_OFFER: Command = Command::trading(
    "createLoanOffer",
    &[
        param("currency"),
        param("amount"),
        param("lendingRate"),
        param("duration"),
        flag_or("autoRenew", 0),
    ],
);
pub const CANCEL_LOAN_OFFER: Command = Command::trading("cancelLoanOffer", &[param("orderNumber")]);
pub const RETURN_OPEN_LOAN_OFFERS: Command = Command::trading("returnOpenLoanOffers", &[]);
pub const RETURN_ACTIVE_LOANS: Command = Command::trading("returnActiveLoans", &[]);
pub const RETURN_LENDING_HISTORY: Command = Command::trading(
    "returnLendingHistory",
    &[param("start"), param("end"), param("limit")],
);
pub const TOGGLE_AUTO_RENEW: Command = Command::trading("toggleAutoRenew", &[param("orderNumber")]);

/// Every command the client knows about
pub const COMMANDS: &[Command] = &[
    RETURN_TICKER,
    RETURN_24H_VOLUME,
    RETURN_ORDER_BOOK,
    RETURN_PUBLIC_TRADE_HISTORY,
    RETURN_CHART_DATA,
    RETURN_CURRENCIES,
    RETURN_LOAN_ORDERS,
    RETURN_BALANCES,
    RETURN_COMPLETE_BALANCES,
    RETURN_DEPOSIT_ADDRESSES,
    GENERATE_NEW_ADDRESS,
    RETURN_DEPOSITS_WITHDRAWALS,
    RETURN_FEE_INFO,
    RETURN_AVAILABLE_ACCOUNT_BALANCES,
    RETURN_TRADABLE_BALANCES,
    TRANSFER_BALANCE,
    WITHDRAW,
    RETURN_OPEN_ORDERS,
    RETURN_TRADE_HISTORY,
    RETURN_ORDER_TRADES,
    BUY,
    SELL,
    CANCEL_ORDER,
    MOVE_ORDER,
    RETURN_MARGIN_ACCOUNT_SUMMARY,
    MARGIN_BUY,
    MARGIN_SELL,
    GET_MARGIN_POSITION,
    CLOSE_MARGIN_POSITION,
    CREATE_LOAN_OFFER,
    CANCEL_LOAN_OFFER,
    RETURN_OPEN_LOAN_OFFERS,
    RETURN_ACTIVE_LOANS,
    RETURN_LENDING_HISTORY,
    TOGGLE_AUTO_RENEW,
];

/// Look up a command by wire name and access level.
///
/// `returnTradeHistory` exists both publicly and for trading.
pub fn find_command(name: &str, access: Access) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|command| command.name == name && command.access == access)
}

impl PoloniexClient {
    /// Run a command from the table with positional arguments
    pub async fn execute(&self, command: &Command, args: Vec<Option<ParamValue>>) -> Result<ApiResult> {
        let params = command.build_params(args)?;
        match command.access {
            Access::Public => self.send_public_request(params).await,
            Access::Trading => self.send_trading_request(params).await,
        }
    }
}
