/*
[INPUT]:  Order execution preferences
[OUTPUT]: Typed order flags with exchange defaults
[POS]:    Data layer - request option types for trading commands
[UPDATE]: When the exchange adds order flags or changes their defaults
*/

use serde::{Deserialize, Serialize};

/// Execution flags for `buy` / `sell`, sent as `1` / `0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOptions {
    /// Fill entirely or abort
    pub fill_or_kill: bool,
    /// Cancel whatever does not fill immediately
    pub immediate_or_cancel: bool,
    /// Only place the order if no part of it fills immediately
    pub post_only: bool,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            fill_or_kill: true,
            immediate_or_cancel: false,
            post_only: false,
        }
    }
}

impl OrderOptions {
    /// Resting order with no execution constraints
    pub fn resting() -> Self {
        Self {
            fill_or_kill: false,
            ..Self::default()
        }
    }

    pub fn post_only() -> Self {
        Self {
            post_only: true,
            ..Self::resting()
        }
    }

    pub fn immediate_or_cancel() -> Self {
        Self {
            immediate_or_cancel: true,
            ..Self::resting()
        }
    }
}
