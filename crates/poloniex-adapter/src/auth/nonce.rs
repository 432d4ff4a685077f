/*
[INPUT]:  Wall clock (chrono) or a caller-chosen starting value
[OUTPUT]: Strictly increasing nonces for signed requests
[POS]:    Auth layer - replay protection for trading endpoints
[UPDATE]: When nonce derivation or concurrency guarantees change
*/

use chrono::Utc;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of nonces for trading requests.
///
/// Two calls on the same source must return strictly increasing values, even
/// when made from different threads.
pub trait NonceSource: Debug + Send + Sync {
    fn next_nonce(&self) -> u64;
}

/// Clock-derived nonce: microseconds since the Unix epoch.
///
/// Falls back to `last + 1` whenever the clock has not advanced (or went
/// backwards) since the previous call.
#[derive(Debug, Default)]
pub struct ClockNonce {
    last: AtomicU64,
}

impl ClockNonce {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_micros() -> u64 {
        u64::try_from(Utc::now().timestamp_micros()).unwrap_or(0)
    }
}

impl NonceSource for ClockNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::now_micros();
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now.max(previous.saturating_add(1))
    }
}

/// Counter nonce starting at a fixed value; deterministic for tests and for
/// callers that persist their own high-water mark.
#[derive(Debug)]
pub struct SequenceNonce {
    next: AtomicU64,
}

impl SequenceNonce {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl NonceSource for SequenceNonce {
    fn next_nonce(&self) -> u64 {
        self.next.fetch_add(1, Ordering::AcqRel)
    }
}
