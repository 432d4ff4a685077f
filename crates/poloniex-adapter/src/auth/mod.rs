/*
[INPUT]:  Api key/secret pair and request bodies
[OUTPUT]: Validated credentials, HMAC signatures, nonces
[POS]:    Auth layer - handles Poloniex trading API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::ApiCredentials;
pub use nonce::{ClockNonce, NonceSource, SequenceNonce};
pub use signer::{RequestSigner, sign_body};
