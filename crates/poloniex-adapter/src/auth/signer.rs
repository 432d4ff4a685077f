/*
[INPUT]:  Encoded request body and api secret
[OUTPUT]: Lowercase hex HMAC-SHA512 signature (Sign header)
[POS]:    Auth layer - request signing for trading endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::ApiCredentials;

type HmacSha512 = Hmac<Sha512>;

/// Signs trading request bodies
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: ApiCredentials,
}

impl RequestSigner {
    /// Create a new request signer for the given credentials
    pub fn new(credentials: ApiCredentials) -> Self {
        Self { credentials }
    }

    /// API key sent alongside the signature
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// HMAC-SHA512 of the body keyed by the secret, lowercase hex
    pub fn sign(&self, body: &str) -> String {
        sign_body(self.credentials.expose_secret(), body)
    }
}

/// Sign a form-encoded body with the given secret
pub fn sign_body(secret: &str, body: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
