/*
[INPUT]:  Optional api key and api secret
[OUTPUT]: Validated credential pair (or none) for signed requests
[POS]:    Auth layer - credential pairing rules
[UPDATE]: When credential sources or validation rules change
*/

use std::fmt;

use crate::http::{PoloniexError, Result};

/// API key and secret used for trading requests
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: String,
}

impl ApiCredentials {
    /// Create credentials from explicit values
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Pair up optional key and secret.
    ///
    /// Both present gives `Some`, both absent gives `None`, anything else is
    /// [`PoloniexError::IncompleteCredentials`]. Empty strings count as absent.
    pub fn from_parts(api_key: Option<&str>, api_secret: Option<&str>) -> Result<Option<Self>> {
        let api_key = api_key.filter(|value| !value.is_empty());
        let api_secret = api_secret.filter(|value| !value.is_empty());

        match (api_key, api_secret) {
            (Some(key), Some(secret)) => Ok(Some(Self::new(key, secret))),
            (None, None) => Ok(None),
            _ => Err(PoloniexError::IncompleteCredentials),
        }
    }

    /// API key, sent in the `Key` header
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Secret used as the HMAC key. Never log the return value.
    pub fn expose_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_present() {
        let creds = ApiCredentials::from_parts(Some("key"), Some("secret"))
            .unwrap()
            .expect("credentials");
        assert_eq!(creds.api_key(), "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn test_both_absent() {
        assert!(ApiCredentials::from_parts(None, None).unwrap().is_none());
        assert!(ApiCredentials::from_parts(Some(""), Some("")).unwrap().is_none());
    }

    #[test]
    fn test_mismatched_pair() {
        for (key, secret) in [
            (Some("key"), None),
            (None, Some("secret")),
            (Some("key"), Some("")),
            (Some(""), Some("secret")),
        ] {
            let err = ApiCredentials::from_parts(key, secret).unwrap_err();
            assert!(matches!(err, PoloniexError::IncompleteCredentials));
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = ApiCredentials::new("key", "super-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("key"));
        assert!(!debug.contains("super-secret"));
    }
}
