/*
[INPUT]:  HTTP response (status, headers, body)
[OUTPUT]: Immutable result with raw body and decoded JSON (if declared)
[POS]:    HTTP layer - uniform response wrapper for every command
[UPDATE]: When response classification or decoding rules change
*/

use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::http::{PoloniexError, Result};

/// Fragment of the exchange message sent when a nonce was already used
pub const NONCE_ERROR_FRAGMENT: &str = "Nonce must be greater than";

/// One HTTP response, read in full
#[derive(Debug, Clone)]
pub struct ApiResult {
    status: StatusCode,
    headers: HeaderMap,
    contents: String,
    decoded: Option<Value>,
}

impl ApiResult {
    /// Build a result from response parts.
    ///
    /// `decoded` is only populated when the headers declare
    /// `application/json`; a body that then fails to parse leaves it unset.
    pub fn new(status: StatusCode, headers: HeaderMap, contents: String) -> Self {
        let decoded = if is_json(&headers) {
            match serde_json::from_str(&contents) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(status = %status, error = %err, "response declared JSON but did not parse");
                    None
                }
            }
        } else {
            None
        };

        Self {
            status,
            headers,
            contents,
            decoded,
        }
    }

    /// Read the whole body of a transport response
    pub async fn from_response(response: Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let contents = response.text().await?;
        Ok(Self::new(status, headers, contents))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body text
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Decoded JSON body; `None` for non-JSON responses
    pub fn decoded(&self) -> Option<&Value> {
        self.decoded.as_ref()
    }

    /// True when the exchange rejected the request's nonce as too low.
    ///
    /// A resubmission with a fresh nonce may succeed.
    pub fn has_nonce_error(&self) -> bool {
        self.decoded
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|object| object.get("error"))
            .and_then(Value::as_str)
            .is_some_and(|message| message.contains(NONCE_ERROR_FRAGMENT))
    }

    /// Deserialize the decoded body into a typed view
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.decoded.as_ref().ok_or_else(|| {
            PoloniexError::InvalidResponse(format!(
                "no JSON body to decode (status {})",
                self.status
            ))
        })?;
        Ok(T::deserialize(value)?)
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn result_with(content_type: &'static str, body: &str) -> ApiResult {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        ApiResult::new(StatusCode::OK, headers, body.to_string())
    }

    #[test]
    fn test_decodes_json_body() {
        let result = result_with("application/json", r#"{"BTC_ETH":{"last":"0.05"}}"#);
        assert_eq!(result.decoded(), Some(&json!({"BTC_ETH": {"last": "0.05"}})));
        assert_eq!(result.contents(), r#"{"BTC_ETH":{"last":"0.05"}}"#);
        assert_eq!(result.status(), StatusCode::OK);
    }

    #[test]
    fn test_json_with_charset() {
        let result = result_with("application/json; charset=utf-8", "[1,2]");
        assert_eq!(result.decoded(), Some(&json!([1, 2])));
    }

    #[test]
    fn test_html_is_not_decoded() {
        let result = result_with("text/html", r#"{"BTC_ETH":{"last":"0.05"}}"#);
        assert!(result.decoded().is_none());
        assert_eq!(result.contents(), r#"{"BTC_ETH":{"last":"0.05"}}"#);
    }

    #[test]
    fn test_missing_content_type_is_not_decoded() {
        let result = ApiResult::new(StatusCode::OK, HeaderMap::new(), "{}".to_string());
        assert!(result.decoded().is_none());
    }

    #[test]
    fn test_malformed_json_leaves_decoded_unset() {
        let result = result_with("application/json", "<html>oops</html>");
        assert!(result.decoded().is_none());
        assert!(!result.has_nonce_error());
    }

    #[test]
    fn test_nonce_error_detected() {
        let result = result_with(
            "application/json",
            r#"{"error": "Nonce must be greater than 123. You provided 100."}"#,
        );
        assert!(result.has_nonce_error());
    }

    #[test]
    fn test_other_errors_are_not_nonce_errors() {
        assert!(!result_with("application/json", r#"{"error": "Invalid order number."}"#).has_nonce_error());
        assert!(!result_with("application/json", r#"{"BTC": "0.5"}"#).has_nonce_error());
        assert!(!result_with("application/json", r#"[{"error": "Nonce must be greater than 1."}]"#).has_nonce_error());
        assert!(!result_with("application/json", r#"{"error": 42}"#).has_nonce_error());
        assert!(
            !result_with("text/plain", r#"{"error": "Nonce must be greater than 123."}"#).has_nonce_error()
        );
    }

    #[test]
    fn test_parse_typed_view() {
        let result = result_with("application/json", r#"{"BTC":"0.5","ETH":"2"}"#);
        let balances: BTreeMap<String, String> = result.parse().unwrap();
        assert_eq!(balances.get("ETH").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_parse_without_json_fails() {
        let result = result_with("text/html", "<html></html>");
        let err = result.parse::<Value>().unwrap_err();
        assert!(matches!(err, PoloniexError::InvalidResponse(_)));
    }
}
