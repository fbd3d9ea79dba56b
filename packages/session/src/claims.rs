//! Token claim decoding.
//!
//! The backend issues a standard three-segment JWT. The client never verifies
//! the signature — no key material ships to the browser — it only decodes the
//! payload segment and reads a fixed set of claims. The backend re-validates
//! the token on every API call, so a tampered token buys an attacker nothing
//! beyond a broken-looking UI.
//!
//! Claims are mapped to named, typed fields via `#[serde(rename)]` rather
//! than looked up dynamically, so a missing or mistyped claim is a
//! [`TokenError::Malformed`] instead of a silently absent value.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use thiserror::Error;

/// The claim set the application consumes, under the exact names the backend
/// emits (WS-* URIs for identity and role, short names for the rest).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress")]
    pub email: String,
    #[serde(rename = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role")]
    pub role: String,
    /// Model identifier; `"-1"` marks an account that is not a model.
    #[serde(rename = "ModelId", default)]
    pub model_id: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    /// Expiry, Unix seconds.
    pub exp: i64,
}

/// Why a token could not be turned into a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a decodable JWT: wrong segment count, bad base64, or a payload
    /// missing required claims.
    #[error("undecodable token: {0}")]
    Malformed(String),
    /// Decoded fine, but its `exp` is not in the future.
    #[error("token expired")]
    Expired,
}

impl Claims {
    /// Decode the payload segment of a JWT without verifying its signature.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return Err(TokenError::Malformed("expected three segments".into())),
        };
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| TokenError::Malformed(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn forge(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn decodes_full_claim_set() {
        let token = forge(json!({
            "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress": "eva@agency.test",
            "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "Model",
            "ModelId": "42",
            "firstName": "Eva",
            "exp": 2_000_000_000,
        }));
        let claims = Claims::decode(&token).unwrap();
        assert_eq!(claims.email, "eva@agency.test");
        assert_eq!(claims.role, "Model");
        assert_eq!(claims.model_id.as_deref(), Some("42"));
        assert_eq!(claims.first_name.as_deref(), Some("Eva"));
        assert_eq!(claims.exp, 2_000_000_000);
    }

    #[test]
    fn optional_claims_may_be_absent() {
        let token = forge(json!({
            "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress": "boss@agency.test",
            "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "Manager",
            "exp": 2_000_000_000,
        }));
        let claims = Claims::decode(&token).unwrap();
        assert_eq!(claims.model_id, None);
        assert_eq!(claims.first_name, None);
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(
            Claims::decode("only-one-segment"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            Claims::decode("a.b"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            Claims::decode("a.b.c.d"),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_payload_that_is_not_base64() {
        assert!(matches!(
            Claims::decode("h.!!not-base64!!.s"),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_payload_missing_required_claims() {
        // No exp, no email, no role.
        let token = forge(json!({ "sub": "whoever" }));
        assert!(matches!(Claims::decode(&token), Err(TokenError::Malformed(_))));
    }
}
