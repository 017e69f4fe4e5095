//! Credential schemes and request signing.
//!
//! Alpaca accepts three mutually exclusive ways of authenticating. A client
//! holds at most one [`Credentials`] value; [`Credentials::authorize`] turns
//! it into request headers without any I/O.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::constants::{
    ENV_API_KEY_ID, ENV_API_SECRET_KEY, HEADER_API_KEY_ID, HEADER_API_SECRET_KEY,
};
use crate::error::{AlpacaError, Result};

/// One of Alpaca's credential schemes.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// OAuth access token, sent as `Authorization: Bearer <token>`.
    OAuth { token: String },
    /// Trading API key pair, sent as `APCA-API-KEY-ID` / `APCA-API-SECRET-KEY`.
    ApiKey { key_id: String, secret: String },
    /// Broker API key pair, sent as HTTP basic auth.
    BrokerKey { key: String, secret: String },
}

impl Credentials {
    pub fn oauth(token: impl Into<String>) -> Self {
        Self::OAuth {
            token: token.into(),
        }
    }

    pub fn api_key(key_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::ApiKey {
            key_id: key_id.into(),
            secret: secret.into(),
        }
    }

    pub fn broker_key(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::BrokerKey {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Read an API key pair from `APCA_API_KEY_ID` and `APCA_API_SECRET_KEY`.
    ///
    /// Values are trimmed. A missing or blank variable is reported as
    /// [`AlpacaError::MissingCredential`].
    pub fn from_env() -> Result<Self> {
        let read = |name: &'static str| {
            std::env::var(name)
                .ok()
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(AlpacaError::MissingCredential(name))
        };
        Ok(Self::api_key(read(ENV_API_KEY_ID)?, read(ENV_API_SECRET_KEY)?))
    }

    /// Insert the headers for this scheme into `headers`.
    ///
    /// Fails with [`AlpacaError::MissingCredential`] if a required field is
    /// empty, or [`AlpacaError::Validation`] if a value is not a legal header
    /// value. `headers` is left untouched on failure.
    pub fn authorize(&self, headers: &mut HeaderMap) -> Result<()> {
        match self {
            Self::OAuth { token } => {
                require(token, "OAuth token")?;
                headers.insert(
                    header::AUTHORIZATION,
                    sensitive(&format!("Bearer {token}"), "OAuth token")?,
                );
            }
            Self::ApiKey { key_id, secret } => {
                require(key_id, "API key ID")?;
                require(secret, "API secret key")?;
                let key_id = sensitive(key_id, "API key ID")?;
                let secret = sensitive(secret, "API secret key")?;
                headers.insert(HEADER_API_KEY_ID, key_id);
                headers.insert(HEADER_API_SECRET_KEY, secret);
            }
            Self::BrokerKey { key, secret } => {
                require(key, "broker key")?;
                require(secret, "broker secret")?;
                let encoded = STANDARD.encode(format!("{key}:{secret}"));
                headers.insert(
                    header::AUTHORIZATION,
                    sensitive(&format!("Basic {encoded}"), "broker key")?,
                );
            }
        }
        Ok(())
    }
}

/// Sign with an optional scheme; `None` means the client was never configured.
pub(crate) fn authorize(credentials: Option<&Credentials>, headers: &mut HeaderMap) -> Result<()> {
    credentials
        .ok_or(AlpacaError::AuthNotConfigured)?
        .authorize(headers)
}

fn require(value: &str, what: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(AlpacaError::MissingCredential(what));
    }
    Ok(())
}

fn sensitive(value: &str, what: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value).map_err(|_| {
        AlpacaError::Validation(format!("{what} contains invalid header characters"))
    })?;
    value.set_sensitive(true);
    Ok(value)
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OAuth { .. } => f.debug_struct("OAuth").finish_non_exhaustive(),
            Self::ApiKey { key_id, .. } => f
                .debug_struct("ApiKey")
                .field("key_id", key_id)
                .finish_non_exhaustive(),
            Self::BrokerKey { key, .. } => f
                .debug_struct("BrokerKey")
                .field("key", key)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oauth_sets_bearer_header() {
        let mut headers = HeaderMap::new();
        Credentials::oauth("tok").authorize(&mut headers).unwrap();
        assert_eq!(headers[header::AUTHORIZATION], "Bearer tok");
    }

    #[test]
    fn api_key_sets_both_headers() {
        let mut headers = HeaderMap::new();
        Credentials::api_key("id", "secret")
            .authorize(&mut headers)
            .unwrap();
        assert_eq!(headers[HEADER_API_KEY_ID], "id");
        assert_eq!(headers[HEADER_API_SECRET_KEY], "secret");
        assert!(!headers.contains_key(header::AUTHORIZATION));
    }

    #[test]
    fn invalid_secret_leaves_headers_untouched() {
        let mut headers = HeaderMap::new();
        let err = Credentials::api_key("id", "bad\nsecret")
            .authorize(&mut headers)
            .unwrap_err();
        assert!(matches!(err, AlpacaError::Validation(_)), "{err:?}");
        assert!(headers.is_empty());
    }

    #[test]
    fn broker_key_uses_basic_auth() {
        let mut headers = HeaderMap::new();
        Credentials::broker_key("user", "pass")
            .authorize(&mut headers)
            .unwrap();
        // base64("user:pass")
        assert_eq!(headers[header::AUTHORIZATION], "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn empty_fields_are_rejected_without_touching_headers() {
        let cases = [
            Credentials::oauth(""),
            Credentials::api_key("", "secret"),
            Credentials::api_key("id", ""),
            Credentials::broker_key("", "secret"),
            Credentials::broker_key("key", ""),
        ];
        for creds in cases {
            let mut headers = HeaderMap::new();
            let err = creds.authorize(&mut headers).unwrap_err();
            assert!(
                matches!(err, AlpacaError::MissingCredential(_)),
                "{creds:?} gave {err:?}"
            );
            assert!(headers.is_empty());
        }
    }

    #[test]
    fn unconfigured_client_cannot_sign() {
        let mut headers = HeaderMap::new();
        let err = authorize(None, &mut headers).unwrap_err();
        assert!(matches!(err, AlpacaError::AuthNotConfigured));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let rendered = format!("{:?}", Credentials::api_key("id", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
