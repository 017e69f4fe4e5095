//! Wire encoding of request parameters and decoding of response bodies.
//!
//! Reads carry their parameters in the query string, writes carry a JSON
//! body. Optional parameters are `Option<T>` fields marked
//! `skip_serializing_if = "Option::is_none"`, so an absent value never
//! reaches the wire. Decimal amounts are `rust_decimal::Decimal`, which
//! serializes as a JSON string.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AlpacaError, ApiError, ApiErrorBody, Result};

/// Rendered request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    /// No parameters.
    #[default]
    Empty,
    /// URL-encoded query string, without the leading `?`.
    Query(String),
    /// Serialized JSON body.
    Json(Vec<u8>),
}

impl Payload {
    /// Encode `params` as a query string.
    pub fn query<T: Serialize + ?Sized>(params: &T) -> Result<Self> {
        let encoded =
            serde_html_form::to_string(params).map_err(|e| AlpacaError::Encode(e.to_string()))?;
        if encoded.is_empty() {
            Ok(Self::Empty)
        } else {
            Ok(Self::Query(encoded))
        }
    }

    /// Encode `body` as JSON.
    pub fn json<T: Serialize + ?Sized>(body: &T) -> Result<Self> {
        serde_json::to_vec(body)
            .map(Self::Json)
            .map_err(|e| AlpacaError::Encode(e.to_string()))
    }

    pub fn query_str(&self) -> Option<&str> {
        match self {
            Self::Query(q) => Some(q),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Json(b) => Some(b),
            _ => None,
        }
    }
}

/// Decode a success body into `R`. Unknown fields are ignored.
pub fn decode<R: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<R> {
    serde_json::from_slice(body).map_err(|source| AlpacaError::Decode {
        status,
        body: String::from_utf8_lossy(body).into_owned(),
        source,
    })
}

/// Turn an error body into an [`AlpacaError`].
///
/// Bodies shaped like `{"code": 40010001, "message": "..."}` become
/// [`AlpacaError::Api`]; anything else is kept verbatim in
/// [`AlpacaError::HttpStatus`].
pub fn decode_error(status: StatusCode, body: &[u8]) -> AlpacaError {
    let text = String::from_utf8_lossy(body).trim().to_owned();
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(parsed) => AlpacaError::Api(ApiError {
            status,
            code: parsed.code,
            message: parsed.message,
            body: text,
        }),
        Err(_) => AlpacaError::HttpStatus { status, body: text },
    }
}
