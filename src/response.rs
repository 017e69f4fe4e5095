//! Response classification.

use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::Result;
use crate::transport::RawResponse;

/// Split a response into success or error by status code.
///
/// Anything below 300 is returned unchanged; 300 and above is consumed and
/// decoded into an API error.
pub fn verify(resp: RawResponse) -> Result<RawResponse> {
    if resp.status.as_u16() < 300 {
        Ok(resp)
    } else {
        Err(codec::decode_error(resp.status, &resp.body))
    }
}

/// Verify, then decode the body into `R`.
pub fn into_result<R: DeserializeOwned>(resp: RawResponse) -> Result<R> {
    let resp = verify(resp)?;
    codec::decode(resp.status, &resp.body)
}

/// Verify and discard the body.
pub fn into_unit(resp: RawResponse) -> Result<()> {
    verify(resp).map(drop)
}
