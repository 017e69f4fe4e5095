//! Rate-limit aware dispatch.
//!
//! [`dispatch`] sends a prepared request and, while the server answers
//! `429 Too Many Requests`, waits a fixed delay and sends it again, up to
//! [`RetryPolicy::limit`] extra times. Transport failures and every other
//! status are returned to the caller on the first attempt.

use reqwest::{Request, StatusCode};
use tokio_util::sync::CancellationToken;

use crate::config::RetryPolicy;
use crate::error::{AlpacaError, Result};
use crate::transport::{HttpSend, RawResponse};

/// Send `request` through `sender`, retrying on 429.
///
/// The final response is returned whatever its status; classifying it is the
/// caller's job. If `cancel` fires during a send or a retry delay the call
/// returns [`AlpacaError::Cancelled`] without making further attempts.
pub async fn dispatch<S: HttpSend>(
    sender: &S,
    request: Request,
    policy: RetryPolicy,
    cancel: &CancellationToken,
) -> Result<RawResponse> {
    let mut retries = 0u32;
    loop {
        let attempt = request.try_clone().ok_or_else(|| {
            AlpacaError::Validation("request body cannot be replayed".to_owned())
        })?;

        let resp = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(AlpacaError::Cancelled),
            resp = sender.send(attempt) => resp?,
        };

        if resp.status != StatusCode::TOO_MANY_REQUESTS || retries >= policy.limit {
            return Ok(resp);
        }

        retries += 1;
        tracing::warn!(
            url = %request.url(),
            retry = retries,
            limit = policy.limit,
            delay = ?policy.delay,
            "rate limited, retrying"
        );

        tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(AlpacaError::Cancelled),
            () = tokio::time::sleep(policy.delay) => {}
        }
    }
}
