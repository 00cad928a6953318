//! Time-bucketed scan tokens.
//!
//! A token binds a session id to the 300-second window in which it was
//! generated: `"{bucket}-{session_id}"`, where `bucket` is the epoch second
//! count floored to the window start. The bucket leads so that validation can
//! split on the first `-`; session ids may contain `-` (even with digits
//! after it) without making the encoding ambiguous.
//!
//! Tokens are never stored. They carry no signature: within the window the
//! token is plain, guessable text, and that is the extent of its security.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Width of the validity window, in seconds.
pub const BUCKET_SECONDS: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Invalid token format")]
    InvalidFormat,
    #[error("QR code has expired")]
    Expired,
}

/// Derives the token for `session_id` at `now`.
pub fn generate(session_id: &str, now: DateTime<Utc>) -> String {
    let secs = now.timestamp();
    let bucket = secs - secs.rem_euclid(BUCKET_SECONDS);
    format!("{bucket}-{session_id}")
}

/// Checks a token against `now` and extracts the session id.
///
/// A token is valid until `BUCKET_SECONDS` after the start of the bucket it
/// was generated in, so its effective lifetime depends on where in the window
/// it was issued. Validity is recomputed purely from the wall clock.
pub fn validate(token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
    let (bucket, session_id) = token.split_once('-').ok_or(TokenError::InvalidFormat)?;
    let bucket: i64 = bucket.parse().map_err(|_| TokenError::InvalidFormat)?;
    if session_id.is_empty() {
        return Err(TokenError::InvalidFormat);
    }

    if now.timestamp() - bucket > BUCKET_SECONDS {
        return Err(TokenError::Expired);
    }

    Ok(session_id.to_owned())
}
