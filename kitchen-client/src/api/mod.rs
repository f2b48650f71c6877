//! Typed API surfaces
//!
//! One module per backend area, each adding endpoint methods to
//! [`HttpClient`](crate::HttpClient). Create/update payloads are validated
//! locally before dispatch so a form error never leaves the client.
//! Non-idempotent creates go out with retries disabled.

mod auth;
mod avatar;
mod branch;
mod catalog;
mod company;
mod employee;
mod records;
mod schedule;
mod social;

use shared::{HttpError, HttpResult};
use validator::Validate;

/// Validate a payload, mapping field errors into the Validation kind
pub(crate) fn check<P: Validate>(payload: &P) -> HttpResult<()> {
    payload
        .validate()
        .map_err(|e| HttpError::validation(e.to_string()))
}
