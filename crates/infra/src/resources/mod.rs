//! Resource operations on [`Service`](crate::api::Service)
//!
//! Each operation maps a path, a typed request and a typed response onto the
//! generic verbs, under its own deadline derived from the caller's context.
//! Structured error bodies come back as
//! [`ApiOutcome::DomainError`](crate::api::ApiOutcome::DomainError).

mod connectors;
mod discovery;
mod policies;
mod public_keys;
mod settings;

use std::time::Duration;

use dpa_domain::constants::{POLICY_CALL_TIMEOUT_SECS, RESOURCE_CALL_TIMEOUT_SECS};
use dpa_domain::ErrorResponse;

use crate::api::{ApiError, ApiOutcome};

/// Result of a resource operation.
pub type DpaResult<T> = Result<ApiOutcome<T, ErrorResponse>, ApiError>;

const POLICY_TIMEOUT: Duration = Duration::from_secs(POLICY_CALL_TIMEOUT_SECS);
const RESOURCE_TIMEOUT: Duration = Duration::from_secs(RESOURCE_CALL_TIMEOUT_SECS);

/// Append form-encoded `pairs` to `path`; no `?` when there are none.
fn with_query<'a>(path: &str, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
