//! Access policies

use dpa_domain::constants::ACCESS_POLICIES_PATH;
use dpa_domain::{AddPolicyResponse, ErrorResponse, ListPolicies, Policy};
use reqwest::Method;
use tracing::instrument;

use super::{DpaResult, POLICY_TIMEOUT};
use crate::api::{ApiError, ExecutionContext, Service};

fn policy_path(method: Method, policy_id: &str) -> Result<String, ApiError> {
    if policy_id.is_empty() {
        return Err(ApiError::invalid_request(
            method,
            format!("{ACCESS_POLICIES_PATH}/"),
            "policy id is required",
        ));
    }
    Ok(format!("{ACCESS_POLICIES_PATH}/{policy_id}"))
}

impl Service {
    /// List all access policies.
    ///
    /// # Errors
    /// See [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip_all)]
    pub async fn list_policies(&self, ctx: &ExecutionContext) -> DpaResult<ListPolicies> {
        let ctx = ctx.with_timeout(POLICY_TIMEOUT);
        self.get::<ListPolicies, ErrorResponse>(&ctx, ACCESS_POLICIES_PATH).await
    }

    /// Fetch one policy by id.
    ///
    /// # Errors
    /// [`ApiError::InvalidRequest`] for an empty id, otherwise see
    /// [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip(self, ctx))]
    pub async fn get_policy(&self, ctx: &ExecutionContext, policy_id: &str) -> DpaResult<Policy> {
        let path = policy_path(Method::GET, policy_id)?;
        let ctx = ctx.with_timeout(POLICY_TIMEOUT);
        self.get(&ctx, &path).await
    }

    /// Create a policy.
    ///
    /// # Errors
    /// See [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip_all, fields(policy_name = %policy.policy_name))]
    pub async fn add_policy(&self, ctx: &ExecutionContext, policy: &Policy) -> DpaResult<AddPolicyResponse> {
        let ctx = ctx.with_timeout(POLICY_TIMEOUT);
        self.post(&ctx, ACCESS_POLICIES_PATH, policy).await
    }

    /// Replace a policy.
    ///
    /// The service takes the replacement as a `POST` on the policy path.
    ///
    /// # Errors
    /// [`ApiError::InvalidRequest`] for an empty id, otherwise see
    /// [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip(self, ctx, policy))]
    pub async fn update_policy(
        &self,
        ctx: &ExecutionContext,
        policy_id: &str,
        policy: &Policy,
    ) -> DpaResult<Policy> {
        let path = policy_path(Method::POST, policy_id)?;
        let ctx = ctx.with_timeout(POLICY_TIMEOUT);
        self.post(&ctx, &path, policy).await
    }

    /// Delete a policy; the service answers with plain text.
    ///
    /// # Errors
    /// [`ApiError::InvalidRequest`] for an empty id, otherwise see
    /// [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip(self, ctx))]
    pub async fn delete_policy(&self, ctx: &ExecutionContext, policy_id: &str) -> DpaResult<String> {
        let path = policy_path(Method::DELETE, policy_id)?;
        let ctx = ctx.with_timeout(POLICY_TIMEOUT);
        self.delete(&ctx, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;

    #[test]
    fn test_policy_path() {
        assert_eq!(policy_path(Method::GET, "abc-123").unwrap(), "/access-policies/abc-123");
        let err = policy_path(Method::DELETE, "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert_eq!(err.method(), Some(&Method::DELETE));
    }
}
