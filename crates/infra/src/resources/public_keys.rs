//! Workspace SSH public keys

use dpa_domain::constants::{PUBLIC_KEYS_PATH, PUBLIC_KEY_SCRIPTS_PATH};
use dpa_domain::{ErrorResponse, PublicKey, PublicKeyQuery, PublicKeyScript};
use reqwest::Method;
use tracing::instrument;

use super::{with_query, DpaResult, RESOURCE_TIMEOUT};
use crate::api::{ApiError, ExecutionContext, Service};

fn public_key_path(base: &str, query: &PublicKeyQuery) -> Result<String, ApiError> {
    let pairs = query.pairs().ok_or_else(|| {
        ApiError::invalid_request(Method::GET, base, "workspaceId and workspaceType are required")
    })?;
    Ok(with_query(base, pairs))
}

impl Service {
    /// Fetch the public key of a workspace.
    ///
    /// The service returns the key as plain text.
    ///
    /// # Errors
    /// [`ApiError::InvalidRequest`] when either query field is empty,
    /// otherwise see [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip(self, ctx))]
    pub async fn get_public_key(
        &self,
        ctx: &ExecutionContext,
        query: &PublicKeyQuery,
    ) -> DpaResult<PublicKey> {
        let path = public_key_path(PUBLIC_KEYS_PATH, query)?;
        let ctx = ctx.with_timeout(RESOURCE_TIMEOUT);
        let outcome = self.get::<String, ErrorResponse>(&ctx, &path).await?;
        Ok(outcome.map(|public_key| PublicKey { public_key }))
    }

    /// Fetch the base64 encoded installation command for the public key.
    ///
    /// # Errors
    /// [`ApiError::InvalidRequest`] when either query field is empty,
    /// otherwise see [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip(self, ctx))]
    pub async fn get_public_key_script(
        &self,
        ctx: &ExecutionContext,
        query: &PublicKeyQuery,
    ) -> DpaResult<PublicKeyScript> {
        let path = public_key_path(PUBLIC_KEY_SCRIPTS_PATH, query)?;
        let ctx = ctx.with_timeout(RESOURCE_TIMEOUT);
        self.get(&ctx, &path).await
    }
}
