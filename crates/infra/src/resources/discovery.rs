//! Target sets

use dpa_domain::constants::{TARGET_SETS_BULK_PATH, TARGET_SETS_PATH};
use dpa_domain::{
    AddTargetSetResponse, DeleteTargetSetResponse, ListTargetSetResponse, TargetSetMapping,
    TargetSetQuery,
};
use reqwest::Method;
use tracing::instrument;

use super::{with_query, DpaResult, RESOURCE_TIMEOUT};
use crate::api::{ApiError, ExecutionContext, Service};

impl Service {
    /// List target sets matching `query`.
    ///
    /// # Errors
    /// See [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip_all)]
    pub async fn list_target_sets(
        &self,
        ctx: &ExecutionContext,
        query: &TargetSetQuery,
    ) -> DpaResult<ListTargetSetResponse> {
        let path = with_query(TARGET_SETS_PATH, query.pairs());
        let ctx = ctx.with_timeout(RESOURCE_TIMEOUT);
        self.get(&ctx, &path).await
    }

    /// Map target sets to a strong account.
    ///
    /// # Errors
    /// See [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip_all, fields(strong_account_id = %mapping.strong_account_id, count = mapping.target_sets.len()))]
    pub async fn add_target_sets(
        &self,
        ctx: &ExecutionContext,
        mapping: &TargetSetMapping,
    ) -> DpaResult<AddTargetSetResponse> {
        let ctx = ctx.with_timeout(RESOURCE_TIMEOUT);
        self.post(&ctx, TARGET_SETS_PATH, mapping).await
    }

    /// Delete target sets by name.
    ///
    /// # Errors
    /// [`ApiError::InvalidRequest`] for an empty name list, otherwise see
    /// [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip(self, ctx))]
    pub async fn delete_target_sets(
        &self,
        ctx: &ExecutionContext,
        names: &[String],
    ) -> DpaResult<DeleteTargetSetResponse> {
        if names.is_empty() {
            return Err(ApiError::invalid_request(
                Method::DELETE,
                TARGET_SETS_BULK_PATH,
                "at least one target set name is required",
            ));
        }
        let ctx = ctx.with_timeout(RESOURCE_TIMEOUT);
        self.delete_with(&ctx, TARGET_SETS_BULK_PATH, names).await
    }
}
