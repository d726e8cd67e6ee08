//! Connector setup scripts

use dpa_domain::constants::CONNECTOR_SETUP_SCRIPT_PATH;
use dpa_domain::{GenerateScriptRequest, GenerateScriptResponse};
use tracing::instrument;

use super::{DpaResult, RESOURCE_TIMEOUT};
use crate::api::{ExecutionContext, Service};

impl Service {
    /// Generate a connector installation script for the requested platform.
    ///
    /// # Errors
    /// See [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip(self, ctx), fields(os = %request.connector_os, platform = %request.connector_type))]
    pub async fn generate_script(
        &self,
        ctx: &ExecutionContext,
        request: &GenerateScriptRequest,
    ) -> DpaResult<GenerateScriptResponse> {
        let ctx = ctx.with_timeout(RESOURCE_TIMEOUT);
        self.post(&ctx, CONNECTOR_SETUP_SCRIPT_PATH, request).await
    }
}
