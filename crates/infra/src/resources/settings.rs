//! Tenant settings

use dpa_domain::constants::SETTINGS_PATH;
use dpa_domain::{FeatureSetting, Settings, SettingsFeature};
use tracing::instrument;

use super::{DpaResult, RESOURCE_TIMEOUT};
use crate::api::{ExecutionContext, Service};

impl Service {
    /// Fetch all tenant settings.
    ///
    /// # Errors
    /// See [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip_all)]
    pub async fn list_settings(&self, ctx: &ExecutionContext) -> DpaResult<Settings> {
        let ctx = ctx.with_timeout(RESOURCE_TIMEOUT);
        self.get(&ctx, SETTINGS_PATH).await
    }

    /// Fetch the configuration of a single feature.
    ///
    /// # Errors
    /// See [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip(self, ctx))]
    pub async fn get_settings_feature(
        &self,
        ctx: &ExecutionContext,
        feature: SettingsFeature,
    ) -> DpaResult<FeatureSetting> {
        let path = format!("{SETTINGS_PATH}/{feature}");
        let ctx = ctx.with_timeout(RESOURCE_TIMEOUT);
        self.get(&ctx, &path).await
    }

    /// Apply a partial settings update; unset sections are left untouched.
    ///
    /// # Errors
    /// See [`ApiClient::invoke`](crate::api::ApiClient::invoke).
    #[instrument(skip_all)]
    pub async fn update_settings(&self, ctx: &ExecutionContext, settings: &Settings) -> DpaResult<Settings> {
        let ctx = ctx.with_timeout(RESOURCE_TIMEOUT);
        self.patch(&ctx, SETTINGS_PATH, settings).await
    }
}
