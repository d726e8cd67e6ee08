//! Request and response schemas for the DPA resources
//!
//! Field names follow the service's JSON exactly (it mixes camelCase,
//! snake_case and capitalised keys across resources).

pub mod connectors;
pub mod discovery;
pub mod error;
pub mod policies;
pub mod public_keys;
pub mod settings;

pub use connectors::{ConnectorOs, ConnectorType, GenerateScriptRequest, GenerateScriptResponse};
pub use discovery::{
    AddTargetSetResponse, DeleteTargetSetResponse, ListTargetSetResponse, TargetSet,
    TargetSetMapping, TargetSetQuery, TargetSetResult,
};
pub use error::{ErrorResponse, FieldError};
pub use policies::{
    AddPolicyResponse, AwsProvider, AzureProvider, ConnectAs, ConnectAsAws, ConnectAsAzure,
    ConnectAsGcp, ConnectAsOnPrem, ConnectionInformation, FqdnRule, GcpProvider,
    ListPolicies, LocalEphemeralUser, OnPremProvider, Policy, PolicySummary, Principal,
    ProvidersData, RdpConnection, ResourceTag, UserAccessRule, UserData,
};
pub use public_keys::{PublicKey, PublicKeyQuery, PublicKeyScript};
pub use settings::{
    CertificateValidation, FeatureConf, FeatureSetting, MfaCaching, RdpFileTransfer,
    Settings, SettingsFeature, SshCommandAudit, StandingAccess,
};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default.
///
/// The service sends `null` for empty strings and lists in several places.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
