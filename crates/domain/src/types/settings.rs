//! Tenant settings schemas

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Settings features addressable individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsFeature {
    MfaCaching,
    SshCommandAudit,
}

crate::impl_wire_name_conversions!(SettingsFeature {
    MfaCaching => "mfaCaching",
    SshCommandAudit => "sshCommandAudit",
});

/// All tenant settings
///
/// Used both as the `PATCH` payload and the response; unset sections are
/// left out of the payload so a partial update only touches what it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_caching: Option<MfaCaching>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_command_audit: Option<SshCommandAudit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standing_access: Option<StandingAccess>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdp_file_transfer: Option<RdpFileTransfer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_validation: Option<CertificateValidation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaCaching {
    #[serde(default)]
    pub is_mfa_caching_enabled: bool,
    #[serde(default)]
    pub key_expiration_time_sec: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshCommandAudit {
    #[serde(default)]
    pub is_command_parsing_for_audit_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shell_prompt_for_audit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingAccess {
    #[serde(default)]
    pub standing_access_available: bool,
    /// Seconds
    #[serde(default)]
    pub session_max_duration: u64,
    /// Seconds
    #[serde(default)]
    pub session_idle_time: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdpFileTransfer {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateValidation {
    #[serde(default)]
    pub enabled: bool,
}

/// Single feature returned by `GET /settings/{feature}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSetting {
    #[serde(default, deserialize_with = "null_as_default")]
    pub feature_name: String,
    #[serde(default)]
    pub feature_conf: FeatureConf,
}

/// Union of the per-feature configuration fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureConf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mfa_caching_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_expiration_time_sec: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_command_parsing_for_audit_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_prompt_for_audit: Option<String>,
}

crate::impl_json_body!(Settings, FeatureSetting);
