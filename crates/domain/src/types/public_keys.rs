//! SSH public key schemas

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Workspace selector for public key lookups
///
/// Both parameters are mandatory for the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyQuery {
    pub workspace_id: String,
    pub workspace_type: String,
}

impl PublicKeyQuery {
    #[must_use]
    pub fn new(workspace_id: impl Into<String>, workspace_type: impl Into<String>) -> Self {
        Self { workspace_id: workspace_id.into(), workspace_type: workspace_type.into() }
    }

    /// Query parameters, or `None` when either value is missing.
    #[must_use]
    pub fn pairs(&self) -> Option<[(&'static str, &str); 2]> {
        if self.workspace_id.is_empty() || self.workspace_type.is_empty() {
            return None;
        }
        Some([("workspaceId", self.workspace_id.as_str()), ("workspaceType", self.workspace_type.as_str())])
    }
}

/// Public key material
///
/// The service returns the key as raw text; it is wrapped here after the call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKey {
    pub public_key: String,
}

/// Base64 encoded installation command for the public key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyScript {
    #[serde(default, deserialize_with = "null_as_default")]
    pub base64_cmd: String,
}

crate::impl_json_body!(PublicKeyScript);
