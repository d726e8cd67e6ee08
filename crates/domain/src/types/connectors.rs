//! Connector setup-script schemas
//!
//! The operating system and platform are closed sets, so an invalid
//! combination cannot be constructed.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Operating system the connector is installed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorOs {
    #[serde(rename = "linux")]
    Linux,
    #[serde(rename = "windows")]
    Windows,
    #[serde(rename = "darwin")]
    Darwin,
}

crate::impl_wire_name_conversions!(ConnectorOs {
    Linux => "linux",
    Windows => "windows",
    Darwin => "darwin",
});

/// Platform hosting the connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorType {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "AZURE")]
    Azure,
    #[serde(rename = "GCP")]
    Gcp,
    #[serde(rename = "ON-PREMISE")]
    OnPremise,
}

crate::impl_wire_name_conversions!(ConnectorType {
    Aws => "AWS",
    Azure => "AZURE",
    Gcp => "GCP",
    OnPremise => "ON-PREMISE",
});

/// Request body for generating a connector setup script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScriptRequest {
    pub connector_os: ConnectorOs,
    pub connector_type: ConnectorType,
}

impl Default for GenerateScriptRequest {
    /// The service's own default: a Linux connector in AWS.
    fn default() -> Self {
        Self { connector_os: ConnectorOs::Linux, connector_type: ConnectorType::Aws }
    }
}

/// Signed script location and the one-line installer command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateScriptResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub script_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bash_cmd: String,
}

crate::impl_json_body!(GenerateScriptResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = GenerateScriptRequest {
            connector_os: ConnectorOs::Windows,
            connector_type: ConnectorType::OnPremise,
        };
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value, serde_json::json!({"connectorOs": "windows", "connectorType": "ON-PREMISE"}));
    }

    #[test]
    fn test_parse_user_input() {
        assert_eq!("LINUX".parse::<ConnectorOs>().unwrap(), ConnectorOs::Linux);
        assert_eq!("azure".parse::<ConnectorType>().unwrap(), ConnectorType::Azure);
        assert!("solaris".parse::<ConnectorOs>().is_err());
        assert!("IBM".parse::<ConnectorType>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        for kind in [ConnectorType::Aws, ConnectorType::Azure, ConnectorType::Gcp, ConnectorType::OnPremise] {
            let value = serde_json::to_value(kind).unwrap();
            assert_eq!(value, kind.to_string());
        }
    }
}
