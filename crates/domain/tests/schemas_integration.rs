//! Integration tests for the DPA wire schemas
//!
//! Decodes realistic service payloads through the `ResponseBody` contract the
//! invocation engine uses.

use dpa_domain::{
    BodyKind, ConnectorOs, ConnectorType, ErrorResponse, GenerateScriptRequest, ListPolicies,
    Policy, ResponseBody, Settings, SettingsFeature, Token,
};

// ============================================================================
// Policies
// ============================================================================

/// Scenario: a tenant with one AWS policy granting SSH to a role
#[test]
fn test_policy_document_decodes() {
    let body = br#"{
        "policyName": "aws-prod-ssh",
        "status": "Enabled",
        "description": null,
        "providersData": {
            "AWS": {"regions": ["us-east-1"], "tags": [], "vpcIds": [], "accountIds": ["123456789012"]}
        },
        "startDate": null,
        "endDate": null,
        "userAccessRules": []
    }"#;

    let policy = Policy::from_body(body).expect("policy should decode");
    assert_eq!(policy.policy_name, "aws-prod-ssh");
    assert!(policy.description.is_none());
    assert!(policy.providers_data.aws.is_some());
}

#[test]
fn test_empty_policy_listing() {
    let listing = ListPolicies::from_body(br#"{"items": null, "totalCount": 0}"#).unwrap();
    assert!(listing.items.is_empty());
    assert_eq!(ListPolicies::KIND, BodyKind::Json);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_validation_error_with_field_details() {
    let body = br#"{
        "code": "DPA_VALIDATION",
        "message": "Invalid request",
        "description": "",
        "errors": [{"code": "REQUIRED", "message": "policyName is required", "description": "", "field": "policyName"}]
    }"#;

    let error = ErrorResponse::from_body(body).unwrap();
    assert_eq!(error.errors.len(), 1);
    assert_eq!(error.errors[0].field.as_deref(), Some("policyName"));
}

// ============================================================================
// Connectors and settings
// ============================================================================

#[test]
fn test_script_request_from_user_input() {
    let request = GenerateScriptRequest {
        connector_os: "Darwin".parse::<ConnectorOs>().unwrap(),
        connector_type: "azure".parse::<ConnectorType>().unwrap(),
    };
    let value = serde_json::to_value(request).unwrap();
    assert_eq!(value, serde_json::json!({"connectorOs": "darwin", "connectorType": "AZURE"}));
}

#[test]
fn test_settings_feature_path_segment() {
    let feature: SettingsFeature = "SSHCOMMANDAUDIT".parse().unwrap();
    assert_eq!(format!("/settings/{feature}"), "/settings/sshCommandAudit");
}

#[test]
fn test_settings_tolerates_missing_sections() {
    let settings = Settings::from_body(br#"{"rdpFileTransfer": {"enabled": true}}"#).unwrap();
    assert!(settings.mfa_caching.is_none());
    assert_eq!(settings.rdp_file_transfer.map(|s| s.enabled), Some(true));
}

// ============================================================================
// Tokens
// ============================================================================

#[test]
fn test_token_from_stored_json() {
    let token: Token = serde_json::from_str(
        r#"{"access_token": "abc", "token_type": "bearer", "expiry": "2099-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert!(token.is_valid());
    assert_eq!(token.authorization_value(), "Bearer abc");
}
