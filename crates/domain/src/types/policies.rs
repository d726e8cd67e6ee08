//! Access policy schemas

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Response from adding a policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPolicyResponse {
    pub policy_id: String,
}

/// Response from listing policies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPolicies {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<PolicySummary>,
    #[serde(default)]
    pub total_count: u64,
}

/// Policy entry in a listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule_names: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
}

/// Full access policy, used both as request payload and response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub policy_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub providers_data: ProvidersData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_access_rules: Vec<UserAccessRule>,
}

/// Cloud and on-premise scoping of a policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersData {
    #[serde(rename = "AWS", default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsProvider>,
    #[serde(rename = "Azure", default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzureProvider>,
    #[serde(rename = "OnPrem", default, skip_serializing_if = "Option::is_none")]
    pub on_prem: Option<OnPremProvider>,
    #[serde(rename = "GCP", default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<GcpProvider>,
}

/// Key with one or more values (AWS/Azure tags, GCP labels)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value", default, deserialize_with = "null_as_default")]
    pub value: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsProvider {
    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<ResourceTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureProvider {
    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<ResourceTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_groups: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vnet_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FqdnRule {
    pub operator: String,
    pub computername_pattern: String,
    pub domain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnPremProvider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn_rules_conjunction: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fqdn_rules: Vec<FqdnRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcpProvider {
    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<ResourceTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<String>,
}

/// Role, group or user reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(rename = "Roles", default, deserialize_with = "null_as_default")]
    pub roles: Vec<Principal>,
    #[serde(rename = "Groups", default, deserialize_with = "null_as_default")]
    pub groups: Vec<Principal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<Principal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalEphemeralUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub assign_groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdpConnection {
    pub local_ephemeral_user: LocalEphemeralUser,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectAsAws {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdp: Option<RdpConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectAsAzure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectAsOnPrem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdp: Option<RdpConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectAsGcp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh: Option<String>,
}

/// Per-platform identity used when connecting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectAs {
    #[serde(rename = "AWS", default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<ConnectAsAws>,
    #[serde(rename = "Azure", default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<ConnectAsAzure>,
    #[serde(rename = "OnPrem", default, skip_serializing_if = "Option::is_none")]
    pub on_prem: Option<ConnectAsOnPrem>,
    #[serde(rename = "GCP", default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<ConnectAsGcp>,
}

/// Access window and session limits for a rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInformation {
    #[serde(default)]
    pub connect_as: ConnectAs,
    /// Maximum session length in hours
    #[serde(default)]
    pub grant_access: u32,
    /// Idle timeout in minutes
    #[serde(default)]
    pub idle_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub days_of_week: Vec<String>,
    #[serde(default)]
    pub full_days: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccessRule {
    pub rule_name: String,
    #[serde(default)]
    pub user_data: UserData,
    #[serde(default)]
    pub connection_information: ConnectionInformation,
}

crate::impl_json_body!(AddPolicyResponse, ListPolicies, Policy);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_policy() -> Policy {
        Policy {
            policy_name: "Test Policy".into(),
            status: "Enabled".into(),
            providers_data: ProvidersData {
                aws: Some(AwsProvider { regions: vec!["us-east-1".into()], ..Default::default() }),
                ..Default::default()
            },
            start_date: Some("2024-01-10".into()),
            end_date: Some("2025-01-10".into()),
            user_access_rules: vec![UserAccessRule {
                rule_name: "Example Rule".into(),
                user_data: UserData {
                    roles: vec![Principal { name: "Example Role".into(), source: None }],
                    ..Default::default()
                },
                connection_information: ConnectionInformation {
                    connect_as: ConnectAs {
                        aws: Some(ConnectAsAws { ssh: Some("ec2-user".into()), rdp: None }),
                        ..Default::default()
                    },
                    grant_access: 3,
                    idle_time: 10,
                    days_of_week: vec!["Mon".into(), "Tue".into()],
                    full_days: true,
                    time_zone: Some("Asia/Jerusalem".into()),
                    ..Default::default()
                },
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_policy_serializes_service_field_names() {
        let value = serde_json::to_value(sample_policy()).unwrap();
        assert_eq!(value["policyName"], "Test Policy");
        assert_eq!(value["providersData"]["AWS"]["regions"][0], "us-east-1");
        assert!(value["providersData"].get("Azure").is_none());
        let rule = &value["userAccessRules"][0];
        assert_eq!(rule["userData"]["Roles"][0]["name"], "Example Role");
        assert_eq!(rule["connectionInformation"]["connectAs"]["AWS"]["ssh"], "ec2-user");
        assert_eq!(rule["connectionInformation"]["grantAccess"], 3);
    }

    #[test]
    fn test_list_policies_tolerates_nulls() {
        let body = r#"{"items":[{"policyId":"abc","status":"Enabled","policyName":"p",
            "description":null,"ruleNames":null,"platforms":["AWS"]}],"totalCount":1}"#;
        let list: ListPolicies = serde_json::from_str(body).unwrap();
        assert_eq!(list.total_count, 1);
        assert_eq!(list.items[0].policy_id, "abc");
        assert!(list.items[0].rule_names.is_empty());
        assert!(list.items[0].description.is_none());
    }

    #[test]
    fn test_empty_list() {
        let list: ListPolicies = serde_json::from_str(r#"{"items":[],"totalCount":0}"#).unwrap();
        assert_eq!(list, ListPolicies::default());
    }
}
