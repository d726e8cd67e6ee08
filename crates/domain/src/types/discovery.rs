//! Target set schemas (discovery API)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Response from listing target sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTargetSetResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_sets: Vec<TargetSet>,
    /// Pagination cursor for the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b64_last_evaluated_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provision_format: Option<String>,
    #[serde(default)]
    pub enable_certificate_validation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Request body for adding target sets under a strong account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSetMapping {
    pub strong_account_id: String,
    pub target_sets: Vec<TargetSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTargetSetResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<TargetSetResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTargetSetResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<TargetSetResult>,
}

/// Per-target-set outcome of a bulk operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSetResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong_account_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_set_name: String,
    #[serde(default)]
    pub success: bool,
}

/// Filters for listing target sets
///
/// Parameters with empty values are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSetQuery {
    params: BTreeMap<String, String>,
}

impl TargetSetQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only target sets mapped to this strong account.
    #[must_use]
    pub fn strong_account_id(self, id: impl Into<String>) -> Self {
        self.param("strongAccountId", id)
    }

    /// Arbitrary filter parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Non-empty parameters in key order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

crate::impl_json_body!(ListTargetSetResponse, AddTargetSetResponse, DeleteTargetSetResponse);
