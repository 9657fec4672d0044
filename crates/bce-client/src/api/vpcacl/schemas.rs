use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AclEntry {
    pub subnet_id: String,
    pub subnet_name: String,
    pub subnet_cidr: String,
    pub acl_rules: Vec<AclRule>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListAclEntriesResponse {
    pub vpc_id: String,
    pub acls: Vec<AclEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AclRule {
    pub id: String,
    pub subnet_id: String,
    /// `ingress` or `egress`.
    pub direction: String,
    pub protocol: String,
    pub source_ip_address: String,
    pub destination_ip_address: String,
    pub source_port: String,
    pub destination_port: String,
    pub position: u32,
    /// `allow` or `deny`.
    pub action: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AclRuleRequest {
    pub subnet_id: String,
    pub direction: String,
    pub protocol: String,
    pub source_ip_address: String,
    pub destination_ip_address: String,
    pub source_port: String,
    pub destination_port: String,
    /// Evaluation order; lower positions match first.
    pub position: u32,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAclRulesRequest {
    pub acl_rules: Vec<AclRuleRequest>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListAclRulesResponse {
    pub acl_rules: Vec<AclRule>,
    pub marker: String,
    pub next_marker: String,
    pub max_keys: u32,
    pub is_truncated: bool,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAclRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
