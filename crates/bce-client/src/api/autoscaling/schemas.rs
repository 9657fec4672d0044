use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScalingGroup {
    pub group_id: String,
    pub group_name: String,
    pub status: String,
    pub vpc_id: String,
    pub node_count: u32,
    pub min_node_num: u32,
    pub max_node_num: u32,
    pub expect_num: u32,
    pub create_time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub group_name: String,
    pub vpc_id: String,
    pub subnet_ids: Vec<String>,
    pub min_node_num: u32,
    pub max_node_num: u32,
    pub expect_num: u32,
    pub spec: String,
    pub image_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGroupResponse {
    pub group_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListGroupsResponse {
    pub groups: Vec<ScalingGroup>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupNode {
    pub instance_id: String,
    pub instance_name: String,
    pub status: String,
    pub floating_ip: String,
    pub internal_ip: String,
    /// `AUTO` for nodes the group scaled out itself, `MANUAL` for attached ones.
    pub node_type: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListGroupNodesResponse {
    pub nodes: Vec<GroupNode>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNodesRequest {
    pub nodes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleRequest {
    pub rule_name: String,
    pub group_id: String,
    /// `PERIOD` for cron-style rules, `ALARM` for metric-triggered ones.
    pub rule_type: String,
    /// `INCREASE`, `DECREASE` or `ADJUST`.
    pub action_type: String,
    pub action_num: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown_in_seconds: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRuleResponse {
    pub rule_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScalingRule {
    pub rule_id: String,
    pub rule_name: String,
    pub group_id: String,
    pub rule_type: String,
    pub action_type: String,
    pub action_num: u32,
    pub cron_expression: String,
    pub state: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRulesResponse {
    pub rules: Vec<ScalingRule>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScalingRecord {
    pub record_id: String,
    pub group_id: String,
    pub rule_id: String,
    pub action_type: String,
    pub action_num: u32,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRecordsResponse {
    pub records: Vec<ScalingRecord>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}
