use serde::{Deserialize, Serialize};

/// OOS wraps every reply in `{success, result}`; the clients unwrap it and
/// hand back the `result` payload.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Envelope<T: Default> {
    pub success: bool,
    pub result: T,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Operator {
    pub name: String,
    /// Operator kind, e.g. `BCE::BCC::StopInstance` or `BCE::Shell`.
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    pub name: String,
    pub description: String,
    /// `ASSIGN` runs operators in listed order.
    pub linear: bool,
    pub operators: Vec<Operator>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub operator_count: u32,
    pub create_time: String,
    pub update_time: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateListResult {
    pub templates: Vec<TemplateSummary>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckResult {
    pub valid: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExecutionRequest {
    pub template_name: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Execution {
    pub id: String,
    pub template_name: String,
    /// `RUNNING`, `SUCCESS`, `FAILED` or `CANCELED`.
    pub state: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionListResult {
    pub executions: Vec<Execution>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}
