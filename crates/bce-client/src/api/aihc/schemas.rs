use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle of an AI job as the control plane reports it. Values the SDK
/// does not know yet fold into `Unknown` instead of failing the decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum AiJobStatus {
    Creating,
    Pending,
    Running,
    Succeeded,
    Failed,
    Stopped,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AiJobStatus {
    /// Terminal states: the job will not transition again.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Stopped)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourcePool {
    pub resource_pool_id: String,
    pub name: String,
    pub status: String,
    pub k8s_version: String,
    pub node_count: u32,
    pub gpu_count: u32,
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListResourcePoolsResponse {
    pub resource_pools: Vec<ResourcePool>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeSummary {
    pub node_name: String,
    pub instance_id: String,
    pub status: String,
    pub gpu_type: String,
    pub gpu_count: u32,
    pub gpu_allocated: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListNodesResponse {
    pub nodes: Vec<NodeSummary>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

/// One schedulable resource ask, e.g. `baidu.com/a800_80g_cgpu: 8`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuantity {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub mount_path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAiJobRequest {
    pub name: String,
    pub job_framework: String,
    pub image: String,
    pub command: String,
    pub replicas: u32,
    pub resources: Vec<ResourceQuantity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub envs: Vec<EnvVar>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub datasources: Vec<DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl CreateAiJobRequest {
    /// A single-replica PyTorch job, the shape the job-chain stages submit.
    pub fn pytorch(name: impl Into<String>, image: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job_framework: "PyTorchJob".to_string(),
            image: image.into(),
            command: command.into(),
            replicas: 1,
            resources: Vec::new(),
            envs: Vec::new(),
            datasources: Vec::new(),
            priority: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAiJobResponse {
    pub job_id: String,
    pub job_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiJob {
    pub job_id: String,
    pub name: String,
    pub status: AiJobStatus,
    pub image: String,
    pub command: String,
    pub resource_pool_id: String,
    pub replicas: u32,
    pub created_at: String,
    pub finished_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListAiJobsResponse {
    pub jobs: Vec<AiJob>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: String,
    pub message: String,
    pub first_timestamp: String,
    pub last_timestamp: String,
    pub count: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodEventsResponse {
    pub pod_name: String,
    pub events: Vec<PodEvent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodLogsResponse {
    pub pod_name: String,
    pub logs: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub dataset_id: String,
    pub name: String,
    pub storage_type: String,
    pub storage_path: String,
    pub description: String,
    pub version_count: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatasetRequest {
    pub name: String,
    pub storage_type: String,
    pub storage_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDatasetResponse {
    pub dataset_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListDatasetsResponse {
    pub datasets: Vec<Dataset>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModifyDatasetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetVersion {
    pub version_id: String,
    pub storage_path: String,
    pub description: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatasetVersionRequest {
    pub storage_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDatasetVersionResponse {
    pub version_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListDatasetVersionsResponse {
    pub versions: Vec<DatasetVersion>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Model {
    pub model_id: String,
    pub name: String,
    pub model_format: String,
    pub description: String,
    pub version_count: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelRequest {
    pub name: String,
    pub model_format: String,
    pub source_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateModelResponse {
    pub model_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListModelsResponse {
    pub models: Vec<Model>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelVersion {
    pub version_id: String,
    pub source_path: String,
    pub description: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelVersionRequest {
    pub source_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateModelVersionResponse {
    pub version_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListModelVersionsResponse {
    pub versions: Vec<ModelVersion>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnlineService {
    pub service_id: String,
    pub name: String,
    pub status: String,
    pub image: String,
    pub replicas: u32,
    pub access_url: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: String,
    pub image: String,
    pub replicas: u32,
    pub resources: Vec<ResourceQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateServiceResponse {
    pub service_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListServicesResponse {
    pub services: Vec<OnlineService>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevInstance {
    pub dev_instance_id: String,
    pub name: String,
    pub status: String,
    pub image: String,
    pub access_url: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDevInstanceRequest {
    pub name: String,
    pub image: String,
    pub resources: Vec<ResourceQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDevInstanceResponse {
    pub dev_instance_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListDevInstancesResponse {
    pub dev_instances: Vec<DevInstance>,
    pub total_count: u32,
    pub page_no: u32,
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_status_tolerates_unknown_values() {
        let job: AiJob = serde_json::from_str(
            r#"{"jobId":"job-1","name":"train","status":"Queueing"}"#,
        )
        .unwrap();
        assert_eq!(job.status, AiJobStatus::Unknown);
        assert!(!job.status.is_finished());

        let job: AiJob =
            serde_json::from_str(r#"{"jobId":"job-1","status":"Running"}"#).unwrap();
        assert_eq!(job.status, AiJobStatus::Running);
    }

    #[test]
    fn create_job_request_marshals_camel_case() {
        let mut request = CreateAiJobRequest::pytorch("llama-train", "aiak:latest", "bash train.sh");
        request.resources.push(ResourceQuantity {
            name: "baidu.com/a800_80g_cgpu".to_string(),
            quantity: 8,
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["jobFramework"], "PyTorchJob");
        assert_eq!(json["resources"][0]["name"], "baidu.com/a800_80g_cgpu");
        // Optional sections stay off the wire entirely.
        assert!(json.get("envs").is_none());
        assert!(json.get("priority").is_none());
    }
}
