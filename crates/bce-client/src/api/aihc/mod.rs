//! Client for AIHC, the heterogeneous-computing platform: resource pools,
//! AI jobs, datasets, models, online services and dev instances.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "aihc";
const POOLS: &str = "/api/v1/resourcepools";
const JOBS: &str = "/api/v1/aijobs";
const DATASETS: &str = "/api/v1/datasets";
const MODELS: &str = "/api/v1/models";
const SERVICES: &str = "/api/v1/services";
const DEV_INSTANCES: &str = "/api/v1/devinstances";

#[derive(Debug, Clone)]
pub struct AihcClient {
    http: HttpClient,
}

impl AihcClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    // ---- Resource pools ----

    pub fn list_resource_pools(
        &self,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListResourcePoolsResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self.http.get_json(POOLS, query)?)
    }

    pub fn get_resource_pool(&self, resource_pool_id: &str) -> Result<ResourcePool, BceError> {
        Ok(self
            .http
            .get_json(&format!("{POOLS}/{resource_pool_id}"), Vec::new())?)
    }

    pub fn list_resource_pool_nodes(
        &self,
        resource_pool_id: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListNodesResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self
            .http
            .get_json(&format!("{POOLS}/{resource_pool_id}/nodes"), query)?)
    }

    // ---- AI jobs ----

    /// Submit a job to the given resource pool. The create carries a
    /// `clientToken` so a retried call does not start the job twice.
    pub fn create_job(
        &self,
        resource_pool_id: &str,
        request: &CreateAiJobRequest,
    ) -> Result<CreateAiJobResponse, BceError> {
        let query = Query::new()
            .param("resourcePoolId", resource_pool_id)
            .client_token()
            .build();
        Ok(self.http.post_json(JOBS, query, Some(request))?)
    }

    pub fn list_jobs(
        &self,
        resource_pool_id: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListAiJobsResponse, BceError> {
        let query = Query::new()
            .param("resourcePoolId", resource_pool_id)
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self.http.get_json(JOBS, query)?)
    }

    pub fn get_job(&self, resource_pool_id: &str, job_id: &str) -> Result<AiJob, BceError> {
        let query = Query::new()
            .param("resourcePoolId", resource_pool_id)
            .build();
        Ok(self.http.get_json(&format!("{JOBS}/{job_id}"), query)?)
    }

    pub fn stop_job(&self, resource_pool_id: &str, job_id: &str) -> Result<(), BceError> {
        let query = Query::new()
            .param("resourcePoolId", resource_pool_id)
            .build();
        Ok(self.http.post(
            &format!("{JOBS}/{job_id}/stop"),
            query,
            None::<serde_json::Value>,
        )?)
    }

    pub fn delete_job(&self, resource_pool_id: &str, job_id: &str) -> Result<(), BceError> {
        let query = Query::new()
            .param("resourcePoolId", resource_pool_id)
            .build();
        Ok(self.http.delete(
            &format!("{JOBS}/{job_id}"),
            query,
            None::<serde_json::Value>,
        )?)
    }

    /// Scheduler and kubelet events for one pod of the job.
    pub fn get_pod_events(
        &self,
        resource_pool_id: &str,
        job_id: &str,
        pod_name: &str,
    ) -> Result<PodEventsResponse, BceError> {
        let query = Query::new()
            .param("resourcePoolId", resource_pool_id)
            .build();
        Ok(self
            .http
            .get_json(&format!("{JOBS}/{job_id}/pods/{pod_name}/events"), query)?)
    }

    /// Tail of the pod's stdout/stderr; `tail_lines = None` means the
    /// server-side default window.
    pub fn get_pod_logs(
        &self,
        resource_pool_id: &str,
        job_id: &str,
        pod_name: &str,
        tail_lines: Option<u32>,
    ) -> Result<PodLogsResponse, BceError> {
        let query = Query::new()
            .param("resourcePoolId", resource_pool_id)
            .optional("tailLines", tail_lines)
            .build();
        Ok(self
            .http
            .get_json(&format!("{JOBS}/{job_id}/pods/{pod_name}/logs"), query)?)
    }

    // ---- Datasets ----

    pub fn create_dataset(
        &self,
        request: &CreateDatasetRequest,
    ) -> Result<CreateDatasetResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(DATASETS, query, Some(request))?)
    }

    pub fn list_datasets(
        &self,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListDatasetsResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self.http.get_json(DATASETS, query)?)
    }

    pub fn get_dataset(&self, dataset_id: &str) -> Result<Dataset, BceError> {
        Ok(self
            .http
            .get_json(&format!("{DATASETS}/{dataset_id}"), Vec::new())?)
    }

    pub fn modify_dataset(
        &self,
        dataset_id: &str,
        request: &ModifyDatasetRequest,
    ) -> Result<(), BceError> {
        Ok(self
            .http
            .put(&format!("{DATASETS}/{dataset_id}"), Vec::new(), Some(request))?)
    }

    pub fn delete_dataset(&self, dataset_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{DATASETS}/{dataset_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn create_dataset_version(
        &self,
        dataset_id: &str,
        request: &CreateDatasetVersionRequest,
    ) -> Result<CreateDatasetVersionResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self
            .http
            .post_json(&format!("{DATASETS}/{dataset_id}/versions"), query, Some(request))?)
    }

    pub fn list_dataset_versions(
        &self,
        dataset_id: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListDatasetVersionsResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self
            .http
            .get_json(&format!("{DATASETS}/{dataset_id}/versions"), query)?)
    }

    pub fn delete_dataset_version(
        &self,
        dataset_id: &str,
        version_id: &str,
    ) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{DATASETS}/{dataset_id}/versions/{version_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    // ---- Models ----

    pub fn create_model(
        &self,
        request: &CreateModelRequest,
    ) -> Result<CreateModelResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(MODELS, query, Some(request))?)
    }

    pub fn list_models(
        &self,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListModelsResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self.http.get_json(MODELS, query)?)
    }

    pub fn get_model(&self, model_id: &str) -> Result<Model, BceError> {
        Ok(self
            .http
            .get_json(&format!("{MODELS}/{model_id}"), Vec::new())?)
    }

    pub fn delete_model(&self, model_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{MODELS}/{model_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn create_model_version(
        &self,
        model_id: &str,
        request: &CreateModelVersionRequest,
    ) -> Result<CreateModelVersionResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self
            .http
            .post_json(&format!("{MODELS}/{model_id}/versions"), query, Some(request))?)
    }

    pub fn list_model_versions(
        &self,
        model_id: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListModelVersionsResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self
            .http
            .get_json(&format!("{MODELS}/{model_id}/versions"), query)?)
    }

    pub fn delete_model_version(&self, model_id: &str, version_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{MODELS}/{model_id}/versions/{version_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    // ---- Online services ----

    pub fn create_service(
        &self,
        request: &CreateServiceRequest,
    ) -> Result<CreateServiceResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(SERVICES, query, Some(request))?)
    }

    pub fn list_services(
        &self,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListServicesResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self.http.get_json(SERVICES, query)?)
    }

    pub fn get_service(&self, service_id: &str) -> Result<OnlineService, BceError> {
        Ok(self
            .http
            .get_json(&format!("{SERVICES}/{service_id}"), Vec::new())?)
    }

    pub fn update_service(
        &self,
        service_id: &str,
        request: &UpdateServiceRequest,
    ) -> Result<(), BceError> {
        Ok(self
            .http
            .put(&format!("{SERVICES}/{service_id}"), Vec::new(), Some(request))?)
    }

    pub fn delete_service(&self, service_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{SERVICES}/{service_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    // ---- Dev instances ----

    pub fn create_dev_instance(
        &self,
        request: &CreateDevInstanceRequest,
    ) -> Result<CreateDevInstanceResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(DEV_INSTANCES, query, Some(request))?)
    }

    pub fn list_dev_instances(
        &self,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListDevInstancesResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self.http.get_json(DEV_INSTANCES, query)?)
    }

    pub fn get_dev_instance(&self, dev_instance_id: &str) -> Result<DevInstance, BceError> {
        Ok(self
            .http
            .get_json(&format!("{DEV_INSTANCES}/{dev_instance_id}"), Vec::new())?)
    }

    pub fn start_dev_instance(&self, dev_instance_id: &str) -> Result<(), BceError> {
        Ok(self.http.post(
            &format!("{DEV_INSTANCES}/{dev_instance_id}/start"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn stop_dev_instance(&self, dev_instance_id: &str) -> Result<(), BceError> {
        Ok(self.http.post(
            &format!("{DEV_INSTANCES}/{dev_instance_id}/stop"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn delete_dev_instance(&self, dev_instance_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{DEV_INSTANCES}/{dev_instance_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }
}
