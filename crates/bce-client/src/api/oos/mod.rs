//! Client for OOS, the operation orchestration service: templates of
//! operators and the executions that run them.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "oos";
const TEMPLATE: &str = "/api/logic/oos/v2/template";
const EXECUTION: &str = "/api/logic/oos/v2/execution";

#[derive(Debug, Clone)]
pub struct OosClient {
    http: HttpClient,
}

impl OosClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    pub fn create_template(&self, template: &Template) -> Result<(), BceError> {
        let response: Envelope<serde_json::Value> =
            self.http.post_json(TEMPLATE, Vec::new(), Some(template))?;
        expect_success(response.success)
    }

    /// Validate a template without saving it.
    pub fn check_template(&self, template: &Template) -> Result<CheckResult, BceError> {
        let response: Envelope<CheckResult> =
            self.http
                .post_json(&format!("{TEMPLATE}/check"), Vec::new(), Some(template))?;
        Ok(response.result)
    }

    pub fn update_template(&self, template: &Template) -> Result<(), BceError> {
        let response: Envelope<serde_json::Value> =
            self.http.put_json(TEMPLATE, Vec::new(), Some(template))?;
        expect_success(response.success)
    }

    pub fn get_template(&self, name: &str) -> Result<Template, BceError> {
        let query = Query::new().param("name", name).build();
        let response: Envelope<Template> = self.http.get_json(TEMPLATE, query)?;
        Ok(response.result)
    }

    pub fn list_templates(
        &self,
        page_no: u32,
        page_size: u32,
    ) -> Result<TemplateListResult, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        let response: Envelope<TemplateListResult> =
            self.http.get_json(&format!("{TEMPLATE}/list"), query)?;
        Ok(response.result)
    }

    pub fn delete_template(&self, name: &str) -> Result<(), BceError> {
        let query = Query::new().param("name", name).build();
        Ok(self
            .http
            .delete(TEMPLATE, query, None::<serde_json::Value>)?)
    }

    pub fn create_execution(
        &self,
        request: &CreateExecutionRequest,
    ) -> Result<Execution, BceError> {
        let response: Envelope<Execution> =
            self.http.post_json(EXECUTION, Vec::new(), Some(request))?;
        Ok(response.result)
    }

    pub fn get_execution(&self, id: &str) -> Result<Execution, BceError> {
        let query = Query::new().param("id", id).build();
        let response: Envelope<Execution> = self.http.get_json(EXECUTION, query)?;
        Ok(response.result)
    }

    pub fn list_executions(
        &self,
        page_no: u32,
        page_size: u32,
        state: Option<&str>,
    ) -> Result<ExecutionListResult, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .optional("state", state)
            .build();
        let response: Envelope<ExecutionListResult> =
            self.http.get_json(&format!("{EXECUTION}/list"), query)?;
        Ok(response.result)
    }
}

fn expect_success(success: bool) -> Result<(), BceError> {
    if success {
        Ok(())
    } else {
        Err(BceError::Unknown(
            "service reported success=false without an error envelope".to_string(),
        ))
    }
}
