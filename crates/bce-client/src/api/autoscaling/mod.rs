//! Client for Auto Scaling: scaling groups, attached nodes, scaling rules
//! and the execution records they leave behind.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "as";
const GROUPS: &str = "/v1/group";
const RULES: &str = "/v1/rule";
const RECORDS: &str = "/v1/record";

#[derive(Debug, Clone)]
pub struct AutoscalingClient {
    http: HttpClient,
}

impl AutoscalingClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    pub fn create_group(
        &self,
        request: &CreateGroupRequest,
    ) -> Result<CreateGroupResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(GROUPS, query, Some(request))?)
    }

    pub fn list_groups(
        &self,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListGroupsResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self.http.get_json(GROUPS, query)?)
    }

    pub fn get_group(&self, group_id: &str) -> Result<ScalingGroup, BceError> {
        Ok(self
            .http
            .get_json(&format!("{GROUPS}/{group_id}"), Vec::new())?)
    }

    pub fn delete_group(&self, group_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{GROUPS}/{group_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn list_group_nodes(
        &self,
        group_id: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListGroupNodesResponse, BceError> {
        let query = Query::new()
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self
            .http
            .get_json(&format!("{GROUPS}/{group_id}/node"), query)?)
    }

    /// Put existing instances under the group's management.
    pub fn attach_nodes(&self, group_id: &str, nodes: Vec<String>) -> Result<(), BceError> {
        let query = Query::new().flag("attach").build();
        Ok(self.http.post(
            &format!("{GROUPS}/{group_id}/node"),
            query,
            Some(GroupNodesRequest { nodes }),
        )?)
    }

    /// Release instances from the group without deleting them.
    pub fn detach_nodes(&self, group_id: &str, nodes: Vec<String>) -> Result<(), BceError> {
        let query = Query::new().flag("detach").build();
        Ok(self.http.post(
            &format!("{GROUPS}/{group_id}/node"),
            query,
            Some(GroupNodesRequest { nodes }),
        )?)
    }

    pub fn create_rule(&self, request: &CreateRuleRequest) -> Result<CreateRuleResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(RULES, query, Some(request))?)
    }

    pub fn list_rules(
        &self,
        group_id: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListRulesResponse, BceError> {
        let query = Query::new()
            .param("groupId", group_id)
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self.http.get_json(RULES, query)?)
    }

    pub fn update_rule(&self, rule_id: &str, request: &UpdateRuleRequest) -> Result<(), BceError> {
        Ok(self
            .http
            .put(&format!("{RULES}/{rule_id}"), Vec::new(), Some(request))?)
    }

    pub fn delete_rule(&self, rule_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{RULES}/{rule_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    /// Trigger the rule now instead of waiting for its schedule or alarm.
    pub fn execute_rule(&self, rule_id: &str) -> Result<(), BceError> {
        let query = Query::new().flag("execute").build();
        Ok(self.http.post(
            &format!("{RULES}/{rule_id}"),
            query,
            None::<serde_json::Value>,
        )?)
    }

    pub fn list_records(
        &self,
        group_id: &str,
        page_no: u32,
        page_size: u32,
    ) -> Result<ListRecordsResponse, BceError> {
        let query = Query::new()
            .param("groupId", group_id)
            .param("pageNo", page_no)
            .param("pageSize", page_size)
            .build();
        Ok(self.http.get_json(RECORDS, query)?)
    }
}
