//! Client for VPC network ACLs. ACLs ride on the BCC endpoint like the rest
//! of the VPC control plane.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "bcc";
const ACL: &str = "/v2/acl";

#[derive(Debug, Clone)]
pub struct VpcAclClient {
    http: HttpClient,
}

impl VpcAclClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    /// Every subnet of the VPC with the rules currently applied to it.
    pub fn list_acl_entries(&self, vpc_id: &str) -> Result<ListAclEntriesResponse, BceError> {
        Ok(self.http.get_json(&format!("{ACL}/{vpc_id}"), Vec::new())?)
    }

    pub fn create_acl_rules(&self, rules: Vec<AclRuleRequest>) -> Result<(), BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post(
            &format!("{ACL}/rule"),
            query,
            Some(CreateAclRulesRequest { acl_rules: rules }),
        )?)
    }

    pub fn list_acl_rules(
        &self,
        subnet_id: &str,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListAclRulesResponse, BceError> {
        let query = Query::new()
            .param("subnetId", subnet_id)
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self.http.get_json(&format!("{ACL}/rule"), query)?)
    }

    pub fn update_acl_rule(
        &self,
        acl_rule_id: &str,
        request: &UpdateAclRuleRequest,
    ) -> Result<(), BceError> {
        Ok(self
            .http
            .put(&format!("{ACL}/rule/{acl_rule_id}"), Vec::new(), Some(request))?)
    }

    pub fn delete_acl_rule(&self, acl_rule_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{ACL}/rule/{acl_rule_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }
}
