//! Client for CSN, the cloud smart network: CSN instances, attached network
//! instances, bandwidth packages and custom route rules.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "csn";
const CSN: &str = "/v1/csn";
const BP: &str = "/v1/csn/bp";

#[derive(Debug, Clone)]
pub struct CsnClient {
    http: HttpClient,
}

impl CsnClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    pub fn create_csn(&self, request: &CreateCsnRequest) -> Result<CreateCsnResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(CSN, query, Some(request))?)
    }

    pub fn update_csn(&self, csn_id: &str, request: &UpdateCsnRequest) -> Result<(), BceError> {
        Ok(self
            .http
            .put(&format!("{CSN}/{csn_id}"), Vec::new(), Some(request))?)
    }

    pub fn delete_csn(&self, csn_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{CSN}/{csn_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn list_csns(
        &self,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListCsnsResponse, BceError> {
        let query = Query::new()
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self.http.get_json(CSN, query)?)
    }

    pub fn get_csn(&self, csn_id: &str) -> Result<Csn, BceError> {
        Ok(self.http.get_json(&format!("{CSN}/{csn_id}"), Vec::new())?)
    }

    pub fn attach_instance(
        &self,
        csn_id: &str,
        request: &AttachInstanceRequest,
    ) -> Result<(), BceError> {
        let query = Query::new().flag("attach").client_token().build();
        Ok(self
            .http
            .put(&format!("{CSN}/{csn_id}"), query, Some(request))?)
    }

    pub fn detach_instance(
        &self,
        csn_id: &str,
        request: &AttachInstanceRequest,
    ) -> Result<(), BceError> {
        let query = Query::new().flag("detach").client_token().build();
        Ok(self
            .http
            .put(&format!("{CSN}/{csn_id}"), query, Some(request))?)
    }

    pub fn list_instances(
        &self,
        csn_id: &str,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListCsnInstancesResponse, BceError> {
        let query = Query::new()
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self
            .http
            .get_json(&format!("{CSN}/{csn_id}/instance"), query)?)
    }

    // ---- Bandwidth packages ----

    pub fn create_bandwidth_package(
        &self,
        request: &CreateBandwidthPackageRequest,
    ) -> Result<CreateBandwidthPackageResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(BP, query, Some(request))?)
    }

    pub fn list_bandwidth_packages(
        &self,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListBandwidthPackagesResponse, BceError> {
        let query = Query::new()
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self.http.get_json(BP, query)?)
    }

    pub fn resize_bandwidth_package(
        &self,
        csn_bp_id: &str,
        bandwidth: u32,
    ) -> Result<(), BceError> {
        let query = Query::new().flag("resize").client_token().build();
        Ok(self.http.put(
            &format!("{BP}/{csn_bp_id}"),
            query,
            Some(ResizeBandwidthPackageRequest { bandwidth }),
        )?)
    }

    pub fn bind_bandwidth_package(&self, csn_bp_id: &str, csn_id: &str) -> Result<(), BceError> {
        let query = Query::new().flag("bind").build();
        Ok(self.http.put(
            &format!("{BP}/{csn_bp_id}"),
            query,
            Some(BindBandwidthPackageRequest {
                csn_id: csn_id.to_string(),
            }),
        )?)
    }

    pub fn unbind_bandwidth_package(&self, csn_bp_id: &str, csn_id: &str) -> Result<(), BceError> {
        let query = Query::new().flag("unbind").build();
        Ok(self.http.put(
            &format!("{BP}/{csn_bp_id}"),
            query,
            Some(BindBandwidthPackageRequest {
                csn_id: csn_id.to_string(),
            }),
        )?)
    }

    pub fn delete_bandwidth_package(&self, csn_bp_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{BP}/{csn_bp_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    // ---- Route rules ----

    pub fn create_route_rule(
        &self,
        csn_id: &str,
        request: &CreateRouteRuleRequest,
    ) -> Result<(), BceError> {
        let query = Query::new().client_token().build();
        Ok(self
            .http
            .post(&format!("{CSN}/{csn_id}/routeRule"), query, Some(request))?)
    }

    pub fn list_route_rules(
        &self,
        csn_id: &str,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListRouteRulesResponse, BceError> {
        let query = Query::new()
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self
            .http
            .get_json(&format!("{CSN}/{csn_id}/routeRule"), query)?)
    }

    pub fn delete_route_rule(&self, csn_id: &str, rule_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{CSN}/{csn_id}/routeRule/{rule_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }
}
